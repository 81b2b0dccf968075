use anyhow::{Context, Result};
use luis_programmatic::{CreateAppRequest, Example, LuisProgClient};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{
    AddExampleArgs, AppCommand, Command, ExampleCommand, ModelCommand, PublishArgs, TrainCommand,
    VersionScope,
};

/// Run one command. `None` means the operation has no result to print.
///
/// # Errors
///
/// Propagates client failures with the operation as context.
pub async fn run(client: &LuisProgClient, command: Command) -> Result<Option<Value>> {
    match command {
        Command::Apps { action } => apps(client, action).await,
        Command::Intents { scope, action } => {
            let (app_id, version_id) = scope.require()?;
            intents(client, app_id, version_id, action).await
        }
        Command::Entities { scope, action } => {
            let (app_id, version_id) = scope.require()?;
            entities(client, app_id, version_id, action).await
        }
        Command::Examples {
            action: ExampleCommand::Add(args),
        } => add_example(client, args).await,
        Command::Train { scope, action } => {
            let (app_id, version_id) = scope.require()?;
            match action {
                TrainCommand::Start => output(client.train(app_id, version_id).await?),
                TrainCommand::Status => output(
                    client
                        .get_training_status_list(app_id, version_id)
                        .await
                        .context("failed to read training status")?,
                ),
            }
        }
        Command::Publish(args) => publish(client, args).await,
    }
}

impl VersionScope {
    fn require(&self) -> Result<(&str, &str)> {
        let app_id = self.app_id.as_deref().context("--app is required")?;
        let version_id = self
            .version_id
            .as_deref()
            .context("--version-id is required")?;
        Ok((app_id, version_id))
    }
}

fn output<T: Serialize>(value: T) -> Result<Option<Value>> {
    Ok(Some(serde_json::to_value(value)?))
}

async fn apps(client: &LuisProgClient, action: AppCommand) -> Result<Option<Value>> {
    match action {
        AppCommand::List => output(client.get_all_apps().await?),
        AppCommand::Get { id } => output(client.get_app_by_id(&id).await?),
        AppCommand::Find { name } => output(client.get_app_by_name(&name).await?),
        AppCommand::Create(args) => {
            let request = CreateAppRequest {
                name: args.name,
                description: args.description,
                culture: args.culture,
                usage_scenario: args.usage_scenario,
                domain: args.domain,
                initial_version_id: args.initial_version_id,
            };
            let id = client
                .add_app(&request)
                .await
                .context("failed to create app")?;
            output(id)
        }
        AppCommand::Rename {
            id,
            name,
            description,
        } => {
            client
                .rename_app(&id, &name, description.as_deref())
                .await
                .with_context(|| format!("failed to rename app {id}"))?;
            Ok(None)
        }
        AppCommand::Delete { id } => {
            client
                .delete_app(&id)
                .await
                .with_context(|| format!("failed to delete app {id}"))?;
            Ok(None)
        }
    }
}

async fn intents(
    client: &LuisProgClient,
    app_id: &str,
    version_id: &str,
    action: ModelCommand,
) -> Result<Option<Value>> {
    match action {
        ModelCommand::List => output(client.get_all_intents(app_id, version_id).await?),
        ModelCommand::Get { id } => {
            output(client.get_intent_by_id(app_id, version_id, &id).await?)
        }
        ModelCommand::Find { name } => {
            output(client.get_intent_by_name(app_id, version_id, &name).await?)
        }
        ModelCommand::Create { name } => output(
            client
                .add_intent(app_id, version_id, &name)
                .await
                .with_context(|| format!("failed to create intent {name}"))?,
        ),
        ModelCommand::Rename { id, name } => {
            client
                .rename_intent(app_id, version_id, &id, &name)
                .await
                .with_context(|| format!("failed to rename intent {id}"))?;
            Ok(None)
        }
        ModelCommand::Delete { id } => {
            client
                .delete_intent(app_id, version_id, &id)
                .await
                .with_context(|| format!("failed to delete intent {id}"))?;
            Ok(None)
        }
    }
}

async fn entities(
    client: &LuisProgClient,
    app_id: &str,
    version_id: &str,
    action: ModelCommand,
) -> Result<Option<Value>> {
    match action {
        ModelCommand::List => output(client.get_all_entities(app_id, version_id).await?),
        ModelCommand::Get { id } => {
            output(client.get_entity_by_id(app_id, version_id, &id).await?)
        }
        ModelCommand::Find { name } => {
            output(client.get_entity_by_name(app_id, version_id, &name).await?)
        }
        ModelCommand::Create { name } => output(
            client
                .add_entity(app_id, version_id, &name)
                .await
                .with_context(|| format!("failed to create entity {name}"))?,
        ),
        ModelCommand::Rename { id, name } => {
            client
                .rename_entity(app_id, version_id, &id, &name)
                .await
                .with_context(|| format!("failed to rename entity {id}"))?;
            Ok(None)
        }
        ModelCommand::Delete { id } => {
            client
                .delete_entity(app_id, version_id, &id)
                .await
                .with_context(|| format!("failed to delete entity {id}"))?;
            Ok(None)
        }
    }
}

async fn add_example(client: &LuisProgClient, args: AddExampleArgs) -> Result<Option<Value>> {
    let (app_id, version_id) = args.scope.require()?;
    let example = args
        .labels
        .into_iter()
        .fold(Example::new(args.text, args.intent), |example, label| {
            example.with_label(label.entity, label.start, label.end)
        });
    output(
        client
            .add_example(app_id, version_id, &example)
            .await
            .context("failed to add example")?,
    )
}

async fn publish(client: &LuisProgClient, args: PublishArgs) -> Result<Option<Value>> {
    let (app_id, version_id) = args.scope.require()?;
    output(
        client
            .publish(app_id, version_id, args.staging, &args.target_region)
            .await
            .with_context(|| format!("failed to publish {app_id} version {version_id}"))?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_requires_both_ids() {
        let scope = VersionScope {
            app_id: Some("a1".into()),
            version_id: None,
        };
        let err = scope.require().unwrap_err();
        assert!(err.to_string().contains("--version-id"));

        let scope = VersionScope {
            app_id: Some("a1".into()),
            version_id: Some("0.1".into()),
        };
        assert_eq!(scope.require().unwrap(), ("a1", "0.1"));
    }

    #[test]
    fn test_absent_lookup_prints_null() {
        let absent: Option<luis_programmatic::LuisApp> = None;
        assert_eq!(output(absent).unwrap(), Some(Value::Null));
    }
}

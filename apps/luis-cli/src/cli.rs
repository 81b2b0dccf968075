use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::ConfigOverrides;

/// Manage LUIS applications from the command line.
#[derive(Debug, Parser)]
#[command(name = "luis", version, about)]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Authoring region, e.g. westus
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Authoring subscription key
    #[arg(long, global = true)]
    pub subscription_key: Option<String>,

    /// Override the region-derived base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            region: self.region.clone(),
            subscription_key: self.subscription_key.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Applications
    Apps {
        #[command(subcommand)]
        action: AppCommand,
    },
    /// Intent classifiers of an application version
    Intents {
        #[command(flatten)]
        scope: VersionScope,
        #[command(subcommand)]
        action: ModelCommand,
    },
    /// Entity extractors of an application version
    Entities {
        #[command(flatten)]
        scope: VersionScope,
        #[command(subcommand)]
        action: ModelCommand,
    },
    /// Labeled example utterances
    Examples {
        #[command(subcommand)]
        action: ExampleCommand,
    },
    /// Training of an application version
    Train {
        #[command(flatten)]
        scope: VersionScope,
        #[command(subcommand)]
        action: TrainCommand,
    },
    /// Publish an application version
    Publish(PublishArgs),
}

/// Application and version an operation applies to
#[derive(Debug, Clone, Args)]
pub struct VersionScope {
    /// Application id
    #[arg(long = "app", global = true)]
    pub app_id: Option<String>,

    /// Application version id
    #[arg(long = "version-id", global = true)]
    pub version_id: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum AppCommand {
    /// List all applications
    List,
    /// Get an application by id
    Get { id: String },
    /// Find an application by exact name
    Find { name: String },
    /// Create an application and print its id
    Create(CreateAppArgs),
    /// Rename an application
    Rename {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an application
    Delete { id: String },
}

#[derive(Debug, Args)]
pub struct CreateAppArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub culture: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub usage_scenario: String,
    #[arg(long, default_value = "")]
    pub domain: String,
    #[arg(long)]
    pub initial_version_id: Option<String>,
}

/// Operations shared by intents and entities
#[derive(Debug, Subcommand)]
pub enum ModelCommand {
    List,
    Get { id: String },
    Find { name: String },
    Create { name: String },
    Rename {
        id: String,
        #[arg(long)]
        name: String,
    },
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum ExampleCommand {
    /// Add a labeled example
    Add(AddExampleArgs),
}

#[derive(Debug, Args)]
pub struct AddExampleArgs {
    #[command(flatten)]
    pub scope: VersionScope,
    #[arg(long)]
    pub text: String,
    #[arg(long)]
    pub intent: String,
    /// Entity span as `entity:start:end` (inclusive character offsets)
    #[arg(long = "label", value_parser = parse_label)]
    pub labels: Vec<LabelArg>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelArg {
    pub entity: String,
    pub start: usize,
    pub end: usize,
}

fn parse_label(s: &str) -> Result<LabelArg, String> {
    let mut parts = s.rsplitn(3, ':');
    let (Some(end), Some(start), Some(entity)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected entity:start:end, got '{s}'"));
    };
    let start: usize = start
        .parse()
        .map_err(|e| format!("invalid start index '{start}': {e}"))?;
    let end: usize = end
        .parse()
        .map_err(|e| format!("invalid end index '{end}': {e}"))?;
    if entity.is_empty() {
        return Err("entity name must not be empty".to_owned());
    }
    if end < start {
        return Err(format!("end index {end} is before start index {start}"));
    }
    Ok(LabelArg {
        entity: entity.to_owned(),
        start,
        end,
    })
}

#[derive(Debug, Subcommand)]
pub enum TrainCommand {
    /// Queue training
    Start,
    /// Show training status per model
    Status,
}

#[derive(Debug, Args)]
pub struct PublishArgs {
    #[command(flatten)]
    pub scope: VersionScope,
    /// Region the application was created in, e.g. westus
    #[arg(long = "to", value_name = "REGION")]
    pub target_region: String,
    /// Publish to the staging slot
    #[arg(long)]
    pub staging: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(
            parse_label("Location:17:21").unwrap(),
            LabelArg {
                entity: "Location".to_owned(),
                start: 17,
                end: 21
            }
        );
    }

    #[test]
    fn test_parse_label_entity_with_colon() {
        let label = parse_label("builtin:datetime:0:5").unwrap();
        assert_eq!(label.entity, "builtin:datetime");
        assert_eq!((label.start, label.end), (0, 5));
    }

    #[test]
    fn test_parse_label_rejects_bad_input() {
        assert!(parse_label("Location").is_err());
        assert!(parse_label("Location:a:3").is_err());
        assert!(parse_label(":1:3").is_err());
        assert!(parse_label("Location:5:3").is_err());
    }

    #[test]
    fn test_parse_intents_command() {
        let cli = Cli::try_parse_from([
            "luis",
            "intents",
            "--app",
            "a1",
            "--version-id",
            "0.1",
            "find",
            "BookFlight",
        ])
        .unwrap();

        match cli.command {
            Command::Intents { scope, action } => {
                assert_eq!(scope.app_id.as_deref(), Some("a1"));
                assert_eq!(scope.version_id.as_deref(), Some("0.1"));
                assert!(matches!(action, ModelCommand::Find { name } if name == "BookFlight"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_publish_command() {
        let cli = Cli::try_parse_from([
            "luis",
            "--subscription-key",
            "k",
            "publish",
            "--app",
            "a1",
            "--version-id",
            "0.1",
            "--to",
            "westeurope",
            "--staging",
        ])
        .unwrap();

        assert_eq!(cli.subscription_key.as_deref(), Some("k"));
        match cli.command {
            Command::Publish(args) => {
                assert_eq!(args.target_region, "westeurope");
                assert!(args.staging);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_example_labels() {
        let cli = Cli::try_parse_from([
            "luis",
            "examples",
            "add",
            "--app",
            "a1",
            "--version-id",
            "0.1",
            "--text",
            "fly to Cairo",
            "--intent",
            "BookFlight",
            "--label",
            "Location:7:11",
        ])
        .unwrap();

        let Command::Examples {
            action: ExampleCommand::Add(args),
        } = cli.command
        else {
            panic!("expected examples add");
        };
        assert_eq!(args.labels.len(), 1);
        assert_eq!(args.labels[0].entity, "Location");
    }
}

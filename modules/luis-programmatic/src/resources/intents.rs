use super::{item_path, version_path};
use crate::client::{LuisProgClient, find_by_name};
use crate::error::Result;
use crate::models::{Intent, ModelNameRequest};

fn intents_path(app_id: &str, version_id: &str) -> String {
    format!("{}/intents", version_path(app_id, version_id))
}

impl LuisProgClient {
    /// Lists the intent classifiers of an application version.
    ///
    /// Returns `None` when the service answers 400.
    ///
    /// # Errors
    ///
    /// Any other non-success status, an undecodable body or a network failure.
    pub async fn get_all_intents(
        &self,
        app_id: &str,
        version_id: &str,
    ) -> Result<Option<Vec<Intent>>> {
        self.get_optional(&intents_path(app_id, version_id)).await
    }

    /// Gets an intent by id; `None` when the service answers 400.
    ///
    /// # Errors
    ///
    /// Same as [`LuisProgClient::get_all_intents`].
    pub async fn get_intent_by_id(
        &self,
        app_id: &str,
        version_id: &str,
        id: &str,
    ) -> Result<Option<Intent>> {
        self.get_optional(&item_path(&intents_path(app_id, version_id), id))
            .await
    }

    /// Finds the first intent whose name equals `name` exactly.
    ///
    /// # Errors
    ///
    /// Same as [`LuisProgClient::get_all_intents`].
    pub async fn get_intent_by_name(
        &self,
        app_id: &str,
        version_id: &str,
        name: &str,
    ) -> Result<Option<Intent>> {
        let intents = self.get_all_intents(app_id, version_id).await?;
        Ok(find_by_name(intents, name, |intent| intent.name.as_str()))
    }

    /// Creates an intent classifier and returns its id.
    ///
    /// # Errors
    ///
    /// Any non-success status, an undecodable body or a network failure.
    pub async fn add_intent(&self, app_id: &str, version_id: &str, name: &str) -> Result<String> {
        let body = ModelNameRequest {
            name: name.to_owned(),
        };
        self.post_for_id(&intents_path(app_id, version_id), &body)
            .await
    }

    /// Changes the name of an intent classifier.
    ///
    /// # Errors
    ///
    /// Any non-success status or a network failure.
    pub async fn rename_intent(
        &self,
        app_id: &str,
        version_id: &str,
        id: &str,
        name: &str,
    ) -> Result<()> {
        let body = ModelNameRequest {
            name: name.to_owned(),
        };
        self.transport()
            .put(&item_path(&intents_path(app_id, version_id), id), &body)
            .await
    }

    /// Deletes an intent classifier.
    ///
    /// # Errors
    ///
    /// Any non-success status or a network failure.
    pub async fn delete_intent(&self, app_id: &str, version_id: &str, id: &str) -> Result<()> {
        self.transport()
            .delete(&item_path(&intents_path(app_id, version_id), id))
            .await
    }
}

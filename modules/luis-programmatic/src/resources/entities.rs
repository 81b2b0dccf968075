use super::{item_path, version_path};
use crate::client::{LuisProgClient, find_by_name};
use crate::error::Result;
use crate::models::{Entity, ModelNameRequest};

fn entities_path(app_id: &str, version_id: &str) -> String {
    format!("{}/entities", version_path(app_id, version_id))
}

impl LuisProgClient {
    /// Lists the entity extractors of an application version.
    ///
    /// Returns `None` when the service answers 400.
    ///
    /// # Errors
    ///
    /// Any other non-success status, an undecodable body or a network failure.
    pub async fn get_all_entities(
        &self,
        app_id: &str,
        version_id: &str,
    ) -> Result<Option<Vec<Entity>>> {
        self.get_optional(&entities_path(app_id, version_id)).await
    }

    /// Gets an entity extractor by id; `None` when the service answers 400.
    ///
    /// # Errors
    ///
    /// Same as [`LuisProgClient::get_all_entities`].
    pub async fn get_entity_by_id(
        &self,
        app_id: &str,
        version_id: &str,
        id: &str,
    ) -> Result<Option<Entity>> {
        self.get_optional(&item_path(&entities_path(app_id, version_id), id))
            .await
    }

    /// Finds the first entity extractor whose name equals `name` exactly.
    ///
    /// # Errors
    ///
    /// Same as [`LuisProgClient::get_all_entities`].
    pub async fn get_entity_by_name(
        &self,
        app_id: &str,
        version_id: &str,
        name: &str,
    ) -> Result<Option<Entity>> {
        let entities = self.get_all_entities(app_id, version_id).await?;
        Ok(find_by_name(entities, name, |entity| entity.name.as_str()))
    }

    /// Creates a simple entity extractor and returns its id.
    ///
    /// # Errors
    ///
    /// Any non-success status, an undecodable body or a network failure.
    pub async fn add_entity(&self, app_id: &str, version_id: &str, name: &str) -> Result<String> {
        let body = ModelNameRequest {
            name: name.to_owned(),
        };
        self.post_for_id(&entities_path(app_id, version_id), &body)
            .await
    }

    /// Changes the name of an entity extractor.
    ///
    /// # Errors
    ///
    /// Any non-success status or a network failure.
    pub async fn rename_entity(
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
            .put(&item_path(&entities_path(app_id, version_id), id), &body)
            .await
    }

    /// Deletes an entity extractor.
    ///
    /// # Errors
    ///
    /// Any non-success status or a network failure.
    pub async fn delete_entity(&self, app_id: &str, version_id: &str, id: &str) -> Result<()> {
        self.transport()
            .delete(&item_path(&entities_path(app_id, version_id), id))
            .await
    }
}

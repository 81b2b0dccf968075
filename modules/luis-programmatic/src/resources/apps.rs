use super::app_path;
use crate::client::{LuisProgClient, find_by_name};
use crate::error::Result;
use crate::models::{CreateAppRequest, LuisApp, RenameAppRequest};

impl LuisProgClient {
    /// Lists all applications of the user.
    ///
    /// Returns `None` when the service answers 400.
    ///
    /// # Errors
    ///
    /// Any other non-success status, an undecodable body or a network failure.
    pub async fn get_all_apps(&self) -> Result<Option<Vec<LuisApp>>> {
        self.get_optional("/apps").await
    }

    /// Gets an application by id; `None` when the service answers 400.
    ///
    /// # Errors
    ///
    /// Same as [`LuisProgClient::get_all_apps`].
    pub async fn get_app_by_id(&self, id: &str) -> Result<Option<LuisApp>> {
        self.get_optional(&app_path(id)).await
    }

    /// Finds the first application whose name equals `name` exactly.
    ///
    /// # Errors
    ///
    /// Same as [`LuisProgClient::get_all_apps`].
    pub async fn get_app_by_name(&self, name: &str) -> Result<Option<LuisApp>> {
        let apps = self.get_all_apps().await?;
        Ok(find_by_name(apps, name, |app| app.name.as_str()))
    }

    /// Creates an application and returns its id.
    ///
    /// # Errors
    ///
    /// Any non-success status, an undecodable body or a network failure.
    pub async fn add_app(&self, request: &CreateAppRequest) -> Result<String> {
        let id = self.post_for_id("/apps", request).await?;
        tracing::debug!(app_id = %id, name = %request.name, "created LUIS app");
        Ok(id)
    }

    /// Changes the name and, when given, the description of an application.
    ///
    /// # Errors
    ///
    /// Any non-success status or a network failure.
    pub async fn rename_app(&self, id: &str, name: &str, description: Option<&str>) -> Result<()> {
        let body = RenameAppRequest {
            name: name.to_owned(),
            description: description.map(str::to_owned),
        };
        self.transport().put(&app_path(id), &body).await
    }

    /// Deletes an application.
    ///
    /// # Errors
    ///
    /// Any non-success status or a network failure.
    pub async fn delete_app(&self, id: &str) -> Result<()> {
        self.transport().delete(&app_path(id)).await
    }
}

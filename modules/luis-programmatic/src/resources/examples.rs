use super::version_path;
use crate::client::LuisProgClient;
use crate::error::Result;
use crate::models::{Example, Utterance};

impl LuisProgClient {
    /// Adds a labeled example utterance to an application version.
    ///
    /// # Errors
    ///
    /// Any non-success status, an undecodable body or a network failure.
    pub async fn add_example(
        &self,
        app_id: &str,
        version_id: &str,
        example: &Example,
    ) -> Result<Utterance> {
        let path = format!("{}/example", version_path(app_id, version_id));
        self.post_for(&path, Some(example)).await
    }
}

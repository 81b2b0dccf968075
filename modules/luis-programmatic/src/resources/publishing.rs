use super::app_path;
use crate::client::LuisProgClient;
use crate::error::Result;
use crate::models::{Publish, PublishRequest};

impl LuisProgClient {
    /// Publishes a version of an application to its endpoint.
    ///
    /// `region` must be the region the application was created in. Accepts a
    /// [`Region`](crate::Region) or any region label the service knows.
    ///
    /// # Errors
    ///
    /// Any non-success status, an undecodable body or a network failure.
    pub async fn publish(
        &self,
        app_id: &str,
        version_id: &str,
        is_staging: bool,
        region: impl AsRef<str>,
    ) -> Result<Publish> {
        let body = PublishRequest {
            version_id: version_id.to_owned(),
            is_staging,
            region: region.as_ref().to_owned(),
        };
        let published: Publish = self
            .post_for(&format!("{}/publish", app_path(app_id)), Some(&body))
            .await?;
        tracing::debug!(app_id, version_id, endpoint = %published.endpoint_url, "version published");
        Ok(published)
    }
}

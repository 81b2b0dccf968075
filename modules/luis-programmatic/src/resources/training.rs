use super::version_path;
use crate::client::LuisProgClient;
use crate::error::Result;
use crate::models::{ModelTrainingStatus, TrainingDetails};

fn train_path(app_id: &str, version_id: &str) -> String {
    format!("{}/train", version_path(app_id, version_id))
}

impl LuisProgClient {
    /// Queues training of an application version. No request body is sent.
    ///
    /// # Errors
    ///
    /// Any non-success status, an undecodable body or a network failure.
    pub async fn train(&self, app_id: &str, version_id: &str) -> Result<TrainingDetails> {
        let details: TrainingDetails = self
            .post_for::<(), _>(&train_path(app_id, version_id), None)
            .await?;
        tracing::debug!(app_id, version_id, status = ?details.status, "training requested");
        Ok(details)
    }

    /// Training status of every model (intents and entities) of a version.
    ///
    /// Unlike the list operations, a 400 here is a failure, not "absent".
    ///
    /// # Errors
    ///
    /// Any non-success status, an undecodable body or a network failure.
    pub async fn get_training_status_list(
        &self,
        app_id: &str,
        version_id: &str,
    ) -> Result<Vec<ModelTrainingStatus>> {
        self.get_required(&train_path(app_id, version_id)).await
    }
}

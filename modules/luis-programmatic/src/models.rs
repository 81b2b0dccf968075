//! Wire shapes of the authoring API.
//!
//! Field names are lower camel case on the wire. Response shapes ignore
//! unknown fields and treat everything but the identifying fields as optional,
//! since the service adds fields between API revisions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// A LUIS application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuisApp {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub culture: Option<String>,
    #[serde(default)]
    pub usage_scenario: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub versions_count: Option<u32>,
    #[serde(default)]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub endpoint_hits_count: Option<u64>,
    #[serde(default)]
    pub active_version: Option<String>,
}

/// An intent classifier within an application version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub type_id: Option<u32>,
    #[serde(default)]
    pub readable_type: Option<String>,
}

/// An entity extractor within an application version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub type_id: Option<u32>,
    #[serde(default)]
    pub readable_type: Option<String>,
}

/// Confirmation returned after adding a labeled example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utterance {
    #[serde(alias = "UtteranceText")]
    pub utterance_text: String,
    #[serde(alias = "ExampleId")]
    pub example_id: i64,
}

/// Training progress as reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingStatus {
    Success,
    UpToDate,
    InProgress,
    Fail,
    Queued,
    #[serde(other)]
    Unknown,
}

impl TrainingStatus {
    /// True once the model will not change state without another train call
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TrainingStatus::Success | TrainingStatus::UpToDate | TrainingStatus::Fail
        )
    }
}

/// Result of a train request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDetails {
    pub status_id: i32,
    pub status: TrainingStatus,
}

/// Training state of one model (intent or entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelTrainingStatus {
    pub model_id: String,
    pub details: ModelTrainingDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelTrainingDetails {
    pub status_id: i32,
    pub status: TrainingStatus,
    #[serde(default)]
    pub example_count: Option<u32>,
    #[serde(default)]
    pub failure_reason: Option<String>,
    #[serde(default)]
    pub training_date_time: Option<DateTime<Utc>>,
}

/// Outcome of publishing a version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publish {
    pub endpoint_url: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub version_id: Option<String>,
    #[serde(default)]
    pub is_staging: Option<bool>,
    #[serde(default)]
    pub assigned_endpoint_key: Option<String>,
    #[serde(default)]
    pub endpoint_region: Option<String>,
    #[serde(default)]
    pub published_date_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Request shapes
// ---------------------------------------------------------------------------

/// Body of `POST /apps`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppRequest {
    pub name: String,
    pub description: String,
    pub culture: String,
    pub usage_scenario: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_version_id: Option<String>,
}

/// Body of `PUT /apps/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameAppRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for creating or renaming an intent or entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelNameRequest {
    pub name: String,
}

/// A labeled utterance, body of `POST .../example`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub text: String,
    pub intent_name: String,
    #[serde(default)]
    pub entity_labels: Vec<EntityLabel>,
}

impl Example {
    #[must_use]
    pub fn new(text: impl Into<String>, intent_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            intent_name: intent_name.into(),
            entity_labels: Vec::new(),
        }
    }

    /// Label the characters `start..=end` of the text as `entity_name`
    #[must_use]
    pub fn with_label(mut self, entity_name: impl Into<String>, start: usize, end: usize) -> Self {
        self.entity_labels.push(EntityLabel {
            entity_name: entity_name.into(),
            start_char_index: start,
            end_char_index: end,
        });
        self
    }
}

/// Entity span inside an example; indices are inclusive character offsets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityLabel {
    pub entity_name: String,
    pub start_char_index: usize,
    pub end_char_index: usize,
}

/// Body of `POST /apps/{id}/publish`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub version_id: String,
    pub is_staging: bool,
    /// Region label as sent on the wire, e.g. `westus`
    pub region: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;
    use serde_json::json;

    #[test]
    fn test_app_decodes_service_shape() {
        let app: LuisApp = serde_json::from_value(json!({
            "id": "363187f1-c573-46b3-bc4c-ae01d686e68e",
            "name": "MyFirstApp",
            "description": "This is my first dummy application",
            "culture": "en-us",
            "usageScenario": "IoT",
            "domain": "Comics",
            "versionsCount": 3,
            "createdDateTime": "2017-01-31T16:15:54Z",
            "endpoints": {},
            "endpointHitsCount": 0,
            "activeVersion": "0.1"
        }))
        .unwrap();

        assert_eq!(app.name, "MyFirstApp");
        assert_eq!(app.usage_scenario.as_deref(), Some("IoT"));
        assert_eq!(app.versions_count, Some(3));
        assert_eq!(app.active_version.as_deref(), Some("0.1"));
        assert!(app.created_date_time.is_some());
    }

    #[test]
    fn test_intent_minimal_shape() {
        let intent: Intent = serde_json::from_value(json!({"id": "i-1", "name": "None"})).unwrap();
        assert_eq!(intent.name, "None");
        assert_eq!(intent.type_id, None);
    }

    #[test]
    fn test_utterance_accepts_pascal_case() {
        let utterance: Utterance =
            serde_json::from_value(json!({"UtteranceText": "book a flight", "ExampleId": -5_311_548}))
                .unwrap();
        assert_eq!(utterance.utterance_text, "book a flight");
        assert_eq!(utterance.example_id, -5_311_548);

        let camel: Utterance =
            serde_json::from_value(json!({"utteranceText": "hi", "exampleId": 7})).unwrap();
        assert_eq!(camel.example_id, 7);
    }

    #[test]
    fn test_unknown_training_status() {
        let details: TrainingDetails =
            serde_json::from_value(json!({"statusId": 42, "status": "Exploding"})).unwrap();
        assert_eq!(details.status, TrainingStatus::Unknown);
        assert!(!details.status.is_terminal());
    }

    #[test]
    fn test_model_training_status_shape() {
        let statuses: Vec<ModelTrainingStatus> = serde_json::from_value(json!([
            {
                "modelId": "m-1",
                "details": {"statusId": 3, "status": "InProgress", "exampleCount": 0}
            },
            {
                "modelId": "m-2",
                "details": {
                    "statusId": 1,
                    "status": "Fail",
                    "exampleCount": 12,
                    "failureReason": "FewLabels"
                }
            }
        ]))
        .unwrap();

        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].details.status, TrainingStatus::InProgress);
        assert_eq!(statuses[1].details.failure_reason.as_deref(), Some("FewLabels"));
        assert!(statuses[1].details.status.is_terminal());
    }

    #[test]
    fn test_create_app_request_wire_names() {
        let body = CreateAppRequest {
            name: "Demo".into(),
            description: "desc".into(),
            culture: "en-us".into(),
            usage_scenario: "IoT".into(),
            domain: String::new(),
            initial_version_id: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "name": "Demo",
                "description": "desc",
                "culture": "en-us",
                "usageScenario": "IoT",
                "domain": ""
            })
        );
    }

    #[test]
    fn test_example_wire_names() {
        let example = Example::new("book a flight to Cairo", "BookFlight").with_label("Location", 17, 21);
        assert_eq!(
            serde_json::to_value(&example).unwrap(),
            json!({
                "text": "book a flight to Cairo",
                "intentName": "BookFlight",
                "entityLabels": [
                    {"entityName": "Location", "startCharIndex": 17, "endCharIndex": 21}
                ]
            })
        );
    }

    #[test]
    fn test_publish_request_wire_names() {
        let body = PublishRequest {
            version_id: "0.1".into(),
            is_staging: true,
            region: Region::WestUs.to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"versionId": "0.1", "isStaging": true, "region": "westus"})
        );
    }
}

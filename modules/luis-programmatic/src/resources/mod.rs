//! One `impl LuisProgClient` block per resource group.

mod apps;
mod entities;
mod examples;
mod intents;
mod publishing;
mod training;

use urlencoding::encode;

// Ids are caller-supplied; each one is encoded as a single path segment.

/// `/apps/{app_id}`
fn app_path(app_id: &str) -> String {
    format!("/apps/{}", encode(app_id))
}

/// `/apps/{app_id}/versions/{version_id}`
fn version_path(app_id: &str, version_id: &str) -> String {
    format!("{}/versions/{}", app_path(app_id), encode(version_id))
}

/// `{collection}/{id}`
fn item_path(collection: &str, id: &str) -> String {
    format!("{collection}/{}", encode(id))
}

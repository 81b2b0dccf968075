#![allow(dead_code)]

use httpmock::MockServer;
use luis_programmatic::{LuisClientConfig, LuisProgClient, Region};

pub const KEY: &str = "test-key";
pub const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
pub const PREFIX: &str = "/luis/api/v2.0";

/// Full mock path for an API path, e.g. `/apps` -> `/luis/api/v2.0/apps`
pub fn api(path: &str) -> String {
    format!("{PREFIX}{path}")
}

/// Client pointed at the stub server, mounted under the real API prefix
pub fn client_for(server: &MockServer) -> LuisProgClient {
    let config = LuisClientConfig::new(Region::WestUs, KEY).with_base_url(server.url(PREFIX));
    LuisProgClient::from_config(&config).unwrap()
}

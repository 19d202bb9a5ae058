// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
pub struct InteractResponse {
    #[serde(rename = "aiResData")]
    pub ai_res_data: Value,
}

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chat_relay::services::gateway::{GatewayError, ModelGateway};
use chat_relay::state::AppState;

/// Gateway that replays canned replies in order and records every prompt.
#[derive(Default)]
pub struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(self: &Arc<Self>, text: &str) -> Arc<Self> {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
        self.clone()
    }

    pub fn fail(self: &Arc<Self>, err: GatewayError) -> Arc<Self> {
        self.replies.lock().unwrap().push_back(Err(err));
        self.clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::unknown("script exhausted")))
    }

    fn model_id(&self) -> &str {
        "scripted"
    }
}

pub fn manual_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("aiManual.txt")
}

pub fn manual_text() -> String {
    std::fs::read_to_string(manual_path()).unwrap()
}

pub fn state_with(gateway: Arc<ScriptedGateway>) -> Arc<AppState> {
    Arc::new(AppState::new(Duration::from_secs(60), gateway, manual_path()))
}

// src/services/conversation.rs
//! The two session operations: start (or reset) a conversation and submit
//! the next user turn.
//!
//! Both run the same exchange: render the transcript, call the model, parse
//! its reply and append it as an assistant turn. The session lock is never
//! held across the model call, so a double submit on one session interleaves
//! in completion order.
//!
//! A user turn appended before a failed exchange stays in the transcript.

use serde_json::Value;

use super::{interpreter, prompt, transcript::Author};
use crate::{error::AppError, state::AppState};

pub async fn start_conversation(state: &AppState, session_id: &str) -> Result<Value, AppError> {
    let manual = state.manual.load().await?;
    state.sessions.reset(session_id, &manual).await?;
    tracing::info!(session = %session_id, "conversation started");

    exchange(state, session_id).await
}

pub async fn submit_turn(
    state: &AppState,
    session_id: &str,
    payload: Value,
) -> Result<Value, AppError> {
    let seeded = state
        .sessions
        .transcript(session_id)
        .await
        .is_some_and(|t| t.is_seeded());
    if !seeded {
        tracing::warn!(session = %session_id, "turn submitted without an active conversation");
        return Err(AppError::NoActiveSession);
    }

    let len = state.sessions.append_turn(session_id, Author::User, payload).await?;
    tracing::debug!(session = %session_id, len, "user turn appended");

    exchange(state, session_id).await
}

async fn exchange(state: &AppState, session_id: &str) -> Result<Value, AppError> {
    let transcript = state
        .sessions
        .transcript(session_id)
        .await
        .ok_or(AppError::NoActiveSession)?;
    let prompt = prompt::render(&transcript)?;

    let raw = state.gateway.generate(&prompt).await.map_err(|e| {
        tracing::warn!(session = %session_id, model = %state.gateway.model_id(), error = %e, "model call failed");
        e
    })?;
    tracing::debug!(session = %session_id, reply = %raw, "model replied");

    let reply = interpreter::interpret(&raw).map_err(|e| {
        tracing::warn!(session = %session_id, excerpt = %e.excerpt(), "model reply is not JSON");
        e
    })?;

    let len = state
        .sessions
        .append_turn(session_id, Author::Assistant, reply.clone())
        .await?;
    tracing::info!(session = %session_id, len, "exchange complete");

    Ok(reply)
}

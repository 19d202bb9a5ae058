// src/routes/conversation.rs
use axum::{Json, extract::State};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::Value;

use crate::{
    error::AppError,
    message::InteractResponse,
    services::conversation::{start_conversation, submit_turn},
    state::SharedState,
};

pub const SESSION_COOKIE: &str = "chat_key";

// GET / : start or reset the conversation bound to the caller's cookie.
pub async fn start_handler(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> (CookieJar, Result<Json<InteractResponse>, AppError>) {
    let (session_id, jar) = resolve_session(&state, jar).await;

    let result = start_conversation(&state, &session_id)
        .await
        .map(|ai_res_data| Json(InteractResponse { ai_res_data }));
    (jar, result)
}

// POST /interact : submit the next user turn.
pub async fn interact_handler(
    State(state): State<SharedState>,
    jar: CookieJar,
    Json(payload): Json<Value>,
) -> Result<Json<InteractResponse>, AppError> {
    let session_id = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .ok_or(AppError::NoActiveSession)?;

    let ai_res_data = submit_turn(&state, &session_id, payload).await?;
    Ok(Json(InteractResponse { ai_res_data }))
}

/// Reuse the session named by the cookie if it is still live, otherwise
/// create one and hand back a jar that sets the new cookie.
async fn resolve_session(state: &SharedState, jar: CookieJar) -> (String, CookieJar) {
    if let Some(id) = jar.get(SESSION_COOKIE).map(|c| c.value().to_owned()) {
        if state.sessions.contains(&id).await {
            return (id, jar);
        }
    }

    let id = state.sessions.create_session().await;
    tracing::debug!(session = %id, "session created");

    let max_age = time::Duration::seconds(
        i64::try_from(state.sessions.ttl().as_secs()).unwrap_or(i64::MAX),
    );
    let cookie = Cookie::build((SESSION_COOKIE, id.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(max_age);
    (id, jar.add(cookie))
}

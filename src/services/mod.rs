// src/services/mod.rs
pub mod conversation;
pub mod gateway;
pub mod gemini;
pub mod interpreter;
pub mod manual;
pub mod prompt;
pub mod session_manager;
pub mod transcript;

//! Concierge - Password-gated voice-agent dispatch service
//!
//! A caller unlocks a tier with a shared secret, browses a
//! category → company → service directory loaded from CSV, and has an AI
//! voice agent phone the chosen number on their behalf. When the agent
//! reaches a human it transfers to the caller's callback phone.
//!
//! # Layout
//!
//! - `domain` - access grants, the directory tree, sessions, call requests
//! - `ports` - traits the application layer depends on
//! - `adapters` - CSV, Bland HTTP client, in-memory sessions, axum routes
//! - `application` - one handler per command or query
//! - `config` - layered configuration (file, `.env`, `CONCIERGE__*`)

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

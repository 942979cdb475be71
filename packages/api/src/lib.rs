//! # API crate: typed access to the Illuminati backend
//!
//! Everything the web frontend knows about the backend lives here: where it
//! is, which routes exist, what their payloads look like, and how the bearer
//! token is read for role information.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Token claims decoding, role tiers and the UI permissions derived from them |
//! | [`client`] | [`ApiClient`] and the [`Endpoint`] table covering the whole REST surface |
//! | [`config`] | [`ClientConfig`]: API base URL and timeout, TOML or build-time env |
//! | [`error`] | [`ApiError`], the single error type returned by every call |
//! | [`models`] | Wire models (records, votes, users, envelopes, snapshots) |
//!
//! The crate compiles for both native and `wasm32` targets; on wasm, `reqwest`
//! goes through the browser's `fetch`.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use auth::{user_roles, Permissions, RoleTier};
pub use client::{ApiClient, Endpoint};
pub use config::ClientConfig;
pub use error::ApiError;
pub use models::{Envelope, Record, UserInfo, Vote, VoteChoice};

//! # API Module
//!
//! HTTP endpoints served by the short-lived local server that `kworblist auth`
//! starts while waiting for Spotify to redirect back.
//!
//! - [`callback`] - receives the authorization code and exchanges it, with the
//!   PKCE verifier kept in shared state, for an access token
//! - [`health`] - reports status and version
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use kworblist::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;

//! # API Module
//!
//! HTTP request handlers served by the dashboard proxy. Every handler is a
//! stateless mapping from an incoming request to one or two Spotify Web API
//! calls, with the shared [`TokenStore`](crate::store::TokenStore) injected
//! through an axum `Extension` layer.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`authorize`] - redirects the browser to Spotify's authorization page
//! - [`callback`] - completes the authorization-code exchange and stores the
//!   resulting access token
//! - [`logout`] - clears the stored token and redirects home
//!
//! ### Views
//!
//! - [`home`] - landing page with the login link
//! - [`dashboard`] - profile plus top-ten tracks
//! - [`recommendations`] - recommended tracks for artist/track seeds
//!
//! ### Data and actions
//!
//! - [`get_top_tracks`] - JSON top tracks for a caller-supplied time range
//! - [`create_playlist`] - creates a playlist and adds the posted track URIs
//! - [`save_song`] - demo variant of the playlist flow with configured values
//!
//! ### Monitoring
//!
//! - [`health`] - application status and version for monitoring systems
//!
//! ## Error Handling
//!
//! Playlist routes answer with fixed plain-text messages and a 500 status
//! when either dependent upstream call fails. The read-only routes relay
//! whatever the upstream returned; transport failures there surface as a
//! bare 500 with the error text.

mod auth;
mod health;
mod pages;
mod playlist;
mod tracks;

pub use auth::{authorize, callback, logout};
pub use health::health;
pub use pages::{dashboard, home, recommendations};
pub use playlist::{create_playlist, save_song};
pub use tracks::get_top_tracks;

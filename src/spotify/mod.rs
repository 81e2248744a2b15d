//! # Spotify Integration Module
//!
//! This module is the integration layer between the web server and the
//! Spotify Web API. It handles all outbound HTTP communication: the OAuth
//! authorization-code flow and the proxied read/write API operations.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers (api)
//!        ↓
//! Spotify integration layer
//!     ├── Authentication (authorization URL, code exchange)
//!     ├── Track operations (profile, top tracks, recommendations)
//!     └── Playlist operations (create, add tracks)
//!        ↓
//! HTTP layer (reqwest, JSON)
//!        ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`client`] - the generic "call this REST path with a bearer token and
//!   return status plus parsed JSON" primitive every feature call goes
//!   through. The client performs no status-code branching; callers decide
//!   what a failure status means for their route.
//! - [`auth`] - builds the authorization redirect URL and exchanges an
//!   authorization code for an access token using HTTP Basic client
//!   credentials.
//! - [`tracks`] - profile, top-tracks and recommendation queries.
//! - [`playlist`] - playlist creation and track addition.
//!
//! ## Authentication Strategy
//!
//! The server is a confidential client: it holds a client secret and uses
//! the plain authorization-code grant. The token endpoint is called with an
//! `Authorization: Basic base64(client_id:client_secret)` header and the
//! received access token is the only credential retained. There is no
//! refresh token handling and no expiry tracking; when the token goes stale
//! the user logs in again.
//!
//! ## API Coverage
//!
//! - `GET /me` - current user's profile
//! - `GET /me/top/tracks` - top tracks, optionally by time range
//! - `GET /recommendations` - seeded track recommendations
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - add tracks to a playlist
//! - `POST /api/token` - authorization-code exchange
//!
//! ## Error Types
//!
//! API calls return `Result<ApiResponse, reqwest::Error>`: transport
//! failures surface as the error, upstream rejections surface as a
//! non-success status inside the `ApiResponse`. The token exchange returns
//! `Result<String, String>` since a well-formed HTTP response without an
//! `access_token` is just as much a failure as a network error there.

pub mod auth;
pub mod client;
pub mod playlist;
pub mod tracks;

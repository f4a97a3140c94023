//! # Spotify Integration Module
//!
//! HTTP client layer for the two Spotify Web API endpoints the pipeline needs.
//! Each submodule covers one concern:
//!
//! - [`auth`] - Client-credentials token exchange. No user is involved; the
//!   application's ID and secret are traded directly for a short-lived bearer
//!   token. Tokens are not cached: every pipeline run authenticates afresh and
//!   discards the token after the fetch completes.
//! - [`playlist`] - Playlist reference resolution and track-listing retrieval.
//!   The reference is validated before any network call is made, and the
//!   track fetch works one page at a time, returning the continuation URL so
//!   callers can follow pagination themselves.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Token exchange (client-credentials grant)
//! - `GET /playlists/{id}/tracks` - Playlist track listing with pagination
//!
//! ## Error Handling
//!
//! Every non-success HTTP status is surfaced to the caller as a typed error
//! carrying the status code. There is no retry and no degraded empty-result
//! path; the presentation layer decides how to report failures.

pub mod auth;
pub mod playlist;

//! Bearer credential extraction for HTTP requests.
//!
//! The core lives in [`services::auth`]: given a header store and a field name
//! or identifier, [`services::auth::try_extract_params`] returns either a
//! [`services::auth::Credential`] (`id` / `secret` decoded from
//! `Bearer <base64(id:secret)>`) or exactly one
//! [`services::auth::ExtractionError`].
//!
//! ```
//! use axum::http::{HeaderMap, HeaderValue, header};
//! use bearer_auth::services::auth::{ExtractionError, try_extract_params_by_id};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer dXNlcjoxMjM0"));
//!
//! let credential = try_extract_params_by_id(&headers, &header::AUTHORIZATION).unwrap();
//! assert_eq!(credential.id, "user");
//! assert_eq!(credential.secret, "1234");
//!
//! let empty = HeaderMap::new();
//! assert_eq!(
//!     try_extract_params_by_id(&empty, &header::AUTHORIZATION),
//!     Err(ExtractionError::NoAuthHttpField)
//! );
//! ```
//!
//! The remaining modules wire the core into an axum application.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

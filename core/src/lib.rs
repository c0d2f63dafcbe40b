//! Browser-independent core of the post-pigeon page scripts.
//!
//! # Overview
//! Two page behaviours live here without touching the DOM or the network:
//! the Delete-Interceptor, which turns a form submission into a `DELETE
//! /posts` and swaps the page for the answer, and the Filename-Display, which
//! shows the chosen file's name in the upload widget. The host (the `web`
//! crate in the browser, plain `ureq` in tests) performs all IO through the
//! `Transport`, `Page` and `Label` traits.
//!
//! # Design
//! - `PostsClient` is stateless: `build_delete_post` produces an
//!   `HttpRequest`, `parse_delete_post` consumes an `HttpResponse`.
//! - Failures are typed (`ClientError`) and handed to the page instead of
//!   being dropped.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod interceptor;
pub mod types;
pub mod upload;

pub use client::PostsClient;
pub use error::ClientError;
pub use form::FormSnapshot;
pub use http::{HttpMethod, HttpRequest, HttpResponse, RedirectPolicy, Transport};
pub use interceptor::{DeleteInterceptor, Page};
pub use types::ResponseDocument;
pub use upload::{FilenameDisplay, Label};

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Stream Client
//!
//! A session client for the Stream work-management REST API. It logs a user
//! in, runs search and CRUD calls on typed objects (groups, projects, tasks)
//! and returns the `data` payload of each JSON response.
//!
//! ## Wire convention
//!
//! Every call is a form-encoded `POST`. The semantic verb (`GET`, `POST`,
//! `PUT`, `DELETE`) travels in the `method` form field together with the
//! `sessionID` token and an optional comma-joined `fields` selection.
//!
//! ## Usage
//!
//! ```ignore
//! use stream_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let mut client = StreamClient::connect(&Config::new()).await?;
//!
//!     let project = client
//!         .create(&ObjCode::PROJECT, &Params::from([("name", "Roadmap")]), &[])
//!         .await?;
//!     let project_id = project["ID"].as_str().unwrap_or_default();
//!     let tasks = client
//!         .search(&ObjCode::TASK, &Params::from([("projectID", project_id)]), &["status"])
//!         .await?;
//!     println!("{} tasks", tasks.len());
//!
//!     client.logout().await
//! }
//! ```
//!
//! ## Configuration
//!
//! [`application::config::Config::new`] reads `STREAM_API_URL`,
//! `STREAM_USERNAME`, `STREAM_PASSWORD`, `STREAM_TIMEOUT` and
//! `STREAM_ACCEPT_INVALID_CERTS` from the environment or a `.env` file.
//! TLS certificates are verified unless `STREAM_ACCEPT_INVALID_CERTS` is set.

/// Client, configuration and service interfaces
pub mod application;
/// Constants used throughout the library
pub mod constants;
/// Error types
pub mod error;
/// Request, response and session models plus the HTTP transport
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

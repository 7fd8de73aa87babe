/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Stream Client Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust
//! use stream_client::prelude::*;
//!
//! let params = Params::from([("name", "Sample group")]);
//! assert_eq!(params.get("name"), Some("Sample group"));
//! assert_eq!(ObjCode::PROJECT.as_str(), "PROJ");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Stream API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Session client
pub use crate::application::client::StreamClient;

/// Object operations trait
pub use crate::application::interfaces::object::ObjectService;

// ============================================================================
// MODELS
// ============================================================================

/// Session state
pub use crate::model::auth::Session;

/// Request models
pub use crate::model::requests::{LogicalMethod, ObjCode, Params};

/// Response models
pub use crate::model::responses::{DataEnvelope, LoginResponse};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logger setup
pub use crate::utils::logger::setup_logger;

/// JSON value type used for response payloads
pub use serde_json::Value;

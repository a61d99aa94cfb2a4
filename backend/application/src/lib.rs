//! # Application
//!
//! Shared model of a tenant application, used by both the form controller
//! and the submission server.
//!
//! ## Payload
//!
//! The client posts one flat JSON object, keys in camelCase:
//!
//! ```json
//! { "fullName": "Jane Doe", "married": "no", "signature": "data:image/png;base64,..." }
//! ```
//!
//! The server answers with [`SubmitResponse`]:
//!
//! ```json
//! { "success": true, "message": "Application submitted successfully!" }
//! ```
//!
//! ## Schema
//!
//! - [`Field`] enumerates every known key, in the order the form shows them
//! - [`FieldSpec`] ties a key to the UI element that produces it
//! - Radio groups use the key itself as the group name

pub mod fields;
pub mod form;
pub mod response;
pub mod text;

pub use fields::{Field, FieldKind, FieldSpec};
pub use form::ApplicationForm;
pub use response::SubmitResponse;

//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - status: device status payload and its interpretation
//! - control: verification-gated control workflow and API request/reply types
//! - notification: toast messages

pub mod control;
pub mod notification;
pub mod status;

pub use control::*;
pub use notification::*;
pub use status::*;

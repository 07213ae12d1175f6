//! Backend API access.
//!
//! [`ApiClient`] wraps every backend endpoint; [`ApiError`] is the typed
//! failure taxonomy shared by all of them.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;

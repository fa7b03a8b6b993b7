//! Shared Kernel
//!
//! Error vocabulary shared by every crate in the workspace:
//! - [`error::kind::ErrorKind`] classifies failures and maps them to HTTP status codes
//! - [`error::app_error::AppError`] carries a client-safe message plus an optional source
//!
//! Only things with the same meaning in every domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}

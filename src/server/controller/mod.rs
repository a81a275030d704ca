//! HTTP request handlers.
//!
//! Controllers authenticate through `AuthGuard`, convert DTOs into domain parameters,
//! call a service and convert the result back into a DTO. Extractor rejections are
//! taken as `Result`s so malformed input surfaces as a JSON `{error}` body.

pub mod health;
pub mod module;
pub mod notification;
pub mod param;

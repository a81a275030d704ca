//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON wire format of every endpoint. Server code converts
//! domain models into these DTOs at the controller boundary.

pub mod api;
pub mod module;
pub mod notification;

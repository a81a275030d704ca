use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Number of rows changed by a bulk update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatedDto {
    pub updated: u64,
}

/// Number of notifications created by a group broadcast.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotifiedDto {
    pub notified: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}

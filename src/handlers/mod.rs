pub mod articles;
pub mod orders;
pub mod users;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Returned by create endpoints that may generate the resource id.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub message: String,
    pub id: String,
}

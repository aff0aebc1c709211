use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of a 400 Bad Request response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub message: String,
}

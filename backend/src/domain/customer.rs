//! Customer identities.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A customer able to place orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Stable customer identifier.
    pub id: Uuid,
    /// Name shown in order summaries.
    #[schema(example = "Ada Lovelace")]
    pub display_name: String,
    /// Contact address.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

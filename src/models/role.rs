use serde::{Deserialize, Serialize};

// Closed set; unknown values are rejected when the payload is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "role_1")]
    Role1,
    #[serde(rename = "role_2")]
    Role2,
    #[serde(rename = "role_3")]
    Role3,
}

use serde::{Deserialize, Serialize};

/// Public profile returned by the user service. Only the display name is used.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
}

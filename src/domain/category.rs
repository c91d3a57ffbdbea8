use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryIcon, CategoryId, CategoryTitle, UserId};

/// Product category owned by exactly one [`crate::domain::user::User`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: CategoryTitle,
    pub icon: CategoryIcon,
    /// Identifier of the owning user.
    pub owner_id: UserId,
}

use serde::{Deserialize, Serialize};

use crate::domain::types::{UserId, UserName, UserSex};

/// A catalog user owning one or more categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub sex: UserSex,
}

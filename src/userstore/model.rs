use serde::{Deserialize, Serialize};

/// A single user record as stored in the backing file.
///
/// Field order matters: it is the order the fields are written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub age: i64,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }
}

/// Returns the position of the first user with the given id, in collection order.
pub fn position_of(users: &[User], id: &str) -> Option<usize> {
    users.iter().position(|u| u.id == id)
}

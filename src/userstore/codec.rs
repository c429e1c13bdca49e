//! # Record Codec
//!
//! Converts between the on-disk JSON text and in-memory [`User`] records.
//!
//! The backing file holds a single compact JSON array:
//!
//! ```text
//! [{"id":"1","email":"a@x.com","age":30},{"id":"2","email":"b@x.com","age":41}]
//! ```
//!
//! A zero-length file is a valid, empty collection. Anything else that is not
//! an array of objects carrying `id`, `email` and `age` is a format error.

use crate::error::Result;
use crate::model::User;

/// Decodes a whole collection. Empty input decodes to an empty collection.
pub fn decode(bytes: &[u8]) -> Result<Vec<User>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let users: Vec<User> = serde_json::from_slice(bytes)?;
    Ok(users)
}

pub fn encode(users: &[User]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(users)?)
}

/// Decodes a single record, as supplied to `add`.
pub fn decode_single(bytes: &[u8]) -> Result<User> {
    Ok(serde_json::from_slice(bytes)?)
}

pub fn encode_single(user: &User) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(user)?)
}

//! # Storage Layer
//!
//! The [`UserStore`] trait is the seam between the commands and the place the
//! collection lives. Commands never touch the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the production store, one JSON file per collection.
//!   Every call opens the file, does its work and drops the handle before
//!   returning, on success and on error alike.
//! - [`memory::InMemoryStore`]: keeps the encoded bytes in memory, for tests.
//!
//! ## Semantics shared by all stores
//!
//! - [`UserStore::read_raw`] returns the stored bytes untouched and fails if
//!   the collection does not exist yet. It never creates anything.
//! - [`UserStore::load`] creates an empty collection when none exists, and
//!   treats empty contents as an empty collection.
//! - [`UserStore::save`] replaces the whole collection. Previous contents are
//!   truncated before the new encoding is written, so no stale trailing bytes
//!   survive a shorter rewrite.

use crate::error::Result;
use crate::model::User;

pub mod fs;
pub mod memory;

pub trait UserStore {
    /// Raw stored bytes, without decoding.
    fn read_raw(&self) -> Result<Vec<u8>>;

    /// Decode the full collection, creating it empty if absent.
    fn load(&mut self) -> Result<Vec<User>>;

    /// Replace the full collection.
    fn save(&mut self, users: &[User]) -> Result<()>;
}

use super::UserStore;
use crate::codec;
use crate::error::Result;
use crate::model::User;
use std::io;

/// In-memory storage for testing.
/// Holds the encoded bytes so raw reads behave like a file would.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contents: Option<Vec<u8>>,
}

impl InMemoryStore {
    /// A store with no collection yet, like a missing file.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Some(bytes.into()),
        }
    }

    pub fn contents(&self) -> Option<&[u8]> {
        self.contents.as_deref()
    }
}

impl UserStore for InMemoryStore {
    fn read_raw(&self) -> Result<Vec<u8>> {
        self.contents.clone().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "collection does not exist").into()
        })
    }

    fn load(&mut self) -> Result<Vec<User>> {
        let bytes = self.contents.get_or_insert_with(Vec::new);
        codec::decode(bytes)
    }

    fn save(&mut self, users: &[User]) -> Result<()> {
        self.contents = Some(codec::encode(users)?);
        Ok(())
    }
}

// --- Test Fixtures ---

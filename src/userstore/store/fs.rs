use super::UserStore;
use crate::codec;
use crate::error::Result;
use crate::model::User;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the backing file for reading and writing, creating it if absent.
    fn open(&self) -> Result<File> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;
        Ok(file)
    }
}

impl UserStore for FileStore {
    fn read_raw(&self) -> Result<Vec<u8>> {
        let bytes = fs::read(&self.path)?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "read raw collection");
        Ok(bytes)
    }

    fn load(&mut self) -> Result<Vec<User>> {
        let mut file = self.open()?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        let users = codec::decode(&bytes)?;
        debug!(path = %self.path.display(), records = users.len(), "loaded collection");
        Ok(users)
    }

    fn save(&mut self, users: &[User]) -> Result<()> {
        let bytes = codec::encode(users)?;

        let mut file = self.open()?;
        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        file.write_all(&bytes)?;
        file.sync_all()?;

        debug!(path = %self.path.display(), records = users.len(), "saved collection");
        Ok(())
    }
}

//! # API Facade
//!
//! [`UserApi`] is the single entry point for the four operations. It
//! dispatches a validated [`Operation`] to its command and hands back the
//! structured [`CmdResult`]; the command modules hold the logic.
//!
//! [`perform`] is the whole invocation in one call: validate [`Params`], open
//! the file-backed store, run the operation and write the result to a sink.
//!
//! ## What goes to the sink
//!
//! - the payload bytes, verbatim and possibly empty (`list`, `findById`);
//! - warning messages (conflict on `add`, miss on `remove`), without a newline.
//!
//! Info messages are logged instead of written, so a successful mutation
//! produces no output at all.

use crate::commands::{self, CmdResult, MessageLevel};
use crate::config::{Operation, Params, Request};
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::UserStore;
use std::io::Write;
use tracing::{debug, info};

/// Generic over `UserStore` so the dispatch can be exercised without a disk.
pub struct UserApi<S: UserStore> {
    store: S,
}

impl<S: UserStore> UserApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add(&mut self, item: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, item)
    }

    pub fn remove(&mut self, id: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn find_by_id(&mut self, id: &str) -> Result<CmdResult> {
        commands::find::run(&mut self.store, id)
    }

    pub fn run(&mut self, operation: &Operation) -> Result<CmdResult> {
        debug!(operation = %operation.kind(), "dispatching");
        match operation {
            Operation::List => self.list(),
            Operation::Add { item } => self.add(item),
            Operation::Remove { id } => self.remove(id),
            Operation::FindById { id } => self.find_by_id(id),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Runs one invocation against the file named in `params`.
pub fn perform<W: Write>(params: &Params, writer: &mut W) -> Result<CmdResult> {
    let request = Request::from_params(params)?;
    let mut api = UserApi::new(FileStore::new(&request.file_name));
    let result = api.run(&request.operation)?;
    write_result(&result, writer)?;
    Ok(result)
}

/// Writes a result to the sink. Sink failures surface as IO errors.
pub fn write_result<W: Write>(result: &CmdResult, writer: &mut W) -> Result<()> {
    writer.write_all(result.payload())?;
    for message in &result.messages {
        match message.level {
            MessageLevel::Warning => writer.write_all(message.content.as_bytes())?,
            MessageLevel::Info => info!("{}", message.content),
        }
    }
    writer.flush()?;
    Ok(())
}

pub use crate::commands::{CmdMessage, Outcome};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserStoreError;
    use crate::model::User;
    use crate::store::memory::InMemoryStore;
    use std::fs;
    use std::io;
    use std::path::Path;

    const ITEM: &str = r#"{"id":"1","email":"a@x.com","age":30}"#;

    fn params_for(op: &str, file: &Path) -> Params {
        Params::new(op).with_file_name(file.to_string_lossy())
    }

    fn perform_to_string(params: &Params) -> Result<(CmdResult, String)> {
        let mut out = Vec::new();
        let result = perform(params, &mut out)?;
        Ok((result, String::from_utf8(out).unwrap()))
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn run_dispatches_each_operation() {
        let mut api = UserApi::new(InMemoryStore::new());

        let added = api
            .run(&Operation::Add {
                item: ITEM.to_string(),
            })
            .unwrap();
        assert_eq!(added.outcome, Outcome::Written);

        let found = api.run(&Operation::FindById { id: "1".into() }).unwrap();
        assert_eq!(found.affected_users, vec![User::new("1", "a@x.com", 30)]);

        let listed = api.run(&Operation::List).unwrap();
        assert_eq!(listed.payload(), api.store().contents().unwrap());

        let removed = api.run(&Operation::Remove { id: "1".into() }).unwrap();
        assert_eq!(removed.outcome, Outcome::Written);
        assert_eq!(api.store().contents().unwrap(), b"[]");
    }

    #[test]
    fn walkthrough_against_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("users.json");
        fs::write(&file, "[]").unwrap();

        let (_, out) = perform_to_string(&params_for("add", &file).with_item(ITEM)).unwrap();
        assert_eq!(out, "");
        assert_eq!(fs::read_to_string(&file).unwrap(), format!("[{}]", ITEM));

        let (_, out) = perform_to_string(&params_for("findById", &file).with_id("1")).unwrap();
        assert_eq!(out, ITEM);

        let (_, out) = perform_to_string(&params_for("remove", &file).with_id("1")).unwrap();
        assert_eq!(out, "");
        assert_eq!(fs::read_to_string(&file).unwrap(), "[]");

        let (result, out) =
            perform_to_string(&params_for("findById", &file).with_id("1")).unwrap();
        assert_eq!(out, "");
        assert_eq!(result.outcome, Outcome::NotFound { id: "1".into() });
    }

    #[test]
    fn duplicate_add_writes_conflict_message() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("users.json");

        perform_to_string(&params_for("add", &file).with_item(ITEM)).unwrap();
        let before = fs::read(&file).unwrap();

        let (result, out) = perform_to_string(&params_for("add", &file).with_item(ITEM)).unwrap();
        assert_eq!(out, "Item with id 1 already exists");
        assert!(matches!(result.outcome, Outcome::Conflict { .. }));
        assert_eq!(fs::read(&file).unwrap(), before);
    }

    #[test]
    fn remove_miss_writes_message_with_actual_id() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("users.json");
        fs::write(&file, format!("[{}]", ITEM)).unwrap();

        let (_, out) = perform_to_string(&params_for("remove", &file).with_id("7")).unwrap();
        assert_eq!(out, "Item with id 7 not found");
        assert_eq!(fs::read_to_string(&file).unwrap(), format!("[{}]", ITEM));
    }

    #[test]
    fn list_is_verbatim_and_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("users.json");
        fs::write(&file, "garbage that is not json").unwrap();

        let (_, first) = perform_to_string(&params_for("list", &file)).unwrap();
        let (_, second) = perform_to_string(&params_for("list", &file)).unwrap();
        assert_eq!(first, "garbage that is not json");
        assert_eq!(first, second);
    }

    #[test]
    fn list_of_missing_file_fails_without_creating_it() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("absent.json");

        let err = perform_to_string(&params_for("list", &file)).unwrap_err();
        assert!(matches!(err, UserStoreError::Io(_)));
        assert!(!file.exists());
    }

    #[test]
    fn other_operations_create_missing_file() {
        for (op, params) in [
            ("add", Params::new("add").with_item(ITEM)),
            ("remove", Params::new("remove").with_id("1")),
            ("findById", Params::new("findById").with_id("1")),
        ] {
            let dir = tempfile::tempdir().unwrap();
            let file = dir.path().join("absent.json");
            let params = params.with_file_name(file.to_string_lossy());

            perform_to_string(&params).unwrap();
            assert!(file.exists(), "{} should create the file", op);

            let (_, listed) = perform_to_string(&params_for("list", &file)).unwrap();
            let users = crate::codec::decode(listed.as_bytes()).unwrap();
            assert!(users.len() <= 1);
        }
    }

    #[test]
    fn validation_happens_before_io() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("users.json");

        let err = perform_to_string(&params_for("remove", &file)).unwrap_err();
        assert!(matches!(err, UserStoreError::MissingParameter("id")));

        let err = perform_to_string(&params_for("drop", &file)).unwrap_err();
        assert!(matches!(err, UserStoreError::UnknownOperation(_)));

        let err = perform_to_string(&params_for("add", &file).with_item("{oops")).unwrap_err();
        assert!(matches!(err, UserStoreError::Format(_)));

        assert!(!file.exists());
    }

    #[test]
    fn sink_failure_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("users.json");
        fs::write(&file, "[]").unwrap();

        let err = perform(&params_for("list", &file), &mut BrokenSink).unwrap_err();
        assert!(matches!(err, UserStoreError::Io(_)));
    }

    #[test]
    fn info_messages_are_not_written() {
        let result = CmdResult::new(Outcome::Written).with_message(CmdMessage::info("Added user 1"));
        let mut out = Vec::new();
        write_result(&result, &mut out).unwrap();
        assert!(out.is_empty());
    }
}

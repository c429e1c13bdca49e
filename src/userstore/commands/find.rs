use crate::codec;
use crate::commands::{CmdResult, Outcome};
use crate::error::Result;
use crate::store::UserStore;
use tracing::debug;

/// Looks up the first record with the given id. Never rewrites the store.
///
/// A hit yields the record's JSON as payload; a miss yields `NotFound` with an
/// empty payload and no message.
pub fn run<S: UserStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let users = store.load()?;

    match users.into_iter().find(|u| u.id == id) {
        Some(user) => {
            let bytes = codec::encode_single(&user)?;
            Ok(CmdResult::new(Outcome::Payload(bytes)).with_affected_users(vec![user]))
        }
        None => {
            debug!(%id, "no user with id");
            Ok(CmdResult::new(Outcome::NotFound { id: id.to_string() }))
        }
    }
}

use crate::codec;
use crate::commands::{conflict_message, CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::model::position_of;
use crate::store::UserStore;
use tracing::debug;

/// Appends the record encoded in `item` unless its id is already taken.
///
/// The item is decoded before the store is touched, so a malformed item
/// leaves no trace behind.
pub fn run<S: UserStore>(store: &mut S, item: &str) -> Result<CmdResult> {
    let candidate = codec::decode_single(item.as_bytes())?;
    let mut users = store.load()?;

    if position_of(&users, &candidate.id).is_some() {
        debug!(id = %candidate.id, "add rejected, id already present");
        let message = CmdMessage::warning(conflict_message(&candidate.id));
        return Ok(CmdResult::new(Outcome::Conflict { id: candidate.id }).with_message(message));
    }

    users.push(candidate.clone());
    store.save(&users)?;
    debug!(id = %candidate.id, records = users.len(), "added user");

    let message = CmdMessage::info(format!("Added user {}", candidate.id));
    Ok(CmdResult::new(Outcome::Written)
        .with_affected_users(vec![candidate])
        .with_message(message))
}

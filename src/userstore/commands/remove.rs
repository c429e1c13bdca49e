use crate::commands::{not_found_message, CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::model::position_of;
use crate::store::UserStore;
use tracing::debug;

/// Removes the first record with the given id and rewrites the collection.
pub fn run<S: UserStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut users = store.load()?;

    let Some(index) = position_of(&users, id) else {
        debug!(%id, "remove found nothing");
        return Ok(CmdResult::new(Outcome::NotFound { id: id.to_string() })
            .with_message(CmdMessage::warning(not_found_message(id))));
    };

    let removed = users.remove(index);
    store.save(&users)?;
    debug!(%id, records = users.len(), "removed user");

    Ok(CmdResult::new(Outcome::Written)
        .with_affected_users(vec![removed])
        .with_message(CmdMessage::info(format!("Removed user {}", id))))
}

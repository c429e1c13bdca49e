use crate::commands::{CmdResult, Outcome};
use crate::error::Result;
use crate::store::UserStore;

/// Returns the stored collection exactly as it sits in the store.
///
/// No decoding happens here, so a malformed file comes back verbatim.
pub fn run<S: UserStore>(store: &S) -> Result<CmdResult> {
    let bytes = store.read_raw()?;
    Ok(CmdResult::new(Outcome::Payload(bytes)))
}

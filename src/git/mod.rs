//! Git integration: feeds the branch store from a repository

mod branch;

pub use branch::{BranchSource, SourceError};

use crate::store::BranchWriter;
use tracing::{debug, warn};

/// Re-read `source` and push the result into the store when it changed.
///
/// Returns `true` if an update was published.
///
/// # Errors
///
/// Returns an error if the repository cannot be read; the store keeps its
/// previous snapshot.
pub fn refresh(source: &BranchSource, writer: &mut BranchWriter) -> Result<bool, SourceError> {
    let update = source.read()?;
    let current = writer.reader().read();
    if current.branches == update.branches && current.current_branch == update.current_branch {
        debug!("Branch list unchanged");
        return Ok(false);
    }

    writer.update(update);
    Ok(true)
}

/// Like [`refresh`], but logs failures instead of returning them.
pub fn refresh_or_warn(source: &BranchSource, writer: &mut BranchWriter) -> bool {
    match refresh(source, writer) {
        Ok(changed) => changed,
        Err(e) => {
            warn!(error = %e, "Failed to refresh branches");
            false
        }
    }
}

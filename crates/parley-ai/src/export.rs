//! Plain-text transcript export.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;

use crate::session::Session;

/// `chat_YYYYMMDD_HHMMSS.txt` for the given local time.
pub fn export_filename(timestamp: NaiveDateTime) -> String {
    format!("chat_{}.txt", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Write the session's plain-text export into `dir`, creating it if needed.
///
/// Returns the path of the written file.
pub fn write_export(
    session: &Session,
    dir: &Path,
    timestamp: NaiveDateTime,
) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(timestamp));
    std::fs::write(&path, session.export_plain_text())?;
    info!("exported transcript to {}", path.display());
    Ok(path)
}

pub mod analyze;
pub mod build;
pub mod stats;

use std::path::Path;

use collab_core::error::ErrorCode;
use collab_core::event::InteractionLog;
use collab_core::users::UserIndex;

use crate::output::{CliError, OutputMode, render_error};

/// Render `err` under `code` in `output` mode and hand it back for
/// propagation.
pub fn fail(output: OutputMode, code: ErrorCode, err: anyhow::Error) -> anyhow::Error {
    let cli_error = CliError::from_code(code, format!("{err:#}"));
    if let Err(render_err) = render_error(output, &cli_error) {
        tracing::warn!(%render_err, "failed to render error");
    }
    err
}

/// A loaded log together with the user index derived from it.
pub struct Loaded {
    pub log: InteractionLog,
    pub users: UserIndex,
}

/// Load the interaction log at `path`, reporting failures in `output` mode.
pub fn load_log(path: &Path, output: OutputMode) -> anyhow::Result<Loaded> {
    let log = InteractionLog::load(path)
        .map_err(|err| fail(output, ErrorCode::InteractionLogParseError, err))?;
    let users = UserIndex::from_log(&log);
    Ok(Loaded { log, users })
}

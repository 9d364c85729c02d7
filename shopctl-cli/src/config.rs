//! Environment loading

use std::path::PathBuf;

/// Load a `.env` file from the current directory or its parents.
///
/// Variables already set in the environment win; dotenvy never overwrites.
/// Returns the path that was loaded, if any. Runs before tracing is
/// initialized, so the caller logs the outcome.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

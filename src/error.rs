use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of the patch run. None of these are recovered locally;
/// they propagate to `main` and end the process.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("cannot read input spec {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input spec {} is not a valid JSON object", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("cannot write patched spec {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

//! Engine seam for the bridge.
//!
//! The engine itself is an external collaborator; the bridge only needs a
//! blocking entry point it can hand its channel-backed streams to.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Startup inputs for the engine's protocol loop.
#[derive(Debug, Clone)]
pub struct EngineArgs {
    /// Path to the primary model resource.
    pub model: PathBuf,
    /// Path to the human-profile model resource.
    pub human_model: PathBuf,
    /// Path to the GTP configuration file.
    pub config: PathBuf,
}

impl EngineArgs {
    #[must_use]
    pub fn new(
        model: impl Into<PathBuf>,
        human_model: impl Into<PathBuf>,
        config: impl Into<PathBuf>,
    ) -> Self {
        EngineArgs {
            model: model.into(),
            human_model: human_model.into(),
            config: config.into(),
        }
    }

    #[must_use]
    pub fn model(&self) -> &Path {
        &self.model
    }

    #[must_use]
    pub fn human_model(&self) -> &Path {
        &self.human_model
    }

    #[must_use]
    pub fn config(&self) -> &Path {
        &self.config
    }
}

/// A Go engine speaking GTP over caller-supplied streams.
///
/// Implementations read command lines from `input` and write response lines
/// to `output`, returning only when the protocol loop decides to exit
/// (e.g. on `quit` or input end-of-stream). The streams hide the transport:
/// under the bridge they are cross-thread channels, but an implementation
/// may be run over real stdin/stdout unchanged.
pub trait GtpEngine {
    /// Run the protocol loop to completion on the calling thread.
    fn run(
        &mut self,
        args: &EngineArgs,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> io::Result<()>;

    /// Engine name, for logging.
    fn name(&self) -> &'static str;
}

use std::path::PathBuf;

/// Context passed throughout the tool containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (show per-step details)
    pub verbose: bool,

    /// Root directory of the project being packaged
    pub project_dir: PathBuf,
}

impl Context {
    pub fn new(project_dir: PathBuf, verbose: bool) -> Self {
        Self {
            verbose,
            project_dir,
        }
    }
}

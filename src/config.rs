/// Settings read once from the command line and passed down unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of commits listed.
    pub limit: usize,
    /// Commits skipped before the listing starts.
    pub skip: usize,
    /// Emit debug-level logs on stderr.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: 10,
            skip: 0,
            verbose: false,
        }
    }
}

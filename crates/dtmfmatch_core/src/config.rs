//! Matcher build configuration.
//!
//! Grammar patterns are compiled ahead of time into a fully determinized automaton. Large
//! repetition counts can blow that automaton up, so construction is bounded by size limits.

/// Default upper bound (bytes) on the compiled automaton and on determinization scratch space.
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Matcher build configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Maximum heap size of the compiled automaton (`None` = unbounded)
    pub size_limit: Option<usize>,
    /// Maximum heap usage while determinizing (`None` = unbounded)
    pub determinize_size_limit: Option<usize>,
    /// Minimize the automaton after construction
    pub minimize: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            size_limit: Some(DEFAULT_SIZE_LIMIT),
            determinize_size_limit: Some(DEFAULT_SIZE_LIMIT),
            minimize: false,
        }
    }
}

impl MatcherConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the automaton size limit
    pub fn with_size_limit(mut self, limit: Option<usize>) -> Self {
        self.size_limit = limit;
        self
    }

    /// Set the determinization size limit
    pub fn with_determinize_size_limit(mut self, limit: Option<usize>) -> Self {
        self.determinize_size_limit = limit;
        self
    }

    /// Enable or disable minimization
    pub fn with_minimize(mut self, minimize: bool) -> Self {
        self.minimize = minimize;
        self
    }
}

/// Fixed pieces of the generated header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitConfig {
    /// Prepended to the uppercased header stem to form the include guard.
    pub guard_prefix: String,
    /// System headers included ahead of the declarations, in order.
    pub includes: Vec<String>,
    /// Tool name written into the attribution comment.
    pub generator: String,
}

pub const DEFAULT_GUARD_PREFIX: &str = "_CONTRIB_GPERF_";
pub const DEFAULT_GENERATOR: &str = "gperf_convert.py";

impl SplitConfig {
    pub fn new() -> Self {
        Self {
            guard_prefix: DEFAULT_GUARD_PREFIX.to_string(),
            includes: vec!["stdlib.h".to_string(), "string.h".to_string()],
            generator: DEFAULT_GENERATOR.to_string(),
        }
    }

    pub fn with_guard_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.guard_prefix = prefix.into();
        self
    }

    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::new()
    }
}

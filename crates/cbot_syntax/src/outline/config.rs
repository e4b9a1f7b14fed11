//! Outline pass configuration.

use crate::diagnostics::DiagnosticPolicy;

/// Configuration for [`super::outline`].
#[derive(Debug, Clone)]
pub struct OutlineConfig {
    /// Keep going after a declaration fails, resynchronizing at the next block
    pub recover: bool,
    /// Stop once this many diagnostics were collected (at least one is always reported)
    pub max_errors: usize,
    /// Break class bodies down into fields and methods
    pub scan_members: bool,
    /// List the calls made inside function and method bodies
    pub collect_calls: bool,
    /// Policy for each declaration's error context
    pub policy: DiagnosticPolicy,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            recover: true,
            max_errors: 20,
            scan_members: true,
            collect_calls: true,
            policy: DiagnosticPolicy::Overwrite,
        }
    }
}

impl OutlineConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable recovery after a failed declaration or member
    pub fn with_recover(mut self, recover: bool) -> Self {
        self.recover = recover;
        self
    }

    /// Set the diagnostic cap
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    pub fn with_scan_members(mut self, scan_members: bool) -> Self {
        self.scan_members = scan_members;
        self
    }

    pub fn with_collect_calls(mut self, collect_calls: bool) -> Self {
        self.collect_calls = collect_calls;
        self
    }

    /// Set the diagnostic policy
    pub fn with_policy(mut self, policy: DiagnosticPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Effective cap: zero is treated as one.
    pub(crate) fn error_limit(&self) -> usize {
        self.max_errors.max(1)
    }
}

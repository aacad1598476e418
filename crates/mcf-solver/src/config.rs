//! Run configuration.

use mcf_core::Flow;

use crate::error::{SolverError, SolverResult};

/// Solver run configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Stop once this much flow (cumulative over the solver's runs) has been delivered.
    pub flow_limit: Option<Flow>,
    /// Stop after this many augmentations within one run.
    pub max_augmentations: Option<usize>,
    /// Re-check pairing, capacities and conservation after every augmentation.
    pub verify_invariants: bool,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flow_limit(mut self, limit: Flow) -> Self {
        self.flow_limit = Some(limit);
        self
    }

    pub fn with_max_augmentations(mut self, max: usize) -> Self {
        self.max_augmentations = Some(max);
        self
    }

    pub fn with_verification(mut self, on: bool) -> Self {
        self.verify_invariants = on;
        self
    }

    pub fn validate(&self) -> SolverResult<()> {
        if let Some(limit) = self.flow_limit {
            if limit < 0 {
                return Err(SolverError::InvalidConfig {
                    what: format!("flow limit must be non-negative, got {limit}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_limits() {
        let cfg = SolverConfig::default();
        assert_eq!(cfg.flow_limit, None);
        assert_eq!(cfg.max_augmentations, None);
        assert!(!cfg.verify_invariants);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn negative_flow_limit_is_rejected() {
        let cfg = SolverConfig::new().with_flow_limit(-1);
        assert!(matches!(
            cfg.validate(),
            Err(SolverError::InvalidConfig { .. })
        ));
    }
}

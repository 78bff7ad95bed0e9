use std::fmt;

/// Lifecycle of one ingestion run. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineState {
    Idle,
    Phase1Scanning,
    Phase2Resolving,
    Done,
}

impl PipelineState {
    pub fn can_advance_to(self, next: PipelineState) -> bool {
        next > self
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineState::Idle => "idle",
            PipelineState::Phase1Scanning => "scanning",
            PipelineState::Phase2Resolving => "resolving",
            PipelineState::Done => "done",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_only() {
        assert!(PipelineState::Idle.can_advance_to(PipelineState::Phase1Scanning));
        assert!(PipelineState::Phase1Scanning.can_advance_to(PipelineState::Phase2Resolving));
        assert!(PipelineState::Phase2Resolving.can_advance_to(PipelineState::Done));
        assert!(!PipelineState::Done.can_advance_to(PipelineState::Phase1Scanning));
        assert!(!PipelineState::Phase2Resolving.can_advance_to(PipelineState::Phase2Resolving));
    }
}

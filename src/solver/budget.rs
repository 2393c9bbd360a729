use super::{ResourceLimits, Termination};
use std::time::Instant;

/// Time and node ceilings for one search call.
///
/// Checked once per dequeued node, never per generated successor.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Budget {
    limits: ResourceLimits,
    started: Instant,
}

impl Budget {
    pub(crate) fn start(limits: ResourceLimits) -> Self {
        Budget {
            limits,
            started: Instant::now(),
        }
    }

    /// `Some` with the reason to stop if expanding one more node would break a limit.
    pub(crate) fn exceeded(&self, nodes_expanded: u64) -> Option<Termination> {
        if nodes_expanded >= self.limits.node_limit {
            return Some(Termination::NodeLimit);
        }
        if self.started.elapsed() >= self.limits.time_limit {
            return Some(Termination::TimeLimit);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_node_limit() {
        let budget = Budget::start(ResourceLimits::default().with_node_limit(10));
        assert_eq!(budget.exceeded(9), None);
        assert_eq!(budget.exceeded(10), Some(Termination::NodeLimit));
    }

    #[test]
    fn test_time_limit() {
        let budget = Budget::start(ResourceLimits::default().with_time_limit(Duration::ZERO));
        assert_eq!(budget.exceeded(0), Some(Termination::TimeLimit));
    }
}

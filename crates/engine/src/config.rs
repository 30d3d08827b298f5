//! Engine construction-time tuning knobs

/// Initial capacity hints for the engine's internal maps and sets.
///
/// None of these bound the engine's growth; they only size the first
/// allocation to avoid early rehashing when the caller has a rough idea of
/// the rule-graph's scale up front.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Expected number of concurrently parked transforms.
    pub expected_transforms: usize,
    /// Expected number of distinct whole-datum blockers outstanding at once.
    pub expected_id_blockers: usize,
    /// Expected number of distinct id+subscript blockers outstanding at once.
    pub expected_idsub_blockers: usize,
    /// The local rank this engine runs on, passed through to
    /// [`crate::service::DataService::local_subscribe`] as the listener.
    pub local_rank: dataflow_core::ServerRank,
}

impl EngineConfig {
    /// A config with the given local rank and no capacity hints.
    pub fn new(local_rank: dataflow_core::ServerRank) -> Self {
        EngineConfig {
            expected_transforms: 0,
            expected_id_blockers: 0,
            expected_idsub_blockers: 0,
            local_rank,
        }
    }

    /// Set the expected transform count.
    pub fn with_expected_transforms(mut self, n: usize) -> Self {
        self.expected_transforms = n;
        self
    }

    /// Set the expected id-blocker count.
    pub fn with_expected_id_blockers(mut self, n: usize) -> Self {
        self.expected_id_blockers = n;
        self
    }

    /// Set the expected id+subscript blocker count.
    pub fn with_expected_idsub_blockers(mut self, n: usize) -> Self {
        self.expected_idsub_blockers = n;
        self
    }
}

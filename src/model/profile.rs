#[derive(Debug, Clone)]
pub struct ScoringProfile {
    /// Fixed normalizer for pairwise scores; not derived from the data.
    pub max_pairwise_distance: f64,
    pub decimals: u32,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            max_pairwise_distance: 10.0,
            decimals: 2,
        }
    }
}

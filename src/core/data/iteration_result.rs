/// Outcome of running the escape-time loop for one point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IterationResult {
    /// The orbit stayed within the threshold for the whole iteration budget.
    Bounded,
    /// The orbit exceeded the threshold at this 0-indexed iteration.
    Escaped(u32),
}

impl IterationResult {
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded)
    }

    #[must_use]
    pub fn escape_count(&self) -> Option<u32> {
        match self {
            Self::Bounded => None,
            Self::Escaped(count) => Some(*count),
        }
    }
}

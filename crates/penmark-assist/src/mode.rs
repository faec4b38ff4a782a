/// Which assistance highlight is active.
///
/// The modes are mutually exclusive: enabling one disables the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssistMode {
    /// No assistance highlight.
    #[default]
    Off,
    /// Annotate cells that are a hidden single in some house.
    HiddenSingles,
    /// Highlight cells with exactly two candidates.
    BiValue,
}

impl AssistMode {
    /// Toggles `mode`: selecting the active mode turns assistance off,
    /// selecting the other replaces it.
    #[must_use]
    pub fn toggled(self, mode: Self) -> Self {
        if self == mode { Self::Off } else { mode }
    }
}

/// What a bracket test found, and what a solution represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Interest {
    /// Nothing found.
    #[default]
    None,
    Root,
    LocalMinimum,
    LocalMaximum,
    Discontinuity,
    /// A root of the difference of two functions.
    Intersection,
}

impl Interest {
    /// Returns `true` for [`Interest::None`].
    #[must_use]
    pub fn is_none(self) -> bool {
        self == Self::None
    }

    /// Returns `true` for local minima and maxima.
    #[must_use]
    pub fn is_extremum(self) -> bool {
        matches!(self, Self::LocalMinimum | Self::LocalMaximum)
    }
}

//! Index patterns, selecting members of a collection list by position.

// -------------------------------------------------------------------------------------------------

/// Selects items of a sequence by index, optionally repeating every `period` items.
///
/// Negative indices count from the end: from the end of the period when a period is set,
/// else from the end of the sequence.
///
/// # Examples:
///
/// ```rust
/// use baca::IndexPattern;
/// // every second item, starting with the first one
/// let pattern = IndexPattern::new(vec![0]).with_period(2);
/// assert!(pattern.matches_index(0, 5));
/// assert!(!pattern.matches_index(1, 5));
/// assert!(pattern.matches_index(4, 5));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexPattern {
    indices: Vec<isize>,
    period: Option<usize>,
    inverted: bool,
}

impl IndexPattern {
    /// Create a new pattern which selects the given indices.
    pub fn new(indices: Vec<isize>) -> Self {
        Self {
            indices,
            period: None,
            inverted: false,
        }
    }

    /// Pattern which selects the first `count` items.
    pub fn first(count: usize) -> Self {
        Self::new((0..count as isize).collect())
    }

    /// Pattern which selects the last `count` items.
    pub fn last(count: usize) -> Self {
        Self::new((-(count as isize)..0).collect())
    }

    /// Repeat the pattern every `period` items. A zero period is ignored.
    #[must_use]
    pub fn with_period(mut self, period: usize) -> Self {
        self.period = if period > 0 { Some(period) } else { None };
        self
    }

    /// Negate the pattern's selection.
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.inverted = !self.inverted;
        self
    }

    /// Selected indices.
    pub fn indices(&self) -> &[isize] {
        &self.indices
    }

    /// Repeat period, if any.
    pub fn period(&self) -> Option<usize> {
        self.period
    }

    /// true when the pattern's selection is negated.
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Returns true if the item at `index` in a sequence of `total_length` items is selected.
    pub fn matches_index(&self, index: usize, total_length: usize) -> bool {
        let matches = if index >= total_length {
            false
        } else {
            let (index, length) = match self.period {
                Some(period) => (index % period, period),
                None => (index, total_length),
            };
            self.indices.iter().any(|&selected| {
                let selected = if selected < 0 {
                    length as isize + selected
                } else {
                    selected
                };
                selected == index as isize
            })
        };
        matches != self.inverted
    }

    /// Boolean selection mask for a sequence of `total_length` items.
    pub fn mask(&self, total_length: usize) -> Vec<bool> {
        (0..total_length)
            .map(|index| self.matches_index(index, total_length))
            .collect()
    }
}

// --------------------------------------------------------------------------------------------------

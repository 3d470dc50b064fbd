//! Sort column/direction state and its cycling transition.

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The sort a table is currently displaying.
///
/// `direction: None` means unsorted (rows keep their source order); the key
/// is empty in that state. Each table owns exactly one `SortState`, created
/// unsorted when the screen mounts and advanced only through [`cycle`].
///
/// [`cycle`]: SortState::cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: String,
    pub direction: Option<SortDirection>,
}

impl SortState {
    /// The initial, unsorted state.
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: Some(SortDirection::Ascending),
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: Some(SortDirection::Descending),
        }
    }

    /// Advance the state for a press on a column header.
    ///
    /// Selecting a new column starts ascending. Repeated presses on the same
    /// column go ascending → descending → unsorted, so a third press clears
    /// the sort entirely and the table falls back to its source order.
    pub fn cycle(&self, selected: &str) -> Self {
        if self.key != selected {
            return Self::ascending(selected);
        }
        match self.direction {
            Some(SortDirection::Ascending) => Self::descending(selected),
            Some(SortDirection::Descending) => Self::unsorted(),
            None => Self::ascending(selected),
        }
    }

    /// True when this state actually orders rows.
    pub fn is_active(&self) -> bool {
        self.direction.is_some() && !self.key.is_empty()
    }

    /// The direction shown on a specific column header, if that column is
    /// the one being sorted.
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        if self.key == key {
            self.direction
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unsorted() {
        let state = SortState::default();
        assert_eq!(state, SortState::unsorted());
        assert!(!state.is_active());
        assert!(state.key.is_empty());
    }

    #[test]
    fn first_press_sorts_ascending() {
        let state = SortState::unsorted().cycle("title");
        assert_eq!(state, SortState::ascending("title"));
    }

    #[test]
    fn second_press_flips_descending() {
        let state = SortState::ascending("title").cycle("title");
        assert_eq!(state, SortState::descending("title"));
    }

    #[test]
    fn third_press_clears() {
        let state = SortState::descending("title").cycle("title");
        assert_eq!(state, SortState::unsorted());
        assert!(state.key.is_empty());
    }

    #[test]
    fn switching_column_restarts_ascending() {
        let state = SortState::ascending("title").cycle("date");
        assert_eq!(state, SortState::ascending("date"));
    }

    #[test]
    fn direction_for_other_column_is_none() {
        let state = SortState::ascending("title");
        assert_eq!(state.direction_for("title"), Some(SortDirection::Ascending));
        assert_eq!(state.direction_for("date"), None);
    }
}

//! Fluent selection over a closed option enumeration.
//!
//! A [`SelectionBuilder`] accumulates selections from an enumeration's
//! members and yields an immutable [`Selection`] holding exactly the options
//! that were picked. This is a standalone utility; it never touches the
//! reclamation registry.

use std::collections::BTreeSet;
use std::fmt;

use reclaim_core::{Error, Result};

/// A closed enumeration of selectable options.
///
/// `ALL` lists every member; names must be unique within it.
pub trait SelectableOption: Copy + Ord + fmt::Debug + 'static {
    /// Every member of the enumeration
    const ALL: &'static [Self];

    /// Stable name used for lookup by [`SelectionBuilder::select_named`]
    fn name(&self) -> &'static str;

    /// Resolve a name back to a member
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.name() == name)
    }
}

/// Fluent builder accumulating option selections
#[derive(Debug, Clone)]
pub struct SelectionBuilder<O: SelectableOption> {
    selected: BTreeSet<O>,
}

impl<O: SelectableOption> SelectionBuilder<O> {
    /// Start with nothing selected
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }

    /// Select an option. Selecting the same option twice is the same as
    /// selecting it once.
    #[must_use]
    pub fn select(mut self, option: O) -> Self {
        self.selected.insert(option);
        self
    }

    /// Select an option by name, failing fast at the point of selection if
    /// the name is not a member of the enumeration.
    pub fn select_named(self, name: &str) -> Result<Self> {
        match O::from_name(name) {
            Some(option) => Ok(self.select(option)),
            None => Err(Error::invalid_option(name)),
        }
    }

    /// Finish building, yielding the immutable selection
    #[must_use]
    pub fn build(self) -> Selection<O> {
        Selection {
            selected: self.selected,
        }
    }
}

impl<O: SelectableOption> Default for SelectionBuilder<O> {
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable set of selected options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<O: SelectableOption> {
    selected: BTreeSet<O>,
}

impl<O: SelectableOption> Selection<O> {
    /// Whether `option` was selected
    #[must_use]
    pub fn contains(&self, option: O) -> bool {
        self.selected.contains(&option)
    }

    /// Iterate the selected options in their natural order
    pub fn options(&self) -> impl Iterator<Item = O> + '_ {
        self.selected.iter().copied()
    }

    /// Number of selected options
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing was selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

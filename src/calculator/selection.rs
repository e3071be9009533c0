use thiserror::Error;

use crate::calculator::Catalog;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("pain point #{index} does not exist (catalog has {len} entries)")]
    OutOfRange { index: usize, len: usize },
}

/// One checkbox per catalog entry, by position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    flags: Vec<bool>,
}

impl SelectionSet {
    pub fn new(len: usize) -> Self {
        Self { flags: vec![false; len] }
    }

    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.len())
    }

    pub fn from_flags(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    /// Build a selection from explicit indices, rejecting any that fall
    /// outside the catalog.
    pub fn from_indices(len: usize, indices: &[usize]) -> Result<Self, SelectionError> {
        let mut set = Self::new(len);
        for &index in indices {
            if index >= len {
                return Err(SelectionError::OutOfRange { index, len });
            }
            set.flags[index] = true;
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn is_selected(&self, idx: usize) -> bool {
        self.flags.get(idx).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, idx: usize) {
        if let Some(flag) = self.flags.get_mut(idx) {
            *flag = !*flag;
        }
    }

    pub fn select_all(&mut self) {
        self.flags.iter_mut().for_each(|f| *f = true);
    }

    pub fn count(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }

    /// Indices of checked entries, ascending.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, f)| **f)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unchecked() {
        let set = SelectionSet::new(10);
        assert_eq!(set.len(), 10);
        assert_eq!(set.count(), 0);
        assert!(!set.is_selected(3));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut set = SelectionSet::new(4);
        set.toggle(2);
        assert!(set.is_selected(2));
        set.toggle(2);
        assert!(!set.is_selected(2));
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut set = SelectionSet::new(2);
        set.toggle(5);
        assert_eq!(set.count(), 0);
        assert!(!set.is_selected(5));
    }

    #[test]
    fn test_from_indices() {
        let set = SelectionSet::from_indices(10, &[0, 7, 7]).unwrap();
        assert_eq!(set.selected().collect::<Vec<_>>(), vec![0, 7]);

        let err = SelectionSet::from_indices(10, &[10]).unwrap_err();
        assert_eq!(err, SelectionError::OutOfRange { index: 10, len: 10 });
    }

    #[test]
    fn test_select_all() {
        let mut set = SelectionSet::new(3);
        set.select_all();
        assert_eq!(set.count(), 3);
        assert_eq!(set.selected().collect::<Vec<_>>(), vec![0, 1, 2]);
    }
}

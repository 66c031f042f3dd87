//! Scoped exclusion of node ids during recursion.

use std::collections::HashSet;
use std::ops::{Deref, DerefMut};

/// Holds `id` in the exclusion set until dropped.
///
/// Sibling branches share one set, so removal has to happen on every exit
/// path, `?` returns included.
pub(crate) struct Excluded<'a> {
    ids: &'a mut HashSet<usize>,
    id: usize,
    inserted: bool,
}

impl<'a> Excluded<'a> {
    pub(crate) fn push(ids: &'a mut HashSet<usize>, id: usize) -> Self {
        let inserted = ids.insert(id);
        Self { ids, id, inserted }
    }
}

impl Deref for Excluded<'_> {
    type Target = HashSet<usize>;

    fn deref(&self) -> &Self::Target {
        self.ids
    }
}

impl DerefMut for Excluded<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ids
    }
}

impl Drop for Excluded<'_> {
    fn drop(&mut self) {
        // An id that was already excluded belongs to an outer scope.
        if self.inserted {
            self.ids.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fail_inside(ids: &mut HashSet<usize>) -> Result<(), ()> {
        let scoped = Excluded::push(ids, 5);
        assert!(scoped.contains(&5));
        Err(())
    }

    #[test]
    fn test_pop_on_scope_exit() {
        let mut ids = HashSet::from([0, 1]);
        {
            let mut outer = Excluded::push(&mut ids, 2);
            {
                let inner = Excluded::push(&mut outer, 3);
                assert_eq!(inner.len(), 4);
            }
            assert!(!outer.contains(&3));
            assert!(outer.contains(&2));
        }
        assert_eq!(ids, HashSet::from([0, 1]));
    }

    #[test]
    fn test_pop_on_error() {
        let mut ids = HashSet::from([0]);
        assert!(fail_inside(&mut ids).is_err());
        assert_eq!(ids, HashSet::from([0]));
    }

    #[test]
    fn test_keeps_outer_ownership() {
        let mut ids = HashSet::from([0]);
        {
            let _again = Excluded::push(&mut ids, 0);
        }
        assert!(ids.contains(&0));
    }
}

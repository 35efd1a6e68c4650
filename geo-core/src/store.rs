//! Ordered, capacity-bounded collection of selected map points.
//!
//! The store is the sole source of truth for the current marker list. It is
//! created empty, mutated only by [`MarkerStore::append`] and
//! [`MarkerStore::clear`], and read through [`MarkerStore::snapshot`].

use tracing::debug;

use crate::gate::MAX_MARKERS;
use crate::models::GeoPoint;

/// Insertion-ordered marker list, capped at [`MAX_MARKERS`] entries.
///
/// Position in the list is semantically meaningful: index + 1 is the display
/// ordinal and the payload key suffix. Points are never reordered or
/// deduplicated.
#[derive(Debug, Clone, Default)]
pub struct MarkerStore {
    points: Vec<GeoPoint>,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point, preserving insertion order.
    ///
    /// Once the store holds [`MAX_MARKERS`] points, further appends are
    /// silently ignored. The interaction gate normally prevents the call from
    /// happening at all; the guard here keeps the capacity invariant intact
    /// even if an event slips past it.
    pub fn append(
        &mut self,
        point: GeoPoint,
    ) {
        if self.points.len() >= MAX_MARKERS {
            debug!(?point, "marker limit reached, ignoring point");
            return;
        }
        self.points.push(point);
    }

    /// Resets the store to the empty list. Always succeeds.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only ordered view for rendering and encoding.
    pub fn snapshot(&self) -> &[GeoPoint] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn point(n: f64) -> GeoPoint {
        GeoPoint::new(n, -n)
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = MarkerStore::new();

        store.append(point(1.0));
        store.append(point(2.0));
        store.append(point(3.0));

        assert_eq!(store.snapshot(), &[point(1.0), point(2.0), point(3.0)]);
    }

    #[test]
    fn append_beyond_capacity_is_a_no_op() {
        let mut store = MarkerStore::new();
        for n in 1..=4 {
            store.append(point(f64::from(n)));
        }

        store.append(point(5.0));
        store.append(point(6.0));

        assert_eq!(store.len(), 4);
        assert_eq!(
            store.snapshot(),
            &[point(1.0), point(2.0), point(3.0), point(4.0)]
        );
    }

    #[test]
    fn clear_empties_a_full_store() {
        let mut store = MarkerStore::new();
        for n in 1..=4 {
            store.append(point(f64::from(n)));
        }

        store.clear();

        assert!(store.is_empty());
    }

    #[test]
    fn append_works_again_after_clear() {
        let mut store = MarkerStore::new();
        for n in 1..=4 {
            store.append(point(f64::from(n)));
        }

        store.clear();
        store.append(point(9.0));

        assert_eq!(store.snapshot(), &[point(9.0)]);
    }

    #[test]
    fn new_store_is_empty() {
        let store = MarkerStore::new();

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}

//! Layout caching for memoization.

use crate::engine::{LayoutEngine, LayoutInput, ListGeometry};

/// Remembers the last layout pass and skips recomputation while its input
/// is unchanged.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entry: Option<(LayoutInput, ListGeometry)>,
    hits: usize,
    misses: usize,
}

impl LayoutCache {
    /// Create a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Geometry for `input`, computed with `engine` on a miss.
    pub fn get_or_compute(&mut self, engine: &LayoutEngine, input: LayoutInput) -> &ListGeometry {
        let fresh = matches!(&self.entry, Some((cached, _)) if *cached == input);
        if fresh {
            self.hits += 1;
        } else {
            self.misses += 1;
            let geometry = engine.compute(&input);
            self.entry = Some((input, geometry));
        }
        self.current()
    }

    /// Last computed geometry, if any.
    #[must_use]
    pub fn geometry(&self) -> Option<&ListGeometry> {
        self.entry.as_ref().map(|(_, g)| g)
    }

    /// Last computed geometry, or [`ListGeometry::EMPTY`] before the first
    /// pass.
    #[must_use]
    pub fn current(&self) -> &ListGeometry {
        static EMPTY: ListGeometry = ListGeometry::EMPTY;
        self.geometry().unwrap_or(&EMPTY)
    }

    /// Drop the cached entry.
    pub fn clear(&mut self) {
        self.entry = None;
        self.hits = 0;
        self.misses = 0;
    }

    /// Get the number of cache hits.
    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Get the number of cache misses.
    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    /// Check if the cache is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RowMetrics;
    use crate::header::HeaderSegment;
    use checkdetails_core::Size;

    fn input(rows: usize) -> LayoutInput {
        LayoutInput {
            header: vec![HeaderSegment {
                offset: 0.0,
                width: 40.0,
            }],
            check_width: 20.0,
            row_count: rows,
            viewport: Size::new(200.0, 100.0),
        }
    }

    #[test]
    fn test_cache_new() {
        let cache = LayoutCache::new();
        assert!(cache.is_empty());
        assert!(cache.geometry().is_none());
        assert!(cache.current().rows.is_empty());
    }

    #[test]
    fn test_cache_hit_on_same_input() {
        let engine = LayoutEngine::new(RowMetrics::default());
        let mut cache = LayoutCache::new();

        let first = cache.get_or_compute(&engine, input(4)).clone();
        let second = cache.get_or_compute(&engine, input(4)).clone();

        assert_eq!(first, second);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_cache_miss_on_changed_input() {
        let engine = LayoutEngine::default();
        let mut cache = LayoutCache::new();

        cache.get_or_compute(&engine, input(4));
        let g = cache.get_or_compute(&engine, input(5));
        assert_eq!(g.rows.len(), 5);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_cache_clear() {
        let engine = LayoutEngine::default();
        let mut cache = LayoutCache::new();
        cache.get_or_compute(&engine, input(1));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 0);
    }
}

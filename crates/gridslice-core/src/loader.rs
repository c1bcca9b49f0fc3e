//! Last-write-wins image dimension discovery.
//!
//! The compositor needs the natural pixel size of the base image, which
//! is only known once the image has been fetched and decoded elsewhere.
//! Until then "dimensions not yet known" is a valid, indefinite state.
//!
//! Loads race: the user can swap the image while a previous fetch is
//! still in flight. Each attempt carries a generation token and only the
//! result matching the current generation is applied; superseded results
//! are ignored when they arrive. There is no cancellation and no queue.

use log::debug;

use crate::SourceSize;

/// Identifies one load attempt against a [`DimensionSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Single-slot cache for a source image's natural dimensions.
#[derive(Debug, Default)]
pub struct DimensionSlot {
    generation: u64,
    size: Option<SourceSize>,
}

impl DimensionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load attempt, superseding any in-flight one. Previously
    /// known dimensions are cleared: they described the old image.
    pub fn begin(&mut self) -> LoadToken {
        self.generation += 1;
        self.size = None;
        LoadToken(self.generation)
    }

    /// Apply a resolved size if `token` is still current. Returns false
    /// (and changes nothing) for superseded tokens.
    pub fn resolve(&mut self, token: LoadToken, size: SourceSize) -> bool {
        if token.0 != self.generation {
            debug!(
                "ignoring stale dimension result (generation {} != {})",
                token.0, self.generation
            );
            return false;
        }
        self.size = Some(size);
        true
    }

    /// The current dimensions, if discovery has resolved.
    pub fn dimensions(&self) -> Option<SourceSize> {
        self.size
    }

    /// Drop any known dimensions and invalidate in-flight loads, e.g.
    /// when the image source is removed entirely.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.size = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unknown() {
        let slot = DimensionSlot::new();
        assert_eq!(slot.dimensions(), None);
    }

    #[test]
    fn test_resolve_current_token() {
        let mut slot = DimensionSlot::new();
        let token = slot.begin();

        assert!(slot.resolve(token, SourceSize::new(640.0, 480.0)));
        assert_eq!(slot.dimensions(), Some(SourceSize::new(640.0, 480.0)));
    }

    #[test]
    fn test_last_write_wins() {
        let mut slot = DimensionSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        // The superseded load resolves late and is ignored.
        assert!(slot.resolve(second, SourceSize::new(800.0, 600.0)));
        assert!(!slot.resolve(first, SourceSize::new(100.0, 100.0)));
        assert_eq!(slot.dimensions(), Some(SourceSize::new(800.0, 600.0)));
    }

    #[test]
    fn test_begin_clears_previous_dimensions() {
        let mut slot = DimensionSlot::new();
        let token = slot.begin();
        slot.resolve(token, SourceSize::new(640.0, 480.0));

        slot.begin();
        assert_eq!(slot.dimensions(), None);
    }

    #[test]
    fn test_reset_invalidates_in_flight_load() {
        let mut slot = DimensionSlot::new();
        let token = slot.begin();
        slot.reset();

        assert!(!slot.resolve(token, SourceSize::new(640.0, 480.0)));
        assert_eq!(slot.dimensions(), None);
    }

    #[test]
    fn test_never_resolving_is_valid() {
        let mut slot = DimensionSlot::new();
        let _token = slot.begin();

        // A failed fetch simply never resolves; the slot stays unknown.
        assert_eq!(slot.dimensions(), None);
    }
}

//! The segment editor: an ordered, mutable sequence of target segments.
//!
//! Segments have no identity — position is everything. Removing index `i`
//! shifts every later segment down by one; there are no gaps and no stable
//! handles. Out-of-bounds indices are silent no-ops: callers always derive
//! indices from the current sequence, so the path is unreachable through the
//! public surfaces.

use canvass_core::entities::Segment;
use canvass_core::enums::SegmentField;

/// Ordered list of segments under edit inside a research form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentList {
    segments: Vec<Segment>,
}

impl SegmentList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Append a blank segment at the end. No upper bound.
    pub fn add(&mut self) {
        self.segments.push(Segment::default());
    }

    /// Replace one field of the segment at `index`; everything else unchanged.
    pub fn set(&mut self, index: usize, field: SegmentField, value: impl Into<String>) {
        if let Some(segment) = self.segments.get_mut(index) {
            let value = value.into();
            match field {
                SegmentField::Name => segment.name = value,
                SegmentField::Description => segment.description = value,
                SegmentField::Size => segment.size = value,
                SegmentField::Characteristics => segment.characteristics = value,
            }
        }
    }

    /// Remove the segment at `index`; later segments shift down by one.
    pub fn remove(&mut self, index: usize) {
        if index < self.segments.len() {
            self.segments.remove(index);
        }
    }

    /// The empty state drives the editor's call-to-action instead of a list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Segment> {
        self.segments.clone()
    }
}

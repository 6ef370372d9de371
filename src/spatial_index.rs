//! R-tree spatial index over element bounding boxes.
//!
//! Keeps point and rect queries at O(log n) so pointer-down hit testing and
//! marquee finalization stay cheap as canvases grow. The index returns
//! candidate ids only; z-order precedence is resolved by `hit_testing`.

use crate::types::ElementRect;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// One element's axis-aligned bounds in the tree.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub element_id: u64,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(element_id: u64, rect: ElementRect) -> Self {
        Self {
            element_id,
            min_x: rect.x,
            min_y: rect.y,
            max_x: rect.x + rect.width,
            max_y: rect.y + rect.height,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.element_id == other.element_id
    }
}

#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<u64, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load an index from `(id, rect)` pairs.
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: Iterator<Item = (u64, ElementRect)>,
    {
        let entries: Vec<SpatialEntry> =
            elements.map(|(id, rect)| SpatialEntry::new(id, rect)).collect();
        let entries_map: HashMap<u64, SpatialEntry> =
            entries.iter().map(|e| (e.element_id, *e)).collect();
        Self { tree: RTree::bulk_load(entries), entries: entries_map }
    }

    /// Insert or replace the bounds for `element_id`.
    pub fn upsert(&mut self, element_id: u64, rect: ElementRect) {
        if let Some(old) = self.entries.remove(&element_id) {
            self.tree.remove(&old);
        }
        let entry = SpatialEntry::new(element_id, rect);
        self.tree.insert(entry);
        self.entries.insert(element_id, entry);
    }

    pub fn remove(&mut self, element_id: u64) -> bool {
        if let Some(entry) = self.entries.remove(&element_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Ids of all elements whose bounds contain the point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<u64> {
        let envelope = AABB::from_point([x, y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.element_id)
            .collect()
    }

    /// Ids of all elements whose bounds intersect the rect.
    pub fn query_rect(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Vec<u64> {
        let envelope = AABB::from_corners([min_x, min_y], [max_x, max_y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.element_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Throw away the tree and rebuild from scratch. Used after bulk
    /// mutations (undo/redo, template application) where incremental
    /// updates would be more bookkeeping than the rebuild.
    pub fn rebuild<I>(&mut self, elements: I)
    where
        I: Iterator<Item = (u64, ElementRect)>,
    {
        let entries: Vec<SpatialEntry> =
            elements.map(|(id, rect)| SpatialEntry::new(id, rect)).collect();
        self.entries = entries.iter().map(|e| (e.element_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

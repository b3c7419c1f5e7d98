use egui::{Color32, Painter, Vec2};
use image::RgbaImage;

use crate::element::{Primitive, PrimitiveId};
use crate::raster;

/// A committed primitive together with its render flag
#[derive(Debug, Clone)]
struct Entry {
    id: PrimitiveId,
    primitive: Primitive,
    visible: bool,
}

/// The drawing surface: every committed primitive in insertion order.
///
/// Undone primitives stay here with `visible == false` so that redo can bring them back.
#[derive(Debug, Default)]
pub struct Document {
    entries: Vec<Entry>,
    next_id: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a primitive and return its fresh identity
    pub fn add(&mut self, primitive: Primitive) -> PrimitiveId {
        let id = PrimitiveId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            primitive,
            visible: true,
        });
        id
    }

    /// Toggle render inclusion. Returns false if the id is unknown.
    pub fn set_visibility(&mut self, id: PrimitiveId, visible: bool) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries[index].visible = visible;
                true
            }
            None => false,
        }
    }

    /// Drop entries for good
    pub fn remove(&mut self, ids: &[PrimitiveId]) {
        if ids.is_empty() {
            return;
        }
        self.entries.retain(|entry| !ids.contains(&entry.id));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.position(id).map(|index| &self.entries[index].primitive)
    }

    pub fn is_visible(&self, id: PrimitiveId) -> bool {
        self.position(id).is_some_and(|index| self.entries[index].visible)
    }

    /// Visible primitives in insertion order
    pub fn visible(&self) -> impl Iterator<Item = (PrimitiveId, &Primitive)> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.visible)
            .map(|entry| (entry.id, &entry.primitive))
    }

    pub fn visible_ids(&self) -> Vec<PrimitiveId> {
        self.visible().map(|(id, _)| id).collect()
    }

    /// Number of entries, hidden ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paint visible primitives in insertion order; later entries draw over earlier ones
    pub fn render(&self, painter: &Painter, origin: Vec2) {
        for (_, primitive) in self.visible() {
            primitive.draw(painter, origin);
        }
    }

    /// Flatten the visible primitives into a raster of the given size
    pub fn export(&self, width: u32, height: u32, background: Color32) -> RgbaImage {
        raster::rasterize(self.visible().map(|(_, primitive)| primitive), width, height, background)
    }

    // Ids are handed out in increasing order and entries are only ever appended or
    // removed, so the entry list stays sorted by id.
    fn position(&self, id: PrimitiveId) -> Option<usize> {
        self.entries.binary_search_by_key(&id, |entry| entry.id).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{LineStyle, factory};
    use egui::Pos2;

    fn segment(x: f32) -> Primitive {
        factory::segment(
            Pos2::new(x, 0.0),
            Pos2::new(x + 1.0, 1.0),
            Color32::BLACK,
            2.0,
            LineStyle::Solid,
        )
    }

    #[test]
    fn ids_are_fresh_and_ordered() {
        let mut doc = Document::new();
        let a = doc.add(segment(0.0));
        let b = doc.add(segment(1.0));
        assert!(a < b);
        assert_eq!(doc.visible_ids(), vec![a, b]);
    }

    #[test]
    fn hidden_entries_are_kept_but_not_listed() {
        let mut doc = Document::new();
        let a = doc.add(segment(0.0));
        let b = doc.add(segment(1.0));

        assert!(doc.set_visibility(a, false));
        assert_eq!(doc.visible_ids(), vec![b]);
        assert_eq!(doc.len(), 2);
        assert!(!doc.is_visible(a));

        assert!(doc.set_visibility(a, true));
        assert_eq!(doc.visible_ids(), vec![a, b]);
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut doc = Document::new();
        let a = doc.add(segment(0.0));
        doc.clear();
        assert!(doc.is_empty());
        assert!(!doc.set_visibility(a, true));

        let b = doc.add(segment(0.0));
        assert_ne!(a, b);
    }

    #[test]
    fn remove_drops_only_the_named_entries() {
        let mut doc = Document::new();
        let a = doc.add(segment(0.0));
        let b = doc.add(segment(1.0));
        let c = doc.add(segment(2.0));

        doc.remove(&[b]);
        assert_eq!(doc.visible_ids(), vec![a, c]);
        assert!(doc.get(b).is_none());
        assert!(doc.get(c).is_some());
    }
}

use crate::document::Document;
use crate::element::{Primitive, PrimitiveId};

/// Linear undo/redo history over committed primitives.
///
/// The stacks hold ids only; the primitives themselves live in the [`Document`]. An id is
/// in at most one of the two stacks at any time.
#[derive(Debug, Default)]
pub struct History {
    /// Ids that can be undone, most recent last
    undo_stack: Vec<PrimitiveId>,
    /// Ids that can be redone, most recent last
    redo_stack: Vec<PrimitiveId>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive to the document and make it the latest undo entry.
    ///
    /// Any redo entries are invalidated, and the hidden primitives behind them are dropped
    /// from the document since nothing can bring them back.
    pub fn commit(&mut self, document: &mut Document, primitive: Primitive) -> PrimitiveId {
        let id = document.add(primitive);
        self.undo_stack.push(id);
        if !self.redo_stack.is_empty() {
            log::debug!("Commit {id} discards {} redo entries", self.redo_stack.len());
            document.remove(&self.redo_stack);
            self.redo_stack.clear();
        }
        id
    }

    /// Hide the most recent primitive. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, document: &mut Document) -> Option<PrimitiveId> {
        let id = self.undo_stack.pop()?;
        document.set_visibility(id, false);
        self.redo_stack.push(id);
        log::debug!("Undo {id}");
        Some(id)
    }

    /// Show the most recently undone primitive again. Returns `None` when there is nothing
    /// to redo.
    pub fn redo(&mut self, document: &mut Document) -> Option<PrimitiveId> {
        let id = self.redo_stack.pop()?;
        document.set_visibility(id, true);
        self.undo_stack.push(id);
        log::debug!("Redo {id}");
        Some(id)
    }

    /// Empty the document and both stacks
    pub fn clear(&mut self, document: &mut Document) {
        document.clear();
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Returns true if there are primitives that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are primitives that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[PrimitiveId] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[PrimitiveId] {
        &self.redo_stack
    }
}

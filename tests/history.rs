use std::collections::HashSet;

use eframe_canvas::element::factory;
use eframe_canvas::{Document, History, LineStyle, Primitive, PrimitiveId};
use egui::{Color32, Pos2};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn segment(n: usize) -> Primitive {
    let x = n as f32;
    factory::segment(Pos2::new(x, 0.0), Pos2::new(x, 10.0), Color32::BLACK, 2.0, LineStyle::Solid)
}

fn visible(document: &Document) -> Vec<PrimitiveId> {
    document.visible_ids()
}

#[test]
fn test_undo_then_redo_restores_visible_state() {
    let mut document = Document::new();
    let mut history = History::new();
    for n in 0..4 {
        history.commit(&mut document, segment(n));
    }
    let before = visible(&document);

    let undone = history.undo(&mut document);
    assert_eq!(undone, before.last().copied());
    assert_eq!(visible(&document), &before[..3]);

    assert_eq!(history.redo(&mut document), undone);
    assert_eq!(visible(&document), before);
}

#[test]
fn test_commit_after_undo_invalidates_redo() {
    let mut document = Document::new();
    let mut history = History::new();

    let a = history.commit(&mut document, segment(0));
    let b = history.commit(&mut document, segment(1));
    assert_eq!(history.undo(&mut document), Some(b));
    assert_eq!(history.redo_stack(), [b]);

    let c = history.commit(&mut document, segment(2));
    assert!(!history.can_redo());
    assert_eq!(history.redo(&mut document), None);
    assert_eq!(visible(&document), vec![a, c]);
    // The invalidated primitive can never come back, so it is gone from the surface
    assert!(document.get(b).is_none());
}

#[test]
fn test_empty_stacks_are_no_ops() {
    let mut document = Document::new();
    let mut history = History::new();

    assert_eq!(history.undo(&mut document), None);
    assert_eq!(history.redo(&mut document), None);

    let a = history.commit(&mut document, segment(0));
    assert_eq!(history.redo(&mut document), None);
    assert_eq!(history.undo(&mut document), Some(a));
    assert_eq!(history.undo(&mut document), None);
    assert!(history.undo_stack().is_empty());
    assert_eq!(history.redo_stack(), [a]);
}

#[test]
fn test_clear_empties_everything() {
    let mut document = Document::new();
    let mut history = History::new();
    for n in 0..3 {
        history.commit(&mut document, segment(n));
    }
    history.undo(&mut document);

    history.clear(&mut document);

    assert!(document.is_empty());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.undo(&mut document), None);
    assert_eq!(history.redo(&mut document), None);
}

#[test]
fn test_stacks_partition_committed_ids() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..20 {
        let mut document = Document::new();
        let mut history = History::new();
        let mut live: HashSet<PrimitiveId> = HashSet::new();

        for step in 0..200 {
            match rng.random_range(0..3) {
                0 => {
                    let id = history.commit(&mut document, segment(step));
                    // Committing drops whatever was redoable
                    for dropped in live.clone().into_iter().filter(|id| !document.is_visible(*id)) {
                        live.remove(&dropped);
                    }
                    live.insert(id);
                }
                1 => {
                    history.undo(&mut document);
                }
                _ => {
                    history.redo(&mut document);
                }
            }

            let undo: HashSet<_> = history.undo_stack().iter().copied().collect();
            let redo: HashSet<_> = history.redo_stack().iter().copied().collect();
            assert!(undo.is_disjoint(&redo));
            assert_eq!(undo.len(), history.undo_stack().len());
            assert_eq!(redo.len(), history.redo_stack().len());
            let all: HashSet<_> = undo.union(&redo).copied().collect();
            assert_eq!(all, live);

            // Undo entries are exactly the visible primitives, in order
            assert_eq!(history.undo_stack(), visible(&document).as_slice());
        }
    }
}

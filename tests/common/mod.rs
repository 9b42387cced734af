#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use carousel::render::RecordingSink;
use carousel::{Carousel, ContainerId, Hooks, StaticDocument};
use serde_json::Value;

pub type TestCarousel = Carousel<StaticDocument, RecordingSink>;

/// Lifecycle notifications, with container ids flattened to their index.
#[derive(Debug, Clone, PartialEq)]
pub enum Note {
    Init(usize),
    Before(usize, Option<usize>, usize),
    After(usize, usize),
    Changed(usize, usize),
}

pub type Notes = Rc<RefCell<Vec<Note>>>;

pub fn recording_hooks() -> (Hooks, Notes) {
    let notes: Notes = Rc::default();
    let (init, before, after, changed) = (notes.clone(), notes.clone(), notes.clone(), notes.clone());
    let hooks = Hooks::new()
        .on_init(move |_, count| init.borrow_mut().push(Note::Init(count)))
        .before_slide_change(move |c, previous, target| {
            before.borrow_mut().push(Note::Before(c.0, previous, target))
        })
        .after_slide_change(move |c, index| after.borrow_mut().push(Note::After(c.0, index)))
        .on_slide_change(move |c, index| changed.borrow_mut().push(Note::Changed(c.0, index)));
    (hooks, notes)
}

/// Containers of class `banner` with the given slide counts, at `width`.
pub fn document(width: u32, slides: &[usize]) -> StaticDocument {
    let mut document = StaticDocument::new(width);
    for (index, count) in slides.iter().enumerate() {
        document.add_container(Some(&format!("c{index}")), "banner", *count);
    }
    document
}

pub fn build(document: StaticDocument, options: Value) -> (TestCarousel, Notes) {
    let (hooks, notes) = recording_hooks();
    let carousel = Carousel::from_options(options, document, RecordingSink::new(), hooks)
        .expect("valid options");
    (carousel, notes)
}

pub const C0: ContainerId = ContainerId(0);
pub const C1: ContainerId = ContainerId(1);
pub const C2: ContainerId = ContainerId(2);

/// Exactly the current slide is active in the sink, for every container.
pub fn assert_single_active(carousel: &TestCarousel) {
    for id in carousel.container_ids() {
        let slide_count = carousel.slide_count(id).unwrap();
        let current = carousel.current_slide(id).unwrap();
        assert!(current < slide_count, "{id:?}: {current} out of {slide_count}");
        assert_eq!(carousel.sink().active_slides(id, slide_count), vec![current], "{id:?}");
    }
}

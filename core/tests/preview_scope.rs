use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gemdesk_core::preview::{classify_mime, PreviewKind, ScopedPreview};

fn counting_preview(counter: &Rc<Cell<u32>>) -> ScopedPreview {
    let counter = Rc::clone(counter);
    ScopedPreview::new(
        PreviewKind::Image,
        "blob:fake".to_string(),
        "stone.jpg",
        move |_| counter.set(counter.get() + 1),
    )
}

#[test]
fn drop_releases_exactly_once() {
    let counter = Rc::new(Cell::new(0u32));
    let preview = counting_preview(&counter);
    assert_eq!(preview.url(), Some("blob:fake"));
    assert_eq!(counter.get(), 0);
    drop(preview);
    assert_eq!(counter.get(), 1);
}

#[test]
fn replacing_a_slot_releases_the_old_preview() {
    let counter = Rc::new(Cell::new(0u32));
    let mut slot = Some(counting_preview(&counter));

    let previous = slot.replace(counting_preview(&counter));
    drop(previous);
    assert_eq!(counter.get(), 1);

    drop(slot.take());
    assert_eq!(counter.get(), 2);
}

#[test]
fn unsupported_previews_carry_no_url() {
    let preview = ScopedPreview::unsupported("notes.pdf");
    assert_eq!(preview.kind(), PreviewKind::Unsupported);
    assert_eq!(preview.url(), None);
    assert_eq!(preview.file_name(), "notes.pdf");
}

#[test]
fn disposer_receives_the_url() {
    let seen = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&seen);
    let preview = ScopedPreview::new(
        PreviewKind::Video,
        "blob:clip".to_string(),
        "clip.mp4",
        move |url| *sink.borrow_mut() = url.to_string(),
    );
    drop(preview);
    assert_eq!(seen.borrow().as_str(), "blob:clip");
}

#[test]
fn mime_classification() {
    assert_eq!(classify_mime("image/jpeg"), PreviewKind::Image);
    assert_eq!(classify_mime("image/webp"), PreviewKind::Image);
    assert_eq!(classify_mime("video/mp4"), PreviewKind::Video);
    assert_eq!(classify_mime("application/pdf"), PreviewKind::Unsupported);
    assert_eq!(classify_mime(""), PreviewKind::Unsupported);
}

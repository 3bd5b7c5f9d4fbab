#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gemdesk_core::{classify_mime, PreviewKind, ScopedPreview};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Blob, Url};

wasm_bindgen_test_configure!(run_in_browser);

fn sample_blob() -> Blob {
    let parts = js_sys::Array::of1(&JsValue::from_str("gemdesk sample payload"));
    Blob::new_with_str_sequence(&parts).expect("blob construction failed")
}

#[wasm_bindgen_test]
fn object_urls_use_the_blob_scheme() {
    let url = Url::create_object_url_with_blob(&sample_blob()).expect("object URL failed");
    assert!(url.starts_with("blob:"), "unexpected URL {url}");
    Url::revoke_object_url(&url).expect("revoke failed");
}

#[wasm_bindgen_test]
fn dropping_a_preview_revokes_its_url() {
    let url = Url::create_object_url_with_blob(&sample_blob()).expect("object URL failed");
    let revoked = Rc::new(Cell::new(false));
    let seen = revoked.clone();
    let preview = ScopedPreview::new(PreviewKind::Image, url.clone(), "sample.png", move |url| {
        seen.set(Url::revoke_object_url(url).is_ok());
    });
    assert_eq!(preview.url(), Some(url.as_str()));
    drop(preview);
    assert!(revoked.get(), "disposer did not run on drop");
    // Revoking an already revoked URL is a no-op in the browser.
    Url::revoke_object_url(&url).expect("second revoke failed");
}

#[wasm_bindgen_test]
fn browser_mime_types_classify_as_expected() {
    assert_eq!(classify_mime("image/png"), PreviewKind::Image);
    assert_eq!(classify_mime("image/webp"), PreviewKind::Image);
    assert_eq!(classify_mime("video/mp4"), PreviewKind::Video);
    assert_eq!(classify_mime("application/pdf"), PreviewKind::Unsupported);
    assert_eq!(classify_mime(""), PreviewKind::Unsupported);
}

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement, HtmlImageElement};
use yew::prelude::*;

use gemdesk_core::certificate::{
    CertificateData, ImageLoadState, CERTIFICATE_TITLE_EN, CERTIFICATE_TITLE_HI,
    IMAGE_LOAD_ERROR_TEXT,
};
use gemdesk_core::preview::{PreviewKind, ScopedPreview};

use crate::file_preview::revoke_preview_url;

const CERT_WIDTH: u32 = 900;
const CERT_HEIGHT: u32 = 600;
const CERT_MIME: &str = "image/png";
const CERT_LOGO_SRC: &str = "assets/certificate-logo.png";
const CERT_SIGNATURE_SRC: &str = "assets/certificate-signature.png";
const CERT_ISSUER: &str = "Navratna Gems";

#[derive(Properties, PartialEq)]
pub(crate) struct CertificateCardProps {
    pub data: CertificateData,
}

/// Live certificate preview for the product being edited. Rendering the
/// downloadable PNG happens off the critical path; a draft edited faster
/// than the canvas can keep up simply wins with its last state.
#[function_component(CertificateCard)]
pub(crate) fn certificate_card(props: &CertificateCardProps) -> Html {
    let data = props.data.clone();
    let image_state = use_state(ImageLoadState::default);
    let artifact: UseStateHandle<Option<Rc<ScopedPreview>>> = use_state(|| None);

    {
        let image_state = image_state.clone();
        use_effect_with(data.base_image_url.clone(), move |url| {
            image_state.set(ImageLoadState::default().url_changed(url));
            || ()
        });
    }

    let on_base_error = {
        let image_state = image_state.clone();
        Callback::from(move |_| {
            image_state.set(image_state.load_failed());
        })
    };

    {
        let artifact = artifact.clone();
        use_effect_with(data.clone(), move |data| {
            let data = data.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match rasterize_certificate(&data).await {
                    Ok(Some(preview)) => artifact.set(Some(Rc::new(preview))),
                    Ok(None) => artifact.set(None),
                    Err(message) => {
                        gloo::console::warn!("certificate render failed:", message);
                        artifact.set(None);
                    }
                }
            });
            || ()
        });
    }

    let on_download = {
        let artifact = artifact.clone();
        Callback::from(move |_event: MouseEvent| {
            let Some(preview) = artifact.as_ref() else {
                return;
            };
            if let Err(message) = trigger_download(preview) {
                gloo::console::warn!("certificate download failed:", message);
            }
        })
    };

    let rows = data.rows();
    let issued: String = js_sys::Date::new_0()
        .to_locale_date_string("en-IN", &JsValue::UNDEFINED)
        .into();
    html! {
        <div class="certificate-card">
            <div class="certificate-heading">
                <img class="certificate-logo" src={CERT_LOGO_SRC} alt="" />
                <h3>{ CERTIFICATE_TITLE_HI }</h3>
                <h4>{ CERTIFICATE_TITLE_EN }</h4>
                <span class="certificate-issuer">{ format!("{CERT_ISSUER} | {issued}") }</span>
            </div>
            <div class="certificate-photo">
                {
                    match *image_state {
                        ImageLoadState::NoImage => html! {
                            <p class="certificate-photo-hint">
                                { "Add a certificate image URL to preview the stone" }
                            </p>
                        },
                        ImageLoadState::Error => html! {
                            <p class="certificate-photo-error">{ IMAGE_LOAD_ERROR_TEXT }</p>
                        },
                        ImageLoadState::Loaded => html! {
                            <img
                                src={data.base_image_url.clone()}
                                alt={data.name.clone()}
                                onerror={on_base_error}
                            />
                        },
                    }
                }
            </div>
            <table class="certificate-rows">
                <tbody>
                    {
                        for rows.iter().map(|row| html! {
                            <tr>
                                <th>{ format!("{} / {}", row.label_hi, row.label_en) }</th>
                                <td>{ row.value.clone() }</td>
                            </tr>
                        })
                    }
                </tbody>
            </table>
            if !data.name.is_empty() {
                <p class="certificate-stone-name">{ data.name.clone() }</p>
            }
            <div class="certificate-footer">
                <img class="certificate-signature" src={CERT_SIGNATURE_SRC} alt="" />
                <span>{ "Authorised signatory" }</span>
            </div>
            <button
                type="button"
                class="certificate-download"
                disabled={artifact.is_none()}
                onclick={on_download}
            >
                { "Download certificate" }
            </button>
        </div>
    }
}

fn trigger_download(preview: &ScopedPreview) -> Result<(), String> {
    let url = preview
        .url()
        .ok_or_else(|| "no rendered certificate".to_string())?;
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "missing document".to_string())?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "failed to create anchor".to_string())?
        .dyn_into()
        .map_err(|_| "failed to create anchor".to_string())?;
    anchor.set_href(url);
    anchor.set_download(preview.file_name());
    // The URL stays alive with the preview; only the anchor is transient.
    anchor.click();
    Ok(())
}

/// Renders the certificate to a PNG object URL. `Ok(None)` means there is
/// nothing worth rendering yet.
async fn rasterize_certificate(data: &CertificateData) -> Result<Option<ScopedPreview>, String> {
    if data.is_empty() {
        return Ok(None);
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "missing document".to_string())?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| "failed to create canvas".to_string())?
        .dyn_into()
        .map_err(|_| "failed to create canvas".to_string())?;
    canvas.set_width(CERT_WIDTH);
    canvas.set_height(CERT_HEIGHT);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| "canvas 2d unavailable".to_string())?
        .ok_or_else(|| "canvas 2d unavailable".to_string())?
        .dyn_into()
        .map_err(|_| "canvas 2d unavailable".to_string())?;

    let width = CERT_WIDTH as f64;
    let height = CERT_HEIGHT as f64;

    context.set_fill_style_str("#fffdf5");
    context.fill_rect(0.0, 0.0, width, height);
    context.set_stroke_style_str("#b08d2e");
    context.set_line_width(4.0);
    context.stroke_rect(12.0, 12.0, width - 24.0, height - 24.0);

    context.set_fill_style_str("#4a2f10");
    context.set_text_align("center");
    context.set_font("bold 30px serif");
    context
        .fill_text(CERTIFICATE_TITLE_HI, width / 2.0, 60.0)
        .map_err(|_| "failed to draw title".to_string())?;
    context.set_font("bold 22px serif");
    context
        .fill_text(CERTIFICATE_TITLE_EN, width / 2.0, 92.0)
        .map_err(|_| "failed to draw title".to_string())?;

    context.set_font("16px serif");
    let issued = js_sys::Date::new_0().to_locale_date_string("en-IN", &JsValue::UNDEFINED);
    let issued: String = issued.into();
    context
        .fill_text(&format!("{CERT_ISSUER} | {issued}"), width / 2.0, 118.0)
        .map_err(|_| "failed to draw issuer".to_string())?;

    // Decorations degrade quietly; the stone photo is the one image the
    // certificate cannot do without.
    match load_image(CERT_LOGO_SRC).await {
        Ok(logo) => {
            let _ = context.draw_image_with_html_image_element_and_dw_and_dh(
                &logo, 28.0, 28.0, 72.0, 72.0,
            );
        }
        Err(message) => gloo::console::warn!("certificate logo missing:", message),
    }
    match load_image(CERT_SIGNATURE_SRC).await {
        Ok(signature) => {
            let _ = context.draw_image_with_html_image_element_and_dw_and_dh(
                &signature,
                width - 220.0,
                height - 110.0,
                180.0,
                60.0,
            );
        }
        Err(message) => gloo::console::warn!("certificate signature missing:", message),
    }

    if !data.base_image_url.is_empty() {
        let photo = load_image(&data.base_image_url).await?;
        context
            .draw_image_with_html_image_element_and_dw_and_dh(&photo, 48.0, 150.0, 280.0, 280.0)
            .map_err(|_| "failed to draw stone image".to_string())?;
    }

    if !data.name.is_empty() {
        context.set_font("bold 20px serif");
        context
            .fill_text(&data.name, 188.0, 466.0)
            .map_err(|_| "failed to draw name".to_string())?;
    }

    context.set_text_align("left");
    let mut y = 170.0;
    for row in data.rows() {
        context.set_font("bold 15px serif");
        context
            .fill_text(&format!("{} / {}", row.label_hi, row.label_en), 370.0, y)
            .map_err(|_| "failed to draw row".to_string())?;
        context.set_font("15px serif");
        context
            .fill_text(&row.value, 640.0, y)
            .map_err(|_| "failed to draw row".to_string())?;
        y += 30.0;
    }

    let blob = canvas_to_blob(&canvas).await?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "failed to create certificate url".to_string())?;
    Ok(Some(ScopedPreview::new(
        PreviewKind::Image,
        url,
        certificate_file_name(&data.name),
        revoke_preview_url,
    )))
}

async fn canvas_to_blob(canvas: &HtmlCanvasElement) -> Result<Blob, String> {
    let canvas = canvas.clone();
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let reject_for_cb = reject.clone();
        let callback = Closure::once(move |blob: Option<Blob>| match blob {
            Some(blob) => {
                let _ = resolve.call1(&JsValue::NULL, &blob);
            }
            None => {
                let _ = reject_for_cb.call1(&JsValue::NULL, &JsValue::from_str("no blob"));
            }
        });
        if canvas
            .to_blob_with_type(callback.as_ref().unchecked_ref(), CERT_MIME)
            .is_err()
        {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("toBlob failed"));
        }
        callback.forget();
    });
    let value = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|_| "certificate encode failed".to_string())?;
    value
        .dyn_into::<Blob>()
        .map_err(|_| "certificate encode failed".to_string())
}

async fn load_image(src: &str) -> Result<HtmlImageElement, String> {
    let img = HtmlImageElement::new().map_err(|_| "failed to create image".to_string())?;
    img.set_cross_origin(Some("anonymous"));
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("image_load_failed"));
        });
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        img.set_src(src);
        onload.forget();
        onerror.forget();
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|_| format!("failed to load {src}"))?;
    Ok(img)
}

fn certificate_file_name(name: &str) -> String {
    let mut slug = String::new();
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if (ch == ' ' || ch == '-' || ch == '_') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "certificate.png".to_string()
    } else {
        format!("certificate-{slug}.png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_slugs_the_stone_name() {
        assert_eq!(certificate_file_name("Ruby"), "certificate-ruby.png");
        assert_eq!(
            certificate_file_name("Burmese Ruby 5ct"),
            "certificate-burmese-ruby-5ct.png"
        );
    }

    #[test]
    fn file_name_falls_back_when_name_is_empty() {
        assert_eq!(certificate_file_name("  "), "certificate.png");
        assert_eq!(certificate_file_name("रत्न"), "certificate.png");
    }
}

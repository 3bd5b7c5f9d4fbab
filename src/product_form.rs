use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, Event, FormData, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    InputEvent, MouseEvent, SubmitEvent,
};
use yew::prelude::*;

use gemdesk_core::catalog::CATEGORY_CATALOG;
use gemdesk_core::certificate::CertificateData;
use gemdesk_core::preview::{PreviewKind, ScopedPreview};
use gemdesk_core::product::{FileField, ProductDraft, TextField, FILE_FIELDS};
use gemdesk_core::protocol::ProductRecord;
use gemdesk_core::submission::{build_submission, SubmissionPlan};
use gemdesk_core::validate::validate_draft;

use crate::app_context::AppContext;
use crate::certificate_view::CertificateCard;
use crate::file_preview::{preview_for_file, FileSlots, PreviewSlots, UPLOAD_MAX_BYTES};
use crate::notify::NoticeLevel;

const GEM_FIELDS: &[TextField] = &[
    TextField::WeightRatti,
    TextField::WeightCarat,
    TextField::Shape,
    TextField::Colour,
    TextField::Cut,
    TextField::Origin,
    TextField::Treatment,
    TextField::Hardness,
    TextField::RefractiveIndex,
    TextField::SpecificGravity,
    TextField::Dimensions,
    TextField::CertificateUrl,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SubmitStatus {
    Idle,
    Saving,
    Saved,
    Failed,
}

#[derive(Properties)]
pub(crate) struct ProductFormProps {
    pub context: Rc<AppContext>,
    #[prop_or_default]
    pub existing: Option<ProductRecord>,
    #[prop_or_default]
    pub on_saved: Callback<ProductRecord>,
}

impl PartialEq for ProductFormProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.context, &other.context)
            && self.existing == other.existing
            && self.on_saved == other.on_saved
    }
}

/// Create/edit form for one product. Mount it keyed by product id so a
/// different record starts from a fresh draft.
#[function_component(ProductForm)]
pub(crate) fn product_form(props: &ProductFormProps) -> Html {
    let draft = {
        let existing = props.existing.clone();
        use_state(move || match &existing {
            Some(record) => ProductDraft::from_record(record),
            None => ProductDraft::default(),
        })
    };
    let files = use_mut_ref(FileSlots::default);
    let previews = use_mut_ref(PreviewSlots::default);
    let media_revision = use_state(|| 0u32);
    let errors = use_state(Vec::<String>::new);
    let status = use_state(|| SubmitStatus::Idle);

    let basics_open = use_state(|| true);
    let pricing_open = use_state(|| true);
    let gemstone_open = use_state(|| true);
    let media_open = use_state(|| true);

    let text_input = {
        let draft = draft.clone();
        move |field: TextField| -> Callback<InputEvent> {
            let draft = draft.clone();
            Callback::from(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                let mut next = (*draft).clone();
                next.set_text(field, input.value());
                draft.set(next);
            })
        }
    };

    let on_description = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            let mut next = (*draft).clone();
            next.set_text(TextField::Description, area.value());
            draft.set(next);
        })
    };

    let on_category = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let mut next = (*draft).clone();
            next.set_text(TextField::Category, select.value());
            draft.set(next);
        })
    };

    let file_input = {
        let context = props.context.clone();
        let files = files.clone();
        let previews = previews.clone();
        let media_revision = media_revision.clone();
        move |field: FileField| -> Callback<Event> {
            let context = context.clone();
            let files = files.clone();
            let previews = previews.clone();
            let media_revision = media_revision.clone();
            Callback::from(move |event: Event| {
                let input: HtmlInputElement = event.target_unchecked_into();
                let Some(list) = input.files() else {
                    return;
                };
                let Some(file) = list.get(0) else {
                    return;
                };
                input.set_value("");
                let size = file.size() as u64;
                if size == 0 {
                    context
                        .notices
                        .push(NoticeLevel::Error, format!("{} is empty", file.name()));
                    return;
                }
                if size > UPLOAD_MAX_BYTES {
                    context.notices.push(
                        NoticeLevel::Error,
                        format!(
                            "{} exceeds the {} MB upload limit",
                            file.name(),
                            UPLOAD_MAX_BYTES / (1024 * 1024)
                        ),
                    );
                    return;
                }
                match preview_for_file(&file) {
                    Ok(preview) => {
                        previews.borrow_mut().set(field, Some(preview));
                        files.borrow_mut().set(field, Some(file));
                        media_revision.set(media_revision.wrapping_add(1));
                    }
                    Err(message) => context.notices.push(NoticeLevel::Error, message),
                }
            })
        }
    };

    let clear_slot = {
        let files = files.clone();
        let previews = previews.clone();
        let media_revision = media_revision.clone();
        move |field: FileField| -> Callback<MouseEvent> {
            let files = files.clone();
            let previews = previews.clone();
            let media_revision = media_revision.clone();
            Callback::from(move |_event: MouseEvent| {
                files.borrow_mut().set(field, None);
                previews.borrow_mut().set(field, None);
                media_revision.set(media_revision.wrapping_add(1));
            })
        }
    };

    let on_submit = {
        let context = props.context.clone();
        let draft = draft.clone();
        let files = files.clone();
        let previews = previews.clone();
        let errors = errors.clone();
        let status = status.clone();
        let media_revision = media_revision.clone();
        let existing_id = props.existing.as_ref().map(|record| record.id);
        let on_saved = props.on_saved.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let violations = validate_draft(&draft);
            if !violations.is_empty() {
                errors.set(violations);
                status.set(SubmitStatus::Idle);
                return;
            }
            errors.set(Vec::new());

            let attached = files.borrow().attached();
            let plan = build_submission(&draft, &attached);
            let form = match materialize_submission(&plan, &files.borrow()) {
                Ok(form) => form,
                Err(message) => {
                    context.notices.push(NoticeLevel::Error, message);
                    status.set(SubmitStatus::Failed);
                    return;
                }
            };

            status.set(SubmitStatus::Saving);
            let context = context.clone();
            let draft = draft.clone();
            let files = files.clone();
            let previews = previews.clone();
            let status = status.clone();
            let media_revision = media_revision.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let result = match existing_id {
                    Some(id) => context.api.update_product(id, form).await,
                    None => context.api.create_product(form).await,
                };
                match result {
                    Ok(record) => {
                        status.set(SubmitStatus::Saved);
                        context
                            .notices
                            .push(NoticeLevel::Success, format!("Saved {}", record.name));
                        if existing_id.is_none() {
                            draft.set(ProductDraft::default());
                            files.borrow_mut().clear();
                            previews.borrow_mut().clear();
                            media_revision.set(media_revision.wrapping_add(1));
                        }
                        on_saved.emit(record);
                    }
                    Err(error) => {
                        status.set(SubmitStatus::Failed);
                        context.notices.push(NoticeLevel::Error, error.to_string());
                    }
                }
            });
        })
    };

    let certificate_data = CertificateData::from_draft(&draft);
    let saving = *status == SubmitStatus::Saving;

    html! {
        <form class="product-form" onsubmit={on_submit}>
            <details class="form-group" open={*basics_open} ontoggle={group_toggle(basics_open.clone())}>
                <summary class="form-group-title">{ "Basics" }</summary>
                <div class="form-group-body">
                    { text_control(TextField::Name, draft.text(TextField::Name), text_input(TextField::Name)) }
                    <div class="control">
                        <label for="category">{ "Category" }</label>
                        <select id="category" onchange={on_category}>
                            <option
                                value=""
                                selected={draft.text(TextField::Category).is_empty()}
                            >
                                { "Select category" }
                            </option>
                            {
                                for CATEGORY_CATALOG.iter().map(|entry| html! {
                                    <option
                                        value={entry.slug}
                                        selected={draft.text(TextField::Category) == entry.slug}
                                    >
                                        { entry.label }
                                    </option>
                                })
                            }
                        </select>
                    </div>
                    <div class="control">
                        <label for="description">{ "Description" }</label>
                        <textarea
                            id="description"
                            value={draft.text(TextField::Description).to_string()}
                            oninput={on_description}
                        />
                    </div>
                    { text_control(TextField::Quantity, draft.text(TextField::Quantity), text_input(TextField::Quantity)) }
                </div>
            </details>

            <details class="form-group" open={*pricing_open} ontoggle={group_toggle(pricing_open.clone())}>
                <summary class="form-group-title">{ "Pricing" }</summary>
                <div class="form-group-body">
                    { text_control(TextField::ActualPrice, draft.text(TextField::ActualPrice), text_input(TextField::ActualPrice)) }
                    { text_control(TextField::SalePrice, draft.text(TextField::SalePrice), text_input(TextField::SalePrice)) }
                </div>
            </details>

            <details class="form-group" open={*gemstone_open} ontoggle={group_toggle(gemstone_open.clone())}>
                <summary class="form-group-title">{ "Gemstone details" }</summary>
                <div class="form-group-body">
                    {
                        for GEM_FIELDS.iter().map(|&field| {
                            text_control(field, draft.text(field), text_input(field))
                        })
                    }
                    <CertificateCard data={certificate_data} />
                </div>
            </details>

            <details class="form-group" open={*media_open} ontoggle={group_toggle(media_open.clone())}>
                <summary class="form-group-title">{ "Media" }</summary>
                <div class="form-group-body">
                    {
                        for FILE_FIELDS.iter().map(|&field| {
                            media_slot(
                                field,
                                previews.borrow().get(field).map(preview_markup),
                                file_input(field),
                                clear_slot(field),
                            )
                        })
                    }
                    { existing_media(props.existing.as_ref()) }
                </div>
            </details>

            if !errors.is_empty() {
                <ul class="form-errors">
                    { for errors.iter().map(|error| html! { <li>{ error.clone() }</li> }) }
                </ul>
            }

            <div class="form-actions">
                <button type="submit" disabled={saving}>
                    {
                        if props.existing.is_some() {
                            "Update product"
                        } else {
                            "Save product"
                        }
                    }
                </button>
                {
                    match *status {
                        SubmitStatus::Saving => html! { <span class="form-status">{ "Saving…" }</span> },
                        SubmitStatus::Saved => html! { <span class="form-status">{ "Saved" }</span> },
                        SubmitStatus::Failed => html! { <span class="form-status form-status-failed">{ "Not saved" }</span> },
                        SubmitStatus::Idle => html! {},
                    }
                }
            </div>
        </form>
    }
}

fn group_toggle(handle: UseStateHandle<bool>) -> Callback<Event> {
    Callback::from(move |event: Event| {
        let element: Element = event.target_unchecked_into();
        let details = element
            .closest("details")
            .ok()
            .flatten()
            .unwrap_or(element);
        handle.set(details.has_attribute("open"));
    })
}

fn text_control(field: TextField, value: &str, oninput: Callback<InputEvent>) -> Html {
    let id = field.upload_name();
    html! {
        <div class="control">
            <label for={id}>{ field.label() }</label>
            <input id={id} type="text" value={value.to_string()} {oninput} />
        </div>
    }
}

fn media_slot(
    field: FileField,
    preview: Option<Html>,
    onchange: Callback<Event>,
    onclear: Callback<MouseEvent>,
) -> Html {
    let id = field.upload_name();
    let has_preview = preview.is_some();
    html! {
        <div class="media-slot">
            <label for={id}>{ field.label() }</label>
            <input id={id} type="file" accept={field.accept()} {onchange} />
            { preview.unwrap_or_default() }
            if has_preview {
                <button type="button" class="media-clear" onclick={onclear}>{ "Clear" }</button>
            }
        </div>
    }
}

fn preview_markup(preview: &ScopedPreview) -> Html {
    match (preview.kind(), preview.url()) {
        (PreviewKind::Image, Some(url)) => html! {
            <img class="media-preview" src={url.to_string()} alt={preview.file_name().to_string()} />
        },
        (PreviewKind::Video, Some(url)) => html! {
            <video class="media-preview" src={url.to_string()} controls=true />
        },
        _ => html! {
            <p class="media-preview-fallback">
                { format!("{}: preview not available", preview.file_name()) }
            </p>
        },
    }
}

fn existing_media(existing: Option<&ProductRecord>) -> Html {
    let Some(record) = existing else {
        return html! {};
    };
    if record.image_urls.is_empty() && record.video_url.is_none() {
        return html! {};
    }
    html! {
        <div class="existing-media">
            <span class="existing-media-title">{ "Already uploaded" }</span>
            {
                for record.image_urls.iter().map(|url| html! {
                    <img class="existing-thumb" src={url.clone()} />
                })
            }
            {
                if let Some(url) = &record.video_url {
                    html! { <video class="existing-thumb" src={url.clone()} controls=true /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn materialize_submission(plan: &SubmissionPlan, files: &FileSlots) -> Result<FormData, String> {
    let form = FormData::new().map_err(|_| "form assembly failed".to_string())?;
    for (name, value) in &plan.text_parts {
        form.append_with_str(name, value)
            .map_err(|_| "form assembly failed".to_string())?;
    }
    for &field in &plan.file_parts {
        let Some(file) = files.get(field) else {
            continue;
        };
        form.append_with_blob_and_filename(field.upload_name(), file, &file.name())
            .map_err(|_| "form assembly failed".to_string())?;
    }
    Ok(form)
}

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, File, FormData, HtmlInputElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use gemdesk_core::preview::ScopedPreview;
use gemdesk_core::protocol::Banner;

use crate::app_context::{AppContext, ContextProps};
use crate::file_preview::{preview_for_file, UPLOAD_MAX_BYTES};
use crate::notify::NoticeLevel;

type PickedImage = Option<(File, Rc<ScopedPreview>)>;

#[function_component(BannersPage)]
pub(crate) fn banners_page(props: &ContextProps) -> Html {
    let banners = use_state(Vec::<Banner>::new);
    let loading = use_state(|| true);
    let title = use_state(String::new);
    let link = use_state(String::new);
    let picked: UseStateHandle<PickedImage> = use_state(|| None);

    {
        let context = props.context.clone();
        let banners = banners.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match context.api.list_banners().await {
                    Ok(list) => banners.set(list),
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_title = {
        let title = title.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            title.set(input.value());
        })
    };
    let on_link = {
        let link = link.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            link.set(input.value());
        })
    };

    let on_file = {
        let context = props.context.clone();
        let picked = picked.clone();
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
                Ok(preview) => picked.set(Some((file, Rc::new(preview)))),
                Err(message) => context.notices.push(NoticeLevel::Error, message),
            }
        })
    };

    let on_submit = {
        let context = props.context.clone();
        let banners = banners.clone();
        let title = title.clone();
        let link = link.clone();
        let picked = picked.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if title.trim().is_empty() {
                context
                    .notices
                    .push(NoticeLevel::Error, "Banner title is required");
                return;
            }
            let Some((file, _preview)) = (*picked).clone() else {
                context
                    .notices
                    .push(NoticeLevel::Error, "Banner image is required");
                return;
            };
            let form = match banner_form(&title, &link, &file) {
                Ok(form) => form,
                Err(message) => {
                    context.notices.push(NoticeLevel::Error, message);
                    return;
                }
            };
            let context = context.clone();
            let banners = banners.clone();
            let title = title.clone();
            let link = link.clone();
            let picked = picked.clone();
            spawn_local(async move {
                match context.api.create_banner(form).await {
                    Ok(banner) => {
                        let mut next = (*banners).clone();
                        next.insert(0, banner);
                        banners.set(next);
                        title.set(String::new());
                        link.set(String::new());
                        picked.set(None);
                        context.notices.push(NoticeLevel::Success, "Banner created");
                    }
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
            });
        })
    };

    html! {
        <section class="page page-banners">
            <form class="inline-form" onsubmit={on_submit}>
                <div class="control">
                    <label for="banner-title">{ "Title" }</label>
                    <input id="banner-title" type="text" value={(*title).clone()} oninput={on_title} />
                </div>
                <div class="control">
                    <label for="banner-link">{ "Link" }</label>
                    <input id="banner-link" type="text" value={(*link).clone()} oninput={on_link} />
                </div>
                <div class="control">
                    <label for="banner-image">{ "Image" }</label>
                    <input id="banner-image" type="file" accept="image/*" onchange={on_file} />
                </div>
                {
                    match picked.as_ref().and_then(|(_, preview)| preview.url()) {
                        Some(url) => html! {
                            <img class="media-preview" src={url.to_string()} />
                        },
                        None => html! {},
                    }
                }
                <button type="submit">{ "Add banner" }</button>
            </form>
            if *loading {
                <p class="page-loading">{ "Loading banners…" }</p>
            } else if banners.is_empty() {
                <p class="page-empty">{ "No banners yet" }</p>
            } else {
                <ul class="banner-list">
                    {
                        for banners.iter().map(|banner| banner_item(
                            props.context.clone(),
                            banners.clone(),
                            banner.clone(),
                        ))
                    }
                </ul>
            }
        </section>
    }
}

fn banner_item(
    context: Rc<AppContext>,
    banners: UseStateHandle<Vec<Banner>>,
    banner: Banner,
) -> Html {
    let on_delete = {
        let context = context.clone();
        let banners = banners.clone();
        let banner = banner.clone();
        Callback::from(move |_event: MouseEvent| {
            let context = context.clone();
            let banners = banners.clone();
            let banner = banner.clone();
            spawn_local(async move {
                match context.api.delete_banner(banner.id).await {
                    Ok(()) => {
                        let next: Vec<Banner> = banners
                            .iter()
                            .filter(|item| item.id != banner.id)
                            .cloned()
                            .collect();
                        banners.set(next);
                        context
                            .notices
                            .push(NoticeLevel::Success, format!("Deleted {}", banner.title));
                    }
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
            });
        })
    };
    html! {
        <li key={banner.id.to_string()} class="banner-item">
            <img class="banner-thumb" src={banner.image_url.clone()} alt={banner.title.clone()} />
            <span class="banner-title">{ banner.title.clone() }</span>
            if !banner.link.is_empty() {
                <span class="banner-link">{ banner.link.clone() }</span>
            }
            if !banner.active {
                <span class="banner-inactive">{ "Inactive" }</span>
            }
            <button type="button" class="danger" onclick={on_delete}>{ "Delete" }</button>
        </li>
    }
}

fn banner_form(title: &str, link: &str, file: &File) -> Result<FormData, String> {
    let form = FormData::new().map_err(|_| "form assembly failed".to_string())?;
    form.append_with_str("title", title.trim())
        .map_err(|_| "form assembly failed".to_string())?;
    form.append_with_str("link", link.trim())
        .map_err(|_| "form assembly failed".to_string())?;
    form.append_with_blob_and_filename("image", file, &file.name())
        .map_err(|_| "form assembly failed".to_string())?;
    Ok(form)
}

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use gemdesk_core::protocol::{Astrologer, AstrologerDraft};

use crate::app_context::{AppContext, ContextProps};
use crate::notify::NoticeLevel;
use crate::products::format_price;

#[function_component(AstrologersPage)]
pub(crate) fn astrologers_page(props: &ContextProps) -> Html {
    let astrologers = use_state(Vec::<Astrologer>::new);
    let loading = use_state(|| true);
    let name = use_state(String::new);
    let expertise = use_state(String::new);
    let languages = use_state(String::new);
    let rate = use_state(String::new);

    {
        let context = props.context.clone();
        let astrologers = astrologers.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match context.api.list_astrologers().await {
                    Ok(list) => astrologers.set(list),
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let bind_text = |handle: &UseStateHandle<String>| -> Callback<InputEvent> {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            handle.set(input.value());
        })
    };
    let on_name = bind_text(&name);
    let on_expertise = bind_text(&expertise);
    let on_languages = bind_text(&languages);
    let on_rate = bind_text(&rate);

    let on_submit = {
        let context = props.context.clone();
        let astrologers = astrologers.clone();
        let name = name.clone();
        let expertise = expertise.clone();
        let languages = languages.clone();
        let rate = rate.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if name.trim().is_empty() || expertise.trim().is_empty() {
                context
                    .notices
                    .push(NoticeLevel::Error, "Name and expertise are required");
                return;
            }
            let Ok(per_minute_rate) = rate.trim().parse::<f64>() else {
                context
                    .notices
                    .push(NoticeLevel::Error, "Rate must be a number");
                return;
            };
            let draft = AstrologerDraft {
                name: name.trim().to_string(),
                expertise: expertise.trim().to_string(),
                languages: split_languages(&languages),
                per_minute_rate,
                available: true,
            };
            let context = context.clone();
            let astrologers = astrologers.clone();
            let name = name.clone();
            let expertise = expertise.clone();
            let languages = languages.clone();
            let rate = rate.clone();
            spawn_local(async move {
                match context.api.create_astrologer(&draft).await {
                    Ok(astrologer) => {
                        let mut next = (*astrologers).clone();
                        next.insert(0, astrologer);
                        astrologers.set(next);
                        name.set(String::new());
                        expertise.set(String::new());
                        languages.set(String::new());
                        rate.set(String::new());
                        context
                            .notices
                            .push(NoticeLevel::Success, "Astrologer added");
                    }
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
            });
        })
    };

    html! {
        <section class="page page-astrologers">
            <form class="inline-form" onsubmit={on_submit}>
                <div class="control">
                    <label for="astrologer-name">{ "Name" }</label>
                    <input id="astrologer-name" type="text" value={(*name).clone()} oninput={on_name} />
                </div>
                <div class="control">
                    <label for="astrologer-expertise">{ "Expertise" }</label>
                    <input id="astrologer-expertise" type="text" value={(*expertise).clone()} oninput={on_expertise} />
                </div>
                <div class="control">
                    <label for="astrologer-languages">{ "Languages (comma separated)" }</label>
                    <input id="astrologer-languages" type="text" value={(*languages).clone()} oninput={on_languages} />
                </div>
                <div class="control">
                    <label for="astrologer-rate">{ "Rate per minute" }</label>
                    <input id="astrologer-rate" type="text" value={(*rate).clone()} oninput={on_rate} />
                </div>
                <button type="submit">{ "Add astrologer" }</button>
            </form>
            if *loading {
                <p class="page-loading">{ "Loading astrologers…" }</p>
            } else if astrologers.is_empty() {
                <p class="page-empty">{ "No astrologers yet" }</p>
            } else {
                <ul class="astrologer-list">
                    {
                        for astrologers.iter().map(|astrologer| astrologer_item(
                            props.context.clone(),
                            astrologers.clone(),
                            astrologer.clone(),
                        ))
                    }
                </ul>
            }
        </section>
    }
}

fn astrologer_item(
    context: Rc<AppContext>,
    astrologers: UseStateHandle<Vec<Astrologer>>,
    astrologer: Astrologer,
) -> Html {
    let on_toggle = {
        let context = context.clone();
        let astrologers = astrologers.clone();
        let astrologer = astrologer.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let draft = AstrologerDraft {
                name: astrologer.name.clone(),
                expertise: astrologer.expertise.clone(),
                languages: astrologer.languages.clone(),
                per_minute_rate: astrologer.per_minute_rate,
                available: input.checked(),
            };
            let context = context.clone();
            let astrologers = astrologers.clone();
            let astrologer_id = astrologer.id;
            spawn_local(async move {
                match context.api.update_astrologer(astrologer_id, &draft).await {
                    Ok(updated) => {
                        let next: Vec<Astrologer> = astrologers
                            .iter()
                            .map(|item| {
                                if item.id == updated.id {
                                    updated.clone()
                                } else {
                                    item.clone()
                                }
                            })
                            .collect();
                        astrologers.set(next);
                    }
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
            });
        })
    };
    let on_delete = {
        let context = context.clone();
        let astrologers = astrologers.clone();
        let astrologer_id = astrologer.id;
        let astrologer_name = astrologer.name.clone();
        Callback::from(move |_event: MouseEvent| {
            let context = context.clone();
            let astrologers = astrologers.clone();
            let astrologer_name = astrologer_name.clone();
            spawn_local(async move {
                match context.api.delete_astrologer(astrologer_id).await {
                    Ok(()) => {
                        let next: Vec<Astrologer> = astrologers
                            .iter()
                            .filter(|item| item.id != astrologer_id)
                            .cloned()
                            .collect();
                        astrologers.set(next);
                        context.notices.push(
                            NoticeLevel::Success,
                            format!("Removed {astrologer_name}"),
                        );
                    }
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
            });
        })
    };
    html! {
        <li key={astrologer.id.to_string()} class="astrologer-item">
            <span class="astrologer-name">{ astrologer.name.clone() }</span>
            <span class="astrologer-expertise">{ astrologer.expertise.clone() }</span>
            <span class="astrologer-languages">{ astrologer.languages.join(", ") }</span>
            <span class="astrologer-rate">{ format!("{}/min", format_price(astrologer.per_minute_rate)) }</span>
            <label class="astrologer-available">
                { "Available" }
                <input type="checkbox" checked={astrologer.available} onchange={on_toggle} />
            </label>
            <button type="button" class="danger" onclick={on_delete}>{ "Delete" }</button>
        </li>
    }
}

fn split_languages(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

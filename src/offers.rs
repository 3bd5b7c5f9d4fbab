use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use gemdesk_core::protocol::{NavbarOffer, OfferDraft};

use crate::app_context::{AppContext, ContextProps};
use crate::notify::NoticeLevel;

#[function_component(OffersPage)]
pub(crate) fn offers_page(props: &ContextProps) -> Html {
    let offers = use_state(Vec::<NavbarOffer>::new);
    let loading = use_state(|| true);
    let text = use_state(String::new);

    {
        let context = props.context.clone();
        let offers = offers.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match context.api.list_offers().await {
                    Ok(list) => offers.set(list),
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_text = {
        let text = text.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            text.set(input.value());
        })
    };

    let on_submit = {
        let context = props.context.clone();
        let offers = offers.clone();
        let text = text.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let value = text.trim().to_string();
            if value.is_empty() {
                context
                    .notices
                    .push(NoticeLevel::Error, "Offer text is required");
                return;
            }
            let draft = OfferDraft {
                text: value,
                active: true,
            };
            let context = context.clone();
            let offers = offers.clone();
            let text = text.clone();
            spawn_local(async move {
                match context.api.create_offer(&draft).await {
                    Ok(offer) => {
                        let mut next = (*offers).clone();
                        next.insert(0, offer);
                        offers.set(next);
                        text.set(String::new());
                        context.notices.push(NoticeLevel::Success, "Offer created");
                    }
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
            });
        })
    };

    html! {
        <section class="page page-offers">
            <form class="inline-form" onsubmit={on_submit}>
                <div class="control">
                    <label for="offer-text">{ "Offer text" }</label>
                    <input id="offer-text" type="text" value={(*text).clone()} oninput={on_text} />
                </div>
                <button type="submit">{ "Add offer" }</button>
            </form>
            if *loading {
                <p class="page-loading">{ "Loading offers…" }</p>
            } else if offers.is_empty() {
                <p class="page-empty">{ "No offers yet" }</p>
            } else {
                <ul class="offer-list">
                    {
                        for offers.iter().map(|offer| offer_item(
                            props.context.clone(),
                            offers.clone(),
                            offer.clone(),
                        ))
                    }
                </ul>
            }
        </section>
    }
}

fn offer_item(
    context: Rc<AppContext>,
    offers: UseStateHandle<Vec<NavbarOffer>>,
    offer: NavbarOffer,
) -> Html {
    let on_toggle = {
        let context = context.clone();
        let offers = offers.clone();
        let offer = offer.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let draft = OfferDraft {
                text: offer.text.clone(),
                active: input.checked(),
            };
            let context = context.clone();
            let offers = offers.clone();
            let offer_id = offer.id;
            spawn_local(async move {
                match context.api.update_offer(offer_id, &draft).await {
                    Ok(updated) => {
                        let next: Vec<NavbarOffer> = offers
                            .iter()
                            .map(|item| {
                                if item.id == updated.id {
                                    updated.clone()
                                } else {
                                    item.clone()
                                }
                            })
                            .collect();
                        offers.set(next);
                    }
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
            });
        })
    };
    let on_delete = {
        let context = context.clone();
        let offers = offers.clone();
        let offer_id = offer.id;
        Callback::from(move |_event: MouseEvent| {
            let context = context.clone();
            let offers = offers.clone();
            spawn_local(async move {
                match context.api.delete_offer(offer_id).await {
                    Ok(()) => {
                        let next: Vec<NavbarOffer> = offers
                            .iter()
                            .filter(|item| item.id != offer_id)
                            .cloned()
                            .collect();
                        offers.set(next);
                        context.notices.push(NoticeLevel::Success, "Offer deleted");
                    }
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
            });
        })
    };
    html! {
        <li key={offer.id.to_string()} class="offer-item">
            <span class="offer-text">{ offer.text.clone() }</span>
            <label class="offer-active">
                { "Active" }
                <input type="checkbox" checked={offer.active} onchange={on_toggle} />
            </label>
            <button type="button" class="danger" onclick={on_delete}>{ "Delete" }</button>
        </li>
    }
}

use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use gemdesk_core::ProductRecord;

use crate::app_context::ContextProps;
use crate::app_router::{self, Section, SECTIONS};
use crate::appointments::AppointmentsPage;
use crate::astrologers::AstrologersPage;
use crate::banners::BannersPage;
use crate::blogs::BlogsPage;
use crate::boot_runtime::{self, BootState};
use crate::customers::CustomersPage;
use crate::notify::Notice;
use crate::offers::OffersPage;
use crate::orders::OrdersPage;
use crate::persisted_store;
use crate::product_form::ProductForm;
use crate::products::ProductsPage;
use crate::reports::ReportsPage;

#[function_component(App)]
pub(crate) fn app(props: &ContextProps) -> Html {
    let boot_ready = use_state(|| matches!(boot_runtime::boot_state(), BootState::Ready));
    let section = use_state(app_router::current_section);
    let theme = use_state(|| persisted_store::ui_settings().theme_mode);
    let notices = use_state(Vec::<Notice>::new);

    {
        let boot_ready = boot_ready.clone();
        let section = section.clone();
        let theme = theme.clone();
        use_effect_with((), move |_| {
            let watch = boot_runtime::watch_boot_state(Rc::new(move || {
                let ready = matches!(boot_runtime::boot_state(), BootState::Ready);
                boot_ready.set(ready);
                if ready {
                    // Persisted settings arrive after the first render; pick
                    // up the stored section and theme once they are in.
                    section.set(app_router::current_section());
                    theme.set(persisted_store::ui_settings().theme_mode);
                }
            }));
            move || drop(watch)
        });
    }

    {
        let section = section.clone();
        use_effect_with((), move |_| {
            let listener = app_router::listen_hash_change(Rc::new(move || {
                section.set(app_router::current_section());
            }));
            move || drop(listener)
        });
    }

    {
        let notices = notices.clone();
        let hub = props.context.notices.clone();
        use_effect_with((), move |_| {
            let hub_for_cb = hub.clone();
            let subscription = hub.subscribe(Rc::new(move || {
                notices.set(hub_for_cb.notices());
            }));
            move || drop(subscription)
        });
    }

    let boot_ready_value = *boot_ready;
    let section_value = *section;
    let theme_value = *theme;

    {
        use_effect_with(theme_value, move |mode| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Some(body) = document.body() {
                        let _ = body.set_attribute("data-theme", mode.attr_value());
                    }
                }
            }
            || ()
        });
    }

    {
        use_effect_with((section_value, boot_ready_value), move |(section, ready)| {
            if *ready {
                app_router::remember_section(*section);
            }
            || ()
        });
    }

    let on_theme_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).next();
            theme.set(next);
            persisted_store::update_ui_settings(move |settings| {
                settings.theme_mode = next;
            });
        })
    };

    let on_product_created = Callback::from(|_: ProductRecord| {
        app_router::navigate_to(Section::Products);
    });

    let nav_links = SECTIONS
        .iter()
        .map(|&entry| {
            let class = if entry == section_value {
                "nav-link nav-active"
            } else {
                "nav-link"
            };
            html! {
                <a class={class} href={app_router::format_section_hash(entry)}>
                    { entry.title() }
                </a>
            }
        })
        .collect::<Html>();

    let notice_stack = notices
        .iter()
        .map(|notice| {
            let hub = props.context.notices.clone();
            let id = notice.id;
            let on_dismiss = Callback::from(move |_: MouseEvent| hub.dismiss(id));
            let class = format!("notice {}", notice.level.css_class());
            html! {
                <div class={class} key={notice.id.to_string()}>
                    <span class="notice-text">{ notice.text.clone() }</span>
                    <button class="notice-dismiss" onclick={on_dismiss}>{ "\u{00d7}" }</button>
                </div>
            }
        })
        .collect::<Html>();

    let content = if boot_ready_value {
        match section_value {
            Section::Products => html! { <ProductsPage context={props.context.clone()} /> },
            Section::NewProduct => html! {
                <ProductForm
                    context={props.context.clone()}
                    on_saved={on_product_created}
                />
            },
            Section::Orders => html! { <OrdersPage context={props.context.clone()} /> },
            Section::Customers => html! { <CustomersPage context={props.context.clone()} /> },
            Section::Banners => html! { <BannersPage context={props.context.clone()} /> },
            Section::Offers => html! { <OffersPage context={props.context.clone()} /> },
            Section::Astrologers => html! { <AstrologersPage context={props.context.clone()} /> },
            Section::Appointments => {
                html! { <AppointmentsPage context={props.context.clone()} /> }
            }
            Section::Blogs => html! { <BlogsPage context={props.context.clone()} /> },
            Section::Reports => html! { <ReportsPage context={props.context.clone()} /> },
        }
    } else {
        html! { <p class="boot-status">{ "Loading saved settings…" }</p> }
    };

    html! {
        <div class="app-shell">
            <header class="top-bar">
                <h1 class="brand">{ "Gemdesk" }</h1>
                <button class="theme-toggle" onclick={on_theme_toggle}>
                    { format!("Theme: {}", theme_value.label()) }
                </button>
            </header>
            <div class="notice-stack">{ notice_stack }</div>
            <div class="app-body">
                <nav class="side-nav">{ nav_links }</nav>
                <main class="section-body">
                    <h2 class="section-title">{ section_value.title() }</h2>
                    { content }
                </main>
            </div>
        </div>
    }
}

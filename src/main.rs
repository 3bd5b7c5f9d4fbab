use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

mod api;
mod app;
mod app_context;
mod app_router;
mod appointments;
mod astrologers;
mod banners;
mod blogs;
mod boot_runtime;
mod certificate_view;
mod customers;
mod file_preview;
mod idb;
mod notify;
mod offers;
mod orders;
mod persisted;
mod persisted_store;
mod product_form;
mod products;
mod reports;

use app::App;
use app_context::{AppContext, ContextProps};
use boot_runtime::BootState;

fn main() {
    spawn_local(async {
        boot_runtime::set_boot_state(BootState::LoadingStorage);
        if let Err(message) = persisted_store::bootstrap().await {
            gloo::console::warn!("settings bootstrap failed:", message);
        }
        boot_runtime::set_boot_state(BootState::Ready);
    });
    let context = Rc::new(AppContext::new());
    yew::Renderer::<App>::with_props(ContextProps { context }).render();
}

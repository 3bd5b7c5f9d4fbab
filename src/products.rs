use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use gemdesk_core::catalog::category_label;
use gemdesk_core::protocol::ProductRecord;

use crate::app_context::{AppContext, ContextProps};
use crate::notify::NoticeLevel;
use crate::product_form::ProductForm;

#[function_component(ProductsPage)]
pub(crate) fn products_page(props: &ContextProps) -> Html {
    let products = use_state(Vec::<ProductRecord>::new);
    let loading = use_state(|| true);
    let editing: UseStateHandle<Option<ProductRecord>> = use_state(|| None);

    {
        let context = props.context.clone();
        let products = products.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match context.api.list_products().await {
                    Ok(list) => products.set(list),
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_saved = {
        let products = products.clone();
        let editing = editing.clone();
        Callback::from(move |record: ProductRecord| {
            let mut next = (*products).clone();
            match next.iter_mut().find(|item| item.id == record.id) {
                Some(slot) => *slot = record,
                None => next.insert(0, record),
            }
            products.set(next);
            editing.set(None);
        })
    };

    if let Some(record) = (*editing).clone() {
        let on_back = {
            let editing = editing.clone();
            Callback::from(move |_event: MouseEvent| editing.set(None))
        };
        return html! {
            <section class="page page-products">
                <button type="button" class="page-back" onclick={on_back}>
                    { "Back to products" }
                </button>
                <ProductForm
                    key={record.id.to_string()}
                    context={props.context.clone()}
                    existing={Some(record.clone())}
                    on_saved={on_saved}
                />
            </section>
        };
    }

    html! {
        <section class="page page-products">
            if *loading {
                <p class="page-loading">{ "Loading products…" }</p>
            } else if products.is_empty() {
                <p class="page-empty">{ "No products yet" }</p>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "Name" }</th>
                            <th>{ "Category" }</th>
                            <th>{ "Actual" }</th>
                            <th>{ "Sale" }</th>
                            <th>{ "Qty" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for products.iter().map(|record| product_row(
                                props.context.clone(),
                                products.clone(),
                                editing.clone(),
                                record.clone(),
                            ))
                        }
                    </tbody>
                </table>
            }
        </section>
    }
}

fn product_row(
    context: Rc<AppContext>,
    products: UseStateHandle<Vec<ProductRecord>>,
    editing: UseStateHandle<Option<ProductRecord>>,
    record: ProductRecord,
) -> Html {
    let on_edit = {
        let editing = editing.clone();
        let record = record.clone();
        Callback::from(move |_event: MouseEvent| {
            editing.set(Some(record.clone()));
        })
    };
    let on_delete = {
        let context = context.clone();
        let products = products.clone();
        let record = record.clone();
        Callback::from(move |_event: MouseEvent| {
            let context = context.clone();
            let products = products.clone();
            let record = record.clone();
            spawn_local(async move {
                match context.api.delete_product(record.id).await {
                    Ok(()) => {
                        let next: Vec<ProductRecord> = products
                            .iter()
                            .filter(|item| item.id != record.id)
                            .cloned()
                            .collect();
                        products.set(next);
                        context
                            .notices
                            .push(NoticeLevel::Success, format!("Deleted {}", record.name));
                    }
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
            });
        })
    };
    html! {
        <tr key={record.id.to_string()}>
            <td>{ record.name.clone() }</td>
            <td>{ category_label(&record.category).to_string() }</td>
            <td>{ format_price(record.actual_price) }</td>
            <td>{ format_price(record.sale_price) }</td>
            <td>{ record.quantity }</td>
            <td class="row-actions">
                <button type="button" onclick={on_edit}>{ "Edit" }</button>
                <button type="button" class="danger" onclick={on_delete}>{ "Delete" }</button>
            </td>
        </tr>
    }
}

pub(crate) fn format_price(value: f64) -> String {
    format!("₹{value}")
}

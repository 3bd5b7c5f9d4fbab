use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlSelectElement};
use yew::prelude::*;

use gemdesk_core::protocol::{OrderStatus, OrderSummary};

use crate::app_context::{AppContext, ContextProps};
use crate::notify::NoticeLevel;
use crate::products::format_price;

#[function_component(OrdersPage)]
pub(crate) fn orders_page(props: &ContextProps) -> Html {
    let orders = use_state(Vec::<OrderSummary>::new);
    let loading = use_state(|| true);

    {
        let context = props.context.clone();
        let orders = orders.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match context.api.list_orders().await {
                    Ok(list) => orders.set(list),
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <section class="page page-orders">
            if *loading {
                <p class="page-loading">{ "Loading orders…" }</p>
            } else if orders.is_empty() {
                <p class="page-empty">{ "No orders yet" }</p>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "Order" }</th>
                            <th>{ "Customer" }</th>
                            <th>{ "Items" }</th>
                            <th>{ "Total" }</th>
                            <th>{ "Placed" }</th>
                            <th>{ "Status" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for orders.iter().map(|order| order_row(
                                props.context.clone(),
                                orders.clone(),
                                order.clone(),
                            ))
                        }
                    </tbody>
                </table>
            }
        </section>
    }
}

fn order_row(
    context: Rc<AppContext>,
    orders: UseStateHandle<Vec<OrderSummary>>,
    order: OrderSummary,
) -> Html {
    let on_status = {
        let context = context.clone();
        let orders = orders.clone();
        let order_id = order.id;
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let Some(status) = OrderStatus::from_slug(&select.value()) else {
                return;
            };
            let context = context.clone();
            let orders = orders.clone();
            spawn_local(async move {
                match context.api.update_order_status(order_id, status).await {
                    Ok(updated) => {
                        context.notices.push(
                            NoticeLevel::Info,
                            format!("Order #{} marked {}", updated.id, updated.status.label()),
                        );
                        let next: Vec<OrderSummary> = orders
                            .iter()
                            .map(|item| {
                                if item.id == updated.id {
                                    updated.clone()
                                } else {
                                    item.clone()
                                }
                            })
                            .collect();
                        orders.set(next);
                    }
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
            });
        })
    };
    html! {
        <tr key={order.id.to_string()}>
            <td>{ format!("#{}", order.id) }</td>
            <td>{ order.customer_name.clone() }</td>
            <td>{ order.items }</td>
            <td>{ format_price(order.total) }</td>
            <td>{ order.placed_at.clone() }</td>
            <td>
                <select onchange={on_status}>
                    {
                        for OrderStatus::ALL.iter().map(|&status| html! {
                            <option
                                value={status.slug()}
                                selected={status == order.status}
                            >
                                { status.label() }
                            </option>
                        })
                    }
                </select>
            </td>
        </tr>
    }
}

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use gemdesk_core::protocol::Customer;

use crate::app_context::ContextProps;
use crate::notify::NoticeLevel;

#[function_component(CustomersPage)]
pub(crate) fn customers_page(props: &ContextProps) -> Html {
    let customers = use_state(Vec::<Customer>::new);
    let loading = use_state(|| true);

    {
        let context = props.context.clone();
        let customers = customers.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match context.api.list_customers().await {
                    Ok(list) => customers.set(list),
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <section class="page page-customers">
            if *loading {
                <p class="page-loading">{ "Loading customers…" }</p>
            } else if customers.is_empty() {
                <p class="page-empty">{ "No customers yet" }</p>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "Name" }</th>
                            <th>{ "Email" }</th>
                            <th>{ "Phone" }</th>
                            <th>{ "Orders" }</th>
                            <th>{ "Joined" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for customers.iter().map(|customer| html! {
                                <tr key={customer.id.to_string()}>
                                    <td>{ customer.name.clone() }</td>
                                    <td>{ customer.email.clone() }</td>
                                    <td>{ customer.phone.clone() }</td>
                                    <td>{ customer.orders_count }</td>
                                    <td>{ customer.joined_at.clone() }</td>
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            }
        </section>
    }
}

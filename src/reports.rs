use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use gemdesk_core::catalog::category_label;
use gemdesk_core::protocol::ReportsSummary;

use crate::app_context::ContextProps;
use crate::notify::NoticeLevel;
use crate::products::format_price;

#[function_component(ReportsPage)]
pub(crate) fn reports_page(props: &ContextProps) -> Html {
    let summary: UseStateHandle<Option<ReportsSummary>> = use_state(|| None);
    let loading = use_state(|| true);

    {
        let context = props.context.clone();
        let summary = summary.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match context.api.reports_summary().await {
                    Ok(value) => summary.set(Some(value)),
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <section class="page page-reports">
            if *loading {
                <p class="page-loading">{ "Loading reports…" }</p>
            } else if let Some(summary) = summary.as_ref() {
                <div class="stat-grid">
                    { stat_card("Orders", summary.total_orders.to_string()) }
                    { stat_card("Revenue", format_price(summary.total_revenue)) }
                    { stat_card("Customers", summary.total_customers.to_string()) }
                    { stat_card("Pending appointments", summary.pending_appointments.to_string()) }
                </div>
                if !summary.top_categories.is_empty() {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{ "Category" }</th>
                                <th>{ "Revenue" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                for summary.top_categories.iter().map(|entry| html! {
                                    <tr key={entry.category.clone()}>
                                        <td>{ category_label(&entry.category).to_string() }</td>
                                        <td>{ format_price(entry.revenue) }</td>
                                    </tr>
                                })
                            }
                        </tbody>
                    </table>
                }
            } else {
                <p class="page-empty">{ "Reports unavailable" }</p>
            }
        </section>
    }
}

fn stat_card(label: &'static str, value: String) -> Html {
    html! {
        <div class="stat-card">
            <span class="stat-value">{ value }</span>
            <span class="stat-label">{ label }</span>
        </div>
    }
}

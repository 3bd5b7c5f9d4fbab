use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlSelectElement};
use yew::prelude::*;

use gemdesk_core::protocol::{Appointment, AppointmentStatus};

use crate::app_context::{AppContext, ContextProps};
use crate::notify::NoticeLevel;

#[function_component(AppointmentsPage)]
pub(crate) fn appointments_page(props: &ContextProps) -> Html {
    let appointments = use_state(Vec::<Appointment>::new);
    let loading = use_state(|| true);

    {
        let context = props.context.clone();
        let appointments = appointments.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match context.api.list_appointments().await {
                    Ok(list) => appointments.set(list),
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <section class="page page-appointments">
            if *loading {
                <p class="page-loading">{ "Loading appointments…" }</p>
            } else if appointments.is_empty() {
                <p class="page-empty">{ "No appointments yet" }</p>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "Astrologer" }</th>
                            <th>{ "Customer" }</th>
                            <th>{ "When" }</th>
                            <th>{ "Status" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for appointments.iter().map(|appointment| appointment_row(
                                props.context.clone(),
                                appointments.clone(),
                                appointment.clone(),
                            ))
                        }
                    </tbody>
                </table>
            }
        </section>
    }
}

fn appointment_row(
    context: Rc<AppContext>,
    appointments: UseStateHandle<Vec<Appointment>>,
    appointment: Appointment,
) -> Html {
    let on_status = {
        let context = context.clone();
        let appointments = appointments.clone();
        let appointment_id = appointment.id;
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let Some(status) = AppointmentStatus::from_slug(&select.value()) else {
                return;
            };
            let context = context.clone();
            let appointments = appointments.clone();
            spawn_local(async move {
                match context
                    .api
                    .update_appointment_status(appointment_id, status)
                    .await
                {
                    Ok(updated) => {
                        let next: Vec<Appointment> = appointments
                            .iter()
                            .map(|item| {
                                if item.id == updated.id {
                                    updated.clone()
                                } else {
                                    item.clone()
                                }
                            })
                            .collect();
                        appointments.set(next);
                    }
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
            });
        })
    };
    html! {
        <tr key={appointment.id.to_string()}>
            <td>{ appointment.astrologer_name.clone() }</td>
            <td>{ appointment.customer_name.clone() }</td>
            <td>{ appointment.scheduled_at.clone() }</td>
            <td>
                <select onchange={on_status}>
                    {
                        for AppointmentStatus::ALL.iter().map(|&status| html! {
                            <option
                                value={status.slug()}
                                selected={status == appointment.status}
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

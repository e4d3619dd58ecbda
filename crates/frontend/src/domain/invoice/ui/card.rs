use contracts::domain::invoice::InvoiceDto;
use leptos::prelude::*;

use super::{status_pill_class, status_pill_label};
use crate::shared::date_utils::format_date;

/// One invoice as a card (grid view).
#[component]
pub fn InvoiceCard(invoice: InvoiceDto) -> impl IntoView {
    view! {
        <div class="invoice-card">
            <div class="invoice-card__header">
                <div>
                    <p class="muted">"Cliente"</p>
                    <p class="invoice-card__customer">{invoice.customer_name.clone()}</p>
                </div>
                <span class=status_pill_class(&invoice.status)>
                    {status_pill_label(&invoice.status)}
                </span>
            </div>
            <div class="invoice-card__grid">
                <div>
                    <p class="muted">"Servicio"</p>
                    <p>{invoice.service.clone()}</p>
                </div>
                <div>
                    <p class="muted">"Monto"</p>
                    <p class="invoice-card__amount">{format!("Bs. {:.2}", invoice.amount)}</p>
                </div>
                <div>
                    <p class="muted">"Periodo"</p>
                    <p>{invoice.period.clone()}</p>
                </div>
                <div>
                    <p class="muted">"Vencimiento"</p>
                    <p>{format_date(&invoice.due_date)}</p>
                </div>
            </div>
        </div>
    }
}

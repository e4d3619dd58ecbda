use contracts::domain::invoice::InvoiceDto;
use leptos::prelude::*;

use super::{status_pill_class, status_pill_label};
use crate::shared::date_utils::format_date;

/// One page of invoices as a table.
#[component]
pub fn InvoiceTable(invoices: Vec<InvoiceDto>) -> impl IntoView {
    view! {
        <div class="invoice-table-wrap">
            <table class="invoice-table">
                <thead>
                    <tr>
                        <th>"Cliente"</th>
                        <th>"Número de Factura"</th>
                        <th>"Servicio"</th>
                        <th>"Monto"</th>
                        <th>"Periodo"</th>
                        <th>"Vencimiento"</th>
                        <th>"Estado"</th>
                    </tr>
                </thead>
                <tbody>
                    {invoices.into_iter().map(|invoice| {
                        view! {
                            <tr>
                                <td>{invoice.customer_name.clone()}</td>
                                <td>{invoice.invoice_number.clone()}</td>
                                <td>{invoice.service.clone()}</td>
                                <td class="invoice-table__amount">{format!("Bs. {:.2}", invoice.amount)}</td>
                                <td>{invoice.period.clone()}</td>
                                <td>{format_date(&invoice.due_date)}</td>
                                <td>
                                    <span class=status_pill_class(&invoice.status)>
                                        {status_pill_label(&invoice.status)}
                                    </span>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

use contracts::domain::invoice::{
    active_filter_entries, filter_display_value, filter_label, pagination_info, InvoiceDto,
};
use leptos::prelude::*;

use crate::layout::invoice_context::InvoiceAppContext;
use crate::shared::components::{FilterTag, PaginationControls};
use crate::shared::icons::icon;

use super::card::InvoiceCard;
use super::filters_panel::FiltersPanel;
use super::table::InvoiceTable;

/// Invoice results: customer chips, filter toolbar, card/table views and
/// pagination.
#[component]
pub fn InvoiceList() -> impl IntoView {
    let ctx = use_context::<InvoiceAppContext>().expect("InvoiceAppContext not found");

    let is_filters_open = RwSignal::new(false);
    let (view_mode, set_view_mode) = signal("cards".to_string());
    let (rows_per_page, set_rows_per_page) = signal(6usize);

    let active_entries = Memo::new(move |_| active_filter_entries(&ctx.filters.get()));

    // The page slice the current view renders.
    let page_invoices = Memo::new(move |_| -> Vec<InvoiceDto> {
        let invoices = ctx.invoices.get();
        let info = pagination_info(invoices.len(), ctx.current_page.get(), rows_per_page.get());
        invoices
            .get(info.start_index..info.end_index)
            .map(|window| window.to_vec())
            .unwrap_or_default()
    });

    // The calculator expects a page in range; fall back to the first page
    // when the list shrinks under the current one (e.g. a customer removed).
    Effect::new(move |_| {
        let total = ctx.invoices.get().len();
        let info = pagination_info(total, ctx.current_page.get(), rows_per_page.get());
        if total > 0 && info.start_index >= total {
            ctx.current_page.set(1);
        }
    });

    view! {
        <section class="results">
            // Selected customer chips
            {move || {
                let customers = ctx.selected_customers.get();
                if customers.is_empty() {
                    return view! {}.into_any();
                }
                view! {
                    <div class="customer-chips">
                        <span class="muted">"Clientes:"</span>
                        {customers.into_iter().map(|customer| {
                            let id = customer.customer_id.clone();
                            view! {
                                <FilterTag
                                    label=customer.name.clone()
                                    on_remove=Callback::new(move |_| ctx.remove_customer(&id))
                                />
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}

            // Error banner
            {move || ctx.error.get().map(|err| view! {
                <div class="error-banner">{err}</div>
            })}

            <div class="toolbar">
                <div class="toolbar__left">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| is_filters_open.set(true)
                    >
                        {icon("filter")}
                        " Filtros"
                    </button>
                    {move || active_entries.get().into_iter().map(|(key, value)| {
                        let label = format!(
                            "{}: {}",
                            filter_label(key),
                            filter_display_value(key, &value)
                        );
                        view! {
                            <FilterTag
                                label=label
                                on_remove=Callback::new(move |_| ctx.remove_filter(key))
                            />
                        }
                    }).collect_view()}
                </div>
                <div class="toolbar__right">
                    <div class="view-toggle">
                        <button
                            type="button"
                            class=move || {
                                if view_mode.get() == "cards" {
                                    "view-toggle__btn view-toggle__btn--active"
                                } else {
                                    "view-toggle__btn"
                                }
                            }
                            on:click=move |_| set_view_mode.set("cards".to_string())
                            title="Vista de Tarjetas"
                        >
                            {icon("layout-grid")}
                        </button>
                        <button
                            type="button"
                            class=move || {
                                if view_mode.get() == "table" {
                                    "view-toggle__btn view-toggle__btn--active"
                                } else {
                                    "view-toggle__btn"
                                }
                            }
                            on:click=move |_| set_view_mode.set("table".to_string())
                            title="Vista de Tabla"
                        >
                            {icon("table")}
                        </button>
                    </div>
                </div>
            </div>

            {move || {
                if ctx.loading.get() {
                    return view! {
                        <div class="empty-state">"Cargando facturas..."</div>
                    }.into_any();
                }
                if ctx.invoices.get().is_empty() {
                    let msg = if ctx.selected_customers.get().is_empty() {
                        "Seleccione un cliente para ver las facturas"
                    } else {
                        "No se encontraron facturas"
                    };
                    return view! {
                        <div class="empty-state">{msg}</div>
                    }.into_any();
                }
                view! {
                    <div class=move || {
                        if ctx.show_results.get() {
                            "results__body results__body--visible"
                        } else {
                            "results__body"
                        }
                    }>
                        {move || {
                            let page = page_invoices.get();
                            if view_mode.get() == "cards" {
                                view! {
                                    <div class="card-grid">
                                        {page.into_iter().map(|invoice| view! {
                                            <InvoiceCard invoice=invoice />
                                        }).collect_view()}
                                    </div>
                                }.into_any()
                            } else {
                                view! { <InvoiceTable invoices=page /> }.into_any()
                            }
                        }}

                        <PaginationControls
                            total_items=Signal::derive(move || ctx.invoices.get().len())
                            current_page=ctx.current_page
                            rows_per_page=rows_per_page
                            on_page_change=Callback::new(move |page| ctx.current_page.set(page))
                            on_rows_change=Callback::new(move |rows| {
                                set_rows_per_page.set(rows);
                                ctx.current_page.set(1);
                            })
                        />
                    </div>
                }.into_any()
            }}

            <FiltersPanel is_open=is_filters_open />
        </section>
    }
}

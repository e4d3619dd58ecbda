use leptos::prelude::*;

use crate::layout::invoice_context::InvoiceAppContext;
use crate::shared::icons::icon;

/// FiltersPanel component - slide-over with the filter form. Edits the
/// shared filter state live; the engine only runs on "Aplicar".
#[component]
pub fn FiltersPanel(
    /// Whether the panel is open
    #[prop(into)]
    is_open: RwSignal<bool>,
) -> impl IntoView {
    let ctx = use_context::<InvoiceAppContext>().expect("InvoiceAppContext not found");
    let filters = ctx.filters;

    let apply = move |_| {
        ctx.apply_filters();
        is_open.set(false);
    };
    let clear = move |_| {
        ctx.clear_filters();
    };

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "filters-overlay filters-overlay--open"
                } else {
                    "filters-overlay"
                }
            }
            on:click=move |_| is_open.set(false)
        ></div>

        <aside class=move || {
            if is_open.get() {
                "filters-panel filters-panel--open"
            } else {
                "filters-panel"
            }
        }>
            <div class="filters-panel__header">
                <div class="filters-panel__title">
                    {icon("filter")}
                    <h2>"Filtros"</h2>
                </div>
                <button
                    type="button"
                    class="filters-panel__close"
                    on:click=move |_| is_open.set(false)
                >
                    {icon("x")}
                </button>
            </div>

            <div class="filters-panel__body">
                <div class="form__group">
                    <label class="form__label">"Filtrar por Estado"</label>
                    <select
                        class="form__select"
                        on:change=move |ev| {
                            let val = event_target_value(&ev);
                            filters.update(|f| f.status = val);
                        }
                        prop:value=move || filters.get().status
                    >
                        <option value="all" selected=move || filters.get().status == "all">
                            "Todos los Estados"
                        </option>
                        <option value="pending" selected=move || filters.get().status == "pending">
                            "Pendiente"
                        </option>
                        <option value="overdue" selected=move || filters.get().status == "overdue">
                            "Vencida"
                        </option>
                        <option value="paid" selected=move || filters.get().status == "paid">
                            "Pagada"
                        </option>
                    </select>
                </div>

                <div class="form__group">
                    <label class="form__label">"Filtrar por Monto"</label>
                    <div class="form__pair">
                        <div>
                            <label class="form__hint">"Monto Mínimo"</label>
                            <input
                                class="form__input"
                                type="number"
                                placeholder="0"
                                prop:value=move || filters.get().min_amount
                                on:input=move |ev| {
                                    let val = event_target_value(&ev);
                                    filters.update(|f| f.min_amount = val);
                                }
                            />
                        </div>
                        <div>
                            <label class="form__hint">"Monto Máximo"</label>
                            <input
                                class="form__input"
                                type="number"
                                placeholder="9999"
                                prop:value=move || filters.get().max_amount
                                on:input=move |ev| {
                                    let val = event_target_value(&ev);
                                    filters.update(|f| f.max_amount = val);
                                }
                            />
                        </div>
                    </div>
                </div>

                <div class="form__group">
                    <label class="form__label">"Filtrar por Fecha"</label>
                    <div class="form__pair">
                        <div>
                            <label class="form__hint">"Fecha Inicio"</label>
                            <input
                                class="form__input"
                                type="date"
                                prop:value=move || filters.get().start_date
                                on:input=move |ev| {
                                    let val = event_target_value(&ev);
                                    filters.update(|f| f.start_date = val);
                                }
                            />
                        </div>
                        <div>
                            <label class="form__hint">"Fecha Fin"</label>
                            <input
                                class="form__input"
                                type="date"
                                prop:value=move || filters.get().end_date
                                on:input=move |ev| {
                                    let val = event_target_value(&ev);
                                    filters.update(|f| f.end_date = val);
                                }
                            />
                        </div>
                    </div>
                </div>
            </div>

            <div class="filters-panel__footer">
                <button type="button" class="button button--primary" on:click=apply>
                    "Aplicar Filtros"
                </button>
                <button type="button" class="button button--secondary" on:click=clear>
                    "Limpiar Filtros"
                </button>
            </div>
        </aside>
    }
}

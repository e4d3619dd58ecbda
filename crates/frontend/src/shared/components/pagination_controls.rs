use contracts::domain::invoice::pagination_info;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// PaginationControls component - rows-per-page select, result range and
/// page navigation, driven by the pagination calculator.
#[component]
pub fn PaginationControls(
    /// Total count of (filtered) items
    #[prop(into)]
    total_items: Signal<usize>,

    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Current rows-per-page value
    #[prop(into)]
    rows_per_page: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when rows-per-page changes
    on_rows_change: Callback<usize>,

    /// Available rows-per-page options (optional, defaults to [6, 12, 24, 48])
    #[prop(optional)]
    rows_options: Option<Vec<usize>>,
) -> impl IntoView {
    let rows_opts = rows_options.unwrap_or_else(|| vec![6, 12, 24, 48]);

    let info = Memo::new(move |_| {
        pagination_info(total_items.get(), current_page.get(), rows_per_page.get())
    });

    view! {
        <div class="pagination">
            <div class="pagination__rows">
                <span class="muted">"Filas por página:"</span>
                <select
                    class="pagination__select"
                    on:change=move |ev| {
                        let val = event_target_value(&ev).parse().unwrap_or(6);
                        on_rows_change.run(val);
                    }
                    prop:value=move || rows_per_page.get().to_string()
                >
                    {rows_opts.iter().map(|&size| {
                        view! {
                            <option value={size.to_string()} selected=move || rows_per_page.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <div class="pagination__range muted">
                {move || {
                    let info = info.get();
                    format!(
                        "Mostrando {}-{} de {} resultados",
                        info.start_index + 1,
                        info.end_index,
                        total_items.get()
                    )
                }}
            </div>

            <div class="pagination__nav">
                <button
                    class="pagination__btn"
                    on:click=move |_| {
                        if info.get().has_previous_page {
                            on_page_change.run(current_page.get() - 1);
                        }
                    }
                    disabled=move || !info.get().has_previous_page
                    title="Página anterior"
                >
                    {icon("chevron-left")}
                </button>
                <span class="pagination__counter">
                    {move || format!("{} / {}", current_page.get(), info.get().total_pages)}
                </span>
                <button
                    class="pagination__btn"
                    on:click=move |_| {
                        if info.get().has_next_page {
                            on_page_change.run(current_page.get() + 1);
                        }
                    }
                    disabled=move || !info.get().has_next_page
                    title="Página siguiente"
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}

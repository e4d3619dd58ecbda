use leptos::prelude::*;

use crate::shared::icons::icon;

/// FilterTag component - removable chip for an active filter or a selected
/// customer
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <span class="filter-tag">
            <span>{label}</span>
            <button
                type="button"
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </button>
        </span>
    }
}

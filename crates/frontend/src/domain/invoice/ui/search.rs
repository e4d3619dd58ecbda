use leptos::prelude::*;

use crate::layout::invoice_context::InvoiceAppContext;

/// Customer lookup form with inline validation.
#[component]
pub fn SearchForm() -> impl IntoView {
    let ctx = use_context::<InvoiceAppContext>().expect("InvoiceAppContext not found");

    let (customer_id, set_customer_id) = signal(String::new());
    let (validation, set_validation) = signal(None::<String>);

    let submit = move || {
        let value = customer_id.get_untracked().trim().to_string();
        if value.is_empty() {
            set_validation.set(Some("El campo es obligatorio".to_string()));
        } else if value.chars().count() < 2 {
            set_validation.set(Some("Debe tener al menos 2 caracteres".to_string()));
        } else if !value.chars().all(|c| c.is_ascii_digit()) {
            set_validation.set(Some("Solo se permiten números".to_string()));
        } else {
            set_validation.set(None);
            ctx.add_customer(value);
            set_customer_id.set(String::new());
        }
    };

    view! {
        <form
            class="search-form"
            on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }
        >
            <div class="search-form__row">
                <input
                    class="search-form__input"
                    type="text"
                    placeholder="ID del cliente"
                    prop:value=move || customer_id.get()
                    on:input=move |ev| set_customer_id.set(event_target_value(&ev))
                />
                <button class="button button--primary" type="submit">
                    "Buscar"
                </button>
            </div>
            {move || validation.get().map(|msg| view! {
                <span class="search-form__error">{msg}</span>
            })}
        </form>
    }
}

use leptos::prelude::*;

use crate::domain::invoice::ui::list::InvoiceList;
use crate::domain::invoice::ui::search::SearchForm;
use crate::layout::invoice_context::InvoiceAppContext;

#[component]
pub fn App() -> impl IntoView {
    // Provide the invoice store to the whole app via context.
    let ctx = InvoiceAppContext::new();
    provide_context(ctx);

    // Restore filter and customer selection from the URL once on mount.
    ctx.init_from_url();

    view! {
        <main class="page">
            <header class="hero">
                <div>
                    <h1 class="hero__title">"Consulta de facturas"</h1>
                    <p class="hero__subtitle">
                        "Ingresa el identificador del cliente para ver sus facturas (ejemplo: 123)"
                    </p>
                </div>
                <SearchForm />
            </header>
            <InvoiceList />
        </main>
    }
}

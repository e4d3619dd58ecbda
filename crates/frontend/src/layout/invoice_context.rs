use contracts::domain::invoice::{
    build_url_params, filter_invoices, parse_customer_ids, parse_url_filters, InvoiceDto,
    InvoiceFilters,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::invoice::{api, url_state};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedCustomer {
    pub customer_id: String,
    pub name: String,
}

/// App-wide invoice store, provided once from `App` and reached through
/// context. Keeps the core functions pure: everything stateful lives here.
#[derive(Clone, Copy)]
pub struct InvoiceAppContext {
    /// Customers the user looked up, in selection order, unique by id.
    pub selected_customers: RwSignal<Vec<SelectedCustomer>>,
    /// Merged, unfiltered result of the last completed fetch round.
    pub all_invoices: RwSignal<Vec<InvoiceDto>>,
    /// The filtered view the page renders.
    pub invoices: RwSignal<Vec<InvoiceDto>>,
    pub filters: RwSignal<InvoiceFilters>,
    /// 1-indexed.
    pub current_page: RwSignal<usize>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Drives the reveal animation of the result area.
    pub show_results: RwSignal<bool>,
    /// Bumped per fetch round; a round that finds itself outdated drops its
    /// result instead of overwriting a newer one.
    fetch_round: StoredValue<u64>,
}

impl InvoiceAppContext {
    pub fn new() -> Self {
        Self {
            selected_customers: RwSignal::new(vec![]),
            all_invoices: RwSignal::new(vec![]),
            invoices: RwSignal::new(vec![]),
            filters: RwSignal::new(InvoiceFilters::default()),
            current_page: RwSignal::new(1),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            show_results: RwSignal::new(false),
            fetch_round: StoredValue::new(0),
        }
    }

    /// Restore filters and customer selection from the page URL.
    pub fn init_from_url(&self) {
        let params = url_state::read_query_params();
        if let Some(filters) = parse_url_filters(&params) {
            self.filters.set(filters);
        }

        // The codec keeps duplicates; selection is unique, so dedup here.
        let mut unique: Vec<String> = Vec::new();
        for id in parse_customer_ids(&params) {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        for customer_id in unique {
            self.add_customer(customer_id);
        }
    }

    /// Look up a customer and add it to the selection. Duplicates are
    /// ignored; a customer without invoices is reported and not added.
    pub fn add_customer(&self, customer_id: String) {
        let exists = self
            .selected_customers
            .with_untracked(|list| list.iter().any(|c| c.customer_id == customer_id));
        if exists {
            return;
        }

        let this = *self;
        this.loading.set(true);
        this.error.set(None);

        spawn_local(async move {
            match api::fetch_invoices(&customer_id).await {
                Ok(dataset) if dataset.is_empty() => {
                    this.error
                        .set(Some("No se encontraron facturas para este cliente".to_string()));
                }
                Ok(dataset) => {
                    let name = dataset[0].customer_name.clone();
                    leptos::logging::log!("customer {} added ({})", customer_id, name);
                    this.selected_customers.update(|list| {
                        list.push(SelectedCustomer { customer_id, name });
                    });
                    this.sync_customers_param();
                    this.reload_invoices().await;
                    this.reveal_results();
                }
                Err(e) => {
                    this.error.set(Some(format!("Error al buscar cliente: {}", e)));
                }
            }
            this.loading.set(false);
        });
    }

    /// Drop a customer from the selection and refetch what remains.
    pub fn remove_customer(&self, customer_id: &str) {
        leptos::logging::log!("customer {} removed", customer_id);
        self.selected_customers
            .update(|list| list.retain(|c| c.customer_id != customer_id));
        self.sync_customers_param();

        let this = *self;
        if self.selected_customers.with_untracked(|list| list.is_empty()) {
            // Invalidate any in-flight round so it cannot resurrect the list.
            this.fetch_round.update_value(|round| *round += 1);
            this.all_invoices.set(vec![]);
            this.invoices.set(vec![]);
            return;
        }

        this.loading.set(true);
        spawn_local(async move {
            this.reload_invoices().await;
            this.loading.set(false);
        });
    }

    /// Re-run the filtering engine, reset paging and rewrite the URL.
    pub fn apply_filters(&self) {
        let filters = self.filters.get_untracked();
        self.invoices
            .set(filter_invoices(&self.all_invoices.get_untracked(), &filters));
        self.current_page.set(1);
        url_state::update_url_params(&build_url_params(&filters));
        self.reveal_results();
    }

    /// Deactivate one filter field (badge dismissal).
    pub fn remove_filter(&self, key: &str) {
        self.filters.update(|f| f.clear_field(key));
        let filters = self.filters.get_untracked();
        self.invoices
            .set(filter_invoices(&self.all_invoices.get_untracked(), &filters));
        self.current_page.set(1);
        url_state::update_url_params(&build_url_params(&filters));
    }

    /// Back to the neutral filter state.
    pub fn clear_filters(&self) {
        self.filters.set(InvoiceFilters::default());
        self.invoices.set(self.all_invoices.get_untracked());
        self.current_page.set(1);
        url_state::update_url_params(&build_url_params(&InvoiceFilters::default()));
        self.reveal_results();
    }

    /// Fetch every selected customer and publish the merged result, unless a
    /// newer round started while this one was awaiting.
    async fn reload_invoices(&self) {
        let round = self.fetch_round.get_value() + 1;
        self.fetch_round.set_value(round);

        let customers = self.selected_customers.get_untracked();
        let mut merged: Vec<InvoiceDto> = Vec::new();
        for customer in &customers {
            match api::fetch_invoices(&customer.customer_id).await {
                Ok(mut dataset) => merged.append(&mut dataset),
                Err(e) => {
                    if self.fetch_round.get_value() == round {
                        self.error
                            .set(Some(format!("Error al cargar facturas: {}", e)));
                    }
                    return;
                }
            }
        }

        if self.fetch_round.get_value() != round {
            return;
        }

        let filters = self.filters.get_untracked();
        self.invoices.set(filter_invoices(&merged, &filters));
        self.all_invoices.set(merged);
    }

    /// Hide the result area and fade it back in.
    fn reveal_results(&self) {
        let this = *self;
        this.show_results.set(false);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(400).await;
            this.show_results.set(true);
        });
    }

    fn sync_customers_param(&self) {
        let joined = self.selected_customers.with_untracked(|list| {
            list.iter()
                .map(|c| c.customer_id.as_str())
                .collect::<Vec<_>>()
                .join(",")
        });
        let value = if joined.is_empty() { None } else { Some(joined) };
        url_state::update_url_params(&[("customers", value)]);
    }
}

impl Default for InvoiceAppContext {
    fn default() -> Self {
        Self::new()
    }
}

pub mod invoice_context;

pub mod filter_tag;
pub mod pagination_controls;

pub use filter_tag::FilterTag;
pub use pagination_controls::PaginationControls;

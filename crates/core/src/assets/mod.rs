//! Asset domain model, the compiled-in dataset, and the search filter.

mod assets_constants;
mod assets_filter;
mod assets_model;

pub use assets_constants::default_assets;
pub use assets_filter::filter_assets;
pub use assets_model::Asset;

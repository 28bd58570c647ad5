pub mod catalog;
pub mod element;
pub mod icon;
pub mod weight;

pub use catalog::{CatalogAlias, CatalogEntry};
pub use element::Element;
pub use icon::{IconRecord, IconSet, WeightSources};
pub use weight::Weight;

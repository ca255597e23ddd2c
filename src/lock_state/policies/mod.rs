pub mod component_ordering;

pub use component_ordering::ComponentOrdering;

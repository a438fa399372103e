//! Application-layer queries over layer definitions.

mod query;

pub use query::{LayerDetails, LayerQueryUseCase, LayerSummary};

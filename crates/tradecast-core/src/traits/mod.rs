//! Trait seams between the pipeline and its collaborators.

mod data_source;
mod indicator;
mod sink;

pub use data_source::DataSource;
pub use indicator::Indicator;
pub use sink::{Alerter, TradeLog};

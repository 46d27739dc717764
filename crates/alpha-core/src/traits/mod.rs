//! Collaborator traits consumed by the order pipeline.
//!
//! The pipeline core is single-threaded and synchronous; collaborators
//! are called inline and may fail, but never suspend.

mod alpha_model;
mod broker;
mod order_factory;
mod orders_filter;
mod resolver;
mod rolling;

pub use alpha_model::AlphaModel;
pub use broker::Broker;
pub use order_factory::OrderFactory;
pub use orders_filter::OrdersFilter;
pub use resolver::ContractResolver;
pub use rolling::RollingOrdersGenerator;

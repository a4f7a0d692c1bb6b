pub mod message;
pub mod metrics;

pub mod filter;
pub mod metrics;
pub mod record;

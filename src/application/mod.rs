pub mod client;
pub mod formatter;
pub mod price_lookup;
pub mod tracker_agent;

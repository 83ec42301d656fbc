pub mod binance;
pub mod core;
pub mod factory;
pub mod mock;

pub use factory::ServiceFactory;
pub use mock::MockMarketDataService;

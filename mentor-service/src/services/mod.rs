pub mod exchange_log;
pub mod providers;

pub use exchange_log::ExchangeLog;

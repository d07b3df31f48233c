//! Outbound HTTP adapters for the pipeline's ports.

mod fetcher;
mod telegram;

pub use fetcher::ReqwestFetcher;
pub use telegram::TelegramNotifier;

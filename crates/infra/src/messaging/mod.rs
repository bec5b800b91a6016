//! Owner messaging adapters

pub mod telegram;

pub use telegram::TelegramMessenger;

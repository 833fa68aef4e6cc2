//! Localization of user-facing failure messages
//!
//! Three fixed locales (Arabic, English, French); any other requested
//! locale resolves to English before lookup.

pub mod messages;

pub use messages::{localized_message, message_for};

//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for the terminal alert.

mod alert;

pub use alert::{Alert, AlertNotifier, AlertSlot};

//! Notification delivery with pluggable providers.
//!
//! The `NotificationProvider` trait is the seam between release processing
//! and the transport. `SlackProvider` posts block messages to an incoming
//! webhook and `DryRunProvider` only logs them.

mod dry_run_provider;
mod message;
mod provider;
mod slack_provider;

pub use dry_run_provider::DryRunProvider;
pub use message::{Accessory, Block, NotificationMessage, TextObject};
pub use provider::{NotificationProvider, NotificationResult};
pub use slack_provider::SlackProvider;

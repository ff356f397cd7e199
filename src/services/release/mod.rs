//! Release commit detection and release notes rendering.

mod announcement;
pub mod classifier;
pub mod formatter;

pub use announcement::AnnouncementTemplate;
pub use classifier::{ReleaseCommitData, classify};
pub use formatter::format_message;

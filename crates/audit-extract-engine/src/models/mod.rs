pub mod record;

pub use record::{FindingRecord, ManagementReply};

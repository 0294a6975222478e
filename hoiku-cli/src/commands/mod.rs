//! CLI command implementations.
//!
//! - `init`: create the database and load sample data
//! - `list`: filter, sort and print reservations
//! - `stats`: per-status, per-type and dashboard counts
//! - `show`: one reservation in detail
//! - `set-status`, `check-in`, `check-out`, `cancel`: single status changes
//! - `bulk-status`: status change over a filtered selection
//! - `facilities`: facility search
//! - `template`: Excel template export
//! - `decode-form`: deep-link payload decoding
//! - `completions`: shell completion scripts

pub mod bulk_status;
pub mod completions;
pub mod decode_form;
pub mod facilities;
pub mod init;
pub mod list;
pub mod set_status;
pub mod show;
pub mod stats;
pub mod template;

pub use bulk_status::BulkStatusCommand;
pub use completions::CompletionsCommand;
pub use decode_form::DecodeFormCommand;
pub use facilities::FacilitiesCommand;
pub use init::InitCommand;
pub use list::{FilterArgs, ListCommand};
pub use set_status::{CancelCommand, CheckInCommand, CheckOutCommand, SetStatusCommand};
pub use show::ShowCommand;
pub use stats::StatsCommand;
pub use template::TemplateCommand;

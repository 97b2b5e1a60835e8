// ABOUTME: Shared plumbing for the GeoLens command-line tools.
// ABOUTME: Argument groups, input loading, the GEO auditor, report rendering and tracing setup.

pub mod args;
pub mod audit;
pub mod facts;
pub mod format;
pub mod input;
pub mod report;
pub mod telemetry;

pub use crate::args::{LogArgs, NetworkArgs};
pub use crate::audit::{AuditMode, AuditReport, GeoAuditor};
pub use crate::input::{load_text, TextSource};

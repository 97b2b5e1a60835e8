// ABOUTME: Main library entry point for the GeoLens fetch layer.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Options, FetchError, Page and AgentFacts checks.

//! GeoLens fetch - blocking retrieval of pages and AgentFacts documents.
//!
//! # Example
//!
//! ```no_run
//! use geolens_fetch::{Client, FetchError};
//!
//! fn main() -> Result<(), FetchError> {
//!     let client = Client::builder().build()?;
//!     let text = client.fetch_text("https://example.com/article")?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

pub mod agentfacts;
pub mod client;
pub mod error;
pub mod extract;
pub mod options;
pub mod resource;

pub use crate::agentfacts::{well_known_url, AgentFactsCheck, WELL_KNOWN_PATH};
pub use crate::client::{Client, Page};
pub use crate::error::{ErrorCode, FetchError};
pub use crate::extract::{count_tags, main_text, visible_text};
pub use crate::options::{ClientBuilder, Options, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use crate::resource::{FetchOptions, FetchResult, MAX_CONTENT_LENGTH};

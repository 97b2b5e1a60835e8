// ABOUTME: Command-line argument groups shared by every GeoLens binary.
// ABOUTME: Network tunables fall back to GEOLENS_* environment variables.

use std::time::Duration;

use clap::Args;
use geolens_fetch::ClientBuilder;

/// Network options for binaries that fetch pages.
#[derive(Args, Debug, Clone, Default)]
pub struct NetworkArgs {
    /// Allow fetching from private/local networks
    #[arg(long, global = true, env = "GEOLENS_ALLOW_PRIVATE_NETWORKS")]
    pub allow_private_networks: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "GEOLENS_TIMEOUT_SECS", value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

impl NetworkArgs {
    /// A client builder honoring these options, using `default_timeout` when
    /// no timeout was given.
    pub fn client_builder(&self, default_timeout: Duration) -> ClientBuilder {
        let timeout = self
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(default_timeout);
        ClientBuilder::new()
            .timeout(timeout)
            .allow_private_networks(self.allow_private_networks)
    }
}

/// Logging options.
#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Emit logs on stderr as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

//! Service configuration.
//!
//! Settings come from command-line flags with environment-variable
//! fallbacks, so container deployments configure the service without a
//! wrapper script. The public base URL is validated up front: every link in
//! every response is resolved against it, and a bad base should fail the
//! boot, not the first request.

use clap::Parser;
use hypermedia::{LinkBase, LinkError};

/// Command-line and environment configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "backend", about = "Hypermedia storefront API")]
pub struct Config {
    /// Address to bind the HTTP listener on.
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind_address: String,

    /// Port to bind the HTTP listener on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Public base URL clients reach the service at; response links resolve
    /// against it.
    #[arg(long, env = "PUBLIC_BASE_URL", default_value = "http://localhost:8080")]
    pub public_base_url: String,
}

impl Config {
    /// Parse and validate the public base URL.
    ///
    /// # Errors
    /// Returns [`LinkError::InvalidBase`] when the configured URL cannot
    /// anchor links.
    pub fn link_base(&self) -> Result<LinkBase, LinkError> {
        LinkBase::parse(&self.public_base_url)
    }
}

//! Mist modules
//!
//! Declarative modules for managing Juniper Mist resources:
//! - site: lifecycle of sites within an organization
//! - site_group: lifecycle of site groups within an organization
//! - wlan: lifecycle of org-level and site-level WLANs
//! - wired: configuration push for wired switches in the org inventory
//!
//! Each invocation reconciles one desired-state document against the Mist
//! cloud and reports `{changed, resource, msg}` as JSON on stdout.

mod error;
mod params;
mod reconciler;
mod runner;
#[cfg(test)]
mod test_utils;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // stdout is the result channel for the calling runtime; all diagnostics
    // go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = runner::run(&args).await;
    std::process::exit(code);
}

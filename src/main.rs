use std::{io, net::Ipv4Addr, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use dns_resolver::{ConfigError, Resolution, Resolver, ResolverConfig};
use tracing::debug;

mod logging;
mod report;

#[derive(Parser)]
#[command(name = "iterdns")]
#[command(version)]
#[command(about = "Resolve a domain name by walking referrals down from a root server")]
struct Cli {
    /// Domain name to resolve
    domain: String,

    /// IPv4 address of the root server to start from
    root_server: Ipv4Addr,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seconds to wait for each server's reply
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Maximum number of servers to query
    #[arg(long)]
    max_hops: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn load_config(&self) -> Result<ResolverConfig, ConfigError> {
        let mut config = ResolverConfig::load(self.config.as_deref())?;

        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(max_hops) = self.max_hops {
            config.max_hops = max_hops;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(ExitCode::from(2));
        }
    };

    logging::init_logging(&config.log_level);
    debug!(?config, "configuration loaded");

    let mut resolver = Resolver::from_config(config);
    let mut out = io::stdout().lock();
    let mut report_error = None;

    let resolution = resolver.resolve_with(&cli.domain, cli.root_server, |hop| {
        if let Err(e) = report::write_hop(&mut out, &hop) {
            report_error.get_or_insert(e);
        }
    });
    if let Some(e) = report_error {
        return Err(e).context("failed to write report");
    }

    report::write_resolution(&mut out, &cli.domain, &resolution)
        .context("failed to write report")?;

    Ok(match resolution {
        Resolution::Answered(_) => ExitCode::SUCCESS,
        Resolution::NxDomain { .. } | Resolution::Failed(_) => ExitCode::FAILURE,
    })
}

use clap::Parser;
use std::net::Ipv4Addr;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use whois_dns_api::AppState;
use whois_dns_domain::CliOverrides;
use whois_dns_infrastructure::dns::CorrelationDnsHandler;
use whois_dns_infrastructure::system::detect_answer_address;
use whois_dns_jobs::{ExpirySweepJob, JobRunner};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "whois-dns")]
#[command(version = "0.1.0")]
#[command(about = "whois-dns - Show which DNS resolver a browser really uses")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP listen address (host:port or :port)
    #[arg(long, value_name = "ADDR")]
    http_listen: Option<String>,

    /// DNS listen address (host:port or :port)
    #[arg(long, value_name = "ADDR")]
    dns_listen: Option<String>,

    /// Also serve DNS over TCP
    #[arg(long)]
    dns_tcp: bool,

    /// IPv4 address returned in every A answer (detected from interfaces when unset)
    #[arg(long, value_name = "IPV4")]
    dns_a: Option<Ipv4Addr>,

    /// Maximum number of active correlation records
    #[arg(long)]
    max_active: Option<usize>,

    /// Seconds a record stays alive before it is swept
    #[arg(long)]
    expire_secs: Option<u64>,

    /// Seconds between expiry sweeps
    #[arg(long)]
    sweep_interval_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Shorthand for --log-level debug
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        http_listen: cli.http_listen,
        dns_listen: cli.dns_listen,
        dns_tcp: cli.dns_tcp,
        answer_address: cli.dns_a,
        max_active: cli.max_active,
        expire_secs: cli.expire_secs,
        sweep_interval_secs: cli.sweep_interval_secs,
        log_level: cli.log_level,
        verbose: cli.verbose,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting whois-dns v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config(&config);

    let answer_address = match config.dns.answer_address {
        Some(address) => address,
        None => {
            let address = detect_answer_address()?;
            info!(address = %address, "Detected answer address from local interfaces");
            address
        }
    };

    let http_addr = config.http_socket_addr()?;
    let dns_addr = config.dns_socket_addr()?;

    let stores = di::Stores::new(&config);
    let use_cases = di::UseCases::new(&stores, &config);

    let shutdown = CancellationToken::new();

    JobRunner::new()
        .with_expiry_sweep(
            ExpirySweepJob::new(use_cases.sweep_expired.clone())
                .with_interval(config.records.sweep_interval()),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let app_state = AppState {
        register_probe: use_cases.register_probe.clone(),
        consume_feedback: use_cases.consume_feedback.clone(),
    };

    let dns_handler = CorrelationDnsHandler::new(use_cases.observe_dns.clone(), answer_address);
    let dns_server = server::start_dns_server(dns_addr, dns_handler, config.server.dns_tcp);
    let web_server = server::start_web_server(http_addr, app_state);

    let result = tokio::select! {
        res = dns_server => {
            if let Err(e) = &res {
                error!(error = %e, "DNS server error");
            }
            res
        }
        res = web_server => {
            if let Err(e) = &res {
                error!(error = %e, "Web server error");
            }
            res
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
            Ok(())
        }
    };

    shutdown.cancel();
    info!("Server shutdown complete");
    result?;
    Ok(())
}

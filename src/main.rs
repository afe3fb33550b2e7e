//! RI coverage report CLI
//!
//! ```bash
//! # Report against the default region
//! ri-sim
//!
//! # Report against another region
//! ri-sim --region eu-west-1
//! ```
//!
//! Exits 0 on success; any fetch failure prints an error and exits 1 without
//! producing a report.

use clap::Parser;
use ri_simulator::{
    Simulator, create_ec2_client, display_order, fetch_instances, fetch_reserved_instances,
    render_report,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Reserved instance coverage simulator
#[derive(Parser)]
#[command(name = "ri-sim")]
#[command(about = "Report EC2 reserved instance coverage", long_about = None)]
struct Cli {
    /// AWS region (default: us-east-1)
    #[arg(long)]
    region: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ri_simulator=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let client = create_ec2_client(cli.region).await?;

    let instances = fetch_instances(&client).await?;
    let reservations = fetch_reserved_instances(&client).await?;
    debug!(
        "Reconciling {} instances against {} reservations",
        instances.len(),
        reservations.len()
    );

    let sim = Simulator {
        instances,
        reservations,
    };
    let mut result = sim.simulate();

    let order = display_order();
    order.sort(&mut result.matched);
    order.sort(&mut result.unmatched);

    let stdout = std::io::stdout();
    render_report(&mut stdout.lock(), &result)?;

    info!(
        "{} covered, {} on-demand, {} reservations unused",
        result.matched.len(),
        result.unmatched.len(),
        result.unused_reservations.len()
    );

    Ok(())
}

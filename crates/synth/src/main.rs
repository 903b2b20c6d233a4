use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use contracts::enums::DashboardKind;
use contracts::shared::{DateRange, TimeRange};
use synth::shared::config::{self, Config};
use synth::shared::context::GenContext;
use synth::shared::registry::{filters_from_pairs, parse_date, RawRequest, REGISTRY};

/// Prints synthetic dashboard datasets as JSON.
#[derive(Debug, Parser)]
#[command(name = "synth", version)]
struct Cli {
    /// Dashboard to generate: overview, analytics, sales, customers,
    /// customer-report, campaigns, support, revenue, growth, automation or
    /// performance
    dashboard: DashboardKind,

    /// Range token such as 7d, 30d, 6m or 24h
    #[arg(short, long)]
    time_range: Option<TimeRange>,

    /// Start of a custom range (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    from: Option<String>,

    /// End of a custom range (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    to: Option<String>,

    /// Filter value, repeatable: --filter status=Completed --filter status=Pending
    #[arg(short, long = "filter", value_name = "DIMENSION=VALUE")]
    filters: Vec<String>,

    /// Fixed RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Regenerate on an interval until Ctrl-C
    #[arg(short, long)]
    watch: bool,

    /// Seconds between refreshes in watch mode
    #[arg(long)]
    interval: Option<u64>,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    synth::system::tracing::initialize()?;

    let cli = Cli::parse();
    let config = config::load_config().context("failed to load config.toml")?;

    let request = build_request(&cli, &config)?;
    let seed = cli.seed.or(config.generation.seed);
    let pretty = config.output.pretty && !cli.compact;

    if cli.watch {
        let interval = cli.interval.unwrap_or(config.polling.interval_secs).max(1);
        tracing::info!(
            "Refreshing {} every {}s, Ctrl-C to stop",
            cli.dashboard,
            interval
        );
        watch(cli.dashboard, &request, seed, interval, pretty).await
    } else {
        emit(cli.dashboard, &request, &mut context(seed), pretty)
    }
}

fn build_request(cli: &Cli, config: &Config) -> anyhow::Result<RawRequest> {
    let from = cli.from.as_deref().map(parse_date).transpose()?;
    let to = cli.to.as_deref().map(parse_date).transpose()?;
    let has_dates = from.is_some() || to.is_some();

    let time_range = match cli.time_range {
        Some(range) => range,
        None if has_dates => TimeRange::Custom,
        None => config.generation.default_time_range,
    };
    if has_dates && time_range != TimeRange::Custom {
        tracing::warn!("--from/--to are ignored unless the time range is custom");
    }

    Ok(RawRequest {
        time_range,
        filters: filters_from_pairs(&cli.filters)?,
        date_range: DateRange(from, to),
    })
}

fn context(seed: Option<u64>) -> GenContext<rand::rngs::StdRng> {
    match seed {
        Some(seed) => GenContext::seeded(seed, chrono::Utc::now()),
        None => GenContext::from_entropy(),
    }
}

fn emit(
    kind: DashboardKind,
    request: &RawRequest,
    ctx: &mut GenContext<rand::rngs::StdRng>,
    pretty: bool,
) -> anyhow::Result<()> {
    let dataset = REGISTRY.assemble(kind, request, ctx)?;
    let json = if pretty {
        serde_json::to_string_pretty(&dataset)?
    } else {
        serde_json::to_string(&dataset)?
    };
    println!("{}", json);
    Ok(())
}

async fn watch(
    kind: DashboardKind,
    request: &RawRequest,
    seed: Option<u64>,
    interval_secs: u64,
    pretty: bool,
) -> anyhow::Result<()> {
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
    let mut refreshes: u64 = 0;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // Fixed seeds advance once per refresh.
                let mut ctx = context(seed.map(|s| s.wrapping_add(refreshes)));
                emit(kind, request, &mut ctx, pretty)?;
                refreshes += 1;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Stopped after {} refreshes", refreshes);
                return Ok(());
            }
        }
    }
}

//! ifprobe - one-shot network-interface metric probe.
//!
//! Lists available interface metrics or collects requested ones from the
//! procfs statistics table, printing a table or JSON. Performs exactly one
//! refresh-and-project pass per invocation; scheduling and shipping are
//! someone else's job.

use clap::Parser;
use tracing::{Level, debug, error};
use tracing_subscriber::EnvFilter;

use ifprobe_core::collector::{IfaceCollector, Metric, RealFs};
use ifprobe_core::config::CollectorConfig;
use ifprobe_core::namespace::Namespace;

/// One-shot network-interface metric probe.
#[derive(Parser)]
#[command(name = "ifprobe", about = "Probe per-interface network counters", version)]
struct Args {
    /// Metric namespaces to collect (e.g. "intel/procfs/iface/*/bytes_recv").
    /// With no namespaces given, lists the available metrics instead.
    namespaces: Vec<String>,

    /// Path to /proc filesystem (for testing/mocking).
    #[arg(long, default_value = "/proc")]
    proc_path: String,

    /// Output as JSON.
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is warnings only.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber with the appropriate log level.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("ifprobe={}", level).parse().unwrap())
        .add_directive(format!("ifprobe_core={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let config = CollectorConfig::with_proc_path(&args.proc_path);
    let mut collector = IfaceCollector::new(RealFs::new(), &config);
    debug!(proc_path = %args.proc_path, "collector ready");

    let result = if args.namespaces.is_empty() {
        list(&mut collector, args.json)
    } else {
        collect(&mut collector, &args.namespaces, args.json)
    };

    if let Err(e) = result {
        error!("{e}");
        eprintln!("ifprobe: {e}");
        std::process::exit(1);
    }
}

fn list(
    collector: &mut IfaceCollector<RealFs>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let namespaces = collector.list_metrics()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&namespaces)?);
    } else {
        for ns in &namespaces {
            println!("{ns}");
        }
    }
    Ok(())
}

fn collect(
    collector: &mut IfaceCollector<RealFs>,
    requested: &[String],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let namespaces: Vec<Namespace> = requested.iter().map(|s| Namespace::parse(s)).collect();
    let metrics = collector.collect_metrics(&namespaces)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        for metric in &metrics {
            println!("{}", format_metric(metric));
        }
    }
    Ok(())
}

fn format_metric(metric: &Metric) -> String {
    let value = metric
        .value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut line = format!(
        "{}\t{}\t{}",
        metric.timestamp.format("%Y-%m-%d %H:%M:%S"),
        metric.namespace,
        value
    );

    if !metric.tags.is_empty() {
        let tags: Vec<String> = metric
            .tags
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        line.push('\t');
        line.push_str(&tags.join(","));
    }
    line
}

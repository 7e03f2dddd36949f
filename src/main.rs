use clap::Parser;
use collectx::{CollectionSchema, CollectionService, CreateCollectionRequest, InMemoryService, MetricType};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Build a collection schema and dry-run its creation
#[derive(Parser, Debug)]
#[command(name = "collectx")]
#[command(about = "Build and check vector collection schemas", long_about = None)]
struct Args {
    /// Collection name
    name: String,

    /// Vector dimension
    #[arg(short, long)]
    dimension: usize,

    /// Segment file size in megabytes
    #[arg(long)]
    segment_file_size: Option<u64>,

    /// Metric type (L2, IP, HAMMING, JACCARD, TANIMOTO, SUBSTRUCTURE, SUPERSTRUCTURE)
    #[arg(short, long)]
    metric_type: Option<MetricType>,

    /// Reject empty names and zero sizes before submitting
    #[arg(long)]
    strict: bool,

    /// Print the create-collection payload as JSON
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut builder = CollectionSchema::builder(args.name, args.dimension);
    if let Some(size) = args.segment_file_size {
        builder.with_segment_file_size(size);
    }
    if let Some(metric) = args.metric_type {
        builder.with_metric_type(metric);
    }

    let schema = if args.strict {
        builder.try_build()?
    } else {
        builder.build()
    };
    info!("Built {}", schema);

    let service = InMemoryService::new();
    service.create_collection(&schema)?;
    info!("Dry run accepted collection {}", schema.name());

    if args.json {
        println!("{}", CreateCollectionRequest::from(&schema).to_json()?);
    } else {
        println!("{}", schema);
    }

    Ok(())
}

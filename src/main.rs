use anyhow::Result;
use bit_graph::areas::repository::Repository;
use bit_graph::artifacts::graph::dot_writer::EdgeMode;
use bit_graph::config::{Config, DEFAULT_CONFIG_PATH};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Output path that selects stdout
const STDOUT_OUTPUT: &str = "-";

#[derive(Parser)]
#[command(
    name = "bit-graph",
    version = "0.1.0",
    about = "Render the object graph of a git branch as Graphviz DOT",
    long_about = "Reads the loose objects reachable from a branch head of a local git repository \
    and writes the commit, tree and blob dependencies as a Graphviz DOT document. \
    The repository and branch are taken from a JSON config file.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short,
        long,
        default_value = DEFAULT_CONFIG_PATH,
        help = "Path to the JSON config file with repo_path and branch"
    )]
    config: PathBuf,
    #[arg(
        short,
        long,
        default_value = "graph.dot",
        help = "Where to write the DOT document ('-' for stdout)"
    )]
    output: PathBuf,
    #[arg(long, help = "Write the edges of a shared object only once")]
    unique_edges: bool,
    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = Config::load(&cli.config)?;
    tracing::debug!(repo = %config.repo_path().display(), branch = %config.branch(), "loaded config");

    let repository = Repository::new(config.repo_path(), Box::new(std::io::stdout()))?;
    let mode = if cli.unique_edges {
        EdgeMode::Unique
    } else {
        EdgeMode::PerPath
    };
    let output = (cli.output.as_os_str() != STDOUT_OUTPUT).then_some(cli.output.as_path());

    repository.graph(config.branch(), output, mode)?;

    Ok(())
}

use anyhow::Result;
use clap::Parser;
use gtg::areas::repository::Repository;
use gtg::artifacts::render::js_graph::parse_template;
use gtg::commands::graph::GraphOptions;
use gtg::{FilterMode, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gtg",
    version = "0.1.0",
    about = "A git history graph outputter",
    long_about = "gtg walks the first-parent history of every branch in a repository, \
    folds the chains into a single divergence tree, and renders the result as a \
    gitgraph.js visualization, an HTML page, or a plain-text tree dump.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
    after_help = r"support:
  - only first parent (see --first-parent in the git command)

not support:
  - merge commit

example:
  gtg -f full
  gtg -f alltags > graph.html
  gtg --format script -b refs/heads/master -b refs/heads/develop
  gtg --suppress-tag -v -f simple
",
)]
struct Cli {
    #[arg(
        short,
        long,
        value_enum,
        default_value = "simple",
        help = "Filter mode applied to the history tree"
    )]
    filter: FilterMode,

    #[arg(
        long,
        value_enum,
        default_value = "html",
        help = "Output format (html, script, tree)"
    )]
    format: OutputFormat,

    #[arg(
        short,
        long = "branch",
        help = "Branch processing order, repeatable (ex. -b refs/heads/master -b develop)"
    )]
    branches: Vec<String>,

    #[arg(long = "suppress-tag", help = "Do not emit tag statements")]
    suppress_tags: bool,

    #[arg(
        long,
        default_value = "metro",
        value_parser = parse_template,
        help = "gitgraph.js template name (metro, blackarrow)"
    )]
    template: String,

    #[arg(short, long, help = "Enable informational logging on stderr")]
    verbose: bool,

    #[arg(index = 1, help = "Directory to start repository discovery from")]
    path: Option<String>,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("GTG_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "gtg=info" } else { "gtg=warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let start_dir = match &cli.path {
        Some(path) => std::path::PathBuf::from(path),
        None => std::env::current_dir()?,
    };
    let repository = Repository::discover(&start_dir, Box::new(std::io::stdout()))?;

    repository.graph(&GraphOptions {
        filter: cli.filter,
        format: cli.format,
        branches: cli.branches.clone(),
        suppress_tags: cli.suppress_tags,
        template: cli.template.clone(),
    })
}

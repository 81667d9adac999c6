use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use pagewright::{Dispatcher, EngineOpts, JsonDirSource, Page, PageSource, SectionRegistry};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pagewright", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dispatch a page snapshot and print the render instructions as JSON.
    Dispatch(DispatchArgs),
    /// Print the anchor id of every section, one per line.
    Anchors(AnchorsArgs),
    /// List the page slugs stored in a JSON page directory.
    Slugs(SlugsArgs),
    /// Look a page up by slug and dispatch it.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct DispatchArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Engine options JSON.
    #[arg(long)]
    opts: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct AnchorsArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SlugsArgs {
    /// Directory of `<route>.json` page files.
    #[arg(long)]
    dir: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Directory of `<route>.json` page files.
    #[arg(long)]
    dir: PathBuf,

    /// Page slug; `/` and `home` both name the home page.
    #[arg(long, default_value = "/")]
    slug: String,

    /// Engine options JSON.
    #[arg(long)]
    opts: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pagewright=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Dispatch(args) => cmd_dispatch(args),
        Command::Anchors(args) => cmd_anchors(args),
        Command::Slugs(args) => cmd_slugs(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_page(path: &Path) -> anyhow::Result<Page> {
    let f = std::fs::File::open(path).with_context(|| format!("open page '{}'", path.display()))?;
    Page::from_reader(std::io::BufReader::new(f))
        .with_context(|| format!("read page '{}'", path.display()))
}

fn build_dispatcher(opts: Option<&Path>) -> anyhow::Result<Dispatcher> {
    let opts = match opts {
        Some(path) => EngineOpts::from_path(path)
            .with_context(|| format!("load engine options '{}'", path.display()))?,
        None => EngineOpts::default(),
    };
    Ok(Dispatcher::new(SectionRegistry::standard(), opts))
}

fn print_instructions(dispatcher: &Dispatcher, page: &Page) -> anyhow::Result<()> {
    let report = dispatcher.dispatch_report(&page.sections);
    if !report.dropped.is_empty() {
        eprintln!(
            "dropped {} section(s) with unregistered types",
            report.dropped.len()
        );
    }
    let json = serde_json::to_string_pretty(&report.instructions)
        .context("serialize render instructions")?;
    println!("{json}");
    Ok(())
}

fn cmd_dispatch(args: DispatchArgs) -> anyhow::Result<()> {
    let page = load_page(&args.in_path)?;
    let dispatcher = build_dispatcher(args.opts.as_deref())?;
    print_instructions(&dispatcher, &page)
}

fn cmd_anchors(args: AnchorsArgs) -> anyhow::Result<()> {
    let page = load_page(&args.in_path)?;
    for id in pagewright::allocate_anchors(&page.sections) {
        println!("{id}");
    }
    Ok(())
}

fn cmd_slugs(args: SlugsArgs) -> anyhow::Result<()> {
    let source = JsonDirSource::new(args.dir.clone());
    let slugs = source
        .slugs()
        .with_context(|| format!("list pages in '{}'", args.dir.display()))?;
    for slug in slugs {
        println!("{slug}");
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let source = JsonDirSource::new(args.dir.clone());
    let page = source
        .page(&args.slug)
        .with_context(|| format!("look up page '{}'", args.slug))?
        .with_context(|| format!("no page for slug '{}' in '{}'", args.slug, args.dir.display()))?;
    let dispatcher = build_dispatcher(args.opts.as_deref())?;
    print_instructions(&dispatcher, &page)
}

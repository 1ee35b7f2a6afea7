// ABOUTME: CLI for running the Hpoi user collection route and printing the resulting feed.
// ABOUTME: Fetches a live page or parses a saved HTML file, then renders RSS, Atom, or JSON.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use hobbyfeed_feed::{render, OutputFormat};
use hobbyfeed_hpoi::{category_table, Category, Client, ParseError, RouteParams, SITE_ROOT};
use tracing_subscriber::EnvFilter;

/// Build a feed from an Hpoi user's collection page.
#[derive(Parser, Debug)]
#[command(name = "hobbyfeed")]
#[command(about = "Turn an Hpoi user's collection into an RSS, Atom, or JSON feed", long_about = None)]
struct Args {
    /// Hpoi user id
    user_id: Option<String>,

    /// Category: want, preorder, buy, care, or resell
    category: Option<String>,

    /// Route path instead of USER_ID/CATEGORY, e.g. /hpoi/user/116297/buy
    #[arg(long)]
    route: Option<String>,

    /// Parse a saved collection page instead of fetching it
    #[arg(long)]
    html: Option<PathBuf>,

    /// Output format: rss, atom, or json
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Site root for request URLs and link resolution
    #[arg(long, default_value = SITE_ROOT)]
    site_root: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// User-Agent header to send
    #[arg(long)]
    user_agent: Option<String>,

    /// Print the category table and exit
    #[arg(long)]
    categories: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn route_params(args: &Args) -> Result<RouteParams> {
    match (&args.route, &args.user_id, &args.category) {
        (Some(route), None, None) => Ok(RouteParams::from_path(route)?),
        (None, Some(user_id), Some(category)) => {
            let category = category.parse::<Category>()?;
            Ok(RouteParams::new(user_id.clone(), category))
        }
        (Some(_), _, _) => bail!("--route cannot be combined with USER_ID or CATEGORY"),
        _ => bail!("USER_ID and CATEGORY are required unless --route is given"),
    }
}

async fn run(args: Args) -> Result<()> {
    if args.categories {
        print!("{}", category_table());
        return Ok(());
    }

    let params = route_params(&args)?;
    let format: OutputFormat = args.format.parse()?;

    let mut builder = Client::builder()
        .site_root(args.site_root.clone())
        .timeout(Duration::from_secs(args.timeout));
    if let Some(user_agent) = &args.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }
    let client = builder.build();

    let feed = match &args.html {
        Some(path) => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            client.feed_from_html(&html, &params.user_id, params.category)?
        }
        None => client.user_feed(&params.user_id, params.category).await?,
    };
    tracing::debug!(items = feed.items.len(), %format, "rendering feed");

    let output = render(&feed, format, !args.compact)?;
    match &args.output {
        Some(path) => fs::write(path, output + "\n")
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{}", output),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // ParseError already prints its source
            match err.downcast_ref::<ParseError>() {
                Some(parse_err) => eprintln!("error: {}", parse_err),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::from(1)
        }
    }
}

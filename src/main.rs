//! easyroute CLI
//!
//! Drives the navigation engine against an in-memory window so route tables
//! can be checked without a browser.
//!
//! ```text
//! easyroute --config router.toml resolve /users/42 /users/new
//! easyroute --config router.toml simulate --url /app/ push:/about back link:/users/5
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use serde_json::json;

use easyroute::config::{load_config, RouterSettings};
use easyroute::navigation::{NavigationOutcome, NavigationRequest, Router, Trigger};
use easyroute::observability::logging::init_logging;
use easyroute::outlet::{Document, RouterOutlet};
use easyroute::routing::{index_code, RouteInfo, RouteTable};
use easyroute::Window;

#[derive(Parser)]
#[command(name = "easyroute")]
#[command(about = "Resolve and simulate client-side navigation", long_about = None)]
struct Cli {
    /// Router configuration file (TOML)
    #[arg(short, long, default_value = "router.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match paths against the route table
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Mount a router and replay navigation steps
    Simulate {
        /// Starting address
        #[arg(short, long, default_value = "/")]
        url: String,

        /// push:<url>, name:<route>, link:<path>, back, forward
        steps: Vec<Step>,
    },
}

#[derive(Debug, Clone)]
enum Step {
    Push(String),
    Name(String),
    Link(String),
    Back,
    Forward,
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "back" => return Ok(Step::Back),
            "forward" => return Ok(Step::Forward),
            _ => {}
        }
        match s.split_once(':') {
            Some(("push", url)) => Ok(Step::Push(url.to_string())),
            Some(("name", name)) => Ok(Step::Name(name.to_string())),
            Some(("link", path)) => Ok(Step::Link(path.to_string())),
            _ => Err(format!(
                "unknown step '{s}': expected push:<url>, name:<route>, link:<path>, back or forward"
            )),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = load_config(&cli.config)?;
    init_logging(&settings.observability)?;

    tracing::info!(
        config = %cli.config.display(),
        routes = settings.routes.len(),
        "Configuration loaded"
    );

    match cli.command {
        Commands::Resolve { paths } => resolve(&settings, &paths)?,
        Commands::Simulate { url, steps } => simulate(settings, &url, &steps).await?,
    }

    Ok(())
}

fn resolve(settings: &RouterSettings, paths: &[String]) -> Result<(), serde_json::Error> {
    let table = RouteTable::from_config(&settings.routes);
    for path in paths {
        let info = RouteInfo::parse(path);
        let report = match table.resolve(&info) {
            Ok(matched) => json!({
                "path": path,
                "index": index_code(Some(matched.index)),
                "params": matched.params,
            }),
            Err(_) => json!({ "path": path, "index": index_code(None), "params": {} }),
        };
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}

async fn simulate(
    settings: RouterSettings,
    url: &str,
    steps: &[Step],
) -> Result<(), Box<dyn std::error::Error>> {
    let (window, mut triggers) = Window::open(url)?;
    let document = Document::new([settings.mount_target.clone()]);
    let router = Router::builder(settings).build(window)?;
    let outlet = RouterOutlet::create(router, &document)?;
    let router = outlet.router();

    drain(&outlet, &mut triggers).await?;
    for step in steps {
        tracing::debug!(?step, "Applying step");
        match step {
            Step::Push(url) => router.push(url),
            Step::Name(name) => router.push_by_name(name)?,
            Step::Link(path) => router
                .window()
                .dispatch(Trigger::LinkClicked(NavigationRequest::with_base(path.clone()))),
            Step::Back => router.window().back(),
            Step::Forward => router.window().forward(),
        }
        drain(&outlet, &mut triggers).await?;
    }

    tracing::info!(address = %router.window().href(), "Simulation finished");
    Ok(())
}

/// Handle queued triggers one at a time, printing every commit.
async fn drain(
    outlet: &RouterOutlet,
    triggers: &mut tokio::sync::mpsc::UnboundedReceiver<Trigger>,
) -> Result<(), serde_json::Error> {
    let router = outlet.router();
    while let Ok(trigger) = triggers.try_recv() {
        let outcome = router.handle(trigger).await;
        let NavigationOutcome::Committed { index, generation } = outcome else {
            continue;
        };
        let route = router.current_route();
        let report = json!({
            "generation": generation,
            "index": index_code(index),
            "view": outlet.view_for(index),
            "route": route.as_deref(),
            "address": router.window().href(),
        });
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

// 导入库模块
use pathviz::config::Config;
use pathviz::graph::demo::demo_graph;
use pathviz::services::session::{PlaybackSession, SessionOptions};

#[derive(Parser)]
#[clap(version = "0.1.0", author = "Pathviz Contributors")]
enum Cli {
    /// Replay a pathfinding run on the built-in demo graph
    Run {
        #[clap(short, long, default_value = "config.toml")]
        config: String,
        /// Override the configured strategy (bfs | dijkstra | astar)
        #[clap(short, long)]
        algorithm: Option<String>,
        /// Override the configured start node
        #[clap(long)]
        start: Option<String>,
        /// Override the configured end node
        #[clap(long)]
        end: Option<String>,
        /// Override the configured per-step interval in milliseconds
        #[clap(short, long)]
        speed: Option<u64>,
    },
    /// Print the built-in demo graph as JSON
    Graph,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli {
        Cli::Run {
            config,
            algorithm,
            start,
            end,
            speed,
        } => {
            let cfg = if Path::new(&config).exists() {
                Config::load(&config)?
            } else {
                Config::default()
            };
            // 句柄存活期间日志才会持续写出
            let _logger = flexi_logger::Logger::try_with_str(&cfg.log_level)?.start()?;

            let graph = Arc::new(demo_graph());
            let mut options = SessionOptions::new(
                start.unwrap_or_else(|| cfg.start_node.clone()),
                end.unwrap_or_else(|| cfg.end_node.clone()),
            );
            options.algorithm = match algorithm {
                Some(name) => name.parse()?,
                None => cfg.algorithm()?,
            };
            options.speed_ms = speed.unwrap_or(cfg.speed_ms);
            options.heuristic_scale = cfg.heuristic_scale;

            let session = PlaybackSession::new(graph, options)?;
            session.request_run().await?;

            for line in session.logs() {
                println!("{}", line);
            }
        }
        Cli::Graph => {
            let graph = demo_graph();
            println!("{}", serde_json::to_string_pretty(&graph)?);
        }
    }

    Ok(())
}

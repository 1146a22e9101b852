use std::path::PathBuf;

use alert_monitor::{
    drivers::{console, sim},
    launch, Config,
};
use clap::Parser;
use log::{error, info};
use tokio::time::{sleep, Duration};

/// Proximity and fall alert monitor on a simulated board
#[derive(Parser)]
struct MonitorArgs{
    /// TOML configuration file, board defaults when left out
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Stop after this many seconds instead of waiting for Ctrl-C
    #[arg(short, long)]
    run_for: Option<u64>,
    /// Seed of the simulated sensors
    #[arg(short, long)]
    seed: Option<u64>,
}

async fn run(args: MonitorArgs) -> alert_monitor::Result<()>{
    let config = match &args.config{
        Some(path) => {
            info!("Using config {}", path.display());
            Config::load(path)?
        }
        None => Config::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Simulated board seed {}", seed);

    let (board, frames) = sim::board(seed, &config);
    tokio::spawn(console::print_frames(frames));
    let monitor = launch(&config, board).await?;

    match args.run_for{
        Some(secs) => sleep(Duration::from_secs(secs)).await,
        None => {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received shutdown signal");
        }
    }
    monitor.shutdown().await;
    Ok(())
}

fn main(){
    pretty_env_logger::init();
    let args = MonitorArgs::parse();
    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build().expect("Could not build tokio runtime");
    if let Err(e) = runtime.block_on(run(args)){
        error!("{}", e);
        std::process::exit(1);
    }
}

use anyhow::Result;
use clap::Parser;
use tui_snake::app::App;
use tui_snake::game::GameConfig;

#[derive(Parser)]
#[command(name = "tui-snake")]
#[command(version, about = "Classic snake in the terminal")]
struct Cli {
    /// Side length of the square grid
    #[arg(long, default_value = "20")]
    size: usize,

    /// Milliseconds between simulation ticks
    #[arg(long, default_value = "300")]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        grid_size: cli.size,
        tick_interval_ms: cli.tick_ms,
    };

    let mut app = App::new(config);
    app.run().await
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use std::sync::Arc;

#[cfg(feature = "std")]
use broadside::{init_logging, server, Console, SessionStore};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Run the multi-session HTTP game server.
    Serve {
        #[arg(long, default_value = server::DEFAULT_BIND)]
        bind: String,
    },
    /// Play a two-player hot-seat game in this terminal.
    Local {
        #[arg(long, help = "Fix RNG seed for 'auto' placements (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind } => {
            let store = Arc::new(SessionStore::new());
            server::serve(&bind, store).await?;
        }
        Commands::Local { seed } => {
            let mut rng = if let Some(s) = seed {
                info!(seed = s, "using fixed seed");
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            tokio::task::spawn_blocking(move || {
                let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
                console.run(&mut rng).map(|_| ())
            })
            .await??;
        }
    }
    Ok(())
}

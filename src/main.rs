#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use tictactoe::{console, init_logging, GameEngine};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game at the terminal.
    Play {
        #[arg(long, help = "Start with the move list newest first")]
        descending: bool,
    },
    /// Apply a scripted command sequence and print the final position.
    Replay {
        #[arg(required = true, help = "Commands, e.g. a1 b2 'goto 1' sort")]
        commands: Vec<String>,
        #[arg(long, help = "Start with the move list newest first")]
        descending: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play { descending: false }) {
        Commands::Play { descending } => {
            let mut engine = GameEngine::new();
            if descending {
                engine.toggle_sort();
            }
            console::run(&mut engine)?;
        }
        Commands::Replay {
            commands,
            descending,
        } => {
            let mut engine = GameEngine::new();
            if descending {
                engine.toggle_sort();
            }
            console::replay(&mut engine, &commands);
        }
    }
    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use tictactoe::{init_logging, Console};

#[derive(Parser)]
#[command(author, version, about = "Two-player tic-tac-toe", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a game on the console, two players sharing the keyboard.
    Play {
        #[arg(long, help = "Name of the player using 'X' (prompted if omitted)")]
        name_x: Option<String>,
        #[arg(long, help = "Name of the player using 'O' (prompted if omitted)")]
        name_o: Option<String>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Play {
        name_x: None,
        name_o: None,
    });
    match command {
        Commands::Play { name_x, name_o } => {
            let (ask_x, ask_o) = (name_x.is_none(), name_o.is_none());
            let stdin = std::io::stdin();
            let mut console = Console::new(stdin.lock(), std::io::stdout()).with_names(name_x, name_o);
            console.ask_names(ask_x, ask_o)?;
            console.play()?;
        }
    }
    Ok(())
}

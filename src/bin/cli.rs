use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use chess_notation::{
    moves::Move,
    movetext,
    position::Position,
    replay::{GameReplay, replay},
};

#[derive(Parser, Debug)]
#[command(name = "chess-notation", author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a FEN record, print the board and the FEN written back
    Fen {
        fen: String,
        /// Show the board from black's side
        #[arg(short, long)]
        flip: bool,
    },
    /// Print the SAN tokens of a movetext, one per line
    Tokenize {
        /// Read from stdin when omitted
        movetext: Option<String>,
    },
    /// Resolve a SAN move to UCI
    Resolve {
        /// Starting position, standard start when omitted
        #[arg(long)]
        fen: Option<String>,
        san: String,
    },
    /// Play a movetext and print every ply
    Replay {
        /// Starting position, standard start when omitted
        #[arg(long)]
        fen: Option<String>,
        /// Read from stdin when omitted
        movetext: Option<String>,
        /// Print the JSON replay response instead
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .init();

    if let Err(e) = run(args.command) {
        log::error!("{e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Fen { fen, flip } => {
            let position = Position::from_fen(&fen)?;
            print!("{}", position.board.diagram(flip));
            println!("\n{position}");
        }
        Command::Tokenize { movetext } => {
            let text = movetext_or_stdin(movetext)?;
            for token in movetext::tokens(&text) {
                println!("{token}");
            }
        }
        Command::Resolve { fen, san } => {
            let position = start_position(fen.as_deref())?;
            let uci = Move::san(position.side, &san)?.resolve(&position)?;
            println!("{uci}");
        }
        Command::Replay {
            fen,
            movetext,
            json,
        } => {
            let text = movetext_or_stdin(movetext)?;

            if json {
                return print_json(fen, text);
            }

            let start = start_position(fen.as_deref())?;
            let game = replay(&start, &text)?;
            print_plies(&game);
        }
    }

    Ok(())
}

fn start_position(fen: Option<&str>) -> Result<Position> {
    match fen {
        Some(fen) => Position::from_fen(fen).context("invalid --fen"),
        None => Ok(Position::new()),
    }
}

fn movetext_or_stdin(movetext: Option<String>) -> Result<String> {
    match movetext {
        Some(text) => Ok(text),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read movetext from stdin")?;
            Ok(text)
        }
    }
}

fn print_plies(game: &GameReplay) {
    let fens = game.fens();

    for (ply, fen_after) in game.plies().iter().zip(fens.iter().skip(1)) {
        println!(
            "{}. {} {} {}",
            ply.position.fullmove_number, ply.san, ply.uci, fen_after
        );
    }
}

#[cfg(feature = "api")]
fn print_json(fen: Option<String>, movetext: String) -> Result<()> {
    use chess_notation::api::{ReplayRequest, replay_game};

    let response = replay_game(ReplayRequest {
        fen,
        movetext,
        time_control: None,
        elo: None,
    })?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

#[cfg(not(feature = "api"))]
fn print_json(_fen: Option<String>, _movetext: String) -> Result<()> {
    anyhow::bail!("--json needs a build with the `api` feature")
}

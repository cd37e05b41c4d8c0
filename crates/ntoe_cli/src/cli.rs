//! Command-line interface for ntoe.

use clap::{Args, Parser, Subcommand};
use ntoe::Player;
use std::path::PathBuf;

/// ntoe - best-slot advice for N x N tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "ntoe")]
#[command(about = "Weight empty slots and pick the best move on an N x N board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board shape and scoring options
    #[command(flatten)]
    pub board: BoardArgs,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand; they override the config file.
#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(long, global = true, default_value = "ntoe.toml")]
    pub config: PathBuf,

    /// Board size N
    #[arg(long, global = true)]
    pub size: Option<usize>,

    /// Marks in a row needed to win (defaults to the board size)
    #[arg(long, global = true)]
    pub win_length: Option<usize>,

    /// Weight of the opponent's lines relative to the player's own
    #[arg(long, global = true)]
    pub defensiveness: Option<f64>,

    /// Pick randomly among equally weighted slots (`--random-ties=false` turns it off)
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub random_ties: Option<bool>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the best slot for a player and the board after playing it
    Suggest {
        /// Board text: X, O, '.' or space per cell; other characters are ignored
        #[arg(short, long)]
        board: String,

        /// Player to move (X or O)
        #[arg(short, long)]
        player: Player,
    },

    /// Print the weight of every empty slot for a player
    Weights {
        /// Board text: X, O, '.' or space per cell; other characters are ignored
        #[arg(short, long)]
        board: String,

        /// Player to move (X or O)
        #[arg(short, long)]
        player: Player,
    },

    /// Let the computer play both sides until the game ends
    Selfplay {
        /// Starting position (empty board if omitted)
        #[arg(short, long)]
        board: Option<String>,

        /// Player to move first (overrides the config file)
        #[arg(long)]
        first: Option<Player>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_random_ties_flag_forms() {
        let unset = parse(&["ntoe", "selfplay"]);
        assert_eq!(unset.board.random_ties, None);

        let bare = parse(&["ntoe", "selfplay", "--random-ties"]);
        assert_eq!(bare.board.random_ties, Some(true));

        let off = parse(&["ntoe", "--random-ties=false", "selfplay"]);
        assert_eq!(off.board.random_ties, Some(false));
    }

    #[test]
    fn test_suggest_args() {
        let cli = parse(&["ntoe", "--size", "4", "suggest", "-b", "XX..", "-p", "O"]);
        assert_eq!(cli.board.size, Some(4));
        assert!(matches!(
            cli.command,
            Command::Suggest { ref board, player: Player::O } if board == "XX.."
        ));
    }
}

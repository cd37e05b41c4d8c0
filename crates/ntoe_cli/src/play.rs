//! Command implementations driving a [`Board`](ntoe::Board).

use crate::config::PlayConfig;
use anyhow::Result;
use ntoe::{Advice, Outcome, Player};
use std::io::Write;
use tracing::{info, instrument};

/// Prints the advised slot for `player` and the board after playing it.
#[instrument(skip(config, text, out))]
pub fn suggest(config: &PlayConfig, text: &str, player: Player, out: &mut impl Write) -> Result<Advice> {
    let mut board = config.parse_board(text)?;
    let advice = board.advise(player, &config.scoring()?)?;
    match advice {
        Advice::Play(slot) => {
            writeln!(out, "{} should play at {}.\n", player, slot)?;
            board.add_placement(slot, player)?;
            writeln!(out, "{}", board)?;
        }
        Advice::Finished(outcome) => writeln!(out, "{}", outcome)?,
    }
    Ok(advice)
}

/// Prints the weight grid for `player`.
#[instrument(skip(config, text, out))]
pub fn weights(config: &PlayConfig, text: &str, player: Player, out: &mut impl Write) -> Result<()> {
    let board = config.parse_board(text)?;
    let weights = board.slot_weights(player, &config.scoring()?);
    writeln!(out, "{}", weights)?;
    Ok(())
}

/// Plays the computer against itself until the game is decided.
#[instrument(skip(config, start, out))]
pub fn selfplay(
    config: &PlayConfig,
    start: Option<&str>,
    first: Option<Player>,
    out: &mut impl Write,
) -> Result<Outcome> {
    let mut board = match start {
        Some(text) => config.parse_board(text)?,
        None => config.empty_board()?,
    };
    let scoring = config.scoring()?;
    let mut player = first.unwrap_or(*config.first_player());

    writeln!(out, "{}\n", board)?;
    loop {
        match board.advise(player, &scoring)? {
            Advice::Play(slot) => {
                writeln!(out, "{} should play at {}.\n", player, slot)?;
                board.add_placement(slot, player)?;
                writeln!(out, "{}\n", board)?;
                player = player.opponent();
            }
            Advice::Finished(outcome) => {
                info!(%outcome, "Game finished");
                writeln!(out, "{}", outcome)?;
                return Ok(outcome);
            }
        }
    }
}

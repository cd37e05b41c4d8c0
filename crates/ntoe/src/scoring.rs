//! Slot weighting and best-slot selection.
//!
//! Every line through an empty slot that the player can still complete adds
//! `LINE_BASE ^ (player's marks on the line)` to the slot. A line holding an
//! opposing mark adds nothing. Slots that extend several promising lines at
//! once therefore outweigh slots on a single line, and nearly complete lines
//! dominate everything else.
//!
//! The final weight blends the player's own line weight with the
//! opponent's, scaled by [`Scoring::defensiveness`], so that breaking an
//! opponent's line counts as well as building one.

use super::board::{write_grid, Board};
use super::error::BoardError;
use super::rules::Outcome;
use super::{Cell, Player, Slot};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Numeric desirability of a slot.
pub type Weight = f64;

/// Growth factor per mark already on a line.
pub const LINE_BASE: Weight = 5.0;

/// Default weight of the opponent's lines relative to the player's own.
pub const DEFAULT_DEFENSIVENESS: f64 = 5.0;

/// How to choose among slots sharing the maximum weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// The first maximal slot in row-major order.
    #[default]
    FirstInScanOrder,
    /// A uniformly random maximal slot.
    #[cfg(feature = "random_ties")]
    Random,
}

/// Parameters for turning line weights into a move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scoring {
    defensiveness: f64,
    tie_break: TieBreak,
}

impl Scoring {
    /// Creates scoring parameters.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDefensiveness`] if `defensiveness` is
    /// negative, infinite or NaN.
    #[instrument]
    pub fn new(defensiveness: f64, tie_break: TieBreak) -> Result<Self, BoardError> {
        if !defensiveness.is_finite() || defensiveness < 0.0 {
            return Err(BoardError::InvalidDefensiveness {
                value: defensiveness,
            });
        }
        Ok(Self {
            defensiveness,
            tie_break,
        })
    }

    /// Scoring that ignores the opponent's lines entirely.
    pub fn offensive() -> Self {
        Self {
            defensiveness: 0.0,
            tie_break: TieBreak::default(),
        }
    }

    /// Returns a copy using the given tie-break rule.
    pub fn with_tie_break(self, tie_break: TieBreak) -> Self {
        Self { tie_break, ..self }
    }

    /// Multiplier applied to the opponent's line weight.
    pub fn defensiveness(&self) -> f64 {
        self.defensiveness
    }

    /// Tie-break rule.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            defensiveness: DEFAULT_DEFENSIVENESS,
            tie_break: TieBreak::default(),
        }
    }
}

/// Weight of every empty slot on a board; occupied slots carry none.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotWeights {
    size: usize,
    weights: Vec<Option<Weight>>,
}

impl SlotWeights {
    /// Returns the weight of `slot`, or `None` if it is occupied or off the board.
    pub fn get(&self, slot: impl Into<Slot>) -> Option<Weight> {
        let slot = slot.into();
        if slot.row() >= self.size || slot.col() >= self.size {
            return None;
        }
        self.weights[slot.index(self.size)]
    }

    /// Iterates over `(slot, weight)` for empty slots in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Weight)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter_map(|(i, w)| w.map(|w| (Slot::from_index(i, self.size), w)))
    }

    /// Returns the highest weight, if any slot is empty.
    pub fn max(&self) -> Option<Weight> {
        self.iter().map(|(_, w)| w).reduce(Weight::max)
    }

    /// Returns the first slot in row-major order carrying the highest weight.
    pub fn best(&self) -> Option<Slot> {
        self.iter()
            .fold(None, |best: Option<(Slot, Weight)>, (slot, w)| match best {
                Some((_, top)) if top >= w => best,
                _ => Some((slot, w)),
            })
            .map(|(slot, _)| slot)
    }

    /// Returns every slot carrying the highest weight, in row-major order.
    pub fn best_ties(&self) -> Vec<Slot> {
        match self.max() {
            Some(top) => self
                .iter()
                .filter(|&(_, w)| w == top)
                .map(|(slot, _)| slot)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Picks uniformly among the slots carrying the highest weight.
    #[cfg(feature = "random_ties")]
    pub fn choose_best<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Option<Slot> {
        use rand::seq::SliceRandom;
        self.best_ties().choose(rng).copied()
    }

    /// Combines `own + factor * other`, slot by slot.
    fn blend(own: SlotWeights, other: &SlotWeights, factor: f64) -> SlotWeights {
        let weights = own
            .weights
            .iter()
            .zip(&other.weights)
            .map(|(a, b)| a.zip(*b).map(|(a, b)| a + factor * b))
            .collect();
        SlotWeights {
            size: own.size,
            weights,
        }
    }
}

impl std::fmt::Display for SlotWeights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self.weights.iter().map(|w| match w {
            Some(w) => w.to_string(),
            None => "-".to_string(),
        });
        write_grid(f, self.size, cells)
    }
}

/// Recommendation for the player about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Advice {
    /// Place a mark at this slot.
    Play(Slot),
    /// The game is over; there is nothing worth playing.
    Finished(Outcome),
}

impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advice::Play(slot) => write!(f, "Play at {}", slot),
            Advice::Finished(outcome) => write!(f, "Game over: {}", outcome),
        }
    }
}

impl Board {
    /// Computes the purely offensive weight of each empty slot for `player`.
    #[instrument(skip(self))]
    pub fn line_weights(&self, player: Player) -> SlotWeights {
        let blocker = Cell::Occupied(player.opponent());
        let own = Cell::Occupied(player);

        // Contribution of each line, or None once the opponent has a mark on it.
        let contributions: Vec<Option<Weight>> = self
            .lines()
            .iter()
            .map(|line| {
                let mut marks = 0;
                for &slot in line.slots() {
                    match self.cell_at(slot) {
                        cell if cell == blocker => return None,
                        cell if cell == own => marks += 1,
                        _ => {}
                    }
                }
                Some(LINE_BASE.powi(marks))
            })
            .collect();

        let weights: Vec<Option<Weight>> = self
            .cells()
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                cell.is_empty().then(|| {
                    self.line_indices_at(i)
                        .iter()
                        .filter_map(|&l| contributions[l])
                        .sum::<Weight>()
                })
            })
            .collect();

        let weights = SlotWeights {
            size: self.size(),
            weights,
        };
        trace!(%player, "Line weights\n{}", weights);
        weights
    }

    /// Computes the weight of each empty slot for `player`, blending in the
    /// opponent's line weights by the scoring's defensiveness.
    #[instrument(skip(self, scoring), fields(defensiveness = scoring.defensiveness()))]
    pub fn slot_weights(&self, player: Player, scoring: &Scoring) -> SlotWeights {
        let own = self.line_weights(player);
        let theirs = self.line_weights(player.opponent());
        let weights = SlotWeights::blend(own, &theirs, scoring.defensiveness());
        debug!(%player, "Slot weights\n{}", weights);
        weights
    }

    /// Returns the best slot for `player` under default scoring.
    ///
    /// Depends only on the current grid: repeated calls without mutation
    /// return the same slot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoEmptySlot`] if the board is full.
    pub fn best_slot(&self, player: Player) -> Result<Slot, BoardError> {
        self.best_slot_with(player, &Scoring::default())
    }

    /// Returns the best slot for `player` under the given scoring.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoEmptySlot`] if the board is full.
    #[instrument(skip(self, scoring))]
    pub fn best_slot_with(&self, player: Player, scoring: &Scoring) -> Result<Slot, BoardError> {
        let weights = self.slot_weights(player, scoring);
        let best = match scoring.tie_break() {
            TieBreak::FirstInScanOrder => weights.best(),
            #[cfg(feature = "random_ties")]
            TieBreak::Random => weights.choose_best(&mut rand::thread_rng()),
        };
        let slot = best.ok_or(BoardError::NoEmptySlot)?;
        debug!(%player, %slot, weight = weights.get(slot), "Selected slot");
        Ok(slot)
    }

    /// Returns a slot chosen uniformly among the best for `player`, using `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoEmptySlot`] if the board is full.
    #[cfg(feature = "random_ties")]
    #[instrument(skip(self, scoring, rng))]
    pub fn best_slot_with_rng<R: rand::Rng + ?Sized>(
        &self,
        player: Player,
        scoring: &Scoring,
        rng: &mut R,
    ) -> Result<Slot, BoardError> {
        let weights = self.slot_weights(player, scoring);
        let slot = weights.choose_best(rng).ok_or(BoardError::NoEmptySlot)?;
        debug!(%player, %slot, weight = weights.get(slot), "Selected slot");
        Ok(slot)
    }

    /// Reports whether the game is over from `player`'s point of view and,
    /// if not, where `player` should play.
    ///
    /// A win for `player` is reported before a win for the opponent, then a
    /// draw once neither side can complete a line.
    #[instrument(skip(self, scoring))]
    pub fn advise(&self, player: Player, scoring: &Scoring) -> Result<Advice, BoardError> {
        for candidate in [player, player.opponent()] {
            if self.has_won(candidate) {
                return Ok(Advice::Finished(Outcome::Won(candidate)));
            }
        }
        if super::rules::is_dead(self) {
            return Ok(Advice::Finished(Outcome::Draw));
        }
        self.best_slot_with(player, scoring).map(Advice::Play)
    }
}

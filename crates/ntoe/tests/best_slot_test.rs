//! Tests for slot weighting and move selection.

use ntoe::{Advice, Board, BoardError, Outcome, Player, Scoring, Slot, TieBreak};

#[test]
fn test_completes_own_line() {
    let mut board = Board::new(3).unwrap();
    board.add_placement((0, 0), Player::X).unwrap();
    board.add_placement((0, 1), Player::X).unwrap();
    assert_eq!(board.best_slot(Player::X), Ok(Slot::new(0, 2)));
}

#[test]
fn test_blocks_opponent_line() {
    let board = Board::parse(3, 3, "XX.|...|...").unwrap();
    assert_eq!(board.best_slot(Player::O), Ok(Slot::new(0, 2)));
}

#[test]
fn test_empty_board_picks_center_deterministically() {
    let board = Board::new(3).unwrap();
    for _ in 0..5 {
        assert_eq!(board.best_slot(Player::X), Ok(Slot::new(1, 1)));
    }
}

#[test]
fn test_full_board_has_no_slot() {
    let board = Board::parse(3, 3, "XOX|XOO|OXX").unwrap();
    assert_eq!(board.best_slot(Player::X), Err(BoardError::NoEmptySlot));
    assert_eq!(board.best_slot(Player::O), Err(BoardError::NoEmptySlot));
}

#[test]
fn test_best_slot_is_pure() {
    let board = Board::parse(5, 4, "X....|.O...|..X..|.....|....O").unwrap();
    let first = board.best_slot(Player::O).unwrap();
    let second = board.best_slot(Player::O).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_never_returns_occupied_slot() {
    let positions = [
        "XO.|.X.|O..",
        "XXO|OO.|X..",
        "X.X|.O.|O.X",
        "........|...XO...|...OX...|........|........|........|........|.......X",
    ];
    for text in positions {
        let size = if text.len() > 20 { 8 } else { 3 };
        let board = Board::parse(size, size.min(5), text).unwrap();
        for player in [Player::X, Player::O] {
            let slot = board.best_slot(player).unwrap();
            assert!(board.get(slot).unwrap().is_empty(), "{text}: {slot}");
        }
    }
}

#[test]
fn test_reuse_board_across_positions() {
    let mut board = Board::new(3).unwrap();
    board.set_board_str("XX.|...|...").unwrap();
    assert_eq!(board.best_slot(Player::X), Ok(Slot::new(0, 2)));
    board.set_board_str("...|...|.OO").unwrap();
    assert_eq!(board.best_slot(Player::O), Ok(Slot::new(2, 0)));
}

#[test]
fn test_default_scoring_blocks_before_winning() {
    // X can win at (0, 2) but O threatens row 1.
    let board = Board::parse(3, 3, "XX.|OO.|...").unwrap();
    assert_eq!(board.best_slot(Player::X), Ok(Slot::new(1, 2)));
    assert_eq!(
        board.best_slot_with(Player::X, &Scoring::offensive()),
        Ok(Slot::new(0, 2))
    );
}

#[test]
fn test_win_length_shorter_than_board() {
    // Three in a row wins on a 5x5 board; X has two adjacent in the middle row.
    let board = Board::parse(5, 3, ".....|.....|.XX..|.....|.....").unwrap();
    let slot = board.best_slot(Player::X).unwrap();
    assert!(slot == Slot::new(2, 0) || slot == Slot::new(2, 3), "{slot}");
}

#[test]
fn test_advise_reports_winner() {
    let board = Board::parse(3, 3, "OOO|XX.|X..").unwrap();
    let scoring = Scoring::default();
    assert_eq!(
        board.advise(Player::X, &scoring),
        Ok(Advice::Finished(Outcome::Won(Player::O)))
    );
    assert_eq!(
        board.advise(Player::O, &scoring),
        Ok(Advice::Finished(Outcome::Won(Player::O)))
    );
}

#[test]
fn test_advise_reports_own_win_first() {
    let board = Board::parse(3, 3, "XXX|OOO|...").unwrap();
    let scoring = Scoring::default();
    assert_eq!(
        board.advise(Player::O, &scoring),
        Ok(Advice::Finished(Outcome::Won(Player::O)))
    );
}

#[test]
fn test_advise_reports_dead_position_as_draw() {
    let board = Board::parse(3, 3, "XOX|XOO|OX.").unwrap();
    assert_eq!(
        board.advise(Player::X, &Scoring::default()),
        Ok(Advice::Finished(Outcome::Draw))
    );
}

#[test]
fn test_advise_plays_when_open() {
    let board = Board::new(3).unwrap();
    assert_eq!(
        board.advise(Player::X, &Scoring::default()),
        Ok(Advice::Play(Slot::new(1, 1)))
    );
}

#[test]
fn test_self_play_terminates() {
    let mut board = Board::with_win_length(5, 4).unwrap();
    let scoring = Scoring::default().with_tie_break(TieBreak::FirstInScanOrder);
    let mut player = Player::O;
    let mut moves = 0;
    loop {
        match board.advise(player, &scoring).unwrap() {
            Advice::Play(slot) => {
                assert!(board.get(slot).unwrap().is_empty());
                board.add_placement(slot, player).unwrap();
                player = player.opponent();
                moves += 1;
            }
            Advice::Finished(outcome) => {
                assert_ne!(outcome, Outcome::InProgress);
                break;
            }
        }
        assert!(moves <= 25);
    }
}

#[cfg(feature = "random_ties")]
mod random_ties {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_random_tie_break_stays_among_best() {
        let board = Board::new(4).unwrap();
        let weights = board.slot_weights(Player::X, &Scoring::default());
        let ties: HashSet<Slot> = weights.best_ties().into_iter().collect();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..64 {
            let slot = board
                .best_slot_with_rng(Player::X, &Scoring::default(), &mut rng)
                .unwrap();
            assert!(ties.contains(&slot));
            seen.insert(slot);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_random_tie_break_keeps_unique_best() {
        let board = Board::parse(3, 3, "XX.|...|...").unwrap();
        let scoring = Scoring::default().with_tie_break(TieBreak::Random);
        for _ in 0..10 {
            assert_eq!(board.best_slot_with(Player::X, &scoring), Ok(Slot::new(0, 2)));
        }
    }

    #[test]
    fn test_random_on_full_board() {
        let board = Board::parse(2, 2, "XO|OX").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            board.best_slot_with_rng(Player::X, &Scoring::default(), &mut rng),
            Err(BoardError::NoEmptySlot)
        );
    }
}

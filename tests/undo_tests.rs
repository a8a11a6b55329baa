//! Single-level undo: exact restoration and its limits.

use yut_engine::board::{BranchChoice, NodeId, Position};
use yut_engine::core::{ActionKind, BonusMode, EngineError, PieceId, TeamId, ThrowResult};
use yut_engine::engine::{new_game, YutGame};
use yut_engine::turn::TurnPhase;

fn pass(game: &mut YutGame) {
    game.record_throw(ThrowResult::Miss).unwrap();
    game.advance_turn().unwrap();
}

/// Everything undo promises to restore.
fn restorable(game: &YutGame) -> impl PartialEq + std::fmt::Debug {
    (
        game.pieces().clone(),
        game.pending().clone(),
        game.bonus(),
        game.phase(),
        game.selected(),
        game.standings().to_vec(),
    )
}

#[test]
fn test_undo_restores_move_exactly() {
    let mut game = new_game(2, 2, BonusMode::Basic).unwrap();
    game.record_throw(ThrowResult::Yut).unwrap();
    game.record_throw(ThrowResult::Do).unwrap();
    game.select_piece(PieceId(1)).unwrap();
    let before = restorable(&game);

    game.apply_move(None).unwrap();
    assert!(game.can_undo());
    game.undo().unwrap();

    assert_eq!(restorable(&game), before);
    assert!(!game.can_undo());
    assert!(matches!(game.log().last().map(|r| &r.kind), Some(ActionKind::Undo)));
}

#[test]
fn test_second_undo_is_rejected() {
    let mut game = new_game(2, 2, BonusMode::Basic).unwrap();
    game.record_throw(ThrowResult::Gae).unwrap();
    game.select_piece(PieceId(0)).unwrap();
    game.apply_move(None).unwrap();
    game.undo().unwrap();
    let after_first = game.clone();

    assert_eq!(game.undo(), Err(EngineError::NothingToUndo));
    assert_eq!(game, after_first);
}

#[test]
fn test_undo_restores_captured_piece() {
    let mut game = new_game(2, 2, BonusMode::Basic).unwrap();
    game.record_throw(ThrowResult::Gae).unwrap();
    game.select_piece(PieceId(0)).unwrap();
    game.apply_move(None).unwrap();
    game.advance_turn().unwrap();

    game.record_throw(ThrowResult::Gae).unwrap();
    game.select_piece(PieceId(2)).unwrap();
    let before = restorable(&game);
    game.apply_move(None).unwrap();
    assert_eq!(game.piece(PieceId(0)).unwrap().position(), Position::Waiting);
    assert_eq!(game.phase(), TurnPhase::AwaitingThrowInput);

    game.undo().unwrap();

    assert_eq!(restorable(&game), before);
    let victim = game.piece(PieceId(0)).unwrap();
    assert_eq!(victim.position(), Position::OnTrack(NodeId::new(2)));
    assert_eq!(victim.history().len(), 1);
    assert_eq!(game.bonus().throws_remaining, 0);
}

#[test]
fn test_undo_clears_standings_entry() {
    let mut game = new_game(2, 1, BonusMode::Basic).unwrap();
    game.record_throw(ThrowResult::Mo).unwrap();
    game.select_piece(PieceId(0)).unwrap();
    game.apply_move(None).unwrap();
    game.record_throw(ThrowResult::Geol).unwrap();
    game.apply_move(Some(BranchChoice::Shortcut)).unwrap();
    game.advance_turn().unwrap();
    pass(&mut game);

    game.record_throw(ThrowResult::Geol).unwrap();
    game.select_piece(PieceId(0)).unwrap();
    game.apply_move(Some(BranchChoice::Shortcut)).unwrap();
    assert_eq!(game.standings(), &[TeamId::new(0)]);

    game.undo().unwrap();

    assert!(game.standings().is_empty());
    assert_eq!(game.phase(), TurnPhase::MoveReady);
    assert_eq!(
        game.piece(PieceId(0)).unwrap().position(),
        Position::OnTrack(NodeId::CENTER)
    );
}

#[test]
fn test_undo_during_branch_choice() {
    let mut game = new_game(2, 2, BonusMode::Basic).unwrap();
    game.record_throw(ThrowResult::Mo).unwrap();
    game.record_throw(ThrowResult::Do).unwrap();
    game.select_piece(PieceId(0)).unwrap();
    let before = restorable(&game);

    game.apply_move(None).unwrap();
    assert!(game.apply_move(None).unwrap().needs_branch_choice());

    game.undo().unwrap();

    assert_eq!(restorable(&game), before);
    assert_eq!(game.phase(), TurnPhase::MoveReady);
    assert!(game.branch_prompt().is_none());
}

#[test]
fn test_undo_unavailable_after_new_throw() {
    let mut game = new_game(2, 2, BonusMode::Basic).unwrap();
    game.record_throw(ThrowResult::Mo).unwrap();
    game.select_piece(PieceId(0)).unwrap();
    game.apply_move(None).unwrap();
    assert!(game.can_undo());

    game.record_throw(ThrowResult::Do).unwrap();

    assert!(!game.can_undo());
    assert_eq!(game.undo(), Err(EngineError::NothingToUndo));
}

#[test]
fn test_undo_unavailable_after_advance() {
    let mut game = new_game(2, 2, BonusMode::Basic).unwrap();
    game.record_throw(ThrowResult::Do).unwrap();
    game.select_piece(PieceId(0)).unwrap();
    game.apply_move(None).unwrap();
    game.advance_turn().unwrap();

    assert_eq!(game.undo(), Err(EngineError::NothingToUndo));
    assert_eq!(game.current_team(), TeamId::new(1));
}

#[test]
fn test_undo_forfeit_requeues_back_do() {
    let mut game = new_game(2, 2, BonusMode::Basic).unwrap();
    game.record_throw(ThrowResult::BackDo).unwrap();
    game.apply_move(None).unwrap();

    game.undo().unwrap();

    assert_eq!(game.pending().results(), vec![ThrowResult::BackDo]);
    assert_eq!(game.phase(), TurnPhase::MoveReady);
}

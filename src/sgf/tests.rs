//! Record projection tests.

use super::{Loc, Move, Player, Record, RecordError};
use proptest::prelude::*;

#[test]
fn test_empty_input_is_invalid() {
    let record = Record::from_sgf("");
    assert!(!record.is_valid());
    assert_eq!(record.x_size(), 0);
    assert_eq!(record.y_size(), 0);
    assert_eq!(record.move_count(), 0);
    assert_eq!(record.last_move_index(), None);
}

#[test]
fn test_garbage_input_is_invalid() {
    let record = Record::from_sgf("not an sgf");
    assert!(!record.is_valid());
    assert_eq!(record.x_size(), 0);
    assert_eq!(record.y_size(), 0);
    assert_eq!(record.move_count(), 0);
}

#[test]
fn test_single_move_on_19x19() {
    let record = Record::from_sgf("(;GM[1]FF[4]SZ[19];B[dd])");
    assert!(record.is_valid());
    assert_eq!(record.x_size(), 19);
    assert_eq!(record.y_size(), 19);
    assert_eq!(record.move_count(), 1);

    let mv = record.move_at(0);
    assert_eq!(mv, Move::new(Loc::Point { x: 3, y: 3 }, Player::Black));
    assert!(!mv.is_pass());
}

#[test]
fn test_missing_size_defaults_to_19() {
    let record = Record::from_sgf("(;FF[4];B[aa];W[bb])");
    assert!(record.is_valid());
    assert_eq!(record.x_size(), 19);
    assert_eq!(record.y_size(), 19);
    assert_eq!(record.move_count(), 2);
}

#[test]
fn test_rectangular_board() {
    let record = Record::from_sgf("(;GM[1]FF[4]SZ[9:13];B[ab])");
    assert!(record.is_valid());
    assert_eq!(record.x_size(), 9);
    assert_eq!(record.y_size(), 13);
    assert_eq!(
        record.move_at(0),
        Move::new(Loc::Point { x: 0, y: 1 }, Player::Black)
    );
}

#[test]
fn test_pass_is_distinct_from_origin() {
    let record = Record::from_sgf("(;GM[1]FF[4]SZ[19];B[];W[aa])");
    assert!(record.is_valid());
    assert_eq!(record.move_count(), 2);

    let pass = record.move_at(0);
    assert!(pass.is_pass());
    assert_eq!(pass.loc.point(), None);
    assert_eq!(pass.player, Player::Black);

    let origin = record.move_at(1);
    assert!(!origin.is_pass());
    assert_eq!(origin.loc, Loc::Point { x: 0, y: 0 });
    assert_ne!(pass.loc, origin.loc);
}

#[test]
fn test_tt_form_counts_as_pass() {
    let record = Record::from_sgf("(;GM[1]FF[4]SZ[19];B[tt])");
    assert!(record.is_valid());
    assert_eq!(record.move_count(), 1);
    assert!(record.move_at(0).is_pass());
}

#[test]
fn test_out_of_range_index_returns_sentinel() {
    let valid = Record::from_sgf("(;GM[1]FF[4]SZ[19];B[dd])");
    assert_eq!(valid.move_at(1), Move::SENTINEL);
    assert_eq!(valid.move_at(usize::MAX), Move::SENTINEL);
    assert_eq!(valid.get_move(1), None);

    let invalid = Record::from_sgf("junk");
    assert_eq!(invalid.move_at(0), Move::SENTINEL);
    assert_eq!(invalid.get_move(0), None);
}

#[test]
fn test_main_variation_only() {
    let record = Record::from_sgf("(;GM[1]FF[4]SZ[9];B[aa](;W[bb];B[cc])(;W[dd]))");
    assert!(record.is_valid());
    assert_eq!(record.move_count(), 3);
    assert_eq!(
        record.move_at(1),
        Move::new(Loc::Point { x: 1, y: 1 }, Player::White)
    );
    assert_eq!(
        record.move_at(2),
        Move::new(Loc::Point { x: 2, y: 2 }, Player::Black)
    );
}

#[test]
fn test_first_tree_of_collection_is_projected() {
    let record = Record::from_sgf("(;GM[1]FF[4]SZ[9];B[aa])(;GM[1]FF[4]SZ[13];B[bb];W[cc])");
    assert!(record.is_valid());
    assert_eq!(record.x_size(), 9);
    assert_eq!(record.move_count(), 1);
}

#[test]
fn test_setup_placements_are_not_moves() {
    let record = Record::from_sgf("(;GM[1]FF[4]SZ[9]AB[aa][bb];W[cc])");
    assert!(record.is_valid());
    assert_eq!(record.move_count(), 1);
    assert_eq!(record.move_at(0).player, Player::White);
}

#[test]
fn test_checked_accessors_agree() {
    let record = Record::from_sgf("(;GM[1]FF[4]SZ[19];B[dd];W[pp];B[])");
    assert_eq!(record.move_count(), 3);
    assert_eq!(record.last_move_index(), Some(2));
    assert!(record.is_valid_index(2));
    assert!(!record.is_valid_index(3));

    for index in 0..record.move_count() {
        assert_eq!(record.get_move(index), Some(record.move_at(index)));
    }
    assert_eq!(record.get_move(3), None);
}

#[test]
fn test_try_from_sgf_reports_cause() {
    assert!(matches!(
        Record::try_from_sgf("not an sgf"),
        Err(RecordError::Parse(_))
    ));
    let record = Record::try_from_sgf("(;GM[1]FF[4]SZ[19];B[dd])").unwrap();
    assert!(record.is_valid());
}

proptest! {
    /// Building a record from generated main-line moves projects every move
    /// back with the same coordinates and alternation.
    #[test]
    fn prop_projection_round_trips(coords in proptest::collection::vec((0u32..9, 0u32..9), 0..40)) {
        let mut text = String::from("(;GM[1]FF[4]SZ[9]");
        for (i, (x, y)) in coords.iter().enumerate() {
            let tag = if i % 2 == 0 { "B" } else { "W" };
            let col = (b'a' + *x as u8) as char;
            let row = (b'a' + *y as u8) as char;
            text.push_str(&format!(";{tag}[{col}{row}]"));
        }
        text.push(')');

        let record = Record::from_sgf(&text);
        prop_assert!(record.is_valid());
        prop_assert_eq!(record.move_count(), coords.len());

        for (i, (x, y)) in coords.iter().enumerate() {
            let player = if i % 2 == 0 { Player::Black } else { Player::White };
            prop_assert_eq!(
                record.move_at(i),
                Move::new(Loc::Point { x: *x, y: *y }, player)
            );
        }
    }

    /// Construction and every accessor stay total on arbitrary input.
    #[test]
    fn prop_accessors_never_panic(text in ".{0,200}", index in any::<usize>()) {
        let record = Record::from_sgf(&text);
        if !record.is_valid() {
            prop_assert_eq!(record.x_size(), 0);
            prop_assert_eq!(record.y_size(), 0);
            prop_assert_eq!(record.move_count(), 0);
        }
        let _ = record.move_at(index);
        let _ = record.get_move(index);
        let _ = record.last_move_index();
    }
}

//! Scoring tests - worked games through the public Player API

use tui_bowling::core::{InvalidThrowError, Player};
use tui_bowling::types::{FRAMES_PER_GAME, PERFECT_GAME};

fn play(throws: &[u8]) -> Player {
    let mut player = Player::new("tester");
    for &t in throws {
        player.submit_throw(t).unwrap();
    }
    player
}

#[test]
fn test_gutter_game() {
    let player = play(&[0; 20]);
    assert!(player.is_finished());
    assert_eq!(player.cumulative_scores(), [0; FRAMES_PER_GAME]);
}

#[test]
fn test_open_game_is_plain_sum() {
    let throws = [3, 4, 5, 2, 0, 9, 1, 1, 8, 0, 4, 4, 2, 6, 7, 1, 0, 0, 6, 3];
    let player = play(&throws);
    let sum: u32 = throws.iter().map(|&t| u32::from(t)).sum();
    assert_eq!(player.cumulative_scores()[9], sum);
    assert_eq!(player.total(), sum);
}

#[test]
fn test_perfect_game() {
    let player = play(&[10; 12]);
    assert!(player.is_finished());

    let scores = player.cumulative_scores();
    for (i, score) in scores.iter().enumerate() {
        assert_eq!(*score, 30 * (i as u32 + 1), "frame {}", i + 1);
    }
    assert_eq!(player.total(), PERFECT_GAME);
}

#[test]
fn test_all_spares_of_five() {
    let player = play(&[5; 21]);
    assert!(player.is_finished());
    assert_eq!(player.total(), 150);
}

#[test]
fn test_strike_then_three_four() {
    let mut throws = vec![10, 3, 4];
    throws.extend_from_slice(&[0; 16]);
    let player = play(&throws);
    assert!(player.is_finished());

    let scores = player.cumulative_scores();
    assert_eq!(scores[0], 17);
    assert_eq!(scores[1], 24);
    assert_eq!(scores[9], 24);
}

#[test]
fn test_turkey_then_open() {
    // X X X 7 2 then gutters
    let mut throws = vec![10, 10, 10, 7, 2];
    throws.extend_from_slice(&[0; 12]);
    let player = play(&throws);

    let scores = player.cumulative_scores();
    assert_eq!(scores[0], 30);
    assert_eq!(scores[1], 57);
    assert_eq!(scores[2], 76);
    assert_eq!(scores[3], 85);
    assert_eq!(scores[9], 85);
}

#[test]
fn test_ninth_frame_strike_into_tenth() {
    let mut throws = vec![0; 16];
    throws.extend_from_slice(&[10, 10, 10, 10]);
    let player = play(&throws);
    assert!(player.is_finished());

    let scores = player.cumulative_scores();
    assert_eq!(scores[8], 30);
    assert_eq!(scores[9], 60);
}

#[test]
fn test_ninth_frame_strike_then_tenth_spare() {
    let mut throws = vec![0; 16];
    throws.extend_from_slice(&[10, 4, 6, 5]);
    let player = play(&throws);
    assert!(player.is_finished());

    let scores = player.cumulative_scores();
    assert_eq!(scores[8], 20);
    assert_eq!(scores[9], 35);
}

#[test]
fn test_eighth_frame_spare_into_ninth_strike() {
    let mut throws = vec![0; 14];
    throws.extend_from_slice(&[6, 4, 10, 3, 3]);
    let player = play(&throws);
    assert!(player.is_finished());

    let scores = player.cumulative_scores();
    assert_eq!(scores[7], 20);
    assert_eq!(scores[8], 36);
    assert_eq!(scores[9], 42);
}

#[test]
fn test_tenth_frame_three_strikes_contribute_thirty() {
    let mut throws = vec![0; 18];
    throws.extend_from_slice(&[10, 10]);
    let mut player = play(&throws);
    assert!(!player.is_finished());
    assert_eq!(player.frames()[9].throws_taken(), 2);

    player.submit_throw(10).unwrap();
    assert!(player.is_finished());
    assert!(player.frames()[9].is_complete());
    assert_eq!(player.total(), 30);
}

#[test]
fn test_provisional_totals_converge() {
    let mut player = Player::new("tester");

    player.submit_throw(10).unwrap();
    assert_eq!(player.cumulative_scores()[0], 10);

    player.submit_throw(10).unwrap();
    assert_eq!(player.cumulative_scores()[0], 20);

    player.submit_throw(4).unwrap();
    assert_eq!(player.cumulative_scores()[0], 24);
    assert_eq!(player.cumulative_scores()[1], 38);

    player.submit_throw(5).unwrap();
    assert_eq!(player.cumulative_scores()[1], 43);
    assert_eq!(player.cumulative_scores()[2], 52);
}

#[test]
fn test_second_throw_after_strike_is_refused_by_frame() {
    let mut player = play(&[10]);
    let mut frame = player.frames()[0].clone();
    assert!(frame.is_complete());
    assert_eq!(frame.record_throw(3), Err(InvalidThrowError::FrameComplete));

    // The player routes the same throw to the next frame instead.
    player.submit_throw(3).unwrap();
    assert_eq!(player.frames()[1].throws(), &[3]);
}

#[test]
fn test_throws_after_game_over_change_nothing() {
    let mut player = play(&[4; 20]);
    assert!(player.is_finished());
    let scores = player.cumulative_scores();
    let frames = player.frames().clone();

    for pinfall in [0, 5, 10] {
        player.submit_throw(pinfall).unwrap();
    }
    assert_eq!(player.cumulative_scores(), scores);
    assert_eq!(player.frames(), &frames);
}

//! Wire-level properties of the feed decoder, checked against seeded random
//! snapshots and hand-built frames.

mod common;

use forlorn_networking::{decode_message, DecodeError, GameSnapshot, ServerMessage};
use forlorn_shared::SAVE_SIZE;

const CASES: u64 = 64;

#[test]
fn test_encoded_snapshots_decode_back() {
    for seed in 0..CASES {
        let mut rng = common::rng(seed);
        let messages = [
            ServerMessage::GameStart(common::map_snapshot(&mut rng)),
            ServerMessage::GameState(common::game_snapshot(&mut rng)),
        ];
        for message in messages {
            let frame = message.encode().unwrap();
            assert_eq!(decode_message(&frame).unwrap(), message, "seed {seed}");
        }
    }
}

#[test]
fn test_decoding_is_deterministic() {
    let mut rng = common::rng(7);
    let frame = ServerMessage::GameState(common::game_snapshot(&mut rng)).encode().unwrap();
    let first = decode_message(&frame);
    for _ in 0..10 {
        assert_eq!(decode_message(&frame), first);
    }
}

#[test]
fn test_every_truncated_map_is_out_of_bounds() {
    for seed in 0..CASES / 4 {
        let mut rng = common::rng(seed);
        let frame = ServerMessage::GameStart(common::map_snapshot(&mut rng)).encode().unwrap();
        for cut in 0..frame.len() {
            let err = decode_message(&frame[..cut]).unwrap_err();
            assert!(
                matches!(err, DecodeError::OutOfBounds { .. }),
                "seed {seed} cut {cut}: {err:?}"
            );
        }
    }
}

#[test]
fn test_every_truncated_game_state_fails() {
    for seed in 0..CASES / 4 {
        let mut rng = common::rng(seed);
        let frame = ServerMessage::GameState(common::game_snapshot(&mut rng)).encode().unwrap();
        for cut in 0..frame.len() {
            // A cut inside a player name leaves the name without its terminator.
            let err = decode_message(&frame[..cut]).unwrap_err();
            assert!(
                matches!(
                    err,
                    DecodeError::OutOfBounds { .. } | DecodeError::MalformedString { .. }
                ),
                "seed {seed} cut {cut}: {err:?}"
            );
        }
    }
}

#[test]
fn test_truncation_without_names_is_out_of_bounds() {
    let mut rng = common::rng(99);
    let mut state = common::game_snapshot(&mut rng);
    state.players.clear();
    let frame = ServerMessage::GameState(state).encode().unwrap();
    for cut in 0..frame.len() {
        assert!(matches!(
            decode_message(&frame[..cut]),
            Err(DecodeError::OutOfBounds { .. })
        ));
    }
}

#[test]
fn test_empty_game_state_bytes() {
    let frame = [0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    assert_eq!(
        decode_message(&frame).unwrap(),
        ServerMessage::GameState(GameSnapshot {
            tick: 0,
            round: 0,
            players: vec![],
            coins: vec![],
        })
    );
}

#[test]
fn test_small_map_bytes() {
    let mut frame = vec![0x04, 2, 1, 0, 0, 1, 0, 0, 0, 0];
    frame.extend_from_slice(&[0; SAVE_SIZE]);

    let ServerMessage::GameStart(map) = decode_message(&frame).unwrap() else {
        panic!("expected a map");
    };
    assert_eq!(map.grid_size, 2);
    assert_eq!(map.discrete_grid, vec![vec![1, 0], vec![0, 1]]);
    assert!(map.walls.is_empty());
    assert_eq!(map.private_save, [0; SAVE_SIZE]);
}

#[test]
fn test_unknown_leading_byte() {
    let mut rng = common::rng(3);
    let mut frame = ServerMessage::GameState(common::game_snapshot(&mut rng)).encode().unwrap();
    frame[0] = 9;
    assert_eq!(decode_message(&frame), Err(DecodeError::UnknownMessageType(9)));
}

#[test]
fn test_hostile_counts_fail_cleanly() {
    // tick, round, then i32::MAX players with no bytes behind them. The first
    // player name has no terminator.
    let mut frame = vec![0x01, 0, 0, 0, 0, 0];
    frame.extend_from_slice(&i32::MAX.to_le_bytes());
    assert_eq!(decode_message(&frame), Err(DecodeError::MalformedString { offset: 10 }));

    // Same count, first player has an empty name and nothing else.
    frame.push(0);
    assert_eq!(
        decode_message(&frame),
        Err(DecodeError::OutOfBounds { offset: 11, needed: 4, available: 0 })
    );

    // A map declaring i32::MAX walls.
    let mut frame = vec![0x04, 0];
    frame.extend_from_slice(&i32::MAX.to_le_bytes());
    assert!(matches!(decode_message(&frame), Err(DecodeError::OutOfBounds { .. })));
}

#[test]
fn test_player_length_matches_layout() {
    for seed in 0..CASES {
        let mut rng = common::rng(seed);
        let state = common::game_snapshot(&mut rng);
        let expected = 1
            + 4
            + 1
            + 4
            + state.players.iter().map(|p| p.encoded_len()).sum::<usize>()
            + 4
            + state.coins.len() * forlorn_networking::protocol::COIN_SIZE;
        let frame = ServerMessage::GameState(state).encode().unwrap();
        assert_eq!(frame.len(), expected, "seed {seed}");
    }
}

//! # Bot Session
//!
//! Glue between the transport and a bot's decision logic.
//!
//! ```text
//! transport frame ──► Session::handle_frame ──► decode ──► Bot
//!                                                            │
//! transport ◄──────── action frame (0x03 + JSON) ◄───────────┘
//! ```
//!
//! The session never owns a socket. Whoever holds the connection feeds it
//! complete frames and sends back whatever it returns.

use crate::error::SessionError;
use crate::protocol::{encode_actions, Action, GameSnapshot, MapSnapshot, ServerMessage};

/// Decision logic driven by the feed.
pub trait Bot {
    /// Called once when a game starts.
    fn on_start(&mut self, map: &MapSnapshot);

    /// Called every tick. The returned actions are sent back to the server.
    fn on_tick(&mut self, state: &GameSnapshot) -> Vec<Action>;

    /// Called when the game ends.
    fn on_end(&mut self) {}
}

/// Where the session is in the game lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// No map received yet.
    #[default]
    Waiting,
    /// Map received, ticks flowing.
    Running,
    /// Game over.
    Ended,
}

/// Session counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Frames handed to the session.
    pub frames: u64,
    /// Frames that failed to decode.
    pub decode_errors: u64,
    /// Game-state ticks delivered to the bot.
    pub ticks: u64,
    /// Action frames produced.
    pub actions_sent: u64,
}

/// Drives a [`Bot`] from raw server frames.
pub struct Session<B: Bot> {
    bot: B,
    phase: SessionPhase,
    map: Option<MapSnapshot>,
    last_tick: Option<i32>,
    stats: SessionStats,
}

impl<B: Bot> Session<B> {
    /// Creates a session waiting for its first map.
    #[must_use]
    pub fn new(bot: B) -> Self {
        Self {
            bot,
            phase: SessionPhase::Waiting,
            map: None,
            last_tick: None,
            stats: SessionStats::default(),
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The map of the current game, once received.
    #[must_use]
    pub const fn map(&self) -> Option<&MapSnapshot> {
        self.map.as_ref()
    }

    /// Tick number of the last game state delivered.
    #[must_use]
    pub const fn last_tick(&self) -> Option<i32> {
        self.last_tick
    }

    /// Counters so far.
    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// The bot being driven.
    #[must_use]
    pub const fn bot(&self) -> &B {
        &self.bot
    }

    /// Consumes the session, returning the bot.
    #[must_use]
    pub fn into_bot(self) -> B {
        self.bot
    }

    /// Handles one complete frame from the server.
    ///
    /// Returns the action frame to send back, if the message calls for one.
    /// A frame that fails to decode leaves the session untouched.
    pub fn handle_frame(&mut self, frame: &[u8]) -> Result<Option<Vec<u8>>, SessionError> {
        self.stats.frames += 1;

        let (message, consumed) = match ServerMessage::decode_prefix(frame) {
            Ok(decoded) => decoded,
            Err(e) => {
                self.stats.decode_errors += 1;
                tracing::warn!("Dropping undecodable frame ({} bytes): {}", frame.len(), e);
                return Err(e.into());
            }
        };

        if consumed < frame.len() {
            tracing::debug!(
                "Ignoring {} trailing bytes after {:?}",
                frame.len() - consumed,
                message.message_type()
            );
        }

        self.handle_message(message)
    }

    /// Handles an already decoded message.
    pub fn handle_message(
        &mut self,
        message: ServerMessage,
    ) -> Result<Option<Vec<u8>>, SessionError> {
        match message {
            ServerMessage::GameStart(map) => {
                tracing::info!(
                    "Game started: {}x{} grid, {} walls",
                    map.grid_size,
                    map.grid_size,
                    map.walls.len()
                );
                self.bot.on_start(&map);
                self.map = Some(map);
                self.last_tick = None;
                self.phase = SessionPhase::Running;
                Ok(None)
            }
            ServerMessage::GameState(state) => {
                if self.phase != SessionPhase::Running {
                    tracing::debug!("Tick {} received while {:?}", state.tick, self.phase);
                }
                tracing::debug!(
                    "Tick {} round {}: {} players, {} coins",
                    state.tick,
                    state.round,
                    state.players.len(),
                    state.coins.len()
                );
                let actions = self.bot.on_tick(&state);
                let frame = encode_actions(&actions)?;

                self.last_tick = Some(state.tick);
                self.stats.ticks += 1;
                self.stats.actions_sent += 1;
                Ok(Some(frame))
            }
            ServerMessage::GameEnd => {
                tracing::info!("Game ended after {} ticks", self.stats.ticks);
                self.bot.on_end();
                self.phase = SessionPhase::Ended;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use forlorn_shared::{Point, SAVE_SIZE};

    #[derive(Default)]
    struct RecordingBot {
        starts: usize,
        ticks: Vec<i32>,
        ended: bool,
    }

    impl Bot for RecordingBot {
        fn on_start(&mut self, _map: &MapSnapshot) {
            self.starts += 1;
        }

        fn on_tick(&mut self, state: &GameSnapshot) -> Vec<Action> {
            self.ticks.push(state.tick);
            vec![Action::MoveTo(Point::new(f64::from(state.tick), 0.0))]
        }

        fn on_end(&mut self) {
            self.ended = true;
        }
    }

    fn map_frame() -> Vec<u8> {
        ServerMessage::GameStart(MapSnapshot {
            grid_size: 1,
            discrete_grid: vec![vec![0]],
            walls: vec![],
            private_save: [0; SAVE_SIZE],
        })
        .encode()
        .unwrap()
    }

    fn tick_frame(tick: i32) -> Vec<u8> {
        ServerMessage::GameState(GameSnapshot { tick, ..GameSnapshot::default() })
            .encode()
            .unwrap()
    }

    #[test]
    fn test_full_lifecycle() {
        let mut session = Session::new(RecordingBot::default());
        assert_eq!(session.phase(), SessionPhase::Waiting);

        assert_eq!(session.handle_frame(&map_frame()).unwrap(), None);
        assert_eq!(session.phase(), SessionPhase::Running);
        assert!(session.map().is_some());

        let reply = session.handle_frame(&tick_frame(7)).unwrap().unwrap();
        let mut expected = vec![3u8];
        expected.extend_from_slice(br#"{"dest":{"x":7.0,"y":0.0}}"#);
        assert_eq!(reply, expected);
        assert_eq!(session.last_tick(), Some(7));

        assert_eq!(session.handle_frame(&[5]).unwrap(), None);
        assert_eq!(session.phase(), SessionPhase::Ended);

        let stats = *session.stats();
        assert_eq!(stats, SessionStats { frames: 3, decode_errors: 0, ticks: 1, actions_sent: 1 });

        let bot = session.into_bot();
        assert_eq!(bot.starts, 1);
        assert_eq!(bot.ticks, vec![7]);
        assert!(bot.ended);
    }

    #[test]
    fn test_decode_error_leaves_session_untouched() {
        let mut session = Session::new(RecordingBot::default());
        session.handle_frame(&map_frame()).unwrap();
        session.handle_frame(&tick_frame(1)).unwrap();

        let mut broken = tick_frame(2);
        broken.pop();
        let err = session.handle_frame(&broken).unwrap_err();
        assert!(matches!(err, SessionError::Decode(DecodeError::OutOfBounds { .. })));

        let err = session.handle_frame(&[9]).unwrap_err();
        assert!(matches!(err, SessionError::Decode(DecodeError::UnknownMessageType(9))));

        assert_eq!(session.last_tick(), Some(1));
        assert_eq!(session.phase(), SessionPhase::Running);
        assert_eq!(session.stats().decode_errors, 2);
        assert_eq!(session.bot().ticks, vec![1]);
    }

    #[test]
    fn test_tick_before_map_still_reaches_bot() {
        let mut session = Session::new(RecordingBot::default());
        assert!(session.handle_frame(&tick_frame(40)).unwrap().is_some());
        assert_eq!(session.phase(), SessionPhase::Waiting);
        assert_eq!(session.bot().ticks, vec![40]);
    }

    struct SpinningBot;

    impl Bot for SpinningBot {
        fn on_start(&mut self, _map: &MapSnapshot) {}

        fn on_tick(&mut self, _state: &GameSnapshot) -> Vec<Action> {
            vec![Action::RotateBlade(f64::NAN)]
        }
    }

    #[test]
    fn test_tick_state_advances_with_reply() {
        let mut session = Session::new(SpinningBot);
        session.handle_frame(&map_frame()).unwrap();

        for tick in [3, 4] {
            let reply = session.handle_frame(&tick_frame(tick)).unwrap().unwrap();
            assert_eq!(reply, b"\x03{\"rotate_blade\":null}".to_vec());
            assert_eq!(session.last_tick(), Some(tick));
        }
        let stats = *session.stats();
        assert_eq!(stats.ticks, 2);
        assert_eq!(stats.actions_sent, stats.ticks);
    }
}

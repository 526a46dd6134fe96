//! Session actor
//!
//! One task owns the `GameState`. Player requests arrive over a bounded
//! channel and gravity is a timer multiplexed with them in the same loop, so
//! at most one command touches the game at a time without any locking.
//!
//! The gravity timer is only re-armed after a gravity step; player commands
//! do not postpone it. After game over the timer stops and the session waits
//! for a restart or for every handle to be dropped.

use tokio::sync::mpsc;
use tokio::time::{self, Duration, Instant};

use crate::config::SessionConfig;
use crate::core::{GameSnapshot, GameState};
use crate::error::SessionError;
use crate::types::{Command, LockEvent};

/// Input accepted by a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRequest {
    Command(Command),
    /// Throw away the current game and start a fresh one.
    Restart,
}

impl From<Command> for SessionRequest {
    fn from(value: Command) -> Self {
        Self::Command(value)
    }
}

/// Event published by the session after each state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Snapshot(Box<GameSnapshot>),
    Locked(LockEvent),
    GameOver { final_score: u32, lines: u32 },
}

/// How a session ended. Scores describe the last game played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub final_score: u32,
    pub lines: u32,
    pub game_over: bool,
    pub games: u32,
}

/// Sending half used by input sources.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    req_tx: mpsc::Sender<SessionRequest>,
}

impl SessionHandle {
    pub async fn send(&self, command: Command) -> Result<(), SessionError> {
        self.request(command.into()).await
    }

    pub async fn restart(&self) -> Result<(), SessionError> {
        self.request(SessionRequest::Restart).await
    }

    pub async fn request(&self, request: SessionRequest) -> Result<(), SessionError> {
        self.req_tx
            .send(request)
            .await
            .map_err(|_| SessionError::Closed)
    }

    /// Send from a plain thread (must not be called inside the runtime).
    pub fn blocking_request(&self, request: SessionRequest) -> Result<(), SessionError> {
        self.req_tx
            .blocking_send(request)
            .map_err(|_| SessionError::Closed)
    }

    pub fn is_closed(&self) -> bool {
        self.req_tx.is_closed()
    }
}

/// Running game owned by a single task.
pub struct Session {
    state: GameState,
    config: SessionConfig,
    games: u32,
    req_rx: mpsc::Receiver<SessionRequest>,
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl Session {
    pub fn new(
        state: GameState,
        config: SessionConfig,
    ) -> (Self, SessionHandle, mpsc::UnboundedReceiver<SessionEvent>) {
        let (req_tx, req_rx) = mpsc::channel(config.max_pending_commands.max(1));
        let (events, events_rx) = mpsc::unbounded_channel();

        let session = Self {
            state,
            config,
            games: 1,
            req_rx,
            events,
        };
        (session, SessionHandle { req_tx }, events_rx)
    }

    /// Build a fresh game from `config.seed`.
    pub fn from_config(
        config: SessionConfig,
    ) -> (Self, SessionHandle, mpsc::UnboundedReceiver<SessionEvent>) {
        Self::new(GameState::new(config.seed), config)
    }

    fn gravity_delay(&self) -> Duration {
        Duration::from_millis(self.config.gravity.delay_ms(self.state.score()) as u64)
    }

    /// Run until every handle is dropped.
    pub async fn run(mut self) -> SessionOutcome {
        log::info!(
            "session started (seed {}, gravity {})",
            self.state.seed(),
            if self.config.gravity_enabled { "on" } else { "off" }
        );
        self.publish_snapshot();
        if self.state.game_over() {
            self.publish_game_over();
        }

        let gravity = time::sleep(self.gravity_delay());
        tokio::pin!(gravity);

        loop {
            let playing = !self.state.game_over();
            tokio::select! {
                request = self.req_rx.recv() => match request {
                    Some(SessionRequest::Command(command)) => self.dispatch(command),
                    Some(SessionRequest::Restart) => {
                        self.restart();
                        let delay = self.gravity_delay();
                        gravity.as_mut().reset(Instant::now() + delay);
                    }
                    None => {
                        log::info!("all session handles dropped");
                        break;
                    }
                },
                () = &mut gravity, if self.config.gravity_enabled && playing => {
                    self.dispatch(Command::MoveDown);
                    let delay = self.gravity_delay();
                    gravity.as_mut().reset(Instant::now() + delay);
                }
            }
        }

        let outcome = SessionOutcome {
            final_score: self.state.score(),
            lines: self.state.lines(),
            game_over: self.state.game_over(),
            games: self.games,
        };
        log::info!("session finished: {:?}", outcome);
        outcome
    }

    fn dispatch(&mut self, command: Command) {
        if self.state.game_over() {
            log::debug!("{} ignored until restart", command.as_str());
            return;
        }
        log::trace!("command {}", command.as_str());
        self.state.apply(command);

        if let Some(event) = self.state.take_last_event() {
            log::debug!(
                "locked {:?}: {} rows, +{}",
                event.shape,
                event.rows_cleared,
                event.score_awarded
            );
            let _ = self.events.send(SessionEvent::Locked(event));
        }
        self.publish_snapshot();
        if self.state.game_over() {
            self.publish_game_over();
        }
    }

    /// Each restart moves to the next seed, so a seeded run stays reproducible.
    fn restart(&mut self) {
        let seed = self.state.seed().wrapping_add(1);
        log::info!(
            "restart: game {} ended at score {}, new seed {}",
            self.games,
            self.state.score(),
            seed
        );
        self.state = GameState::new(seed);
        self.games += 1;
        self.publish_snapshot();
    }

    fn publish_snapshot(&self) {
        let _ = self
            .events
            .send(SessionEvent::Snapshot(Box::new(self.state.snapshot())));
    }

    fn publish_game_over(&self) {
        let _ = self.events.send(SessionEvent::GameOver {
            final_score: self.state.score(),
            lines: self.state.lines(),
        });
    }
}

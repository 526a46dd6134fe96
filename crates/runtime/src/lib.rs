//! Runtime module - drives one game from an async task
//!
//! The engine in `blockfall-core` is synchronous and never touches a clock.
//! This crate wraps it in a session actor that owns the `GameState`,
//! applies player commands as they arrive and moves the piece down on a
//! score-dependent gravity timer. A game that is over waits for a restart.
//!
//! # Pieces
//!
//! - [`session`]: the actor, its command handle and the event stream
//! - [`protocol`]: line-delimited JSON for headless front ends
//! - [`config`]: `BLOCKFALL_*` environment configuration
//! - [`error`]: [`SessionError`]
//!
//! # Example
//!
//! ```no_run
//! use blockfall_runtime::{Session, SessionConfig};
//! use blockfall_runtime::types::Command;
//!
//! # async fn demo() -> Result<(), blockfall_runtime::SessionError> {
//! let (session, handle, mut events) = Session::from_config(SessionConfig::default());
//! let task = tokio::spawn(session.run());
//!
//! handle.send(Command::Drop).await?;
//! drop(handle);
//!
//! while let Some(event) = events.recv().await {
//!     println!("{:?}", event);
//! }
//! let _outcome = task.await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod protocol;
pub mod session;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use config::SessionConfig;
pub use error::SessionError;
pub use protocol::{parse_input_line, OutboundMessage};
pub use session::{Session, SessionEvent, SessionHandle, SessionOutcome, SessionRequest};

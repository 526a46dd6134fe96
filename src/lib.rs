//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine, the async runtime and the shared types so that
//! `blockfall::{core,runtime,types}` is the one public path for users, while
//! the implementation lives in dedicated crates under `crates/`.

pub mod cli;

pub use blockfall_core as core;
pub use blockfall_runtime as runtime;
pub use blockfall_types as types;

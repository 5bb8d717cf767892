//! Bowling scorer (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so binaries, integration
//! tests and benchmarks can use `bowling_scorer::{core,session,input,term,types}`.

pub use bowling_core as core;
pub use bowling_input as input;
pub use bowling_session as session;
pub use bowling_term as term;
pub use bowling_types as types;

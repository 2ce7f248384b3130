//! Admin gate sessions.

pub mod session;

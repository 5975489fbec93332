// Library entry so integration tests can reach the responder and session types.
// The binary (`main.rs`) only wires logging and runs the session.
pub mod commands;
pub mod constants;
pub mod handler;
pub mod model;
pub mod session;

pub use model::ReadyLatch;
pub use session::{Credentials, Session};

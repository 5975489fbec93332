// src/commands/mod.rs
// The bot answers a single command.

pub mod ping;

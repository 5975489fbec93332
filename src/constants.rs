// Central constants for the session and the ping command.
pub const TOKEN_ENV_VAR: &str = "token";
/// Printed once the gateway session is ready.
pub const READY_MESSAGE: &str = "ZiTTA bot is online!";
pub const PING_TRIGGER: &str = "!ping";
pub const PING_REPLY: &str = "Pong";

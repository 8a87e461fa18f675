//! Relay registry contract error codes.

// === Contract error codes ===
/// Relay parameters failed validation
pub const ERR_INVALID_MESSAGE: u64 = 101;
/// No relay was ever assigned the requested id
pub const ERR_RELAY_NOT_FOUND: u64 = 102;
/// Relay has already transitioned to confirmed
pub const ERR_ALREADY_CONFIRMED: u64 = 103;
/// Backing store failed while executing the call
pub const ERR_STORAGE: u64 = 500;

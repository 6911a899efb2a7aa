//! Constants for the tabsync API

// ============================================================================
// PAYLOAD FIELDS
// ============================================================================

/// Payload key carrying the shared secret.
pub const AUTH_TOKEN_FIELD: &str = "authToken";

/// Payload key carrying the target row identifier. Matches the identifier
/// column header.
pub const ROW_ID_FIELD: &str = "UUID";

// ============================================================================
// RATE LIMITING
// ============================================================================

/// Default minimum interval between update requests (ms).
pub const DEFAULT_UPDATE_MIN_INTERVAL_MS: u64 = 1000;

/// Default minimum interval between assignment passes (ms).
pub const DEFAULT_ASSIGN_MIN_INTERVAL_MS: u64 = 500;

// ============================================================================
// LOCKING
// ============================================================================

/// Default bound on waiting for the store lock on the update path (ms).
pub const DEFAULT_UPDATE_LOCK_TIMEOUT_MS: u64 = 10_000;

/// Default bound on waiting for the store lock on the assignment path (ms).
pub const DEFAULT_ASSIGN_LOCK_TIMEOUT_MS: u64 = 5_000;

// ============================================================================
// SERVER
// ============================================================================

/// Default bind host.
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 3000;

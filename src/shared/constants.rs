/// Number of address records shown per result page
pub const ITEMS_PER_PAGE: usize = 5;

/// Maximum page size accepted by the stateless search endpoint
pub const MAX_PAGE_SIZE: usize = 50;

// =============================================================================
// SESSION CONSTANTS
// =============================================================================

/// Idle time after which a search session is treated as ended (5 minutes)
pub const DEFAULT_SESSION_TTL_SECS: u64 = 300;

/// Period of the background sweep that evicts expired sessions (5 minutes)
pub const DEFAULT_SESSION_SWEEP_INTERVAL_SECS: u64 = 300;

// =============================================================================
// DIALOGUE CONSTANTS
// =============================================================================

/// Recipient name must have at least this many characters
pub const MIN_NAME_LENGTH: usize = 3;

/// Recipient phone must have at least this many digits
pub const MIN_PHONE_LENGTH: usize = 10;

/// Street address must have at least this many characters
pub const MIN_ADDRESS_LENGTH: usize = 10;

// =============================================================================
// MESSAGE COMMANDS
// =============================================================================

pub const COMMAND_START: &str = "/start";
pub const COMMAND_HELP: &str = "/help";
pub const COMMAND_LABEL: &str = "/resi";
pub const COMMAND_CANCEL: &str = "/batal";

/// Message returned when a session or dialogue can no longer be found
pub const SESSION_ENDED_MESSAGE: &str = "Sesi telah berakhir";

/// Message returned when the postal-code dataset failed to load
pub const DIRECTORY_UNAVAILABLE_MESSAGE: &str = "Data kodepos tidak tersedia";

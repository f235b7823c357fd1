// Single source of truth for all default values.

// --- History ---
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

// --- Suggestion ---
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

// --- Rules ---
pub const DEFAULT_SQL_KEYWORD_MIN_HITS: usize = 2;
pub const DEFAULT_SPAM_KEYWORD_MIN_HITS: usize = 2;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

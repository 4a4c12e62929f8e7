// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display)
pub const APP_NAME: &str = "SlackTab";

/// Application name in lowercase (for identifiers and the log filter)
pub const APP_NAME_LOWER: &str = "slacktab";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable holding the Slack bot or user token
pub const ENV_SLACK_TOKEN: &str = "SLACK_TOKEN";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "SLACKTAB_LOG";

/// Environment variable for client request logging
pub const ENV_DEBUG: &str = "SLACKTAB_DEBUG";

// =============================================================================
// Slack Web API
// =============================================================================

/// Base URL for Web API methods
pub const DEFAULT_API_BASE: &str = "https://slack.com/api";

/// Default page size for list-style API calls
pub const DEFAULT_PAGE_LIMIT: u32 = 200;

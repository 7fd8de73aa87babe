/// Object code for groups
pub const OBJCODE_GROUP: &str = "GROUP";
/// Object code for projects
pub const OBJCODE_PROJECT: &str = "PROJ";
/// Object code for tasks
pub const OBJCODE_TASK: &str = "TASK";

/// Path of the login endpoint, relative to the API base URL
pub const PATH_LOGIN: &str = "/login";
/// Path of the logout endpoint, relative to the API base URL
pub const PATH_LOGOUT: &str = "/logout";
/// Suffix appended to an object path for searches
pub const PATH_SEARCH: &str = "/search";

/// Reserved form key carrying the logical HTTP method
pub const PARAM_METHOD: &str = "method";
/// Reserved form key carrying the session identifier
pub const PARAM_SESSION_ID: &str = "sessionID";
/// Reserved form key carrying the comma-joined field selection
pub const PARAM_FIELDS: &str = "fields";
/// Keys injected by the client into every request; caller values for them are overwritten
pub const RESERVED_PARAMS: [&str; 3] = [PARAM_METHOD, PARAM_SESSION_ID, PARAM_FIELDS];

/// Default base URL of the Stream API
pub const DEFAULT_API_URL: &str = "http://localhost/attask/api";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string sent with every request
pub const USER_AGENT: &str = "stream-client/0.1.0";

use std::time::Duration;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 5000;
pub const DEFAULT_CLIENT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite:instance/code_review.db";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_SESSION_TTL_HOURS: u64 = 168;

pub const CONFIG_DIR_NAME: &str = "ai-code-reviewer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const SECRET_KEY_ENV: &str = "SECRET_KEY";
pub const PORT_ENV: &str = "PORT";
pub const PASSWORD_ENV: &str = "AI_REVIEWER_PASSWORD";

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

pub const REVIEW_CODE_LIMIT: usize = 2000;
pub const REVIEW_TRUNCATION_SUFFIX: &str = "... [truncated for faster analysis]";
pub const DEBUG_CODE_LIMIT: usize = 1500;
pub const DEBUG_TRUNCATION_SUFFIX: &str = "... [truncated]";
pub const REVIEW_TIMEOUT_SECS: u64 = 15;
pub const DEBUG_TIMEOUT_SECS: u64 = 8;

pub const DEFAULT_LANGUAGE: &str = "python";
pub const DEFAULT_TITLE: &str = "Code Analysis";
pub const RECENT_REVIEWS_LIMIT: i64 = 5;
pub const NO_CODE_MESSAGE: &str = "No code provided";
pub const MAX_REQUEST_BODY_BYTES: u64 = 256 * 1024;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 5_000;

pub const SESSION_COOKIE: &str = "session";
pub const LOGIN_REQUIRED_MESSAGE: &str = "Login required";
pub const PASSWORD_HASH_ITERATIONS: u32 = 600_000;
pub const PASSWORD_HASH_LENGTH: usize = 32;
pub const USERNAME_TAKEN_MESSAGE: &str = "Username already exists";
pub const EMAIL_TAKEN_MESSAGE: &str = "Email already registered";

pub const EMPTY_CODE_MESSAGE: &str = "Please enter some code to analyze";
pub const GENERIC_TRANSPORT_ERROR: &str = "An error occurred while analyzing the code. Please try again.";
pub const STATUS_CYCLE_INTERVAL_MS: u64 = 1500;
pub const PROGRESS_STATUSES: &[&str] = &[
    "Analyzing code structure...",
    "Detecting potential issues...",
    "Checking security concerns...",
    "Evaluating performance...",
    "Preparing suggestions...",
];

pub const SUPPORTED_FILE_EXTENSIONS: &[(&str, &str)] = &[
    ("rs", "rust"),
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("py", "python"),
    ("java", "java"),
    ("cpp", "cpp"),
    ("cc", "cpp"),
    ("cxx", "cpp"),
    ("c", "c"),
    ("h", "c"),
    ("hpp", "cpp"),
    ("cs", "csharp"),
    ("go", "go"),
    ("php", "php"),
    ("rb", "ruby"),
    ("swift", "swift"),
    ("kt", "kotlin"),
    ("sql", "sql"),
    ("html", "html"),
    ("css", "css"),
];

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}

/// Language tag for a file extension, if it is one we know.
pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    let extension = extension.to_ascii_lowercase();
    SUPPORTED_FILE_EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, language)| *language)
}

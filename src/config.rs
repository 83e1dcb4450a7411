use log::Level;

const DEFAULT_WEBHOOK_URL: &str = "https://hook.eu2.make.com/gx8h9xdoqkn34rnpq2g9gkf8f8vehg3x";

pub const VIDEO_EMBED_URL: &str = "https://www.youtube.com/embed/uZzpI9C_NLw";
pub const MARKETING_URL: &str = "https://www.harvestflow.ai";

pub const COUNTER_STORAGE_KEY: &str = "submissionCount";
pub const COUNTER_RESET_PARAM: &str = "reset-counter";

pub const MESSAGE_ROTATE_MS: u32 = 15_000;
pub const MIN_CONTENT_WORDS: usize = 150;

/// Webhook receiving the form payload. Staging builds can point somewhere
/// else by setting `WRITEMAP_WEBHOOK_URL` at compile time.
pub fn webhook_url() -> &'static str {
    option_env!("WRITEMAP_WEBHOOK_URL").unwrap_or(DEFAULT_WEBHOOK_URL)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

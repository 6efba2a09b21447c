//! Logging with colored module prefixes.
//!
//! # Example
//!
//! ```ignore
//! log!("store"; "loaded {} posts", count);
//! ```

use colored::{ColoredString, Colorize};

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix.
///
/// Goes to stderr so command output (listings, rendered posts) stays
/// clean on stdout.
pub fn log(module: &str, message: &str) {
    eprintln!("{} {message}", colorize_prefix(module));
}

/// Apply color to a module prefix based on module type.
fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "error" => prefix.bright_red().bold(),
        "publish" => prefix.bright_green().bold(),
        "store" => prefix.bright_blue().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

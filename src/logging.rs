//! Tracing setup and masking of personal data in log fields.

use std::fmt;

use tracing_subscriber::{fmt as tracing_fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging.
///
/// `RUST_LOG` wins over `default_level`; `format = "json"` switches to JSON lines.
pub fn init_tracing(default_level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry.with(tracing_fmt::layer().with_target(true)).try_init()
    };

    if let Err(e) = result {
        eprintln!("Warning: tracing already initialized: {}", e);
    }
}

/// Phone number safe for logs: keeps the country code and last two digits
#[derive(Clone, Debug)]
pub struct SensitivePhone<'a> {
    inner: &'a str,
}

impl<'a> SensitivePhone<'a> {
    /// # Examples
    /// ```
    /// use zipper_site::logging::SensitivePhone;
    ///
    /// let masked = SensitivePhone::new("+7 (916) 123-45-67");
    /// assert_eq!(masked.to_string(), "+7********67");
    /// ```
    pub fn new(phone: &'a str) -> Self {
        Self { inner: phone }
    }
}

impl<'a> fmt::Display for SensitivePhone<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: Vec<char> = self.inner.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() < 5 {
            return write!(f, "***");
        }
        let head: String = digits[..1].iter().collect();
        let tail: String = digits[digits.len() - 2..].iter().collect();
        write!(f, "+{}{}{}", head, "*".repeat(digits.len() - 3), tail)
    }
}

/// First letter of each word, the rest hidden
pub fn mask_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first, "*".repeat(chars.count())),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

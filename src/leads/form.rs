use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::error::AppError;
use crate::leads::files::LeadFile;
use crate::leads::validation::{is_valid_name, is_valid_phone};

pub const REASON_NO_FILES: &str = "добавьте файл";
pub const REASON_NAME: &str = "введите имя (≥2 буквы)";
pub const REASON_PHONE: &str = "телефон: +7 (XXX) XXX-XX-XX";
pub const REASON_CONSENT: &str = "согласие ФЗ‑152";
pub const REASON_ANTI_BOT: &str = "антибот‑проверка";

/// Upload form as submitted by the page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub consent: bool,
    #[serde(default)]
    pub files: Vec<LeadFile>,
    /// Hidden field; humans leave it empty
    #[serde(default)]
    pub honeypot: String,
    /// When the form was shown, epoch milliseconds
    #[serde(default)]
    pub opened_at_ms: Option<i64>,
}

/// Honeypot empty and the form was open for at least `min_fill_ms`.
///
/// Advisory only: both signals come from the client.
pub fn passes_anti_bot(
    honeypot: &str,
    opened_at_ms: Option<i64>,
    now: DateTime<Utc>,
    min_fill_ms: u64,
) -> bool {
    if !honeypot.is_empty() {
        return false;
    }
    let opened_at = match opened_at_ms.and_then(|ms| Utc.timestamp_millis_opt(ms).single()) {
        Some(at) => at,
        None => return false,
    };
    let elapsed = now.signed_duration_since(opened_at).num_milliseconds();
    elapsed >= 0 && elapsed as u64 >= min_fill_ms
}

/// Every unmet condition, in display order
pub fn upload_form_reasons(form: &UploadForm, now: DateTime<Utc>, min_fill_ms: u64) -> Vec<String> {
    let mut reasons = Vec::new();
    if form.files.is_empty() {
        reasons.push(REASON_NO_FILES);
    }
    if !is_valid_name(&form.name) {
        reasons.push(REASON_NAME);
    }
    if !is_valid_phone(&form.phone) {
        reasons.push(REASON_PHONE);
    }
    if !form.consent {
        reasons.push(REASON_CONSENT);
    }
    if !passes_anti_bot(&form.honeypot, form.opened_at_ms, now, min_fill_ms) {
        reasons.push(REASON_ANTI_BOT);
    }
    reasons.into_iter().map(str::to_string).collect()
}

/// Reject the form with one message listing every problem
pub fn validate_upload_form(form: &UploadForm, now: DateTime<Utc>, min_fill_ms: u64) -> Result<(), AppError> {
    let reasons = upload_form_reasons(form, now, min_fill_ms);
    if reasons.is_empty() {
        return Ok(());
    }
    Err(AppError::Validation {
        message: format!("Не удалось отправить: {}.", reasons.join(", ")),
        reasons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW_MS: i64 = 1_760_000_000_000;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(NOW_MS).unwrap()
    }

    fn good_form() -> UploadForm {
        UploadForm {
            name: "Иван Петров".to_string(),
            phone: "+7 (916) 123-45-67".to_string(),
            consent: true,
            files: vec![LeadFile {
                name: "part.stl".to_string(),
                size: 1024,
            }],
            honeypot: String::new(),
            opened_at_ms: Some(NOW_MS - 5_000),
        }
    }

    #[test]
    fn test_good_form_passes() {
        assert!(validate_upload_form(&good_form(), now(), 2000).is_ok());
    }

    #[test]
    fn test_all_reasons_enumerated_in_order() {
        let err = validate_upload_form(&UploadForm::default(), now(), 2000).unwrap_err();
        match err {
            AppError::Validation { message, reasons } => {
                assert_eq!(
                    reasons,
                    vec![REASON_NO_FILES, REASON_NAME, REASON_PHONE, REASON_CONSENT, REASON_ANTI_BOT]
                );
                assert_eq!(
                    message,
                    "Не удалось отправить: добавьте файл, введите имя (≥2 буквы), \
                     телефон: +7 (XXX) XXX-XX-XX, согласие ФЗ‑152, антибот‑проверка."
                );
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_anti_bot_single_reason_for_either_condition() {
        let mut form = good_form();
        form.honeypot = "http://spam".to_string();
        assert_eq!(upload_form_reasons(&form, now(), 2000), vec![REASON_ANTI_BOT]);

        let mut form = good_form();
        form.opened_at_ms = Some(NOW_MS - 500);
        assert_eq!(upload_form_reasons(&form, now(), 2000), vec![REASON_ANTI_BOT]);

        form.honeypot = "x".to_string();
        assert_eq!(upload_form_reasons(&form, now(), 2000), vec![REASON_ANTI_BOT]);
    }

    #[test]
    fn test_anti_bot_boundary_and_missing_timestamp() {
        assert!(passes_anti_bot("", Some(NOW_MS - 2000), now(), 2000));
        assert!(!passes_anti_bot("", Some(NOW_MS - 1999), now(), 2000));
        assert!(!passes_anti_bot("", None, now(), 2000));
        assert!(!passes_anti_bot("", Some(NOW_MS + 10_000), now(), 0));
    }
}

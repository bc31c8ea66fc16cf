use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::leads::{format_phone, is_valid_phone, phone_flag};

#[derive(Debug, Deserialize)]
pub struct PhoneQuery {
    #[serde(default)]
    pub raw: String,
}

#[derive(Debug, Serialize)]
pub struct PhoneResponse {
    pub formatted: String,
    pub valid: bool,
    pub flag: &'static str,
}

/// GET /api/phone/format?raw= - live mask for the phone input
pub async fn format(Query(query): Query<PhoneQuery>) -> Json<PhoneResponse> {
    let formatted = format_phone(&query.raw);
    Json(PhoneResponse {
        valid: is_valid_phone(&formatted),
        flag: phone_flag(&formatted),
        formatted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_format_full_number() {
        let Json(response) = format(Query(PhoneQuery {
            raw: "7 916 123 45 67".to_string(),
        }))
        .await;
        assert_eq!(response.formatted, "+7 (916) 123-45-67");
        assert!(response.valid);
        assert_eq!(response.flag, "🇷🇺");
    }

    #[tokio::test]
    async fn test_format_foreign_number() {
        let Json(response) = format(Query(PhoneQuery {
            raw: "89161".to_string(),
        }))
        .await;
        assert_eq!(response.formatted, "+89161");
        assert!(!response.valid);
        assert_eq!(response.flag, "📞");
    }
}

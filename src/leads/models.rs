use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::leads::files::LeadFile;
use crate::pricing::QualityTier;

/// Which form produced the lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadType {
    /// Upload form with model files and contact details
    File,
    /// Price calculator
    Calc,
}

impl LeadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Calc => "calc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

/// Body POSTed to the CRM lead endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadPayload {
    pub lead_id: String,
    #[serde(rename = "type")]
    pub lead_type: LeadType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<LeadFile>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_cm3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_est: Option<u64>,
    pub utm: BTreeMap<String, String>,
}

impl LeadPayload {
    /// Lead from the upload form
    pub fn file(
        lead_id: String,
        consent: bool,
        contact: Contact,
        files: Vec<LeadFile>,
        utm: BTreeMap<String, String>,
    ) -> Self {
        Self {
            lead_id,
            lead_type: LeadType::File,
            consent: Some(consent),
            contact: Some(contact),
            files: Some(files),
            material: None,
            quality: None,
            volume_cm3: None,
            price_est: None,
            utm,
        }
    }

    /// Lead from the price calculator
    pub fn calc(
        lead_id: String,
        material: String,
        quality: QualityTier,
        volume_cm3: f64,
        price_est: u64,
        utm: BTreeMap<String, String>,
    ) -> Self {
        Self {
            lead_id,
            lead_type: LeadType::Calc,
            consent: None,
            contact: None,
            files: None,
            material: Some(material),
            quality: Some(quality),
            volume_cm3: Some(volume_cm3),
            price_est: Some(price_est),
            utm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_calc_payload_shape() {
        let mut utm = BTreeMap::new();
        utm.insert("referrer".to_string(), String::new());
        let payload = LeadPayload::calc(
            "AZ-202501-1000".to_string(),
            "PETG".to_string(),
            QualityTier::Hd,
            250.0,
            11813,
            utm,
        );

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "lead_id": "AZ-202501-1000",
                "type": "calc",
                "material": "PETG",
                "quality": "hd",
                "volume_cm3": 250.0,
                "price_est": 11813,
                "utm": { "referrer": "" }
            })
        );
    }

    #[test]
    fn test_file_payload_shape() {
        let payload = LeadPayload::file(
            "AZ-202501-1000".to_string(),
            true,
            Contact {
                name: "Иван".to_string(),
                phone: "+7 (916) 123-45-67".to_string(),
            },
            vec![LeadFile {
                name: "part.stl".to_string(),
                size: 2048,
            }],
            BTreeMap::new(),
        );

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], "file");
        assert_eq!(value["consent"], true);
        assert_eq!(value["contact"]["phone"], "+7 (916) 123-45-67");
        assert_eq!(value["files"][0]["size"], 2048);
        assert!(value.get("material").is_none());
        assert!(value.get("price_est").is_none());
    }
}

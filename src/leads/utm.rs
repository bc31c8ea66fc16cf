use std::collections::{BTreeMap, HashMap};

/// Campaign parameters copied into every lead
pub const UTM_KEYS: [&str; 5] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_content",
    "utm_term",
];

/// Attribution map: non-empty UTM values plus the referrer (always present)
pub fn capture_utm(query: &HashMap<String, String>, referrer: Option<&str>) -> BTreeMap<String, String> {
    let mut out: BTreeMap<String, String> = UTM_KEYS
        .iter()
        .filter_map(|key| {
            query
                .get(*key)
                .filter(|value| !value.is_empty())
                .map(|value| (key.to_string(), value.clone()))
        })
        .collect();
    out.insert("referrer".to_string(), referrer.unwrap_or_default().to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_known_keys_verbatim() {
        let query: HashMap<String, String> = [
            ("utm_source", "yandex"),
            ("utm_campaign", "Печать 3D"),
            ("utm_term", ""),
            ("gclid", "abc"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let utm = capture_utm(&query, Some("https://ya.ru/"));
        assert_eq!(utm.len(), 3);
        assert_eq!(utm["utm_source"], "yandex");
        assert_eq!(utm["utm_campaign"], "Печать 3D");
        assert_eq!(utm["referrer"], "https://ya.ru/");
        assert!(!utm.contains_key("utm_term"));
        assert!(!utm.contains_key("gclid"));
    }

    #[test]
    fn test_referrer_defaults_to_empty() {
        let utm = capture_utm(&HashMap::new(), None);
        assert_eq!(utm.len(), 1);
        assert_eq!(utm["referrer"], "");
    }
}

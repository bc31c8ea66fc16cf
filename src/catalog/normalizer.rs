use std::collections::HashSet;

use tracing::debug;

use crate::catalog::collation::compare_ru;
use crate::catalog::csv::CsvRow;
use crate::catalog::models::Material;

const BRAND_KEYS: &[&str] = &["Бренд", "Brand"];
const SERIES_KEYS: &[&str] = &["Серия", "Grade", "Марка", "Модификация"];
const NAME_KEYS: &[&str] = &[
    "Название материала",
    "Материал",
    "Материал/смола",
    "Наименование",
    "Name",
];
const TECH_KEYS: &[&str] = &["Технология", "tech", "Tech"];
const TAG_KEYS: &[&str] = &["Назначение", "Свойства", "tag", "Notes"];
const MULTIPLIER_KEYS: &[&str] = &["Коэф", "Multiplier", "price_multiplier", "Коэффициент", "Кф"];

/// Display name used when a row names nothing at all
pub const GENERIC_MATERIAL_NAME: &str = "Материал";

/// First non-blank value among the candidate columns
fn pick(row: &CsvRow, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| row.get(key))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Infer a price multiplier from keywords in a material description
///
/// Checks are ordered: carbon-filled nylon (PA + CF) wins over everything else.
pub fn guess_multiplier(text: &str) -> f64 {
    let s = text.to_uppercase();
    if s.contains("PA") && s.contains("CF") {
        2.1
    } else if s.contains("TPU") {
        1.6
    } else if s.contains("ASA") {
        1.2
    } else if s.contains("ABS") {
        1.15
    } else if s.contains("RESIN") {
        1.8
    } else {
        1.0
    }
}

/// Parse a spreadsheet number leniently: decimal comma, optional exponent,
/// trailing junk allowed.
///
/// Returns `None` for blanks, non-numbers and zero.
pub fn parse_multiplier(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replacen(',', ".", 1);
    let bytes = normalized.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    // exponent only counts when it carries digits: "2e" reads as 2
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    normalized[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value != 0.0)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Build one material from a spreadsheet row
pub fn normalize_row(row: &CsvRow) -> Material {
    let brand = pick(row, BRAND_KEYS);
    let series = pick(row, SERIES_KEYS);
    let material = pick(row, NAME_KEYS);

    let parts: Vec<&str> = [brand.as_str(), series.as_str(), material.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    let name = if parts.is_empty() {
        GENERIC_MATERIAL_NAME.to_string()
    } else {
        parts.join(" ")
    };

    let tech = pick(row, TECH_KEYS);
    let tag = pick(row, TAG_KEYS);
    let multiplier = parse_multiplier(&pick(row, MULTIPLIER_KEYS))
        .unwrap_or_else(|| guess_multiplier(&format!("{} {} {}", name, tech, tag)));

    Material {
        name,
        tech,
        tag,
        multiplier,
    }
}

/// Turn spreadsheet rows into a deduplicated, sorted material list
pub fn normalize_materials(rows: &[CsvRow]) -> Vec<Material> {
    let mut seen = HashSet::new();
    let mut materials: Vec<Material> = rows
        .iter()
        .map(normalize_row)
        .filter(|m| seen.insert(m.name.clone()))
        .collect();

    materials.sort_by(|a, b| compare_ru(&a.name, &b.name));

    debug!(
        "Normalized {} rows into {} materials",
        rows.len(),
        materials.len()
    );
    materials
}

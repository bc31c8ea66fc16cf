use chrono::{DateTime, Datelike, FixedOffset, Utc};
use rand::Rng;

/// Moscow time, fixed UTC+3 (no DST since 2014)
pub fn moscow_offset() -> FixedOffset {
    FixedOffset::east_opt(3 * 3600).expect("UTC+3 is a valid offset")
}

/// Shift a UTC instant to Moscow wall-clock time
pub fn to_msk(at: DateTime<Utc>) -> DateTime<FixedOffset> {
    at.with_timezone(&moscow_offset())
}

/// Lead ID `AZ-YYYYMM-NNNN` for a given instant and sequence number
pub fn format_lead_id(at: DateTime<Utc>, seq: u16) -> String {
    let msk = to_msk(at);
    format!("AZ-{}{:02}-{}", msk.year(), msk.month(), seq)
}

/// Fresh lead ID with a random 4-digit suffix.
///
/// Not guaranteed unique; the CRM owns deduplication.
pub fn generate_lead_id() -> String {
    let seq = rand::thread_rng().gen_range(1000..=9999);
    format_lead_id(Utc::now(), seq)
}

pub mod client;
pub mod files;
pub mod form;
pub mod id;
pub mod models;
pub mod utm;
pub mod validation;

pub use client::{resolve_endpoint, LeadSubmitter};
pub use files::{bytes_to_nice, merge_files, LeadFile};
pub use form::{validate_upload_form, UploadForm};
pub use id::generate_lead_id;
pub use models::{Contact, LeadPayload, LeadType};
pub use utm::capture_utm;
pub use validation::{format_phone, is_valid_name, is_valid_phone, phone_flag};

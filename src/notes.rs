pub mod types;
pub mod validation;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;

// Server timestamps are RFC 3339; anything else is shown as-is.
pub fn format_created(raw: &str) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year]");
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .and_then(|timestamp| timestamp.format(&format).ok())
        .unwrap_or_else(|| raw.to_string())
}

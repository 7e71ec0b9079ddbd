use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub fn now_ts() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}

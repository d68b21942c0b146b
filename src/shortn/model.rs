use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One past shortening, as persisted in the history document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Opaque. New entries get a v4 UUID, but documents from other writers
    /// may carry any string.
    pub id: String,
    /// Percent-encoded original URL. Use [`HistoryEntry::decoded_long_url`] for display.
    pub long_url: String,
    pub short_url: String,
    pub service: String,
    #[serde(rename = "date", with = "utc_date")]
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(long_url: &str, short_url: String, service: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            long_url: urlencoding::encode(long_url).into_owned(),
            short_url,
            service,
            created_at: Utc::now(),
        }
    }

    /// `+` reads as a space, so documents whose URLs were form-encoded
    /// decode the same as ours. A literal `+` is always stored as `%2B`.
    pub fn decoded_long_url(&self) -> String {
        let long_url = self.long_url.replace('+', " ");
        urlencoding::decode(&long_url)
            .map(|s| s.into_owned())
            .unwrap_or(long_url)
    }
}

/// The single persisted unit: every entry, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryDocument {
    pub items: Vec<HistoryEntry>,
}

/// Timestamps are written as RFC 3339. Documents written by older releases
/// carry no zone (`2020-01-01T10:00:00`); those are read as UTC.
mod utc_date {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(date.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&raw, NAIVE_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_entry_encodes_long_url() {
        let entry = HistoryEntry::new(
            "https://example.com/a b?q=1&r=2",
            "https://tinyurl.com/abc".into(),
            "tinyurl".into(),
        );
        assert!(!entry.long_url.contains('/'));
        assert!(!entry.long_url.contains(' '));
        assert_eq!(entry.decoded_long_url(), "https://example.com/a b?q=1&r=2");
    }

    #[test]
    fn decodes_form_encoded_spaces() {
        let mut entry = HistoryEntry::new("a+b c", "http://s/x".into(), "isgood".into());
        assert_eq!(entry.long_url, "a%2Bb%20c");
        assert_eq!(entry.decoded_long_url(), "a+b c");

        entry.long_url = "https%3A%2F%2Fexample.com%2F%3Fq%3Da+b".into();
        assert_eq!(entry.decoded_long_url(), "https://example.com/?q=a b");
    }

    #[test]
    fn serializes_with_document_field_names() {
        let entry = HistoryEntry::new("example.com", "http://s/x".into(), "isgood".into());
        let value = serde_json::to_value(&entry).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["id", "longUrl", "shortUrl", "service", "date"] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
        assert_eq!(obj.len(), 5);
    }

    #[test]
    fn reads_zoneless_dates_as_utc() {
        let json = r#"{"items":[{"id":"7d8f5c1e-4d0a-4a53-9a1e-2f6b1c3d4e5f","longUrl":"http%3A%2F%2Fexample.com","shortUrl":"http://s/1","service":"bitly","date":"2019-03-02T10:20:30"}]}"#;
        let doc: HistoryDocument = serde_json::from_str(json).unwrap();
        let entry = &doc.items[0];
        assert_eq!(entry.created_at.to_rfc3339(), "2019-03-02T10:20:30+00:00");
        assert_eq!(entry.decoded_long_url(), "http://example.com");
    }

    #[test]
    fn reads_non_uuid_ids() {
        let json = r#"{"items":[{"id":"legacy-1","longUrl":"a.com","shortUrl":"http://s/1","service":"isgood","date":"2020-01-01T10:00:00"}]}"#;
        let doc: HistoryDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.items[0].id, "legacy-1");
    }

    #[test]
    fn ids_do_not_collide() {
        let ids: HashSet<String> = (0..10_000)
            .map(|_| HistoryEntry::new("example.com", "s".into(), "tinyurl".into()).id)
            .collect();
        assert_eq!(ids.len(), 10_000);
    }
}

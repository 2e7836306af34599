// Projection formatting.
// Renders the selected fields of the first N records, with defaults for absent fields.

use std::fmt;

use crate::record::Record;

/// Marker for a requested field a record does not have.
pub const NOT_AVAILABLE: &str = "n/a";

/// Fields printed when none are requested.
pub const DEFAULT_FIELDS: [&str; 3] = ["path", "import_count", "synopsis"];

/// Value shown for an absent field.
fn default_for(field: &str) -> &'static str {
    match field {
        "fork" => "false",
        "stars" => "0",
        _ => NOT_AVAILABLE,
    }
}

/// Rendered view of a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// One block of `field: value` lines per shown record.
    pub blocks: Vec<Vec<String>>,
    /// Number of records asked for.
    pub requested: usize,
    /// Number of records that were available.
    pub available: usize,
    separated: bool,
}

impl Listing {
    /// Whether fewer records were shown than requested.
    pub fn is_truncated(&self) -> bool {
        self.requested > self.available
    }

    pub fn truncation_notice(&self) -> Option<String> {
        self.is_truncated().then(|| {
            format!(
                "Only {}(<{}) packages exist, list them all",
                self.available, self.requested
            )
        })
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            for line in block {
                writeln!(f, "{}", line)?;
            }
            if self.separated {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Project `fields` of at most `limit` records, in record order.
///
/// A limit past the end of `records` shows every record.
pub fn render<S: AsRef<str>>(records: &[Record], fields: &[S], limit: usize) -> Listing {
    let shown = limit.min(records.len());
    let blocks = records[..shown]
        .iter()
        .map(|record| {
            fields
                .iter()
                .map(|field| {
                    let field = field.as_ref();
                    match record.get(field) {
                        Some(value) => format!("{}: {}", field, value),
                        None => format!("{}: {}", field, default_for(field)),
                    }
                })
                .collect()
        })
        .collect();

    Listing {
        blocks,
        requested: limit,
        available: records.len(),
        separated: fields.len() > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;

    fn package(path: &str, import_count: i64) -> Record {
        [
            ("path", Value::from(path)),
            ("import_count", Value::Int(import_count)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_defaults_for_absent_fields() {
        let records = vec![package("net/http", 100)];
        let listing = render(&records, &["stars", "fork", "synopsis"], 10);

        assert_eq!(
            listing.blocks,
            vec![vec![
                "stars: 0".to_string(),
                "fork: false".to_string(),
                "synopsis: n/a".to_string(),
            ]]
        );
    }

    #[test]
    fn test_present_values_are_rendered() {
        let mut record = package("github.com/micro/go-micro/client", 971);
        record.insert("score", 0.99);
        record.insert("fork", true);
        let listing = render(&[record], &["path", "import_count", "score", "fork"], 1);

        assert_eq!(
            listing.to_string(),
            "path: github.com/micro/go-micro/client\nimport_count: 971\nscore: 0.99\nfork: true\n\n"
        );
    }

    #[test]
    fn test_limit_clamped_to_available() {
        let records = vec![package("a", 1), package("b", 2)];
        let listing = render(&records, &["path"], 10);

        assert_eq!(listing.len(), 2);
        assert!(listing.is_truncated());
        assert_eq!(
            listing.truncation_notice().as_deref(),
            Some("Only 2(<10) packages exist, list them all")
        );
    }

    #[test]
    fn test_limit_takes_leading_records() {
        let records = vec![package("a", 1), package("b", 2), package("c", 3)];
        let listing = render(&records, &["path"], 2);

        assert_eq!(listing.to_string(), "path: a\npath: b\n");
        assert!(!listing.is_truncated());
        assert!(listing.truncation_notice().is_none());
    }

    #[test]
    fn test_multi_field_blocks_are_separated() {
        let records = vec![package("a", 1), package("b", 2)];
        let listing = render(&records, &DEFAULT_FIELDS, 2);

        assert_eq!(
            listing.to_string(),
            "path: a\nimport_count: 1\nsynopsis: n/a\n\npath: b\nimport_count: 2\nsynopsis: n/a\n\n"
        );
    }

    #[test]
    fn test_empty_input() {
        let listing = render::<&str>(&[], &["path"], 0);
        assert!(listing.is_empty());
        assert_eq!(listing.to_string(), "");
        assert!(!listing.is_truncated());
    }

    #[test]
    fn test_render_does_not_mutate_input() {
        let records = vec![package("a", 1)];
        let before = records.clone();
        let _ = render(&records, &["stars"], 5);
        assert_eq!(records, before);
    }
}

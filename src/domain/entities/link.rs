//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with click metadata.
///
/// `short` is unique across all live links. `full_url` is validated once at
/// creation time and never re-validated. `clicks` is monotonically
/// non-decreasing; only the redirect path mutates it.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub short: String,
    pub full_url: String,
    pub clicks: i64,
    /// `None` until the first redirect, then updated on every redirect.
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        short: String,
        full_url: String,
        clicks: i64,
        last_clicked: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short,
            full_url,
            clicks,
            last_clicked,
            created_at,
        }
    }

    /// Returns true if the link has been visited at least once.
    pub fn has_been_clicked(&self) -> bool {
        self.last_clicked.is_some()
    }
}

/// Input data for creating a new link.
///
/// The code is already resolved by the time this struct exists: either the
/// caller's validated custom code or a generated one.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short: String,
    pub full_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            0,
            None,
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.short, "abc123");
        assert_eq!(link.full_url, "https://example.com");
        assert_eq!(link.clicks, 0);
        assert_eq!(link.created_at, now);
        assert!(!link.has_been_clicked());
    }

    #[test]
    fn test_link_has_been_clicked() {
        let link = Link::new(
            2,
            "xyz789".to_string(),
            "https://rust-lang.org".to_string(),
            3,
            Some(Utc::now()),
            Utc::now(),
        );

        assert!(link.has_been_clicked());
    }
}

//! Transient messages shown above the grid
//!
//! The session holds a single notice slot, so raising a new notice replaces
//! the pending one together with its expiry.

use chrono::NaiveDateTime;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Submitted guess is not an acceptable word
    InvalidWord,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord => f.write_str("Not in word list"),
        }
    }
}

/// A message that disappears at `expires_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub expires_at: NaiveDateTime,
}

impl Notice {
    #[must_use]
    pub const fn new(kind: NoticeKind, expires_at: NaiveDateTime) -> Self {
        Self { kind, expires_at }
    }

    #[must_use]
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        now >= self.expires_at
    }

    /// Text for display
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    #[test]
    fn expires_at_deadline() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let notice = Notice::new(NoticeKind::InvalidWord, start + Duration::seconds(2));

        assert!(!notice.is_expired(start));
        assert!(!notice.is_expired(start + Duration::milliseconds(1999)));
        assert!(notice.is_expired(start + Duration::seconds(2)));
        assert_eq!(notice.message(), "Not in word list");
    }
}

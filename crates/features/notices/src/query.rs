use crate::lifecycle::classify_at;
use campus_domain::notice::Notice;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Which side of the lifecycle a listing shows.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum NoticeStatus {
    #[default]
    All,
    Active,
    Archived,
}

/// Listing filters, applied after classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams), into_params(parameter_in = Query))]
pub struct NoticeQuery {
    pub status: NoticeStatus,
    /// Case-insensitive exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring of title or description.
    pub q: Option<String>,
}

impl NoticeQuery {
    #[must_use]
    pub fn status(status: NoticeStatus) -> Self {
        Self { status, ..Self::default() }
    }

    /// Classifies at `now` and keeps matching notices in their original order.
    #[must_use]
    pub fn apply_at(&self, notices: &[Notice], now: DateTime<Utc>) -> Vec<Notice> {
        let category = non_blank(self.category.as_deref()).map(str::to_lowercase);
        let needle = non_blank(self.q.as_deref()).map(str::to_lowercase);

        classify_at(notices, now)
            .into_iter()
            .filter(|notice| match self.status {
                NoticeStatus::All => true,
                NoticeStatus::Active => !notice.is_archived,
                NoticeStatus::Archived => notice.is_archived,
            })
            .filter(|notice| {
                category.as_deref().is_none_or(|wanted| {
                    notice.category.as_deref().is_some_and(|c| c.trim().to_lowercase() == wanted)
                })
            })
            .filter(|notice| {
                needle.as_deref().is_none_or(|needle| {
                    notice.title.to_lowercase().contains(needle)
                        || notice
                            .description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(needle))
                })
            })
            .collect()
    }

    #[must_use]
    pub fn apply(&self, notices: &[Notice]) -> Vec<Notice> {
        self.apply_at(notices, Utc::now())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn sample() -> Vec<Notice> {
        vec![
            Notice::new("1", "Midterm Schedule", "2024-02-01")
                .expires("2024-03-01")
                .category("Exam"),
            Notice::new("2", "Lab Safety Training", "2024-02-05")
                .description("Mandatory for all new research assistants")
                .category("Research"),
            Notice::new("3", "Final Exam Routine", "2024-04-01")
                .expires("2024-06-30")
                .category("exam"),
        ]
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap()
    }

    fn ids(notices: &[Notice]) -> Vec<&str> {
        notices.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn status_filters() {
        let notices = sample();
        assert_eq!(ids(&NoticeQuery::default().apply_at(&notices, now())), ["1", "2", "3"]);
        assert_eq!(ids(&NoticeQuery::status(NoticeStatus::Active).apply_at(&notices, now())), ["2", "3"]);
        assert_eq!(ids(&NoticeQuery::status(NoticeStatus::Archived).apply_at(&notices, now())), ["1"]);
    }

    #[test]
    fn category_and_search_are_case_insensitive() {
        let notices = sample();
        let query = NoticeQuery { category: Some("EXAM".to_owned()), ..NoticeQuery::default() };
        assert_eq!(ids(&query.apply_at(&notices, now())), ["1", "3"]);

        let query = NoticeQuery { q: Some("research".to_owned()), ..NoticeQuery::default() };
        assert_eq!(ids(&query.apply_at(&notices, now())), ["2"]);

        let query = NoticeQuery {
            status: NoticeStatus::Active,
            category: Some(" exam ".to_owned()),
            q: Some("ROUTINE".to_owned()),
        };
        assert_eq!(ids(&query.apply_at(&notices, now())), ["3"]);
    }

    #[test]
    fn blank_filters_are_ignored() {
        let query = NoticeQuery { category: Some("  ".to_owned()), q: Some(String::new()), ..NoticeQuery::default() };
        assert_eq!(query.apply_at(&sample(), now()).len(), 3);
    }

    #[test]
    fn status_parses_from_text() {
        assert_eq!(NoticeStatus::from_str("Archived").unwrap(), NoticeStatus::Archived);
        assert_eq!(NoticeStatus::Active.to_string(), "active");
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One listable piece of content: a blog post, a case study or a service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub body: Vec<String>,
}

/// An image reference. `alt` is not optional: anything with a `src` has alt text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Display values that depend on what kind of content an item is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Metadata {
    Blog {
        author: Author,
        date: NaiveDate,
        read_minutes: u32,
    },
    CaseStudy {
        client: String,
        year: u16,
    },
    Service {
        icon: String,
        #[serde(default)]
        features: Vec<String>,
        #[serde(default)]
        technologies: Vec<String>,
    },
    #[default]
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaKind {
    Date,
    ReadTime,
    Client,
    Year,
}

impl MetaKind {
    pub fn css_class(self) -> &'static str {
        match self {
            MetaKind::Date => "meta-date",
            MetaKind::ReadTime => "meta-read-time",
            MetaKind::Client => "meta-client",
            MetaKind::Year => "meta-year",
        }
    }
}

/// One cell of a card's metadata row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaEntry {
    pub kind: MetaKind,
    pub text: String,
}

impl Metadata {
    /// The metadata row, in display order.
    pub fn entries(&self) -> Vec<MetaEntry> {
        match self {
            Metadata::Blog {
                date, read_minutes, ..
            } => vec![
                MetaEntry {
                    kind: MetaKind::Date,
                    text: format_date(*date),
                },
                MetaEntry {
                    kind: MetaKind::ReadTime,
                    text: format!("{} min read", read_minutes),
                },
            ],
            Metadata::CaseStudy { client, year } => vec![
                MetaEntry {
                    kind: MetaKind::Client,
                    text: client.clone(),
                },
                MetaEntry {
                    kind: MetaKind::Year,
                    text: year.to_string(),
                },
            ],
            Metadata::Service { .. } | Metadata::None => Vec::new(),
        }
    }

    pub fn author(&self) -> Option<&Author> {
        match self {
            Metadata::Blog { author, .. } => Some(author),
            _ => None,
        }
    }

    pub fn icon(&self) -> Option<&str> {
        match self {
            Metadata::Service { icon, .. } => Some(icon.as_str()),
            _ => None,
        }
    }
}

/// "March 25, 2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_entries_are_date_then_read_time() {
        let meta = Metadata::Blog {
            author: Author {
                name: "Sarah Johnson".into(),
                role: "Design Lead".into(),
                avatar: None,
            },
            date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            read_minutes: 6,
        };
        let entries = meta.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, MetaKind::Date);
        assert_eq!(entries[0].text, "March 5, 2025");
        assert_eq!(entries[1].text, "6 min read");
    }

    #[test]
    fn case_study_entries_are_client_then_year() {
        let meta = Metadata::CaseStudy {
            client: "Echo Inc.".into(),
            year: 2023,
        };
        let texts: Vec<String> = meta.entries().into_iter().map(|e| e.text).collect();
        assert_eq!(texts, vec!["Echo Inc.", "2023"]);
    }

    #[test]
    fn service_and_none_have_no_row() {
        let service = Metadata::Service {
            icon: "code".into(),
            features: vec![],
            technologies: vec![],
        };
        assert!(service.entries().is_empty());
        assert!(Metadata::None.entries().is_empty());
        assert_eq!(service.icon(), Some("code"));
    }

    #[test]
    fn metadata_is_tagged_by_kind() {
        let json = r#"{"kind":"case_study","client":"Pulse Health","year":2023}"#;
        let meta: Metadata = serde_json::from_str(json).unwrap();
        assert_eq!(
            meta,
            Metadata::CaseStudy {
                client: "Pulse Health".into(),
                year: 2023
            }
        );
    }

    #[test]
    fn image_without_alt_does_not_deserialize() {
        let json = r#"{"src":"/assets/a.webp"}"#;
        assert!(serde_json::from_str::<Image>(json).is_err());
    }
}

use log::error;

use super::error::ContentError;
use super::item::ContentItem;
use super::store::ContentStore;

const BLOG_JSON: &str = include_str!("../../content/blog.json");
const CASE_STUDIES_JSON: &str = include_str!("../../content/case_studies.json");
const SERVICES_JSON: &str = include_str!("../../content/services.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Blog,
    CaseStudies,
    Services,
}

impl Collection {
    /// Route prefix for detail pages, if the collection has any.
    pub fn path_prefix(self) -> Option<&'static str> {
        match self {
            Collection::Blog => Some("/blog"),
            Collection::CaseStudies => Some("/case-studies"),
            Collection::Services => None,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Blog => "blog.json",
            Collection::CaseStudies => "case_studies.json",
            Collection::Services => "services.json",
        }
    }

    fn embedded_json(self) -> &'static str {
        match self {
            Collection::Blog => BLOG_JSON,
            Collection::CaseStudies => CASE_STUDIES_JSON,
            Collection::Services => SERVICES_JSON,
        }
    }
}

/// Parses a JSON array of items, checks the fields every card relies on and
/// fills in detail links the JSON leaves out.
pub fn parse(collection: Collection, json: &str) -> Result<ContentStore, ContentError> {
    let mut items: Vec<ContentItem> = serde_json::from_str(json)?;
    for item in &mut items {
        validate(item)?;
        if item.href.is_none() {
            item.href = collection
                .path_prefix()
                .map(|prefix| format!("{}/{}", prefix, item.slug));
        }
    }
    ContentStore::new(items)
}

fn validate(item: &ContentItem) -> Result<(), ContentError> {
    let empty = |field: &'static str| ContentError::EmptyField {
        slug: item.slug.clone(),
        field,
    };
    if item.slug.trim().is_empty() {
        return Err(empty("slug"));
    }
    if item.title.trim().is_empty() {
        return Err(empty("title"));
    }
    if item.description.trim().is_empty() {
        return Err(empty("description"));
    }
    if let Some(image) = &item.image {
        if image.alt.trim().is_empty() {
            return Err(ContentError::MissingAlt {
                slug: item.slug.clone(),
            });
        }
    }
    Ok(())
}

pub fn embedded(collection: Collection) -> Result<ContentStore, ContentError> {
    parse(collection, collection.embedded_json())
}

/// The embedded collection, or an empty store if it fails to load. Pages
/// then show their normal empty state.
pub fn embedded_or_empty(collection: Collection) -> ContentStore {
    embedded(collection).unwrap_or_else(|e| {
        error!("Failed to load {:?} catalog: {}", collection, e);
        ContentStore::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::item::Metadata;

    #[test]
    fn embedded_catalogs_load() {
        for collection in [Collection::Blog, Collection::CaseStudies, Collection::Services] {
            let store = embedded(collection).unwrap();
            assert!(!store.is_empty(), "{:?} is empty", collection);
        }
    }

    #[test]
    fn blog_posts_get_detail_links_and_blog_metadata() {
        let store = embedded(Collection::Blog).unwrap();
        for post in store.items() {
            assert_eq!(post.href.as_deref(), Some(format!("/blog/{}", post.slug).as_str()));
            assert!(matches!(post.metadata, Metadata::Blog { .. }));
        }
        assert_eq!(store.categories(), vec!["Design", "Development", "AI", "Mobile"]);
    }

    #[test]
    fn services_have_no_links() {
        let store = embedded(Collection::Services).unwrap();
        assert!(store.items().iter().all(|s| s.href.is_none()));
        assert!(store.items().iter().all(|s| s.metadata.icon().is_some()));
    }

    #[test]
    fn explicit_href_is_kept() {
        let json = r#"[{"slug":"a","title":"A","description":"d","category":"Design","href":"https://example.com"}]"#;
        let store = parse(Collection::Blog, json).unwrap();
        assert_eq!(store.items()[0].href.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn empty_alt_is_rejected() {
        let json = r#"[{"slug":"a","title":"A","description":"d","category":"Design","image":{"src":"/x.webp","alt":" "}}]"#;
        let err = parse(Collection::Blog, json).unwrap_err();
        assert!(matches!(err, ContentError::MissingAlt { .. }));
    }

    #[test]
    fn empty_title_is_rejected() {
        let json = r#"[{"slug":"a","title":"","description":"d","category":"Design"}]"#;
        let err = parse(Collection::CaseStudies, json).unwrap_err();
        assert!(matches!(err, ContentError::EmptyField { field: "title", .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse(Collection::Blog, "{not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}

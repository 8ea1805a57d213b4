use super::item::ContentItem;

pub const ALL_CATEGORIES: &str = "All";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value)
        }
    }
}

/// What the visitor has typed and picked on a listing page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
}

impl FilterState {
    pub fn new(query: impl Into<String>, category: impl Into<CategoryFilter>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn is_reset(&self) -> bool {
        self.query.is_empty() && self.category == CategoryFilter::All
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `?q=...&category=...`, or an empty string for the reset state.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if !self.query.is_empty() {
            pairs.push(format!("q={}", urlencoding::encode(&self.query)));
        }
        if let CategoryFilter::Only(category) = &self.category {
            pairs.push(format!("category={}", urlencoding::encode(category)));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }

    /// Reads `q` and `category` from a location search string. Unknown keys
    /// and undecodable values are ignored.
    pub fn from_query_string(search: &str) -> Self {
        let mut state = Self::default();
        let search = search.strip_prefix('?').unwrap_or(search);
        for pair in search.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let raw = raw.replace('+', " ");
            let Ok(value) = urlencoding::decode(&raw) else {
                continue;
            };
            match key {
                "q" => state.query = value.into_owned(),
                "category" if !value.is_empty() => state.category = value.into_owned().into(),
                _ => {}
            }
        }
        state
    }
}

/// A query folded to lowercase once, then checked against many items.
pub struct PreparedQuery {
    needle: String,
}

impl PreparedQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn matches(&self, item: &ContentItem) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let contains = |text: &str| text.to_lowercase().contains(&self.needle);
        contains(&item.title)
            || contains(&item.description)
            || item.tags.iter().any(|tag| contains(tag))
    }
}

/// Text match AND category match. Built once per filter pass.
pub struct FilterPredicate {
    query: PreparedQuery,
    category: CategoryFilter,
}

impl FilterPredicate {
    pub fn new(state: &FilterState) -> Self {
        Self {
            query: PreparedQuery::new(&state.query),
            category: state.category.clone(),
        }
    }

    pub fn matches(&self, item: &ContentItem) -> bool {
        self.query.matches(item) && self.category.matches(&item.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::item::Metadata;

    fn matches(item: &ContentItem, state: &FilterState) -> bool {
        FilterPredicate::new(state).matches(item)
    }

    fn item(title: &str, description: &str, category: &str, tags: &[&str]) -> ContentItem {
        ContentItem {
            slug: title.to_lowercase().replace(' ', "-"),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: None,
            href: None,
            metadata: Metadata::None,
            featured: false,
            body: vec![],
        }
    }

    #[test]
    fn empty_query_matches_everything_in_category() {
        let design = item("Design Systems", "Scale", "Design", &[]);
        assert!(matches(&design, &FilterState::default()));
        assert!(matches(&design, &FilterState::new("", "Design")));
    }

    #[test]
    fn query_checks_title_description_and_tags() {
        let post = item("Scaling", "Lessons from the trenches", "Development", &["Microservices"]);
        assert!(matches(&post, &FilterState::new("scal", "All")));
        assert!(matches(&post, &FilterState::new("TRENCHES", "All")));
        assert!(matches(&post, &FilterState::new("micro", "All")));
        assert!(!matches(&post, &FilterState::new("kotlin", "All")));
    }

    #[test]
    fn item_without_tags_matches_on_title_or_description() {
        let post = item("Next-Generation CSS", "New styling features", "Development", &[]);
        assert!(matches(&post, &FilterState::new("css", "All")));
        assert!(matches(&post, &FilterState::new("styling", "All")));
    }

    #[test]
    fn category_is_exact_and_case_sensitive() {
        let post = item("Design Systems", "Scale", "Design", &[]);
        assert!(matches(&post, &FilterState::new("", "Design")));
        assert!(!matches(&post, &FilterState::new("", "Development")));
        assert!(!matches(&post, &FilterState::new("", "design")));
    }

    #[test]
    fn both_predicates_must_hold() {
        let post = item("Design Systems", "Scale", "Design", &[]);
        assert!(!matches(&post, &FilterState::new("systems", "AI")));
        assert!(!matches(&post, &FilterState::new("nothing", "Design")));
    }

    #[test]
    fn all_sentinel_parses_to_all() {
        assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("AI"),
            CategoryFilter::Only("AI".to_string())
        );
        assert_eq!(CategoryFilter::All.label(), "All");
    }

    #[test]
    fn reset_state() {
        let mut state = FilterState::new("ai", "AI");
        assert!(!state.is_reset());
        state.reset();
        assert!(state.is_reset());
        assert_eq!(state.to_query_string(), "");
    }

    #[test]
    fn query_string_round_trip() {
        let state = FilterState::new("web design", "Mobile Application");
        let encoded = state.to_query_string();
        assert_eq!(encoded, "?q=web%20design&category=Mobile%20Application");
        assert_eq!(FilterState::from_query_string(&encoded), state);
    }

    #[test]
    fn query_string_accepts_plus_and_ignores_unknown_keys() {
        let state = FilterState::from_query_string("?q=ethical+ai&utm_source=x&category=All");
        assert_eq!(state.query, "ethical ai");
        assert_eq!(state.category, CategoryFilter::All);
        assert_eq!(FilterState::from_query_string(""), FilterState::default());
    }
}

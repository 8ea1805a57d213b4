use std::collections::HashSet;
use std::rc::Rc;

use super::error::ContentError;
use super::filter::{FilterPredicate, FilterState};
use super::item::ContentItem;

/// An ordered, read-only collection of content items.
///
/// Cloning is cheap (the items sit behind an `Rc`), so a store can be handed
/// to components as a prop. Every query returns a fresh `Vec` borrowing from
/// the store; the items themselves never change.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentStore {
    items: Rc<[ContentItem]>,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self {
            items: Rc::from(Vec::new()),
        }
    }
}

impl ContentStore {
    pub fn new(items: Vec<ContentItem>) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(item.slug.clone()));
            }
        }
        Ok(Self {
            items: items.into(),
        })
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn matching<'a>(&'a self, state: &FilterState) -> impl Iterator<Item = &'a ContentItem> + 'a {
        let predicate = FilterPredicate::new(state);
        self.items.iter().filter(move |item| predicate.matches(item))
    }

    /// Items matching `state`, in store order.
    pub fn filter(&self, state: &FilterState) -> Vec<&ContentItem> {
        self.matching(state).collect()
    }

    /// Always equal to `filter(state).len()`.
    pub fn count(&self, state: &FilterState) -> usize {
        self.matching(state).count()
    }

    pub fn featured(&self) -> Vec<&ContentItem> {
        self.items.iter().filter(|item| item.featured).collect()
    }

    pub fn featured_preview(&self, limit: usize) -> Vec<&ContentItem> {
        self.items
            .iter()
            .filter(|item| item.featured)
            .take(limit)
            .collect()
    }

    pub fn preview(&self, limit: usize) -> Vec<&ContentItem> {
        self.items.iter().take(limit).collect()
    }

    /// The grid under the featured strip. With no filters applied the
    /// featured items are already on screen, so they are left out.
    pub fn listing(&self, state: &FilterState) -> Vec<&ContentItem> {
        if state.is_reset() {
            self.items.iter().filter(|item| !item.featured).collect()
        } else {
            self.filter(state)
        }
    }

    /// Distinct categories, first appearance first.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    pub fn is_known_category(&self, category: &str) -> bool {
        self.items.iter().any(|item| item.category == category)
    }

    pub fn get(&self, slug: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.slug == slug)
    }

    /// Items in the same category first, then items sharing a tag.
    pub fn related(&self, slug: &str, limit: usize) -> Vec<&ContentItem> {
        let Some(current) = self.get(slug) else {
            return Vec::new();
        };
        let same_category = self
            .items
            .iter()
            .filter(|item| item.slug != current.slug && item.category == current.category);
        let shared_tag = self.items.iter().filter(|item| {
            item.category != current.category
                && item.tags.iter().any(|tag| current.tags.contains(tag))
        });
        same_category.chain(shared_tag).take(limit).collect()
    }

    /// The item after `slug`, wrapping around to the first.
    pub fn next_after(&self, slug: &str) -> Option<&ContentItem> {
        if self.items.len() < 2 {
            return None;
        }
        let index = self.items.iter().position(|item| item.slug == slug)?;
        self.items.get((index + 1) % self.items.len())
    }
}

use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::content::{catalog, remote, CategoryFilter, Collection, ContentStore, FilterState};

/// The embedded collection, swapped for the content server's copy if that
/// loads. A failed refresh leaves the embedded items on screen.
#[hook]
pub fn use_collection(collection: Collection) -> ContentStore {
    let store = use_state(|| catalog::embedded_or_empty(collection));

    {
        let store = store.clone();
        use_effect_with_deps(
            move |collection: &Collection| {
                let collection = *collection;
                spawn_local(async move {
                    match remote::fetch(collection).await {
                        Ok(fresh) => {
                            info!("Loaded {} {:?} items from content server", fresh.len(), collection);
                            store.set(fresh);
                        }
                        Err(e) => warn!("Keeping embedded {:?} catalog: {}", collection, e),
                    }
                });
                || ()
            },
            collection,
        );
    }

    (*store).clone()
}

/// Scroll to top only on initial mount
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}

/// Filter state from the current URL, so `/blog?q=UX` lands pre-filtered.
pub fn filter_state_from_location() -> FilterState {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .map(|search| FilterState::from_query_string(&search))
        .unwrap_or_default()
}

/// What sits under a listing heading.
#[derive(Debug, PartialEq, Eq)]
pub enum GridView {
    /// Nothing matches the filters.
    NoMatches,
    /// Matches exist but the featured strip already shows all of them.
    AllFeatured,
    Grid,
}

pub fn grid_view(count: usize, listing_len: usize) -> GridView {
    if count == 0 {
        GridView::NoMatches
    } else if listing_len == 0 {
        GridView::AllFeatured
    } else {
        GridView::Grid
    }
}

pub enum FilterAction {
    Query(String),
    Category(CategoryFilter),
    Reset,
}

impl Reducible for FilterState {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            FilterAction::Query(query) => (*self).clone().with_query(query),
            FilterAction::Category(category) => (*self).clone().with_category(category),
            FilterAction::Reset => {
                let mut next = (*self).clone();
                next.reset();
                next
            }
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub const PAGE_STYLES: &str = r#"
.listing-page {
    padding-top: 74px;
    min-height: 100vh;
    color: #ffffff;
}
.listing-hero {
    text-align: center;
    padding: 6rem 2rem 4rem;
}
.listing-hero h1 {
    font-size: 3.5rem;
    margin-bottom: 1.5rem;
    background: linear-gradient(45deg, #fff, #7EB2FF);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.listing-hero p {
    font-size: 1.2rem;
    color: #999;
    max-width: 600px;
    margin: 0 auto;
}
.listing-section {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 2rem 4rem;
}
.listing-heading {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 2rem;
}
.listing-heading h2 {
    font-size: 1.75rem;
    margin: 0;
}
.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
    gap: 2rem;
    margin-bottom: 4rem;
}
.empty-state {
    text-align: center;
    padding: 3rem 2rem;
    background: rgba(26, 26, 26, 0.85);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 12px;
}
.empty-state p {
    color: #999;
}
.listing-note {
    text-align: center;
    color: #999;
}
@media (max-width: 768px) {
    .listing-hero {
        padding: 4rem 1rem 2rem;
    }
    .listing-hero h1 {
        font-size: 2.5rem;
    }
    .listing-section {
        padding: 0 1rem 3rem;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::item::Metadata;
    use crate::content::ContentItem;

    #[test]
    fn reducer_applies_query_and_category() {
        let state = Rc::new(FilterState::default());
        let state = state.reduce(FilterAction::Query("ux".into()));
        let state = state.reduce(FilterAction::Category(CategoryFilter::Only("Design".into())));
        assert_eq!(*state, FilterState::new("ux", "Design"));
        let state = state.reduce(FilterAction::Reset);
        assert!(state.is_reset());
    }

    #[test]
    fn reducer_keeps_the_same_rc_when_nothing_changes() {
        let state = Rc::new(FilterState::new("ai", "All"));
        let same = state.clone().reduce(FilterAction::Query("ai".into()));
        assert!(Rc::ptr_eq(&state, &same));
    }

    fn featured_item(slug: &str) -> ContentItem {
        ContentItem {
            slug: slug.into(),
            title: slug.into(),
            description: format!("About {}", slug),
            category: "Design".into(),
            tags: vec![],
            image: None,
            href: None,
            metadata: Metadata::None,
            featured: true,
            body: vec![],
        }
    }

    #[test]
    fn all_featured_store_does_not_leave_a_blank_grid() {
        let store = ContentStore::new(vec![featured_item("a"), featured_item("b")]).unwrap();
        let state = FilterState::default();
        let view = grid_view(store.count(&state), store.listing(&state).len());
        assert_eq!(view, GridView::AllFeatured);
    }

    #[test]
    fn grid_view_cases() {
        assert_eq!(grid_view(0, 0), GridView::NoMatches);
        assert_eq!(grid_view(3, 0), GridView::AllFeatured);
        assert_eq!(grid_view(3, 1), GridView::Grid);
    }
}

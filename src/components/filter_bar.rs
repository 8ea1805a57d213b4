use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::config;
use crate::content::filter::ALL_CATEGORIES;
use crate::content::CategoryFilter;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub categories: Vec<String>,
    pub active: CategoryFilter,
    pub on_category: Callback<CategoryFilter>,
    #[prop_or_default]
    pub query: String,
    /// Without this the bar only shows category chips.
    #[prop_or_default]
    pub on_query: Option<Callback<String>>,
    #[prop_or(AttrValue::from("Search..."))]
    pub placeholder: AttrValue,
}

/// Keeps the search box and its parent in step across debounced emits.
///
/// `T` is the pending timer handle; dropping it cancels the emit.
pub struct QueryTracker<T> {
    last_emitted: String,
    pending: Option<T>,
}

impl<T> QueryTracker<T> {
    pub fn new(query: String) -> Self {
        Self {
            last_emitted: query,
            pending: None,
        }
    }

    /// Replaces (and so cancels) any emit still waiting.
    pub fn schedule(&mut self, handle: T) {
        self.pending = Some(handle);
    }

    pub fn settled(&mut self, query: String) {
        self.last_emitted = query;
    }

    /// Called with the parent's query. When the parent changed it itself
    /// (e.g. "Clear Filters") the waiting emit is dropped and `true` is
    /// returned so the box can show the new query.
    pub fn follow_parent(&mut self, query: &str) -> bool {
        if self.last_emitted == query {
            return false;
        }
        self.pending.take();
        self.last_emitted = query.to_string();
        true
    }
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let text = use_state(|| props.query.clone());
    let tracker = use_mut_ref(|| QueryTracker::<Timeout>::new(props.query.clone()));

    {
        let text = text.clone();
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |query: &String| {
                if tracker.borrow_mut().follow_parent(query) {
                    text.set(query.clone());
                }
                || ()
            },
            props.query.clone(),
        );
    }

    let oninput = {
        let text = text.clone();
        let tracker = tracker.clone();
        let on_query = props.on_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            text.set(value.clone());

            let Some(on_query) = on_query.clone() else {
                return;
            };
            let weak = Rc::downgrade(&tracker);
            let timeout = Timeout::new(config::SEARCH_DEBOUNCE_MS, move || {
                debug!("Search query settled: {:?}", value);
                if let Some(tracker) = weak.upgrade() {
                    tracker.borrow_mut().settled(value.clone());
                }
                on_query.emit(value);
            });
            tracker.borrow_mut().schedule(timeout);
        })
    };

    let chip = |label: &str, filter: CategoryFilter| {
        let selected = props.active == filter;
        let onclick = {
            let on_category = props.on_category.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                debug!("Category selected: {}", filter.label());
                on_category.emit(filter.clone());
            })
        };
        html! {
            <button
                class={classes!("filter-chip", selected.then_some("active"))}
                aria-pressed={selected.to_string()}
                {onclick}
            >
                { label.to_string() }
            </button>
        }
    };

    html! {
        <div class="filter-bar">
            {
                if props.on_query.is_some() {
                    html! {
                        <input
                            type="search"
                            class="filter-search"
                            placeholder={props.placeholder.clone()}
                            value={(*text).clone()}
                            {oninput}
                        />
                    }
                } else {
                    html! {}
                }
            }
            <div class="filter-chips">
                { chip(ALL_CATEGORIES, CategoryFilter::All) }
                { for props.categories.iter().map(|category| {
                    chip(category, CategoryFilter::Only(category.clone()))
                }) }
            </div>
        </div>
    }
}

pub const FILTER_BAR_STYLES: &str = r#"
.filter-bar {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    align-items: center;
    padding: 1.5rem;
    background: rgba(26, 26, 26, 0.75);
    backdrop-filter: blur(5px);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 12px;
    margin-bottom: 3rem;
}
.filter-search {
    flex: 1 1 240px;
    padding: 0.75rem 1rem;
    background: rgba(0, 0, 0, 0.4);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 8px;
    color: #fff;
    font-size: 1rem;
}
.filter-search:focus {
    outline: none;
    border-color: rgba(30, 144, 255, 0.5);
}
.filter-chips {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}
.filter-chip {
    padding: 0.5rem 1rem;
    border-radius: 999px;
    border: none;
    background: rgba(255, 255, 255, 0.08);
    color: #ccc;
    cursor: pointer;
    transition: background 0.3s ease;
}
.filter-chip:hover {
    background: rgba(255, 255, 255, 0.15);
}
.filter-chip.active {
    background: #1E90FF;
    color: #fff;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_from_the_parent_drops_a_waiting_search() {
        let timer = Rc::new(());
        let mut tracker = QueryTracker::new(String::new());
        tracker.settled("u".to_string());
        tracker.schedule(timer.clone());
        assert_eq!(Rc::strong_count(&timer), 2);

        assert!(tracker.follow_parent(""));
        assert_eq!(Rc::strong_count(&timer), 1);
    }

    #[test]
    fn echo_of_our_own_emit_is_ignored() {
        let timer = Rc::new(());
        let mut tracker = QueryTracker::new(String::new());
        tracker.settled("ai".to_string());
        tracker.schedule(timer.clone());

        assert!(!tracker.follow_parent("ai"));
        assert_eq!(Rc::strong_count(&timer), 2);
    }

    #[test]
    fn newer_keystroke_replaces_the_waiting_one() {
        let first = Rc::new(());
        let mut tracker = QueryTracker::new(String::new());
        tracker.schedule(first.clone());
        tracker.schedule(Rc::new(()));
        assert_eq!(Rc::strong_count(&first), 1);
    }

    #[test]
    fn deep_linked_query_is_not_treated_as_a_change() {
        let mut tracker = QueryTracker::<()>::new("design".to_string());
        assert!(!tracker.follow_parent("design"));
        assert!(tracker.follow_parent("mobile"));
        assert!(!tracker.follow_parent("mobile"));
    }
}

use yew::prelude::*;

use super::shared::{
    filter_state_from_location, grid_view, use_collection, use_scroll_to_top, FilterAction,
    GridView,
};
use crate::components::button::{Button, ButtonVariant};
use crate::components::card::{Card, CardVariant};
use crate::components::filter_bar::FilterBar;
use crate::content::{CategoryFilter, Collection, FilterState};

pub fn results_heading(state: &FilterState, count: usize) -> String {
    if state.is_reset() {
        "All Articles".to_string()
    } else {
        format!("Search Results ({})", count)
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    use_scroll_to_top();
    let store = use_collection(Collection::Blog);
    let state = use_reducer(filter_state_from_location);

    let on_query = {
        let state = state.clone();
        Callback::from(move |query: String| state.dispatch(FilterAction::Query(query)))
    };
    let on_category = {
        let state = state.clone();
        Callback::from(move |category: CategoryFilter| state.dispatch(FilterAction::Category(category)))
    };
    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(FilterAction::Reset))
    };

    let categories: Vec<String> = store.categories().into_iter().map(str::to_string).collect();
    let count = store.count(&state);
    let listing = store.listing(&state);
    if let CategoryFilter::Only(category) = &state.category {
        if !store.is_known_category(category) {
            log::debug!("No blog category named {:?}", category);
        }
    }

    html! {
        <div class="listing-page">
            <section class="listing-hero">
                <h1>{"Our Blog"}</h1>
                <p>{"Insights and perspectives on design, development, and digital innovation from our team."}</p>
            </section>
            <section class="listing-section">
                <FilterBar
                    categories={categories}
                    active={state.category.clone()}
                    on_category={on_category}
                    query={state.query.clone()}
                    on_query={Some(on_query)}
                    placeholder="Search articles..."
                />

                {
                    if state.is_reset() && !store.featured().is_empty() {
                        html! {
                            <>
                                <h2 class="featured-heading">{"Featured Articles"}</h2>
                                <div class="card-grid card-grid--featured">
                                    { for store.featured().into_iter().map(|post| html! {
                                        <Card key={post.slug.clone()} item={post.clone()} variant={CardVariant::Blog} />
                                    }) }
                                </div>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }

                <div class="listing-heading">
                    <h2>{ results_heading(&state, count) }</h2>
                    {
                        if state.is_reset() {
                            html! {}
                        } else {
                            html! {
                                <Button variant={ButtonVariant::Ghost} onclick={on_reset.clone()}>
                                    {"Clear Filters"}
                                </Button>
                            }
                        }
                    }
                </div>

                {
                    match grid_view(count, listing.len()) {
                        GridView::NoMatches => html! {
                            <div class="empty-state">
                                <h3>{"No articles found"}</h3>
                                <p>{"Try adjusting your search or filter to find what you're looking for."}</p>
                                <Button variant={ButtonVariant::Outline} onclick={on_reset}>
                                    {"Reset Filters"}
                                </Button>
                            </div>
                        },
                        GridView::AllFeatured => html! {
                            <p class="listing-note">{"Every article is featured above."}</p>
                        },
                        GridView::Grid => html! {
                            <div class="card-grid">
                                { for listing.into_iter().map(|post| html! {
                                    <Card key={post.slug.clone()} item={post.clone()} variant={CardVariant::Blog} />
                                }) }
                            </div>
                        },
                    }
                }
            </section>
        </div>
    }
}

use yew::prelude::*;

use super::shared::{grid_view, use_collection, use_scroll_to_top, FilterAction, GridView};
use crate::components::card::{Card, CardOptions, CardVariant};
use crate::components::filter_bar::FilterBar;
use crate::content::{CategoryFilter, Collection, ContentItem, FilterState};

pub fn showcase_heading(count: usize) -> String {
    match count {
        1 => "Showcasing 1 project".to_string(),
        n => format!("Showcasing {} projects", n),
    }
}

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    use_scroll_to_top();
    let store = use_collection(Collection::CaseStudies);
    let state = use_reducer(FilterState::default);

    let on_category = {
        let state = state.clone();
        Callback::from(move |category: CategoryFilter| {
            state.dispatch(FilterAction::Category(category))
        })
    };

    let categories: Vec<String> = store.categories().into_iter().map(str::to_string).collect();
    let count = store.count(&state);
    let listing = store.listing(&state);
    let options = CardOptions::default().with_cta("View Case Study");
    let card = |item: &ContentItem| {
        html! {
            <Card
                key={item.slug.clone()}
                item={item.clone()}
                variant={CardVariant::CaseStudy}
                options={options.clone()}
            />
        }
    };

    html! {
        <div class="listing-page">
            <section class="listing-hero">
                <h1>{"Our Case Studies"}</h1>
                <p>{"Explore our portfolio of successful projects and discover how we help businesses achieve their digital goals."}</p>
            </section>
            <section class="listing-section">
                <div class="listing-heading">
                    <h2>{ showcase_heading(count) }</h2>
                </div>
                <FilterBar
                    categories={categories}
                    active={state.category.clone()}
                    on_category={on_category}
                />

                {
                    if state.category == CategoryFilter::All && !store.featured().is_empty() {
                        html! {
                            <>
                                <h2 class="featured-heading">{"Featured Projects"}</h2>
                                <div class="card-grid card-grid--featured">
                                    { for store.featured().into_iter().map(card) }
                                </div>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    match grid_view(count, listing.len()) {
                        GridView::NoMatches => html! {
                            <div class="empty-state">
                                <h3>{"No projects in this category yet"}</h3>
                                <p>{"Pick another category to see more of our work."}</p>
                            </div>
                        },
                        GridView::AllFeatured => html! {
                            <p class="listing-note">{"Every project is featured above."}</p>
                        },
                        GridView::Grid => html! {
                            <div class="card-grid">
                                { for listing.into_iter().map(card) }
                            </div>
                        },
                    }
                }
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_pluralises() {
        assert_eq!(showcase_heading(1), "Showcasing 1 project");
        assert_eq!(showcase_heading(0), "Showcasing 0 projects");
        assert_eq!(showcase_heading(6), "Showcasing 6 projects");
    }
}

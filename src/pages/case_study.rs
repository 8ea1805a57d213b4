use yew::prelude::*;
use yew_router::prelude::*;

use super::not_found::NotFound;
use super::shared::{use_collection, use_scroll_to_top};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::content::{Collection, MetaKind};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CaseStudyProps {
    pub slug: String,
}

#[function_component(CaseStudy)]
pub fn case_study(props: &CaseStudyProps) -> Html {
    use_scroll_to_top();
    let store = use_collection(Collection::CaseStudies);

    let Some(study) = store.get(&props.slug) else {
        return html! { <NotFound /> };
    };
    let next = store.next_after(&study.slug);

    html! {
        <div class="study-page">
            {
                if let Some(image) = &study.image {
                    html! {
                        <div class="study-hero-image">
                            <img src={image.src.clone()} alt={image.alt.clone()} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <article class="study">
                <Link<Route> to={Route::CaseStudies} classes="study-back">
                    {"← All case studies"}
                </Link<Route>>
                <div class="study-tags">
                    { for study.tags.iter().map(|tag| html! { <span class="card-chip">{ tag }</span> }) }
                </div>
                <h1>{ &study.title }</h1>
                <p class="study-lead">{ &study.description }</p>
                <dl class="study-facts">
                    <div>
                        <dt>{"Category"}</dt>
                        <dd>{ &study.category }</dd>
                    </div>
                    { for study.metadata.entries().into_iter().map(|entry| html! {
                        <div>
                            <dt>{ fact_label(entry.kind) }</dt>
                            <dd>{ entry.text }</dd>
                        </div>
                    }) }
                </dl>
                <div class="study-body">
                    { for study.body.iter().map(|paragraph| html! { <p>{ paragraph }</p> }) }
                </div>
                {
                    if let Some(next) = next {
                        html! {
                            <div class="study-next">
                                <p>{"Next project"}</p>
                                <h3>{ &next.title }</h3>
                                <Button
                                    href={next.href.clone()}
                                    variant={ButtonVariant::Outline}
                                    size={ButtonSize::Lg}
                                    icon="arrow-right"
                                >
                                    {"View Project"}
                                </Button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </article>
            <style>
                {r#"
                .study-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .study-hero-image img {
                    width: 100%;
                    max-height: 480px;
                    object-fit: cover;
                    display: block;
                }
                .study {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 3rem 2rem 5rem;
                }
                .study-back {
                    color: #7EB2FF;
                    text-decoration: none;
                    display: inline-block;
                    margin-bottom: 1.5rem;
                }
                .study-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .study h1 {
                    font-size: 2.75rem;
                    margin: 1rem 0;
                }
                .study-lead {
                    font-size: 1.2rem;
                    color: #999;
                }
                .study-facts {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                    gap: 1rem;
                    margin: 2rem 0;
                    padding: 1.5rem;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                }
                .study-facts dt {
                    color: #666;
                    font-size: 0.85rem;
                }
                .study-facts dd {
                    margin: 0.25rem 0 0;
                }
                .study-body p {
                    line-height: 1.8;
                    color: #ddd;
                }
                .study-next {
                    margin-top: 4rem;
                    text-align: center;
                }
                .study-next p {
                    color: #666;
                    margin-bottom: 0.5rem;
                }
                "#}
            </style>
        </div>
    }
}

fn fact_label(kind: MetaKind) -> &'static str {
    match kind {
        MetaKind::Client => "Client",
        MetaKind::Year => "Year",
        MetaKind::Date => "Published",
        MetaKind::ReadTime => "Reading time",
    }
}

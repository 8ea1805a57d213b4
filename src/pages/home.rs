use yew::prelude::*;

use super::shared::{use_collection, use_scroll_to_top};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Card, CardOptions, CardVariant};
use crate::config;
use crate::content::Collection;

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();
    let services = use_collection(Collection::Services);
    let case_studies = use_collection(Collection::CaseStudies);
    let posts = use_collection(Collection::Blog);

    html! {
        <div class="home-page">
            // Hero Section
            <section class="home-hero">
                <h1>{"We craft digital experiences that move people"}</h1>
                <p class="home-subtitle">
                    {"Design, engineering and AI for teams who want their product to feel like the future."}
                </p>
                <div class="home-actions">
                    <Button href="/case-studies" size={ButtonSize::Lg}>{"See Our Work"}</Button>
                    <Button href="/blog" size={ButtonSize::Lg} variant={ButtonVariant::Outline}>
                        {"Read the Blog"}
                    </Button>
                </div>
            </section>

            // Services Section
            <section class="home-section">
                <h2>{"What We Do"}</h2>
                <div class="card-grid">
                    { for services.items().iter().map(|service| html! {
                        <Card key={service.slug.clone()} item={service.clone()} variant={CardVariant::Feature} />
                    }) }
                </div>
                <div class="home-more">
                    <Button href="/services" variant={ButtonVariant::Ghost}>{"All Services"}</Button>
                </div>
            </section>

            // Featured Work
            <section class="home-section">
                <h2>{"Featured Work"}</h2>
                <div class="card-grid">
                    { for case_studies.featured_preview(config::HOME_PREVIEW_LIMIT).into_iter().map(|study| html! {
                        <Card
                            key={study.slug.clone()}
                            item={study.clone()}
                            variant={CardVariant::CaseStudy}
                            options={CardOptions::default().with_cta("View Case Study")}
                        />
                    }) }
                </div>
            </section>

            // Latest Posts
            <section class="home-section">
                <h2>{"Latest Insights"}</h2>
                <div class="card-grid">
                    { for posts.preview(config::HOME_PREVIEW_LIMIT).into_iter().map(|post| html! {
                        <Card key={post.slug.clone()} item={post.clone()} variant={CardVariant::Blog} />
                    }) }
                </div>
            </section>

            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                    color: #ffffff;
                }
                .home-hero {
                    text-align: center;
                    padding: 10rem 2rem 6rem;
                }
                .home-hero h1 {
                    font-size: 4rem;
                    max-width: 900px;
                    margin: 0 auto 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .home-subtitle {
                    font-size: 1.3rem;
                    color: #999;
                    max-width: 640px;
                    margin: 0 auto 2.5rem;
                }
                .home-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .home-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                }
                .home-more {
                    margin-top: 2rem;
                    text-align: center;
                }
                .home-section h2 {
                    font-size: 2.25rem;
                    margin-bottom: 2rem;
                }
                @media (max-width: 768px) {
                    .home-hero {
                        padding: 7rem 1rem 4rem;
                    }
                    .home-hero h1 {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use super::not_found::NotFound;
use super::shared::{use_collection, use_scroll_to_top};
use crate::components::card::{Card, CardVariant};
use crate::config;
use crate::content::{CategoryFilter, Collection, FilterState};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

/// `/blog?q=<tag>`, the listing filtered down to one tag.
pub fn tag_href(tag: &str) -> String {
    format!("/blog{}", FilterState::new(tag, CategoryFilter::All).to_query_string())
}

#[function_component(BlogPost)]
pub fn blog_post(props: &BlogPostProps) -> Html {
    use_scroll_to_top();
    let store = use_collection(Collection::Blog);

    let Some(post) = store.get(&props.slug) else {
        return html! { <NotFound /> };
    };
    let related = store.related(&post.slug, config::RELATED_LIMIT);

    html! {
        <div class="post-page">
            <article class="post">
                <Link<Route> to={Route::Blog} classes="post-back">
                    {"← All articles"}
                </Link<Route>>
                <span class="post-category">{ &post.category }</span>
                <h1>{ &post.title }</h1>
                <p class="post-lead">{ &post.description }</p>
                {
                    if let Some(author) = post.metadata.author() {
                        html! {
                            <div class="post-author">
                                {
                                    if let Some(avatar) = &author.avatar {
                                        html! { <img src={avatar.clone()} alt={author.name.clone()} /> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div>
                                    <p class="post-author-name">{ &author.name }</p>
                                    <p class="post-author-role">{ &author.role }</p>
                                </div>
                                <div class="post-meta">
                                    { for post.metadata.entries().into_iter().map(|entry| html! {
                                        <span class={entry.kind.css_class()}>{ entry.text }</span>
                                    }) }
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(image) = &post.image {
                        html! { <img class="post-image" src={image.src.clone()} alt={image.alt.clone()} /> }
                    } else {
                        html! {}
                    }
                }
                <div class="post-body">
                    { for post.body.iter().map(|paragraph| html! { <p>{ paragraph }</p> }) }
                </div>
                <div class="post-tags">
                    { for post.tags.iter().map(|tag| html! {
                        <a class="post-tag" href={tag_href(tag)}>{ tag }</a>
                    }) }
                </div>
            </article>

            {
                if related.is_empty() {
                    html! {}
                } else {
                    html! {
                        <section class="listing-section">
                            <h2>{"Related Articles"}</h2>
                            <div class="card-grid">
                                { for related.into_iter().map(|item| html! {
                                    <Card key={item.slug.clone()} item={item.clone()} variant={CardVariant::Blog} />
                                }) }
                            </div>
                        </section>
                    }
                }
            }
            <style>
                {r#"
                .post-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .post {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .post-back {
                    color: #7EB2FF;
                    text-decoration: none;
                    display: inline-block;
                    margin-bottom: 2rem;
                }
                .post-category {
                    font-size: 0.8rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(30, 144, 255, 0.85);
                }
                .post h1 {
                    font-size: 2.75rem;
                    margin: 1rem 0;
                }
                .post-lead {
                    font-size: 1.2rem;
                    color: #999;
                }
                .post-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin: 2rem 0;
                }
                .post-author img {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                }
                .post-author p {
                    margin: 0;
                }
                .post-author-role {
                    color: #999;
                    font-size: 0.9rem;
                }
                .post-meta {
                    margin-left: auto;
                    display: flex;
                    flex-direction: column;
                    align-items: flex-end;
                    color: #666;
                    font-size: 0.9rem;
                }
                .post-image {
                    width: 100%;
                    border-radius: 12px;
                    margin-bottom: 2rem;
                }
                .post-body p {
                    line-height: 1.8;
                    color: #ddd;
                }
                .post-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-top: 2rem;
                }
                .post-tag {
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #ccc;
                    text-decoration: none;
                }
                .post-tag:hover {
                    border-color: #7EB2FF;
                    color: #7EB2FF;
                }
                @media (max-width: 768px) {
                    .post h1 {
                        font-size: 2rem;
                    }
                    .post {
                        padding: 2rem 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_links_filter_the_listing() {
        assert_eq!(tag_href("UX"), "/blog?q=UX");
        assert_eq!(tag_href("Web Development"), "/blog?q=Web%20Development");
    }
}

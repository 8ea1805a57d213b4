use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="listing-page">
            <section class="listing-hero">
                <h1>{"Page not found"}</h1>
                <p>{"The page you were looking for has moved or never existed."}</p>
            </section>
            <section class="listing-section not-found-actions">
                <Button href="/" variant={ButtonVariant::Primary}>{"Back to home"}</Button>
                <Button href="/blog" variant={ButtonVariant::Outline}>{"Read the blog"}</Button>
            </section>
            <style>
                {r#"
                .not-found-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                }
                "#}
            </style>
        </div>
    }
}

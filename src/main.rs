use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod components {
    pub mod button;
    pub mod card;
    pub mod filter_bar;
}
mod pages {
    pub mod shared;
    pub mod home;
    pub mod blog;
    pub mod blog_post;
    pub mod case_studies;
    pub mod case_study;
    pub mod not_found;
    pub mod services;
}

use components::{
    button::BUTTON_STYLES,
    card::CARD_STYLES,
    filter_bar::FILTER_BAR_STYLES,
};

use pages::{
    home::Home,
    blog::Blog,
    blog_post::BlogPost,
    case_studies::CaseStudies,
    case_study::CaseStudy,
    not_found::NotFound,
    services::Services,
    shared::PAGE_STYLES,
};


#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/services")]
    Services,
    #[at("/case-studies")]
    CaseStudies,
    #[at("/case-studies/:slug")]
    CaseStudy { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::BlogPost { slug } => {
            info!("Rendering blog post {}", slug);
            html! { <BlogPost slug={slug} /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::CaseStudies => {
            info!("Rendering Case Studies page");
            html! { <CaseStudies /> }
        },
        Route::CaseStudy { slug } => {
            info!("Rendering case study {}", slug);
            html! { <CaseStudy slug={slug} /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let scroll_callback = Closure::<dyn Fn()>::new({
                    let is_scrolled = is_scrolled.clone();
                    move || {
                        if let Some(win) = web_sys::window() {
                            if let Ok(scroll_y) = win.scroll_y() {
                                is_scrolled.set(scroll_y > 80.0);
                            }
                        }
                    }
                });
                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    log::warn!("Could not watch scroll position: {:?}", e);
                }
                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                })
            } else {
                Box::new(|| ())
            };
            move || destructor()
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::SITE_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">
                            {"Services"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::CaseStudies} classes="nav-link">
                            {"Case Studies"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Blog} classes="nav-link">
                            {"Blog"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{format!("© {} {}. Digital products, designed and built with care.", chrono::Utc::now().format("%Y"), config::SITE_NAME)}</p>
        </footer>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
            <style>
                { BASE_STYLES }
                { PAGE_STYLES }
                { CARD_STYLES }
                { BUTTON_STYLES }
                { FILTER_BAR_STYLES }
            </style>
        </BrowserRouter>
    }
}


const BASE_STYLES: &str = r#"
body {
    margin: 0;
    background: #1a1a1a;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.top-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 100;
    transition: background 0.3s ease;
}
.top-nav.scrolled {
    background: rgba(26, 26, 26, 0.9);
    backdrop-filter: blur(10px);
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 2rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.nav-logo {
    font-size: 1.5rem;
    font-weight: 700;
    color: #fff;
    text-decoration: none;
}
.nav-right {
    display: flex;
    gap: 2rem;
}
.nav-link {
    color: #ccc;
    text-decoration: none;
}
.nav-link:hover {
    color: #7EB2FF;
}
.burger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    cursor: pointer;
}
.burger-menu span {
    width: 24px;
    height: 2px;
    background: #fff;
}
.site-footer {
    text-align: center;
    padding: 3rem 2rem;
    color: #666;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
}
@media (max-width: 768px) {
    .burger-menu {
        display: flex;
    }
    .nav-right {
        display: none;
    }
    .nav-right.mobile-menu-open {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 64px;
        left: 0;
        right: 0;
        padding: 1.5rem 2rem;
        background: rgba(26, 26, 26, 0.95);
    }
}
"#;


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

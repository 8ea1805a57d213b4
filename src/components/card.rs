use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{ContentItem, Image, MetaEntry};
use crate::Route;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Feature,
    CaseStudy,
    Blog,
}

impl CardVariant {
    fn css_class(self) -> &'static str {
        match self {
            CardVariant::Default => "card--default",
            CardVariant::Feature => "card--feature",
            CardVariant::CaseStudy => "card--case-study",
            CardVariant::Blog => "card--blog",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardOptions {
    pub hover_effect: bool,
    pub link_enabled: bool,
    pub icon: Option<String>,
    pub cta: String,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            hover_effect: true,
            link_enabled: true,
            icon: None,
            cta: "Learn More".to_string(),
        }
    }
}

impl CardOptions {
    pub fn static_card() -> Self {
        Self {
            link_enabled: false,
            ..Self::default()
        }
    }

    pub fn with_cta(mut self, cta: impl Into<String>) -> Self {
        self.cta = cta.into();
        self
    }

}

/// What a card shows, one case per variant. Each case holds only the
/// fields that variant draws, in drawing order.
#[derive(Clone, Debug, PartialEq)]
pub enum CardLayout {
    Default {
        image: Option<Image>,
        title: String,
        description: String,
        cta: Option<String>,
    },
    Feature {
        icon: Option<String>,
        title: String,
        description: String,
        cta: Option<String>,
    },
    CaseStudy {
        image: Option<Image>,
        tags: Vec<String>,
        title: String,
        description: String,
        meta: Vec<MetaEntry>,
        cta: Option<String>,
    },
    Blog {
        image: Option<Image>,
        chips: Vec<String>,
        title: String,
        description: String,
        meta: Vec<MetaEntry>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub variant: CardVariant,
    pub layout: CardLayout,
    /// Where the card navigates to. `None` renders the same layout inert.
    pub target: Option<String>,
    pub hover: bool,
}

impl CardView {
    pub fn build(item: &ContentItem, variant: CardVariant, options: &CardOptions) -> Self {
        let target = if options.link_enabled {
            item.href.clone()
        } else {
            None
        };
        let cta = target.as_ref().map(|_| options.cta.clone());
        let title = item.title.clone();
        let description = item.description.clone();

        let layout = match variant {
            CardVariant::Default => CardLayout::Default {
                image: item.image.clone(),
                title,
                description,
                cta,
            },
            CardVariant::Feature => CardLayout::Feature {
                icon: options
                    .icon
                    .clone()
                    .or_else(|| item.metadata.icon().map(str::to_string)),
                title,
                description,
                cta,
            },
            CardVariant::CaseStudy => CardLayout::CaseStudy {
                image: item.image.clone(),
                tags: item.tags.clone(),
                title,
                description,
                meta: item.metadata.entries(),
                cta,
            },
            CardVariant::Blog => CardLayout::Blog {
                image: item.image.clone(),
                chips: vec![item.category.clone()],
                title,
                description,
                meta: item.metadata.entries(),
            },
        };

        Self {
            variant,
            layout,
            target,
            hover: options.hover_effect,
        }
    }

    /// With a hover effect the whole card is the link; otherwise only the
    /// call-to-action navigates.
    pub fn whole_card_link(&self) -> bool {
        self.target.is_some() && self.hover
    }

    pub fn classes(&self) -> Classes {
        classes!(
            "card",
            self.variant.css_class(),
            self.hover.then_some("card--hover"),
            self.target.is_none().then_some("card--static"),
        )
    }
}

/// The route `href` points at, if it is a real page of this site.
pub fn internal_route(href: &str) -> Option<Route> {
    href.starts_with('/')
        .then(|| Route::recognize(href))
        .flatten()
        .filter(|route| *route != Route::NotFound)
}

/// Links to a route when `href` is one of ours, otherwise a plain anchor.
pub fn nav_link(href: &str, class: &'static str, children: Html) -> Html {
    match internal_route(href) {
        Some(route) => html! {
            <Link<Route> to={route} classes={classes!(class)}>
                { children }
            </Link<Route>>
        },
        None => html! {
            <a href={href.to_string()} class={class} target="_blank" rel="noopener noreferrer">
                { children }
            </a>
        },
    }
}

fn image_region(image: &Option<Image>, overlay: Html) -> Html {
    match image {
        Some(image) => html! {
            <div class="card-media">
                <img src={image.src.clone()} alt={image.alt.clone()} loading="lazy" />
                { overlay }
            </div>
        },
        None => html! {},
    }
}

fn chip_row(chips: &[String], class: &'static str) -> Html {
    if chips.is_empty() {
        return html! {};
    }
    html! {
        <div class={class}>
            { for chips.iter().map(|chip| html! { <span class="card-chip">{ chip }</span> }) }
        </div>
    }
}

fn meta_row(meta: &[MetaEntry]) -> Html {
    if meta.is_empty() {
        return html! {};
    }
    html! {
        <div class="card-meta">
            { for meta.iter().map(|entry| html! {
                <span class={classes!("card-meta-entry", entry.kind.css_class())}>{ &entry.text }</span>
            }) }
        </div>
    }
}

fn cta_region(view: &CardView, cta: &Option<String>) -> Html {
    let (Some(text), Some(target)) = (cta, &view.target) else {
        return html! {};
    };
    let label = html! {
        <>
            { text }
            <span class="card-cta-arrow">{"→"}</span>
        </>
    };
    if view.whole_card_link() {
        html! { <span class="card-cta">{ label }</span> }
    } else {
        nav_link(target, "card-cta", label)
    }
}

fn render_layout(view: &CardView) -> Html {
    match &view.layout {
        CardLayout::Default {
            image,
            title,
            description,
            cta,
        } => html! {
            <>
                { image_region(image, html! {}) }
                <div class="card-body">
                    <h3>{ title }</h3>
                    <p>{ description }</p>
                    { cta_region(view, cta) }
                </div>
            </>
        },
        CardLayout::Feature {
            icon,
            title,
            description,
            cta,
        } => html! {
            <div class="card-body">
                {
                    if let Some(icon) = icon {
                        html! { <i class={classes!("card-icon", format!("icon-{}", icon))}></i> }
                    } else {
                        html! {}
                    }
                }
                <h3>{ title }</h3>
                <p>{ description }</p>
                { cta_region(view, cta) }
            </div>
        },
        CardLayout::CaseStudy {
            image,
            tags,
            title,
            description,
            meta,
            cta,
        } => html! {
            <>
                { image_region(image, html! {}) }
                <div class="card-body">
                    { chip_row(tags, "card-chips") }
                    <h3>{ title }</h3>
                    <p>{ description }</p>
                    { meta_row(meta) }
                    { cta_region(view, cta) }
                </div>
            </>
        },
        CardLayout::Blog {
            image,
            chips,
            title,
            description,
            meta,
        } => html! {
            <>
                { image_region(image, chip_row(chips, "card-chips card-chips--overlay")) }
                <div class="card-body">
                    { if image.is_none() { chip_row(chips, "card-chips") } else { html! {} } }
                    <h3>{ title }</h3>
                    <p class="card-clamp">{ description }</p>
                    { meta_row(meta) }
                </div>
            </>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub item: ContentItem,
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or_default]
    pub options: CardOptions,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let view = CardView::build(&props.item, props.variant, &props.options);
    let content = render_layout(&view);

    match &view.target {
        Some(target) if view.whole_card_link() => html! {
            <div class={view.classes()}>
                { nav_link(target, "card-link", content) }
            </div>
        },
        _ => html! {
            <div class={view.classes()}>
                { content }
            </div>
        },
    }
}

pub const CARD_STYLES: &str = r#"
.card {
    background: rgba(26, 26, 26, 0.85);
    backdrop-filter: blur(10px);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 12px;
    overflow: hidden;
    display: flex;
    flex-direction: column;
    transition: all 0.3s ease;
    color: #ffffff;
}
.card--hover:hover {
    border-color: rgba(30, 144, 255, 0.3);
    transform: translateY(-5px);
    box-shadow: 0 15px 30px rgba(0, 0, 0, 0.08), 0 0 15px rgba(11, 166, 170, 0.2);
}
.card--hover:hover .card-media img {
    transform: scale(1.05);
}
.card-link {
    display: flex;
    flex-direction: column;
    flex-grow: 1;
    text-decoration: none;
    color: inherit;
}
.card-media {
    position: relative;
    width: 100%;
    aspect-ratio: 16 / 9;
    overflow: hidden;
}
.card-media img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.5s ease;
}
.card-body {
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
    flex-grow: 1;
}
.card--feature .card-body {
    padding: 2rem;
}
.card-body h3 {
    font-size: 1.25rem;
    margin: 0 0 0.75rem;
}
.card-body p {
    color: #999;
    margin: 0 0 1rem;
}
.card-clamp {
    display: -webkit-box;
    -webkit-line-clamp: 2;
    -webkit-box-orient: vertical;
    overflow: hidden;
}
.card-icon {
    display: block;
    width: 2.5rem;
    height: 2.5rem;
    margin-bottom: 1.5rem;
    color: #7EB2FF;
}
.card-chips {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-bottom: 0.75rem;
}
.card-chips--overlay {
    position: absolute;
    top: 1rem;
    left: 1rem;
}
.card-chip {
    font-size: 0.75rem;
    padding: 0.25rem 0.5rem;
    border-radius: 999px;
    background: rgba(30, 144, 255, 0.85);
    color: #fff;
}
.card-meta {
    display: flex;
    justify-content: space-between;
    font-size: 0.875rem;
    color: #666;
    margin-top: auto;
}
.card-cta {
    margin-top: auto;
    color: #7EB2FF;
    text-decoration: none;
    font-weight: 500;
}
.card-cta-arrow {
    margin-left: 0.5rem;
    display: inline-block;
    transition: transform 0.3s ease;
}
.card:hover .card-cta-arrow {
    transform: translateX(4px);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::item::{Author, Metadata};
    use crate::content::MetaKind;
    use chrono::NaiveDate;

    fn blog_post() -> ContentItem {
        ContentItem {
            slug: "ethical-ai-digital-products".into(),
            title: "Ethical AI in Digital Products".into(),
            description: "Maintaining trust.".into(),
            category: "AI".into(),
            tags: vec!["AI".into(), "Ethics".into()],
            image: Some(Image {
                src: "/assets/ethical-ai.webp".into(),
                alt: "Ethical AI".into(),
            }),
            href: Some("/blog/ethical-ai-digital-products".into()),
            metadata: Metadata::Blog {
                author: Author {
                    name: "Elena Rodriguez".into(),
                    role: "AI Specialist".into(),
                    avatar: None,
                },
                date: NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
                read_minutes: 5,
            },
            featured: false,
            body: vec![],
        }
    }

    fn case_study() -> ContentItem {
        ContentItem {
            slug: "nova-finance".into(),
            title: "Nova Finance Dashboard".into(),
            description: "Real-time data.".into(),
            category: "Web Application".into(),
            tags: vec!["Finance".into(), "Dashboard".into()],
            image: None,
            href: Some("/case-studies/nova-finance".into()),
            metadata: Metadata::CaseStudy {
                client: "FinTech Solutions".into(),
                year: 2023,
            },
            featured: true,
            body: vec![],
        }
    }

    fn service() -> ContentItem {
        ContentItem {
            slug: "web-development".into(),
            title: "Web Development".into(),
            description: "Fast apps.".into(),
            category: "Engineering".into(),
            tags: vec![],
            image: Some(Image {
                src: "/assets/web.webp".into(),
                alt: "Web".into(),
            }),
            href: None,
            metadata: Metadata::Service {
                icon: "code".into(),
                features: vec![],
                technologies: vec![],
            },
            featured: false,
            body: vec![],
        }
    }

    #[test]
    fn blog_card_uses_category_chip_and_blog_meta() {
        let view = CardView::build(&blog_post(), CardVariant::Blog, &CardOptions::default());
        let CardLayout::Blog {
            image, chips, meta, ..
        } = &view.layout
        else {
            panic!("expected blog layout, got {:?}", view.layout);
        };
        assert!(image.is_some());
        assert_eq!(chips, &vec!["AI".to_string()]);
        let kinds: Vec<MetaKind> = meta.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, vec![MetaKind::Date, MetaKind::ReadTime]);
        assert_eq!(view.target.as_deref(), Some("/blog/ethical-ai-digital-products"));
        assert!(view.whole_card_link());
    }

    #[test]
    fn case_study_card_without_image_has_no_image_region() {
        let view = CardView::build(&case_study(), CardVariant::CaseStudy, &CardOptions::default());
        let CardLayout::CaseStudy {
            image,
            tags,
            meta,
            cta,
            ..
        } = &view.layout
        else {
            panic!("expected case study layout");
        };
        assert!(image.is_none());
        assert_eq!(tags.len(), 2);
        assert_eq!(meta[0].text, "FinTech Solutions");
        assert_eq!(meta[1].text, "2023");
        assert_eq!(cta.as_deref(), Some("Learn More"));
    }

    #[test]
    fn feature_card_ignores_image_and_takes_service_icon() {
        let view = CardView::build(&service(), CardVariant::Feature, &CardOptions::default());
        assert_eq!(
            view.layout,
            CardLayout::Feature {
                icon: Some("code".into()),
                title: "Web Development".into(),
                description: "Fast apps.".into(),
                cta: None,
            }
        );
    }

    #[test]
    fn icon_option_overrides_service_icon() {
        let options = CardOptions {
            icon: Some("sparkles".to_string()),
            ..CardOptions::default()
        };
        let view = CardView::build(&service(), CardVariant::Feature, &options);
        let CardLayout::Feature { icon, .. } = view.layout else {
            panic!("expected feature layout");
        };
        assert_eq!(icon.as_deref(), Some("sparkles"));
    }

    #[test]
    fn missing_href_renders_inert() {
        let view = CardView::build(&service(), CardVariant::Default, &CardOptions::default());
        assert!(view.target.is_none());
        assert!(!view.whole_card_link());
        let CardLayout::Default { image, cta, .. } = &view.layout else {
            panic!("expected default layout");
        };
        assert!(image.is_some());
        assert!(cta.is_none());
    }

    #[test]
    fn disabled_links_keep_the_layout() {
        let linked = CardView::build(&case_study(), CardVariant::CaseStudy, &CardOptions::default());
        let inert = CardView::build(&case_study(), CardVariant::CaseStudy, &CardOptions::static_card());
        assert!(inert.target.is_none());
        match (&linked.layout, &inert.layout) {
            (
                CardLayout::CaseStudy { title: a, meta: meta_a, .. },
                CardLayout::CaseStudy { title: b, meta: meta_b, cta, .. },
            ) => {
                assert_eq!(a, b);
                assert_eq!(meta_a, meta_b);
                assert!(cta.is_none());
            }
            _ => panic!("layouts should both be case studies"),
        }
    }

    #[test]
    fn without_hover_only_the_cta_links() {
        let options = CardOptions {
            hover_effect: false,
            ..CardOptions::default()
        }
        .with_cta("View Case Study");
        let view = CardView::build(&case_study(), CardVariant::CaseStudy, &options);
        assert!(view.target.is_some());
        assert!(!view.whole_card_link());
        let CardLayout::CaseStudy { cta, .. } = &view.layout else {
            panic!("expected case study layout");
        };
        assert_eq!(cta.as_deref(), Some("View Case Study"));
    }

    #[test]
    fn site_paths_resolve_to_routes() {
        assert_eq!(
            internal_route("/case-studies/nova-finance"),
            Some(Route::CaseStudy {
                slug: "nova-finance".into()
            })
        );
        assert_eq!(internal_route("/blog"), Some(Route::Blog));
        assert_eq!(internal_route("/services"), Some(Route::Services));
    }

    #[test]
    fn unknown_and_external_hrefs_are_plain_anchors() {
        assert_eq!(internal_route("/x/y/z"), None);
        assert_eq!(internal_route("https://example.com/blog"), None);
        assert_eq!(internal_route("mailto:hello@futura.dev"), None);
    }
}

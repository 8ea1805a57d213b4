use yew::prelude::*;

use super::shared::{use_collection, use_scroll_to_top};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Card, CardOptions, CardVariant};
use crate::content::item::Metadata;
use crate::content::{Collection, ContentItem, ContentStore, Image};

pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 7] = [
    ProcessStep {
        title: "Discovery",
        description: "We begin by understanding your business, goals, target audience, and project requirements.",
    },
    ProcessStep {
        title: "Strategy",
        description: "Our team develops a strategy and project roadmap tailored to your needs.",
    },
    ProcessStep {
        title: "Design",
        description: "We create intuitive, engaging designs that align with your brand and user expectations.",
    },
    ProcessStep {
        title: "Development",
        description: "Our engineers build your solution on a modern, well-tested stack.",
    },
    ProcessStep {
        title: "Testing",
        description: "Rigorous testing makes sure your product meets quality, performance, and security standards.",
    },
    ProcessStep {
        title: "Launch",
        description: "We deploy your product and stay close through the launch.",
    },
    ProcessStep {
        title: "Growth",
        description: "We keep measuring and iterating so the product keeps improving after release.",
    },
];

/// One service laid out in detail below the overview grid.
#[derive(Debug, PartialEq)]
pub struct ServiceSection<'a> {
    pub slug: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub icon: Option<&'a str>,
    pub image: Option<&'a Image>,
    pub features: &'a [String],
    pub technologies: &'a [String],
    /// Every other section puts its image on the left.
    pub flipped: bool,
}

impl<'a> ServiceSection<'a> {
    fn new(index: usize, item: &'a ContentItem) -> Self {
        let (features, technologies): (&[String], &[String]) = match &item.metadata {
            Metadata::Service {
                features,
                technologies,
                ..
            } => (features.as_slice(), technologies.as_slice()),
            _ => (&[][..], &[][..]),
        };
        Self {
            slug: &item.slug,
            title: &item.title,
            description: &item.description,
            icon: item.metadata.icon(),
            image: item.image.as_ref(),
            features,
            technologies,
            flipped: index % 2 == 1,
        }
    }
}

pub fn service_sections(store: &ContentStore) -> Vec<ServiceSection<'_>> {
    store
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| ServiceSection::new(index, item))
        .collect()
}

fn render_section(section: &ServiceSection) -> Html {
    html! {
        <section
            id={section.slug.to_string()}
            class={classes!("service-detail", section.flipped.then_some("service-detail--flipped"))}
        >
            <div class="service-copy">
                {
                    if let Some(icon) = section.icon {
                        html! { <i class={classes!("card-icon", format!("icon-{}", icon))}></i> }
                    } else {
                        html! {}
                    }
                }
                <h2>{ section.title }</h2>
                <p class="service-lead">{ section.description }</p>
                {
                    if section.features.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <>
                                <h3>{"What We Offer"}</h3>
                                <ul class="service-features">
                                    { for section.features.iter().map(|feature| html! { <li>{ feature }</li> }) }
                                </ul>
                            </>
                        }
                    }
                }
                {
                    if section.technologies.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <>
                                <h3>{"Technologies We Use"}</h3>
                                <div class="service-tech">
                                    { for section.technologies.iter().map(|tech| html! { <span class="card-chip">{ tech }</span> }) }
                                </div>
                            </>
                        }
                    }
                }
                <Button href="/case-studies" variant={ButtonVariant::Secondary} size={ButtonSize::Sm}>
                    {"See Related Work"}
                </Button>
            </div>
            {
                match section.image {
                    Some(image) => html! {
                        <div class="service-media">
                            <img src={image.src.clone()} alt={image.alt.clone()} loading="lazy" />
                        </div>
                    },
                    None => html! {},
                }
            }
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_to_top();
    let store = use_collection(Collection::Services);
    let sections = service_sections(&store);

    html! {
        <div class="listing-page">
            <section class="listing-hero">
                <h1>{"Our Services"}</h1>
                <p>{"A full suite of digital services to help businesses thrive in the digital landscape."}</p>
            </section>

            <section class="listing-section">
                {
                    if store.is_empty() {
                        html! {
                            <div class="listing-empty">
                                <h3>{"Services are on their way"}</h3>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="card-grid">
                                { for store.items().iter().map(|service| html! {
                                    <Card
                                        key={service.slug.clone()}
                                        item={service.clone()}
                                        variant={CardVariant::Feature}
                                        options={CardOptions::static_card()}
                                    />
                                }) }
                            </div>
                        }
                    }
                }
            </section>

            <section class="listing-section">
                <h2 class="services-process-title">{"Our Process"}</h2>
                <ol class="services-process">
                    { for PROCESS_STEPS.iter().enumerate().map(|(index, step)| html! {
                        <li class="process-step">
                            <span class="process-number">{ (index + 1).to_string() }</span>
                            <h3>{ step.title }</h3>
                            <p>{ step.description }</p>
                        </li>
                    }) }
                </ol>
            </section>

            <div class="listing-section">
                { for sections.iter().map(render_section) }
            </div>

            <section class="listing-section services-cta">
                <h2>{"Ready to transform your digital presence?"}</h2>
                <div class="services-cta-actions">
                    <Button href="/case-studies" size={ButtonSize::Lg}>{"View Our Work"}</Button>
                    <Button href="/blog" size={ButtonSize::Lg} variant={ButtonVariant::Outline}>
                        {"Read the Blog"}
                    </Button>
                </div>
            </section>

            <style>
                {r#"
                .services-process-title {
                    font-size: 2.25rem;
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .services-process {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                    gap: 1.5rem;
                }
                .process-step {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 1.5rem;
                }
                .process-number {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #7EB2FF;
                }
                .process-step p {
                    color: #999;
                }
                .service-detail {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                    padding: 4rem 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .service-detail--flipped .service-copy {
                    order: 2;
                }
                .service-lead {
                    font-size: 1.2rem;
                    color: #ccc;
                }
                .service-features {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                    padding-left: 1.2rem;
                    color: #ccc;
                }
                .service-tech {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                }
                .service-media img {
                    width: 100%;
                    border-radius: 24px;
                    object-fit: cover;
                }
                .services-cta {
                    text-align: center;
                }
                .services-cta-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                @media (max-width: 768px) {
                    .service-detail {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    .service-detail--flipped .service-copy {
                        order: 0;
                    }
                    .service-features {
                        grid-template-columns: 1fr;
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
    use crate::content::catalog;

    #[test]
    fn sections_carry_features_and_technologies() {
        let store = catalog::embedded(Collection::Services).unwrap();
        let sections = service_sections(&store);
        assert_eq!(sections.len(), store.len());

        let web = &sections[0];
        assert_eq!(web.slug, "web-development");
        assert_eq!(web.icon, Some("code"));
        assert!(web.features.contains(&"Progressive Web Apps".to_string()));
        assert!(web.technologies.contains(&"WebAssembly".to_string()));
    }

    #[test]
    fn sections_alternate_sides() {
        let store = catalog::embedded(Collection::Services).unwrap();
        let flips: Vec<bool> = service_sections(&store).iter().map(|s| s.flipped).collect();
        assert_eq!(flips, vec![false, true, false, true]);
    }

    #[test]
    fn non_service_items_get_empty_lists() {
        let store = catalog::embedded(Collection::Blog).unwrap();
        let sections = service_sections(&store);
        assert!(sections.iter().all(|s| s.features.is_empty() && s.technologies.is_empty()));
        assert!(sections.iter().all(|s| s.icon.is_none()));
    }

    #[test]
    fn process_has_seven_steps_in_order() {
        let titles: Vec<&str> = PROCESS_STEPS.iter().map(|s| s.title).collect();
        assert_eq!(titles.first(), Some(&"Discovery"));
        assert_eq!(titles.last(), Some(&"Growth"));
        assert_eq!(titles.len(), 7);
    }
}

use yew::prelude::*;

use super::card::nav_link;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Outline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconPosition {
    Left,
    #[default]
    Right,
}

pub fn button_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    disabled: bool,
) -> Classes {
    let variant = match variant {
        ButtonVariant::Primary => "btn--primary",
        ButtonVariant::Secondary => "btn--secondary",
        ButtonVariant::Ghost => "btn--ghost",
        ButtonVariant::Outline => "btn--outline",
    };
    let size = match size {
        ButtonSize::Sm => "btn--sm",
        ButtonSize::Md => "btn--md",
        ButtonSize::Lg => "btn--lg",
    };
    classes!(
        "btn",
        variant,
        size,
        full_width.then_some("btn--full"),
        disabled.then_some("btn--disabled"),
    )
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub href: Option<String>,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub icon: Option<String>,
    #[prop_or_default]
    pub icon_position: IconPosition,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub aria_label: Option<String>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let icon = |position: IconPosition| match &props.icon {
        Some(icon) if props.icon_position == position => html! {
            <span class={classes!("btn-icon", format!("icon-{}", icon))}></span>
        },
        _ => html! {},
    };
    let content = html! {
        <>
            { icon(IconPosition::Left) }
            { for props.children.iter() }
            { icon(IconPosition::Right) }
        </>
    };
    let classes = button_classes(props.variant, props.size, props.full_width, props.disabled);

    match &props.href {
        Some(href) if !props.disabled => html! {
            <span class={classes} aria-label={props.aria_label.clone()}>
                { nav_link(href, "btn-link", content) }
            </span>
        },
        _ => html! {
            <button
                type="button"
                class={classes}
                onclick={props.onclick.clone()}
                disabled={props.disabled}
                aria-label={props.aria_label.clone()}
            >
                { content }
            </button>
        },
    }
}

pub const BUTTON_STYLES: &str = r#"
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    border-radius: 8px;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.2s ease;
    border: 1px solid transparent;
}
.btn:hover:not(.btn--disabled) {
    transform: scale(1.03);
}
.btn:active:not(.btn--disabled) {
    transform: scale(0.97);
}
.btn-link {
    display: inline-flex;
    align-items: center;
    color: inherit;
    text-decoration: none;
}
.btn--sm { padding: 0.375rem 0.75rem; font-size: 0.875rem; }
.btn--md { padding: 0.625rem 1.25rem; font-size: 1rem; }
.btn--lg { padding: 0.875rem 2rem; font-size: 1.125rem; }
.btn--primary { background: #1E90FF; color: #fff; border-color: #1E90FF; }
.btn--secondary { background: #7B61FF; color: #fff; border-color: #7B61FF; }
.btn--ghost { background: transparent; color: #ddd; }
.btn--outline { background: transparent; color: #fff; border-color: rgba(255, 255, 255, 0.3); }
.btn--outline:hover { border-color: #7EB2FF; color: #7EB2FF; }
.btn--full { width: 100%; }
.btn--disabled { opacity: 0.5; cursor: not-allowed; }
.btn-icon { display: inline-block; width: 1rem; height: 1rem; }
.btn-icon:first-child { margin-right: 0.5rem; }
.btn-icon:last-child { margin-left: 0.5rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_classes() {
        let classes = button_classes(ButtonVariant::default(), ButtonSize::default(), false, false);
        assert!(classes.contains("btn--primary"));
        assert!(classes.contains("btn--md"));
        assert!(!classes.contains("btn--full"));
        assert!(!classes.contains("btn--disabled"));
    }

    #[test]
    fn disabled_full_width_outline() {
        let classes = button_classes(ButtonVariant::Outline, ButtonSize::Lg, true, true);
        assert!(classes.contains("btn--outline"));
        assert!(classes.contains("btn--lg"));
        assert!(classes.contains("btn--full"));
        assert!(classes.contains("btn--disabled"));
    }
}

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled, primary colour.
    #[default]
    Default,
    Outline,
    /// Looks like an inline link.
    Link,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "button--primary",
            ButtonVariant::Outline => "button--outline",
            ButtonVariant::Link => "button--link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "button--sm",
            ButtonSize::Md => "button--md",
            ButtonSize::Lg => "button--lg",
        }
    }
}

/// Styled button primitive. Without `onclick` it renders but does nothing.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default, into)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let classes = format!("button {} {} {class}", variant.class(), size.class());

    rsx! {
        button {
            r#type: "button",
            class: "{classes}",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

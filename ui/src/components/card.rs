use dioxus::prelude::*;

/// Card surface. Cards with a click handler get the interactive (hover) style.
#[component]
pub fn Card(
    #[props(default, into)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let interactive = if onclick.is_some() {
        "card--interactive"
    } else {
        ""
    };

    rsx! {
        div {
            class: "card {interactive} {class}",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

use dioxus::prelude::*;

use ui::PortalRoot;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme (ui/assets/theme/main.css), inlined so web and desktop cannot drift.

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Digital India Portal" }
        document::Style { "{MAIN_CSS_INLINE}" }

        PortalRoot {}
    }
}

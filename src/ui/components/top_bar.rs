use dioxus::prelude::*;

/// Brand gradient shared by every screen header.
const HEADER_GRADIENT: &str = "linear-gradient(90deg, #e53935, #ff7043)";

#[component]
pub fn TopBar(
    title: String,
    #[props(default = String::new())] subtitle: String,
    #[props(default)] on_back: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; padding: 12px 16px; background: {HEADER_GRADIENT}; color: white;",

            if let Some(handler) = on_back {
                button {
                    style: "border: none; background: transparent; color: white; font-size: 20px; cursor: pointer; padding: 4px 8px;",
                    onclick: move |_| handler.call(()),
                    "←"
                }
            }

            div {
                style: "display: flex; flex-direction: column;",
                span { style: "font-size: 18px; font-weight: bold;", "{title}" }
                if !subtitle.is_empty() {
                    span { style: "font-size: 12px; opacity: 0.9;", "{subtitle}" }
                }
            }

            // Spacer
            div { style: "flex: 1;" }

            {children}
        }
    }
}

/// Borderless header action button (settings, alarms, close).
#[component]
pub fn IconButton(label: String, on_press: EventHandler<()>) -> Element {
    rsx! {
        button {
            style: "border: none; background: transparent; color: white; font-size: 18px; cursor: pointer; padding: 6px 10px;",
            onclick: move |_| on_press.call(()),
            "{label}"
        }
    }
}

use dioxus::prelude::*;

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div {
            style: "flex: 1; display: flex; align-items: center; justify-content: center;",
            span {
                style: "font-size: 14px; color: #888;",
                "{message}"
            }
        }
    }
}

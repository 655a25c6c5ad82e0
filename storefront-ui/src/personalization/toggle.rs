//! Edit-mode toggle and the banner shown while edit mode is active.

use dioxus::prelude::*;

use crate::personalization::context::use_personalization;

#[component]
pub fn PersonalizationModeToggle() -> Element {
    let engine = use_personalization();
    let is_edit_mode = engine.is_edit_mode();

    rsx! {
        button {
            class: if is_edit_mode { "mode-toggle active" } else { "mode-toggle" },
            onclick: move |_| engine.set_edit_mode(!engine.is_edit_mode()),
            if is_edit_mode { "✕ Salir del modo edición" } else { "✨ Modo personalización" }
        }
        if is_edit_mode {
            div { class: "edit-mode-banner",
                div { class: "edit-mode-banner-inner",
                    span { class: "edit-mode-badge", "✨ Modo personalización activo" }
                    p { "Haz clic en cualquier elemento para personalizarlo." }
                    button {
                        class: "mode-toggle on-banner",
                        onclick: move |_| engine.set_edit_mode(false),
                        "✕ Salir"
                    }
                }
            }
        }
    }
}

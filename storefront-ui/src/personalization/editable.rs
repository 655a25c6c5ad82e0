//! Clickable wrapper that makes a UI fragment selectable in edit mode.

use dioxus::prelude::*;
use shared_types::EditableElementConfig;

use crate::personalization::context::use_personalization;

/// Decorates `children` with selection behavior while edit mode is active.
///
/// Outside edit mode the children render verbatim: no wrapper node, no event
/// interception. In edit mode a click selects this element's config (and
/// stops there — nested editable ancestors do not also fire), the outline
/// tracks idle/hover/selected, and the selected element shows its label as
/// a badge.
#[component]
pub fn EditableElement(element_config: EditableElementConfig, children: Element) -> Element {
    let engine = use_personalization();

    if !engine.is_edit_mode() {
        return rsx! {
            {children}
        };
    }

    let is_selected =
        engine.selected_element_id().as_deref() == Some(element_config.element_id.as_str());
    let config = element_config.clone();

    rsx! {
        div {
            class: if is_selected { "editable-element selected" } else { "editable-element" },
            onclick: move |e| {
                e.stop_propagation();
                engine.select_element(Some(config.clone()));
            },
            if is_selected {
                div { class: "editable-element-badge", "{element_config.element_label}" }
            }
            {children}
        }
    }
}

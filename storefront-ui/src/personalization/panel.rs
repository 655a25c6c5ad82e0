//! Floating editor panel: one input control per property of the selected
//! element, plus undo/redo/reset/save.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::{EditableProperty, ElementCategory, PropertyKind, PropertyValue};

use crate::personalization::context::{use_personalization, SaveOutcome};

/// Panel-local save feedback. Not engine state: the engine only reports the
/// save result; how long the banner lingers is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Success,
    Error,
}

const SAVE_BANNER_MS: u32 = 2_000;

fn status_message(state: SaveState) -> &'static str {
    match state {
        SaveState::Saving => "Guardando tus personalizaciones...",
        SaveState::Success => "Cambios guardados exitosamente.",
        SaveState::Error => "Ocurrió un error al guardar. Reintenta.",
        SaveState::Idle => "",
    }
}

fn category_icon(category: Option<ElementCategory>) -> &'static str {
    match category {
        Some(ElementCategory::Text) => "🔤",
        Some(ElementCategory::Image) => "🖼️",
        Some(ElementCategory::Button) => "🔘",
        _ => "🎨",
    }
}

#[component]
pub fn FloatingPersonalizationPanel() -> Element {
    let engine = use_personalization();
    let mut save_state = use_signal(|| SaveState::Idle);

    // The panel only exists while an element is open for editing.
    let Some(selected) = engine.selected_element() else {
        return rsx! {};
    };

    let tone = match save_state() {
        SaveState::Idle => "",
        SaveState::Saving => "saving",
        SaveState::Success => "success",
        SaveState::Error => "error",
    };
    let saving = save_state() == SaveState::Saving;

    let on_save = move |_: MouseEvent| {
        if *save_state.peek() == SaveState::Saving {
            return;
        }
        save_state.set(SaveState::Saving);
        spawn(async move {
            match engine.save_customizations().await {
                Ok(SaveOutcome::Saved) => save_state.set(SaveState::Success),
                Ok(SaveOutcome::Superseded) => {
                    // A newer save owns the banner now.
                    return;
                }
                Err(e) => {
                    log::error!("Failed to save customizations: {e}");
                    save_state.set(SaveState::Error);
                }
            }
            TimeoutFuture::new(SAVE_BANNER_MS).await;
            save_state.set(SaveState::Idle);
        });
    };

    rsx! {
        div {
            class: "personalization-panel {tone}",
            div { class: "panel-header",
                div { class: "panel-title",
                    span { class: "panel-icon", {category_icon(selected.category)} }
                    h3 { "{selected.element_label}" }
                }
                button {
                    class: "panel-close",
                    onclick: move |_| engine.select_element(None),
                    "✕"
                }
            }
            span { class: "panel-type-badge", "{selected.element_type}" }

            div { class: "panel-properties",
                for property in selected.properties.clone() {
                    div { key: "{property.id}", class: "editor-field",
                        label { class: "editor-label", "{property.label}" }
                        PropertyEditor {
                            element_id: selected.element_id.clone(),
                            property: property.clone(),
                        }
                    }
                }
            }

            div { class: "panel-actions",
                div { class: "panel-action-row",
                    button {
                        class: "panel-button",
                        disabled: !engine.can_undo(),
                        onclick: move |_| engine.undo(),
                        "↶ Deshacer"
                    }
                    button {
                        class: "panel-button",
                        disabled: !engine.can_redo(),
                        onclick: move |_| engine.redo(),
                        "↷ Rehacer"
                    }
                }
                div { class: "panel-action-row",
                    button {
                        class: "panel-button",
                        // Clears every element's customizations, not just
                        // this one.
                        onclick: move |_| engine.reset(),
                        "🗑 Reiniciar todo"
                    }
                    button {
                        class: "panel-button primary",
                        disabled: saving,
                        onclick: on_save,
                        if saving { "Guardando..." } else { "💾 Guardar" }
                    }
                }
                if save_state() != SaveState::Idle {
                    div { class: "panel-status {tone}", "{status_message(save_state())}" }
                }
            }
        }
    }
}

#[component]
fn PropertyEditor(element_id: String, property: EditableProperty) -> Element {
    let engine = use_personalization();
    let value = engine.get(&element_id, &property.id, property.value.clone());

    match property.kind {
        PropertyKind::Color => {
            let picker_value = value
                .as_str()
                .filter(|s| s.starts_with('#'))
                .unwrap_or("#000000")
                .to_string();
            let text_value = value.as_str().unwrap_or("").to_string();
            let picker_element = element_id.clone();
            let picker_property = property.id.clone();
            let text_element = element_id.clone();
            let text_property = property.id.clone();

            rsx! {
                div { class: "editor-row",
                    input {
                        r#type: "color",
                        class: "editor-color-swatch",
                        value: "{picker_value}",
                        oninput: move |e| {
                            engine.update_property(
                                picker_element.clone(),
                                picker_property.clone(),
                                PropertyValue::text(e.value()),
                            );
                        },
                    }
                    // Free text on purpose: CSS keywords and oklch() are
                    // just as valid as hex here.
                    input {
                        r#type: "text",
                        class: "editor-input",
                        value: "{text_value}",
                        placeholder: "#000000",
                        oninput: move |e| {
                            engine.update_property(
                                text_element.clone(),
                                text_property.clone(),
                                PropertyValue::text(e.value()),
                            );
                        },
                    }
                }
            }
        }

        PropertyKind::Image => {
            let url = value.as_str().unwrap_or("").to_string();
            let input_element = element_id.clone();
            let input_property = property.id.clone();

            rsx! {
                div { class: "editor-stack",
                    input {
                        r#type: "text",
                        class: "editor-input",
                        value: "{url}",
                        placeholder: "https://ejemplo.com/imagen.jpg",
                        oninput: move |e| {
                            engine.update_property(
                                input_element.clone(),
                                input_property.clone(),
                                PropertyValue::text(e.value()),
                            );
                        },
                    }
                    if !url.is_empty() {
                        img { class: "editor-image-preview", src: "{url}", alt: "Vista previa" }
                    }
                }
            }
        }

        PropertyKind::Select => {
            let options = property.options.clone().unwrap_or_default();
            let active_index = options.iter().position(|entry| entry.value == value);
            let change_options = options.clone();
            let select_element = element_id.clone();
            let select_property = property.id.clone();

            rsx! {
                select {
                    class: "editor-select",
                    onchange: move |e| {
                        // Options are keyed by index so duplicate values
                        // stay distinguishable.
                        if let Ok(index) = e.value().parse::<usize>() {
                            if let Some(entry) = change_options.get(index) {
                                engine.update_property(
                                    select_element.clone(),
                                    select_property.clone(),
                                    entry.value.clone(),
                                );
                            }
                        }
                    },
                    for (index, entry) in options.iter().enumerate() {
                        option {
                            key: "{property.id}-{index}",
                            value: "{index}",
                            selected: Some(index) == active_index,
                            "{entry.label}"
                        }
                    }
                }
            }
        }

        PropertyKind::Number
        | PropertyKind::FontSize
        | PropertyKind::Spacing
        | PropertyKind::BorderRadius => {
            let min = property.min.unwrap_or(0.0);
            let max = property.max.unwrap_or(100.0);
            let step = property.step.unwrap_or(1.0);
            let number = value.as_number().unwrap_or(min);
            let unit = property.unit.clone().unwrap_or_default();
            let slider_element = element_id.clone();
            let slider_property = property.id.clone();

            rsx! {
                div { class: "editor-row",
                    input {
                        r#type: "range",
                        class: "editor-slider",
                        min: "{min}",
                        max: "{max}",
                        step: "{step}",
                        value: "{number}",
                        // Writes on every slide, not just on release; each
                        // tick is its own undo step.
                        oninput: move |e| {
                            if let Ok(v) = e.value().parse::<f64>() {
                                engine.update_property(
                                    slider_element.clone(),
                                    slider_property.clone(),
                                    PropertyValue::number(v),
                                );
                            }
                        },
                    }
                    span { class: "editor-readout", "{number}{unit}" }
                }
            }
        }
    }
}

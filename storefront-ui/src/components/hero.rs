use dioxus::prelude::*;
use shared_types::{
    BrandConfig, EditableElementConfig, EditableProperty, ElementCategory, PropertyKind,
    PropertyValue,
};

use crate::personalization::{
    text_properties, text_style, use_personalization, EditableElement, FontSizeRange,
    TextStyleDefaults,
};

fn text_config(
    engine: &crate::personalization::Personalization,
    element_id: &str,
    element_label: &str,
    category: ElementCategory,
    font: FontSizeRange,
    color_default: &str,
) -> EditableElementConfig {
    EditableElementConfig {
        element_id: element_id.to_string(),
        element_label: element_label.to_string(),
        element_type: if category == ElementCategory::Button {
            "button".to_string()
        } else {
            "text".to_string()
        },
        category: Some(category),
        properties: text_properties(engine, element_id, font, color_default),
    }
}

#[component]
pub fn HeroSection(brand: BrandConfig) -> Element {
    let engine = use_personalization();

    let hero_image_url = engine.get_text(
        "hero-image",
        "url",
        brand.hero_image_url.as_deref().unwrap_or(""),
    );
    let hero_image_opacity = engine.get_number("hero-image", "opacity", 80.0);

    let image_config = EditableElementConfig {
        element_id: "hero-image".to_string(),
        element_label: "Imagen de portada".to_string(),
        element_type: "image".to_string(),
        category: Some(ElementCategory::Hero),
        properties: vec![
            EditableProperty {
                id: "url".to_string(),
                label: "URL de imagen".to_string(),
                kind: PropertyKind::Image,
                value: PropertyValue::text(hero_image_url.clone()),
                min: None,
                max: None,
                step: None,
                unit: None,
                options: None,
            },
            EditableProperty {
                id: "opacity".to_string(),
                label: "Opacidad".to_string(),
                kind: PropertyKind::Number,
                value: PropertyValue::number(hero_image_opacity),
                min: Some(0.0),
                max: Some(100.0),
                step: Some(5.0),
                unit: Some("%".to_string()),
                options: None,
            },
        ],
    };

    let subtitle_style = text_style(&engine, "hero-subtitle", &TextStyleDefaults::sized(14.0), true);
    let title_style = text_style(&engine, "hero-title", &TextStyleDefaults::sized(36.0), true);
    let description_defaults = TextStyleDefaults {
        font_size: 16.0,
        color: Some("#4b5563".to_string()),
        ..TextStyleDefaults::default()
    };
    let description_style = text_style(&engine, "hero-description", &description_defaults, true);
    let primary_button_style =
        text_style(&engine, "hero-primary-button", &TextStyleDefaults::sized(16.0), false);
    let secondary_button_style =
        text_style(&engine, "hero-secondary-button", &TextStyleDefaults::sized(16.0), false);

    let tagline = brand.tagline.clone().unwrap_or_default();
    let primary_label = brand
        .primary_button_label
        .clone()
        .unwrap_or_else(|| "Ver cupones destacados".to_string());
    let secondary_label = brand
        .secondary_button_label
        .clone()
        .unwrap_or_else(|| "Personalizar experiencia".to_string());
    let image_opacity_css = hero_image_opacity / 100.0;

    rsx! {
        section { class: "hero",
            EditableElement { element_config: image_config,
                if !hero_image_url.is_empty() {
                    img {
                        class: "hero-image",
                        src: "{hero_image_url}",
                        alt: "Imagen promocional",
                        style: "opacity: {image_opacity_css};",
                    }
                }
            }
            div { class: "hero-content",
                EditableElement {
                    element_config: text_config(
                        &engine,
                        "hero-subtitle",
                        "Subtítulo de portada",
                        ElementCategory::Hero,
                        FontSizeRange { default: 14.0, min: 10.0, max: 24.0, step: 1.0 },
                        "",
                    ),
                    p { class: "hero-subtitle", style: "{subtitle_style}", "Cupones de la semana" }
                }
                EditableElement {
                    element_config: text_config(
                        &engine,
                        "hero-title",
                        "Título de portada",
                        ElementCategory::Hero,
                        FontSizeRange { default: 36.0, min: 24.0, max: 72.0, step: 2.0 },
                        "",
                    ),
                    h2 { class: "hero-title", style: "{title_style}", "{brand.platform_name}" }
                }
                EditableElement {
                    element_config: text_config(
                        &engine,
                        "hero-description",
                        "Descripción de portada",
                        ElementCategory::Hero,
                        FontSizeRange { default: 16.0, min: 12.0, max: 24.0, step: 1.0 },
                        "#4b5563",
                    ),
                    p { class: "hero-description", style: "{description_style}", "{tagline}" }
                }
                div { class: "hero-buttons",
                    EditableElement {
                        element_config: text_config(
                            &engine,
                            "hero-primary-button",
                            "Botón primario",
                            ElementCategory::Button,
                            FontSizeRange { default: 16.0, min: 12.0, max: 24.0, step: 1.0 },
                            "",
                        ),
                        button { class: "hero-button primary", style: "{primary_button_style}", "{primary_label}" }
                    }
                    EditableElement {
                        element_config: text_config(
                            &engine,
                            "hero-secondary-button",
                            "Botón secundario",
                            ElementCategory::Button,
                            FontSizeRange { default: 16.0, min: 12.0, max: 24.0, step: 1.0 },
                            "",
                        ),
                        button { class: "hero-button", style: "{secondary_button_style}", "{secondary_label}" }
                    }
                }
            }
        }
    }
}

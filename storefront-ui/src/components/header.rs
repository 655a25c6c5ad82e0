use dioxus::prelude::*;
use shared_types::{BrandConfig, EditableElementConfig, ElementCategory};

use crate::personalization::{
    text_properties, text_style, use_personalization, EditableElement, FontSizeRange,
    PersonalizationModeToggle, TextStyleDefaults,
};

#[component]
pub fn CustomerHeader(brand: BrandConfig) -> Element {
    let engine = use_personalization();

    let title_style = text_style(&engine, "header-title", &TextStyleDefaults::sized(24.0), true);
    let tagline_defaults = TextStyleDefaults {
        font_size: 14.0,
        color: Some("#6b7280".to_string()),
        ..TextStyleDefaults::default()
    };
    let tagline_style = text_style(&engine, "header-tagline", &tagline_defaults, true);
    let tagline = brand.tagline.clone().unwrap_or_default();

    rsx! {
        header { class: "storefront-header",
            div { class: "storefront-header-inner",
                div { class: "storefront-header-text",
                    EditableElement {
                        element_config: EditableElementConfig {
                            element_id: "header-title".to_string(),
                            element_label: "Título del encabezado".to_string(),
                            element_type: "text".to_string(),
                            category: Some(ElementCategory::Header),
                            properties: text_properties(
                                &engine,
                                "header-title",
                                FontSizeRange { default: 24.0, min: 16.0, max: 48.0, step: 1.0 },
                                "",
                            ),
                        },
                        h1 { class: "storefront-title", style: "{title_style}", "{brand.platform_name}" }
                    }
                    EditableElement {
                        element_config: EditableElementConfig {
                            element_id: "header-tagline".to_string(),
                            element_label: "Lema del encabezado".to_string(),
                            element_type: "text".to_string(),
                            category: Some(ElementCategory::Header),
                            properties: text_properties(
                                &engine,
                                "header-tagline",
                                FontSizeRange { default: 14.0, min: 10.0, max: 22.0, step: 1.0 },
                                "#6b7280",
                            ),
                        },
                        p { class: "storefront-tagline", style: "{tagline_style}", "{tagline}" }
                    }
                }
                PersonalizationModeToggle {}
            }
        }
    }
}

use dioxus::prelude::*;
use shared_types::{Coupon, EditableElementConfig, ElementCategory};

use crate::api::fetch_coupons;
use crate::personalization::{
    text_properties, text_style, use_personalization, EditableElement, FontSizeRange,
    TextStyleDefaults,
};

#[component]
pub fn CouponsSection() -> Element {
    let engine = use_personalization();
    let mut coupons = use_signal(Vec::<Coupon>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    // Load the feed on mount
    use_effect(move || {
        spawn(async move {
            match fetch_coupons().await {
                Ok(list) => {
                    coupons.set(list);
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to fetch coupons: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    let section_title_style =
        text_style(&engine, "coupons-title", &TextStyleDefaults::sized(22.0), true);
    let error_message = error().unwrap_or_default();

    rsx! {
        section { class: "coupons-section",
            EditableElement {
                element_config: EditableElementConfig {
                    element_id: "coupons-title".to_string(),
                    element_label: "Título de la sección de cupones".to_string(),
                    element_type: "text".to_string(),
                    category: Some(ElementCategory::Text),
                    properties: text_properties(
                        &engine,
                        "coupons-title",
                        FontSizeRange { default: 22.0, min: 16.0, max: 40.0, step: 1.0 },
                        "",
                    ),
                },
                h2 { class: "coupons-title", style: "{section_title_style}", "Cupones disponibles" }
            }
            if loading() {
                p { class: "coupons-hint", "Cargando cupones..." }
            }
            if !loading() && !error_message.is_empty() {
                p { class: "coupons-hint error", "No fue posible cargar los cupones: {error_message}" }
            }
            if !loading() && error_message.is_empty() {
                div { class: "coupon-grid",
                    for coupon in coupons() {
                        CouponCard { key: "{coupon.id}", coupon: coupon.clone() }
                    }
                }
            }
        }
    }
}

/// One coupon card. Title, discount and description are individually
/// editable; ids are namespaced by coupon so repeated cards never collide in
/// the customization map.
#[component]
fn CouponCard(coupon: Coupon) -> Element {
    let engine = use_personalization();

    let title_id = format!("coupon-{}-title", coupon.id);
    let discount_id = format!("coupon-{}-discount", coupon.id);
    let description_id = format!("coupon-{}-description", coupon.id);

    let title_style = text_style(&engine, &title_id, &TextStyleDefaults::sized(18.0), true);
    let discount_style = text_style(&engine, &discount_id, &TextStyleDefaults::sized(16.0), false);
    let description_defaults = TextStyleDefaults {
        font_size: 14.0,
        color: Some("#4b5563".to_string()),
        ..TextStyleDefaults::default()
    };
    let description_style = text_style(&engine, &description_id, &description_defaults, true);

    rsx! {
        article { class: "coupon-card",
            div { class: "coupon-card-media",
                img { class: "coupon-card-image", src: "{coupon.image}", alt: "{coupon.title}" }
                if coupon.is_new {
                    span { class: "coupon-card-new", "Nuevo" }
                }
            }
            div { class: "coupon-card-body",
                EditableElement {
                    element_config: EditableElementConfig {
                        element_id: discount_id.clone(),
                        element_label: "Descuento del cupón".to_string(),
                        element_type: "coupon-card".to_string(),
                        category: Some(ElementCategory::Coupon),
                        properties: text_properties(
                            &engine,
                            &discount_id,
                            FontSizeRange { default: 16.0, min: 12.0, max: 24.0, step: 1.0 },
                            "",
                        ),
                    },
                    span { class: "coupon-discount", style: "{discount_style}", "{coupon.discount}" }
                }
                EditableElement {
                    element_config: EditableElementConfig {
                        element_id: title_id.clone(),
                        element_label: "Título del cupón".to_string(),
                        element_type: "coupon-card".to_string(),
                        category: Some(ElementCategory::Coupon),
                        properties: text_properties(
                            &engine,
                            &title_id,
                            FontSizeRange { default: 18.0, min: 14.0, max: 28.0, step: 1.0 },
                            "",
                        ),
                    },
                    h3 { class: "coupon-card-title", style: "{title_style}", "{coupon.title}" }
                }
                EditableElement {
                    element_config: EditableElementConfig {
                        element_id: description_id.clone(),
                        element_label: "Descripción del cupón".to_string(),
                        element_type: "coupon-card".to_string(),
                        category: Some(ElementCategory::Coupon),
                        properties: text_properties(
                            &engine,
                            &description_id,
                            FontSizeRange { default: 14.0, min: 11.0, max: 20.0, step: 1.0 },
                            "#4b5563",
                        ),
                    },
                    p { class: "coupon-card-description", style: "{description_style}", "{coupon.description}" }
                }
                footer { class: "coupon-card-footer",
                    small { class: "coupon-card-terms", "{coupon.terms}" }
                    div { class: "coupon-card-meta",
                        span { "Vence: {coupon.expiry_date}" }
                        span { class: "coupon-card-code", "{coupon.redemption_code}" }
                    }
                }
            }
        }
    }
}

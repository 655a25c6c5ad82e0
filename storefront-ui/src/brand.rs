//! White-label brand application.
//!
//! Writes the brand palette into CSS custom properties on the document root
//! so the stylesheet picks it up everywhere.

use shared_types::BrandConfig;

pub fn apply_brand_colors(config: &BrandConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };

    let mut style = format!(
        "--primary: {}; --accent: {};",
        config.primary_color, config.accent_color
    );
    if let Some(background) = &config.background_color {
        style.push_str(&format!(" --brand-background: {background};"));
    }

    let _ = root.set_attribute("style", &style);
}

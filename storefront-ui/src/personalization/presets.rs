//! Shared property presets for text-bearing elements.
//!
//! Every text element gets the same six tunables (size, color, family,
//! spacing, background, decoration); these builders keep the element configs
//! and the rendered inline styles in agreement.

use shared_types::{EditableProperty, PropertyKind, PropertyValue, SelectOption};

use crate::personalization::context::Personalization;

pub const FONT_FAMILY_OPTIONS: &[(&str, &str)] = &[
    ("Sans (Inter)", "var(--font-sans, Inter, system-ui, sans-serif)"),
    ("Serif (Playfair)", "\"Playfair Display\", \"Times New Roman\", serif"),
    ("Redondeada (Quicksand)", "\"Quicksand\", \"Nunito\", sans-serif"),
    ("Condensada (Oswald)", "\"Oswald\", \"Arial Narrow\", sans-serif"),
    (
        "Monoespaciada (Space Mono)",
        "\"Space Mono\", \"Roboto Mono\", monospace",
    ),
];

pub const TEXT_DECORATION_OPTIONS: &[(&str, &str)] = &[
    ("Sin decoración", "none"),
    ("Subrayado", "underline"),
    ("Tachado", "line-through"),
    ("Sobrelínea", "overline"),
];

pub const LETTER_SPACING_MIN: f64 = -2.0;
pub const LETTER_SPACING_MAX: f64 = 10.0;
pub const LETTER_SPACING_STEP: f64 = 0.5;

pub fn default_font_family() -> &'static str {
    FONT_FAMILY_OPTIONS[0].1
}

fn select_options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|(label, value)| SelectOption {
            label: (*label).to_string(),
            value: PropertyValue::text(*value),
        })
        .collect()
}

fn property(id: &str, label: &str, kind: PropertyKind, value: PropertyValue) -> EditableProperty {
    EditableProperty {
        id: id.to_string(),
        label: label.to_string(),
        kind,
        value,
        min: None,
        max: None,
        step: None,
        unit: None,
        options: None,
    }
}

/// Slider bounds for an element's font size.
#[derive(Debug, Clone, Copy)]
pub struct FontSizeRange {
    pub default: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// The standard text-element property list, with each default resolved to
/// the current effective value so the panel opens showing what is rendered.
pub fn text_properties(
    engine: &Personalization,
    element_id: &str,
    font: FontSizeRange,
    color_default: &str,
) -> Vec<EditableProperty> {
    let mut font_size = property(
        "fontSize",
        "Tamaño de fuente",
        PropertyKind::FontSize,
        PropertyValue::number(engine.get_number(element_id, "fontSize", font.default)),
    );
    font_size.min = Some(font.min);
    font_size.max = Some(font.max);
    font_size.step = Some(font.step);
    font_size.unit = Some("px".to_string());

    let mut letter_spacing = property(
        "letterSpacing",
        "Espaciado entre letras",
        PropertyKind::Number,
        PropertyValue::number(engine.get_number(element_id, "letterSpacing", 0.0)),
    );
    letter_spacing.min = Some(LETTER_SPACING_MIN);
    letter_spacing.max = Some(LETTER_SPACING_MAX);
    letter_spacing.step = Some(LETTER_SPACING_STEP);
    letter_spacing.unit = Some("px".to_string());

    let mut font_family = property(
        "fontFamily",
        "Tipografía",
        PropertyKind::Select,
        PropertyValue::text(engine.get_text(element_id, "fontFamily", default_font_family())),
    );
    font_family.options = Some(select_options(FONT_FAMILY_OPTIONS));

    let mut text_decoration = property(
        "textDecoration",
        "Decoración del texto",
        PropertyKind::Select,
        PropertyValue::text(engine.get_text(element_id, "textDecoration", "none")),
    );
    text_decoration.options = Some(select_options(TEXT_DECORATION_OPTIONS));

    vec![
        font_size,
        property(
            "color",
            "Color del texto",
            PropertyKind::Color,
            PropertyValue::text(engine.get_text(element_id, "color", color_default)),
        ),
        font_family,
        letter_spacing,
        property(
            "backgroundColor",
            "Fondo del texto",
            PropertyKind::Color,
            PropertyValue::text(engine.get_text(element_id, "backgroundColor", "")),
        ),
        text_decoration,
    ]
}

/// Defaults used when no customization exists for a text element.
#[derive(Debug, Clone, Default)]
pub struct TextStyleDefaults {
    pub font_size: f64,
    pub color: Option<String>,
    pub font_family: Option<String>,
    pub letter_spacing: Option<f64>,
    pub background_color: Option<String>,
    pub text_decoration: Option<String>,
}

impl TextStyleDefaults {
    pub fn sized(font_size: f64) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }
}

/// Resolve an element's effective text styling into an inline CSS string.
/// `highlight_background` pads and rounds a non-transparent background so it
/// reads as a highlight behind the text.
pub fn text_style(
    engine: &Personalization,
    element_id: &str,
    defaults: &TextStyleDefaults,
    highlight_background: bool,
) -> String {
    let font_size = engine.get_number(element_id, "fontSize", defaults.font_size);
    let color = engine.get_text(element_id, "color", defaults.color.as_deref().unwrap_or(""));
    let font_family = engine.get_text(
        element_id,
        "fontFamily",
        defaults.font_family.as_deref().unwrap_or(default_font_family()),
    );
    let letter_spacing =
        engine.get_number(element_id, "letterSpacing", defaults.letter_spacing.unwrap_or(0.0));
    let background_color = engine.get_text(
        element_id,
        "backgroundColor",
        defaults.background_color.as_deref().unwrap_or(""),
    );
    let text_decoration = engine.get_text(
        element_id,
        "textDecoration",
        defaults.text_decoration.as_deref().unwrap_or("none"),
    );

    let mut style = format!(
        "font-size: {font_size}px; letter-spacing: {letter_spacing}px; text-decoration: {text_decoration};"
    );

    if !color.is_empty() {
        style.push_str(&format!(" color: {color};"));
    }
    if !font_family.is_empty() {
        style.push_str(&format!(" font-family: {font_family};"));
    }
    if !background_color.is_empty() && background_color != "transparent" {
        style.push_str(&format!(" background-color: {background_color};"));
        if highlight_background {
            style.push_str(" display: inline-block; padding: 0.1em 0.35em; border-radius: 0.45rem;");
        }
    }

    style
}

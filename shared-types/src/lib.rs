//! Shared types between frontend and backend
//!
//! These types are used by both:
//! - the axum storefront server (native Rust)
//! - the Dioxus storefront UI (WASM)
//!
//! Serializable with serde for JSON over HTTP. The personalization state
//! machine lives here too: it is pure data-in/data-out, so both sides can
//! depend on it and the unit tests run natively.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Property Model
// ============================================================================

/// Value carried by one editable property.
///
/// Serialized untagged, so the wire format is a bare JSON string, number or
/// bool — the shape the persisted customization documents use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Number(serde_json::Number),
    Toggle(bool),
}

impl PropertyValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Numeric value. Integral floats collapse to JSON integers so a slider
    /// at 40.0 persists as `40`, the way the stored documents are written.
    pub fn number(value: f64) -> Self {
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            Self::Number(serde_json::Number::from(value as i64))
        } else {
            serde_json::Number::from_f64(value)
                .map(Self::Number)
                .unwrap_or_else(|| Self::Number(serde_json::Number::from(0)))
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Toggle(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Number(serde_json::Number::from(value))
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Toggle(value)
    }
}

/// Which editor control a property gets in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKind {
    Color,
    Image,
    Number,
    Select,
    FontSize,
    Spacing,
    BorderRadius,
}

impl PropertyKind {
    /// Numeric kinds render as a bounded slider.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Number | Self::FontSize | Self::Spacing | Self::BorderRadius
        )
    }
}

/// One entry of a `select` property's closed option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: PropertyValue,
}

/// One tunable attribute of one element.
///
/// `value` is the default shown when no customization exists; numeric kinds
/// carry numbers, `select`/`color`/`image` carry strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditableProperty {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub value: PropertyValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
}

/// Coarse grouping used for panel iconography only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    Header,
    Hero,
    Coupon,
    Button,
    Text,
    Image,
}

/// One addressable UI region.
///
/// `element_id` must be unique across the whole UI tree at any instant; two
/// elements reusing an id silently share customizations, because the
/// customization map is keyed by it. Namespace ids (e.g. `coupon-{id}-title`)
/// where elements repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableElementConfig {
    pub element_id: String,
    pub element_label: String,
    pub element_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ElementCategory>,
    pub properties: Vec<EditableProperty>,
}

// ============================================================================
// Customization Store
// ============================================================================

/// elementId → propertyId → value. The sole persisted artifact.
pub type CustomizationMap = HashMap<String, HashMap<String, PropertyValue>>;

/// Pure lookup behind `get_customization`: the single read path every
/// consuming UI fragment uses instead of reading props directly.
pub fn lookup<'a>(
    map: &'a CustomizationMap,
    element_id: &str,
    property_id: &str,
) -> Option<&'a PropertyValue> {
    map.get(element_id).and_then(|props| props.get(property_id))
}

/// Root state of the personalization engine. Created once per session and
/// mutated exclusively through [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalizationState {
    pub is_edit_mode: bool,
    pub selected_element: Option<EditableElementConfig>,
    /// Current, possibly unsaved, working set. Always equals
    /// `history[history_index]`.
    pub customizations: CustomizationMap,
    /// Whole-map snapshots for undo/redo. Never empty: entry 0 is the map
    /// the session started from.
    pub history: Vec<CustomizationMap>,
    pub history_index: usize,
}

impl Default for PersonalizationState {
    fn default() -> Self {
        Self {
            is_edit_mode: false,
            selected_element: None,
            customizations: CustomizationMap::new(),
            history: vec![CustomizationMap::new()],
            history_index: 0,
        }
    }
}

/// State transitions of the personalization engine.
#[derive(Debug, Clone, PartialEq)]
pub enum PersonalizationAction {
    SetEditMode(bool),
    SelectElement(Option<EditableElementConfig>),
    UpdateProperty {
        element_id: String,
        property_id: String,
        value: PropertyValue,
    },
    Undo,
    Redo,
    Reset,
    LoadCustomizations(CustomizationMap),
}

/// Pure state-transition function. No I/O; the context layer owns all of
/// that. Malformed input returns the state unchanged — the reducer never
/// fails.
pub fn reduce(
    state: &PersonalizationState,
    action: PersonalizationAction,
) -> PersonalizationState {
    match action {
        PersonalizationAction::SetEditMode(enabled) => {
            let mut next = state.clone();
            next.is_edit_mode = enabled;
            if !enabled {
                // Exiting edit mode always deselects.
                next.selected_element = None;
            }
            next
        }

        PersonalizationAction::SelectElement(config) => {
            let mut next = state.clone();
            next.selected_element = config;
            next
        }

        PersonalizationAction::UpdateProperty {
            element_id,
            property_id,
            value,
        } => {
            if element_id.is_empty() || property_id.is_empty() {
                return state.clone();
            }

            let mut customizations = state.customizations.clone();
            customizations
                .entry(element_id)
                .or_default()
                .insert(property_id, value);

            // Truncate any redo-able future, then append the new snapshot.
            // Every discrete edit is one undoable step; no coalescing.
            let mut history: Vec<CustomizationMap> = state
                .history
                .get(..=state.history_index)
                .unwrap_or(&state.history)
                .to_vec();
            history.push(customizations.clone());
            let history_index = history.len() - 1;

            PersonalizationState {
                is_edit_mode: state.is_edit_mode,
                selected_element: state.selected_element.clone(),
                customizations,
                history,
                history_index,
            }
        }

        PersonalizationAction::Undo => {
            if state.history_index == 0 {
                return state.clone();
            }
            let mut next = state.clone();
            next.history_index -= 1;
            next.customizations = next.history[next.history_index].clone();
            next
        }

        PersonalizationAction::Redo => {
            if state.history_index + 1 >= state.history.len() {
                return state.clone();
            }
            let mut next = state.clone();
            next.history_index += 1;
            next.customizations = next.history[next.history_index].clone();
            next
        }

        PersonalizationAction::Reset => {
            // Edit mode is untouched; everything else returns to the empty
            // default.
            PersonalizationState {
                is_edit_mode: state.is_edit_mode,
                ..PersonalizationState::default()
            }
        }

        PersonalizationAction::LoadCustomizations(map) => {
            // A load is not an undoable edit: it replaces history rather
            // than appending, discarding prior undo steps.
            let mut next = state.clone();
            next.customizations = map.clone();
            next.history = vec![map];
            next.history_index = 0;
            next
        }
    }
}

// ============================================================================
// Persistence Wire Types
// ============================================================================

/// Full persisted document, as returned by `GET /api/personalizations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizationsDocument {
    #[serde(default)]
    pub customizations: CustomizationMap,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl PersonalizationsDocument {
    pub fn empty() -> Self {
        Self {
            customizations: CustomizationMap::new(),
            last_updated: None,
        }
    }
}

/// Body of `POST /api/personalizations`. Always the entire current map, not
/// a diff; the backend overwrites at document granularity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePersonalizationsRequest {
    pub customizations: CustomizationMap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePersonalizationsResponse {
    pub success: bool,
    pub last_updated: String,
}

// ============================================================================
// Storefront Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponCategory {
    Food,
    Retail,
    Services,
    Entertainment,
}

impl CouponCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "Gastronomía",
            Self::Retail => "Tiendas",
            Self::Services => "Servicios",
            Self::Entertainment => "Entretenimiento",
        }
    }
}

/// One promotional coupon as displayed in the storefront grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: String,
    pub business_id: String,
    pub title: String,
    pub description: String,
    pub discount: String,
    pub image: String,
    pub terms: String,
    pub expiry_date: String,
    pub category: CouponCategory,
    pub redemption_code: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponFeedResponse {
    pub success: bool,
    pub coupons: Vec<Coupon>,
}

/// White-label branding applied to the storefront shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandConfig {
    pub platform_name: String,
    pub primary_color: String,
    pub accent_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_button_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_button_label: Option<String>,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            platform_name: "Cuponera Digital".to_string(),
            primary_color: "oklch(0.48 0.14 255)".to_string(),
            accent_color: "oklch(0.70 0.17 40)".to_string(),
            tagline: Some("Ofertas locales para tu comunidad, en un solo lugar.".to_string()),
            background_color: Some("#f7f7fb".to_string()),
            hero_image_url: Some(
                "https://images.unsplash.com/photo-1556740738-b6a63e27c4df?w=1200&h=600&fit=crop"
                    .to_string(),
            ),
            logo_url: None,
            primary_button_label: Some("Ver cupones destacados".to_string()),
            secondary_button_label: Some("Personalizar experiencia".to_string()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn update(element_id: &str, property_id: &str, value: impl Into<PropertyValue>) -> PersonalizationAction {
        PersonalizationAction::UpdateProperty {
            element_id: element_id.to_string(),
            property_id: property_id.to_string(),
            value: value.into(),
        }
    }

    fn config(element_id: &str) -> EditableElementConfig {
        EditableElementConfig {
            element_id: element_id.to_string(),
            element_label: "Título".to_string(),
            element_type: "text".to_string(),
            category: Some(ElementCategory::Header),
            properties: vec![],
        }
    }

    #[test]
    fn reducer_is_pure_and_repeatable() {
        let state = reduce(
            &PersonalizationState::default(),
            update("hero-title", "fontSize", 40i64),
        );
        let before = state.clone();

        let once = reduce(&state, update("hero-title", "color", "#ff0000"));
        let twice = reduce(&state, update("hero-title", "color", "#ff0000"));

        assert_eq!(once, twice);
        assert_eq!(state, before, "input state must never be mutated");
    }

    #[test]
    fn exiting_edit_mode_always_deselects() {
        let mut state = PersonalizationState::default();
        state = reduce(&state, PersonalizationAction::SetEditMode(true));
        state = reduce(
            &state,
            PersonalizationAction::SelectElement(Some(config("header-title"))),
        );
        assert!(state.selected_element.is_some());

        state = reduce(&state, PersonalizationAction::SetEditMode(false));
        assert!(!state.is_edit_mode);
        assert_eq!(state.selected_element, None);
    }

    #[test]
    fn selecting_none_deselects_without_touching_edit_mode() {
        let mut state = reduce(
            &PersonalizationState::default(),
            PersonalizationAction::SetEditMode(true),
        );
        state = reduce(
            &state,
            PersonalizationAction::SelectElement(Some(config("hero-title"))),
        );
        state = reduce(&state, PersonalizationAction::SelectElement(None));

        assert!(state.is_edit_mode);
        assert_eq!(state.selected_element, None);
    }

    #[test]
    fn update_appends_one_history_entry_per_dispatch() {
        let mut state = PersonalizationState::default();
        state = reduce(&state, update("hero-title", "fontSize", 38i64));
        state = reduce(&state, update("hero-title", "fontSize", 40i64));
        state = reduce(&state, update("hero-title", "fontSize", 42i64));

        // Rapid successive edits to the same property are not coalesced.
        assert_eq!(state.history.len(), 4);
        assert_eq!(state.history_index, 3);
        assert_eq!(
            lookup(&state.customizations, "hero-title", "fontSize"),
            Some(&PropertyValue::from(42i64))
        );
    }

    #[test]
    fn update_preserves_sibling_properties_and_elements() {
        let mut state = PersonalizationState::default();
        state = reduce(&state, update("hero-title", "fontSize", 40i64));
        state = reduce(&state, update("hero-title", "color", "#112233"));
        state = reduce(&state, update("header-title", "fontSize", 24i64));

        assert_eq!(
            lookup(&state.customizations, "hero-title", "fontSize"),
            Some(&PropertyValue::from(40i64))
        );
        assert_eq!(
            lookup(&state.customizations, "hero-title", "color"),
            Some(&PropertyValue::from("#112233"))
        );
        assert_eq!(
            lookup(&state.customizations, "header-title", "fontSize"),
            Some(&PropertyValue::from(24i64))
        );
    }

    #[test]
    fn undo_redo_inverse_law() {
        let initial = PersonalizationState::default();
        let edits = [
            update("a", "x", 1i64),
            update("b", "y", 2i64),
            update("c", "z", 3i64),
        ];

        let mut state = initial.clone();
        for edit in &edits {
            state = reduce(&state, edit.clone());
        }
        let final_map = state.customizations.clone();

        for _ in 0..edits.len() {
            state = reduce(&state, PersonalizationAction::Undo);
        }
        assert_eq!(state.customizations, initial.customizations);

        for _ in 0..edits.len() {
            state = reduce(&state, PersonalizationAction::Redo);
        }
        assert_eq!(state.customizations, final_map);
    }

    #[test]
    fn undo_at_floor_and_redo_at_ceiling_are_noops() {
        let state = reduce(
            &PersonalizationState::default(),
            update("a", "x", 1i64),
        );

        let at_ceiling = reduce(&state, PersonalizationAction::Redo);
        assert_eq!(at_ceiling, state);

        let floor = reduce(&state, PersonalizationAction::Undo);
        let below_floor = reduce(&floor, PersonalizationAction::Undo);
        assert_eq!(below_floor, floor);
    }

    #[test]
    fn history_truncates_on_branch() {
        let mut state = PersonalizationState::default();
        state = reduce(&state, update("a", "x", 1i64));
        state = reduce(&state, update("a", "x", 2i64));
        state = reduce(&state, update("a", "x", 3i64));

        state = reduce(&state, PersonalizationAction::Undo);
        state = reduce(&state, PersonalizationAction::Undo);
        state = reduce(&state, update("a", "x", 9i64));

        // initial + first edit + branch edit; the undone future is gone.
        assert_eq!(state.history.len(), 3);
        let redone = reduce(&state, PersonalizationAction::Redo);
        assert_eq!(redone, state);
    }

    #[test]
    fn load_replaces_history_instead_of_appending() {
        let mut state = PersonalizationState::default();
        state = reduce(&state, update("a", "x", 1i64));
        state = reduce(&state, update("b", "y", 2i64));

        let mut loaded = CustomizationMap::new();
        loaded
            .entry("hero-title".to_string())
            .or_default()
            .insert("fontSize".to_string(), PropertyValue::from(40i64));

        state = reduce(
            &state,
            PersonalizationAction::LoadCustomizations(loaded.clone()),
        );

        assert_eq!(state.customizations, loaded);
        assert_eq!(state.history, vec![loaded]);
        assert_eq!(state.history_index, 0);
    }

    #[test]
    fn reset_is_idempotent_and_keeps_edit_mode() {
        let mut state = reduce(
            &PersonalizationState::default(),
            PersonalizationAction::SetEditMode(true),
        );
        state = reduce(&state, update("a", "x", 1i64));
        state = reduce(
            &state,
            PersonalizationAction::SelectElement(Some(config("a"))),
        );

        let once = reduce(&state, PersonalizationAction::Reset);
        let twice = reduce(&once, PersonalizationAction::Reset);

        assert_eq!(once, twice);
        assert!(once.is_edit_mode);
        assert!(once.customizations.is_empty());
        assert_eq!(once.history, vec![CustomizationMap::new()]);
        assert_eq!(once.history_index, 0);
        assert_eq!(once.selected_element, None);
    }

    #[test]
    fn malformed_update_is_a_noop() {
        let state = reduce(
            &PersonalizationState::default(),
            update("a", "x", 1i64),
        );

        let missing_element = reduce(&state, update("", "x", 2i64));
        assert_eq!(missing_element, state);
        assert_eq!(missing_element.history.len(), state.history.len());

        let missing_property = reduce(&state, update("a", "", 2i64));
        assert_eq!(missing_property, state);
    }

    #[test]
    fn undo_restores_whole_map_snapshots_across_elements() {
        let mut state = PersonalizationState::default();
        state = reduce(&state, update("a", "x", 1i64));
        state = reduce(&state, update("b", "y", 2i64));

        state = reduce(&state, PersonalizationAction::Undo);

        // History holds whole-map snapshots, not per-element deltas: b's
        // edit is removed, a's remains.
        assert_eq!(
            lookup(&state.customizations, "a", "x"),
            Some(&PropertyValue::from(1i64))
        );
        assert_eq!(lookup(&state.customizations, "b", "y"), None);
    }

    #[test]
    fn lookup_misses_leave_the_default_untouched() {
        let state = reduce(
            &PersonalizationState::default(),
            update("hero-title", "fontSize", 40i64),
        );

        assert_eq!(lookup(&state.customizations, "hero-title", "color"), None);
        assert_eq!(lookup(&state.customizations, "never-written", "fontSize"), None);

        let default = PropertyValue::from(36i64);
        let value = lookup(&state.customizations, "never-written", "fontSize")
            .cloned()
            .unwrap_or(default.clone());
        assert_eq!(value, default);
    }

    #[test]
    fn save_payload_wire_format() {
        let state = reduce(
            &PersonalizationState::default(),
            update("hero-title", "fontSize", PropertyValue::number(40.0)),
        );

        let request = SavePersonalizationsRequest {
            customizations: state.customizations,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"customizations":{"hero-title":{"fontSize":40}}}"#
        );
    }

    #[test]
    fn property_value_roundtrips_untagged() {
        let values = [
            PropertyValue::from("#ff8800"),
            PropertyValue::from(40i64),
            PropertyValue::number(2.5),
            PropertyValue::from(true),
        ];

        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let back: PropertyValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value);
        }

        assert_eq!(
            serde_json::to_string(&PropertyValue::number(40.0)).unwrap(),
            "40"
        );
    }

    #[test]
    fn element_config_uses_camel_case_wire_names() {
        let config = EditableElementConfig {
            element_id: "hero-title".to_string(),
            element_label: "Título del héroe".to_string(),
            element_type: "text".to_string(),
            category: Some(ElementCategory::Hero),
            properties: vec![EditableProperty {
                id: "fontSize".to_string(),
                label: "Tamaño de fuente".to_string(),
                kind: PropertyKind::FontSize,
                value: PropertyValue::from(36i64),
                min: Some(24.0),
                max: Some(72.0),
                step: Some(2.0),
                unit: Some("px".to_string()),
                options: None,
            }],
        };

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["elementId"], "hero-title");
        assert_eq!(json["category"], "hero");
        assert_eq!(json["properties"][0]["type"], "fontSize");
        assert_eq!(json["properties"][0]["unit"], "px");

        let back: EditableElementConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn personalizations_document_tolerates_missing_fields() {
        let doc: PersonalizationsDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.customizations.is_empty());
        assert_eq!(doc.last_updated, None);
    }

    #[test]
    fn coupon_wire_format_is_camel_case() {
        let coupon = Coupon {
            id: "cup-001".to_string(),
            business_id: "biz-001".to_string(),
            title: "2x1 en café".to_string(),
            description: "Llévate dos bebidas por el precio de una.".to_string(),
            discount: "2x1".to_string(),
            image: "https://example.com/cafe.jpg".to_string(),
            terms: "Válido de lunes a jueves.".to_string(),
            expiry_date: "2026-12-31".to_string(),
            category: CouponCategory::Food,
            redemption_code: "CAFE-2X1".to_string(),
            is_new: true,
            is_active: true,
        };

        let json = serde_json::to_value(&coupon).unwrap();
        assert_eq!(json["businessId"], "biz-001");
        assert_eq!(json["expiryDate"], "2026-12-31");
        assert_eq!(json["category"], "food");

        let back: Coupon = serde_json::from_value(json).unwrap();
        assert_eq!(back, coupon);
    }
}

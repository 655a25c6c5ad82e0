//! The in-browser personalization engine.
//!
//! A pure reducer (in `shared-types`) wrapped by a context handle that owns
//! all I/O, plus the three UI surfaces: the clickable element wrapper, the
//! floating editor panel, and the edit-mode toggle.

pub mod context;
pub mod editable;
pub mod panel;
pub mod presets;
pub mod storage;
pub mod toggle;

pub use context::{use_personalization, Personalization, PersonalizationProvider, SaveOutcome};
pub use editable::EditableElement;
pub use panel::FloatingPersonalizationPanel;
pub use presets::{text_properties, text_style, FontSizeRange, TextStyleDefaults};
pub use toggle::PersonalizationModeToggle;

//! Session controller for the personalization engine.
//!
//! Wraps the pure reducer in a context-provided handle and owns every piece
//! of I/O: the load-on-mount fetch, explicit saves, and the best-effort
//! backend clear on reset. The reducer itself never sees an error.

use dioxus::prelude::*;
use shared_types::{
    lookup, reduce, EditableElementConfig, PersonalizationAction, PersonalizationState,
    PropertyValue,
};

use crate::api;
use crate::personalization::storage;

/// Handle to the engine state. `Copy`, so event handlers capture it freely;
/// all consumers share the one `Signal` provided by
/// [`PersonalizationProvider`] — there is no ambient global.
#[derive(Clone, Copy)]
pub struct Personalization {
    state: Signal<PersonalizationState>,
    save_epoch: Signal<u32>,
}

/// What became of a save: either this call's payload is durably persisted,
/// or a newer save started while it was in flight and owns the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Superseded,
}

impl Personalization {
    fn dispatch(&self, action: PersonalizationAction) {
        let next = reduce(&self.state.peek(), action);
        let mut state = self.state;
        state.set(next);
    }

    // -- reads (subscribe the calling component) ---------------------------

    pub fn is_edit_mode(&self) -> bool {
        self.state.read().is_edit_mode
    }

    pub fn selected_element(&self) -> Option<EditableElementConfig> {
        self.state.read().selected_element.clone()
    }

    pub fn selected_element_id(&self) -> Option<String> {
        self.state
            .read()
            .selected_element
            .as_ref()
            .map(|config| config.element_id.clone())
    }

    pub fn can_undo(&self) -> bool {
        self.state.read().history_index > 0
    }

    pub fn can_redo(&self) -> bool {
        let state = self.state.read();
        state.history_index + 1 < state.history.len()
    }

    /// The single read path for effective property values: the customization
    /// override if present, else the caller's default. Reading through here
    /// is what makes an edit visible live everywhere the element renders.
    pub fn get(&self, element_id: &str, property_id: &str, default: PropertyValue) -> PropertyValue {
        let state = self.state.read();
        lookup(&state.customizations, element_id, property_id)
            .cloned()
            .unwrap_or(default)
    }

    pub fn get_number(&self, element_id: &str, property_id: &str, default: f64) -> f64 {
        let state = self.state.read();
        lookup(&state.customizations, element_id, property_id)
            .and_then(PropertyValue::as_number)
            .unwrap_or(default)
    }

    pub fn get_text(&self, element_id: &str, property_id: &str, default: &str) -> String {
        let state = self.state.read();
        lookup(&state.customizations, element_id, property_id)
            .and_then(PropertyValue::as_str)
            .unwrap_or(default)
            .to_string()
    }

    // -- synchronous transitions -------------------------------------------

    pub fn set_edit_mode(&self, enabled: bool) {
        self.dispatch(PersonalizationAction::SetEditMode(enabled));
    }

    pub fn select_element(&self, config: Option<EditableElementConfig>) {
        self.dispatch(PersonalizationAction::SelectElement(config));
    }

    pub fn update_property(
        &self,
        element_id: impl Into<String>,
        property_id: impl Into<String>,
        value: PropertyValue,
    ) {
        self.dispatch(PersonalizationAction::UpdateProperty {
            element_id: element_id.into(),
            property_id: property_id.into(),
            value,
        });
    }

    pub fn undo(&self) {
        self.dispatch(PersonalizationAction::Undo);
    }

    pub fn redo(&self) {
        self.dispatch(PersonalizationAction::Redo);
    }

    /// Clear every element's customizations. The in-memory reset is
    /// synchronous and always succeeds; the backend document and local cache
    /// are cleared best-effort afterwards, failures logged only.
    pub fn reset(&self) {
        self.dispatch(PersonalizationAction::Reset);

        spawn(async move {
            if let Err(e) = api::clear_personalizations().await {
                log::warn!("Failed to clear customizations on server: {e}");
            }
            storage::clear_cached_customizations();
        });
    }

    // -- persistence -------------------------------------------------------

    /// Persist the entire current map. Writes through to the local cache on
    /// success; on backend failure the cache is still written and the error
    /// is returned so the panel can show it. If a newer save starts while
    /// this one is in flight, this call reports `Superseded` instead of an
    /// outcome that would clobber the newer save's status.
    pub async fn save_customizations(self) -> Result<SaveOutcome, String> {
        let epoch = {
            let mut epoch_signal = self.save_epoch;
            let next = *epoch_signal.peek() + 1;
            epoch_signal.set(next);
            next
        };
        let customizations = self.state.peek().customizations.clone();

        let result = api::save_personalizations(&customizations).await;

        // Cache in both arms: a reload must see the latest edits even when
        // the backend is down.
        storage::set_cached_customizations(&customizations);

        if *self.save_epoch.peek() != epoch {
            return Ok(SaveOutcome::Superseded);
        }

        match result {
            Ok(_) => Ok(SaveOutcome::Saved),
            Err(e) => Err(e),
        }
    }
}

/// Provides the engine to the whole subtree and kicks off the one-time load
/// of persisted customizations.
#[component]
pub fn PersonalizationProvider(children: Element) -> Element {
    let engine = use_context_provider(|| Personalization {
        state: Signal::new(PersonalizationState::default()),
        save_epoch: Signal::new(0),
    });

    // Fire-and-forget relative to rendering: the UI renders with defaults
    // immediately and pops to loaded values once the fetch resolves.
    use_effect(move || {
        spawn(async move {
            load_customizations(engine).await;
        });
    });

    rsx! {
        {children}
    }
}

pub fn use_personalization() -> Personalization {
    use_context::<Personalization>()
}

/// Backend → local cache → built-in empty default. Load failures are silent;
/// the engine simply keeps rendering defaults.
async fn load_customizations(engine: Personalization) {
    match api::fetch_personalizations().await {
        Ok(doc) if !doc.customizations.is_empty() => {
            engine.dispatch(PersonalizationAction::LoadCustomizations(doc.customizations));
        }
        Ok(_) => {
            // Nothing persisted yet.
        }
        Err(e) => {
            log::warn!("Failed to load customizations from server: {e}; trying local cache");
            if let Some(cached) = storage::get_cached_customizations() {
                engine.dispatch(PersonalizationAction::LoadCustomizations(cached));
            }
        }
    }
}

//! Local fallback cache for the customization map.
//!
//! One localStorage entry holding the JSON-serialized map. Read when the
//! backend load fails, written through on every successful save, cleared
//! best-effort on reset.

use shared_types::CustomizationMap;

const CUSTOMIZATIONS_KEY: &str = "personalization-customizations";

pub fn get_cached_customizations() -> Option<CustomizationMap> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CUSTOMIZATIONS_KEY).ok().flatten())
        .and_then(|raw| serde_json::from_str(&raw).ok())
}

pub fn set_cached_customizations(customizations: &CustomizationMap) {
    let Ok(json) = serde_json::to_string(customizations) else {
        return;
    };

    if let Some(storage) =
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.set_item(CUSTOMIZATIONS_KEY, &json);
    }
}

pub fn clear_cached_customizations() {
    if let Some(storage) =
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.remove_item(CUSTOMIZATIONS_KEY);
    }
}

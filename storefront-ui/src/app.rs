use dioxus::prelude::*;
use shared_types::BrandConfig;

use crate::brand::apply_brand_colors;
use crate::components::styles::APP_STYLES;
use crate::components::{CouponsSection, CustomerHeader, HeroSection};
use crate::personalization::{FloatingPersonalizationPanel, PersonalizationProvider};

#[component]
pub fn App() -> Element {
    let brand = use_signal(BrandConfig::default);

    // Push the brand palette into CSS custom properties on the root.
    use_effect(move || {
        apply_brand_colors(&brand.read());
    });

    rsx! {
        style { {APP_STYLES} }
        PersonalizationProvider {
            div { class: "storefront",
                CustomerHeader { brand: brand() }
                main { class: "storefront-main",
                    HeroSection { brand: brand() }
                    CouponsSection {}
                }
            }
            FloatingPersonalizationPanel {}
        }
    }
}

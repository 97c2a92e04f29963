// =============================================================================
// Voltwerk Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. App State
// 2. Pack Designer Actions
// =============================================================================

use gloo_storage::Storage;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use voltwerk_core::input::ConfigField;
use voltwerk_core::pack::{CellFormFactor, PackConfiguration, PackResult};

use crate::i18n::Language;

/// Delay before the flow cue re-arms after a calculation, long enough for
/// the browser to notice the animation classes dropped off.
const FLOW_RESTART_DELAY_MS: u32 = 100;

// -----------------------------------------------------------------------------
// 1. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
///
/// Everything here is per-visit: the language choice is mirrored to
/// localStorage as a UI preference, the pack configuration and results
/// live and die with the tab.
#[derive(Clone)]
pub struct AppState {
    /// Current UI language.
    pub language: RwSignal<Language>,

    /// The sizing form, as last edited.
    pub config: RwSignal<PackConfiguration>,

    /// Figures derived from the configuration at the last calculate click.
    /// `None` until the first click.
    pub result: RwSignal<Option<PackResult>>,

    /// Whether the schematic's current-flow cue is armed. Dropped and
    /// re-armed around each calculation so the animation restarts.
    pub flow: RwSignal<bool>,
}

impl AppState {
    /// Create a new app state instance.
    pub fn new() -> Self {
        // Check localStorage for a saved language preference
        let language = gloo_storage::LocalStorage::get::<String>("language")
            .ok()
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();

        Self {
            language: RwSignal::new(language),
            config: RwSignal::new(PackConfiguration::default()),
            result: RwSignal::new(None),
            flow: RwSignal::new(false),
        }
    }

    /// Switch UI language and persist the preference.
    pub fn set_language(&self, language: Language) {
        self.language.set(language);
        let _ = gloo_storage::LocalStorage::set("language", language.code());
        log::info!("Language switched to {}", language.code());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// 2. Pack Designer Actions
// -----------------------------------------------------------------------------

impl AppState {
    /// Coerce one form field's text into the configuration.
    pub fn update_field(&self, field: ConfigField, raw: &str) {
        self.config.update(|config| config.apply(field, raw));
    }

    /// Swap the cell form factor.
    pub fn set_form_factor(&self, form: CellFormFactor) {
        self.config.update(|config| config.cell_form_factor = form);
    }

    /// Derive fresh figures from the current configuration and restart the
    /// schematic's flow cue.
    pub fn calculate(&self) {
        let config = self.config.get();
        let result = PackResult::compute(&config);
        log::debug!(
            "Computed {} pack: {:.2} V, {:.2} Ah, {} cells",
            config.designation(),
            result.total_voltage,
            result.total_capacity_ah,
            result.total_cell_count
        );
        self.result.set(Some(result));

        let flow = self.flow;
        flow.set(false);
        spawn_local(async move {
            TimeoutFuture::new(FLOW_RESTART_DELAY_MS).await;
            flow.set(true);
        });
    }
}

// =============================================================================
// Voltwerk Web - Form Components
// =============================================================================
// Table of Contents:
// 1. NumberInput
// 2. FormFactorSelect
// =============================================================================

use leptos::prelude::*;

use voltwerk_core::pack::CellFormFactor;

use crate::i18n::t;
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 1. NumberInput
// -----------------------------------------------------------------------------

/// Numeric input bound to one configuration field. The caller supplies the
/// formatted current value and receives the raw text on every keystroke;
/// coercion happens behind the callback, so the box always snaps back to
/// what the configuration actually holds.
#[component]
pub fn NumberInput(
    label_key: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] step: String,
) -> impl IntoView {
    let language = expect_context::<AppState>().language;
    let step = if step.is_empty() { "1".to_string() } else { step };

    view! {
        <div class="form-field">
            <label class="form-label">{t(language, label_key)}</label>
            <input
                type="number"
                class="form-input"
                step=step
                prop:value=move || value.get()
                on:input=move |e| {
                    on_input.run(event_target_value(&e));
                }
            />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. FormFactorSelect
// -----------------------------------------------------------------------------

/// Dropdown over the supported cell table. Options show the designation
/// plus its physical size so nobody has to remember what a 21700 is.
#[component]
pub fn FormFactorSelect() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let language = app_state.language;
    let config = app_state.config;

    let on_change = {
        let state = app_state.clone();
        move |e| {
            if let Some(form) = CellFormFactor::from_designation(&event_target_value(&e)) {
                state.set_form_factor(form);
            }
        }
    };

    view! {
        <div class="form-field">
            <label class="form-label">{t(language, "cellType")}</label>
            <select
                class="form-select"
                prop:value=move || config.get().cell_form_factor.designation().to_string()
                on:change=on_change
            >
                <For
                    each=move || CellFormFactor::ALL
                    key=|form| form.designation()
                    children=move |form| {
                        let spec = form.spec();
                        view! {
                            <option value=spec.designation>
                                {format!("{} ({} x {} mm)", spec.designation, spec.diameter_mm, spec.height_mm)}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

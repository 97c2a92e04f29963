// =============================================================================
// Voltwerk Web - Pack Designer Page
// =============================================================================
// Table of Contents:
// 1. Page Component
// 2. Results Grid
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use voltwerk_core::input::ConfigField;
use voltwerk_core::pack::PackResult;

use crate::components::{FormFactorSelect, NumberInput, PackSchematic, PageNav};
use crate::i18n::t;
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 1. Page Component
// -----------------------------------------------------------------------------

/// The battery pack sizing page: spec form on the left, live schematic on
/// the right once figures exist.
#[component]
pub fn CalculatorPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let language = app_state.language;
    let config = app_state.config;
    let result = app_state.result;
    let flow = app_state.flow;

    let series = Signal::derive(move || config.get().series_count);
    let parallel = Signal::derive(move || config.get().parallel_count);

    // One callback per form field, all funnelled through the same coercion.
    let field_input = {
        let state = app_state.clone();
        move |field: ConfigField| {
            let state = state.clone();
            Callback::new(move |raw: String| state.update_field(field, &raw))
        }
    };

    let calculate = {
        let state = app_state.clone();
        move |_| state.calculate()
    };

    view! {
        <Title text=move || format!("Voltwerk - {}", language.get().translate("navCalculator")) />
        <div class="page calculator-page">
            <PageNav active="calculator".to_string() />

            <main class="page-body">
                <header class="page-header">
                    <h1>{t(language, "calcTitle")}</h1>
                    <p class="page-subtitle">{t(language, "calcSubtitle")}</p>
                </header>

                <div class="calculator-grid">
                    // Left: the spec form and the derived figures
                    <section class="panel inputs-panel">
                        <h2 class="panel-title">{t(language, "batterySpecs")}</h2>
                        <div class="field-grid">
                            <NumberInput
                                label_key="voltagePerCell"
                                value=Signal::derive(move || config.get().cell_voltage.to_string())
                                on_input=field_input(ConfigField::CellVoltage)
                                step="0.1"
                            />
                            <NumberInput
                                label_key="capacityPerCell"
                                value=Signal::derive(move || config.get().cell_capacity_ah.to_string())
                                on_input=field_input(ConfigField::CellCapacity)
                                step="0.1"
                            />
                            <NumberInput
                                label_key="cellsInSeries"
                                value=Signal::derive(move || config.get().series_count.to_string())
                                on_input=field_input(ConfigField::SeriesCount)
                            />
                            <NumberInput
                                label_key="cellsInParallel"
                                value=Signal::derive(move || config.get().parallel_count.to_string())
                                on_input=field_input(ConfigField::ParallelCount)
                            />
                        </div>

                        <h2 class="panel-title">{t(language, "enclosureSize")}</h2>
                        <div class="field-grid three">
                            <NumberInput
                                label_key="height"
                                value=Signal::derive(move || config.get().enclosure_height_cm.to_string())
                                on_input=field_input(ConfigField::EnclosureHeight)
                                step="0.5"
                            />
                            <NumberInput
                                label_key="length"
                                value=Signal::derive(move || config.get().enclosure_length_cm.to_string())
                                on_input=field_input(ConfigField::EnclosureLength)
                                step="0.5"
                            />
                            <NumberInput
                                label_key="width"
                                value=Signal::derive(move || config.get().enclosure_width_cm.to_string())
                                on_input=field_input(ConfigField::EnclosureWidth)
                                step="0.5"
                            />
                        </div>

                        <FormFactorSelect />

                        <button class="btn btn-primary calculate-btn" on:click=calculate>
                            {t(language, "calculate")}
                        </button>

                        {move || result.get().map(|r| view! { <ResultsGrid result=r /> })}
                    </section>

                    // Right: the schematic, or a prompt until the first calculation
                    <section class="panel visual-panel">
                        <h2 class="panel-title">{t(language, "cellConfiguration")}</h2>
                        {move || match result.get() {
                            Some(_) => view! {
                                <div class="schematic-wrap">
                                    <PackSchematic series=series parallel=parallel flow=flow />
                                    <div class="config-summary">
                                        <span class="config-label">{t(language, "configuration")}</span>
                                        <span class="config-code">{move || config.get().designation()}</span>
                                        <span class="config-detail">
                                            {move || format!(
                                                "{} {} \u{00D7} {} {}",
                                                series.get(),
                                                language.get().translate("inSeriesHorizontal"),
                                                parallel.get(),
                                                language.get().translate("parallelVertical"),
                                            )}
                                        </span>
                                    </div>
                                </div>
                            }.into_any(),
                            None => view! {
                                <div class="schematic-empty">
                                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
                                        <rect width="16" height="10" x="2" y="7" rx="2"></rect>
                                        <line x1="22" x2="22" y1="11" y2="13"></line>
                                        <line x1="6" x2="6" y1="11" y2="13"></line>
                                        <line x1="10" x2="10" y1="11" y2="13"></line>
                                        <line x1="14" x2="14" y1="11" y2="13"></line>
                                    </svg>
                                    <p>{t(language, "emptyPrompt")}</p>
                                </div>
                            }.into_any(),
                        }}
                    </section>
                </div>
            </main>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Results Grid
// -----------------------------------------------------------------------------

/// The five derived figures, one card each.
#[component]
fn ResultsGrid(result: PackResult) -> impl IntoView {
    let language = expect_context::<AppState>().language;

    view! {
        <div class="result-grid">
            <div class="result-card">
                <span class="result-label">{t(language, "totalVoltage")}</span>
                <span class="result-value">{format!("{:.2} V", result.total_voltage)}</span>
            </div>
            <div class="result-card">
                <span class="result-label">{t(language, "totalCapacity")}</span>
                <span class="result-value">{format!("{:.2} Ah", result.total_capacity_ah)}</span>
            </div>
            <div class="result-card">
                <span class="result-label">{t(language, "totalCells")}</span>
                <span class="result-value">{result.total_cell_count.to_string()}</span>
            </div>
            <div class="result-card">
                <span class="result-label">{t(language, "deckVolume")}</span>
                <span class="result-value">{format!("{:.2} L", result.enclosure_volume_l)}</span>
            </div>
            <div class="result-card">
                <span class="result-label">{t(language, "cellsFit")}</span>
                <span class="result-value">{result.cells_fit_count.to_string()}</span>
            </div>
        </div>
    }
}

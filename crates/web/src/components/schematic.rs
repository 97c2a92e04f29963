// =============================================================================
// Voltwerk Web - Pack Schematic
// =============================================================================
// SVG rendering of the cell-grid scene. Geometry comes entirely from
// voltwerk_core::layout; this component adds styling classes and the
// animation delays that stagger the flow cue column by column.
// =============================================================================

use leptos::prelude::*;

use voltwerk_core::layout::{SceneDescription, CELL_BODY_HEIGHT, CELL_BODY_WIDTH, CELL_CORNER_RADIUS, TERMINAL_RADIUS};

use crate::i18n::t;
use crate::state::AppState;

/// Per-column stagger of the cell pulse, in seconds.
const PULSE_STAGGER_S: f64 = 0.1;
/// Per-column stagger of the flow dots, in seconds.
const FLOW_STAGGER_S: f64 = 0.15;

#[component]
pub fn PackSchematic(
    #[prop(into)] series: Signal<u32>,
    #[prop(into)] parallel: Signal<u32>,
    #[prop(into)] flow: Signal<bool>,
) -> impl IntoView {
    let language = expect_context::<AppState>().language;

    let scene = Memo::new(move |_| SceneDescription::layout(series.get(), parallel.get()));

    view! {
        <svg
            class="pack-schematic"
            viewBox=move || {
                let scene = scene.get();
                format!("0 0 {} {}", scene.width, scene.height)
            }
        >
            // Interconnects go underneath the cells
            <For
                each=move || scene.get().parallel_links
                key=|link| link.row
                children=move |link| {
                    view! {
                        <line
                            class="parallel-link"
                            x1=format!("{}", link.from.x)
                            y1=format!("{}", link.from.y)
                            x2=format!("{}", link.to.x)
                            y2=format!("{}", link.to.y)
                        ></line>
                    }
                }
            />
            <For
                each=move || scene.get().series_links
                key=|link| (link.row, link.column)
                children=move |link| {
                    let dot_style = format!("animation-delay: {}s", link.column as f64 * FLOW_STAGGER_S);
                    view! {
                        <line
                            class="series-link"
                            x1=format!("{}", link.from.x)
                            y1=format!("{}", link.from.y)
                            x2=format!("{}", link.to.x)
                            y2=format!("{}", link.to.y)
                        ></line>
                        <circle
                            class="flow-dot"
                            class:active=move || flow.get()
                            cx=format!("{}", link.from.x)
                            cy=format!("{}", link.from.y)
                            r="3"
                            style=dot_style
                        ></circle>
                    }
                }
            />

            // Cell bodies with their terminals
            <For
                each=move || scene.get().cells
                key=|cell| (cell.row, cell.column)
                children=move |cell| {
                    let pulse_style = format!("animation-delay: {}s", cell.column as f64 * PULSE_STAGGER_S);
                    let plus = cell.positive_terminal();
                    let minus = cell.negative_terminal();
                    view! {
                        <rect
                            class="cell-body"
                            class:pulsing=move || flow.get()
                            x=format!("{}", cell.origin.x)
                            y=format!("{}", cell.origin.y)
                            width=format!("{}", CELL_BODY_WIDTH)
                            height=format!("{}", CELL_BODY_HEIGHT)
                            rx=format!("{}", CELL_CORNER_RADIUS)
                            style=pulse_style
                        ></rect>
                        <circle
                            class="terminal positive"
                            cx=format!("{}", plus.x)
                            cy=format!("{}", plus.y)
                            r=format!("{}", TERMINAL_RADIUS)
                        ></circle>
                        <circle
                            class="terminal negative"
                            cx=format!("{}", minus.x)
                            cy=format!("{}", minus.y)
                            r=format!("{}", TERMINAL_RADIUS)
                        ></circle>
                        <text class="terminal-sign" x=format!("{}", plus.x) y=format!("{}", plus.y + 2.5)>"+"</text>
                        <text class="terminal-sign" x=format!("{}", minus.x) y=format!("{}", minus.y + 2.5)>"-"</text>
                    }
                }
            />

            // Axis captions and the pack code
            <text
                class="axis-label"
                x=move || format!("{}", scene.get().series_label.x)
                y=move || format!("{}", scene.get().series_label.y)
            >
                {t(language, "seriesAxis")}
            </text>
            <text
                class="axis-label"
                x=move || format!("{}", scene.get().parallel_label.x)
                y=move || format!("{}", scene.get().parallel_label.y)
                transform=move || {
                    let anchor = scene.get().parallel_label;
                    format!("rotate(-90 {} {})", anchor.x, anchor.y)
                }
            >
                {t(language, "parallelAxis")}
            </text>
            <text
                class="pack-caption"
                x=move || format!("{}", scene.get().caption.x)
                y=move || format!("{}", scene.get().caption.y)
            >
                {move || format!("{}S{}P {}", series.get(), parallel.get(), language.get().translate("packCaption"))}
            </text>
        </svg>
    }
}

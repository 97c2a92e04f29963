// =============================================================================
// Voltwerk Web - Page Navigation
// =============================================================================
// Pill nav shown at the top of every page: wordmark, the two sections,
// and the language switcher.
// =============================================================================

use leptos::prelude::*;

use crate::components::language::LanguageSwitcher;
use crate::i18n::t;
use crate::state::AppState;

/// Top navigation bar.
///
/// # Arguments
/// * `active` - The currently active page ("calculator" or "service")
#[component]
pub fn PageNav(
    #[prop(default = "calculator".to_string())]
    active: String,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let language = app_state.language;

    let calculator_class = if active == "calculator" { "nav-link active" } else { "nav-link" };
    let service_class = if active == "service" { "nav-link active" } else { "nav-link" };

    view! {
        <nav class="page-nav">
            <a href="/" class="nav-logo">
                <svg class="nav-bolt" viewBox="0 0 24 24" fill="currentColor" stroke="none">
                    <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"></polygon>
                </svg>
                <span class="nav-wordmark">"Voltwerk"</span>
            </a>

            <div class="nav-links">
                <a href="/" class=calculator_class>
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <rect width="16" height="20" x="4" y="2" rx="2"></rect>
                        <line x1="8" x2="16" y1="6" y2="6"></line>
                        <line x1="16" x2="16" y1="14" y2="18"></line>
                        <path d="M16 10h.01"></path>
                        <path d="M12 10h.01"></path>
                        <path d="M8 10h.01"></path>
                        <path d="M12 14h.01"></path>
                        <path d="M8 14h.01"></path>
                        <path d="M12 18h.01"></path>
                        <path d="M8 18h.01"></path>
                    </svg>
                    {t(language, "navCalculator")}
                </a>
                <a href="/service" class=service_class>
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"></path>
                    </svg>
                    {t(language, "navService")}
                </a>
            </div>

            <LanguageSwitcher />
        </nav>
    }
}

// =============================================================================
// Voltwerk Web - Language Switcher
// =============================================================================
// Three-button flag switcher shown in the nav on every page. The active
// language is highlighted and the choice persists across visits.
// =============================================================================

use leptos::prelude::*;

use crate::i18n::Language;
use crate::state::AppState;

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let current = app_state.language;

    view! {
        <div class="language-switcher">
            <For
                each=move || Language::ALL
                key=|language| language.code()
                children=move |language| {
                    let state = app_state.clone();
                    view! {
                        <button
                            class="language-btn"
                            class:active=move || current.get() == language
                            on:click=move |_| state.set_language(language)
                            title=language.label()
                        >
                            <span class="language-flag">{language.flag()}</span>
                            <span class="language-code">{language.label()}</span>
                        </button>
                    }
                }
            />
        </div>
    }
}

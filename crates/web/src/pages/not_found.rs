// =============================================================================
// Voltwerk Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::PageNav;
use crate::i18n::t;
use crate::state::AppState;

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let language = expect_context::<AppState>().language;

    view! {
        <Title text=move || format!("Voltwerk - {}", language.get().translate("notFoundTitle")) />
        <div class="page not-found-page">
            <PageNav active="".to_string() />
            <div class="not-found-content">
                <span class="not-found-code">"404"</span>
                <h1>{t(language, "notFoundTitle")}</h1>
                <p>{t(language, "notFoundBody")}</p>
                <a href="/" class="btn btn-primary">
                    {t(language, "goHome")}
                </a>
            </div>
        </div>
    }
}

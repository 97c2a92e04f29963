// =============================================================================
// Voltwerk Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{CalculatorPage, NotFoundPage, ServicePage};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide global app state
    let app_state = AppState::new();
    provide_context(app_state);

    view! {
        <Title text="Voltwerk" />
        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=CalculatorPage />
                <Route path=path!("/service") view=ServicePage />
            </Routes>
        </Router>
    }
}

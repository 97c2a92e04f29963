// =============================================================================
// Voltwerk Web - Service & Repair Page
// =============================================================================
// Table of Contents:
// 1. Page Component
// 2. Request Composition
// 3. Icons
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;
use uuid::Uuid;
use web_sys::window;

use voltwerk_core::catalog::{self, ServiceRequest, CATEGORIES, CONTACT_EMAIL, SERVICES};

use crate::components::PageNav;
use crate::i18n::{t, Language};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 1. Page Component
// -----------------------------------------------------------------------------

/// Three-step request flow: pick a vehicle, optionally a brand, then a
/// service. Selections live only on this page; finishing hands the
/// composed request to the visitor's mail client.
#[component]
pub fn ServicePage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let language = app_state.language;

    let selected_category = RwSignal::new(None::<&'static str>);
    let selected_brand = RwSignal::new(String::new());
    let selected_service = RwSignal::new(None::<&'static str>);

    // Brands belong to a category, so switching vehicles clears the brand.
    let pick_category = move |id: &'static str| {
        selected_category.set(Some(id));
        selected_brand.set(String::new());
    };

    let submit = move |_| {
        if let (Some(category_id), Some(service_id)) =
            (selected_category.get(), selected_service.get())
        {
            if let (Some(category), Some(service)) =
                (catalog::category_by_id(category_id), catalog::service_by_id(service_id))
            {
                let brand = selected_brand.get();
                let request = ServiceRequest {
                    category,
                    service,
                    brand: (!brand.is_empty()).then_some(brand),
                    reference: short_reference(),
                };
                let url = compose_mailto(&request, language.get());
                log::info!("Opening mail client for request {}", request.reference);
                if let Some(win) = window() {
                    let _ = win.location().set_href(&url);
                }
            }
        }
    };

    view! {
        <Title text=move || format!("Voltwerk - {}", language.get().translate("navService")) />
        <div class="page service-page">
            <PageNav active="service".to_string() />

            <main class="page-body">
                <header class="page-header">
                    <h1>{t(language, "serviceRepair")}</h1>
                    <p class="page-subtitle">{t(language, "selectVehicleAndService")}</p>
                </header>

                // Step 1: vehicle category
                <section class="step-section">
                    <h2 class="step-title">{t(language, "selectVehicle")}</h2>
                    <div class="category-grid">
                        <For
                            each=move || CATEGORIES.iter()
                            key=|category| category.id
                            children=move |category| {
                                let id = category.id;
                                view! {
                                    <button
                                        class="category-card"
                                        class:selected=move || selected_category.get() == Some(id)
                                        on:click=move |_| pick_category(id)
                                    >
                                        {category_icon(id)}
                                        <span class="category-name">{t(language, id)}</span>
                                    </button>
                                }
                            }
                        />
                    </div>
                </section>

                // Step 2: brand, once a category is chosen
                {move || selected_category.get().and_then(catalog::category_by_id).map(|category| view! {
                    <section class="step-section">
                        <h2 class="step-title">{t(language, "selectBrand")}</h2>
                        <select
                            class="form-select brand-select"
                            prop:value=move || selected_brand.get()
                            on:change=move |e| selected_brand.set(event_target_value(&e))
                        >
                            <option value="">{t(language, "noBrand")}</option>
                            <For
                                each=move || category.brands.iter().copied()
                                key=|brand| *brand
                                children=move |brand| {
                                    view! { <option value=brand>{brand}</option> }
                                }
                            />
                        </select>
                    </section>
                })}

                // Step 3: service
                <section class="step-section">
                    <h2 class="step-title">{t(language, "selectService")}</h2>
                    <div class="service-grid">
                        <For
                            each=move || SERVICES.iter()
                            key=|service| service.id
                            children=move |service| {
                                let id = service.id;
                                view! {
                                    <button
                                        class="service-card"
                                        class:selected=move || selected_service.get() == Some(id)
                                        on:click=move |_| selected_service.set(Some(id))
                                    >
                                        <div class="service-icon">{service_icon(id)}</div>
                                        <span class="service-title">{t(language, service.title_key)}</span>
                                        <span class="service-desc">{t(language, service.description_key)}</span>
                                    </button>
                                }
                            }
                        />
                    </div>
                </section>

                // Anything not covered by the cards
                <section class="other-card">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M7.9 20A9 9 0 1 0 4 16.1L2 22z"></path>
                    </svg>
                    <div class="other-text">
                        <span class="service-title">{t(language, "other")}</span>
                        <span class="service-desc">{t(language, "otherDesc")}</span>
                    </div>
                    <a class="btn btn-ghost" href=format!("mailto:{}", CONTACT_EMAIL)>
                        {t(language, "contactUs2")}
                    </a>
                </section>

                // Finish, once both required steps are picked
                {move || (selected_category.get().is_some() && selected_service.get().is_some()).then(|| view! {
                    <div class="request-cta">
                        <button class="btn btn-primary" on:click=submit>
                            {t(language, "finishRequest")}
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M5 12h14"></path>
                                <path d="m12 5 7 7-7 7"></path>
                            </svg>
                        </button>
                    </div>
                })}
            </main>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Request Composition
// -----------------------------------------------------------------------------

/// Short per-request reference so the workshop can match replies.
fn short_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..8].to_string()
}

/// Build the mailto URL for a request, with subject and body in the
/// visitor's language.
fn compose_mailto(request: &ServiceRequest, language: Language) -> String {
    let subject = format!(
        "{}: {} ({})",
        language.translate("requestSubject"),
        language.translate(request.service.title_key),
        request.reference,
    );

    let brand = request
        .brand
        .clone()
        .unwrap_or_else(|| language.translate("noBrand").to_string());

    let body = format!(
        "{}: {}\n{}: {}\n{}: {}\n{}: {}\n",
        language.translate("requestCategory"),
        language.translate(request.category.id),
        language.translate("requestBrand"),
        brand,
        language.translate("requestService"),
        language.translate(request.service.title_key),
        language.translate("requestReference"),
        request.reference,
    );

    catalog::mailto_url(CONTACT_EMAIL, &subject, &body)
}

// -----------------------------------------------------------------------------
// 3. Icons
// -----------------------------------------------------------------------------

fn category_icon(id: &str) -> impl IntoView {
    match id {
        "eSteps" => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <circle cx="5" cy="18" r="2.5"></circle>
                <circle cx="19" cy="18" r="2.5"></circle>
                <path d="M7.5 18h9"></path>
                <path d="M16 18 14 6h3"></path>
            </svg>
        }.into_any(),
        "eBikes" => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <circle cx="18.5" cy="17.5" r="3.5"></circle>
                <circle cx="5.5" cy="17.5" r="3.5"></circle>
                <circle cx="15" cy="5" r="1"></circle>
                <path d="M12 17.5V14l-3-3 4-3 2 3h2"></path>
            </svg>
        }.into_any(),
        "monowheels" => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <circle cx="12" cy="13" r="8"></circle>
                <path d="M12 5V2"></path>
                <path d="M8 21h8"></path>
            </svg>
        }.into_any(),
        _ => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <rect x="2" y="12" width="20" height="4" rx="2"></rect>
                <circle cx="6" cy="19" r="2"></circle>
                <circle cx="18" cy="19" r="2"></circle>
            </svg>
        }.into_any(),
    }
}

fn service_icon(id: &str) -> impl IntoView {
    match id {
        "revisie" => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M7 7H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h3"></path>
                <path d="M15 7h3a2 2 0 0 1 2 2v6a2 2 0 0 1-2 2h-2"></path>
                <line x1="22" x2="22" y1="11" y2="13"></line>
                <polyline points="11 7 8 12 13 12 10 17"></polyline>
            </svg>
        }.into_any(),
        "banden" => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <circle cx="12" cy="12" r="10"></circle>
                <circle cx="12" cy="12" r="3"></circle>
            </svg>
        }.into_any(),
        "motor" => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <circle cx="12" cy="12" r="3"></circle>
                <path d="M12 2v3"></path>
                <path d="M12 19v3"></path>
                <path d="m4.9 4.9 2.1 2.1"></path>
                <path d="m17 17 2.1 2.1"></path>
                <path d="M2 12h3"></path>
                <path d="M19 12h3"></path>
                <path d="m4.9 19.1 2.1-2.1"></path>
                <path d="m17 7 2.1-2.1"></path>
            </svg>
        }.into_any(),
        "electronica" => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <rect x="4" y="4" width="16" height="16" rx="2"></rect>
                <rect x="9" y="9" width="6" height="6"></rect>
                <path d="M9 2v2"></path>
                <path d="M15 2v2"></path>
                <path d="M9 20v2"></path>
                <path d="M15 20v2"></path>
                <path d="M2 9h2"></path>
                <path d="M2 15h2"></path>
                <path d="M20 9h2"></path>
                <path d="M20 15h2"></path>
            </svg>
        }.into_any(),
        "remmen" => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <circle cx="12" cy="12" r="10"></circle>
                <circle cx="12" cy="12" r="4"></circle>
                <path d="M12 6h.01"></path>
                <path d="M7 15h.01"></path>
                <path d="M17 15h.01"></path>
            </svg>
        }.into_any(),
        _ => view! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <rect x="8" y="2" width="8" height="4" rx="1"></rect>
                <path d="M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2"></path>
                <path d="m9 14 2 2 4-4"></path>
            </svg>
        }.into_any(),
    }
}

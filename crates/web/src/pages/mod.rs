// =============================================================================
// Voltwerk Web - Page Components
// =============================================================================
// Table of Contents:
// 1. Pack Designer
// 2. Service & Repair
// 3. Not Found
// =============================================================================

pub mod calculator;
pub mod not_found;
pub mod service;

pub use calculator::CalculatorPage;
pub use not_found::NotFoundPage;
pub use service::ServicePage;

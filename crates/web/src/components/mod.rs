// =============================================================================
// Voltwerk Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Navigation
// 2. Form Components
// 3. Schematic
// =============================================================================

pub mod forms;
pub mod language;
pub mod nav;
pub mod schematic;

pub use forms::{FormFactorSelect, NumberInput};
pub use language::LanguageSwitcher;
pub use nav::PageNav;
pub use schematic::PackSchematic;

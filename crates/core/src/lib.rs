//! # Voltwerk Core
//!
//! Browser-free domain logic for the Voltwerk workshop app: battery pack
//! sizing math, deterministic schematic layout, and the repair service
//! catalog. Everything in here is plain data in, plain data out, so the
//! whole crate tests natively without a browser.
//!
//! ## Modules
//!
//! - `pack`: cell form factors, pack configuration, and derived pack figures
//! - `input`: lenient text-to-number coercion for form fields
//! - `layout`: deterministic cell-grid scene used by the schematic view
//! - `catalog`: vehicle categories, repair services, and request composition

pub mod catalog;
pub mod input;
pub mod layout;
pub mod pack;

pub use catalog::{ServiceKind, ServiceRequest, VehicleCategory};
pub use input::ConfigField;
pub use layout::SceneDescription;
pub use pack::{CellFormFactor, PackConfiguration, PackResult};

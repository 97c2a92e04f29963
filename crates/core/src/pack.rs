//! Cell form factors, pack configuration, and derived pack figures
//!
//! A pack is described as `<series>S<parallel>P`: series count multiplies
//! voltage, parallel count multiplies capacity. All derived figures are
//! recomputed from scratch on every request so the result never drifts
//! from the configuration it was computed from.

use serde::{Deserialize, Serialize};

// ----------------------------------------------------------------------------
// Cell form factors
// ----------------------------------------------------------------------------

/// Cylindrical cell sizes the workshop stocks.
///
/// The designation encodes the geometry: first two digits are the diameter
/// in mm, the next two the height in mm (so an 18650 is 18 mm x 65 mm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellFormFactor {
    F32650,
    F26650,
    F21700,
    F18650,
    F14500,
}

/// One row of the supported-cell table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellFormFactorSpec {
    pub form: CellFormFactor,
    pub designation: &'static str,
    pub diameter_mm: f64,
    pub height_mm: f64,
}

/// Supported cells, largest first. Fixed reference data, never edited at
/// runtime.
pub static CELL_FORM_FACTORS: [CellFormFactorSpec; 5] = [
    CellFormFactorSpec { form: CellFormFactor::F32650, designation: "32650", diameter_mm: 32.0, height_mm: 65.0 },
    CellFormFactorSpec { form: CellFormFactor::F26650, designation: "26650", diameter_mm: 26.0, height_mm: 65.0 },
    CellFormFactorSpec { form: CellFormFactor::F21700, designation: "21700", diameter_mm: 21.0, height_mm: 70.0 },
    CellFormFactorSpec { form: CellFormFactor::F18650, designation: "18650", diameter_mm: 18.0, height_mm: 65.0 },
    CellFormFactorSpec { form: CellFormFactor::F14500, designation: "14500", diameter_mm: 14.0, height_mm: 50.0 },
];

impl CellFormFactor {
    /// All supported form factors, in table order.
    pub const ALL: [CellFormFactor; 5] = [
        CellFormFactor::F32650,
        CellFormFactor::F26650,
        CellFormFactor::F21700,
        CellFormFactor::F18650,
        CellFormFactor::F14500,
    ];

    /// Table row for this form factor.
    pub fn spec(&self) -> &'static CellFormFactorSpec {
        match self {
            CellFormFactor::F32650 => &CELL_FORM_FACTORS[0],
            CellFormFactor::F26650 => &CELL_FORM_FACTORS[1],
            CellFormFactor::F21700 => &CELL_FORM_FACTORS[2],
            CellFormFactor::F18650 => &CELL_FORM_FACTORS[3],
            CellFormFactor::F14500 => &CELL_FORM_FACTORS[4],
        }
    }

    /// Industry designation, e.g. "18650".
    pub fn designation(&self) -> &'static str {
        self.spec().designation
    }

    /// Parse a designation back to a form factor.
    pub fn from_designation(designation: &str) -> Option<CellFormFactor> {
        CELL_FORM_FACTORS
            .iter()
            .find(|spec| spec.designation == designation)
            .map(|spec| spec.form)
    }

    pub fn diameter_cm(&self) -> f64 {
        self.spec().diameter_mm / 10.0
    }

    pub fn height_cm(&self) -> f64 {
        self.spec().height_mm / 10.0
    }
}

impl Default for CellFormFactor {
    fn default() -> Self {
        CellFormFactor::F18650
    }
}

// ----------------------------------------------------------------------------
// Pack configuration
// ----------------------------------------------------------------------------

/// Everything the sizing form captures. Dimensions are the usable interior
/// of the enclosure (a scooter deck, a frame tube) in centimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackConfiguration {
    pub cell_voltage: f64,
    pub cell_capacity_ah: f64,
    pub series_count: u32,
    pub parallel_count: u32,
    pub enclosure_height_cm: f64,
    pub enclosure_length_cm: f64,
    pub enclosure_width_cm: f64,
    pub cell_form_factor: CellFormFactor,
}

impl Default for PackConfiguration {
    fn default() -> Self {
        // A 13S8P pack of standard Li-ion cells in a scooter deck, the
        // most common job on the bench.
        Self {
            cell_voltage: 3.7,
            cell_capacity_ah: 2.8,
            series_count: 13,
            parallel_count: 8,
            enclosure_height_cm: 7.5,
            enclosure_length_cm: 30.5,
            enclosure_width_cm: 14.5,
            cell_form_factor: CellFormFactor::F18650,
        }
    }
}

impl PackConfiguration {
    /// Short pack code, e.g. "13S8P".
    pub fn designation(&self) -> String {
        format!("{}S{}P", self.series_count, self.parallel_count)
    }
}

// ----------------------------------------------------------------------------
// Derived figures
// ----------------------------------------------------------------------------

/// Figures derived from one configuration snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackResult {
    pub total_voltage: f64,
    pub total_capacity_ah: f64,
    pub total_cell_count: u64,
    pub enclosure_volume_l: f64,
    pub cells_fit_count: u64,
}

impl PackResult {
    /// Compute all derived figures from a configuration. Pure and
    /// deterministic: the same configuration always yields the same result.
    pub fn compute(config: &PackConfiguration) -> Self {
        let total_voltage = config.series_count as f64 * config.cell_voltage;
        let total_capacity_ah = config.parallel_count as f64 * config.cell_capacity_ah;
        let total_cell_count = config.series_count as u64 * config.parallel_count as u64;

        let enclosure_volume_l = config.enclosure_height_cm
            * config.enclosure_length_cm
            * config.enclosure_width_cm
            / 1000.0;

        // Upright cells on a rectangular grid: the height axis takes one
        // cell height, the other two axes one diameter each. Packing
        // tricks (nesting, lying cells on their side) are deliberately not
        // modelled; the floor division matches how the bench actually lays
        // out straight rows of holders.
        let cell = config.cell_form_factor;
        let layers = axis_fit(config.enclosure_height_cm, cell.height_cm());
        let rows = axis_fit(config.enclosure_length_cm, cell.diameter_cm());
        let columns = axis_fit(config.enclosure_width_cm, cell.diameter_cm());
        // Coercion lets absurd enclosure sizes through, so the product
        // saturates instead of overflowing.
        let cells_fit_count = layers.saturating_mul(rows).saturating_mul(columns);

        Self {
            total_voltage,
            total_capacity_ah,
            total_cell_count,
            enclosure_volume_l,
            cells_fit_count,
        }
    }
}

/// Whole cells that fit along one axis. Degenerate axes (zero or negative
/// after coercion) count as zero.
fn axis_fit(enclosure_cm: f64, cell_cm: f64) -> u64 {
    let fit = (enclosure_cm / cell_cm).floor();
    if fit.is_finite() && fit > 0.0 {
        fit as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pack_figures() {
        let config = PackConfiguration::default();
        let result = PackResult::compute(&config);

        assert!((result.total_voltage - 48.1).abs() < 1e-9);
        assert!((result.total_capacity_ah - 22.4).abs() < 1e-9);
        assert_eq!(result.total_cell_count, 104);
        assert!((result.enclosure_volume_l - 3.316875).abs() < 1e-9);
    }

    #[test]
    fn test_cells_fit_default_deck() {
        // 18650 in a 7.5 x 30.5 x 14.5 cm deck: 1 layer of 16 x 8.
        let config = PackConfiguration::default();
        let result = PackResult::compute(&config);
        assert_eq!(result.cells_fit_count, 128);
    }

    #[test]
    fn test_cells_fit_uses_form_factor() {
        let config = PackConfiguration {
            cell_form_factor: CellFormFactor::F21700,
            ..PackConfiguration::default()
        };
        let result = PackResult::compute(&config);
        // 7.5/7.0 -> 1, 30.5/2.1 -> 14, 14.5/2.1 -> 6
        assert_eq!(result.cells_fit_count, 84);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let config = PackConfiguration::default();
        let a = PackResult::compute(&config);
        let b = PackResult::compute(&config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_counts_zero_out_totals() {
        let config = PackConfiguration {
            series_count: 0,
            parallel_count: 0,
            ..PackConfiguration::default()
        };
        let result = PackResult::compute(&config);
        assert_eq!(result.total_voltage, 0.0);
        assert_eq!(result.total_capacity_ah, 0.0);
        assert_eq!(result.total_cell_count, 0);
    }

    #[test]
    fn test_degenerate_dimensions_fit_nothing() {
        let config = PackConfiguration {
            enclosure_height_cm: -7.5,
            ..PackConfiguration::default()
        };
        let result = PackResult::compute(&config);
        assert_eq!(result.cells_fit_count, 0);

        let flat = PackConfiguration {
            enclosure_length_cm: 0.0,
            ..PackConfiguration::default()
        };
        assert_eq!(PackResult::compute(&flat).cells_fit_count, 0);
    }

    #[test]
    fn test_form_factor_table() {
        for form in CellFormFactor::ALL {
            let spec = form.spec();
            assert_eq!(spec.form, form);
            assert!(spec.diameter_mm > 0.0);
            assert!(spec.height_mm > spec.diameter_mm);
            assert_eq!(CellFormFactor::from_designation(spec.designation), Some(form));
        }
        assert_eq!(CellFormFactor::from_designation("9999"), None);

        let spec = CellFormFactor::F18650.spec();
        assert_eq!(spec.diameter_mm, 18.0);
        assert_eq!(spec.height_mm, 65.0);
    }

    #[test]
    fn test_designation() {
        let config = PackConfiguration::default();
        assert_eq!(config.designation(), "13S8P");
    }

    #[test]
    fn test_config_serialization() {
        let config = PackConfiguration {
            series_count: 10,
            cell_form_factor: CellFormFactor::F21700,
            ..PackConfiguration::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: PackConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}

//! Deterministic cell-grid scene used by the schematic view
//!
//! The layout engine turns a series/parallel pair into a 2D scene in an
//! abstract coordinate space (the web view maps it 1:1 onto an SVG
//! viewBox). Series positions run left to right, parallel groups top to
//! bottom. The scene is pure data: glyph origins, interconnect segments,
//! and label anchors, with no styling attached.

use serde::{Deserialize, Serialize};

// ----------------------------------------------------------------------------
// Geometry constants
// ----------------------------------------------------------------------------

/// Horizontal distance between the origins of adjacent series positions.
pub const CELL_PITCH_X: f64 = 60.0;
/// Vertical distance between the origins of adjacent parallel groups.
pub const CELL_PITCH_Y: f64 = 50.0;

/// Origin of the first glyph (top-left cell body corner).
pub const GRID_ORIGIN_X: f64 = 50.0;
pub const GRID_ORIGIN_Y: f64 = 40.0;

/// Cell body rectangle.
pub const CELL_BODY_WIDTH: f64 = 40.0;
pub const CELL_BODY_HEIGHT: f64 = 30.0;
pub const CELL_CORNER_RADIUS: f64 = 4.0;

/// Terminal dots, measured from the glyph origin. Positive on the right,
/// negative on the left, both on the body midline.
pub const TERMINAL_RADIUS: f64 = 4.0;
pub const POSITIVE_TERMINAL_DX: f64 = 32.0;
pub const NEGATIVE_TERMINAL_DX: f64 = 8.0;
pub const TERMINAL_DY: f64 = 15.0;

/// Length of the stub joining a cell to its series neighbour.
pub const SERIES_LINK_LENGTH: f64 = 10.0;

/// Canvas padding beyond the grid itself.
pub const CANVAS_MARGIN_X: f64 = 100.0;
pub const CANVAS_MARGIN_Y: f64 = 80.0;

// ----------------------------------------------------------------------------
// Scene data
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One cell in the grid. `column` is the series position, `row` the
/// parallel group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellGlyph {
    pub row: u32,
    pub column: u32,
    /// Top-left corner of the cell body.
    pub origin: Point,
}

impl CellGlyph {
    pub fn positive_terminal(&self) -> Point {
        Point {
            x: self.origin.x + POSITIVE_TERMINAL_DX,
            y: self.origin.y + TERMINAL_DY,
        }
    }

    pub fn negative_terminal(&self) -> Point {
        Point {
            x: self.origin.x + NEGATIVE_TERMINAL_DX,
            y: self.origin.y + TERMINAL_DY,
        }
    }
}

/// Straight interconnect segment. `row`/`column` identify the cell the
/// segment leaves from, which the view uses to stagger animations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interconnect {
    pub row: u32,
    pub column: u32,
    pub from: Point,
    pub to: Point,
}

/// Complete scene for one series/parallel pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub width: f64,
    pub height: f64,
    pub cells: Vec<CellGlyph>,
    /// Stubs between series neighbours, `parallel * (series - 1)` of them.
    pub series_links: Vec<Interconnect>,
    /// Chain down the left edge, `parallel - 1` segments.
    pub parallel_links: Vec<Interconnect>,
    /// Anchor for the series axis caption, along the top edge.
    pub series_label: Point,
    /// Anchor for the parallel axis caption, rotated onto the left edge.
    pub parallel_label: Point,
    /// Anchor for the pack code caption underneath the grid.
    pub caption: Point,
}

impl SceneDescription {
    /// Build the scene for a grid of `series` columns by `parallel` rows.
    ///
    /// Generation is row-major and pure, so equal inputs produce equal
    /// scenes. A zero on either axis yields an empty grid on a minimal
    /// canvas rather than an error.
    pub fn layout(series: u32, parallel: u32) -> Self {
        let width = series as f64 * CELL_PITCH_X + CANVAS_MARGIN_X;
        let height = parallel as f64 * CELL_PITCH_Y + CANVAS_MARGIN_Y;

        let mut cells = Vec::new();
        let mut series_links = Vec::new();
        let mut parallel_links = Vec::new();

        for row in 0..parallel {
            for column in 0..series {
                let origin = Point {
                    x: GRID_ORIGIN_X + column as f64 * CELL_PITCH_X,
                    y: GRID_ORIGIN_Y + row as f64 * CELL_PITCH_Y,
                };
                cells.push(CellGlyph { row, column, origin });

                if column + 1 < series {
                    let start_x = origin.x + CELL_BODY_WIDTH;
                    let y = origin.y + TERMINAL_DY;
                    series_links.push(Interconnect {
                        row,
                        column,
                        from: Point { x: start_x, y },
                        to: Point { x: start_x + SERIES_LINK_LENGTH, y },
                    });
                }

                if column == 0 && row + 1 < parallel {
                    let x = origin.x + NEGATIVE_TERMINAL_DX;
                    parallel_links.push(Interconnect {
                        row,
                        column,
                        from: Point { x, y: origin.y + CELL_BODY_HEIGHT },
                        to: Point { x, y: origin.y + CELL_PITCH_Y },
                    });
                }
            }
        }

        Self {
            width,
            height,
            cells,
            series_links,
            parallel_links,
            series_label: Point { x: 20.0, y: 25.0 },
            parallel_label: Point {
                x: 10.0,
                y: parallel as f64 * CELL_PITCH_Y / 2.0 + GRID_ORIGIN_Y,
            },
            caption: Point {
                x: width / 2.0,
                y: height - 10.0,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_counts() {
        let scene = SceneDescription::layout(13, 8);
        assert_eq!(scene.cells.len(), 104);
        assert_eq!(scene.series_links.len(), 8 * 12);
        assert_eq!(scene.parallel_links.len(), 7);
    }

    #[test]
    fn test_canvas_grows_with_grid() {
        let scene = SceneDescription::layout(13, 8);
        assert_eq!(scene.width, 880.0);
        assert_eq!(scene.height, 480.0);

        let small = SceneDescription::layout(1, 1);
        assert_eq!(small.width, 160.0);
        assert_eq!(small.height, 130.0);
    }

    #[test]
    fn test_first_glyph_geometry() {
        let scene = SceneDescription::layout(2, 2);
        let first = scene.cells[0];
        assert_eq!(first.row, 0);
        assert_eq!(first.column, 0);
        assert_eq!(first.origin, Point { x: 50.0, y: 40.0 });
        assert_eq!(first.positive_terminal(), Point { x: 82.0, y: 55.0 });
        assert_eq!(first.negative_terminal(), Point { x: 58.0, y: 55.0 });
    }

    #[test]
    fn test_row_major_order() {
        let scene = SceneDescription::layout(3, 2);
        let positions: Vec<(u32, u32)> = scene.cells.iter().map(|c| (c.row, c.column)).collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_series_link_geometry() {
        let scene = SceneDescription::layout(2, 1);
        assert_eq!(scene.series_links.len(), 1);
        let link = scene.series_links[0];
        assert_eq!(link.from, Point { x: 90.0, y: 55.0 });
        assert_eq!(link.to, Point { x: 100.0, y: 55.0 });
    }

    #[test]
    fn test_parallel_link_geometry() {
        let scene = SceneDescription::layout(1, 2);
        assert_eq!(scene.parallel_links.len(), 1);
        let link = scene.parallel_links[0];
        // Drops from the bottom edge of the first cell to the top of the
        // next row, aligned with the negative terminal.
        assert_eq!(link.from, Point { x: 58.0, y: 70.0 });
        assert_eq!(link.to, Point { x: 58.0, y: 90.0 });
    }

    #[test]
    fn test_single_cell_has_no_links() {
        let scene = SceneDescription::layout(1, 1);
        assert_eq!(scene.cells.len(), 1);
        assert!(scene.series_links.is_empty());
        assert!(scene.parallel_links.is_empty());
    }

    #[test]
    fn test_zero_axis_yields_empty_scene() {
        for (series, parallel) in [(0, 8), (13, 0), (0, 0)] {
            let scene = SceneDescription::layout(series, parallel);
            assert!(scene.is_empty());
            assert!(scene.series_links.is_empty());
            assert!(scene.parallel_links.is_empty());
            assert!(scene.width >= CANVAS_MARGIN_X);
            assert!(scene.height >= CANVAS_MARGIN_Y);
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        let a = SceneDescription::layout(13, 8);
        let b = SceneDescription::layout(13, 8);
        assert_eq!(a, b);
    }

    #[test]
    fn test_label_anchors() {
        let scene = SceneDescription::layout(13, 8);
        assert_eq!(scene.series_label, Point { x: 20.0, y: 25.0 });
        assert_eq!(scene.parallel_label, Point { x: 10.0, y: 240.0 });
        assert_eq!(scene.caption, Point { x: 440.0, y: 470.0 });
    }
}

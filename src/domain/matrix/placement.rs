//! Placement hints and the position → level mapping for the matrix view.
//!
//! The horizontal axis carries power and the vertical axis carries interest.
//! Positions grow away from the origin, so larger coordinates mean `High`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Level, StakeholderId};
use crate::domain::stakeholder::Stakeholder;

use super::{classify, color_for_quadrant, Quadrant};

/// Minimum distance a dragged node keeps from the container edge.
pub const MATRIX_MARGIN: f64 = 20.0;

/// Offset of the band used for `High` placements, as a fraction of the axis.
const HIGH_BAND_START: f64 = 0.6;

/// Offset of the band used for `Low` placements, as a fraction of the axis.
const LOW_BAND_START: f64 = 0.1;

/// Width of a placement band, as a fraction of the axis.
const BAND_WIDTH: f64 = 0.3;

/// Size of the matrix container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the centre of the container.
    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A point inside the matrix container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps a coordinate on one axis to a level.
///
/// Coordinates at or past the midpoint are `High`; a node dropped exactly on
/// the centre line therefore resolves to `High`.
pub fn level_at(coordinate: f64, extent: f64) -> Level {
    if coordinate >= extent / 2.0 {
        Level::High
    } else {
        Level::Low
    }
}

/// Suggests an initial position for a node.
///
/// `High` lands in the 60–90% band of its axis and `Low` in the 10–40% band,
/// with uniform jitter inside the band. The result always maps back to the
/// same levels through [`level_at`].
pub fn suggest_position<R: Rng + ?Sized>(
    power: Level,
    interest: Level,
    bounds: Bounds,
    rng: &mut R,
) -> Position {
    Position::new(
        band_coordinate(power, bounds.width, rng),
        band_coordinate(interest, bounds.height, rng),
    )
}

fn band_coordinate<R: Rng + ?Sized>(level: Level, extent: f64, rng: &mut R) -> f64 {
    let start = match level {
        Level::High => HIGH_BAND_START,
        Level::Low => LOW_BAND_START,
    };
    let jitter: f64 = rng.gen();
    extent * (start + jitter * BAND_WIDTH)
}

/// Keeps a dragged position at least [`MATRIX_MARGIN`] inside the container.
///
/// An axis too small to honour the margin, or with a NaN extent, collapses
/// to its midpoint.
pub fn clamp_to_bounds(position: Position, bounds: Bounds) -> Position {
    Position::new(
        clamp_axis(position.x, bounds.width),
        clamp_axis(position.y, bounds.height),
    )
}

fn clamp_axis(value: f64, extent: f64) -> f64 {
    let max = extent - MATRIX_MARGIN;
    // Negated so a NaN extent also takes this branch; `f64::clamp` panics on NaN bounds.
    if !(max >= MATRIX_MARGIN) {
        return extent / 2.0;
    }
    value.clamp(MATRIX_MARGIN, max)
}

/// Placement hint for one stakeholder on the matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixPoint {
    pub id: StakeholderId,
    pub name: String,
    pub quadrant: Quadrant,
    pub color: &'static str,
    pub position: Position,
}

/// Lays out every stakeholder on the matrix in store order.
pub fn layout_matrix<R: Rng + ?Sized>(
    stakeholders: &[Stakeholder],
    bounds: Bounds,
    rng: &mut R,
) -> Vec<MatrixPoint> {
    stakeholders
        .iter()
        .map(|s| {
            let quadrant = classify(s.power(), s.interest());
            MatrixPoint {
                id: s.id().clone(),
                name: s.name().to_string(),
                quadrant,
                color: color_for_quadrant(quadrant),
                position: suggest_position(s.power(), s.interest(), bounds, rng),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Influence, StakeholderRole};
    use crate::domain::stakeholder::StakeholderAttributes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn level_at_splits_on_midpoint() {
        assert_eq!(level_at(399.9, 800.0), Level::Low);
        assert_eq!(level_at(400.1, 800.0), Level::High);
    }

    #[test]
    fn level_at_exact_midpoint_is_high() {
        assert_eq!(level_at(400.0, 800.0), Level::High);
        assert_eq!(level_at(300.0, 600.0), Level::High);
    }

    #[test]
    fn suggest_position_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = suggest_position(Level::High, Level::Low, BOUNDS, &mut rng);
            assert!((480.0..720.0).contains(&p.x), "x = {}", p.x);
            assert!((60.0..240.0).contains(&p.y), "y = {}", p.y);
        }
    }

    #[test]
    fn suggested_position_maps_back_to_same_levels() {
        let mut rng = StdRng::seed_from_u64(11);
        for quadrant in Quadrant::all() {
            let (power, interest) = quadrant.levels();
            let p = suggest_position(power, interest, BOUNDS, &mut rng);
            assert_eq!(level_at(p.x, BOUNDS.width), power);
            assert_eq!(level_at(p.y, BOUNDS.height), interest);
        }
    }

    #[test]
    fn clamp_keeps_margin() {
        let p = clamp_to_bounds(Position::new(-50.0, 900.0), BOUNDS);
        assert_eq!(p, Position::new(MATRIX_MARGIN, BOUNDS.height - MATRIX_MARGIN));
    }

    #[test]
    fn clamp_on_tiny_bounds_uses_center() {
        let tiny = Bounds::new(30.0, 10.0);
        assert_eq!(clamp_to_bounds(Position::new(0.0, 0.0), tiny), tiny.center());
    }

    #[test]
    fn clamp_on_nan_extent_does_not_panic() {
        let p = clamp_to_bounds(Position::new(500.0, 900.0), Bounds::new(f64::NAN, 600.0));
        assert!(p.x.is_nan());
        assert_eq!(p.y, 580.0);
    }

    #[test]
    fn layout_matrix_produces_one_point_per_stakeholder() {
        let stakeholders: Vec<Stakeholder> = [("A", Level::High), ("B", Level::Low)]
            .into_iter()
            .map(|(name, level)| {
                Stakeholder::new(
                    StakeholderId::new(),
                    StakeholderAttributes::new(
                        name,
                        StakeholderRole::Supplier,
                        level,
                        level,
                        Influence::Indirect,
                    ),
                )
                .unwrap()
            })
            .collect();

        let mut rng = StdRng::seed_from_u64(3);
        let points = layout_matrix(&stakeholders, BOUNDS, &mut rng);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].quadrant, Quadrant::ManageClosely);
        assert_eq!(points[1].quadrant, Quadrant::Monitor);
        assert_eq!(points[1].color, color_for_quadrant(Quadrant::Monitor));
    }
}

//! GetMatrixViewHandler - Query handler for the power/interest matrix.

use rand::Rng;
use serde::Serialize;

use crate::domain::matrix::{color_for_quadrant, layout_matrix, Bounds, MatrixPoint, Quadrant};
use crate::domain::stakeholder::StakeholderStore;

/// Query for the matrix view.
#[derive(Debug, Clone, Copy)]
pub struct GetMatrixViewQuery {
    pub bounds: Bounds,
}

/// One quadrant cell with its occupants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantCell {
    pub quadrant: Quadrant,
    pub label: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub stakeholder_names: Vec<String>,
}

/// The matrix view: cells plus a placement hint for every stakeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixView {
    pub bounds: Bounds,
    pub quadrants: Vec<QuadrantCell>,
    pub points: Vec<MatrixPoint>,
}

/// Handler for the matrix view.
#[derive(Debug, Default)]
pub struct GetMatrixViewHandler;

impl GetMatrixViewHandler {
    pub fn new() -> Self {
        Self
    }

    /// Builds the view with placement jitter from the thread-local generator.
    pub fn handle(&self, store: &StakeholderStore, query: GetMatrixViewQuery) -> MatrixView {
        self.handle_with_rng(store, query, &mut rand::thread_rng())
    }

    pub fn handle_with_rng<R: Rng + ?Sized>(
        &self,
        store: &StakeholderStore,
        query: GetMatrixViewQuery,
        rng: &mut R,
    ) -> MatrixView {
        let points = layout_matrix(store.all(), query.bounds, rng);

        let quadrants = Quadrant::all()
            .iter()
            .map(|&quadrant| QuadrantCell {
                quadrant,
                label: quadrant.label(),
                description: quadrant.description(),
                color: color_for_quadrant(quadrant),
                stakeholder_names: points
                    .iter()
                    .filter(|p| p.quadrant == quadrant)
                    .map(|p| p.name.clone())
                    .collect(),
            })
            .collect();

        MatrixView {
            bounds: query.bounds,
            quadrants,
            points,
        }
    }
}

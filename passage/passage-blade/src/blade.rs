//! The blade type and its per-blade face batches.

use crate::error::{BladeError, BladeResult};
use crate::surface::offset_surfaces;
use crate::thickness::ThicknessPolicy;
use nalgebra::Point3;
use passage_camber::CamberlineField;
use passage_types::{CylPoint, Face, MeridionalGrid, PolygonMesh, ScalarField};

/// Which span extremities get end-cap strips closing the blade thickness.
///
/// The shroud edge is typically enabled for an unshrouded rotor (the blade
/// tip is exposed); the hub edge when the hub is not otherwise capped, as on
/// a stator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeCaps {
    /// Close the blade thickness at the hub row (s = 0).
    pub hub: bool,
    /// Close the blade thickness at the shroud row (s = S−1).
    pub shroud: bool,
}

impl EdgeCaps {
    /// No end caps.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            hub: false,
            shroud: false,
        }
    }

    /// Enable the hub cap.
    #[must_use]
    pub const fn with_hub(mut self) -> Self {
        self.hub = true;
        self
    }

    /// Enable the shroud cap.
    #[must_use]
    pub const fn with_shroud(mut self) -> Self {
        self.shroud = true;
        self
    }
}

/// One blade: its (possibly span-restricted) grid, the two angular wall
/// surfaces, and its end-cap configuration.
///
/// Built once by [`Blade::build`] and immutable afterwards. The grid may
/// cover fewer spanwise rows than the angular surfaces (a splitter blade);
/// the surfaces stay full-size because adjacent blades reference them when
/// the inter-blade geometry is generated.
#[derive(Debug, Clone)]
pub struct Blade {
    grid: MeridionalGrid,
    theta_l: ScalarField,
    theta_t: ScalarField,
    caps: EdgeCaps,
}

impl Blade {
    /// Factory constructor: offset the camberline by the thickness policy
    /// over the full grid.
    ///
    /// # Errors
    ///
    /// Propagates the offset-surface errors (shape mismatch, zero radius,
    /// invalid thickness).
    pub fn build<P>(
        grid: MeridionalGrid,
        camberline: &CamberlineField,
        policy: &P,
        caps: EdgeCaps,
    ) -> BladeResult<Self>
    where
        P: ThicknessPolicy,
    {
        let (theta_l, theta_t) = offset_surfaces(&grid, camberline, policy)?;
        Self::from_surfaces(grid, theta_l, theta_t, caps)
    }

    /// Assemble a blade from pre-computed angular surfaces.
    ///
    /// The grid may span fewer rows than the surfaces, never more.
    ///
    /// # Errors
    ///
    /// Returns an error on any shape inconsistency.
    pub fn from_surfaces(
        grid: MeridionalGrid,
        theta_l: ScalarField,
        theta_t: ScalarField,
        caps: EdgeCaps,
    ) -> BladeResult<Self> {
        if !theta_l.same_shape(&theta_t) {
            return Err(BladeError::ShapeMismatch {
                left_m: theta_l.m_count(),
                left_s: theta_l.s_count(),
                right_m: theta_t.m_count(),
                right_s: theta_t.s_count(),
            });
        }
        if grid.m_count() != theta_l.m_count() {
            return Err(BladeError::ShapeMismatch {
                left_m: grid.m_count(),
                left_s: grid.s_count(),
                right_m: theta_l.m_count(),
                right_s: theta_l.s_count(),
            });
        }
        if grid.s_count() > theta_l.s_count() {
            return Err(BladeError::SpanOverrun {
                grid_s: grid.s_count(),
                surface_s: theta_l.s_count(),
            });
        }
        Ok(Self {
            grid,
            theta_l,
            theta_t,
            caps,
        })
    }

    /// Restrict the blade's grid to its first `s_count` spanwise rows,
    /// producing a partial (splitter) blade. The angular surfaces keep
    /// their full span.
    ///
    /// # Errors
    ///
    /// Returns an error if the restriction is out of range.
    pub fn restrict_span(self, s_count: usize) -> BladeResult<Self> {
        let grid = self
            .grid
            .restrict_span(s_count)
            .map_err(|_| BladeError::SpanOverrun {
                grid_s: s_count,
                surface_s: self.theta_l.s_count(),
            })?;
        Ok(Self { grid, ..self })
    }

    /// The blade's grid (full or span-restricted).
    #[must_use]
    pub const fn grid(&self) -> &MeridionalGrid {
        &self.grid
    }

    /// Leading-surface angular positions (full span).
    #[must_use]
    pub const fn theta_l(&self) -> &ScalarField {
        &self.theta_l
    }

    /// Trailing-surface angular positions (full span).
    #[must_use]
    pub const fn theta_t(&self) -> &ScalarField {
        &self.theta_t
    }

    /// End-cap configuration.
    #[must_use]
    pub const fn caps(&self) -> EdgeCaps {
        self.caps
    }

    fn vertex(&self, m: usize, s: usize, surface: &ScalarField, slot: f64) -> Point3<f64> {
        CylPoint::new(
            self.grid.r()[(m, s)],
            surface[(m, s)] + slot,
            self.grid.z()[(m, s)],
        )
        .to_cartesian()
    }

    /// Leading-edge strip at m = 0, one quad per spanwise segment.
    pub fn leading_edge_faces(&self, slot: f64, mesh: &mut PolygonMesh) {
        for s in 1..self.grid.s_count() {
            mesh.push(Face::Quad([
                self.vertex(0, s - 1, &self.theta_l, slot),
                self.vertex(0, s - 1, &self.theta_t, slot),
                self.vertex(0, s, &self.theta_t, slot),
                self.vertex(0, s, &self.theta_l, slot),
            ]));
        }
    }

    /// Trailing-edge strip at m = M−1, winding mirrored from the leading
    /// edge.
    pub fn trailing_edge_faces(&self, slot: f64, mesh: &mut PolygonMesh) {
        let m = self.grid.m_count() - 1;
        for s in 1..self.grid.s_count() {
            mesh.push(Face::Quad([
                self.vertex(m, s - 1, &self.theta_l, slot),
                self.vertex(m, s, &self.theta_l, slot),
                self.vertex(m, s, &self.theta_t, slot),
                self.vertex(m, s - 1, &self.theta_t, slot),
            ]));
        }
    }

    /// Pressure side: one quad per grid cell on the leading surface.
    pub fn pressure_side_faces(&self, slot: f64, mesh: &mut PolygonMesh) {
        for m in 1..self.grid.m_count() {
            for s in 1..self.grid.s_count() {
                mesh.push(Face::Quad([
                    self.vertex(m - 1, s - 1, &self.theta_l, slot),
                    self.vertex(m - 1, s, &self.theta_l, slot),
                    self.vertex(m, s, &self.theta_l, slot),
                    self.vertex(m, s - 1, &self.theta_l, slot),
                ]));
            }
        }
    }

    /// Suction side: one quad per grid cell on the trailing surface, wound
    /// opposite to the pressure side.
    pub fn suction_side_faces(&self, slot: f64, mesh: &mut PolygonMesh) {
        for m in 1..self.grid.m_count() {
            for s in 1..self.grid.s_count() {
                mesh.push(Face::Quad([
                    self.vertex(m - 1, s - 1, &self.theta_t, slot),
                    self.vertex(m, s - 1, &self.theta_t, slot),
                    self.vertex(m, s, &self.theta_t, slot),
                    self.vertex(m - 1, s, &self.theta_t, slot),
                ]));
            }
        }
    }

    /// Shroud end cap at the blade's outermost spanwise row.
    pub fn shroud_edge_faces(&self, slot: f64, mesh: &mut PolygonMesh) {
        let s = self.grid.s_count() - 1;
        for m in 1..self.grid.m_count() {
            mesh.push(Face::Quad([
                self.vertex(m - 1, s, &self.theta_t, slot),
                self.vertex(m, s, &self.theta_t, slot),
                self.vertex(m, s, &self.theta_l, slot),
                self.vertex(m - 1, s, &self.theta_l, slot),
            ]));
        }
    }

    /// Hub end cap at s = 0.
    pub fn hub_edge_faces(&self, slot: f64, mesh: &mut PolygonMesh) {
        for m in 1..self.grid.m_count() {
            mesh.push(Face::Quad([
                self.vertex(m - 1, 0, &self.theta_l, slot),
                self.vertex(m, 0, &self.theta_l, slot),
                self.vertex(m, 0, &self.theta_t, slot),
                self.vertex(m - 1, 0, &self.theta_t, slot),
            ]));
        }
    }

    /// All of this blade's faces at the given slot angle: edge strips, both
    /// sides, and the configured end caps.
    pub fn emit_faces(&self, slot: f64, mesh: &mut PolygonMesh) {
        self.leading_edge_faces(slot, mesh);
        self.trailing_edge_faces(slot, mesh);
        self.pressure_side_faces(slot, mesh);
        self.suction_side_faces(slot, mesh);
        if self.caps.hub {
            self.hub_edge_faces(slot, mesh);
        }
        if self.caps.shroud {
            self.shroud_edge_faces(slot, mesh);
        }
    }

    /// Face count of [`Blade::emit_faces`] before any sanitizing.
    #[must_use]
    pub fn face_count(&self) -> usize {
        let m_cells = self.grid.m_count() - 1;
        let s_cells = self.grid.s_count() - 1;
        let mut count = 2 * s_cells + 2 * m_cells * s_cells;
        if self.caps.hub {
            count += m_cells;
        }
        if self.caps.shroud {
            count += m_cells;
        }
        count
    }
}

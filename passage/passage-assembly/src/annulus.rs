//! Annulus configuration, blade slots, and the assembly driver.

use crate::completer;
use crate::error::{AssemblyError, AssemblyResult};
use passage_blade::Blade;
use passage_types::{MeridionalGrid, PolygonMesh};
use rayon::prelude::*;
use std::f64::consts::TAU;
use tracing::info;

/// How the space between blades is closed at a span extremity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionMode {
    /// Solid surface: span connectors between adjacent blades, plus
    /// inlet/outlet fan caps when applied at the hub.
    Solid,
    /// Open annular gap: per-blade edge-closing strips only.
    Edge,
    /// Nothing emitted; the blade's own end caps (or a mating part) close
    /// the geometry.
    #[default]
    Open,
}

/// Assembly parameters.
///
/// The default matches an unshrouded rotor: solid hub, open shroud (the
/// blade template carries its own shroud edge), six connector subdivisions.
///
/// # Example
///
/// ```
/// use passage_assembly::{AnnulusConfig, CompletionMode};
///
/// let config = AnnulusConfig::default()
///     .interblade_faces(8)
///     .shroud(CompletionMode::Edge);
/// assert_eq!(config.interblade_faces, 8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AnnulusConfig {
    /// Angular subdivisions per inter-blade connector cell.
    pub interblade_faces: usize,
    /// Hub completion mode.
    pub hub: CompletionMode,
    /// Shroud completion mode.
    pub shroud: CompletionMode,
}

impl Default for AnnulusConfig {
    fn default() -> Self {
        Self {
            interblade_faces: 6,
            hub: CompletionMode::Solid,
            shroud: CompletionMode::Open,
        }
    }
}

impl AnnulusConfig {
    /// Set the connector subdivision count (validated at assembly).
    #[must_use]
    pub const fn interblade_faces(mut self, count: usize) -> Self {
        self.interblade_faces = count;
        self
    }

    /// Set the hub completion mode.
    #[must_use]
    pub const fn hub(mut self, mode: CompletionMode) -> Self {
        self.hub = mode;
        self
    }

    /// Set the shroud completion mode.
    #[must_use]
    pub const fn shroud(mut self, mode: CompletionMode) -> Self {
        self.shroud = mode;
        self
    }
}

/// One blade at its angular position.
#[derive(Debug, Clone)]
pub struct BladeSlot {
    /// The blade instance.
    pub blade: Blade,
    /// Slot angle in radians.
    pub angle: f64,
}

/// Z blades around the full annulus, plus the grid rows the connective
/// geometry is anchored to.
///
/// The assembly grid is the full flow-passage grid; individual blades may
/// carry span-restricted copies, but their angular surfaces always cover
/// the full span so neighbors can connect to them.
#[derive(Debug, Clone)]
pub struct Annulus {
    grid: MeridionalGrid,
    slots: Vec<BladeSlot>,
    config: AnnulusConfig,
}

impl Annulus {
    /// Replicate one blade template at `blade_count` equally spaced slots.
    ///
    /// # Errors
    ///
    /// Returns an error if `blade_count` is zero or the template's surfaces
    /// disagree with the grid.
    pub fn uniform(
        grid: MeridionalGrid,
        blade: &Blade,
        blade_count: usize,
        config: AnnulusConfig,
    ) -> AssemblyResult<Self> {
        if blade_count == 0 {
            return Err(AssemblyError::NoBlades);
        }
        #[allow(clippy::cast_precision_loss)]
        let slots = (0..blade_count)
            .map(|i| BladeSlot {
                blade: blade.clone(),
                angle: TAU * i as f64 / blade_count as f64,
            })
            .collect();
        Self::from_slots(grid, slots, config)
    }

    /// Assemble from explicit slots, equally spaced or not.
    ///
    /// Slot angles must increase strictly and stay within one turn of the
    /// first slot; adjacency (including the wrap-around pair) follows slot
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot list is empty, a blade's surfaces
    /// disagree with the grid, or the angles are out of order.
    pub fn from_slots(
        grid: MeridionalGrid,
        slots: Vec<BladeSlot>,
        config: AnnulusConfig,
    ) -> AssemblyResult<Self> {
        if slots.is_empty() {
            return Err(AssemblyError::NoBlades);
        }
        for (i, slot) in slots.iter().enumerate() {
            let surfaces = slot.blade.theta_l();
            if surfaces.m_count() != grid.m_count() || surfaces.s_count() != grid.s_count() {
                return Err(AssemblyError::ShapeMismatch {
                    slot: i,
                    blade_m: surfaces.m_count(),
                    blade_s: surfaces.s_count(),
                    grid_m: grid.m_count(),
                    grid_s: grid.s_count(),
                });
            }
            let in_order = i == 0
                || (slot.angle > slots[i - 1].angle && slot.angle < slots[0].angle + TAU);
            if !in_order {
                return Err(AssemblyError::SlotOrder {
                    slot: i,
                    angle: slot.angle,
                });
            }
        }
        Ok(Self {
            grid,
            slots,
            config,
        })
    }

    /// The blade slots in angular order.
    #[must_use]
    pub fn slots(&self) -> &[BladeSlot] {
        &self.slots
    }

    /// Generate the complete sanitized face list for the annulus.
    ///
    /// Blade batches are generated in parallel across slots; the face order
    /// in the result carries no meaning.
    ///
    /// # Errors
    ///
    /// Returns an error if the connector subdivision count is zero.
    pub fn assemble(&self) -> AssemblyResult<PolygonMesh> {
        if self.config.interblade_faces < 1 {
            return Err(AssemblyError::InterbladeTooLow {
                got: self.config.interblade_faces,
            });
        }

        let blade_batches: Vec<PolygonMesh> = self
            .slots
            .par_iter()
            .map(|slot| {
                let mut batch = PolygonMesh::with_capacity(slot.blade.face_count());
                slot.blade.emit_faces(slot.angle, &mut batch);
                batch
            })
            .collect();

        let mut mesh = PolygonMesh::new();
        for batch in blade_batches {
            mesh.extend(batch);
        }

        match self.config.hub {
            CompletionMode::Solid => self.complete_solid(0, true, &mut mesh),
            CompletionMode::Edge => {
                for slot in &self.slots {
                    completer::hub_edge(&self.grid, slot, &mut mesh);
                }
            }
            CompletionMode::Open => {}
        }
        match self.config.shroud {
            CompletionMode::Solid => {
                self.complete_solid(self.grid.s_count() - 1, false, &mut mesh);
            }
            CompletionMode::Edge => {
                for slot in &self.slots {
                    completer::shroud_edge(&self.grid, slot, &mut mesh);
                }
            }
            CompletionMode::Open => {}
        }

        mesh.condense_all();
        info!(
            blades = self.slots.len(),
            faces = mesh.face_count(),
            "annulus assembled"
        );
        Ok(mesh)
    }

    /// Span connectors for every adjacent pair at `s_row`, plus fan caps
    /// when completing the hub.
    ///
    /// The wrap-around pair moves the closing blade back a full turn so the
    /// interpolation crosses the short arc instead of sweeping the annulus
    /// the long way.
    fn complete_solid(&self, s_row: usize, with_caps: bool, mesh: &mut PolygonMesh) {
        let count = self.slots.len();
        for i in 0..count {
            let from = &self.slots[i];
            let to = &self.slots[(i + 1) % count];
            let (from_offset, to_offset) = if i + 1 == count {
                (from.angle - TAU, to.angle)
            } else {
                (from.angle, to.angle)
            };
            completer::span_connector(
                &self.grid,
                from,
                from_offset,
                to,
                to_offset,
                s_row,
                self.config.interblade_faces,
                mesh,
            );
            if with_caps {
                completer::inlet_cap(
                    &self.grid,
                    from,
                    from_offset,
                    to,
                    to_offset,
                    self.config.interblade_faces,
                    mesh,
                );
                completer::outlet_cap(
                    &self.grid,
                    from,
                    from_offset,
                    to,
                    to_offset,
                    self.config.interblade_faces,
                    mesh,
                );
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use passage_blade::{EdgeCaps, UniformThickness};
    use passage_camber::integrate;
    use passage_types::{Face, ScalarField};

    fn radial_grid(m_count: usize, s_count: usize) -> MeridionalGrid {
        let r = ScalarField::from_fn(m_count, s_count, |m, _| {
            1.0 + m as f64 / (m_count - 1) as f64
        });
        let z = ScalarField::from_fn(m_count, s_count, |_, s| s as f64 * 0.1);
        MeridionalGrid::new(r, z).unwrap()
    }

    fn rotor_blade(grid: &MeridionalGrid, thickness: f64, caps: EdgeCaps) -> Blade {
        let sampler = |r: f64, _z: f64| Vector3::new(5.0, 20.0 / r, 0.0);
        let camber = integrate(grid, 30.0, &sampler).unwrap();
        Blade::build(
            grid.clone(),
            &camber,
            &UniformThickness::new(thickness),
            caps,
        )
        .unwrap()
    }

    #[test]
    fn face_count_law_holds() {
        let (z_count, m_count, s_count, k) = (3, 4, 3, 2);
        let grid = radial_grid(m_count, s_count);
        let blade = rotor_blade(&grid, 1e-3, EdgeCaps::none().with_shroud());
        let config = AnnulusConfig::default().interblade_faces(k);
        let annulus = Annulus::uniform(grid, &blade, z_count, config).unwrap();
        let mesh = annulus.assemble().unwrap();

        let m_cells = m_count - 1;
        let s_cells = s_count - 1;
        // Per blade: two edge strips, two sides, one shroud cap.
        let per_blade = 2 * s_cells + 2 * m_cells * s_cells + m_cells;
        // Solid hub: connector quads plus inlet and outlet fans.
        let hub = z_count * m_cells * k + 2 * z_count * k;
        assert_eq!(mesh.face_count(), z_count * per_blade + hub);
    }

    #[test]
    fn wrap_connector_stays_on_short_arc() {
        // Swirl-free stator flow: the camberline stays flat, so connector
        // spread is purely angular and easy to bound.
        let z_count = 3;
        let k = 3;
        let grid = radial_grid(3, 2);
        let sampler = |_r: f64, _z: f64| Vector3::new(5.0, 0.0, 0.0);
        let camber = integrate(&grid, 0.0, &sampler).unwrap();
        let blade = Blade::build(
            grid.clone(),
            &camber,
            &UniformThickness::new(1e-4),
            EdgeCaps::none(),
        )
        .unwrap();
        let config = AnnulusConfig::default().interblade_faces(k);
        let annulus = Annulus::uniform(grid, &blade, z_count, config).unwrap();

        // Isolate the connector batch
        let mut connectors = PolygonMesh::new();
        annulus.complete_solid(0, false, &mut connectors);
        assert_eq!(connectors.face_count(), z_count * 2 * k);

        // Each sub-quad may span at most its share of one blade pitch (plus
        // the tiny thickness offset); a missing wrap correction would send
        // the closing connector the long way around and blow this bound.
        let pitch = TAU / z_count as f64;
        let bound = pitch / k as f64 + 1e-3;
        for face in &connectors.faces {
            let angles: Vec<f64> = face
                .vertices()
                .iter()
                .map(|v| v.y.atan2(v.x))
                .collect();
            for a in &angles {
                for b in &angles {
                    let diff = (a - b).rem_euclid(TAU);
                    let circular = diff.min(TAU - diff);
                    assert!(circular <= bound, "connector spans {circular} > {bound}");
                }
            }
        }
    }

    #[test]
    fn single_blade_wraps_to_itself() {
        let grid = radial_grid(3, 2);
        let blade = rotor_blade(&grid, 1e-3, EdgeCaps::none().with_shroud());
        let annulus =
            Annulus::uniform(grid, &blade, 1, AnnulusConfig::default().interblade_faces(4))
                .unwrap();
        let mesh = annulus.assemble().unwrap();
        assert!(!mesh.is_empty());
        assert!(mesh.faces.iter().all(Face::is_finite));
    }

    #[test]
    fn edge_mode_emits_per_blade_strips() {
        let (z_count, m_count, s_count) = (4, 5, 3);
        let grid = radial_grid(m_count, s_count);
        let blade = rotor_blade(&grid, 1e-3, EdgeCaps::none());
        let config = AnnulusConfig::default()
            .hub(CompletionMode::Edge)
            .shroud(CompletionMode::Edge);
        let annulus = Annulus::uniform(grid, &blade, z_count, config).unwrap();
        let mesh = annulus.assemble().unwrap();

        let m_cells = m_count - 1;
        let s_cells = s_count - 1;
        let per_blade = 2 * s_cells + 2 * m_cells * s_cells;
        // Edge completion adds one strip per blade per extremity.
        assert_eq!(
            mesh.face_count(),
            z_count * (per_blade + 2 * m_cells)
        );
    }

    #[test]
    fn zero_subdivision_is_rejected() {
        let grid = radial_grid(3, 2);
        let blade = rotor_blade(&grid, 1e-3, EdgeCaps::none());
        let annulus = Annulus::uniform(
            grid,
            &blade,
            2,
            AnnulusConfig::default().interblade_faces(0),
        )
        .unwrap();
        assert!(matches!(
            annulus.assemble(),
            Err(AssemblyError::InterbladeTooLow { got: 0 })
        ));
    }

    #[test]
    fn empty_slot_list_is_rejected() {
        let grid = radial_grid(3, 2);
        assert!(matches!(
            Annulus::from_slots(grid, Vec::new(), AnnulusConfig::default()),
            Err(AssemblyError::NoBlades)
        ));
    }

    #[test]
    fn out_of_order_slots_are_rejected() {
        let grid = radial_grid(3, 2);
        let blade = rotor_blade(&grid, 1e-3, EdgeCaps::none());
        let slots = vec![
            BladeSlot {
                blade: blade.clone(),
                angle: 0.0,
            },
            BladeSlot {
                blade: blade.clone(),
                angle: 3.0,
            },
            BladeSlot {
                blade,
                angle: 2.0,
            },
        ];
        assert!(matches!(
            Annulus::from_slots(grid, slots, AnnulusConfig::default()),
            Err(AssemblyError::SlotOrder { slot: 2, .. })
        ));
    }

    #[test]
    fn splitter_blades_alternate_with_full_blades() {
        // Full blades at even slots, span-restricted splitters between
        // them; the hub connectors still reference every blade's full-span
        // surfaces.
        let grid = radial_grid(4, 4);
        let full = rotor_blade(&grid, 1e-3, EdgeCaps::none().with_shroud());
        let splitter = full.clone().restrict_span(2).unwrap();

        let slots = (0..4)
            .map(|i| BladeSlot {
                blade: if i % 2 == 0 {
                    full.clone()
                } else {
                    splitter.clone()
                },
                angle: TAU * i as f64 / 4.0,
            })
            .collect();
        let k = 2;
        let annulus = Annulus::from_slots(
            grid,
            slots,
            AnnulusConfig::default().interblade_faces(k),
        )
        .unwrap();
        let mesh = annulus.assemble().unwrap();

        assert!(mesh.faces.iter().all(Face::is_finite));
        let m_cells = 3;
        let hub = 4 * m_cells * k + 2 * 4 * k;
        assert_eq!(
            mesh.face_count(),
            2 * full.face_count() + 2 * splitter.face_count() + hub
        );
    }
}

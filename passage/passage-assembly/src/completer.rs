//! Inter-blade connective geometry: span connectors, fan caps, edge strips.

use crate::annulus::BladeSlot;
use passage_types::{CylPoint, Face, MeridionalGrid, Point3, PolygonMesh};

/// Evenly spaced angles from `from` to `to`, `subdivisions + 1` points.
fn arc(from: f64, to: f64, subdivisions: usize) -> Vec<f64> {
    #[allow(clippy::cast_precision_loss)]
    let step = (to - from) / subdivisions as f64;
    #[allow(clippy::cast_precision_loss)]
    (0..=subdivisions).map(|j| from + step * j as f64).collect()
}

fn vertex(grid: &MeridionalGrid, m: usize, s: usize, theta: f64) -> Point3<f64> {
    CylPoint::new(grid.r()[(m, s)], theta, grid.z()[(m, s)]).to_cartesian()
}

/// Quads bridging the gap from one blade's leading surface to the next
/// blade's trailing surface at the spanwise row `s_row`.
///
/// `from_offset` and `to_offset` are the two blades' slot angles; the caller
/// subtracts a full turn from `from_offset` on the wrap-around pair so the
/// interpolation crosses the short arc.
#[allow(clippy::too_many_arguments)]
pub(crate) fn span_connector(
    grid: &MeridionalGrid,
    from: &BladeSlot,
    from_offset: f64,
    to: &BladeSlot,
    to_offset: f64,
    s_row: usize,
    subdivisions: usize,
    mesh: &mut PolygonMesh,
) {
    for m in 1..grid.m_count() {
        // Angular samples on the downstream (m) and upstream (m-1) rows
        let theta_a = arc(
            from.blade.theta_l()[(m, s_row)] + from_offset,
            to.blade.theta_t()[(m, s_row)] + to_offset,
            subdivisions,
        );
        let theta_b = arc(
            from.blade.theta_l()[(m - 1, s_row)] + from_offset,
            to.blade.theta_t()[(m - 1, s_row)] + to_offset,
            subdivisions,
        );
        for j in 0..subdivisions {
            mesh.push(Face::Quad([
                vertex(grid, m - 1, s_row, theta_b[j]),
                vertex(grid, m, s_row, theta_a[j]),
                vertex(grid, m, s_row, theta_a[j + 1]),
                vertex(grid, m - 1, s_row, theta_b[j + 1]),
            ]));
        }
    }
}

/// Triangles fanning from the axis apex across one inter-blade arc at the
/// inlet (m = 0). The apex is the literal point (0, 0, z); it is never
/// divided by.
pub(crate) fn inlet_cap(
    grid: &MeridionalGrid,
    from: &BladeSlot,
    from_offset: f64,
    to: &BladeSlot,
    to_offset: f64,
    subdivisions: usize,
    mesh: &mut PolygonMesh,
) {
    let apex = Point3::new(0.0, 0.0, grid.z()[(0, 0)]);
    let theta = arc(
        from.blade.theta_l()[(0, 0)] + from_offset,
        to.blade.theta_t()[(0, 0)] + to_offset,
        subdivisions,
    );
    for j in 0..subdivisions {
        mesh.push(Face::Triangle([
            vertex(grid, 0, 0, theta[j]),
            vertex(grid, 0, 0, theta[j + 1]),
            apex,
        ]));
    }
}

/// The outlet counterpart of [`inlet_cap`] at m = M−1, wound the other way:
/// flow leaves where it entered backwards.
pub(crate) fn outlet_cap(
    grid: &MeridionalGrid,
    from: &BladeSlot,
    from_offset: f64,
    to: &BladeSlot,
    to_offset: f64,
    subdivisions: usize,
    mesh: &mut PolygonMesh,
) {
    let m = grid.m_count() - 1;
    let apex = Point3::new(0.0, 0.0, grid.z()[(m, 0)]);
    let theta = arc(
        from.blade.theta_l()[(m, 0)] + from_offset,
        to.blade.theta_t()[(m, 0)] + to_offset,
        subdivisions,
    );
    for j in 0..subdivisions {
        mesh.push(Face::Triangle([
            vertex(grid, m, 0, theta[j + 1]),
            vertex(grid, m, 0, theta[j]),
            apex,
        ]));
    }
}

/// Per-blade edge-closing quads at the hub row, for an open hub gap.
pub(crate) fn hub_edge(grid: &MeridionalGrid, slot: &BladeSlot, mesh: &mut PolygonMesh) {
    let theta_l = slot.blade.theta_l();
    let theta_t = slot.blade.theta_t();
    for m in 1..grid.m_count() {
        mesh.push(Face::Quad([
            vertex(grid, m - 1, 0, theta_l[(m - 1, 0)] + slot.angle),
            vertex(grid, m, 0, theta_l[(m, 0)] + slot.angle),
            vertex(grid, m, 0, theta_t[(m, 0)] + slot.angle),
            vertex(grid, m - 1, 0, theta_t[(m - 1, 0)] + slot.angle),
        ]));
    }
}

/// Per-blade edge-closing quads at the shroud row, for an open shroud gap.
pub(crate) fn shroud_edge(grid: &MeridionalGrid, slot: &BladeSlot, mesh: &mut PolygonMesh) {
    let s = grid.s_count() - 1;
    let theta_l = slot.blade.theta_l();
    let theta_t = slot.blade.theta_t();
    for m in 1..grid.m_count() {
        mesh.push(Face::Quad([
            vertex(grid, m - 1, s, theta_t[(m - 1, s)] + slot.angle),
            vertex(grid, m, s, theta_t[(m, s)] + slot.angle),
            vertex(grid, m, s, theta_l[(m, s)] + slot.angle),
            vertex(grid, m - 1, s, theta_l[(m - 1, s)] + slot.angle),
        ]));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn arc_endpoints_and_count() {
        let theta = arc(-1.0, 1.0, 4);
        assert_eq!(theta.len(), 5);
        assert_eq!(theta[0], -1.0);
        assert!((theta[4] - 1.0).abs() < 1e-15);
        assert!((theta[2]).abs() < 1e-15);
    }

    #[test]
    fn arc_descends_when_reversed() {
        let theta = arc(0.5, -0.5, 2);
        assert!(theta[0] > theta[1] && theta[1] > theta[2]);
    }
}

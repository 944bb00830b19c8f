//! Parametric torus tessellation.
//!
//! [`TorusSpec`] describes a torus by major/minor radius and the two angular
//! sample counts; [`TorusGeometry`] is the CPU-side result: a flat vertex
//! list and a closed triangulated index list ready for GPU upload.
//!
//! The index topology wraps both angular dimensions modulo `n` and `m`, so
//! the last row and column of quads connect back to the first and the mesh
//! has no boundary edges.

use crate::mesh::Vertex;
use std::f32::consts::TAU;

/// Errors rejected at generation time.
///
/// Generation is otherwise pure and total: a spec that passes validation
/// always produces a well-formed closed mesh.
#[derive(Debug, PartialEq)]
pub enum TorusError {
    /// Angular resolution below 3 in either dimension cannot form a tube.
    DegenerateResolution { n: u32, m: u32 },
    /// Radii must satisfy `major > minor > 0`.
    InvalidRadii { major: f32, minor: f32 },
    /// The mesh cannot be addressed with `u32` indices: either `n * m`
    /// vertices or the `6 * n * m` index entries overflow.
    IndexOverflow { n: u32, m: u32 },
}

impl std::fmt::Display for TorusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TorusError::DegenerateResolution { n, m } => {
                write!(f, "torus resolution {}x{} is degenerate (need >= 3x3)", n, m)
            }
            TorusError::InvalidRadii { major, minor } => {
                write!(f, "torus radii R={}, r={} invalid (need R > r > 0)", major, minor)
            }
            TorusError::IndexOverflow { n, m } => {
                write!(f, "torus resolution {}x{} overflows u32 vertex indices", n, m)
            }
        }
    }
}

impl std::error::Error for TorusError {}

/// Generation-time torus configuration. Not mutated after mesh creation.
#[derive(Clone, Copy, Debug)]
pub struct TorusSpec {
    /// Distance from the axis of revolution to the tube center.
    pub major_radius: f32,
    /// Tube radius.
    pub minor_radius: f32,
    /// Sample count around the axis of revolution.
    pub resolution_n: u32,
    /// Sample count around the tube.
    pub resolution_m: u32,
}

impl TorusSpec {
    pub fn new(major_radius: f32, minor_radius: f32, resolution_n: u32, resolution_m: u32) -> Self {
        Self {
            major_radius,
            minor_radius,
            resolution_n,
            resolution_m,
        }
    }

    fn validate(&self) -> Result<(), TorusError> {
        if self.resolution_n < 3 || self.resolution_m < 3 {
            return Err(TorusError::DegenerateResolution {
                n: self.resolution_n,
                m: self.resolution_m,
            });
        }
        if !(self.major_radius > 0.0)
            || !(self.minor_radius > 0.0)
            || self.minor_radius >= self.major_radius
        {
            return Err(TorusError::InvalidRadii {
                major: self.major_radius,
                minor: self.minor_radius,
            });
        }
        // The index buffer holds 6 entries per grid cell, so the full
        // 6 * n * m count must fit, not just the vertex count.
        match self
            .resolution_n
            .checked_mul(self.resolution_m)
            .and_then(|nm| nm.checked_mul(6))
        {
            Some(_) => Ok(()),
            None => Err(TorusError::IndexOverflow {
                n: self.resolution_n,
                m: self.resolution_m,
            }),
        }
    }
}

/// CPU-side torus geometry before GPU upload.
#[derive(Clone, Debug)]
pub struct TorusGeometry {
    /// `n * m` vertices in row-major order (i outer, j inner).
    pub vertices: Vec<Vertex>,
    /// `6 * n * m` triangle indices, two triangles per quad cell.
    pub indices: Vec<u32>,
}

impl TorusGeometry {
    /// Tessellates a torus.
    ///
    /// Vertex at grid cell `(i, j)` sits at flat index `i * m + j` with
    /// position
    ///
    /// ```text
    /// x = (R + r cos p) cos t
    /// y = (R + r cos p) sin t
    /// z = r sin p
    /// ```
    ///
    /// for `t = 2pi i / n`, `p = 2pi j / m`. Each quad emits triangles
    /// `(v0, v1, v2)` and `(v1, v3, v2)` with both grid indices wrapped
    /// modulo their resolution, closing the surface in both directions.
    pub fn generate(spec: &TorusSpec) -> Result<Self, TorusError> {
        spec.validate()?;

        let n = spec.resolution_n;
        let m = spec.resolution_m;
        let major = spec.major_radius;
        let minor = spec.minor_radius;

        let mut vertices = Vec::with_capacity((n * m) as usize);
        for i in 0..n {
            let t = TAU * i as f32 / n as f32;
            for j in 0..m {
                let p = TAU * j as f32 / m as f32;
                let ring = major + minor * p.cos();
                vertices.push(Vertex::new([ring * t.cos(), ring * t.sin(), minor * p.sin()]));
            }
        }

        let mut indices = Vec::with_capacity((6 * n * m) as usize);
        for i in 0..n {
            let i_next = (i + 1) % n;
            for j in 0..m {
                let j_next = (j + 1) % m;
                let v0 = i * m + j;
                let v1 = i * m + j_next;
                let v2 = i_next * m + j;
                let v3 = i_next * m + j_next;
                indices.extend_from_slice(&[v0, v1, v2, v1, v3, v2]);
            }
        }

        Ok(Self { vertices, indices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn generate(major: f32, minor: f32, n: u32, m: u32) -> TorusGeometry {
        TorusGeometry::generate(&TorusSpec::new(major, minor, n, m)).unwrap()
    }

    #[test]
    fn counts_match_resolution() {
        for &(n, m) in &[(3, 3), (4, 4), (7, 5), (32, 16)] {
            let geom = generate(2.0, 0.5, n, m);
            assert_eq!(geom.vertices.len(), (n * m) as usize);
            assert_eq!(geom.indices.len(), (6 * n * m) as usize);
            assert!(geom.indices.iter().all(|&i| i < n * m));
        }
    }

    #[test]
    fn reference_scenario_4x4() {
        let geom = generate(2.0, 0.5, 4, 4);
        assert_eq!(geom.vertices.len(), 16);
        assert_eq!(geom.indices.len() / 3, 32);
        // i = 0, j = 0: t = p = 0, so x = R + r.
        let v = Vec3::from(geom.vertices[0].position);
        assert!(v.distance(Vec3::new(2.5, 0.0, 0.0)) < 1e-6);
    }

    #[test]
    fn vertices_lie_in_bounding_shell() {
        let (major, minor) = (2.0, 0.5);
        let geom = generate(major, minor, 24, 12);
        for v in &geom.vertices {
            let len = Vec3::from(v.position).length();
            assert!(len >= major - minor - 1e-5 && len <= major + minor + 1e-5);
        }
    }

    #[test]
    fn last_row_and_column_wrap_to_first() {
        let (n, m) = (6u32, 5u32);
        let geom = generate(2.0, 0.5, n, m);
        // Quads in row n-1 must reference row 0 vertices, and quads in
        // column m-1 must reference column 0 vertices.
        let last_row_quads = &geom.indices[(((n - 1) * m) * 6) as usize..];
        assert!(last_row_quads.iter().any(|&i| i < m));
        let col_quad_start = (((m - 1) * 6) as usize, (m * 6) as usize);
        let col_quad = &geom.indices[col_quad_start.0..col_quad_start.1];
        assert!(col_quad.iter().any(|&i| i % m == 0));
        // No index outside the vertex range anywhere.
        assert!(geom.indices.iter().all(|&i| i < n * m));
    }

    #[test]
    fn every_vertex_is_referenced() {
        let (n, m) = (8u32, 6u32);
        let geom = generate(1.5, 0.3, n, m);
        let mut seen = vec![false; (n * m) as usize];
        for &i in &geom.indices {
            seen[i as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "closed mesh must use every vertex");
    }

    #[test]
    fn degenerate_specs_are_rejected() {
        assert_eq!(
            TorusGeometry::generate(&TorusSpec::new(2.0, 0.5, 2, 8)).unwrap_err(),
            TorusError::DegenerateResolution { n: 2, m: 8 }
        );
        assert_eq!(
            TorusGeometry::generate(&TorusSpec::new(2.0, 0.5, 8, 2)).unwrap_err(),
            TorusError::DegenerateResolution { n: 8, m: 2 }
        );
        assert!(matches!(
            TorusGeometry::generate(&TorusSpec::new(0.0, 0.5, 8, 8)).unwrap_err(),
            TorusError::InvalidRadii { .. }
        ));
        assert!(matches!(
            TorusGeometry::generate(&TorusSpec::new(0.5, 2.0, 8, 8)).unwrap_err(),
            TorusError::InvalidRadii { .. }
        ));
        assert!(matches!(
            TorusGeometry::generate(&TorusSpec::new(2.0, f32::NAN, 8, 8)).unwrap_err(),
            TorusError::InvalidRadii { .. }
        ));
    }

    #[test]
    fn oversized_resolution_is_rejected() {
        assert_eq!(
            TorusGeometry::generate(&TorusSpec::new(2.0, 0.5, u32::MAX, 3)).unwrap_err(),
            TorusError::IndexOverflow { n: u32::MAX, m: 3 }
        );
        // Vertex count fits u32 but the 6x index count does not:
        // 26755^2 = 715,830,025 while 6 * 26755^2 = 4,294,980,150.
        assert_eq!(
            TorusSpec::new(2.0, 0.5, 26_755, 26_755).validate().unwrap_err(),
            TorusError::IndexOverflow {
                n: 26_755,
                m: 26_755
            }
        );
    }
}

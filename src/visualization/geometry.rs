//! Procedural meshes: flat-shaded polyhedra for nodes, line meshes for
//! curves and rings, point clouds for the star field.

use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;

use crate::models::ShapeFamily;

/// Golden ratio.
const PHI: f32 = 1.618_034;

/// Flat-shaded triangle soup with one normal per corner.
#[derive(Debug, Clone)]
pub struct Polyhedron {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
}

impl Polyhedron {
    /// Build the solid for a shape family at its circumscribed radius.
    pub fn for_shape(shape: ShapeFamily) -> Self {
        let (vertices, indices) = match shape {
            ShapeFamily::Icosahedron => icosahedron(),
            ShapeFamily::Octahedron => octahedron(),
            ShapeFamily::Dodecahedron => dodecahedron(),
        };
        Self::from_faces(&vertices, &indices, shape.radius())
    }

    /// Project `vertices` onto a sphere of `radius` and emit one flat
    /// triangle per index triple, wound so every face points outward.
    pub fn from_faces(vertices: &[Vec3], indices: &[[usize; 3]], radius: f32) -> Self {
        let mut positions = Vec::with_capacity(indices.len() * 3);
        let mut normals = Vec::with_capacity(indices.len() * 3);

        for &[ia, ib, ic] in indices {
            let a = vertices[ia].normalize() * radius;
            let mut b = vertices[ib].normalize() * radius;
            let mut c = vertices[ic].normalize() * radius;

            let mut normal = (b - a).cross(c - a).normalize_or_zero();
            if normal.dot(a + b + c) < 0.0 {
                std::mem::swap(&mut b, &mut c);
                normal = -normal;
            }

            for corner in [a, b, c] {
                positions.push(corner.to_array());
                normals.push(normal.to_array());
            }
        }

        Self { positions, normals }
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Upload-ready mesh.
    pub fn into_mesh(self) -> Mesh {
        Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions)
            .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals)
    }
}

fn icosahedron() -> (Vec<Vec3>, Vec<[usize; 3]>) {
    let t = PHI;
    let vertices = vec![
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    let faces = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    (vertices, faces)
}

fn octahedron() -> (Vec<Vec3>, Vec<[usize; 3]>) {
    let vertices = vec![
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
    ];
    let faces = vec![
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    (vertices, faces)
}

/// Twelve pentagons, each fanned into three triangles.
fn dodecahedron() -> (Vec<Vec3>, Vec<[usize; 3]>) {
    let t = PHI;
    let r = 1.0 / PHI;
    let vertices = vec![
        // (±1, ±1, ±1)
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
        // (0, ±1/φ, ±φ)
        Vec3::new(0.0, -r, -t),
        Vec3::new(0.0, -r, t),
        Vec3::new(0.0, r, -t),
        Vec3::new(0.0, r, t),
        // (±1/φ, ±φ, 0)
        Vec3::new(-r, -t, 0.0),
        Vec3::new(-r, t, 0.0),
        Vec3::new(r, -t, 0.0),
        Vec3::new(r, t, 0.0),
        // (±φ, 0, ±1/φ)
        Vec3::new(-t, 0.0, -r),
        Vec3::new(t, 0.0, -r),
        Vec3::new(-t, 0.0, r),
        Vec3::new(t, 0.0, r),
    ];
    let faces = vec![
        [3, 11, 7],
        [3, 7, 15],
        [3, 15, 13],
        [7, 19, 17],
        [7, 17, 6],
        [7, 6, 15],
        [17, 4, 8],
        [17, 8, 10],
        [17, 10, 6],
        [8, 0, 16],
        [8, 16, 2],
        [8, 2, 10],
        [0, 12, 1],
        [0, 1, 18],
        [0, 18, 16],
        [6, 10, 2],
        [6, 2, 13],
        [6, 13, 15],
        [2, 16, 18],
        [2, 18, 3],
        [2, 3, 13],
        [18, 1, 9],
        [18, 9, 11],
        [18, 11, 3],
        [4, 14, 12],
        [4, 12, 0],
        [4, 0, 8],
        [11, 9, 5],
        [11, 5, 19],
        [11, 19, 7],
        [19, 5, 14],
        [19, 14, 4],
        [19, 4, 17],
        [1, 12, 14],
        [1, 14, 5],
        [1, 5, 9],
    ];
    (vertices, faces)
}

/// Latitude/longitude line cage around the origin.
pub fn wireframe_sphere(radius: f32, rings: usize, segments: usize) -> Mesh {
    let point = |ring: usize, seg: usize| {
        let theta = std::f32::consts::PI * ring as f32 / rings as f32;
        let phi = std::f32::consts::TAU * seg as f32 / segments as f32;
        Vec3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin()) * radius
    };

    let mut lines = Vec::new();
    for ring in 0..=rings {
        for seg in 0..segments {
            let a = point(ring, seg);
            // Longitude segment toward the next ring
            if ring < rings {
                lines.push(a);
                lines.push(point(ring + 1, seg));
            }
            // Latitude segment around this ring (skip the degenerate poles)
            if ring > 0 && ring < rings {
                lines.push(a);
                lines.push(point(ring, (seg + 1) % segments));
            }
        }
    }
    line_mesh(PrimitiveTopology::LineList, &lines)
}

/// Connected polyline through `points`.
pub fn line_strip(points: &[Vec3]) -> Mesh {
    line_mesh(PrimitiveTopology::LineStrip, points)
}

/// Unconnected points (rendered one pixel wide).
pub fn point_cloud(points: &[Vec3]) -> Mesh {
    line_mesh(PrimitiveTopology::PointList, points)
}

fn line_mesh(topology: PrimitiveTopology, points: &[Vec3]) -> Mesh {
    let positions: Vec<[f32; 3]> = points.iter().map(|p| p.to_array()).collect();
    // Lines are drawn unlit; the normal only satisfies the PBR vertex layout.
    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];
    Mesh::new(topology, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners(poly: &Polyhedron) -> impl Iterator<Item = Vec3> + '_ {
        poly.positions.iter().map(|p| Vec3::from_array(*p))
    }

    #[test]
    fn test_triangle_counts() {
        assert_eq!(Polyhedron::for_shape(ShapeFamily::Icosahedron).triangle_count(), 20);
        assert_eq!(Polyhedron::for_shape(ShapeFamily::Octahedron).triangle_count(), 8);
        assert_eq!(Polyhedron::for_shape(ShapeFamily::Dodecahedron).triangle_count(), 36);
    }

    #[test]
    fn test_vertices_lie_on_circumsphere() {
        for shape in [
            ShapeFamily::Icosahedron,
            ShapeFamily::Octahedron,
            ShapeFamily::Dodecahedron,
        ] {
            let poly = Polyhedron::for_shape(shape);
            for corner in corners(&poly) {
                assert!(
                    (corner.length() - shape.radius()).abs() < 1e-4,
                    "{shape:?} corner off sphere"
                );
            }
        }
    }

    #[test]
    fn test_faces_point_outward() {
        for shape in [
            ShapeFamily::Icosahedron,
            ShapeFamily::Octahedron,
            ShapeFamily::Dodecahedron,
        ] {
            let poly = Polyhedron::for_shape(shape);
            for tri in 0..poly.triangle_count() {
                let a = Vec3::from_array(poly.positions[tri * 3]);
                let b = Vec3::from_array(poly.positions[tri * 3 + 1]);
                let c = Vec3::from_array(poly.positions[tri * 3 + 2]);
                let winding = (b - a).cross(c - a);
                let normal = Vec3::from_array(poly.normals[tri * 3]);
                assert!(winding.dot(a + b + c) > 0.0);
                assert!(normal.dot(winding) > 0.0);
                assert!((normal.length() - 1.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_dodecahedron_pentagons_are_flat() {
        let poly = Polyhedron::for_shape(ShapeFamily::Dodecahedron);
        // Each pentagon is three consecutive triangles sharing one normal
        for face in 0..12 {
            let n0 = Vec3::from_array(poly.normals[face * 9]);
            for tri in 1..3 {
                let n = Vec3::from_array(poly.normals[face * 9 + tri * 3]);
                assert!(n0.dot(n) > 0.999);
            }
        }
    }

    #[test]
    fn test_winding_is_repaired() {
        // Deliberately inward-wound single face
        let vertices = [Vec3::X, Vec3::Z, Vec3::Y];
        let poly = Polyhedron::from_faces(&vertices, &[[0, 1, 2]], 1.0);
        let normal = Vec3::from_array(poly.normals[0]);
        assert!(normal.dot(Vec3::ONE) > 0.0);
    }
}

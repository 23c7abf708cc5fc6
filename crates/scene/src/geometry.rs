use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A mesh vertex: position and outward face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed triangle list.
#[derive(Debug, Clone)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

/// Axis-aligned box centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for BoxGeometry {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl BoxGeometry {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Scale that stretches the unit cube from [`BoxGeometry::mesh_data`] to this box.
    pub fn scale(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }

    /// Unit cube, one quad per face so each face has a flat normal.
    pub fn mesh_data() -> MeshData {
        let p = 0.5_f32;
        let v = |position: [f32; 3], normal: [f32; 3]| Vertex { position, normal };
        #[rustfmt::skip]
        let vertices = vec![
            // +Z face
            v([-p, -p,  p], [0.0, 0.0, 1.0]),
            v([ p, -p,  p], [0.0, 0.0, 1.0]),
            v([ p,  p,  p], [0.0, 0.0, 1.0]),
            v([-p,  p,  p], [0.0, 0.0, 1.0]),
            // -Z face
            v([ p, -p, -p], [0.0, 0.0, -1.0]),
            v([-p, -p, -p], [0.0, 0.0, -1.0]),
            v([-p,  p, -p], [0.0, 0.0, -1.0]),
            v([ p,  p, -p], [0.0, 0.0, -1.0]),
            // +X face
            v([ p, -p,  p], [1.0, 0.0, 0.0]),
            v([ p, -p, -p], [1.0, 0.0, 0.0]),
            v([ p,  p, -p], [1.0, 0.0, 0.0]),
            v([ p,  p,  p], [1.0, 0.0, 0.0]),
            // -X face
            v([-p, -p, -p], [-1.0, 0.0, 0.0]),
            v([-p, -p,  p], [-1.0, 0.0, 0.0]),
            v([-p,  p,  p], [-1.0, 0.0, 0.0]),
            v([-p,  p, -p], [-1.0, 0.0, 0.0]),
            // +Y face
            v([-p,  p,  p], [0.0, 1.0, 0.0]),
            v([ p,  p,  p], [0.0, 1.0, 0.0]),
            v([ p,  p, -p], [0.0, 1.0, 0.0]),
            v([-p,  p, -p], [0.0, 1.0, 0.0]),
            // -Y face
            v([-p, -p, -p], [0.0, -1.0, 0.0]),
            v([ p, -p, -p], [0.0, -1.0, 0.0]),
            v([ p, -p,  p], [0.0, -1.0, 0.0]),
            v([-p, -p,  p], [0.0, -1.0, 0.0]),
        ];
        let indices = (0..6u16)
            .flat_map(|face| {
                let b = face * 4;
                [b, b + 1, b + 2, b + 2, b + 3, b]
            })
            .collect();
        MeshData { vertices, indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_cube_shape() {
        let mesh = BoxGeometry::mesh_data();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn triangles_wind_counter_clockwise_outward() {
        let mesh = BoxGeometry::mesh_data();
        for tri in mesh.indices.chunks(3) {
            let a = Vec3::from(mesh.vertices[tri[0] as usize].position);
            let b = Vec3::from(mesh.vertices[tri[1] as usize].position);
            let c = Vec3::from(mesh.vertices[tri[2] as usize].position);
            let n = Vec3::from(mesh.vertices[tri[0] as usize].normal);
            assert!((b - a).cross(c - a).dot(n) > 0.0);
        }
    }

    #[test]
    fn scale_matches_dimensions() {
        let g = BoxGeometry::new(2.0, 1.0, 0.5);
        assert_eq!(g.scale(), Vec3::new(2.0, 1.0, 0.5));
    }
}

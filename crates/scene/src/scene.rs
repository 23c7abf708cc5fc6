use crate::geometry::BoxGeometry;
use crate::light::DirectionalLight;
use bouncebox_common::{Color, NodeId, Transform};
use glam::Mat4;
use std::collections::BTreeMap;
use std::fmt;

/// Physically based material. Only the diffuse term is shaded; roughness
/// and metalness are carried for completeness at their matte defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardMaterial {
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl StandardMaterial {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            roughness: 1.0,
            metalness: 0.0,
        }
    }
}

/// A box placed in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshNode {
    pub geometry: BoxGeometry,
    pub material: StandardMaterial,
    pub transform: Transform,
}

impl MeshNode {
    pub fn new(geometry: BoxGeometry, material: StandardMaterial) -> Self {
        Self {
            geometry,
            material,
            transform: Transform::default(),
        }
    }

    /// Model matrix for the unit cube: the node transform applied after
    /// stretching to the geometry's dimensions.
    pub fn model_matrix(&self) -> Mat4 {
        self.transform.matrix() * Mat4::from_scale(self.geometry.scale())
    }
}

/// Everything that gets drawn.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    meshes: BTreeMap<NodeId, MeshNode>,
    lights: Vec<DirectionalLight>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mesh and return its id.
    pub fn add_mesh(&mut self, mesh: MeshNode) -> NodeId {
        let id = NodeId::new();
        self.meshes.insert(id, mesh);
        tracing::debug!(node = %id.short(), "mesh added");
        id
    }

    pub fn add_light(&mut self, light: DirectionalLight) {
        self.lights.push(light);
    }

    /// Remove a mesh. Returns it if it existed.
    pub fn remove_mesh(&mut self, id: NodeId) -> Option<MeshNode> {
        self.meshes.remove(&id)
    }

    pub fn mesh(&self, id: NodeId) -> Option<&MeshNode> {
        self.meshes.get(&id)
    }

    pub fn mesh_mut(&mut self, id: NodeId) -> Option<&mut MeshNode> {
        self.meshes.get_mut(&id)
    }

    /// Meshes in deterministic id order.
    pub fn meshes(&self) -> impl Iterator<Item = (&NodeId, &MeshNode)> {
        self.meshes.iter()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn lights(&self) -> &[DirectionalLight] {
        &self.lights
    }

    pub fn summary(&self) -> SceneSummary {
        SceneSummary {
            mesh_count: self.meshes.len(),
            light_count: self.lights.len(),
            positions: self
                .meshes
                .iter()
                .map(|(id, m)| {
                    let p = m.transform.position;
                    (*id, [p.x, p.y, p.z])
                })
                .collect(),
        }
    }
}

/// Point-in-time description of the scene for logs and tooling.
#[derive(Debug, Clone)]
pub struct SceneSummary {
    pub mesh_count: usize,
    pub light_count: usize,
    pub positions: Vec<(NodeId, [f32; 3])>,
}

impl fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scene: meshes={} lights={}",
            self.mesh_count, self.light_count
        )?;
        for (id, p) in &self.positions {
            write!(
                f,
                "\n  [{}] pos=({:.2}, {:.2}, {:.2})",
                id.short(),
                p[0],
                p[1],
                p[2]
            )?;
        }
        Ok(())
    }
}

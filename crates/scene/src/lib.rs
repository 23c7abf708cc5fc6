//! Scene contents for the bouncing cube.
//!
//! The scene is a flat set of box meshes plus directional lights. There is no
//! parenting: every transform is in world space.
//!
//! # Invariants
//! - Mesh iteration order is deterministic (BTreeMap keyed by NodeId).
//! - Renderers only read the scene; the frame driver owns all mutation.

mod camera;
mod geometry;
mod light;
mod scene;

pub use camera::PerspectiveCamera;
pub use geometry::{BoxGeometry, MeshData, Vertex};
pub use light::DirectionalLight;
pub use scene::{MeshNode, Scene, SceneSummary, StandardMaterial};

use gltf::Node;
use nalgebra_glm::{
    Mat4,
    Vec3,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for Position {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Position> for [f32; 3] {
    fn from(p: Position) -> Self {
        [p.x, p.y, p.z]
    }
}

/// Snapshot of one skeletal joint in world space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bone {
    pub name: String,
    pub position: Position,
}

impl Bone {
    pub fn from_node(node: &Node, world: &Mat4) -> Self {
        let translation = Vec3::new(world[(0, 3)], world[(1, 3)], world[(2, 3)]);
        Self {
            name: node.name().unwrap_or_default().to_string(),
            position: Position::from(translation),
        }
    }

    pub fn coordinates(bones: &[Bone]) -> Vec<[f32; 3]> {
        bones.iter().map(|bone| bone.position.into()).collect()
    }
}

use crate::{
    bone::Bone,
    model::ModelDescriptor,
    traverse::traverse,
};
use anyhow::{
    Context,
    Result,
};
use gltf::{
    Document,
    Scene,
};
use std::{
    collections::HashSet,
    path::Path,
};

/// A loaded glTF document viewed as a set of skeletal joints.
#[derive(Debug, Clone)]
pub struct Skeleton {
    document: Document,
    joints: HashSet<usize>,
}

impl Skeleton {
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Loading glTF from: {:?}", path);
        let (document, _buffers, _images) = gltf::import(path)
            .with_context(|| format!("failed to load model: {}", path.display()))?;
        Ok(Self::from_document(document))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let (document, _buffers, _images) =
            gltf::import_slice(bytes).context("failed to parse model")?;
        Ok(Self::from_document(document))
    }

    pub fn from_model_descriptor(desc: &ModelDescriptor) -> Result<Self> {
        let path = desc.resolved_path()?;
        Self::load(&path)
    }

    /// Any node referenced by a skin is a joint.
    pub fn from_document(document: Document) -> Self {
        let joints = document
            .skins()
            .flat_map(|skin| skin.joints().map(|joint| joint.index()))
            .collect();
        Self { document, joints }
    }

    pub fn is_joint(&self, node_index: usize) -> bool {
        self.joints.contains(&node_index)
    }

    /// Joints reachable from [`Skeleton::scene`], i.e. the length of [`Skeleton::bones`].
    pub fn joint_count(&self) -> usize {
        self.scene().map_or(0, |scene| {
            traverse(&scene, |node| self.is_joint(node.index()), |_, _| ()).len()
        })
    }

    /// The default scene, falling back to the first one.
    pub fn scene(&self) -> Option<Scene<'_>> {
        self.document
            .default_scene()
            .or_else(|| self.document.scenes().next())
    }

    /// World-space bones in traversal order.
    pub fn bones(&self) -> Vec<Bone> {
        let Some(scene) = self.scene() else {
            log::warn!("glTF document has no scene");
            return Vec::new();
        };
        traverse(
            &scene,
            |node| self.is_joint(node.index()),
            |node, world| Bone::from_node(node, world),
        )
    }
}

pub fn extract_bones(path: &Path) -> Result<Vec<Bone>> {
    let skeleton = Skeleton::load(path)?;
    Ok(skeleton.bones())
}

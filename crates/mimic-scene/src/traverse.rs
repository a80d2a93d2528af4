use gltf::{
    Node,
    Scene,
};
use nalgebra_glm::Mat4;

/// DFS traversal of the glTF scene graph, parents before children.
fn traverse_recursive<'a, T, P, F>(
    node: Node<'a>,
    parent_transform: &Mat4,
    predicate: &P,
    extract: &F,
    out: &mut Vec<T>,
) where
    P: Fn(&Node<'a>) -> bool,
    F: Fn(&Node<'a>, &Mat4) -> T,
{
    let world_transform = parent_transform * Mat4::from(node.transform().matrix());
    if predicate(&node) {
        out.push(extract(&node, &world_transform));
    }
    for child in node.children() {
        traverse_recursive(child, &world_transform, predicate, extract, out);
    }
}

/// Walks every node of `scene` and maps the ones accepted by `predicate`
/// through `extract`, which receives the node's world transform.
pub fn traverse<'a, T, P, F>(scene: &Scene<'a>, predicate: P, extract: F) -> Vec<T>
where
    P: Fn(&Node<'a>) -> bool,
    F: Fn(&Node<'a>, &Mat4) -> T,
{
    let mut out = Vec::new();
    for node in scene.nodes() {
        traverse_recursive(node, &Mat4::identity(), &predicate, &extract, &mut out);
    }
    out
}

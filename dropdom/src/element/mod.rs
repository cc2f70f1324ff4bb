mod node;

pub use node::{Content, Element};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Whether `id` names `ancestor_id` itself or one of its descendants.
///
/// Returns false when `ancestor_id` is not in the tree.
pub fn contains_element(root: &Element, ancestor_id: &str, id: &str) -> bool {
    find_element(root, ancestor_id)
        .and_then(|ancestor| find_element(ancestor, id))
        .is_some()
}

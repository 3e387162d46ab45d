use crate::document::{ShapeHandle, SvgDom};
use ramani_core::display_region_name;
use rustc_hash::FxHashSet;

const SHAPE_TAGS: [&str; 4] = ["path", "polygon", "rect", "circle"];

fn is_shape(dom: &SvgDom, handle: ShapeHandle) -> bool {
    SHAPE_TAGS.contains(&dom.node(handle).name.as_str())
}

/// A candidate region shape with its extracted naming attributes.
#[derive(Debug, Clone)]
pub(crate) struct DiscoveredShape {
    pub(crate) node: ShapeHandle,
    /// Friendly name (underscores/hyphens spaced out), used for tooltips.
    pub(crate) name: String,
    /// Raw `id` attribute; the classification key.
    pub(crate) id_attr: String,
    pub(crate) name_attr: Option<String>,
    pub(crate) class_attr: Option<String>,
}

/// Walks the document for eligible region shapes.
///
/// A shape qualifies when it exposes some name: a `<title>` child, `data-name`, `data-title`,
/// `aria-label`, or an `id` attribute, in that priority order. Nameless shapes are excluded.
/// When nothing qualifies directly, names are derived from enclosing `<g>` elements and every
/// child shape of a named group is bound under the group's name.
pub(crate) fn discover_shapes(dom: &SvgDom) -> Vec<DiscoveredShape> {
    let Some(root) = dom.root() else {
        return Vec::new();
    };
    let all = dom.descendants(root);

    let mut shapes: Vec<DiscoveredShape> = Vec::new();
    for &handle in &all {
        if !is_shape(dom, handle) {
            continue;
        }
        let Some(raw_name) = shape_name(dom, handle) else {
            continue;
        };
        shapes.push(DiscoveredShape {
            node: handle,
            name: display_region_name(raw_name),
            id_attr: dom.attr(handle, "id").unwrap_or_default().to_string(),
            name_attr: dom.attr(handle, "name").map(str::to_string),
            class_attr: dom.attr(handle, "class").map(str::to_string),
        });
    }
    if !shapes.is_empty() {
        return shapes;
    }

    // Group fallback: nothing carried its own name, so associate each named group's child
    // shapes with the group's name.
    let mut claimed: FxHashSet<ShapeHandle> = FxHashSet::default();
    for &handle in &all {
        if dom.node(handle).name != "g" {
            continue;
        }
        let group_name = dom
            .title_text(handle)
            .or_else(|| dom.attr(handle, "id"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let Some(group_name) = group_name else {
            continue;
        };
        for inner in dom.descendants(handle) {
            if inner == handle || !is_shape(dom, inner) || !claimed.insert(inner) {
                continue;
            }
            shapes.push(DiscoveredShape {
                node: inner,
                name: group_name.clone(),
                id_attr: dom.attr(inner, "id").unwrap_or_default().to_string(),
                name_attr: None,
                class_attr: None,
            });
        }
    }
    shapes
}

fn shape_name<'a>(dom: &'a SvgDom, handle: ShapeHandle) -> Option<&'a str> {
    if let Some(title) = dom.title_text(handle) {
        return Some(title);
    }
    // Blank attributes fall through to the next candidate rather than claiming the slot.
    ["data-name", "data-title", "aria-label", "id"]
        .into_iter()
        .find_map(|attr| dom.attr(handle, attr).map(str::trim).filter(|s| !s.is_empty()))
}

use crate::document::ShapeHandle;
use ramani_core::CircuitId;
use serde::Serialize;

/// Per-shape record tying a document node to its classification and interaction flags.
///
/// Bindings are created when a document is attached and destroyed when the component unmounts
/// or the document is replaced. The handle is renderer-private and is skipped on
/// serialization; hosts address bindings by index (the order matches document order).
#[derive(Debug, Clone, Serialize)]
pub struct RegionShapeBinding {
    #[serde(skip)]
    pub(crate) shape: ShapeHandle,
    /// Raw identifying attribute from the document; classification key.
    pub region_code: String,
    /// Friendly name shown in tooltips.
    pub display_name: String,
    pub circuit: CircuitId,
    pub is_selected: bool,
    pub is_hovered: bool,
}

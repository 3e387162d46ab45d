use crate::CircuitId;
use indexmap::IndexMap;
use serde::Serialize;

const FALLBACK_COLOR: &str = "#64748b";

/// Ordered circuit -> display color map.
///
/// Loaded once at component initialization and immutable for the session. Iteration order is
/// presentation order: legends render entries in the order the palette declares them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitPalette {
    colors: IndexMap<CircuitId, String>,
}

impl CircuitPalette {
    /// The site's circuit colors. `Lake Zone` and `Central Circuit` carry 8-digit hex values
    /// (RGBA) straight from the design source.
    pub fn tanzania() -> Self {
        let mut colors = IndexMap::new();
        colors.insert(CircuitId::NorthernCircuit, "#0ea5a4".to_string());
        colors.insert(CircuitId::SouthernCircuit, "#059669".to_string());
        colors.insert(CircuitId::WesternCircuit, "#d97706".to_string());
        colors.insert(CircuitId::CoastalAndIslands, "#0284c7".to_string());
        colors.insert(CircuitId::SouthernHighlands, "#7c3aed".to_string());
        colors.insert(CircuitId::LakeZone, "#72bbe0ff".to_string());
        colors.insert(CircuitId::Other, "#64748b".to_string());
        colors.insert(CircuitId::CentralCircuit, "#bdd906ff".to_string());
        Self { colors }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (CircuitId, String)>) -> Self {
        Self {
            colors: entries.into_iter().collect(),
        }
    }

    /// Color for a circuit, falling back to the `Other` entry (then a neutral slate) so every
    /// shape always gets *some* fill.
    pub fn color(&self, circuit: CircuitId) -> &str {
        self.colors
            .get(&circuit)
            .or_else(|| self.colors.get(&CircuitId::Other))
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CircuitId, &str)> {
        self.colors.iter().map(|(c, color)| (*c, color.as_str()))
    }

    pub fn circuits(&self) -> impl Iterator<Item = CircuitId> + '_ {
        self.colors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for CircuitPalette {
    fn default() -> Self {
        Self::tanzania()
    }
}

use crate::state::InteractionState;
use ramani_core::{CircuitId, CircuitPalette};
use serde::Serialize;

/// One legend row: swatch color + label plus the flags a host needs to style the button.
#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub circuit: CircuitId,
    pub label: &'static str,
    pub color: String,
    pub selected: bool,
    pub visible: bool,
}

pub(crate) fn build_legend(
    palette: &CircuitPalette,
    state: &InteractionState,
) -> Vec<LegendEntry> {
    palette
        .iter()
        .map(|(circuit, color)| LegendEntry {
            circuit,
            label: circuit.label(),
            color: color.to_string(),
            selected: state.selected_circuit() == Some(circuit),
            visible: state.is_visible(circuit),
        })
        .collect()
}

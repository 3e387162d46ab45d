use indexmap::IndexMap;
use ramani_core::{CircuitId, CircuitPalette};

/// Hover / selection / visibility state for one overlay instance.
///
/// All mutations originate from serialized host events (pointer, legend, reset), so there is
/// no interior locking. The visibility map is constructed once from the palette (one entry
/// per circuit, default `true`) and only ever flipped, never re-derived.
#[derive(Debug, Clone)]
pub struct InteractionState {
    hovered: Option<usize>,
    selected_circuit: Option<CircuitId>,
    visible_circuits: IndexMap<CircuitId, bool>,
}

impl InteractionState {
    pub fn new(palette: &CircuitPalette) -> Self {
        Self {
            hovered: None,
            selected_circuit: None,
            visible_circuits: palette.circuits().map(|c| (c, true)).collect(),
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn selected_circuit(&self) -> Option<CircuitId> {
        self.selected_circuit
    }

    pub fn is_idle(&self) -> bool {
        self.hovered.is_none() && self.selected_circuit.is_none()
    }

    pub(crate) fn set_hovered(&mut self, binding: Option<usize>) {
        self.hovered = binding;
    }

    /// Selects `circuit`, or deselects it when it is already the selection (toggle-off).
    /// Returns the new selection.
    pub(crate) fn select_toggle(&mut self, circuit: CircuitId) -> Option<CircuitId> {
        self.selected_circuit = if self.selected_circuit == Some(circuit) {
            None
        } else {
            Some(circuit)
        };
        self.selected_circuit
    }

    pub(crate) fn toggle_visibility(&mut self, circuit: CircuitId) {
        let flag = self.visible_circuits.entry(circuit).or_insert(true);
        *flag = !*flag;
    }

    /// Circuits absent from the map (a palette swap mid-session) count as visible.
    pub fn is_visible(&self, circuit: CircuitId) -> bool {
        self.visible_circuits.get(&circuit).copied().unwrap_or(true)
    }

    pub fn visible_circuits(&self) -> &IndexMap<CircuitId, bool> {
        &self.visible_circuits
    }

    /// Unconditionally returns to idle and restores every circuit to visible. Idempotent.
    /// Returns whether the selection actually changed.
    pub(crate) fn reset(&mut self) -> bool {
        let selection_changed = self.selected_circuit.is_some();
        self.hovered = None;
        self.selected_circuit = None;
        for flag in self.visible_circuits.values_mut() {
            *flag = true;
        }
        selection_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> InteractionState {
        InteractionState::new(&CircuitPalette::default())
    }

    #[test]
    fn starts_idle_with_everything_visible() {
        let s = state();
        assert!(s.is_idle());
        assert!(s.visible_circuits().values().all(|&v| v));
        assert_eq!(s.visible_circuits().len(), CircuitId::ALL.len());
    }

    #[test]
    fn selecting_twice_round_trips_to_idle() {
        let mut s = state();
        assert_eq!(
            s.select_toggle(CircuitId::LakeZone),
            Some(CircuitId::LakeZone)
        );
        assert_eq!(s.select_toggle(CircuitId::LakeZone), None);
        assert!(s.is_idle());
    }

    #[test]
    fn selecting_another_circuit_replaces_the_selection() {
        let mut s = state();
        s.select_toggle(CircuitId::LakeZone);
        assert_eq!(
            s.select_toggle(CircuitId::CentralCircuit),
            Some(CircuitId::CentralCircuit)
        );
    }

    #[test]
    fn reset_restores_visibility_and_clears_selection() {
        let mut s = state();
        s.select_toggle(CircuitId::WesternCircuit);
        s.toggle_visibility(CircuitId::WesternCircuit);
        s.toggle_visibility(CircuitId::LakeZone);
        s.set_hovered(Some(3));

        assert!(s.reset());
        assert!(s.is_idle());
        assert!(s.visible_circuits().values().all(|&v| v));

        // Second reset is a no-op and reports no selection change.
        assert!(!s.reset());
    }

    #[test]
    fn unknown_circuits_default_to_visible() {
        let s = InteractionState::new(&CircuitPalette::from_entries([]));
        assert!(s.is_visible(CircuitId::LakeZone));
    }
}

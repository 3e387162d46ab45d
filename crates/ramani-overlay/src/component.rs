use crate::binding::RegionShapeBinding;
use crate::document::{ShapeHandle, SvgDom};
use crate::legend::{LegendEntry, build_legend};
use crate::shapes::discover_shapes;
use crate::state::InteractionState;
use crate::style::{StyleOptions, VisualState, root_style, shape_style};
use crate::tooltip::Tooltip;
use crate::{Error, Result};
use ramani_core::{CircuitId, CircuitPalette, Classifier, RegionTable};
use rustc_hash::FxHashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Where the vector document comes from. The document is untrusted third-party data; sources
/// only hand over text, the overlay does the tolerating.
pub trait DocumentSource {
    fn fetch_document(&self) -> Result<String>;
}

/// Reads the document from a filesystem path (the well-known static asset location in
/// deployments, a fixture in tests).
#[derive(Debug, Clone)]
pub struct FileDocumentSource {
    path: PathBuf,
}

impl FileDocumentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileDocumentSource {
    fn fetch_document(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|e| Error::DocumentLoad {
            message: format!("{}: {e}", self.path.display()),
        })
    }
}

/// Serves already-fetched document text, for hosts that do their own transport.
#[derive(Debug, Clone)]
pub struct TextDocumentSource {
    text: String,
}

impl TextDocumentSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DocumentSource for TextDocumentSource {
    fn fetch_document(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// Host callback fired on every selection change with the new selection (or `None`).
pub type SelectionListener = Arc<dyn Fn(Option<CircuitId>) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayStatus {
    /// No document attached yet.
    Empty,
    /// Document parsed; bindings and the augmented rendition are available.
    Ready,
    /// The document could not be fetched or parsed. Legend and reset stay functional; the
    /// rest of the host page is unaffected.
    Unavailable,
}

/// The region-map overlay component.
///
/// Owns the parsed document arena, the shape bindings and the interaction state. Hosts drive
/// it with pointer/legend/reset events (addressing shapes by binding index, in document
/// order) and re-render [`MapOverlay::render_svg`] output after each event.
pub struct MapOverlay {
    classifier: Classifier,
    palette: CircuitPalette,
    options: StyleOptions,
    dom: Option<SvgDom>,
    bindings: Vec<RegionShapeBinding>,
    state: InteractionState,
    tooltip: Tooltip,
    status: OverlayStatus,
    mounted: bool,
    on_region_select: Option<SelectionListener>,
}

impl MapOverlay {
    pub fn new() -> Self {
        let palette = CircuitPalette::default();
        Self {
            classifier: Classifier::default(),
            state: InteractionState::new(&palette),
            palette,
            options: StyleOptions::default(),
            dom: None,
            bindings: Vec::new(),
            tooltip: Tooltip::default(),
            status: OverlayStatus::Empty,
            mounted: true,
            on_region_select: None,
        }
    }

    pub fn with_table(mut self, table: RegionTable) -> Self {
        self.classifier = Classifier::new(table);
        self
    }

    pub fn with_palette(mut self, palette: CircuitPalette) -> Self {
        self.state = InteractionState::new(&palette);
        self.palette = palette;
        self
    }

    pub fn with_style_options(mut self, options: StyleOptions) -> Self {
        self.options = options;
        self
    }

    /// Registers the host callback invoked on every selection change.
    pub fn on_region_select(
        mut self,
        listener: impl Fn(Option<CircuitId>) + Send + Sync + 'static,
    ) -> Self {
        self.on_region_select = Some(Arc::new(listener));
        self
    }

    // ------------------------------------------------------------------
    // Document lifecycle
    // ------------------------------------------------------------------

    /// Parses `text` and (re)builds the shape bindings. Replaces any previously attached
    /// document; stale bindings and their handles are released first.
    pub fn attach_document(&mut self, text: &str) -> Result<()> {
        self.release_document();

        let dom = SvgDom::parse(text)?;
        let discovered = discover_shapes(&dom);
        let mut bindings = Vec::with_capacity(discovered.len());
        for shape in discovered {
            self.classifier.learn(
                &shape.id_attr,
                shape.name_attr.as_deref(),
                shape.class_attr.as_deref(),
            );
            let circuit = self.classifier.classify(&shape.id_attr);
            bindings.push(RegionShapeBinding {
                shape: shape.node,
                region_code: shape.id_attr,
                display_name: shape.name,
                circuit,
                is_selected: self.state.selected_circuit() == Some(circuit),
                is_hovered: false,
            });
        }

        tracing::debug!(shapes = bindings.len(), "vector document attached");
        self.dom = Some(dom);
        self.bindings = bindings;
        self.status = OverlayStatus::Ready;
        Ok(())
    }

    /// Fetches and attaches the document. Failures degrade to
    /// [`OverlayStatus::Unavailable`] instead of propagating; nothing is retried. A late
    /// result after [`MapOverlay::unmount`] is discarded.
    pub fn load_sync(&mut self, source: &dyn DocumentSource) {
        if !self.mounted {
            return;
        }
        let text = match source.fetch_document() {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "vector document fetch failed; map unavailable");
                self.release_document();
                self.status = OverlayStatus::Unavailable;
                return;
            }
        };
        if let Err(err) = self.attach_document(&text) {
            tracing::warn!(error = %err, "vector document rejected; map unavailable");
            self.release_document();
            self.status = OverlayStatus::Unavailable;
        }
    }

    /// Async variant of [`MapOverlay::load_sync`]. Executor-free: the work is synchronous,
    /// the signature composes with async hosts.
    pub async fn load(&mut self, source: &dyn DocumentSource) {
        self.load_sync(source)
    }

    /// Detaches the document and releases every binding and handle. The interaction state is
    /// reset; a remount means a fresh component or a new `load`.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.release_document();
        self.state = InteractionState::new(&self.palette);
    }

    fn release_document(&mut self) {
        self.dom = None;
        self.bindings.clear();
        self.state.set_hovered(None);
        self.tooltip.hide();
        self.status = OverlayStatus::Empty;
    }

    // ------------------------------------------------------------------
    // Interaction events
    // ------------------------------------------------------------------

    /// Pointer entered the shape at `binding` with pointer page coordinates `(x, y)`.
    pub fn pointer_enter(&mut self, binding: usize, x: f64, y: f64) {
        if let Some(prev) = self.state.hovered() {
            if let Some(b) = self.bindings.get_mut(prev) {
                b.is_hovered = false;
            }
        }
        let offset = self.options.tooltip_offset;
        let Some(b) = self.bindings.get_mut(binding) else {
            return;
        };
        b.is_hovered = true;
        self.state.set_hovered(Some(binding));
        self.tooltip
            .show(b.display_name.clone(), b.circuit.label().to_string(), x, y, offset);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.state.hovered().is_some() {
            self.tooltip.move_to(x, y, self.options.tooltip_offset);
        }
    }

    pub fn pointer_leave(&mut self) {
        if let Some(prev) = self.state.hovered() {
            if let Some(b) = self.bindings.get_mut(prev) {
                b.is_hovered = false;
            }
        }
        self.state.set_hovered(None);
        self.tooltip.hide();
    }

    /// Click on a map shape: toggles selection of the shape's circuit. Visibility is not
    /// touched; that coupling belongs to the legend alone.
    pub fn click_shape(&mut self, binding: usize) {
        let Some(circuit) = self.bindings.get(binding).map(|b| b.circuit) else {
            return;
        };
        let selection = self.state.select_toggle(circuit);
        self.apply_selection_flags();
        self.notify_selection(selection);
    }

    /// Click on a legend entry: selects the circuit AND toggles its visibility flag. The
    /// coupling is deliberate (the legend doubles as the show/hide control) and intentionally
    /// differs from [`MapOverlay::click_shape`].
    pub fn click_legend(&mut self, circuit: CircuitId) {
        let selection = self.state.select_toggle(circuit);
        self.state.toggle_visibility(circuit);
        self.apply_selection_flags();
        self.notify_selection(selection);
    }

    /// Clears the selection, restores all circuits to visible and hides the tooltip.
    /// Idempotent; notifies the host only when the selection actually changed.
    pub fn reset(&mut self) {
        let selection_changed = self.state.reset();
        for b in &mut self.bindings {
            b.is_selected = false;
            b.is_hovered = false;
        }
        self.tooltip.hide();
        if selection_changed {
            self.notify_selection(None);
        }
    }

    fn apply_selection_flags(&mut self) {
        let selected = self.state.selected_circuit();
        for b in &mut self.bindings {
            b.is_selected = selected == Some(b.circuit);
        }
    }

    fn notify_selection(&self, selection: Option<CircuitId>) {
        if let Some(listener) = &self.on_region_select {
            listener(selection);
        }
    }

    // ------------------------------------------------------------------
    // Output surface
    // ------------------------------------------------------------------

    /// The augmented SVG rendition: root sizing/presentation attributes, per-shape style for
    /// the current interaction state, and `data-region-name` / `data-circuit` /
    /// `data-selected` attributes. `None` unless a document is attached.
    pub fn render_svg(&self) -> Option<String> {
        let dom = self.dom.as_ref()?;
        let root = dom.root()?;

        let mut overrides: FxHashMap<ShapeHandle, Vec<(String, String)>> = FxHashMap::default();
        overrides.insert(
            root,
            vec![
                ("width".to_string(), "100%".to_string()),
                ("height".to_string(), self.options.root_height.clone()),
                ("style".to_string(), root_style(&self.options)),
            ],
        );
        for b in &self.bindings {
            let style = shape_style(
                self.palette.color(b.circuit),
                VisualState::of(b.is_selected, b.is_hovered),
                self.state.is_visible(b.circuit),
                &self.options,
            );
            overrides.insert(
                b.shape,
                vec![
                    ("style".to_string(), style),
                    ("data-region-name".to_string(), b.display_name.clone()),
                    ("data-circuit".to_string(), b.circuit.label().to_string()),
                    (
                        "data-selected".to_string(),
                        if b.is_selected { "true" } else { "false" }.to_string(),
                    ),
                ],
            );
        }
        dom.to_svg(&overrides)
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        build_legend(&self.palette, &self.state)
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn bindings(&self) -> &[RegionShapeBinding] {
        &self.bindings
    }

    /// Index of the first binding whose region code matches, for hosts that address shapes by
    /// dataset identifier rather than document order.
    pub fn find_binding(&self, region_code: &str) -> Option<usize> {
        self.bindings
            .iter()
            .position(|b| b.region_code == region_code)
    }

    pub fn status(&self) -> OverlayStatus {
        self.status
    }

    pub fn selected_circuit(&self) -> Option<CircuitId> {
        self.state.selected_circuit()
    }

    pub fn is_circuit_visible(&self, circuit: CircuitId) -> bool {
        self.state.is_visible(circuit)
    }

    pub fn palette(&self) -> &CircuitPalette {
        &self.palette
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }
}

impl Default for MapOverlay {
    fn default() -> Self {
        Self::new()
    }
}

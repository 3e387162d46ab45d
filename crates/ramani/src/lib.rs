#![forbid(unsafe_code)]

//! `ramani` is a headless region-map overlay engine for tourism-circuit maps.
//!
//! The core crate classifies region identifiers from an externally supplied SVG map into a
//! closed set of tourism circuits; the `overlay` feature adds the interactive surface
//! (shape bindings, hover/selection/visibility state, augmented SVG output) that UI hosts
//! embed.
//!
//! # Features
//!
//! - `overlay`: enable document parsing + the interactive [`overlay::MapOverlay`] component

pub use ramani_core::*;

#[cfg(feature = "overlay")]
pub mod overlay {
    pub use ramani_overlay::{
        DocumentSource, Error, FileDocumentSource, InteractionState, LegendEntry, MapOverlay,
        OverlayStatus, RegionShapeBinding, Result, SelectionListener, StyleOptions,
        TextDocumentSource, Tooltip, VisualState, extract_svg_fragment,
    };

    use ramani_core::{CircuitId, CircuitPalette, RegionTable};

    /// Annotates a raw vector document in its baseline state (no hover, no selection, all
    /// circuits visible). Returns `None` when the parsed document has no renderable root.
    ///
    /// Synchronous variant; all work is CPU-bound.
    pub fn annotate_svg_sync(text: &str, options: &StyleOptions) -> Result<Option<String>> {
        let mut component = MapOverlay::new().with_style_options(options.clone());
        component.attach_document(text)?;
        Ok(component.render_svg())
    }

    pub async fn annotate_svg(text: &str, options: &StyleOptions) -> Result<Option<String>> {
        annotate_svg_sync(text, options)
    }

    /// Convenience wrapper that bundles the classification tables, palette and style options
    /// for hosts that mount several overlays.
    ///
    /// This is intended for UI integrations where threading three configuration values
    /// through every mount site is noisy. It stays runtime-agnostic: all work is CPU-bound
    /// and does not perform I/O.
    #[derive(Clone)]
    pub struct HeadlessMap {
        pub table: RegionTable,
        pub palette: CircuitPalette,
        pub style: StyleOptions,
    }

    impl Default for HeadlessMap {
        fn default() -> Self {
            Self {
                table: RegionTable::tanzania(),
                palette: CircuitPalette::default(),
                style: StyleOptions::default(),
            }
        }
    }

    impl HeadlessMap {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_table(mut self, table: RegionTable) -> Self {
            self.table = table;
            self
        }

        pub fn with_palette(mut self, palette: CircuitPalette) -> Self {
            self.palette = palette;
            self
        }

        /// A fresh, unmounted-state component wired with this bundle's configuration.
        pub fn component(&self) -> MapOverlay {
            MapOverlay::new()
                .with_table(self.table.clone())
                .with_palette(self.palette.clone())
                .with_style_options(self.style.clone())
        }

        /// One-shot annotation of `text` with this bundle's configuration.
        pub fn annotate_sync(&self, text: &str) -> Result<Option<String>> {
            let mut component = self.component();
            component.attach_document(text)?;
            Ok(component.render_svg())
        }

        /// The legend a host would render next to a freshly mounted overlay, one entry per
        /// palette circuit.
        pub fn legend(&self) -> Vec<LegendEntry> {
            self.component().legend()
        }

        pub fn circuits(&self) -> Vec<CircuitId> {
            self.palette.circuits().collect()
        }
    }
}

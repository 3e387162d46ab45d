#![forbid(unsafe_code)]

//! Interactive region-map overlay (headless).
//!
//! Takes an externally supplied SVG map, classifies its shapes into tourism circuits
//! (via [`ramani_core`]), and maintains hover/selection/visibility state plus an augmented
//! SVG rendition of the document. No UI framework is assumed: a host feeds pointer, legend
//! and reset events into [`MapOverlay`] and re-renders the string it emits.
//!
//! Failure philosophy: the vector document is untrusted third-party data. Fetch or parse
//! failures degrade to [`OverlayStatus::Unavailable`]; unknown identifiers classify as
//! `Other`. Nothing here is allowed to take the host page down.

pub mod binding;
pub mod component;
pub mod document;
pub mod legend;
mod shapes;
pub mod state;
pub mod style;
pub mod tooltip;

pub use binding::RegionShapeBinding;
pub use component::{
    DocumentSource, FileDocumentSource, MapOverlay, OverlayStatus, SelectionListener,
    TextDocumentSource,
};
pub use document::{ShapeHandle, SvgDom, extract_svg_fragment};
pub use legend::LegendEntry;
pub use state::InteractionState;
pub use style::{StyleOptions, VisualState};
pub use tooltip::Tooltip;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load vector document: {message}")]
    DocumentLoad { message: String },

    #[error("malformed vector document: {message}")]
    MalformedDocument { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;

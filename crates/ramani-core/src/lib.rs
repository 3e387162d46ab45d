#![forbid(unsafe_code)]

//! Tourism-circuit taxonomy and region classification (headless).
//!
//! Design goals:
//! - every region code resolves to exactly one [`CircuitId`] (`Other` on miss, never an error)
//! - normalization is pure, deterministic and idempotent
//! - lookup tables are immutable values passed in explicitly; render-time discoveries live in a
//!   derived tier scoped to the [`Classifier`] instance, not in process-wide state

pub mod circuit;
pub mod classify;
pub mod normalize;
pub mod palette;
pub mod table;

pub use circuit::{CircuitId, UnknownCircuitError};
pub use classify::Classifier;
pub use normalize::{display_region_name, normalize_region_code};
pub use palette::CircuitPalette;
pub use table::RegionTable;

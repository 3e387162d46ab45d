use crate::CircuitId;
use crate::normalize::normalize_region_code;
use crate::table::RegionTable;
use rustc_hash::FxHashMap;

/// Two-tier region classifier.
///
/// Resolution order: the immutable primary [`RegionTable`], then a derived tier populated by
/// [`Classifier::learn`] from auxiliary shape attributes encountered while walking a document.
/// The derived tier is scoped to this instance; two overlays never observe each other's
/// discoveries.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: RegionTable,
    derived: FxHashMap<String, CircuitId>,
}

impl Classifier {
    pub fn new(table: RegionTable) -> Self {
        Self {
            table,
            derived: FxHashMap::default(),
        }
    }

    pub fn table(&self) -> &RegionTable {
        &self.table
    }

    /// Classifies a raw region code. Empty or unknown codes are `Other`, never an error: the
    /// vector document's identifiers are third-party data and vary between dataset revisions.
    pub fn classify(&self, code: &str) -> CircuitId {
        let key = normalize_region_code(code);
        if key.is_empty() {
            return CircuitId::Other;
        }
        self.table
            .get(&key)
            .or_else(|| self.derived.get(&key).copied())
            .unwrap_or(CircuitId::Other)
    }

    /// Upserts a derived entry for `code` when one of the auxiliary `name`/`class` attributes
    /// resolves through the primary table.
    ///
    /// Idempotent, and never downgrades: codes the primary table already maps to a non-`Other`
    /// circuit are left alone, and an auxiliary attribute that resolves to nothing records
    /// nothing.
    pub fn learn(&mut self, code: &str, name_attr: Option<&str>, class_attr: Option<&str>) {
        let key = normalize_region_code(code);
        if key.is_empty() {
            return;
        }
        if matches!(self.table.get(&key), Some(c) if c != CircuitId::Other) {
            return;
        }

        let resolved = [name_attr, class_attr].into_iter().flatten().find_map(|aux| {
            let aux_key = normalize_region_code(aux);
            self.table.get(&aux_key).filter(|&c| c != CircuitId::Other)
        });

        if let Some(circuit) = resolved {
            self.derived.insert(key, circuit);
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(RegionTable::tanzania())
    }
}

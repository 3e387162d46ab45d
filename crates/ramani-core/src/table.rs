use crate::CircuitId;
use crate::normalize::normalize_region_code;
use rustc_hash::FxHashMap;

/// Dataset region codes as found in the bundled Tanzania map. `TZ11` is labeled
/// "Eastern Circuit" upstream, which is outside the circuit taxonomy and therefore `Other`.
const REGION_CODE_CIRCUITS: &[(&str, CircuitId)] = &[
    ("TZ01", CircuitId::NorthernCircuit),
    ("TZ02", CircuitId::CoastalAndIslands),
    ("TZ03", CircuitId::LakeZone),
    ("TZ04", CircuitId::LakeZone),
    ("TZ05", CircuitId::WesternCircuit),
    ("TZ06", CircuitId::SouthernCircuit),
    ("TZ07", CircuitId::SouthernCircuit),
    ("TZ08", CircuitId::SouthernCircuit),
    ("TZ09", CircuitId::CoastalAndIslands),
    ("TZ10", CircuitId::CoastalAndIslands),
    ("TZ11", CircuitId::Other),
    ("TZ12", CircuitId::CoastalAndIslands),
    ("TZ13", CircuitId::CoastalAndIslands),
    ("TZ14", CircuitId::WesternCircuit),
    ("TZ15", CircuitId::LakeZone),
    ("TZ16", CircuitId::SouthernCircuit),
    ("TZ17", CircuitId::CoastalAndIslands),
    ("TZ25", CircuitId::CoastalAndIslands),
];

/// Tourism grouping for the 31 official Tanzanian regions, plus the dataset aliases
/// `Kagera_Lake` and `Morogoro_South`.
const TOURISM_REGION_CIRCUITS: &[(&str, CircuitId)] = &[
    ("Arusha", CircuitId::NorthernCircuit),
    ("Kilimanjaro", CircuitId::NorthernCircuit),
    ("Manyara", CircuitId::NorthernCircuit),
    ("Tanga", CircuitId::NorthernCircuit),
    ("Mara", CircuitId::NorthernCircuit),
    ("Dar-es-salaam", CircuitId::CoastalAndIslands),
    ("Morogoro", CircuitId::CoastalAndIslands),
    ("Pwani", CircuitId::CoastalAndIslands),
    ("Zanzibar", CircuitId::CoastalAndIslands),
    ("Kaskazini Pemba", CircuitId::CoastalAndIslands),
    ("Kaskazini Unguja", CircuitId::CoastalAndIslands),
    ("Kusini Pemba", CircuitId::CoastalAndIslands),
    ("Kusini Unguja", CircuitId::CoastalAndIslands),
    ("Mjini Magharibi", CircuitId::CoastalAndIslands),
    ("Mwanza", CircuitId::LakeZone),
    ("Geita", CircuitId::LakeZone),
    ("Kagera_Lake", CircuitId::LakeZone),
    ("Simiyu", CircuitId::LakeZone),
    ("Shinyanga", CircuitId::LakeZone),
    ("Morogoro_South", CircuitId::SouthernCircuit),
    ("Iringa", CircuitId::SouthernCircuit),
    ("Njombe", CircuitId::SouthernCircuit),
    ("Ruvuma", CircuitId::SouthernCircuit),
    ("Mtwara", CircuitId::SouthernCircuit),
    ("Lindi", CircuitId::SouthernCircuit),
    ("Mbeya", CircuitId::SouthernHighlands),
    ("Songwe", CircuitId::SouthernHighlands),
    ("Rukwa", CircuitId::SouthernHighlands),
    ("Tabora", CircuitId::WesternCircuit),
    ("Kigoma", CircuitId::WesternCircuit),
    ("Katavi", CircuitId::WesternCircuit),
    ("Kagera", CircuitId::WesternCircuit),
    ("Dodoma", CircuitId::CentralCircuit),
    ("Singida", CircuitId::CentralCircuit),
];

/// Immutable region-code -> circuit lookup table.
///
/// Keys are normalized once at construction; lookups expect already-normalized keys (see
/// [`crate::Classifier`]). The table is a plain value: construct it once and pass it to whoever
/// classifies.
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    entries: FxHashMap<String, CircuitId>,
}

impl RegionTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The bundled Tanzania dataset: map region codes plus tourism region names.
    pub fn tanzania() -> Self {
        let mut table = Self::empty();
        for &(code, circuit) in REGION_CODE_CIRCUITS {
            table.insert(code, circuit);
        }
        for &(name, circuit) in TOURISM_REGION_CIRCUITS {
            table.insert(name, circuit);
        }
        table
    }

    /// Inserts an entry, normalizing the key. Later inserts win.
    pub fn insert(&mut self, code: &str, circuit: CircuitId) {
        let key = normalize_region_code(code);
        if !key.is_empty() {
            self.entries.insert(key, circuit);
        }
    }

    pub fn with_entry(mut self, code: &str, circuit: CircuitId) -> Self {
        self.insert(code, circuit);
        self
    }

    /// Looks up an already-normalized key.
    pub fn get(&self, normalized: &str) -> Option<CircuitId> {
        self.entries.get(normalized).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tanzania_table_covers_codes_and_names() {
        let table = RegionTable::tanzania();
        assert_eq!(table.get("TZ01"), Some(CircuitId::NorthernCircuit));
        assert_eq!(table.get("Arusha"), Some(CircuitId::NorthernCircuit));
        assert_eq!(table.get("Mwanza"), Some(CircuitId::LakeZone));
        assert_eq!(table.get("Dodoma"), Some(CircuitId::CentralCircuit));
        // Hyphenated dataset names are stored under their normalized key.
        assert_eq!(table.get("Dar_es_salaam"), Some(CircuitId::CoastalAndIslands));
        assert_eq!(table.get("Dar-es-salaam"), None);
    }

    #[test]
    fn tz11_is_outside_the_taxonomy() {
        let table = RegionTable::tanzania();
        assert_eq!(table.get("TZ11"), Some(CircuitId::Other));
    }

    #[test]
    fn later_inserts_win() {
        let table = RegionTable::empty()
            .with_entry("Foo", CircuitId::Other)
            .with_entry("Foo", CircuitId::LakeZone);
        assert_eq!(table.get("Foo"), Some(CircuitId::LakeZone));
    }
}

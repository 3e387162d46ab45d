use serde::{Deserialize, Serialize};

/// A named grouping of geographic regions used for tourism marketing and filtering.
///
/// The set is closed: identifiers that do not resolve to one of the named circuits are
/// classified as [`CircuitId::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CircuitId {
    #[serde(rename = "Northern Circuit")]
    NorthernCircuit,
    #[serde(rename = "Southern Circuit")]
    SouthernCircuit,
    #[serde(rename = "Western Circuit")]
    WesternCircuit,
    #[serde(rename = "Coastal & Islands")]
    CoastalAndIslands,
    #[serde(rename = "Southern Highlands")]
    SouthernHighlands,
    #[serde(rename = "Lake Zone")]
    LakeZone,
    #[serde(rename = "Central Circuit")]
    CentralCircuit,
    #[serde(rename = "Other")]
    Other,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown circuit label: {label}")]
pub struct UnknownCircuitError {
    pub label: String,
}

impl CircuitId {
    pub const ALL: [CircuitId; 8] = [
        CircuitId::NorthernCircuit,
        CircuitId::SouthernCircuit,
        CircuitId::WesternCircuit,
        CircuitId::CoastalAndIslands,
        CircuitId::SouthernHighlands,
        CircuitId::LakeZone,
        CircuitId::CentralCircuit,
        CircuitId::Other,
    ];

    /// Display label, as shown in legends and tooltips.
    pub fn label(self) -> &'static str {
        match self {
            CircuitId::NorthernCircuit => "Northern Circuit",
            CircuitId::SouthernCircuit => "Southern Circuit",
            CircuitId::WesternCircuit => "Western Circuit",
            CircuitId::CoastalAndIslands => "Coastal & Islands",
            CircuitId::SouthernHighlands => "Southern Highlands",
            CircuitId::LakeZone => "Lake Zone",
            CircuitId::CentralCircuit => "Central Circuit",
            CircuitId::Other => "Other",
        }
    }

    /// Resolves a display label back to a circuit. Tolerant of surrounding whitespace.
    pub fn from_label(label: &str) -> Result<Self, UnknownCircuitError> {
        let trimmed = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == trimmed)
            .ok_or_else(|| UnknownCircuitError {
                label: label.to_string(),
            })
    }
}

impl std::fmt::Display for CircuitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for CircuitId {
    type Err = UnknownCircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_label() {
        for circuit in CircuitId::ALL {
            assert_eq!(CircuitId::from_label(circuit.label()).unwrap(), circuit);
        }
    }

    #[test]
    fn from_label_rejects_unknown_labels() {
        let err = CircuitId::from_label("Eastern Circuit").unwrap_err();
        assert_eq!(err.label, "Eastern Circuit");
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&CircuitId::CoastalAndIslands).unwrap();
        assert_eq!(json, "\"Coastal & Islands\"");
        let back: CircuitId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CircuitId::CoastalAndIslands);
    }
}

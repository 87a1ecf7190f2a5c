//! Plain result row handed to the external sink.

/// Aggregated outcome of one scenario.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultRow {
    pub model_kind:       String,
    /// Seed after every repetition's advance.
    pub final_seed:       i64,
    pub agent_count:      u32,
    pub comm_radius:      f64,
    pub log_path:         Option<String>,
    /// Mean coverage over all repetitions, already rounded to 2 decimals.
    pub average_coverage: f64,
}

impl ResultRow {
    /// Field names in [`to_record`][Self::to_record] order.
    pub const HEADERS: [&'static str; 6] = [
        "model_kind",
        "final_seed",
        "agent_count",
        "comm_radius",
        "log_path",
        "average_coverage",
    ];

    /// Coverage as a fixed two-decimal string.
    pub fn coverage_field(&self) -> String {
        format!("{:.2}", self.average_coverage)
    }

    /// All six fields rendered as strings; a missing log path is empty.
    pub fn to_record(&self) -> [String; 6] {
        [
            self.model_kind.clone(),
            self.final_seed.to_string(),
            self.agent_count.to_string(),
            self.comm_radius.to_string(),
            self.log_path.clone().unwrap_or_default(),
            self.coverage_field(),
        ]
    }
}

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinical urgency of an interaction.
///
/// Variants are declared in ascending urgency so the derived `Ord` ranks
/// `Critical` highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Severity {
    /// Minimal clinical significance, monitoring optional.
    Minor,
    /// May require dosage adjustment or monitoring.
    Moderate,
    /// Combination generally should be avoided.
    Major,
    /// Immediate medical attention may be required.
    Critical,
}

/// How often a side effect occurs, ascending so `VeryCommon` is highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Frequency {
    /// <0.01% of patients.
    VeryRare,
    /// 0.01–0.1%.
    Rare,
    /// 0.1–1%.
    Uncommon,
    /// 1–10%.
    Common,
    /// >10%.
    VeryCommon,
}

/// When a side effect tends to appear. No order semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Timeline {
    /// Hours.
    Immediate,
    /// Days to weeks.
    ShortTerm,
    /// Months to years.
    LongTerm,
}

/// Strength of the evidence behind an interaction record, ascending.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum EvidenceLevel {
    /// Case reports only.
    VeryLow,
    /// Limited studies.
    Low,
    /// Some RCTs or many observational studies.
    Moderate,
    /// Multiple RCTs.
    High,
}

//! Steering-function identities and bundled collaborators
//!
//! The identity enum is the closed dispatch key of the benchmark: every
//! implementation under comparison is registered under exactly one variant,
//! and the variant order is the report order.

use std::fmt;
use std::str::FromStr;

use crate::common::BenchError;

pub mod dubins;
pub mod line;

pub use dubins::DubinsSteering;
pub use line::LineSteering;

/// Identity of one steering-function implementation under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SteeringId {
    /// Curvature-continuous Dubins
    CcDubins,
    /// Plain Dubins
    Dubins,
    /// Curvature-continuous Reeds-Shepp
    CcReedsShepp,
    /// Hybrid-curvature Reeds-Shepp, straight start and end
    Hc00,
    /// Hybrid-curvature Reeds-Shepp, straight start
    Hc0pm,
    /// Hybrid-curvature Reeds-Shepp, straight end
    Hcpm0,
    /// Hybrid-curvature Reeds-Shepp, curved start and end
    Hcpmpm,
    /// Plain Reeds-Shepp
    ReedsShepp,
}

impl SteeringId {
    /// All identities, in report order
    pub const ALL: [Self; 8] = [
        Self::CcDubins,
        Self::Dubins,
        Self::CcReedsShepp,
        Self::Hc00,
        Self::Hc0pm,
        Self::Hcpm0,
        Self::Hcpmpm,
        Self::ReedsShepp,
    ];

    /// Stable label used in reports and record file names
    pub fn label(&self) -> &'static str {
        match self {
            Self::CcDubins => "CC_Dubins",
            Self::Dubins => "Dubins",
            Self::CcReedsShepp => "CC_RS",
            Self::Hc00 => "HC00",
            Self::Hc0pm => "HC0pm",
            Self::Hcpm0 => "HCpm0",
            Self::Hcpmpm => "HCpmpm",
            Self::ReedsShepp => "RS",
        }
    }
}

impl fmt::Display for SteeringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SteeringId {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.label() == s)
            .ok_or_else(|| BenchError::UnknownImplementation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for id in SteeringId::ALL.iter() {
            assert_eq!(id.label().parse::<SteeringId>().unwrap(), *id);
        }
    }

    #[test]
    fn test_unknown_label() {
        let err = "HC11".parse::<SteeringId>().unwrap_err();
        assert!(matches!(err, BenchError::UnknownImplementation(_)));
    }

    #[test]
    fn test_report_order() {
        assert_eq!(SteeringId::ALL.len(), 8);
        assert_eq!(SteeringId::ALL[0].label(), "CC_Dubins");
        assert_eq!(SteeringId::ALL[7].label(), "RS");
        // BTreeMap iteration relies on declaration order matching Ord
        let mut sorted = SteeringId::ALL;
        sorted.sort();
        assert_eq!(sorted, SteeringId::ALL);
    }
}

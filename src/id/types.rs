//! Canonical transform identifier vocabulary.
//!
//! Example id: urn:ampas:aces:transformId:v1.5:ODT.Academy.P3D65_48nits.a1.0.3
//! The URN part is fixed; everything after the last `:` is a `.`-separated
//! component list whose first component is the transform type.

use serde::Serialize;
use std::fmt;

/// Fixed URN every valid transform identifier carries.
pub const ACES_URN: &str = "urn:ampas:aces:transformId:v1.5";

/// Separator between the URN and the component list.
pub const URN_SEPARATOR: &str = ":";

/// Separator between id components.
pub const ID_SEPARATOR: &str = ".";

/// Interchange colour space every input transform lands in.
pub const ACES_2065_1: &str = "ACES2065-1";

/// Output colour encoding space between the RRT and the ODTs.
pub const OCES: &str = "OCES";

/// Transform kinds appearing as the first id component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TransformType {
    #[serde(rename = "IDT")]
    Idt,
    #[serde(rename = "LMT")]
    Lmt,
    #[serde(rename = "ODT")]
    Odt,
    #[serde(rename = "RRT")]
    Rrt,
    #[serde(rename = "RRTODT")]
    RrtOdt,
    #[serde(rename = "InvRRT")]
    InvRrt,
    #[serde(rename = "InvODT")]
    InvOdt,
    #[serde(rename = "InvRRTODT")]
    InvRrtOdt,
    #[serde(rename = "ACESlib")]
    AcesLib,
    #[serde(rename = "ACEScsc")]
    AcesCsc,
    #[serde(rename = "ACESutil")]
    AcesUtil,
}

impl TransformType {
    /// Every known transform type.
    pub const ALL: [TransformType; 11] = [
        TransformType::Idt,
        TransformType::Lmt,
        TransformType::Odt,
        TransformType::Rrt,
        TransformType::RrtOdt,
        TransformType::InvRrt,
        TransformType::InvOdt,
        TransformType::InvRrtOdt,
        TransformType::AcesLib,
        TransformType::AcesCsc,
        TransformType::AcesUtil,
    ];

    /// Canonical spelling used inside identifier strings.
    pub fn as_str(self) -> &'static str {
        match self {
            TransformType::Idt => "IDT",
            TransformType::Lmt => "LMT",
            TransformType::Odt => "ODT",
            TransformType::Rrt => "RRT",
            TransformType::RrtOdt => "RRTODT",
            TransformType::InvRrt => "InvRRT",
            TransformType::InvOdt => "InvODT",
            TransformType::InvRrtOdt => "InvRRTODT",
            TransformType::AcesLib => "ACESlib",
            TransformType::AcesCsc => "ACEScsc",
            TransformType::AcesUtil => "ACESutil",
        }
    }

    /// Parse the canonical spelling; `None` for anything else.
    pub fn from_canonical(s: &str) -> Option<TransformType> {
        TransformType::ALL.iter().copied().find(|ty| ty.as_str() == s)
    }
}

impl fmt::Display for TransformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canonical_spelling_round_trips() {
        for ty in TransformType::ALL {
            assert_eq!(TransformType::from_canonical(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn unknown_spelling_is_rejected() {
        assert_eq!(TransformType::from_canonical("idt"), None);
        assert_eq!(TransformType::from_canonical("CSC"), None);
        assert_eq!(TransformType::from_canonical(""), None);
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of supported procedures.
///
/// Declaration order is the catalog order used for selection lists.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProcedureId {
    IvCannulation,
    Venepuncture,
    UrinaryCatheter,
    NgTube,
    LumbarPuncture,
}

impl ProcedureId {
    pub const ALL: [ProcedureId; 5] = [
        ProcedureId::IvCannulation,
        ProcedureId::Venepuncture,
        ProcedureId::UrinaryCatheter,
        ProcedureId::NgTube,
        ProcedureId::LumbarPuncture,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ProcedureId::IvCannulation => "iv_cannulation",
            ProcedureId::Venepuncture => "venepuncture",
            ProcedureId::UrinaryCatheter => "urinary_catheter",
            ProcedureId::NgTube => "ng_tube",
            ProcedureId::LumbarPuncture => "lumbar_puncture",
        }
    }

    /// Position in [`ProcedureId::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ProcedureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A procedure identifier that is not part of the closed set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown procedure: {0} (expected one of iv_cannulation, venepuncture, urinary_catheter, ng_tube, lumbar_puncture)")]
pub struct UnknownProcedure(pub String);

impl FromStr for ProcedureId {
    type Err = UnknownProcedure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ProcedureId::ALL
            .into_iter()
            .find(|id| id.as_str() == trimmed)
            .ok_or_else(|| UnknownProcedure(trimmed.to_string()))
    }
}

/// A bibliographic pointer shown alongside a procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub title: &'static str,
    pub url: &'static str,
}

/// Static reference content for one procedure.
///
/// All fields are authored text; nothing here is parsed further.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProcedureInfo {
    pub id: ProcedureId,
    pub name: &'static str,
    pub summary: &'static str,
    pub contraindications: &'static [&'static str],
    pub considerations: &'static [&'static str],
    pub equipment: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red_flags: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<&'static [Reference]>,
}

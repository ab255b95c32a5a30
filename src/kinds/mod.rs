//! Concrete `FactorKind` implementations shipped with this crate (§6.1,
//! §9 "Preprocessor-selected factor kind").
//!
//! `FactorKindId` is the runtime enum that replaces the inherited
//! implementation's compile-time factor-kind switch; `kinds::classical`,
//! `kinds::band`, and `kinds::lattice_zn` are the three exercised here.

pub mod band;
pub mod classical;
pub mod lattice_zn;

/// Selects which factor kind a REPL session runs against. The actual
/// dispatch happens once at startup, by calling the generic REPL driver
/// instantiated against the chosen concrete `FactorKind` — there is no
/// trait object here, only a startup-time match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorKindId {
    Classical,
    Band,
    LatticeZn,
}

impl FactorKindId {
    pub fn name(&self) -> &'static str {
        match self {
            FactorKindId::Classical => "classical",
            FactorKindId::Band => "band",
            FactorKindId::LatticeZn => "lattice-zn",
        }
    }
}

impl std::str::FromStr for FactorKindId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classical" => Ok(FactorKindId::Classical),
            "band" => Ok(FactorKindId::Band),
            "lattice-zn" => Ok(FactorKindId::LatticeZn),
            other => Err(format!(
                "unknown factor kind `{}` (expected classical, band, or lattice-zn)",
                other
            )),
        }
    }
}

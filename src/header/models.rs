//! Tropospheric modeling methods, as declared in the header
use num_traits::FromPrimitive;

use crate::prelude::ParsingError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A priori troposphere model used to compute `MOD_U`.
/// Negative codes are the "dry + wet" models,
/// codes below -10 only model the dry part.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i8)]
pub enum AprioriModel {
    #[default]
    Unknown = 0,
    Saastamoinen = -1,
    /// Hopfield (Remondi)
    Hopfield = -2,
    EssenFroome = -3,
    /// Marini-Murray, for SLR
    MariniMurray = -4,
    SaastamoinenNiellDry = -5,
    GptGmf = -6,
    EcmwfVmf1 = -7,
    /// Mendes-Pavlis, for SLR
    MendesPavlis = -8,
    SaastamoinenDry = -11,
    HopfieldDry = -12,
    SimplifiedHopfieldDry = -13,
    SaastamoinenDryNiellDry = -15,
    GptDryGmfDry = -16,
    EcmwfDryVmf1Dry = -17,
}

impl AprioriModel {
    /// Returns the numeric code used in TRP files
    pub fn code(&self) -> i8 {
        *self as i8
    }
    /// True when this model only describes the hydrostatic (dry) part
    pub fn is_dry_only(&self) -> bool {
        self.code() < -10
    }
}

impl std::str::FromStr for AprioriModel {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i8>()
            .ok()
            .and_then(Self::from_i8)
            .ok_or(ParsingError::AprioriModel(s.to_string()))
    }
}

impl std::fmt::Display for AprioriModel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Unknown => f.write_str("Unknown"),
            Self::Saastamoinen => f.write_str("Saastamoinen"),
            Self::Hopfield => f.write_str("Hopfield (Remondi)"),
            Self::EssenFroome => f.write_str("Essen and Froome"),
            Self::MariniMurray => f.write_str("Marini-Murray (SLR)"),
            Self::SaastamoinenNiellDry => f.write_str("Saastamoinen with Niell dry mapping"),
            Self::GptGmf => f.write_str("GPT with GMF dry+wet mapping"),
            Self::EcmwfVmf1 => f.write_str("ECMWF with VMF1 dry+wet mapping"),
            Self::MendesPavlis => f.write_str("Mendes-Pavlis (SLR)"),
            Self::SaastamoinenDry => f.write_str("Saastamoinen dry part only"),
            Self::HopfieldDry => f.write_str("Hopfield dry part only"),
            Self::SimplifiedHopfieldDry => f.write_str("Simplified Hopfield dry part only"),
            Self::SaastamoinenDryNiellDry => {
                f.write_str("Saastamoinen dry with Niell dry mapping")
            },
            Self::GptDryGmfDry => f.write_str("GPT dry with GMF dry mapping"),
            Self::EcmwfDryVmf1Dry => f.write_str("ECMWF dry with VMF1 dry mapping"),
        }
    }
}

/// Mapping function used in the estimation process
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum MappingFunction {
    #[default]
    Unknown = 0,
    /// 1/cos(z)
    Cosz = 1,
    Hopfield = 2,
    DryNiell = 3,
    WetNiell = 4,
    DryGmf = 5,
    WetGmf = 6,
    DryVmf1 = 7,
    WetVmf1 = 8,
}

impl MappingFunction {
    /// Returns the numeric code used in TRP files
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl std::str::FromStr for MappingFunction {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_u8)
            .ok_or(ParsingError::MappingFunction(s.to_string()))
    }
}

impl std::fmt::Display for MappingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Unknown => f.write_str("Unknown"),
            Self::Cosz => f.write_str("1/Cos(z)"),
            Self::Hopfield => f.write_str("Hopfield"),
            Self::DryNiell => f.write_str("Dry Niell"),
            Self::WetNiell => f.write_str("Wet Niell"),
            Self::DryGmf => f.write_str("Dry GMF"),
            Self::WetGmf => f.write_str("Wet GMF"),
            Self::DryVmf1 => f.write_str("Dry VMF1"),
            Self::WetVmf1 => f.write_str("Wet VMF1"),
        }
    }
}

/// Troposphere gradient estimation model.
/// Unlike other models, there is no "unknown" value.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum GradientModel {
    #[default]
    NoEstimation = 0,
    Tilting = 1,
    Linear = 2,
    /// TANZ from MacMillan (1995)
    Tanz = 3,
    /// Chen and Herring (1997)
    ChenHerring = 4,
}

impl GradientModel {
    /// Returns the numeric code used in TRP files
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl std::str::FromStr for GradientModel {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_u8)
            .ok_or(ParsingError::GradientModel(s.to_string()))
    }
}

impl std::fmt::Display for GradientModel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NoEstimation => f.write_str("No estimation"),
            Self::Tilting => f.write_str("Tilting"),
            Self::Linear => f.write_str("Linear"),
            Self::Tanz => f.write_str("TANZ from MacMillan (1995)"),
            Self::ChenHerring => f.write_str("CHENHER from Chen and Herring (1997)"),
        }
    }
}

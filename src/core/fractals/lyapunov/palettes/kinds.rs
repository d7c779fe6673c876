use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::data::colour::Rgb;
use crate::core::fractals::lyapunov::palettes::functions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    Rainbow,
    Hot,
    #[default]
    Turbo,
    Viridis,
    Inferno,
    CoolWarm,
    Pastel,
}

impl PaletteKind {
    /// Ordered by id.
    pub const ALL: &'static [Self] = &[
        Self::Rainbow,
        Self::Hot,
        Self::Turbo,
        Self::Viridis,
        Self::Inferno,
        Self::CoolWarm,
        Self::Pastel,
    ];

    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Self::Rainbow => 0,
            Self::Hot => 1,
            Self::Turbo => 2,
            Self::Viridis => 3,
            Self::Inferno => 4,
            Self::CoolWarm => 5,
            Self::Pastel => 6,
        }
    }

    #[must_use]
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rainbow => "Rainbow",
            Self::Hot => "Hot",
            Self::Turbo => "Turbo",
            Self::Viridis => "Viridis",
            Self::Inferno => "Inferno",
            Self::CoolWarm => "CoolWarm",
            Self::Pastel => "Pastel",
        }
    }

    /// Maps a normalised value to a colour. `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn colour(self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Rainbow => functions::rainbow(t),
            Self::Hot => functions::hot(t),
            Self::Turbo => functions::turbo(t),
            Self::Viridis => functions::viridis(t),
            Self::Inferno => functions::inferno(t),
            Self::CoolWarm => functions::cool_warm(t),
            Self::Pastel => functions::pastel(t),
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPaletteError(pub String);

impl fmt::Display for UnknownPaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = PaletteKind::ALL
            .iter()
            .map(|kind| kind.display_name().to_lowercase())
            .collect();

        write!(
            f,
            "unknown palette '{}', expected an id 0-6 or one of: {}",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownPaletteError {}

impl FromStr for PaletteKind {
    type Err = UnknownPaletteError;

    /// Accepts a case-insensitive name or a numeric id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(id) = trimmed.parse::<u32>() {
            return Self::from_id(id).ok_or_else(|| UnknownPaletteError(s.to_string()));
        }

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownPaletteError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_position_in_all() {
        for (position, &kind) in PaletteKind::ALL.iter().enumerate() {
            assert_eq!(kind.id() as usize, position);
            assert_eq!(PaletteKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(PaletteKind::from_id(7), None);
    }

    #[test]
    fn default_is_turbo() {
        assert_eq!(PaletteKind::default(), PaletteKind::Turbo);
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = PaletteKind::ALL.iter().map(|k| k.display_name()).collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }

    #[test]
    fn parses_names_and_ids() {
        assert_eq!("viridis".parse::<PaletteKind>(), Ok(PaletteKind::Viridis));
        assert_eq!("CoolWarm".parse::<PaletteKind>(), Ok(PaletteKind::CoolWarm));
        assert_eq!("4".parse::<PaletteKind>(), Ok(PaletteKind::Inferno));
        assert!("9".parse::<PaletteKind>().is_err());
        assert!("plasma".parse::<PaletteKind>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&PaletteKind::CoolWarm).unwrap();
        let parsed: PaletteKind = serde_json::from_str("\"pastel\"").unwrap();

        assert_eq!(json, "\"coolwarm\"");
        assert_eq!(parsed, PaletteKind::Pastel);
    }

    #[test]
    fn colour_clamps_input() {
        for &kind in PaletteKind::ALL {
            assert_eq!(kind.colour(-3.0), kind.colour(0.0));
            assert_eq!(kind.colour(5.0), kind.colour(1.0));
        }
    }
}

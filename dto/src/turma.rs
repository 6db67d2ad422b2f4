use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Class codes offered by the school, in display order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Turma {
    #[serde(rename = "Turma 1A")]
    T1A,
    #[serde(rename = "Turma 1B")]
    T1B,
    #[serde(rename = "Turma 1C")]
    T1C,
    #[serde(rename = "Turma 2A")]
    T2A,
    #[serde(rename = "Turma 2B")]
    T2B,
    #[serde(rename = "Turma 2C")]
    T2C,
    #[serde(rename = "Turma 2D")]
    T2D,
    #[serde(rename = "Turma 3A")]
    T3A,
    #[serde(rename = "Turma 3B")]
    T3B,
    #[serde(rename = "Turma 3C")]
    T3C,
    #[serde(rename = "Turma 4A")]
    T4A,
    #[serde(rename = "Turma 4B")]
    T4B,
    #[serde(rename = "Turma 4C")]
    T4C,
    #[serde(rename = "Turma 5A")]
    T5A,
    #[serde(rename = "Turma 5B")]
    T5B,
    #[serde(rename = "Turma 5C")]
    T5C,
    #[serde(rename = "Turma 6A")]
    T6A,
    #[serde(rename = "Turma 6B")]
    T6B,
    #[serde(rename = "Turma 6C")]
    T6C,
    #[serde(rename = "Turma 7A")]
    T7A,
    #[serde(rename = "Turma 7B")]
    T7B,
    #[serde(rename = "Turma 7C")]
    T7C,
    #[serde(rename = "Turma 8A")]
    T8A,
    #[serde(rename = "Turma 8B")]
    T8B,
    #[serde(rename = "Turma 8C")]
    T8C,
    #[serde(rename = "Turma 9A")]
    T9A,
    #[serde(rename = "Turma 9B")]
    T9B,
    #[serde(rename = "Turma 9C")]
    T9C,
}

impl Turma {
    pub const ALL: [Turma; 28] = [
        Turma::T1A,
        Turma::T1B,
        Turma::T1C,
        Turma::T2A,
        Turma::T2B,
        Turma::T2C,
        Turma::T2D,
        Turma::T3A,
        Turma::T3B,
        Turma::T3C,
        Turma::T4A,
        Turma::T4B,
        Turma::T4C,
        Turma::T5A,
        Turma::T5B,
        Turma::T5C,
        Turma::T6A,
        Turma::T6B,
        Turma::T6C,
        Turma::T7A,
        Turma::T7B,
        Turma::T7C,
        Turma::T8A,
        Turma::T8B,
        Turma::T8C,
        Turma::T9A,
        Turma::T9B,
        Turma::T9C,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Turma::T1A => "Turma 1A",
            Turma::T1B => "Turma 1B",
            Turma::T1C => "Turma 1C",
            Turma::T2A => "Turma 2A",
            Turma::T2B => "Turma 2B",
            Turma::T2C => "Turma 2C",
            Turma::T2D => "Turma 2D",
            Turma::T3A => "Turma 3A",
            Turma::T3B => "Turma 3B",
            Turma::T3C => "Turma 3C",
            Turma::T4A => "Turma 4A",
            Turma::T4B => "Turma 4B",
            Turma::T4C => "Turma 4C",
            Turma::T5A => "Turma 5A",
            Turma::T5B => "Turma 5B",
            Turma::T5C => "Turma 5C",
            Turma::T6A => "Turma 6A",
            Turma::T6B => "Turma 6B",
            Turma::T6C => "Turma 6C",
            Turma::T7A => "Turma 7A",
            Turma::T7B => "Turma 7B",
            Turma::T7C => "Turma 7C",
            Turma::T8A => "Turma 8A",
            Turma::T8B => "Turma 8B",
            Turma::T8C => "Turma 8C",
            Turma::T9A => "Turma 9A",
            Turma::T9B => "Turma 9B",
            Turma::T9C => "Turma 9C",
        }
    }
}

impl AsRef<str> for Turma {
    fn as_ref(&self) -> &str {
        self.code()
    }
}

impl Display for Turma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown class code '{0}'")]
pub struct UnknownTurma(pub String);

impl FromStr for Turma {
    type Err = UnknownTurma;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Turma::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| UnknownTurma(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_class_code_parses_back() {
        assert_eq!(Turma::ALL.len(), 28);
        for turma in Turma::ALL {
            assert_eq!(turma.code().parse::<Turma>(), Ok(turma));
            assert_eq!(
                serde_json::to_string(&turma).unwrap(),
                format!("\"{}\"", turma.code())
            );
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!("Turma 2E".parse::<Turma>().is_err());
        assert!("".parse::<Turma>().is_err());
        assert_eq!(
            "Turma 2E".parse::<Turma>().unwrap_err().to_string(),
            "unknown class code 'Turma 2E'"
        );
    }
}

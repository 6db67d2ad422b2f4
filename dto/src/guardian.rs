use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Relationship of a guardian to the student. The wire codes are the ones
/// the backend already stores: brother travels as `Irmao` and sister as
/// `Irmão`, so [`Parentesco::code`] and [`Parentesco::label`] differ for
/// siblings.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parentesco {
    #[serde(rename = "Pai")]
    Pai,
    #[serde(rename = "Mãe")]
    Mae,
    #[serde(rename = "Avó/Avô")]
    AvoAvo,
    #[serde(rename = "Irmao")]
    Irmao,
    #[serde(rename = "Irmão")]
    Irma,
    #[serde(rename = "Tio/Tia")]
    TioTia,
    #[serde(rename = "Primo/Prima")]
    PrimoPrima,
    #[serde(rename = "Transporte Escolar")]
    TransporteEscolar,
    #[serde(rename = "Outro")]
    Outro,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown relationship '{0}'")]
pub struct UnknownParentesco(pub String);

impl Parentesco {
    pub const ALL: [Parentesco; 9] = [
        Parentesco::Pai,
        Parentesco::Mae,
        Parentesco::AvoAvo,
        Parentesco::Irmao,
        Parentesco::Irma,
        Parentesco::TioTia,
        Parentesco::PrimoPrima,
        Parentesco::TransporteEscolar,
        Parentesco::Outro,
    ];

    /// Value sent to and stored by the backend.
    pub fn code(&self) -> &'static str {
        match self {
            Parentesco::Pai => "Pai",
            Parentesco::Mae => "Mãe",
            Parentesco::AvoAvo => "Avó/Avô",
            Parentesco::Irmao => "Irmao",
            Parentesco::Irma => "Irmão",
            Parentesco::TioTia => "Tio/Tia",
            Parentesco::PrimoPrima => "Primo/Prima",
            Parentesco::TransporteEscolar => "Transporte Escolar",
            Parentesco::Outro => "Outro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Parentesco::Irmao => "Irmão",
            Parentesco::Irma => "Irmã",
            other => other.code(),
        }
    }
}

impl AsRef<str> for Parentesco {
    fn as_ref(&self) -> &str {
        self.code()
    }
}

impl Display for Parentesco {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses wire codes, not display labels.
impl FromStr for Parentesco {
    type Err = UnknownParentesco;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Parentesco::ALL
            .into_iter()
            .find(|p| p.code() == s)
            .ok_or_else(|| UnknownParentesco(s.to_string()))
    }
}

/// Guardian as sent to and received from the backend. `id` is only known
/// once the owning student has been saved.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GuardianDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub nome: String,
    #[serde(default, rename = "grauParentesco", with = "crate::blank")]
    pub grau_parentesco: Option<Parentesco>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_relationship_round_trips_as_empty_string() {
        let guardian = GuardianDto::default();
        let json = serde_json::to_value(&guardian).unwrap();
        assert_eq!(json, serde_json::json!({ "nome": "", "grauParentesco": "" }));

        let back: GuardianDto = serde_json::from_value(json).unwrap();
        assert_eq!(back.grau_parentesco, None);
    }

    #[test]
    fn siblings_keep_stored_wire_codes() {
        let brother = GuardianDto {
            id: None,
            nome: String::from("Carlos"),
            grau_parentesco: Some(Parentesco::Irmao),
        };
        let sister = GuardianDto {
            id: None,
            nome: String::from("Clara"),
            grau_parentesco: Some(Parentesco::Irma),
        };

        assert_eq!(serde_json::to_value(&brother).unwrap()["grauParentesco"], "Irmao");
        assert_eq!(serde_json::to_value(&sister).unwrap()["grauParentesco"], "Irmão");

        let stored: GuardianDto =
            serde_json::from_str(r#"{"id": 4, "nome": "Clara", "grauParentesco": "Irmão"}"#)
                .unwrap();
        assert_eq!(stored.id, Some(4));
        assert_eq!(stored.grau_parentesco, Some(Parentesco::Irma));
        assert_eq!(Parentesco::Irma.label(), "Irmã");
        assert_eq!(Parentesco::Irmao.label(), "Irmão");
    }

    #[test]
    fn every_code_parses_back() {
        for grau in Parentesco::ALL {
            assert_eq!(grau.code().parse::<Parentesco>(), Ok(grau));
        }
        assert_eq!(
            "Irmã".parse::<Parentesco>(),
            Err(UnknownParentesco(String::from("Irmã")))
        );
    }

    #[test]
    fn unknown_relationship_decodes_as_unset() {
        let guardian: GuardianDto =
            serde_json::from_str(r#"{"nome": "Rosa", "grauParentesco": "Avó"}"#).unwrap();
        assert_eq!(guardian.nome, "Rosa");
        assert_eq!(guardian.grau_parentesco, None);
    }

    #[test]
    fn null_relationship_is_unset() {
        let guardian: GuardianDto =
            serde_json::from_str(r#"{"nome": "Rosa", "grauParentesco": null}"#).unwrap();
        assert_eq!(guardian.grau_parentesco, None);
    }
}

use serde::{Deserialize, Serialize};

use crate::{guardian::GuardianDto, turma::Turma};

/// Student as held by the backend.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StudentDto {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default, rename = "transporteEscolar")]
    pub transporte_escolar: String,
    #[serde(default, rename = "turmasEnum", with = "crate::blank")]
    pub turma: Option<Turma>,
    #[serde(default, rename = "podeSairSozinho")]
    pub pode_sair_sozinho: bool,
    #[serde(default, rename = "adultosResponsaveis")]
    pub responsaveis: Vec<GuardianDto>,
}

/// Body of `POST /alunos` and `PUT /alunos/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StudentPayload {
    pub nome: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default, rename = "transporteEscolar")]
    pub transporte_escolar: String,
    #[serde(default, rename = "turmasEnum", with = "crate::blank")]
    pub turma: Option<Turma>,
    #[serde(default, rename = "podeSairSozinho")]
    pub pode_sair_sozinho: bool,
    #[serde(default, rename = "adultosResponsaveis")]
    pub responsaveis: Vec<GuardianDto>,
}

impl StudentDto {
    pub fn from_payload(id: i64, payload: StudentPayload) -> Self {
        StudentDto {
            id,
            nome: payload.nome,
            telefone: payload.telefone,
            transporte_escolar: payload.transporte_escolar,
            turma: payload.turma,
            pode_sair_sozinho: payload.pode_sair_sozinho,
            responsaveis: payload.responsaveis,
        }
    }
}

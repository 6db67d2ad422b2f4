//! Editable copy of a student held while the edit modal is open.

use std::fmt::Display;

use dto::guardian::{GuardianDto, Parentesco};
use dto::student::{StudentDto, StudentPayload};
use dto::turma::Turma;
use uuid::Uuid;

/// Guardian row inside a draft. `key` is assigned locally when the row is
/// created and stays stable while other rows are added or removed; `id` is
/// the backend identifier, if the guardian was already saved.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftGuardian {
    pub key: Uuid,
    pub id: Option<i64>,
    pub nome: String,
    pub grau_parentesco: Option<Parentesco>,
}

impl DraftGuardian {
    fn empty() -> Self {
        DraftGuardian {
            key: Uuid::new_v4(),
            id: None,
            nome: String::new(),
            grau_parentesco: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GuardianField {
    Nome(String),
    GrauParentesco(Option<Parentesco>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentDraft {
    pub nome: String,
    pub telefone: String,
    pub transporte_escolar: String,
    pub turma: Option<Turma>,
    pub pode_sair_sozinho: bool,
    pub responsaveis: Vec<DraftGuardian>,
}

impl StudentDraft {
    pub fn blank() -> Self {
        StudentDraft::default()
    }

    pub fn from_student(student: &StudentDto) -> Self {
        StudentDraft {
            nome: student.nome.clone(),
            telefone: student.telefone.clone(),
            transporte_escolar: student.transporte_escolar.clone(),
            turma: student.turma,
            pode_sair_sozinho: student.pode_sair_sozinho,
            responsaveis: student
                .responsaveis
                .iter()
                .map(|g| DraftGuardian {
                    key: Uuid::new_v4(),
                    id: g.id,
                    nome: g.nome.clone(),
                    grau_parentesco: g.grau_parentesco,
                })
                .collect(),
        }
    }

    /// Appends an empty guardian and returns its key.
    pub fn add_guardian(&mut self) -> Uuid {
        let guardian = DraftGuardian::empty();
        let key = guardian.key;
        self.responsaveis.push(guardian);
        key
    }

    pub fn update_guardian(&mut self, key: Uuid, field: GuardianField) -> bool {
        match self.responsaveis.iter_mut().find(|g| g.key == key) {
            Some(guardian) => {
                match field {
                    GuardianField::Nome(nome) => guardian.nome = nome,
                    GuardianField::GrauParentesco(grau) => guardian.grau_parentesco = grau,
                }
                true
            }
            None => false,
        }
    }

    pub fn update_guardian_at(&mut self, index: usize, field: GuardianField) -> bool {
        match self.responsaveis.get(index).map(|g| g.key) {
            Some(key) => self.update_guardian(key, field),
            None => false,
        }
    }

    pub fn remove_guardian(&mut self, key: Uuid) -> bool {
        let before = self.responsaveis.len();
        self.responsaveis.retain(|g| g.key != key);
        self.responsaveis.len() != before
    }

    pub fn remove_guardian_at(&mut self, index: usize) -> Option<DraftGuardian> {
        if index < self.responsaveis.len() {
            Some(self.responsaveis.remove(index))
        } else {
            None
        }
    }

    pub fn to_payload(&self) -> StudentPayload {
        StudentPayload {
            nome: self.nome.clone(),
            telefone: self.telefone.clone(),
            transporte_escolar: self.transporte_escolar.clone(),
            turma: self.turma,
            pode_sair_sozinho: self.pode_sair_sozinho,
            responsaveis: self
                .responsaveis
                .iter()
                .map(|g| GuardianDto {
                    id: g.id,
                    nome: g.nome.clone(),
                    grau_parentesco: g.grau_parentesco,
                })
                .collect(),
        }
    }
}

/// Outcome of the advisory duplicate-name lookup. Never blocks saving.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum NameCheck {
    #[default]
    Unchecked,
    Available,
    Taken,
    Failed,
}

impl NameCheck {
    pub fn from_lookup<E: Display>(lookup: &Result<bool, E>) -> Self {
        match lookup {
            Ok(true) => NameCheck::Taken,
            Ok(false) => NameCheck::Available,
            Err(_) => NameCheck::Failed,
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            NameCheck::Unchecked | NameCheck::Available => None,
            NameCheck::Taken => Some(
                "O aluno já está cadastrado no sistema. Para mudar algo, acione a coordenação.",
            ),
            NameCheck::Failed => Some("Erro ao verificar o nome. Tente novamente."),
        }
    }
}

pub fn should_check_name(nome: &str) -> bool {
    !nome.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(names: &[&str]) -> StudentDraft {
        let mut draft = StudentDraft::blank();
        for name in names {
            let key = draft.add_guardian();
            draft.update_guardian(key, GuardianField::Nome(name.to_string()));
        }
        draft
    }

    fn names(draft: &StudentDraft) -> Vec<&str> {
        draft.responsaveis.iter().map(|g| g.nome.as_str()).collect()
    }

    #[test]
    fn blank_draft_starts_empty() {
        let draft = StudentDraft::blank();
        assert!(draft.responsaveis.is_empty());
        assert_eq!(draft.turma, None);
        assert!(!draft.pode_sair_sozinho);
    }

    #[test]
    fn adding_guardian_appends_empty_entry() {
        let mut draft = draft_with(&["Maria", "João"]);
        let key = draft.add_guardian();

        assert_eq!(draft.responsaveis.len(), 3);
        let added = draft.responsaveis.last().unwrap();
        assert_eq!(added.key, key);
        assert_eq!(added.nome, "");
        assert_eq!(added.grau_parentesco, None);
        assert_eq!(added.id, None);
    }

    #[test]
    fn removing_middle_guardian_keeps_order() {
        let mut draft = draft_with(&["Maria", "João", "Rosa", "Pedro"]);
        let removed = draft.remove_guardian_at(1).unwrap();

        assert_eq!(removed.nome, "João");
        assert_eq!(names(&draft), vec!["Maria", "Rosa", "Pedro"]);
        assert!(draft.remove_guardian_at(3).is_none());
    }

    #[test]
    fn keys_survive_removal_of_earlier_rows() {
        let mut draft = draft_with(&["Maria", "João", "Rosa"]);
        let rosa = draft.responsaveis[2].key;
        let maria = draft.responsaveis[0].key;

        assert!(draft.remove_guardian(maria));
        assert!(draft.update_guardian(rosa, GuardianField::GrauParentesco(Some(Parentesco::AvoAvo))));

        assert_eq!(draft.responsaveis[1].nome, "Rosa");
        assert_eq!(draft.responsaveis[1].grau_parentesco, Some(Parentesco::AvoAvo));
        assert!(!draft.remove_guardian(maria));
    }

    #[test]
    fn update_by_position_targets_one_entry() {
        let mut draft = draft_with(&["Maria", "João"]);
        assert!(draft.update_guardian_at(1, GuardianField::Nome(String::from("Joana"))));
        assert!(!draft.update_guardian_at(5, GuardianField::Nome(String::from("x"))));
        assert_eq!(names(&draft), vec!["Maria", "Joana"]);
    }

    #[test]
    fn editing_existing_student_preserves_guardian_ids() {
        let student = StudentDto {
            id: 7,
            nome: String::from("Ana Silva"),
            telefone: String::from("11 90000-0000"),
            transporte_escolar: String::new(),
            turma: Some(Turma::T3A),
            pode_sair_sozinho: true,
            responsaveis: vec![GuardianDto {
                id: Some(3),
                nome: String::from("Maria"),
                grau_parentesco: Some(Parentesco::Mae),
            }],
        };

        let mut draft = StudentDraft::from_student(&student);
        draft.add_guardian();
        let payload = draft.to_payload();

        assert_eq!(payload.nome, "Ana Silva");
        assert_eq!(payload.turma, Some(Turma::T3A));
        assert!(payload.pode_sair_sozinho);
        assert_eq!(payload.responsaveis.len(), 2);
        assert_eq!(payload.responsaveis[0].id, Some(3));
        assert_eq!(payload.responsaveis[1].id, None);
    }

    #[test]
    fn name_check_messages() {
        assert_eq!(NameCheck::from_lookup::<String>(&Ok(true)), NameCheck::Taken);
        assert_eq!(NameCheck::from_lookup::<String>(&Ok(false)), NameCheck::Available);
        assert_eq!(
            NameCheck::from_lookup(&Err::<bool, _>("offline")),
            NameCheck::Failed
        );

        assert!(NameCheck::Taken.message().unwrap().contains("já está cadastrado"));
        assert!(NameCheck::Failed.message().unwrap().contains("Tente novamente"));
        assert_eq!(NameCheck::Available.message(), None);
        assert_ne!(NameCheck::Taken.message(), NameCheck::Failed.message());
    }

    #[test]
    fn blank_names_are_not_checked() {
        assert!(!should_check_name(""));
        assert!(!should_check_name("   "));
        assert!(should_check_name("Ana"));
    }
}

use dto::student::StudentDto;
use dto::turma::Turma;
use thiserror::Error;

/// Students whose name contains `search` (case-insensitive) and whose class
/// equals `turma`, or every class when `turma` is `None`.
pub fn filter_students(students: &[StudentDto], search: &str, turma: Option<Turma>) -> Vec<StudentDto> {
    let needle = search.to_lowercase();
    students
        .iter()
        .filter(|s| s.nome.to_lowercase().contains(&needle))
        .filter(|s| turma.map_or(true, |t| s.turma == Some(t)))
        .cloned()
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditorMode {
    Create,
    Edit(i64),
}

impl EditorMode {
    pub fn title(&self) -> &'static str {
        match self {
            EditorMode::Create => "Cadastro de Aluno",
            EditorMode::Edit(_) => "Editar Aluno",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            EditorMode::Create => "Aluno cadastrado com sucesso!",
            EditorMode::Edit(_) => "Dados do aluno alterados com sucesso!",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            EditorMode::Create => "Não foi possível cadastrar o aluno.",
            EditorMode::Edit(_) => "Não foi possível alterar os dados do aluno.",
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ReportBlocked {
    #[error("Token de autenticação não encontrado. Faça login novamente.")]
    MissingToken,
    #[error("Selecione uma turma para gerar o relatório.")]
    MissingTurma,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportRequest {
    pub token: String,
    pub turma: Turma,
}

impl ReportRequest {
    pub fn new(token: Option<String>, turma: Option<Turma>) -> Result<Self, ReportBlocked> {
        let token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ReportBlocked::MissingToken)?;
        let turma = turma.ok_or(ReportBlocked::MissingTurma)?;
        Ok(ReportRequest { token, turma })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: i64, nome: &str, turma: Option<Turma>) -> StudentDto {
        StudentDto {
            id,
            nome: nome.to_string(),
            telefone: String::new(),
            transporte_escolar: String::new(),
            turma,
            pode_sair_sozinho: false,
            responsaveis: vec![],
        }
    }

    fn roster() -> Vec<StudentDto> {
        vec![
            student(1, "Ana Silva", Some(Turma::T3A)),
            student(2, "Bruno Costa", Some(Turma::T3A)),
            student(3, "Mariana Souza", Some(Turma::T5B)),
            student(4, "ANA Paula", Some(Turma::T5B)),
            student(5, "Pedro Lima", None),
        ]
    }

    fn ids(students: &[StudentDto]) -> Vec<i64> {
        students.iter().map(|s| s.id).collect()
    }

    #[test]
    fn empty_filters_keep_everything() {
        assert_eq!(ids(&filter_students(&roster(), "", None)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        assert_eq!(ids(&filter_students(&roster(), "ana", None)), vec![1, 3, 4]);
        assert_eq!(ids(&filter_students(&roster(), "SILVA", None)), vec![1]);
    }

    #[test]
    fn class_filter_is_exact() {
        assert_eq!(ids(&filter_students(&roster(), "", Some(Turma::T5B))), vec![3, 4]);
        assert!(filter_students(&roster(), "", Some(Turma::T9C)).is_empty());
    }

    #[test]
    fn both_predicates_must_hold() {
        let all = roster();
        let searches = ["", "ana", "a", "zzz", "Lima"];
        let classes = [None, Some(Turma::T3A), Some(Turma::T5B), Some(Turma::T1A)];

        for search in searches {
            for turma in classes {
                let expected: Vec<i64> = all
                    .iter()
                    .filter(|s| {
                        s.nome.to_lowercase().contains(&search.to_lowercase())
                            && (turma.is_none() || s.turma == turma)
                    })
                    .map(|s| s.id)
                    .collect();
                assert_eq!(ids(&filter_students(&all, search, turma)), expected);
            }
        }
    }

    #[test]
    fn report_without_class_is_blocked() {
        assert_eq!(
            ReportRequest::new(Some(String::from("tok")), None),
            Err(ReportBlocked::MissingTurma)
        );
    }

    #[test]
    fn report_without_token_is_blocked_first() {
        assert_eq!(ReportRequest::new(None, None), Err(ReportBlocked::MissingToken));
        assert_eq!(
            ReportRequest::new(Some(String::new()), Some(Turma::T3A)),
            Err(ReportBlocked::MissingToken)
        );
    }

    #[test]
    fn report_request_carries_token_and_class() {
        let request = ReportRequest::new(Some(String::from("tok")), Some(Turma::T3A)).unwrap();
        assert_eq!(request.token, "tok");
        assert_eq!(request.turma, Turma::T3A);
    }
}

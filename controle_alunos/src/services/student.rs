use dto::student::{StudentDto, StudentPayload};
use dto::turma::Turma;
use leptos::prelude::*;

#[server]
pub async fn get_students(token: String) -> Result<Vec<StudentDto>, ServerFnError> {
    use crate::api::alunos;
    use crate::services::{api_client, forward};

    let api = api_client(token)?;
    forward("list students", alunos::list(&api).await)
}

#[server]
pub async fn check_name(token: String, nome: String) -> Result<bool, ServerFnError> {
    use crate::api::alunos;
    use crate::services::{api_client, forward};

    let api = api_client(token)?;
    forward("check name", alunos::check_nome(&api, nome.trim()).await)
}

#[server]
pub async fn create_student(
    token: String,
    student: StudentPayload,
) -> Result<StudentDto, ServerFnError> {
    use crate::api::alunos;
    use crate::services::{api_client, forward};

    let api = api_client(token)?;
    let created = forward("create student", alunos::create(&api, &student).await)?;
    log::info!("Created student {}", created.id);
    Ok(created)
}

#[server]
pub async fn update_student(
    token: String,
    id: i64,
    student: StudentPayload,
) -> Result<StudentDto, ServerFnError> {
    use crate::api::alunos;
    use crate::services::{api_client, forward};

    let api = api_client(token)?;
    let updated = forward("update student", alunos::update(&api, id, &student).await)?;
    log::info!("Updated student {}", id);
    Ok(updated)
}

#[server]
pub async fn delete_student(token: String, id: i64) -> Result<(), ServerFnError> {
    use crate::api::alunos;
    use crate::services::{api_client, forward};

    let api = api_client(token)?;
    forward("delete student", alunos::delete(&api, id).await)?;
    log::info!("Deleted student {}", id);
    Ok(())
}

#[server]
pub async fn get_report(token: String, turma: Turma) -> Result<Vec<u8>, ServerFnError> {
    use crate::api::alunos;
    use crate::services::{api_client, forward};

    let api = api_client(token)?;
    forward("class report", alunos::relatorio(&api, turma).await)
}

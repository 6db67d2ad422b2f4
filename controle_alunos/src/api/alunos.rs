use dto::student::{StudentDto, StudentPayload};
use dto::turma::Turma;
use serde_json::Value;

use super::{ApiClient, ApiError};

pub async fn list(api: &ApiClient) -> Result<Vec<StudentDto>, ApiError> {
    api.get("/alunos").await
}

/// `true` when the backend already knows a student with this name.
pub async fn check_nome(api: &ApiClient, nome: &str) -> Result<bool, ApiError> {
    let found: Value = api
        .get_query("/alunos/check-nome", &[("nome", nome)])
        .await?;
    Ok(is_truthy(&found))
}

pub async fn create(api: &ApiClient, student: &StudentPayload) -> Result<StudentDto, ApiError> {
    api.post("/alunos", student).await
}

pub async fn update(
    api: &ApiClient,
    id: i64,
    student: &StudentPayload,
) -> Result<StudentDto, ApiError> {
    api.put(&format!("/alunos/{}", id), student).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/alunos/{}", id)).await
}

/// Class roster PDF. The endpoint is protected, so no request goes out
/// without a token.
pub async fn relatorio(api: &ApiClient, turma: Turma) -> Result<Vec<u8>, ApiError> {
    if api.token().is_none() {
        return Err(ApiError::Unauthorized);
    }
    api.get_bytes(&format!("/alunos/relatorio/{}", turma.code().replace(' ', "%20")))
        .await
}

/// The name check answers with whatever the backend serialises; anything
/// other than false, zero, empty string or null counts as "exists".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn truthiness_matches_name_check_answers() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("sim")));
        assert!(is_truthy(&json!({ "id": 3 })));

        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
    }
}

pub mod auth;
pub mod guardian;
pub mod student;
pub mod turma;

/// Selections left on "Selecione" travel as `""` and map to `None`.
/// Values the client does not know also decode as `None`, so one odd record
/// cannot fail a whole list.
pub(crate) mod blank {
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<str>,
        S: Serializer,
    {
        serializer.serialize_str(value.as_ref().map(AsRef::<str>::as_ref).unwrap_or(""))
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => match value.parse() {
                Ok(parsed) => Ok(Some(parsed)),
                Err(e) => {
                    log::warn!("Ignoring unexpected value: {}", e);
                    Ok(None)
                }
            },
        }
    }
}

//! Errors of calls to the CRM REST API.
//!
//! Field-level validation never gets here: it is resolved locally by the
//! form before any request is made (see `a001_customer::validation`).

use serde::Deserialize;

/// Как UI должен показать ошибку
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 409: баннер без привязки к полю
    Conflict,
    /// 404 / 204: состояние "нет данных", а не ошибка
    NotFound,
    /// 400: баннер с сообщениями сервера
    BadRequest,
    /// Всё остальное: баннер с предложением повторить
    Transient,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Пользователь с таким именем уже существует. Выберите другое имя.")]
    Conflict { message: Option<String> },
    #[error("Данные не найдены")]
    NotFound { message: Option<String> },
    #[error("Нет данных")]
    NoContent,
    #[error("Некорректный запрос: {}", .messages.join("; "))]
    BadRequest { messages: Vec<String> },
    #[error("Ошибка сервера (HTTP {status}). Попробуйте ещё раз.")]
    Server { status: u16, message: Option<String> },
    #[error("Сервер недоступен ({0}). Попробуйте ещё раз.")]
    Network(String),
    #[error("Не удалось разобрать ответ сервера ({0}). Попробуйте ещё раз.")]
    Decode(String),
}

/// Bodies the backend uses for errors: a list of messages,
/// `{ "error": "..." }`, or a plain string.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Messages(Vec<String>),
    Keyed { error: String },
    Text(String),
}

fn parse_messages(body: &str) -> Vec<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<ErrorBody>(trimmed) {
        Ok(ErrorBody::Messages(list)) => list,
        Ok(ErrorBody::Keyed { error }) => vec![error],
        Ok(ErrorBody::Text(text)) => vec![text],
        Err(_) => vec![trimmed.to_string()],
    }
}

impl ApiError {
    /// Classifies a non-success response. `body` is the raw response text.
    pub fn from_status(status: u16, body: &str) -> Self {
        let messages = parse_messages(body);
        match status {
            204 => ApiError::NoContent,
            400 => ApiError::BadRequest { messages },
            404 => ApiError::NotFound {
                message: messages.into_iter().next(),
            },
            409 => ApiError::Conflict {
                message: messages.into_iter().next(),
            },
            _ => ApiError::Server {
                status,
                message: messages.into_iter().next(),
            },
        }
    }

    pub fn network(err: impl std::fmt::Display) -> Self {
        ApiError::Network(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        ApiError::Decode(err.to_string())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Conflict { .. } => ErrorCategory::Conflict,
            ApiError::NotFound { .. } | ApiError::NoContent => ErrorCategory::NotFound,
            ApiError::BadRequest { .. } => ErrorCategory::BadRequest,
            ApiError::Server { .. } | ApiError::Network(_) | ApiError::Decode(_) => {
                ErrorCategory::Transient
            }
        }
    }

    /// List endpoints render these as an empty table
    pub fn is_no_data(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_is_field_agnostic() {
        let err = ApiError::from_status(409, r#"{"error":"Username 'ivanov' already exists"}"#);
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert_eq!(
            err,
            ApiError::Conflict {
                message: Some("Username 'ivanov' already exists".into())
            }
        );
        assert!(err.user_message().contains("уже существует"));
    }

    #[test]
    fn not_found_and_no_content_mean_no_data() {
        assert!(ApiError::from_status(404, r#"{"error":"Orders not found"}"#).is_no_data());
        assert!(ApiError::from_status(204, "").is_no_data());
        assert!(!ApiError::from_status(500, "").is_no_data());
    }

    #[test]
    fn bad_request_collects_validation_messages() {
        let err = ApiError::from_status(
            400,
            r#"["username: Username must be between 3 and 20 characters","email: Email should be valid"]"#,
        );
        let ApiError::BadRequest { messages } = &err else {
            panic!("expected bad request, got {err:?}");
        };
        assert_eq!(messages.len(), 2);
        assert_eq!(
            err.to_string(),
            "Некорректный запрос: username: Username must be between 3 and 20 characters; email: Email should be valid"
        );
    }

    #[test]
    fn plain_text_bodies_are_kept() {
        let err = ApiError::from_status(500, "Internal server error: boom");
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: Some("Internal server error: boom".into())
            }
        );
        assert_eq!(err.category(), ErrorCategory::Transient);
    }

    #[test]
    fn transport_failures_are_transient() {
        assert_eq!(ApiError::network("offline").category(), ErrorCategory::Transient);
        assert_eq!(ApiError::decode("eof").category(), ErrorCategory::Transient);
        assert_eq!(
            ApiError::from_status(503, "").category(),
            ErrorCategory::Transient
        );
    }
}

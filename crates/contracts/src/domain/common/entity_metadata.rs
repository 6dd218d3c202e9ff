use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Метаданные записи (lifecycle tracking), как их отдаёт backend.
///
/// Backend сериализует `LocalDateTime` без часового пояса, поэтому здесь
/// `NaiveDateTime`. Поля отсутствуют у только что созданных черновиков.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityMetadata {
    /// Дата создания записи
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    /// Дата последнего обновления
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl EntityMetadata {
    /// Последнее изменение: `updatedAt`, а если его нет, то `createdAt`
    pub fn last_modified(&self) -> Option<NaiveDateTime> {
        self.updated_at.or(self.created_at)
    }
}

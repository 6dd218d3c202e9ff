use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов записей CRM.
///
/// Backend выдаёт числовые (`Long`) идентификаторы, а в URL они попадают
/// строкой, поэтому каждый ID умеет превращаться в строку и обратно.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Числовое значение, как его хранит backend
    fn value(&self) -> i64;

    /// Обернуть числовое значение
    fn from_value(value: i64) -> Self;

    /// Преобразовать ID в строку (для путей вида `/api/customers/{id}`)
    fn as_string(&self) -> String {
        self.value().to_string()
    }

    /// Создать ID из строки. Backend принимает только положительные ID.
    fn from_string(s: &str) -> Result<Self, String> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid id '{}': {}", s, e))?;
        if value <= 0 {
            return Err(format!("Invalid id '{}': must be positive", s));
        }
        Ok(Self::from_value(value))
    }
}

/// Объявляет newtype-идентификатор поверх `i64` с реализацией [`AggregateId`].
#[macro_export]
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $crate::domain::common::AggregateId for $name {
            fn value(&self) -> i64 {
                self.0
            }

            fn from_value(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    numeric_id!(SampleId);

    #[test]
    fn parses_positive_ids() {
        assert_eq!(SampleId::from_string("42"), Ok(SampleId(42)));
        assert_eq!(SampleId::from_string(" 7 "), Ok(SampleId(7)));
        assert_eq!(SampleId(42).as_string(), "42");
    }

    #[test]
    fn rejects_non_positive_and_garbage() {
        assert!(SampleId::from_string("0").is_err());
        assert!(SampleId::from_string("-3").is_err());
        assert!(SampleId::from_string("abc").is_err());
    }

    #[test]
    fn serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&SampleId(5)).unwrap(), "5");
        let id: SampleId = serde_json::from_str("12").unwrap();
        assert_eq!(id, SampleId(12));
    }
}

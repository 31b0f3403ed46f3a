//! Frontend Models
//!
//! Data structures matching the Pessoa REST backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pessoa record (matches backend DTO, camelCase on the wire)
///
/// A new record has no `id`; the server assigns one on creation.
/// Fields that are `None` are omitted from request bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pessoa {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Base64-encoded image body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Soft-delete marker; excluded records are filtered from the default list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded: Option<bool>,
}

impl Default for Pessoa {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            cpf: None,
            email: None,
            avatar: None,
            avatar_content_type: None,
            birth_date: None,
            excluded: Some(false),
        }
    }
}

/// Sort direction for the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Which field the search bar targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Cpf,
    Email,
    BirthDate,
}

impl SearchField {
    pub const ALL: [SearchField; 4] = [
        SearchField::Name,
        SearchField::Cpf,
        SearchField::Email,
        SearchField::BirthDate,
    ];

    /// Dedicated search endpoint for this field
    pub fn endpoint(&self) -> &'static str {
        match self {
            SearchField::Name => "api/pessoas-search-name/",
            SearchField::Cpf => "api/pessoas-search-cpf/",
            SearchField::Email => "api/pessoas-search-email/",
            SearchField::BirthDate => "api/pessoas-search-birthdate/",
        }
    }

    /// Query parameter key on the search endpoint
    pub fn param(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Cpf => "cpf",
            SearchField::Email => "email",
            SearchField::BirthDate => "birthdate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchField::Name => "Name",
            SearchField::Cpf => "Cpf",
            SearchField::Email => "Email",
            SearchField::BirthDate => "Birth Date",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SearchField::Name),
            "cpf" => Some(SearchField::Cpf),
            "email" => Some(SearchField::Email),
            "birthdate" => Some(SearchField::BirthDate),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_pessoa_defaults_to_not_excluded() {
        let blank = Pessoa::default();
        assert_eq!(blank.id, None);
        assert_eq!(blank.excluded, Some(false));
    }

    #[test]
    fn test_pessoa_serializes_camel_case_and_skips_absent_fields() {
        let pessoa = Pessoa {
            id: Some(7),
            name: Some("Maria".to_string()),
            cpf: Some("123.456.789-00".to_string()),
            email: Some("maria@example.com".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12),
            avatar: None,
            avatar_content_type: None,
            excluded: Some(false),
        };
        let json = serde_json::to_value(&pessoa).unwrap();
        assert_eq!(json["birthDate"], "1990-04-12");
        assert_eq!(json["cpf"], "123.456.789-00");
        assert!(json.get("avatar").is_none());
        assert!(json.get("avatarContentType").is_none());
    }

    #[test]
    fn test_pessoa_deserializes_server_payload() {
        let json = r#"{
            "id": 1,
            "name": "Joao",
            "cpf": "111.222.333-44",
            "email": "joao@example.com",
            "avatar": "aGVsbG8=",
            "avatarContentType": "image/png",
            "birthDate": "1985-01-30",
            "excluded": false
        }"#;
        let pessoa: Pessoa = serde_json::from_str(json).unwrap();
        assert_eq!(pessoa.id, Some(1));
        assert_eq!(pessoa.avatar_content_type.as_deref(), Some("image/png"));
        assert_eq!(pessoa.birth_date, NaiveDate::from_ymd_opt(1985, 1, 30));
    }

    #[test]
    fn test_search_field_endpoints() {
        assert_eq!(SearchField::Cpf.endpoint(), "api/pessoas-search-cpf/");
        assert_eq!(SearchField::BirthDate.param(), "birthdate");
        assert_eq!(SearchField::parse("email"), Some(SearchField::Email));
        assert_eq!(SearchField::parse("unknown"), None);
    }

    #[test]
    fn test_sort_order_flip_and_parse() {
        assert_eq!(SortOrder::Asc.flipped(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.flipped(), SortOrder::Asc);
        assert_eq!(SortOrder::parse("desc"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::parse("up"), None);
    }
}

//! Form payloads accepted by the item routes.
//!
//! Fields may arrive in the query string, the urlencoded body, or both; a
//! field present in the body wins. A request with no body at all is fine.

use serde::Deserialize;

/// `POST /todo` fields. A missing `description` creates an item with an empty one.
#[derive(Debug, Default, Deserialize)]
pub struct CreateForm {
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateForm {
    /// Combine body fields with query fields, preferring the body.
    #[must_use]
    pub fn or(self, query: Self) -> Self {
        Self {
            description: self.description.or(query.description),
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// `POST /todo/:id` fields.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateForm {
    #[serde(default)]
    pub completed: Option<String>,
}

impl UpdateForm {
    /// Combine body fields with query fields, preferring the body.
    #[must_use]
    pub fn or(self, query: Self) -> Self {
        Self {
            completed: self.completed.or(query.completed),
        }
    }

    /// The requested completion flag; absent or unrecognised values mean `false`.
    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed.as_deref().and_then(parse_bool).unwrap_or(false)
    }
}

/// Boolean spellings accepted by the web UI: `1 t T TRUE true True` and
/// `0 f F FALSE false False`.
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(true))]
    #[case("t", Some(true))]
    #[case("TRUE", Some(true))]
    #[case("True", Some(true))]
    #[case("0", Some(false))]
    #[case("F", Some(false))]
    #[case("false", Some(false))]
    #[case("yes", None)]
    #[case("tRuE", None)]
    #[case("", None)]
    fn parse_bool_spellings(#[case] input: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_bool(input), expected);
    }

    #[test]
    fn missing_completed_is_false() {
        assert!(!UpdateForm::default().completed());
    }

    #[test]
    fn body_fields_win_over_query() {
        let body = UpdateForm {
            completed: Some("false".into()),
        };
        let query = UpdateForm {
            completed: Some("true".into()),
        };
        assert!(!body.or(query).completed());

        let merged = UpdateForm::default().or(UpdateForm {
            completed: Some("1".into()),
        });
        assert!(merged.completed());
    }

    #[test]
    fn missing_description_is_empty() {
        assert_eq!(CreateForm::default().or(CreateForm::default()).description(), "");

        let query = CreateForm {
            description: Some("from query".into()),
        };
        assert_eq!(CreateForm::default().or(query).description(), "from query");
    }

    #[test]
    fn garbage_completed_is_false() {
        let form = UpdateForm {
            completed: Some("maybe".into()),
        };
        assert!(!form.completed());
    }
}

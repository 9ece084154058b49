use serde::Serialize;
use serde_json::Value;

use crate::api::types::{ApiResult, ApiSdkError};

/// Flattens a parameter struct into query pairs.
///
/// Unset options and blank strings are dropped so that filters the caller
/// did not fill in never reach the server.
pub(crate) fn to_query_pairs<Q>(params: &Q) -> ApiResult<Vec<(String, String)>>
where
    Q: Serialize + ?Sized,
{
    let value =
        serde_json::to_value(params).map_err(|e| ApiSdkError::SerializationError(e.to_string()))?;

    let object = match value {
        Value::Object(object) => object,
        Value::Null => return Ok(Vec::new()),
        _ => {
            return Err(ApiSdkError::SerializationError(
                "Query parameters must serialize to an object".into(),
            ));
        }
    };

    let mut pairs = Vec::with_capacity(object.len());
    for (key, value) in object {
        match value {
            Value::Null => {}
            Value::String(s) if s.trim().is_empty() => {}
            Value::String(s) => pairs.push((key, s)),
            Value::Bool(b) => pairs.push((key, b.to_string())),
            Value::Number(n) => pairs.push((key, n.to_string())),
            Value::Array(items) => {
                for item in items {
                    match item {
                        Value::String(s) if !s.trim().is_empty() => pairs.push((key.clone(), s)),
                        Value::Bool(b) => pairs.push((key.clone(), b.to_string())),
                        Value::Number(n) => pairs.push((key.clone(), n.to_string())),
                        _ => {}
                    }
                }
            }
            Value::Object(_) => {
                return Err(ApiSdkError::SerializationError(format!(
                    "Query parameter '{}' can not be a nested object",
                    key
                )));
            }
        }
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Default)]
    struct Filters {
        email: Option<String>,
        username: Option<String>,
        is_active: Option<bool>,
        #[serde(rename = "groups_by_pk")]
        groups: Option<Vec<String>>,
        history_days: Option<f64>,
        for_user: Option<i32>,
    }

    #[test]
    fn test_unset_and_blank_values_are_skipped() {
        let filters = Filters {
            email: Some(String::new()),
            username: Some(" \t\n".into()),
            ..Default::default()
        };

        assert!(to_query_pairs(&filters).unwrap().is_empty());
    }

    #[test]
    fn test_scalars_are_rendered_as_strings() {
        let filters = Filters {
            email: Some("user+test@example.com".into()),
            is_active: Some(false),
            history_days: Some(7.5),
            for_user: Some(12),
            ..Default::default()
        };

        let pairs = to_query_pairs(&filters).unwrap();
        assert!(pairs.contains(&("email".into(), "user+test@example.com".into())));
        assert!(pairs.contains(&("is_active".into(), "false".into())));
        assert!(pairs.contains(&("history_days".into(), "7.5".into())));
        assert!(pairs.contains(&("for_user".into(), "12".into())));
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn test_arrays_repeat_the_key() {
        let filters =
            Filters { groups: Some(vec!["a".into(), "".into(), "b".into()]), ..Default::default() };

        let pairs = to_query_pairs(&filters).unwrap();
        assert_eq!(
            pairs,
            vec![("groups_by_pk".to_string(), "a".to_string()), ("groups_by_pk".into(), "b".into())]
        );
    }

    #[test]
    fn test_unit_serializes_to_no_pairs() {
        assert!(to_query_pairs(&()).unwrap().is_empty());
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(matches!(to_query_pairs(&42), Err(ApiSdkError::SerializationError(_))));
    }
}

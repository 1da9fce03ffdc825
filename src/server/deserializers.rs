use axum::extract::{FromRequest, FromRequestParts};
use serde::{Deserialize, Deserializer};

use super::error::{ApiError, LookupRejection};

/// `Json` extractor that rejects with the API's 400 envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// `Path` extractor that rejects with the API's 404 envelope, so `/questions/abc`
/// is treated like any other unknown resource.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct IdPath<T>(pub T);

/// `Json` extractor for bodies that only drive a lookup. Unparseable JSON is
/// still a 400, but well-formed JSON of the wrong shape is a 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(LookupRejection))]
pub struct LookupBody<T>(pub T);

pub fn first_page() -> usize {
    1
}

// `?page=` is parsed leniently: junk falls back to the first page and
// non-positive numbers select nothing
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(match value.map(|v| v.trim().parse::<i64>()) {
        None | Some(Err(_)) => first_page(),
        Some(Ok(page)) => usize::try_from(page).unwrap_or(0),
    })
}

// the front end sends ids both as numbers and as strings ("2"), accept either
#[derive(Deserialize)]
#[serde(try_from = "IdRepr")]
pub struct FlexibleId(pub i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(i64),
    Text(String),
}

impl TryFrom<IdRepr> for FlexibleId {
    type Error = String;

    fn try_from(value: IdRepr) -> Result<Self, Self::Error> {
        match value {
            IdRepr::Number(v) => Ok(FlexibleId(v)),
            IdRepr::Text(s) => match s.trim().parse::<i64>() {
                Ok(v) => Ok(FlexibleId(v)),
                Err(_) => Err(format!("Wrong value {s}, can not parse to i64")),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct PageQuery {
        #[serde(default = "first_page", deserialize_with = "deserialize_page")]
        page: usize,
    }

    fn page_of(json: &str) -> usize {
        serde_json::from_str::<PageQuery>(json).unwrap().page
    }

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(page_of("{}"), 1);
        assert_eq!(page_of(r#"{"page": "abc"}"#), 1);
    }

    #[test]
    fn page_parses_numbers() {
        assert_eq!(page_of(r#"{"page": "3"}"#), 3);
        assert_eq!(page_of(r#"{"page": "-2"}"#), 0);
    }

    #[test]
    fn flexible_id_accepts_numbers_and_strings() {
        let ids: Vec<FlexibleId> = serde_json::from_str(r#"[1, "2", " 3 "]"#).unwrap();
        let ids: Vec<i64> = ids.into_iter().map(|id| id.0).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert!(serde_json::from_str::<FlexibleId>(r#""two""#).is_err());
    }
}

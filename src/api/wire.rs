//! JSON shapes exchanged with the posts endpoint.

use serde::{Deserialize, Serialize};

use crate::posts::{PostId, RawPost, SavedPost};

use super::error::ApiError;

/// A number that may arrive as a JSON number or as text.
///
/// Form input and the mock server both produce either form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(u64),
    Text(String),
}

impl LooseNumber {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            LooseNumber::Number(n) => Some(*n),
            LooseNumber::Text(s) => s.trim().parse().ok(),
        }
    }

    fn describe(&self) -> String {
        match self {
            LooseNumber::Number(n) => n.to_string(),
            LooseNumber::Text(s) => s.clone(),
        }
    }
}

impl From<u64> for LooseNumber {
    fn from(value: u64) -> Self {
        LooseNumber::Number(value)
    }
}

impl From<String> for LooseNumber {
    fn from(value: String) -> Self {
        LooseNumber::Text(value)
    }
}

impl From<&str> for LooseNumber {
    fn from(value: &str) -> Self {
        LooseNumber::Text(value.to_string())
    }
}

/// Post payload sent to the create endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftPost {
    pub title: String,
    #[serde(rename = "body")]
    pub content: String,
    #[serde(rename = "userId")]
    pub user_id: LooseNumber,
}

impl DraftPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        user_id: impl Into<LooseNumber>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            user_id: user_id.into(),
        }
    }

    /// The author id as a number, checked before the draft is sent.
    pub fn normalised_user_id(&self) -> Result<u64, ApiError> {
        self.user_id.as_u64().ok_or_else(|| ApiError::InvalidUserId {
            value: self.user_id.describe(),
        })
    }
}

/// Post as the endpoint sends it. `content` is accepted for `body`.
#[derive(Debug, Deserialize)]
pub(crate) struct WirePost {
    #[serde(default)]
    id: Option<LooseNumber>,
    #[serde(default)]
    title: String,
    #[serde(default, alias = "content")]
    body: String,
    #[serde(rename = "userId")]
    user_id: LooseNumber,
}

impl WirePost {
    fn normalised_user_id(&self) -> Result<u64, ApiError> {
        self.user_id.as_u64().ok_or_else(|| ApiError::InvalidUserId {
            value: self.user_id.describe(),
        })
    }

    /// Normalise a listed post. The id must be numeric.
    pub(crate) fn into_raw(self) -> Result<RawPost, ApiError> {
        let user_id = self.normalised_user_id()?;
        let id = match &self.id {
            Some(id) => id.as_u64().ok_or_else(|| ApiError::InvalidId {
                value: id.describe(),
            })?,
            None => {
                return Err(ApiError::InvalidId {
                    value: String::new(),
                })
            }
        };
        Ok(RawPost {
            id: PostId::new(id),
            title: self.title,
            content: self.body,
            user_id,
        })
    }

    /// Normalise an echoed post. The echoed id is never trusted.
    pub(crate) fn into_saved(self) -> Result<SavedPost, ApiError> {
        let user_id = self.normalised_user_id()?;
        Ok(SavedPost {
            // Only kept for logging; an unparseable echo id is harmless.
            echoed_id: self.id.as_ref().and_then(LooseNumber::as_u64).map(PostId::new),
            title: self.title,
            content: self.body,
            user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(json: &str) -> WirePost {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn loose_number_accepts_both_forms() {
        let n: LooseNumber = serde_json::from_str("7").unwrap();
        let s: LooseNumber = serde_json::from_str("\" 7 \"").unwrap();
        assert_eq!(n.as_u64(), Some(7));
        assert_eq!(s.as_u64(), Some(7));
        assert_eq!(LooseNumber::from("seven").as_u64(), None);
    }

    #[test]
    fn draft_serializes_jsonplaceholder_fields() {
        let draft = DraftPost::new("Hello", "World", "2");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["title"], "Hello");
        assert_eq!(json["body"], "World");
        assert_eq!(json["userId"], "2");
    }

    #[test]
    fn draft_user_id_is_checked_locally() {
        let text = DraftPost::new("t", "c", " 3 ");
        assert_eq!(text.normalised_user_id().unwrap(), 3);
        let number = DraftPost::new("t", "c", 3);
        assert_eq!(number.normalised_user_id().unwrap(), 3);

        let err = DraftPost::new("t", "c", "bob")
            .normalised_user_id()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidUserId { ref value } if value == "bob"));
    }

    #[test]
    fn raw_post_normalises_string_ids() {
        let raw = wire(r#"{"id": "12", "title": "t", "body": "b", "userId": "3"}"#)
            .into_raw()
            .unwrap();
        assert_eq!(raw.id, PostId::new(12));
        assert_eq!(raw.user_id, 3);
        assert_eq!(raw.content, "b");
    }

    #[test]
    fn raw_post_accepts_content_alias() {
        let raw = wire(r#"{"id": 1, "title": "t", "content": "c", "userId": 1}"#)
            .into_raw()
            .unwrap();
        assert_eq!(raw.content, "c");
    }

    #[test]
    fn raw_post_requires_numeric_id() {
        let err = wire(r#"{"id": "abc", "title": "t", "body": "b", "userId": 1}"#)
            .into_raw()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidId { ref value } if value == "abc"));

        let err = wire(r#"{"title": "t", "body": "b", "userId": 1}"#)
            .into_raw()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidId { .. }));
    }

    #[test]
    fn saved_post_tolerates_odd_echo_id() {
        let saved = wire(r#"{"id": "x", "title": "t", "body": "b", "userId": "4"}"#)
            .into_saved()
            .unwrap();
        assert_eq!(saved.echoed_id, None);
        assert_eq!(saved.user_id, 4);
    }

    #[test]
    fn saved_post_rejects_non_numeric_user() {
        let err = wire(r#"{"id": 101, "title": "t", "body": "b", "userId": "bob"}"#)
            .into_saved()
            .unwrap_err();
        assert_eq!(err.error_type(), "invalid_user_id");
    }
}

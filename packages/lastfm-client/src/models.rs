//! Typed views over a few normalized responses

use serde::Serialize;

use crate::error::{LastfmError, LastfmResult};
use crate::xml::NormalizedNode;

/// An authenticated web service session (`auth.getSession`)
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Last.fm user name the session belongs to
    pub name: String,
    /// Session key to pass to [`crate::LastfmClient::set_session`]
    pub key: String,
    /// Whether the user is a paying subscriber
    pub subscriber: bool,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("name", &self.name)
            .field("key", &"[REDACTED]")
            .field("subscriber", &self.subscriber)
            .finish()
    }
}

impl TryFrom<&NormalizedNode> for Session {
    type Error = LastfmError;

    fn try_from(node: &NormalizedNode) -> LastfmResult<Self> {
        let key = node
            .get("key")
            .and_then(NormalizedNode::as_text)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                LastfmError::UnexpectedResponse("session without a key".to_string())
            })?;

        Ok(Self {
            name: node["name"].as_text().unwrap_or_default().to_string(),
            key: key.to_string(),
            subscriber: node["subscriber"].as_text() == Some("1"),
        })
    }
}

/// Time window for chart-style user methods (`from`/`to` parameters)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub from: Option<chrono::DateTime<chrono::Utc>>,
    pub to: Option<chrono::DateTime<chrono::Utc>>,
}

/// Paging arguments shared by most list methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paging {
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl Paging {
    pub fn new(limit: u32, page: u32) -> Self {
        Self {
            limit: Some(limit),
            page: Some(page),
        }
    }

    pub fn limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            page: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::LfmDocument;

    #[test]
    fn test_session_from_node() {
        let payload = LfmDocument::parse(
            r#"<lfm status="ok">
  <session>
    <name>MyLastFMUsername</name>
    <key>zzzyyyxxx</key>
    <subscriber>0</subscriber>
  </session>
</lfm>"#,
        )
        .unwrap()
        .into_payload();

        let session = Session::try_from(&payload["session"]).unwrap();
        assert_eq!(session.name, "MyLastFMUsername");
        assert_eq!(session.key, "zzzyyyxxx");
        assert!(!session.subscriber);
    }

    #[test]
    fn test_session_without_key() {
        let node = NormalizedNode::Text(String::new());
        assert!(matches!(
            Session::try_from(&node),
            Err(LastfmError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn test_session_debug_redacts_key() {
        let session = Session {
            name: "user".to_string(),
            key: "zzzyyyxxx".to_string(),
            subscriber: true,
        };
        assert!(!format!("{:?}", session).contains("zzzyyyxxx"));
    }

    #[test]
    fn test_paging_helpers() {
        assert_eq!(Paging::new(10, 3), Paging { limit: Some(10), page: Some(3) });
        assert_eq!(Paging::limit(5).page, None);
        assert_eq!(Paging::default(), Paging { limit: None, page: None });
    }
}

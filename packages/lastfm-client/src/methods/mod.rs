//! Method catalogue
//!
//! Each resource module declares its remote methods as `CallSpec` constants
//! and exposes thin typed wrappers that build a `ParameterSet`, go through
//! [`MethodInvoker::invoke`](crate::MethodInvoker::invoke) and apply a
//! response selector to the normalized payload.

pub mod album;
pub mod artist;
pub mod auth;
pub mod geo;
pub mod library;
pub mod track;
pub mod user;

pub use album::Album;
pub use artist::Artist;
pub use auth::Auth;
pub use geo::Geo;
pub use library::Library;
pub use track::Track;
pub use user::User;

use crate::call_spec::CallSpec;
use crate::error::{LastfmError, LastfmResult};
use crate::xml::NormalizedNode;

/// Every declared method, for lookup by name
pub static CATALOGUE: &[&CallSpec] = &[
    &auth::GET_TOKEN,
    &auth::GET_SESSION,
    &artist::GET_INFO,
    &artist::GET_EVENTS,
    &artist::GET_TOP_TAGS,
    &artist::GET_IMAGES,
    &artist::GET_SIMILAR,
    &artist::SEARCH,
    &album::GET_INFO,
    &geo::GET_EVENTS,
    &library::GET_ARTISTS,
    &track::ADD_TAGS,
    &track::BAN,
    &track::GET_INFO,
    &track::GET_CORRECTION,
    &track::GET_SIMILAR,
    &track::GET_TAGS,
    &track::GET_TOP_FANS,
    &track::GET_TOP_TAGS,
    &track::LOVE,
    &track::REMOVE_TAG,
    &track::SEARCH,
    &track::SHARE,
    &track::SCROBBLE,
    &track::UPDATE_NOW_PLAYING,
    &user::GET_INFO,
    &user::GET_FRIENDS,
    &user::GET_NEIGHBOURS,
    &user::GET_RECENT_TRACKS,
    &user::GET_TOP_ARTISTS,
    &user::GET_RECOMMENDED_EVENTS,
];

/// Find a cataloged method by its Last.fm name (case-insensitive)
pub fn find(method: &str) -> Option<&'static CallSpec> {
    CATALOGUE
        .iter()
        .copied()
        .find(|spec| spec.method.eq_ignore_ascii_case(method))
}

/// Walk `path` down the payload, failing when a step is missing
pub(crate) fn select(mut node: NormalizedNode, path: &[&str]) -> LastfmResult<NormalizedNode> {
    for key in path {
        node = node.take(key).ok_or_else(|| {
            LastfmError::UnexpectedResponse(format!("missing <{}> in response", key))
        })?;
    }
    Ok(node)
}

/// Like [`select`], but the last step yields a list
///
/// An absent last step is an empty list, a lone element a one-item list.
pub(crate) fn select_list(node: NormalizedNode, path: &[&str]) -> LastfmResult<Vec<NormalizedNode>> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(node.into_list());
    };

    let mut container = select(node, parents)?;
    Ok(container
        .take(last)
        .map(NormalizedNode::into_list)
        .unwrap_or_default())
}

/// Text of the node at `path`
pub(crate) fn select_text(node: NormalizedNode, path: &[&str]) -> LastfmResult<String> {
    match select(node, path)? {
        NormalizedNode::Text(text) => Ok(text),
        other => other.text().map(str::to_string).ok_or_else(|| {
            LastfmError::UnexpectedResponse(format!("expected text at {}", path.join(".")))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::LfmDocument;

    fn payload(xml: &str) -> NormalizedNode {
        LfmDocument::parse(xml).unwrap().into_payload()
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("artist.getInfo").map(|s| s.method), Some("artist.getInfo"));
        assert_eq!(find("ARTIST.GETINFO").map(|s| s.method), Some("artist.getInfo"));
        assert!(find("artist.getNothing").is_none());
    }

    #[test]
    fn test_catalogue_names_are_unique() {
        let mut names: Vec<&str> = CATALOGUE.iter().map(|spec| spec.method).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CATALOGUE.len());
    }

    #[test]
    fn test_select_missing_step() {
        let node = payload(r#"<lfm status="ok"><foo>bar</foo></lfm>"#);
        assert!(matches!(
            select(node, &["artist"]),
            Err(LastfmError::UnexpectedResponse(msg)) if msg.contains("artist")
        ));
    }

    #[test]
    fn test_select_list_shapes() {
        let many = payload(r#"<lfm status="ok"><toptags><tag>a</tag><tag>b</tag></toptags></lfm>"#);
        assert_eq!(select_list(many, &["toptags", "tag"]).unwrap().len(), 2);

        let one = payload(r#"<lfm status="ok"><toptags><tag>a</tag></toptags></lfm>"#);
        assert_eq!(select_list(one, &["toptags", "tag"]).unwrap().len(), 1);

        let none = payload(r#"<lfm status="ok"><toptags artist="Cher"/></lfm>"#);
        assert!(select_list(none, &["toptags", "tag"]).unwrap().is_empty());

        let empty = payload(r#"<lfm status="ok"><toptags></toptags></lfm>"#);
        assert!(select_list(empty, &["toptags", "tag"]).unwrap().is_empty());
    }

    #[test]
    fn test_select_text() {
        let node = payload(r#"<lfm status="ok"><token>xxxyyyzzz</token></lfm>"#);
        assert_eq!(select_text(node, &["token"]).unwrap(), "xxxyyyzzz");
    }
}

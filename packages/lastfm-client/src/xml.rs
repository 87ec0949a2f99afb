//! XML response normalization
//!
//! Last.fm answers every method with an `<lfm status="...">` document whose
//! shape depends on the data: a list of one `<track>` looks exactly like a
//! single nested `<track>`. Responses are therefore normalized into a
//! schema-less tree where the sibling count alone decides between a single
//! value and a sequence.
//!
//! Rules, per element:
//! - attributes and child elements share one mapping, keyed by name;
//! - a name seen more than once (attributes first, then children in
//!   document order) becomes a [`NormalizedNode::List`];
//! - text-only elements become [`NormalizedNode::Text`];
//! - text mixed with attributes or children is stored under `content`;
//! - element text is always trimmed, so whitespace-only text is empty.
//!
//! The payload of a document is built from the root's child elements only.
//! Root attributes such as `status` and `version` never appear in it.

use std::collections::{BTreeMap, HashMap};
use std::ops::Index;

use serde::Serialize;

use crate::error::{LastfmError, LastfmResult};

/// Key holding the text of an element that also has attributes or children
pub const CONTENT_KEY: &str = "content";

const ROOT_ELEMENT: &str = "lfm";

static EMPTY: NormalizedNode = NormalizedNode::Text(String::new());

/// A normalized response value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NormalizedNode {
    Text(String),
    Map(BTreeMap<String, NormalizedNode>),
    List(Vec<NormalizedNode>),
}

impl NormalizedNode {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            NormalizedNode::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, NormalizedNode>> {
        match self {
            NormalizedNode::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[NormalizedNode]> {
        match self {
            NormalizedNode::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, NormalizedNode::List(_))
    }

    /// Look up a key in a mapping
    pub fn get(&self, key: &str) -> Option<&NormalizedNode> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Look up a position in a sequence
    pub fn at(&self, index: usize) -> Option<&NormalizedNode> {
        self.as_list().and_then(|items| items.get(index))
    }

    /// Remove and return a key from a mapping
    pub fn take(&mut self, key: &str) -> Option<NormalizedNode> {
        match self {
            NormalizedNode::Map(map) => map.remove(key),
            _ => None,
        }
    }

    /// Text of this node, or of its `content` entry when it carries attributes
    pub fn text(&self) -> Option<&str> {
        match self {
            NormalizedNode::Text(text) => Some(text),
            NormalizedNode::Map(map) => map.get(CONTENT_KEY).and_then(NormalizedNode::as_text),
            NormalizedNode::List(_) => None,
        }
    }

    /// Number of entries (sequence items, mapping keys, 1 for text)
    pub fn len(&self) -> usize {
        match self {
            NormalizedNode::Text(_) => 1,
            NormalizedNode::Map(map) => map.len(),
            NormalizedNode::List(items) => items.len(),
        }
    }

    /// True for empty text, mappings and sequences
    pub fn is_empty(&self) -> bool {
        match self {
            NormalizedNode::Text(text) => text.is_empty(),
            NormalizedNode::Map(map) => map.is_empty(),
            NormalizedNode::List(items) => items.is_empty(),
        }
    }

    /// Sequence view: a lone value becomes a one-element list
    pub fn into_list(self) -> Vec<NormalizedNode> {
        match self {
            NormalizedNode::List(items) => items,
            single => vec![single],
        }
    }
}

/// Missing keys and out-of-range positions index to an empty text node,
/// mirroring `serde_json::Value`.
impl Index<&str> for NormalizedNode {
    type Output = NormalizedNode;

    fn index(&self, key: &str) -> &Self::Output {
        self.get(key).unwrap_or(&EMPTY)
    }
}

impl Index<usize> for NormalizedNode {
    type Output = NormalizedNode;

    fn index(&self, index: usize) -> &Self::Output {
        self.at(index).unwrap_or(&EMPTY)
    }
}

/// A parsed `<lfm>` response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LfmDocument {
    /// Value of the root `status` attribute, if present
    pub status: Option<String>,
    /// Root children keyed by element name (`artist`, `results`, `error`, ...)
    pub payload: NormalizedNode,
}

impl LfmDocument {
    /// Parse and normalize a raw response body
    ///
    /// # Errors
    /// - `LastfmError::Xml` if the body is not well-formed XML
    /// - `LastfmError::UnexpectedResponse` if the root element is not `lfm`
    pub fn parse(raw: &str) -> LastfmResult<Self> {
        let document = roxmltree::Document::parse(raw)?;
        let root = document.root_element();

        if root.tag_name().name() != ROOT_ELEMENT {
            return Err(LastfmError::UnexpectedResponse(format!(
                "expected <{}> root element, found <{}>",
                ROOT_ELEMENT,
                root.tag_name().name()
            )));
        }

        // Root attributes are envelope metadata; only `status` is kept.
        let status = root.attribute("status").map(str::to_string);
        let children: Vec<_> = root.children().filter(|c| c.is_element()).collect();
        let payload = NormalizedNode::Map(group_by_name(normalize_children(&children)));

        Ok(Self { status, payload })
    }

    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("ok")
    }

    pub fn into_payload(self) -> NormalizedNode {
        self.payload
    }
}

/// Normalize a single element (recursively)
pub fn normalize_element(element: roxmltree::Node<'_, '_>) -> NormalizedNode {
    let children: Vec<_> = element.children().filter(|c| c.is_element()).collect();
    let text: String = element
        .children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect();
    let text = text.trim();

    if children.is_empty() && element.attributes().next().is_none() {
        return NormalizedNode::Text(text.to_string());
    }

    let attributes = element.attributes().map(|attribute| {
        (
            attribute.name(),
            NormalizedNode::Text(attribute.value().to_string()),
        )
    });
    let mut map = group_by_name(attributes.chain(normalize_children(&children)).collect());

    if !text.is_empty() {
        map.entry(CONTENT_KEY.to_string())
            .or_insert_with(|| NormalizedNode::Text(text.to_string()));
    }

    NormalizedNode::Map(map)
}

fn normalize_children<'input>(
    children: &[roxmltree::Node<'_, 'input>],
) -> Vec<(&'input str, NormalizedNode)> {
    children
        .iter()
        .map(|child| (child.tag_name().name(), normalize_element(*child)))
        .collect()
}

/// Fold named values into one mapping; repeated names become sequences
/// in the order given.
fn group_by_name(entries: Vec<(&str, NormalizedNode)>) -> BTreeMap<String, NormalizedNode> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for (name, _) in &entries {
        *counts.entry(*name).or_default() += 1;
    }

    let mut map = BTreeMap::new();
    for (name, value) in entries {
        if counts.get(name).copied().unwrap_or(0) > 1 {
            let slot = map
                .entry(name.to_string())
                .or_insert_with(|| NormalizedNode::List(Vec::new()));
            if let NormalizedNode::List(items) = slot {
                items.push(value);
            }
        } else {
            map.insert(name.to_string(), value);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(xml: &str) -> NormalizedNode {
        LfmDocument::parse(xml).unwrap().into_payload()
    }

    #[test]
    fn test_status_is_lifted_out() {
        let document =
            LfmDocument::parse(r#"<?xml version="1.0"?><lfm status="ok"><foo>bar</foo></lfm>"#)
                .unwrap();
        assert!(document.is_ok());
        assert_eq!(document.payload["foo"].as_text(), Some("bar"));
        assert!(document.payload.get("status").is_none());
    }

    #[test]
    fn test_status_child_survives_root_status() {
        let document = LfmDocument::parse(
            r#"<lfm status="ok" version="2.0"><status>online</status><foo>bar</foo></lfm>"#,
        )
        .unwrap();
        assert_eq!(document.status.as_deref(), Some("ok"));
        assert_eq!(document.payload["status"].as_text(), Some("online"));
        assert_eq!(document.payload["foo"].as_text(), Some("bar"));
        assert!(document.payload.get("version").is_none());
    }

    #[test]
    fn test_empty_ok_response() {
        let document = LfmDocument::parse("<lfm status=\"ok\">\n</lfm>").unwrap();
        assert!(document.is_ok());
        assert!(document.payload.is_empty());
    }

    #[test]
    fn test_repeated_siblings_become_ordered_list() {
        let node = payload(
            r#"<lfm status="ok"><tags><tag>pop</tag><tag>dance</tag><tag>80s</tag></tags></lfm>"#,
        );
        let tags = &node["tags"]["tag"];
        assert!(tags.is_list());
        assert_eq!(tags.len(), 3);
        assert_eq!(tags[0].as_text(), Some("pop"));
        assert_eq!(tags[1].as_text(), Some("dance"));
        assert_eq!(tags[2].as_text(), Some("80s"));
    }

    #[test]
    fn test_single_child_stays_a_value() {
        let node = payload(r#"<lfm status="ok"><tags><tag><name>pop</name></tag></tags></lfm>"#);
        let tag = &node["tags"]["tag"];
        assert!(!tag.is_list());
        assert_eq!(tag["name"].as_text(), Some("pop"));
    }

    #[test]
    fn test_attributes_and_text_content() {
        let node = payload(
            r#"<lfm status="ok"><album>
                 <image size="small">http://example.com/34.jpg</image>
                 <image size="large">http://example.com/126.jpg</image>
               </album></lfm>"#,
        );
        let images = &node["album"]["image"];
        assert_eq!(images.len(), 2);
        assert_eq!(images[0]["size"].as_text(), Some("small"));
        assert_eq!(images[0]["content"].as_text(), Some("http://example.com/34.jpg"));
        assert_eq!(images[1].text(), Some("http://example.com/126.jpg"));
    }

    #[test]
    fn test_text_is_trimmed() {
        let node = payload(
            r#"<lfm status="ok"><user>
                 <realname> Richard Jones </realname>
                 <image size="small">
                   http://example.com/34.jpg
                 </image>
                 <bio>   </bio>
               </user></lfm>"#,
        );
        assert_eq!(node["user"]["realname"].as_text(), Some("Richard Jones"));
        assert_eq!(node["user"]["image"].text(), Some("http://example.com/34.jpg"));
        assert_eq!(node["user"]["bio"], NormalizedNode::Text(String::new()));
    }

    #[test]
    fn test_attribute_only_element() {
        let node = payload(r#"<lfm status="ok"><point lat="36.116143" long="-115.175"/></lfm>"#);
        assert_eq!(node["point"]["lat"].as_text(), Some("36.116143"));
        assert!(node["point"].get(CONTENT_KEY).is_none());
    }

    #[test]
    fn test_empty_element_is_empty_text() {
        let node = payload(r#"<lfm status="ok"><artist><mbid></mbid><url/></artist></lfm>"#);
        assert_eq!(node["artist"]["mbid"], NormalizedNode::Text(String::new()));
        assert_eq!(node["artist"]["url"], NormalizedNode::Text(String::new()));
    }

    #[test]
    fn test_attribute_and_children_with_same_name_merge() {
        let node = payload(
            r#"<lfm status="ok"><neighbours user="rj">
                 <user><name>willywongi</name></user>
                 <user><name>jrnbeck</name></user>
               </neighbours></lfm>"#,
        );
        let users = node["neighbours"]["user"].as_list().unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].as_text(), Some("rj"));
        assert_eq!(users[1]["name"].as_text(), Some("willywongi"));
    }

    #[test]
    fn test_cdata_text() {
        let node = payload(r#"<lfm status="ok"><bio><![CDATA[<b>Cher</b>]]></bio></lfm>"#);
        assert_eq!(node["bio"].as_text(), Some("<b>Cher</b>"));
    }

    #[test]
    fn test_malformed_xml_is_parse_error() {
        let result = LfmDocument::parse("<lfm status=\"ok\"><foo></lfm>");
        assert!(matches!(result, Err(LastfmError::Xml(_))));

        let result = LfmDocument::parse("not xml at all");
        assert!(matches!(result, Err(LastfmError::Xml(_))));
    }

    #[test]
    fn test_foreign_root_is_rejected() {
        let result = LfmDocument::parse("<html><body>Bad Gateway</body></html>");
        assert!(matches!(result, Err(LastfmError::UnexpectedResponse(_))));
    }

    #[test]
    fn test_index_missing_is_empty() {
        let node = payload(r#"<lfm status="ok"><foo>bar</foo></lfm>"#);
        assert!(node["nope"]["deeper"].is_empty());
        assert!(node["foo"][3].is_empty());
    }

    #[test]
    fn test_into_list_wraps_single_value() {
        let single = NormalizedNode::Text("pop".to_string());
        assert_eq!(single.into_list().len(), 1);

        let many = NormalizedNode::List(vec![
            NormalizedNode::Text("a".to_string()),
            NormalizedNode::Text("b".to_string()),
        ]);
        assert_eq!(many.into_list().len(), 2);
    }

    #[test]
    fn test_serializes_to_plain_json() {
        let node = payload(r#"<lfm status="ok"><tags><tag>a</tag><tag>b</tag></tags></lfm>"#);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json, serde_json::json!({ "tags": { "tag": ["a", "b"] } }));
    }
}

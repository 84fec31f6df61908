//! Owned element tree for controller responses.
//!
//! Responses are parsed once into [`XmlNode`] values so callers can walk
//! optional branches without juggling document lifetimes. Lookups follow the
//! `.//a/b` convention: the first path segment matches any descendant, the
//! remaining segments match direct children.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn parse(body: &str) -> Result<Self, roxmltree::Error> {
        let document = roxmltree::Document::parse(body)?;
        Ok(Self::from_element(document.root_element()))
    }

    fn from_element(node: roxmltree::Node<'_, '_>) -> Self {
        Self {
            name: node.tag_name().name().to_string(),
            attributes: node
                .attributes()
                .map(|attr| (attr.name().to_string(), attr.value().to_string()))
                .collect(),
            text: node.text().map(str::to_string),
            children: node
                .children()
                .filter(|child| child.is_element())
                .map(Self::from_element)
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Element text; an element with no text yields `""`.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(XmlNode::text)
    }

    /// First match for `path` anywhere below this node.
    pub fn find(&self, path: &str) -> Option<&XmlNode> {
        self.find_all(path).into_iter().next()
    }

    pub fn find_text(&self, path: &str) -> Option<&str> {
        self.find(path).map(XmlNode::text)
    }

    /// All matches for `path` below this node, in document order.
    pub fn find_all(&self, path: &str) -> Vec<&XmlNode> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let Some(first) = segments.next() else {
            return Vec::new();
        };
        let rest: Vec<&str> = segments.collect();

        let mut matches = Vec::new();
        self.visit_descendants(&mut |node| {
            if node.name == first {
                node.collect_path(&rest, &mut matches);
            }
        });
        matches
    }

    fn visit_descendants<'a>(&'a self, visit: &mut impl FnMut(&'a XmlNode)) {
        for child in &self.children {
            visit(child);
            child.visit_descendants(visit);
        }
    }

    fn collect_path<'a>(&'a self, rest: &[&str], out: &mut Vec<&'a XmlNode>) {
        match rest.split_first() {
            None => out.push(self),
            Some((head, tail)) => {
                for child in self.children.iter().filter(|c| c.name == *head) {
                    child.collect_path(tail, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <response status="success">
          <result>
            <devicegroups>
              <entry name="branch">
                <devices>
                  <entry name="001"><connected>yes</connected></entry>
                  <entry name="002"><connected/></entry>
                </devices>
              </entry>
              <entry name="dc">
                <devices><entry name="003"/></devices>
              </entry>
            </devicegroups>
          </result>
        </response>"#;

    #[test]
    fn test_parse_root_attributes() {
        let root = XmlNode::parse(SAMPLE).unwrap();
        assert_eq!(root.name(), "response");
        assert_eq!(root.attr("status"), Some("success"));
        assert_eq!(root.attr("missing"), None);
    }

    #[test]
    fn test_find_all_preserves_document_order() {
        let root = XmlNode::parse(SAMPLE).unwrap();
        let names: Vec<_> = root
            .find_all("devices/entry")
            .iter()
            .filter_map(|n| n.attr("name"))
            .collect();
        assert_eq!(names, vec!["001", "002", "003"]);

        let groups: Vec<_> = root
            .find_all("devicegroups/entry")
            .iter()
            .filter_map(|n| n.attr("name"))
            .collect();
        assert_eq!(groups, vec!["branch", "dc"]);
    }

    #[test]
    fn test_missing_and_empty_text() {
        let root = XmlNode::parse(SAMPLE).unwrap();
        let devices = root.find_all("devices/entry");
        assert_eq!(devices[0].child_text("connected"), Some("yes"));
        assert_eq!(devices[1].child_text("connected"), Some(""));
        assert_eq!(devices[2].child_text("connected"), None);
    }

    #[test]
    fn test_find_single_segment_matches_any_depth() {
        let root =
            XmlNode::parse(r#"<response><result><job>42</job></result></response>"#).unwrap();
        assert_eq!(root.find_text("job"), Some("42"));
        assert!(root.find("nothing").is_none());
        assert!(root.find_all("").is_empty());
    }

    #[test]
    fn test_entities_are_unescaped() {
        let root = XmlNode::parse(r#"<a><entry name="R&amp;D &lt;east&gt;">x &amp; y</entry></a>"#)
            .unwrap();
        let entry = root.child("entry").unwrap();
        assert_eq!(entry.attr("name"), Some("R&D <east>"));
        assert_eq!(entry.text(), "x & y");
    }

    #[test]
    fn test_parse_rejects_malformed_body() {
        assert!(XmlNode::parse("<response><unclosed></response>").is_err());
        assert!(XmlNode::parse("").is_err());
    }
}

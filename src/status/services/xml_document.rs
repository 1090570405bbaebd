use crate::shared::error::StatusError;
use crate::shared::Result;
use std::collections::BTreeMap;

/// An owned XML element with namespace prefixes stripped from its name and
/// attribute names, so path lookups are namespace-agnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    /// Trimmed direct text content; `None` when empty
    pub text: Option<String>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let attributes = node
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect();

        let text: String = node
            .children()
            .filter(|child| child.is_text())
            .filter_map(|child| child.text())
            .collect();
        let text = Some(text.trim().to_string()).filter(|t| !t.is_empty());

        let children = node
            .children()
            .filter(|child| child.is_element())
            .map(XmlElement::from_node)
            .collect();

        Self {
            name: node.tag_name().name().to_string(),
            attributes,
            text,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// All descendants reached by a `/`-separated path of child names
    pub fn find_all(&self, path: &str) -> Vec<&XmlElement> {
        let mut current = vec![self];
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current
                .into_iter()
                .flat_map(|el| el.children.iter().filter(|c| c.name == segment))
                .collect();
        }
        current
    }
}

/// A parsed tree document with singular-field lookups.
#[derive(Debug, Clone)]
pub struct XmlDocument {
    source_name: String,
    root: XmlElement,
}

impl XmlDocument {
    pub fn parse(content: &str, source_name: &str) -> Result<Self> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let doc = roxmltree::Document::parse_with_options(content, options).map_err(|e| {
            StatusError::ManifestParseError {
                source_name: source_name.to_string(),
                details: e.to_string(),
            }
        })?;

        Ok(Self {
            source_name: source_name.to_string(),
            root: XmlElement::from_node(doc.root_element()),
        })
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Elements at `path`, relative to the document root
    pub fn elements(&self, path: &str) -> Vec<&XmlElement> {
        self.root.find_all(path)
    }

    /// Text of the single element at `path`.
    ///
    /// Zero matches is `Ok(None)`. More than one match is a modeling
    /// violation and fails rather than picking one.
    pub fn value(&self, path: &str) -> Result<Option<String>> {
        let found = self.elements(path);
        match found.as_slice() {
            [] => Ok(None),
            [single] => Ok(single.text.clone()),
            many => Err(StatusError::DuplicateField {
                source_name: self.source_name.clone(),
                field: path.to_string(),
                count: many.len(),
            }
            .into()),
        }
    }
}

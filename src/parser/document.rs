use crate::error::ParseError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

type NodeId = usize;

#[derive(Debug)]
enum Content {
    Element(NodeId),
    Text(String),
}

#[derive(Debug)]
struct ElementData {
    name: String,
    attributes: Vec<(String, String)>,
    parent: Option<NodeId>,
    content: Vec<Content>,
}

/// In-memory element tree of an XML log
///
/// Elements are stored in document order, so iterating the arena is a
/// depth-first pre-order traversal.
#[derive(Debug)]
pub struct LogDocument {
    elements: Vec<ElementData>,
}

/// Borrowed handle to one element of a [`LogDocument`]
#[derive(Debug, Clone, Copy)]
pub struct Element<'d> {
    doc: &'d LogDocument,
    id: NodeId,
}

impl LogDocument {
    pub fn parse(xml: &str) -> Result<Self, ParseError> {
        let mut reader = Reader::from_str(xml);
        let decoder = reader.decoder();

        let mut elements: Vec<ElementData> = Vec::new();
        let mut open: Vec<NodeId> = Vec::new();

        loop {
            let position = reader.buffer_position();
            let xml_err = |source: quick_xml::Error| ParseError::Xml { position, source };

            match reader.read_event().map_err(xml_err)? {
                Event::Start(start) => {
                    let id = push_element(&mut elements, &open, &start, decoder, position)?;
                    open.push(id);
                }
                Event::Empty(start) => {
                    push_element(&mut elements, &open, &start, decoder, position)?;
                }
                Event::End(end) => {
                    if open.pop().is_none() {
                        let name = decoder.decode(end.name().as_ref()).map_err(xml_err)?.into_owned();
                        return Err(ParseError::UnexpectedEndTag {
                            name,
                            position,
                        });
                    }
                }
                Event::Text(text) => {
                    let text = text.unescape().map_err(xml_err)?;
                    push_text(&mut elements, &open, &text, position)?;
                }
                Event::CData(cdata) => {
                    let raw = cdata.into_inner();
                    let text = decoder.decode(&raw).map_err(xml_err)?;
                    push_text(&mut elements, &open, &text, position)?;
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctype
                _ => {}
            }
        }

        if let Some(&id) = open.last() {
            return Err(ParseError::UnclosedElement {
                name: elements[id].name.clone(),
            });
        }
        if elements.is_empty() {
            return Err(ParseError::NoRootElement);
        }

        Ok(Self { elements })
    }

    /// All elements with the given name, in document order
    pub fn elements_named<'d>(&'d self, name: &'d str) -> impl Iterator<Item = Element<'d>> + 'd {
        (0..self.elements.len())
            .map(move |id| Element { doc: self, id })
            .filter(move |e| e.name() == name)
    }

    #[cfg(test)]
    fn root(&self) -> Element<'_> {
        Element { doc: self, id: 0 }
    }
}

fn push_element(
    elements: &mut Vec<ElementData>,
    open: &[NodeId],
    start: &BytesStart<'_>,
    decoder: quick_xml::encoding::Decoder,
    position: usize,
) -> Result<NodeId, ParseError> {
    let xml_err = |source: quick_xml::Error| ParseError::Xml { position, source };
    let parent = open.last().copied();

    if parent.is_none() && !elements.is_empty() {
        return Err(ParseError::MultipleRootElements { position });
    }

    let name = decoder.decode(start.name().as_ref()).map_err(xml_err)?.into_owned();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| xml_err(e.into()))?;
        let key = decoder.decode(attr.key.as_ref()).map_err(xml_err)?.into_owned();
        let value = attr.unescape_value().map_err(xml_err)?.into_owned();
        attributes.push((key, value));
    }

    let id = elements.len();
    elements.push(ElementData {
        name,
        attributes,
        parent,
        content: Vec::new(),
    });
    if let Some(parent) = parent {
        elements[parent].content.push(Content::Element(id));
    }

    Ok(id)
}

fn push_text(
    elements: &mut [ElementData],
    open: &[NodeId],
    text: &str,
    position: usize,
) -> Result<(), ParseError> {
    match open.last() {
        Some(&id) => {
            elements[id].content.push(Content::Text(text.to_string()));
            Ok(())
        }
        // Whitespace around the root element is insignificant
        None if text.trim().is_empty() => Ok(()),
        None => Err(ParseError::TextOutsideRoot { position }),
    }
}

impl<'d> Element<'d> {
    pub fn name(&self) -> &'d str {
        &self.data().name
    }

    pub fn attribute(&self, name: &str) -> Option<&'d str> {
        self.data()
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn parent(&self) -> Option<Element<'d>> {
        self.data().parent.map(|id| Element { doc: self.doc, id })
    }

    /// Concatenated text of this element and all its descendants
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for content in &self.data().content {
            match content {
                Content::Text(text) => out.push_str(text),
                Content::Element(id) => Element { doc: self.doc, id: *id }.collect_text(out),
            }
        }
    }

    fn data(&self) -> &'d ElementData {
        &self.doc.elements[self.id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tree_and_parent_links() {
        let doc = LogDocument::parse(
            r#"<?xml version="1.0" encoding="utf-8"?>
<build>
  <project file="/repo/src/App.csproj">
    <target name="Build">
      <warning code="CA1000" line="3">first</warning>
    </target>
    <warning code="CA2000"/>
  </project>
</build>"#,
        )
        .unwrap();

        assert_eq!(doc.root().name(), "build");
        let warnings: Vec<_> = doc.elements_named("warning").collect();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].attribute("code"), Some("CA1000"));
        assert_eq!(warnings[0].text(), "first");
        assert_eq!(warnings[0].parent().unwrap().name(), "target");
        assert_eq!(
            warnings[1].parent().unwrap().attribute("file"),
            Some("/repo/src/App.csproj")
        );
        assert_eq!(warnings[1].text(), "");
        assert_eq!(
            doc.root().text(),
            "\n  \n    \n      first\n    \n    \n  \n"
        );
    }

    #[test]
    fn test_whitespace_inside_elements_is_kept() {
        let doc = LogDocument::parse(
            r#"<build><warning code="X">foo<b>x</b> <b>y</b></warning><warning code="Y">  </warning></build>"#,
        )
        .unwrap();

        let texts: Vec<_> = doc.elements_named("warning").map(|w| w.text()).collect();
        assert_eq!(texts, vec!["foox y", "  "]);
    }

    #[test]
    fn test_document_order_for_nested_matches() {
        let doc = LogDocument::parse(
            r#"<warning code="outer">a<warning code="inner">b</warning>c</warning>"#,
        )
        .unwrap();

        let codes: Vec<_> = doc
            .elements_named("warning")
            .map(|w| w.attribute("code").unwrap())
            .collect();
        assert_eq!(codes, vec!["outer", "inner"]);
        assert_eq!(doc.root().text(), "abc");
        assert!(doc.root().parent().is_none());
    }

    #[test]
    fn test_text_is_unescaped() {
        let doc = LogDocument::parse(
            r#"<warning file="a &amp; b.cs">Use &lt;T&gt; <![CDATA[<raw>]]></warning>"#,
        )
        .unwrap();

        assert_eq!(doc.root().attribute("file"), Some("a & b.cs"));
        assert_eq!(doc.root().text(), "Use <T> <raw>");
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            LogDocument::parse("<build><warning></build>"),
            Err(ParseError::Xml { .. })
        ));
        assert!(matches!(
            LogDocument::parse("<build>"),
            Err(ParseError::UnclosedElement { .. })
        ));
        assert!(matches!(LogDocument::parse(""), Err(ParseError::NoRootElement)));
        assert!(matches!(
            LogDocument::parse("<a/><b/>"),
            Err(ParseError::MultipleRootElements { .. })
        ));
        assert!(matches!(
            LogDocument::parse("not xml"),
            Err(ParseError::TextOutsideRoot { .. })
        ));
    }
}

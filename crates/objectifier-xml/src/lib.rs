//! XML to [`Value`] conversion.
//!
//! [`arrayify`] turns an XML document into nested [`Obj`]/[`Array`] values
//! without a schema. Only element names, element text and element nesting
//! are looked at: attributes, comments, processing instructions and
//! namespaces are ignored.
//!
//! Shape rules for an element `E`:
//!
//! - no child elements: `{E: text}` (`nil` when `E` has no text)
//! - two or more children, all with the same tag `T`: `{E: {T: [..]}}`
//! - anything else: `{E: {..}}` with the children merged, later siblings
//!   replacing earlier ones that share a tag
//!
//! A repeatable element that happens to occur once is therefore not
//! wrapped in a list.

use log::trace;
use objectifier_val::{Array, Obj, Value};
use roxmltree::{Document, Node, ParsingOptions};

pub use roxmltree::Error;

/// Parse `text` as XML and convert its root element.
///
/// The result is always a single-entry mapping keyed by the root tag.
pub fn arrayify(text: &str) -> Result<Obj, Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options)?;
    Ok(arrayify_element(doc.root_element()))
}

/// Convert one element node. See the crate docs for the shape rules.
pub fn arrayify_element(node: Node<'_, '_>) -> Obj {
    let tag = node.tag_name().name();
    let children: Vec<Node> = node.children().filter(Node::is_element).collect();

    if children.is_empty() {
        let text = Value::from(node.text());
        return Obj::new().with(tag, text);
    }

    if children.len() > 1 && same_tag(&children) {
        let child_tag = children[0].tag_name().name();
        trace!("<{}>: {} <{}> children as list", tag, children.len(), child_tag);
        let items: Array = children
            .iter()
            .map(|child| arrayify_element(*child).get_or_nil(child_tag))
            .collect();
        return Obj::new().with(tag, Obj::new().with(child_tag, items));
    }

    trace!("<{}>: merging {} children", tag, children.len());
    let mut merged = Obj::new();
    for child in children {
        merged.merge(arrayify_element(child));
    }
    Obj::new().with(tag, merged)
}

fn same_tag(nodes: &[Node<'_, '_>]) -> bool {
    nodes
        .windows(2)
        .all(|w| w[0].tag_name().name() == w[1].tag_name().name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn obj(key: &str, value: impl Into<Value>) -> Obj {
        Obj::new().with(key, value)
    }

    #[test]
    fn test_homogeneous_children_become_list() {
        let result = arrayify("<a><b>1</b><b>2</b></a>").unwrap();
        let expected = obj("a", obj("b", vec!["1", "2"]));
        assert_eq!(result, expected);
    }

    #[test]
    fn test_heterogeneous_children_merge() {
        let result = arrayify("<a><b>1</b><c>2</c></a>").unwrap();
        let expected = obj("a", Obj::new().with("b", "1").with("c", "2"));
        assert_eq!(result, expected);
    }

    #[test]
    fn test_single_child_not_list() {
        let result = arrayify("<a><b><c>1</c></b></a>").unwrap();
        let expected = obj("a", obj("b", obj("c", "1")));
        assert_eq!(result, expected);
    }

    #[test]
    fn test_single_repeatable_child_stays_bare() {
        let one = arrayify("<items><item>x</item></items>").unwrap();
        assert_eq!(one, obj("items", obj("item", "x")));

        let two = arrayify("<items><item>x</item><item>y</item></items>").unwrap();
        assert_eq!(two, obj("items", obj("item", vec!["x", "y"])));
    }

    #[test]
    fn test_empty_elements_are_nil() {
        assert_eq!(arrayify("<a/>").unwrap(), obj("a", Value::Nil));
        assert_eq!(arrayify("<a></a>").unwrap(), obj("a", Value::Nil));
    }

    #[test]
    fn test_list_of_records() {
        let xml = r#"
            <users>
                <user><name>ann</name><id>1</id></user>
                <user><name>bob</name><id>2</id></user>
            </users>
        "#;
        let result = arrayify(xml).unwrap();
        let expected = obj(
            "users",
            obj(
                "user",
                vec![
                    Value::from(Obj::new().with("name", "ann").with("id", "1")),
                    Value::from(Obj::new().with("name", "bob").with("id", "2")),
                ],
            ),
        );
        assert_eq!(result, expected);
    }

    #[test]
    fn test_later_sibling_overwrites() {
        let result = arrayify("<a><b>1</b><c>2</c><b>3</b></a>").unwrap();
        let expected = obj("a", Obj::new().with("b", "3").with("c", "2"));
        assert_eq!(result, expected);
    }

    #[test]
    fn test_attributes_ignored() {
        let result = arrayify(r#"<a id="7"><b kind="x">1</b></a>"#).unwrap();
        assert_eq!(result, obj("a", obj("b", "1")));
    }

    #[test]
    fn test_doctype_accepted() {
        let xml = "<?xml version=\"1.0\"?><!DOCTYPE a><a><b>1</b></a>";
        assert_eq!(arrayify(xml).unwrap(), obj("a", obj("b", "1")));
    }

    #[test]
    fn test_malformed_is_error() {
        assert!(arrayify("<a><b></a>").is_err());
        assert!(arrayify("not json, not <xml").is_err());
        assert!(arrayify("").is_err());
    }
}

//! Message Formatter
//!
//! Renders the decoded payload text followed by a fenced block listing
//! each attribute. Slack renders the fenced block as monospaced.

use crate::envelope::Attributes;

/// Render the message body: the payload text, then one `\t{key}: {value}`
/// line per attribute inside a code fence, in the map's order.
pub fn render_message(text: &str, attributes: &Attributes) -> String {
    let mut message = String::with_capacity(text.len() + 64);
    message.push_str(text);
    message.push_str("\n```");

    for (key, value) in attributes.iter() {
        message.push_str("\n\t");
        message.push_str(key);
        message.push_str(": ");
        message.push_str(value);
    }

    message.push_str("\n```");
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_attributes_render_empty_fence() {
        let rendered = render_message("hello", &Attributes::new());
        assert_eq!(rendered, "hello\n```\n```");
    }

    #[test]
    fn attributes_render_one_line_each_in_order() {
        let mut attributes = Attributes::new();
        attributes.insert("a", "1");
        attributes.insert("b", "2");

        let rendered = render_message("hello", &attributes);
        assert_eq!(rendered, "hello\n```\n\ta: 1\n\tb: 2\n```");
    }

    #[test]
    fn insertion_order_is_preserved_in_output() {
        let mut attributes = Attributes::new();
        attributes.insert("type_url", "some.Event");
        attributes.insert("cluster_name", "prod-eu");

        let rendered = render_message("Node pool upgraded", &attributes);
        let type_line = rendered.find("\ttype_url: some.Event").unwrap();
        let cluster_line = rendered.find("\tcluster_name: prod-eu").unwrap();
        assert!(type_line < cluster_line);
    }
}

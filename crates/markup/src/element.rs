use crate::node::MarkupBuilder;
use crate::text::{Text, escape};

/// Builder for a single HTML element and its subtree.
pub struct Element {
    tag: &'static str,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Box<dyn MarkupBuilder>>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            classes: vec![],
            attributes: vec![],
            children: vec![],
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, name: &str) -> Self {
        self.classes.push(name.to_string());
        self
    }

    /// Adds an attribute. The value is escaped; names are fixed by the caller.
    pub fn attr(mut self, name: &'static str, value: &str) -> Self {
        self.attributes.push((name, value.to_string()));
        self
    }

    pub fn child(mut self, child: impl MarkupBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn children<I, B>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: MarkupBuilder + 'static,
    {
        self.children
            .extend(children.into_iter().map(|c| Box::new(c) as Box<dyn MarkupBuilder>));
        self
    }

    pub fn text(self, content: &str) -> Self {
        self.child(Text::new(content))
    }
}

impl MarkupBuilder for Element {
    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if let Some(id) = &self.id {
            push_attribute(out, "id", id);
        }
        if !self.classes.is_empty() {
            push_attribute(out, "class", &self.classes.join(" "));
        }
        for (name, value) in &self.attributes {
            push_attribute(out, name, value);
        }
        out.push('>');
        for child in &self.children {
            child.render_into(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_elements() {
        let html = Element::new("ul")
            .id("list")
            .class("a")
            .class("b")
            .child(Element::new("li").text("one"))
            .child(Element::new("li").text("two"))
            .render();
        assert_eq!(
            html,
            r#"<ul id="list" class="a b"><li>one</li><li>two</li></ul>"#
        );
    }

    #[test]
    fn test_attribute_cannot_break_out_of_quotes() {
        let html = Element::new("a")
            .attr("href", "x\" onclick=\"steal()")
            .text("go")
            .render();
        assert!(!html.contains("\" onclick"));
        assert!(html.contains("&quot;"));
    }

    #[test]
    fn test_children_keep_order() {
        let items = ["c", "a", "b", "a"];
        let html = Element::new("div")
            .children(items.iter().map(|i| Element::new("span").text(i)))
            .render();
        assert_eq!(
            html,
            "<div><span>c</span><span>a</span><span>b</span><span>a</span></div>"
        );
    }
}

use crate::node::MarkupBuilder;

/// Escapes a value for use in HTML text or a quoted attribute.
pub fn escape(value: &str) -> String {
    handlebars::html_escape(value)
}

/// Literal text. Always escaped on output.
#[derive(Clone)]
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

impl MarkupBuilder for Text {
    fn render_into(&self, out: &mut String) {
        out.push_str(&escape(&self.content));
    }
}

/// Static markup written verbatim, e.g. an embedded stylesheet.
#[derive(Clone, Copy)]
pub struct Raw {
    markup: &'static str,
}

impl Raw {
    pub fn trusted(markup: &'static str) -> Self {
        Self { markup }
    }
}

impl MarkupBuilder for Raw {
    fn render_into(&self, out: &mut String) {
        out.push_str(self.markup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        let html = Text::new("<script>alert('x')</script> & more").render();
        assert!(!html.contains('<'));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; more"));
    }

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(Text::new("Built X").render(), "Built X");
        assert_eq!(Text::new("2020–2023 · ⚙").render(), "2020–2023 · ⚙");
    }

    #[test]
    fn test_raw_is_verbatim() {
        assert_eq!(Raw::trusted("<br>").render(), "<br>");
    }
}

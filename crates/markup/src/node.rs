/// Anything that can write itself as HTML.
///
/// Implementations must be deterministic: rendering the same builder twice
/// produces byte-identical output.
pub trait MarkupBuilder {
    fn render_into(&self, out: &mut String);

    fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

impl MarkupBuilder for Box<dyn MarkupBuilder> {
    fn render_into(&self, out: &mut String) {
        (**self).render_into(out)
    }
}

/// A sequence of siblings with no wrapping element.
#[derive(Default)]
pub struct Fragment {
    children: Vec<Box<dyn MarkupBuilder>>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
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
}

impl MarkupBuilder for Fragment {
    fn render_into(&self, out: &mut String) {
        for child in &self.children {
            child.render_into(out);
        }
    }
}

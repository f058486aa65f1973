use crate::element::Element;
use crate::url::safe_href;

// Plain elements
pub fn div() -> Element {
    Element::new("div")
}

pub fn span() -> Element {
    Element::new("span")
}

pub fn p(text: &str) -> Element {
    Element::new("p").text(text)
}

pub fn h1() -> Element {
    Element::new("h1")
}

pub fn h2(text: &str) -> Element {
    Element::new("h2").text(text)
}

pub fn h3(text: &str) -> Element {
    Element::new("h3").text(text)
}

pub fn ul() -> Element {
    Element::new("ul")
}

pub fn li(text: &str) -> Element {
    Element::new("li").text(text)
}

pub fn strong(text: &str) -> Element {
    Element::new("strong").text(text)
}

pub fn button() -> Element {
    Element::new("button")
}

pub fn nav() -> Element {
    Element::new("nav")
}

pub fn footer() -> Element {
    Element::new("footer")
}

/// A `<section>` carrying its anchor id.
pub fn section(id: &str) -> Element {
    Element::new("section").id(id)
}

/// A link whose target passes through [`safe_href`].
pub fn a(href: &str) -> Element {
    Element::new("a").attr("href", &safe_href(href))
}

/// A link that opens in a new tab without handing over `window.opener`.
pub fn external_link(href: &str) -> Element {
    a(href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
}

/// A `div` with a class and a single text child.
pub fn text_div(class: &str, text: &str) -> Element {
    div().class(class).text(text)
}

//! The DOM page host.
//!
//! Owns the page root element, mounts composed markup into it and attaches
//! the page behaviour. Event listeners live as long as the page, so their
//! closures are leaked with [`Closure::forget`].

use crate::control::{AlertNotifier, ButtonControl};
use crate::error::{FolioError, describe_js};
use crate::renderer::Html2PdfRenderer;
use folio_core::{AppError, AppOptions, PageHost};
use folio_interact::{
    EmphasisAnimation, ExportOrchestrator, IntersectionEntry, NavToggle, PointerEvent,
    RevealOptions, RevealTracker,
};
use folio_page::ids;
use folio_types::Profile;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};

type BrowserExport = ExportOrchestrator<Html2PdfRenderer, ButtonControl, AlertNotifier>;

pub struct DomPageHost {
    options: AppOptions,
    document: Document,
    root: Element,
    nav: Rc<RefCell<NavToggle>>,
}

impl DomPageHost {
    /// Looks up the page root named by `options`.
    pub fn new(options: AppOptions) -> Result<Self, FolioError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| FolioError::dom("No document available"))?;
        let root = document
            .get_element_by_id(&options.root_id)
            .ok_or_else(|| FolioError::from(AppError::MissingElement(options.root_id.clone())))?;

        Ok(Self {
            options,
            document,
            root,
            nav: Rc::new(RefCell::new(NavToggle::new())),
        })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn is_nav_expanded(&self) -> bool {
        self.nav.borrow().is_expanded()
    }

    fn required(&self, id: &str) -> Result<Element, AppError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| AppError::MissingElement(id.to_string()))
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            log::warn!("Invalid selector: {}", selector);
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn wire_navigation(&self) -> Result<(), AppError> {
        let toggle = self.required(&self.options.nav_toggle_id)?;
        let links = self.required(&self.options.nav_links_id)?;

        let nav = Rc::clone(&self.nav);
        let list = links.clone();
        listen(&toggle, "click", move || {
            let expanded = nav.borrow_mut().toggle();
            if let Err(e) = list.class_list().toggle_with_force(ids::NAV_EXPANDED_CLASS, expanded) {
                log::warn!("Could not toggle navigation: {}", describe_js(&e));
            }
        });

        let selector = format!("#{} a", self.options.nav_links_id);
        for link in self.query_all(&selector) {
            let nav = Rc::clone(&self.nav);
            let list = links.clone();
            listen(&link, "click", move || {
                nav.borrow_mut().collapse();
                list.class_list().remove_1(ids::NAV_EXPANDED_CLASS).ok();
            });
        }
        Ok(())
    }

    fn wire_emphasis(&self) {
        let Some(target) = self
            .document
            .query_selector(&self.options.emphasis_selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            log::debug!("No emphasis element, skipping hover effect");
            return;
        };

        for (event_name, event) in [("mouseenter", PointerEvent::Enter), ("mouseleave", PointerEvent::Leave)] {
            let element = target.clone();
            listen(&target, event_name, move || {
                let animation = EmphasisAnimation::for_event(event).css();
                element.style().set_property("animation", animation).ok();
            });
        }
    }

    fn wire_export(&self, profile: &Arc<Profile>) {
        let Some(button) = self
            .document
            .get_element_by_id(&self.options.export_trigger_id)
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        else {
            log::debug!("No export trigger, skipping export wiring");
            return;
        };

        let orchestrator: Rc<BrowserExport> = Rc::new(ExportOrchestrator::new(
            Html2PdfRenderer,
            ButtonControl::new(button.clone()),
            AlertNotifier,
        ));
        let profile = Arc::clone(profile);
        listen(&button, "click", move || {
            let orchestrator = Rc::clone(&orchestrator);
            let profile = Arc::clone(&profile);
            wasm_bindgen_futures::spawn_local(async move {
                // Failures are logged and surfaced by the orchestrator.
                let _ = orchestrator.export_document(&profile).await;
            });
        });
    }

    fn reveal_immediately(blocks: &[Element]) {
        for block in blocks {
            block.class_list().add_1(ids::VISIBLE_CLASS).ok();
        }
    }
}

impl PageHost for DomPageHost {
    fn mount(&mut self, markup: &str) {
        self.root.set_inner_html(markup);
        self.root
            .class_list()
            .remove_1(&self.options.loading_class)
            .ok();
    }

    fn wire_interactions(&mut self, profile: &Arc<Profile>) -> Result<(), AppError> {
        self.wire_navigation()?;
        self.wire_emphasis();
        self.wire_export(profile);
        Ok(())
    }

    fn activate_reveal(&mut self) {
        let blocks = self.query_all(&format!(".{}", ids::REVEAL_CLASS));
        let mut tracker = RevealTracker::new(RevealOptions::default());
        for block in &blocks {
            tracker.observe(block.clone());
        }

        let window = match web_sys::window() {
            Some(window) => window,
            None => return Self::reveal_immediately(&blocks),
        };
        let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            log::info!("IntersectionObserver unavailable, revealing {} blocks", blocks.len());
            Self::reveal_immediately(&tracker.reveal_all());
            return;
        }

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(tracker.options().threshold));
        init.set_root_margin(tracker.options().root_margin);

        let tracker = Rc::new(RefCell::new(tracker));
        let state = Rc::clone(&tracker);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let batch: Vec<IntersectionEntry<Element>> = entries
                    .iter()
                    .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| IntersectionEntry {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    })
                    .collect();
                for element in state.borrow_mut().on_intersections(&batch) {
                    element.class_list().add_1(ids::VISIBLE_CLASS).ok();
                    observer.unobserve(&element);
                }
            },
        );

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                for block in &blocks {
                    observer.observe(block);
                }
                callback.forget();
                log::debug!("Observing {} reveal blocks", blocks.len());
            }
            Err(e) => {
                log::warn!("Could not create IntersectionObserver: {}", describe_js(&e));
                Self::reveal_immediately(&tracker.borrow_mut().reveal_all());
            }
        }
    }
}

fn listen(target: &Element, event: &str, handler: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut()>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("Could not attach {} listener: {}", event, describe_js(&e));
    }
    closure.forget();
}

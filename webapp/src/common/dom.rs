use std::{cell::RefCell, rc::Rc};

use js_sys::Array;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use portfolio_common::{
    config::RevealConfig,
    nav::{ClickSite, ScrollSurface},
    reveal::{RevealAnimator, RevealTarget, VisibilityObserver},
    theme::ThemeRoot,
};

// assigned to every animatable element so intersection entries can be mapped back to a key
pub const REVEAL_KEY_ATTRIBUTE: &str = "data-reveal-key";

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

// the <html> element
#[derive(Clone, Copy, Debug)]
pub struct DocumentRoot;

impl ThemeRoot for DocumentRoot {
    fn set_theme_attribute(&self, attribute: &str, value: &str) {
        let Some(root) = document().and_then(|d| d.document_element()) else {
            debug!("no document root, skipping theme attribute");
            return;
        };

        if let Err(err) = root.set_attribute(attribute, value) {
            debug!("failed to set {attribute} on document root, skipping: {err:?}");
        }
    }
}

// the live document, for in-page anchor navigation
#[derive(Clone, Copy, Debug)]
pub struct PageSurface;

impl ScrollSurface for PageSurface {
    type Target = Element;

    fn find_target(&self, fragment: &str) -> Option<Element> {
        document()?.get_element_by_id(fragment)
    }

    fn scroll_into_view(&self, target: &Element) {
        let options = ScrollIntoViewOptions::new();

        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);

        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

// re-queries both elements on every call, so markup changes between clicks are picked up
pub fn click_site(event: &Event, container_selector: &str, toggle_selector: &str) -> ClickSite {
    let document = document();
    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());

    let contains = |selector: &str| -> Option<bool> {
        let element = document.as_ref()?.query_selector(selector).ok()??;
        Some(element.contains(target.as_ref()))
    };

    ClickSite {
        in_nav: contains(container_selector),
        in_toggle: contains(toggle_selector),
    }
}

#[derive(Debug)]
pub struct DomObserver {
    observer: IntersectionObserver,
}

impl VisibilityObserver for DomObserver {
    type Element = Element;

    fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }
}

fn add_class(element: &Element, class: &str) {
    if let Err(err) = element.class_list().add_1(class) {
        debug!("failed to add class {class}, skipping: {err:?}");
    }
}

#[derive(Debug)]
pub struct ClassTarget {
    pending: String,
    revealed: String,
}

impl RevealTarget for ClassTarget {
    type Element = Element;

    fn mark_pending(&self, element: &Element) {
        add_class(element, &self.pending);
    }

    fn mark_revealed(&self, element: &Element) {
        add_class(element, &self.revealed);
    }
}

type PageAnimator = RevealAnimator<u32, DomObserver, ClassTarget>;

fn reveal_key(element: &Element) -> Option<u32> {
    element.get_attribute(REVEAL_KEY_ATTRIBUTE)?.parse().ok()
}

// reveal binding
//
// one intersection observer shared by every animatable block on the page.  the observer's
// callback and the animator both live exactly as long as this struct; dropping it unobserves
// every element and disconnects the observer
pub struct RevealBinding {
    animator: Rc<RefCell<Option<PageAnimator>>>,
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealBinding {
    pub fn attach(config: &RevealConfig) -> anyhow::Result<Self> {
        let document = document().ok_or_else(|| anyhow::Error::msg("no document"))?;

        // the callback needs the animator, and the animator needs the observer the callback
        // is handed to, so the animator is slotted in after construction
        let slot: Rc<RefCell<Option<PageAnimator>>> = Rc::new(RefCell::new(None));
        let callback_slot = slot.clone();

        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            let Ok(mut guard) = callback_slot.try_borrow_mut() else {
                return;
            };
            let Some(animator) = guard.as_mut() else {
                return;
            };

            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Some(key) = reveal_key(&entry.target()) else {
                    continue;
                };

                if animator.on_visibility(&key, entry.is_intersecting()).is_some() {
                    debug!("revealed block {key}");
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(&config.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(js_error)?;

        let mut animator = RevealAnimator::new(
            DomObserver {
                observer: observer.clone(),
            },
            ClassTarget {
                pending: config.pending_class.clone(),
                revealed: config.revealed_class.clone(),
            },
        );

        let elements = document
            .query_selector_all(&config.selector_query())
            .map_err(js_error)?;

        for i in 0..elements.length() {
            let Some(element) = elements.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };

            if element
                .set_attribute(REVEAL_KEY_ATTRIBUTE, &i.to_string())
                .is_err()
            {
                continue;
            }
            animator.register(i, element);
        }

        debug!("observing {} animatable blocks", animator.observed());
        *slot.borrow_mut() = Some(animator);

        Ok(RevealBinding {
            animator: slot,
            observer,
            _callback: callback,
        })
    }

    pub fn release(&self) {
        if let Some(mut animator) = self.animator.borrow_mut().take() {
            animator.release();
        }

        self.observer.disconnect();
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        self.release();
    }
}

use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use tracing::debug;

use portfolio_common::{
    config::NavConfig,
    lifecycle::Bindings,
    nav::{MenuState, NavEvent},
    storage::PreferenceStore,
    theme::ThemeManager,
};

use crate::{
    common::{
        PAGE_CONFIG,
        dom::{DocumentRoot, RevealBinding, click_site},
        storage::BrowserStore,
    },
    components::{
        navigation::NavBar,
        sections::{
            About, Certifications, Contact, Education, Experience, Footer, Hero, Projects, Skills,
        },
    },
};

pub type PageTheme = ThemeManager<Box<dyn PreferenceStore>>;

// apply an event to the menu without waking subscribers unless the state actually moved,
// since the scroll listener fires at a very high rate
fn dispatch(mut menu_signal: Signal<MenuState>, event: NavEvent) {
    let mut next = *menu_signal.peek();
    next.apply(event);

    if next != *menu_signal.peek() {
        menu_signal.set(next);
    }
}

// window scroll and document click, both closing the mobile menu
fn page_listeners(menu_signal: Signal<MenuState>, nav: &NavConfig) -> Vec<EventListener> {
    let Some(window) = web_sys::window() else {
        debug!("no window, skipping page listeners");
        return Vec::new();
    };
    let Some(document) = window.document() else {
        debug!("no document, skipping page listeners");
        return Vec::new();
    };

    let scroll = EventListener::new_with_options(
        &window,
        "scroll",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        move |_| dispatch(menu_signal, NavEvent::Scroll),
    );

    let container = nav.container_selector.clone();
    let toggle = nav.toggle_selector.clone();
    let click = EventListener::new(&document, "click", move |event| {
        if !menu_signal.peek().is_open() {
            return;
        }

        let site = click_site(event, &container, &toggle);
        dispatch(menu_signal, NavEvent::OutsideClick(site));
    });

    vec![scroll, click]
}

// PortfolioPage
//
// owns all of the interactive state on the page.  the theme and menu live in signals so the
// navbar re-renders on change; the dom listeners and the reveal observer are attached after the
// first render (once the animatable blocks exist) and released when the page is dropped
#[component]
pub fn PortfolioPage() -> Element {
    let config = PAGE_CONFIG.read().clone();

    let theme_config = config.theme.clone();
    let theme_signal: Signal<PageTheme> =
        use_signal(move || ThemeManager::new(BrowserStore::open(), theme_config));
    let menu_signal = use_signal(MenuState::new);

    let bindings = use_hook(|| Rc::new(RefCell::new(Bindings::<EventListener>::new("page"))));
    let reveal = use_hook(|| Rc::new(RefCell::new(None::<RevealBinding>)));

    // reflect the stored (or default) theme once, before anything is toggled
    use_hook(|| theme_signal.peek().apply(&DocumentRoot));

    use_effect({
        let bindings = bindings.clone();
        let reveal = reveal.clone();

        move || {
            bindings
                .borrow_mut()
                .bind(page_listeners(menu_signal, &config.nav));

            // release the previous observer before attaching a new one
            reveal.borrow_mut().take();

            match RevealBinding::attach(&config.reveal) {
                Ok(binding) => *reveal.borrow_mut() = Some(binding),
                Err(err) => debug!("reveal animations disabled: {err}"),
            }
        }
    });

    use_drop(move || {
        bindings.borrow_mut().unmount();

        if let Some(binding) = reveal.borrow_mut().take() {
            binding.release();
        }
    });

    rsx! {
        div { class: "portfolio-container",
            NavBar { menu_signal, theme_signal }
            Hero { menu_signal }
            About {}
            Experience {}
            Skills {}
            Projects {}
            Education {}
            Certifications {}
            Contact {}
            Footer {}
        }
    }
}

use tracing::debug;

// where an outside-click landed, relative to the elements that keep the menu open
//
// both fields come from a live query at click time.  None means the element could not be found,
// in which case the outside-click check does not apply at all
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickSite {
    pub in_nav: Option<bool>,
    pub in_toggle: Option<bool>,
}

impl ClickSite {
    pub fn outside(&self) -> bool {
        matches!(
            (self.in_nav, self.in_toggle),
            (Some(false), Some(false))
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    Toggle,
    Scroll,
    OutsideClick(ClickSite),
}

// anything that can resolve a fragment to an element and bring it into view
pub trait ScrollSurface {
    type Target;

    fn find_target(&self, fragment: &str) -> Option<Self::Target>;

    // smooth scroll, aligning the top of the target with the top of the viewport
    fn scroll_into_view(&self, target: &Self::Target);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorOutcome {
    pub default_prevented: bool,
    pub scrolled: bool,
}

// the fragment of an in-page link, or None for anything that navigates elsewhere
pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

// mobile menu state
//
// the only mutable navigation state on the page.  every transition is a plain function of the
// current flag, so the dom listeners are reduced to translating browser events into NavEvents
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        MenuState::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_menu(&mut self) {
        self.open = !self.open;
    }

    pub fn close_menu(&mut self) {
        self.open = false;
    }

    // called from a passive listener, so this must stay trivially cheap
    pub fn handle_scroll(&mut self) {
        if self.open {
            self.close_menu();
        }
    }

    pub fn handle_outside_click(&mut self, site: ClickSite) {
        if !self.open {
            return;
        }

        if site.in_nav.is_none() || site.in_toggle.is_none() {
            debug!("nav container or menu toggle missing, skipping outside-click check");
            return;
        }

        if site.outside() {
            self.close_menu();
        }
    }

    // the menu is closed before the scroll starts, whether or not the target exists
    pub fn handle_anchor_click<S: ScrollSurface>(&mut self, href: &str, surface: &S) -> AnchorOutcome {
        self.close_menu();

        let target = fragment(href)
            .filter(|id| !id.is_empty())
            .and_then(|id| surface.find_target(id));

        let scrolled = match target {
            Some(target) => {
                surface.scroll_into_view(&target);
                true
            }
            None => {
                debug!("no element for anchor {href}, skipping scroll");
                false
            }
        };

        AnchorOutcome {
            default_prevented: true,
            scrolled,
        }
    }

    pub fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::Toggle => self.toggle_menu(),
            NavEvent::Scroll => self.handle_scroll(),
            NavEvent::OutsideClick(site) => self.handle_outside_click(site),
        }
    }

    // class applied to the menu list and the toggle bars
    pub fn active_class(&self) -> &'static str {
        if self.open { "active" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    const OUTSIDE: ClickSite = ClickSite {
        in_nav: Some(false),
        in_toggle: Some(false),
    };

    struct FakePage {
        ids: Vec<&'static str>,
        scrolls: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn new(ids: Vec<&'static str>) -> Self {
            FakePage {
                ids,
                scrolls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollSurface for FakePage {
        type Target = String;

        fn find_target(&self, fragment: &str) -> Option<String> {
            self.ids
                .iter()
                .find(|id| **id == fragment)
                .map(|id| id.to_string())
        }

        fn scroll_into_view(&self, target: &String) {
            self.scrolls.borrow_mut().push(target.clone());
        }
    }

    #[test]
    fn toggle_flips() {
        let mut menu = MenuState::new();

        menu.apply(NavEvent::Toggle);
        assert!(menu.is_open());
        assert_eq!(menu.active_class(), "active");

        menu.apply(NavEvent::Toggle);
        assert!(!menu.is_open());
        assert_eq!(menu.active_class(), "");
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MenuState::new();

        menu.close_menu();
        menu.close_menu();
        assert!(!menu.is_open());

        menu.toggle_menu();
        menu.close_menu();
        assert!(!menu.is_open());
    }

    #[test]
    fn scroll_closes_open_menu() {
        let mut menu = MenuState::new();
        menu.toggle_menu();

        menu.apply(NavEvent::Scroll);
        assert!(!menu.is_open());

        menu.apply(NavEvent::Scroll);
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_clicks_on_closed_menu_do_nothing() {
        let mut menu = MenuState::new();
        let sites = [
            OUTSIDE,
            ClickSite::default(),
            ClickSite {
                in_nav: Some(true),
                in_toggle: Some(false),
            },
        ];

        for site in sites.iter().cycle().take(12) {
            menu.apply(NavEvent::OutsideClick(*site));
            assert!(!menu.is_open());
        }
    }

    #[test]
    fn outside_click_closes_open_menu() {
        let mut menu = MenuState::new();
        menu.toggle_menu();

        menu.apply(NavEvent::OutsideClick(OUTSIDE));
        assert!(!menu.is_open());
    }

    #[test]
    fn clicks_inside_keep_menu_open() {
        let inside = [
            ClickSite {
                in_nav: Some(true),
                in_toggle: Some(false),
            },
            ClickSite {
                in_nav: Some(false),
                in_toggle: Some(true),
            },
        ];

        for site in inside {
            let mut menu = MenuState::new();
            menu.toggle_menu();

            menu.apply(NavEvent::OutsideClick(site));
            assert!(menu.is_open());
        }
    }

    #[test]
    fn missing_elements_skip_the_check() {
        let missing = [
            ClickSite {
                in_nav: None,
                in_toggle: Some(false),
            },
            ClickSite {
                in_nav: Some(false),
                in_toggle: None,
            },
            ClickSite::default(),
        ];

        for site in missing {
            let mut menu = MenuState::new();
            menu.toggle_menu();

            menu.apply(NavEvent::OutsideClick(site));
            assert!(menu.is_open());
        }
    }

    #[test]
    fn anchor_to_existing_section_scrolls_and_closes() {
        let mut menu = MenuState::new();
        menu.toggle_menu();

        let page = FakePage::new(vec!["home", "projects"]);

        let outcome = menu.handle_anchor_click("#projects", &page);

        assert_eq!(
            outcome,
            AnchorOutcome {
                default_prevented: true,
                scrolled: true,
            }
        );
        assert!(!menu.is_open());
        assert_eq!(*page.scrolls.borrow(), vec!["projects".to_owned()]);
    }

    #[test]
    fn anchor_to_missing_section_still_closes() {
        let mut menu = MenuState::new();
        menu.toggle_menu();
        let page = FakePage::new(vec!["home", "projects"]);

        let outcome = menu.handle_anchor_click("#nonexistent", &page);

        assert!(outcome.default_prevented);
        assert!(!outcome.scrolled);
        assert!(!menu.is_open());
        assert!(page.scrolls.borrow().is_empty());
    }

    #[test]
    fn bare_hash_resolves_to_nothing() {
        let mut menu = MenuState::new();
        let page = FakePage::new(vec![""]);

        let outcome = menu.handle_anchor_click("#", &page);

        assert!(outcome.default_prevented);
        assert!(!outcome.scrolled);
    }

    #[test]
    fn fragment_only_for_in_page_links() {
        assert_eq!(fragment("#contact"), Some("contact"));
        assert_eq!(fragment("mailto:someone@example.com"), None);
        assert_eq!(fragment("https://example.com/#about"), None);
    }
}

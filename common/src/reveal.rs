use std::{collections::HashMap, hash::Hash};

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealChange {
    Revealed,
}

// one-shot reveal bookkeeping
//
// each registered key starts out pending and flips to revealed the first time it is reported as
// visible.  nothing ever flips back, and once released the tracker ignores every callback so a
// stray intersection event after teardown cannot touch the page
#[derive(Debug)]
pub struct RevealTracker<K: Eq + Hash> {
    states: HashMap<K, RevealState>,
    active: bool,
}

impl<K: Eq + Hash> Default for RevealTracker<K> {
    fn default() -> Self {
        RevealTracker {
            states: HashMap::new(),
            active: true,
        }
    }
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn new() -> Self {
        RevealTracker::default()
    }

    // returns false if the key was already known
    pub fn register(&mut self, key: K) -> bool {
        if !self.active || self.states.contains_key(&key) {
            return false;
        }

        self.states.insert(key, RevealState::Pending);
        true
    }

    pub fn state(&self, key: &K) -> Option<RevealState> {
        self.states.get(key).copied()
    }

    pub fn on_visibility(&mut self, key: &K, visible: bool) -> Option<RevealChange> {
        if !self.active || !visible {
            return None;
        }

        match self.states.get_mut(key) {
            Some(state @ RevealState::Pending) => {
                *state = RevealState::Revealed;
                Some(RevealChange::Revealed)
            }
            _ => None,
        }
    }

    // hand back every key so the caller can unobserve it
    pub fn release(&mut self) -> Vec<K> {
        self.active = false;
        self.states.drain().map(|(k, _)| k).collect()
    }
}

// the browser's visibility observer, reduced to what the animator needs
pub trait VisibilityObserver {
    type Element;

    fn observe(&self, element: &Self::Element);

    fn unobserve(&self, element: &Self::Element);
}

// visual state hooks for the stylesheet
pub trait RevealTarget {
    type Element;

    fn mark_pending(&self, element: &Self::Element);

    fn mark_revealed(&self, element: &Self::Element);
}

// reveal animator
//
// couples the tracker with an observer and a styling target.  elements are tagged pending before
// they are observed, so the stylesheet always has a starting state to transition from
pub struct RevealAnimator<K, O, T>
where
    K: Clone + Eq + Hash,
    O: VisibilityObserver,
    T: RevealTarget<Element = O::Element>,
{
    tracker: RevealTracker<K>,
    elements: HashMap<K, O::Element>,
    observer: O,
    target: T,
}

impl<K, O, T> RevealAnimator<K, O, T>
where
    K: Clone + Eq + Hash,
    O: VisibilityObserver,
    T: RevealTarget<Element = O::Element>,
{
    pub fn new(observer: O, target: T) -> Self {
        RevealAnimator {
            tracker: RevealTracker::new(),
            elements: HashMap::new(),
            observer,
            target,
        }
    }

    pub fn register(&mut self, key: K, element: O::Element) {
        if !self.tracker.register(key.clone()) {
            return;
        }

        self.target.mark_pending(&element);
        self.observer.observe(&element);
        self.elements.insert(key, element);
    }

    pub fn on_visibility(&mut self, key: &K, visible: bool) -> Option<RevealChange> {
        let change = self.tracker.on_visibility(key, visible)?;

        if let Some(element) = self.elements.get(key) {
            self.target.mark_revealed(element);
        }

        Some(change)
    }

    pub fn state(&self, key: &K) -> Option<RevealState> {
        self.tracker.state(key)
    }

    pub fn observed(&self) -> usize {
        self.elements.len()
    }

    pub fn release(&mut self) {
        let keys = self.tracker.release();

        debug!("releasing {} observed elements", keys.len());

        for key in keys {
            if let Some(element) = self.elements.remove(&key) {
                self.observer.unobserve(&element);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Observe(&'static str),
        Unobserve(&'static str),
        Pending(&'static str),
        Revealed(&'static str),
    }

    type Log = Rc<RefCell<Vec<Call>>>;

    struct FakeObserver(Log);

    impl VisibilityObserver for FakeObserver {
        type Element = &'static str;

        fn observe(&self, element: &&'static str) {
            self.0.borrow_mut().push(Call::Observe(element));
        }

        fn unobserve(&self, element: &&'static str) {
            self.0.borrow_mut().push(Call::Unobserve(element));
        }
    }

    struct FakeTarget(Log);

    impl RevealTarget for FakeTarget {
        type Element = &'static str;

        fn mark_pending(&self, element: &&'static str) {
            self.0.borrow_mut().push(Call::Pending(element));
        }

        fn mark_revealed(&self, element: &&'static str) {
            self.0.borrow_mut().push(Call::Revealed(element));
        }
    }

    fn animator() -> (RevealAnimator<usize, FakeObserver, FakeTarget>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let animator = RevealAnimator::new(FakeObserver(log.clone()), FakeTarget(log.clone()));
        (animator, log)
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut tracker = RevealTracker::new();
        tracker.register("card");

        assert_eq!(tracker.state(&"card"), Some(RevealState::Pending));
        assert_eq!(
            tracker.on_visibility(&"card", true),
            Some(RevealChange::Revealed)
        );
        assert_eq!(tracker.on_visibility(&"card", true), None);
        assert_eq!(tracker.on_visibility(&"card", false), None);
        assert_eq!(tracker.state(&"card"), Some(RevealState::Revealed));
    }

    #[test]
    fn leaving_the_viewport_is_ignored() {
        let mut tracker = RevealTracker::new();
        tracker.register(7);

        assert_eq!(tracker.on_visibility(&7, false), None);
        assert_eq!(tracker.state(&7), Some(RevealState::Pending));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut tracker: RevealTracker<u32> = RevealTracker::new();

        assert_eq!(tracker.on_visibility(&3, true), None);
        assert_eq!(tracker.state(&3), None);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut tracker = RevealTracker::new();

        assert!(tracker.register(1));
        tracker.on_visibility(&1, true);
        assert!(!tracker.register(1));
        assert_eq!(tracker.state(&1), Some(RevealState::Revealed));
    }

    #[test]
    fn pending_before_observe() {
        let (mut animator, log) = animator();

        animator.register(0, "project-card");
        animator.register(1, "timeline-item");

        assert_eq!(
            *log.borrow(),
            vec![
                Call::Pending("project-card"),
                Call::Observe("project-card"),
                Call::Pending("timeline-item"),
                Call::Observe("timeline-item"),
            ]
        );
        assert_eq!(animator.observed(), 2);
    }

    #[test]
    fn second_intersection_changes_nothing() {
        let (mut animator, log) = animator();
        animator.register(0, "skill-category");
        log.borrow_mut().clear();

        assert_eq!(animator.on_visibility(&0, true), Some(RevealChange::Revealed));
        assert_eq!(animator.on_visibility(&0, true), None);

        assert_eq!(*log.borrow(), vec![Call::Revealed("skill-category")]);
        assert_eq!(animator.state(&0), Some(RevealState::Revealed));
    }

    #[test]
    fn release_unobserves_everything_and_goes_quiet() {
        let (mut animator, log) = animator();
        animator.register(0, "about-content");
        animator.register(1, "contact-item");
        animator.on_visibility(&0, true);
        log.borrow_mut().clear();

        animator.release();

        let mut unobserved = log.borrow().clone();
        unobserved.sort_by_key(|c| format!("{c:?}"));
        assert_eq!(
            unobserved,
            vec![
                Call::Unobserve("about-content"),
                Call::Unobserve("contact-item"),
            ]
        );
        assert_eq!(animator.observed(), 0);

        log.borrow_mut().clear();
        assert_eq!(animator.on_visibility(&1, true), None);
        animator.register(2, "education-card");
        assert!(log.borrow().is_empty());
    }
}

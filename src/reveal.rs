//! Viewport reveal bookkeeping, independent of the DOM.

use leptos::prelude::*;

/// Options handed to the browser's `IntersectionObserver`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must intersect before it counts as visible.
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px",
        }
    }
}

/// Visibility flag for one observed element. Once set it stays set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection report. Returns true if the flag changed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        let changed = intersecting && !self.visible;
        self.visible |= intersecting;
        changed
    }

    /// The browser can't observe intersections, show everything.
    pub fn unsupported(&mut self) -> bool {
        self.observe(true)
    }

    /// No further report can change the flag, so the observer can be released.
    pub fn is_settled(&self) -> bool {
        self.visible
    }
}

/// Applies an observer report to a latch owned by a mounted section.
///
/// Returns whether the observer may be released, or `None` when the section
/// has been torn down, in which case nothing is written.
pub fn report(latch: RwSignal<RevealLatch>, intersecting: bool) -> Option<bool> {
    let mut next = latch.try_get_untracked()?;
    if next.observe(intersecting) {
        latch.try_set(next);
    }
    Some(next.is_settled())
}

/// Replays an entrance each time the content behind `key` is swapped out.
///
/// Content for a new key starts hidden and only shows once [`Entrance::play`]
/// has been called for that key, so freshly mounted items transition in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entrance<K> {
    played: Option<K>,
}

impl<K> Default for Entrance<K> {
    fn default() -> Self {
        Self { played: None }
    }
}

impl<K: PartialEq> Entrance<K> {
    pub fn is_shown(&self, key: &K, visible: bool) -> bool {
        visible && self.played.as_ref() == Some(key)
    }

    pub fn play(&mut self, key: K) {
        self.played = Some(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_never_reverts() {
        let mut latch = RevealLatch::default();
        assert!(!latch.is_visible());
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.is_visible());
        assert!(latch.is_settled());

        // scrolling away and back again
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_unsupported_degrades_to_visible() {
        let mut latch = RevealLatch::default();
        assert!(latch.unsupported());
        assert!(latch.is_visible());
        assert!(!latch.unsupported());
    }

    #[test]
    fn test_already_visible_on_first_report() {
        // the observer reports the initial state right after observe()
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true));
        assert!(latch.is_settled());
    }

    #[test]
    fn test_default_options() {
        let opts = ObserverOptions::default();
        assert_eq!(opts.threshold, 0.1);
        assert_eq!(opts.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn test_report_updates_live_latch() {
        let owner = Owner::new();
        owner.set();
        let latch = RwSignal::new(RevealLatch::default());

        assert_eq!(report(latch, false), Some(false));
        assert!(!latch.get_untracked().is_visible());
        assert_eq!(report(latch, true), Some(true));
        assert!(latch.get_untracked().is_visible());
    }

    #[test]
    fn test_report_after_teardown_is_ignored() {
        let owner = Owner::new();
        owner.set();
        let latch = RwSignal::new(RevealLatch::default());

        owner.cleanup();
        assert_eq!(report(latch, true), None);
        assert_eq!(latch.try_get_untracked(), None);
    }

    #[test]
    fn test_entrance_replays_for_new_key() {
        let mut entrance = Entrance::default();
        assert!(!entrance.is_shown(&None, true));

        entrance.play(None);
        assert!(entrance.is_shown(&None, true));
        // never shown before the section itself is on screen
        assert!(!entrance.is_shown(&None, false));

        // switching the filter hides the new content until it plays
        assert!(!entrance.is_shown(&Some("Python"), true));
        entrance.play(Some("Python"));
        assert!(entrance.is_shown(&Some("Python"), true));
        assert!(!entrance.is_shown(&None, true));
    }
}

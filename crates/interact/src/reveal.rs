//! Scroll reveal bookkeeping.
//!
//! Every tagged block starts hidden. The first qualifying intersection marks
//! it visible for good and drops it from observation; later events for that
//! block are ignored.

/// Observer settings: fire once 10% of a block is visible, starting 50px
/// before it reaches the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "50px",
        }
    }
}

/// One observation reported by the viewport watcher.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry<K> {
    pub target: K,
    pub is_intersecting: bool,
    pub ratio: f64,
}

// Watchers report the crossing ratio with float error (0.0999.. for 0.1).
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Debug)]
struct Tracked<K> {
    key: K,
    visible: bool,
}

/// Tracks which reveal blocks have been shown.
///
/// Keys only need equality, so DOM element handles work directly.
#[derive(Debug)]
pub struct RevealTracker<K> {
    options: RevealOptions,
    tracked: Vec<Tracked<K>>,
}

impl<K: PartialEq + Clone> RevealTracker<K> {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            tracked: Vec::new(),
        }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Starts tracking `key` as hidden. Returns false if it was already tracked.
    pub fn observe(&mut self, key: K) -> bool {
        if self.tracked.iter().any(|t| t.key == key) {
            return false;
        }
        self.tracked.push(Tracked {
            key,
            visible: false,
        });
        true
    }

    /// Applies a batch of watcher entries and returns the keys revealed by it.
    ///
    /// The caller marks each returned key visible and stops observing it.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry<K>]) -> Vec<K> {
        let threshold = self.options.threshold - RATIO_TOLERANCE;
        let mut revealed = Vec::new();
        for entry in entries {
            if !entry.is_intersecting || entry.ratio < threshold {
                continue;
            }
            if let Some(tracked) = self
                .tracked
                .iter_mut()
                .find(|t| !t.visible && t.key == entry.target)
            {
                tracked.visible = true;
                revealed.push(tracked.key.clone());
            }
        }
        revealed
    }

    /// Marks every hidden block visible. Used when no watcher is available.
    pub fn reveal_all(&mut self) -> Vec<K> {
        self.tracked
            .iter_mut()
            .filter(|t| !t.visible)
            .map(|t| {
                t.visible = true;
                t.key.clone()
            })
            .collect()
    }

    pub fn is_visible(&self, key: &K) -> bool {
        self.tracked.iter().any(|t| t.visible && &t.key == key)
    }

    /// Number of blocks still waiting to be revealed.
    pub fn pending(&self) -> usize {
        self.tracked.iter().filter(|t| !t.visible).count()
    }
}

impl<K: PartialEq + Clone> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new(RevealOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(target: u32, is_intersecting: bool, ratio: f64) -> IntersectionEntry<u32> {
        IntersectionEntry {
            target,
            is_intersecting,
            ratio,
        }
    }

    #[test]
    fn test_blocks_start_hidden() {
        let mut tracker = RevealTracker::default();
        tracker.observe(1);
        tracker.observe(2);
        assert!(!tracker.is_visible(&1));
        assert_eq!(tracker.pending(), 2);
    }

    #[test]
    fn test_reveal_at_threshold() {
        let mut tracker = RevealTracker::default();
        tracker.observe(1);
        assert!(tracker.on_intersections(&[entry(1, true, 0.05)]).is_empty());
        assert_eq!(tracker.on_intersections(&[entry(1, true, 0.1)]), vec![1]);
        assert!(tracker.is_visible(&1));
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut tracker = RevealTracker::default();
        tracker.observe(7);
        assert_eq!(tracker.on_intersections(&[entry(7, true, 0.5)]), vec![7]);
        assert!(tracker.on_intersections(&[entry(7, false, 0.0)]).is_empty());
        assert!(tracker.on_intersections(&[entry(7, true, 1.0)]).is_empty());
        assert!(tracker.is_visible(&7));
        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn test_non_intersecting_entries_are_ignored() {
        let mut tracker = RevealTracker::default();
        tracker.observe(1);
        assert!(tracker.on_intersections(&[entry(1, false, 0.3)]).is_empty());
        assert!(!tracker.is_visible(&1));
    }

    #[test]
    fn test_untracked_targets_are_ignored() {
        let mut tracker = RevealTracker::default();
        tracker.observe(1);
        assert!(tracker.on_intersections(&[entry(9, true, 1.0)]).is_empty());
    }

    #[test]
    fn test_batch_reveals_in_entry_order() {
        let mut tracker = RevealTracker::default();
        for key in [1, 2, 3] {
            tracker.observe(key);
        }
        let revealed = tracker.on_intersections(&[
            entry(3, true, 0.4),
            entry(2, false, 0.0),
            entry(1, true, 0.2),
        ]);
        assert_eq!(revealed, vec![3, 1]);
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn test_fallback_reveals_everything_once() {
        let mut tracker = RevealTracker::default();
        for key in [1, 2, 3] {
            tracker.observe(key);
        }
        tracker.on_intersections(&[entry(2, true, 1.0)]);
        assert_eq!(tracker.reveal_all(), vec![1, 3]);
        assert!(tracker.reveal_all().is_empty());
    }

    #[test]
    fn test_observe_twice() {
        let mut tracker = RevealTracker::default();
        assert!(tracker.observe(1));
        assert!(!tracker.observe(1));
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn test_default_options() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "50px");
    }
}

//! Testimonial carousel state
//!
//! Cyclic slide index plus an autoplay generation counter. A running
//! autoplay timer is identified by the generation it was started with;
//! restarting or suspending autoplay bumps the generation, which turns every
//! older timer's ticks into no-ops.

/// Direction of a horizontal swipe
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right-to-left; shows the next slide
    Left,
    /// Finger moved left-to-right; shows the previous slide
    Right,
}

/// Classify a touch gesture by its horizontal start and end screen X.
///
/// Returns `None` unless the distance is strictly greater than `threshold`.
pub fn swipe_direction(start_x: f64, end_x: f64, threshold: f64) -> Option<SwipeDirection> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold {
        return None;
    }
    if diff > 0.0 {
        Some(SwipeDirection::Left)
    } else {
        Some(SwipeDirection::Right)
    }
}

/// A manual navigation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselNav {
    Next,
    Previous,
    GoTo(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    current: usize,
    slide_count: usize,
    autoplay_generation: u64,
    autoplay_active: bool,
}

impl CarouselState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            current: 0,
            slide_count,
            autoplay_generation: 0,
            autoplay_active: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn autoplay_active(&self) -> bool {
        self.autoplay_active
    }

    /// Track offset in percent of the viewport width
    pub fn track_offset_percent(&self) -> usize {
        self.current * 100
    }

    pub fn is_dot_active(&self, index: usize) -> bool {
        index == self.current
    }

    pub fn next(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.current = (self.current + 1) % self.slide_count;
    }

    pub fn prev(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.current = (self.current + self.slide_count - 1) % self.slide_count;
    }

    /// Jump to a slide. Out-of-range indices are ignored and return false.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.slide_count {
            tracing::warn!(index, slides = self.slide_count, "carousel index out of range");
            return false;
        }
        self.current = index;
        true
    }

    /// Apply a manual navigation and restart autoplay.
    ///
    /// Returns the new autoplay generation the caller must start a timer for.
    pub fn navigate(&mut self, nav: CarouselNav) -> u64 {
        match nav {
            CarouselNav::Next => self.next(),
            CarouselNav::Previous => self.prev(),
            CarouselNav::GoTo(index) => {
                self.go_to(index);
            }
        }
        tracing::debug!(?nav, slide = self.current, "carousel navigated");
        self.restart_autoplay()
    }

    /// Apply a swipe. Returns the new autoplay generation if a slide changed.
    pub fn swipe(&mut self, start_x: f64, end_x: f64, threshold: f64) -> Option<u64> {
        let nav = match swipe_direction(start_x, end_x, threshold)? {
            SwipeDirection::Left => CarouselNav::Next,
            SwipeDirection::Right => CarouselNav::Previous,
        };
        Some(self.navigate(nav))
    }

    /// Cancel any running autoplay timer and start a fresh one
    pub fn restart_autoplay(&mut self) -> u64 {
        self.autoplay_generation += 1;
        self.autoplay_active = true;
        self.autoplay_generation
    }

    /// Cancel the running autoplay timer without starting another
    pub fn suspend_autoplay(&mut self) {
        self.autoplay_generation += 1;
        self.autoplay_active = false;
    }

    /// Timer tick from the autoplay loop started with `generation`.
    ///
    /// Returns false once that timer has been superseded; the loop should exit.
    pub fn autoplay_tick(&mut self, generation: u64) -> bool {
        if !self.autoplay_active || generation != self.autoplay_generation {
            return false;
        }
        self.next();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_at_first_slide() {
        let carousel = CarouselState::new(4);
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.track_offset_percent(), 0);
        assert!(carousel.is_dot_active(0));
        assert!(!carousel.autoplay_active());
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut carousel = CarouselState::new(3);
        carousel.prev();
        assert_eq!(carousel.current(), 2);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_go_to_moves_track_and_dots() {
        let mut carousel = CarouselState::new(5);
        assert!(carousel.go_to(3));
        assert_eq!(carousel.track_offset_percent(), 300);
        assert!(carousel.is_dot_active(3));
        assert!(!carousel.is_dot_active(0));
    }

    #[test]
    fn test_go_to_out_of_range_is_ignored() {
        let mut carousel = CarouselState::new(2);
        carousel.go_to(1);
        assert!(!carousel.go_to(2));
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_empty_carousel_never_moves() {
        let mut carousel = CarouselState::new(0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_swipe_threshold_is_strict() {
        assert_eq!(swipe_direction(200.0, 149.0, 50.0), Some(SwipeDirection::Left));
        assert_eq!(swipe_direction(200.0, 151.0, 50.0), None);
        assert_eq!(swipe_direction(200.0, 150.0, 50.0), None);
        assert_eq!(swipe_direction(100.0, 151.0, 50.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_swipe_of_51px_moves_once_and_49px_does_not() {
        let mut carousel = CarouselState::new(4);
        assert!(carousel.swipe(300.0, 249.0, 50.0).is_some());
        assert_eq!(carousel.current(), 1);

        assert!(carousel.swipe(300.0, 251.0, 50.0).is_none());
        assert_eq!(carousel.current(), 1);

        carousel.swipe(249.0, 300.0, 50.0);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_manual_navigation_supersedes_running_timer() {
        let mut carousel = CarouselState::new(3);
        let first = carousel.restart_autoplay();
        assert!(carousel.autoplay_tick(first));
        assert_eq!(carousel.current(), 1);

        let second = carousel.navigate(CarouselNav::Next);
        assert_ne!(first, second);
        assert_eq!(carousel.current(), 2);

        assert!(!carousel.autoplay_tick(first));
        assert_eq!(carousel.current(), 2);
        assert!(carousel.autoplay_tick(second));
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_exactly_one_dot_follows_navigation() {
        let mut carousel = CarouselState::new(4);
        for nav in [CarouselNav::Next, CarouselNav::GoTo(3), CarouselNav::Next, CarouselNav::Previous] {
            carousel.navigate(nav);
            let active: Vec<usize> = (0..carousel.slide_count())
                .filter(|&i| carousel.is_dot_active(i))
                .collect();
            assert_eq!(active, vec![carousel.current()], "after {nav:?}");
        }
        assert_eq!(carousel.current(), 3);
        assert!(carousel.autoplay_active());
    }

    #[test]
    fn test_hover_suspends_and_leave_resumes() {
        let mut carousel = CarouselState::new(3);
        let generation = carousel.restart_autoplay();

        carousel.suspend_autoplay();
        assert!(!carousel.autoplay_active());
        assert!(!carousel.autoplay_tick(generation));
        assert_eq!(carousel.current(), 0);

        let resumed = carousel.restart_autoplay();
        assert!(carousel.autoplay_tick(resumed));
        assert_eq!(carousel.current(), 1);
    }

    proptest! {
        #[test]
        fn next_n_times_returns_to_start(n in 1usize..50, start in 0usize..50) {
            let mut carousel = CarouselState::new(n);
            carousel.go_to(start % n);
            let origin = carousel.current();
            for _ in 0..n {
                carousel.next();
            }
            prop_assert_eq!(carousel.current(), origin);
        }

        #[test]
        fn prev_n_times_returns_to_start(n in 1usize..50, start in 0usize..50) {
            let mut carousel = CarouselState::new(n);
            carousel.go_to(start % n);
            let origin = carousel.current();
            for _ in 0..n {
                carousel.prev();
            }
            prop_assert_eq!(carousel.current(), origin);
        }

        #[test]
        fn index_stays_in_range(n in 1usize..20, steps in proptest::collection::vec(any::<bool>(), 0..60)) {
            let mut carousel = CarouselState::new(n);
            for forward in steps {
                if forward { carousel.next() } else { carousel.prev() }
                prop_assert!(carousel.current() < n);
            }
        }
    }
}

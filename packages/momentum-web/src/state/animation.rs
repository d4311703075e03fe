//! Frame-stepped animations, driven by elapsed time rather than by any
//! particular scheduler.

/// Outcome of one animation step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<T> {
    Continue(T),
    Done(T),
}

impl<T: Copy> Step<T> {
    pub fn value(&self) -> T {
        match self {
            Step::Continue(v) | Step::Done(v) => *v,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }
}

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Count-up animation for a statistic
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    pub target: i64,
    pub duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
        }
    }

    /// Displayed value `elapsed_ms` after the animation started
    pub fn step(&self, elapsed_ms: f64) -> Step<i64> {
        let progress = if self.duration_ms > 0.0 {
            (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if progress >= 1.0 {
            return Step::Done(self.target);
        }

        let eased = ease_out_cubic(progress);
        Step::Continue((self.target as f64 * eased).round() as i64)
    }
}

/// Hero image rotation, in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_y: f64,
    pub rotate_x: f64,
}

impl Tilt {
    /// Tilt for a pointer at (`x`, `y`) relative to a `width` x `height` box
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64, divisor: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_y: (center_x - x) / divisor,
            rotate_x: (y - center_y) / divisor,
        }
    }

    pub fn css_transform(&self) -> String {
        if *self == Tilt::default() {
            return "rotateY(0) rotateX(0)".to_string();
        }
        format!("rotateY({}deg) rotateX({}deg)", self.rotate_y, self.rotate_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_counter_starts_at_zero_and_snaps_to_target() {
        let counter = CounterAnimation::new(250, 2000.0);
        assert_eq!(counter.step(0.0), Step::Continue(0));
        assert_eq!(counter.step(2000.0), Step::Done(250));
        assert_eq!(counter.step(5000.0), Step::Done(250));
    }

    #[test]
    fn test_counter_midpoint_is_eased() {
        let counter = CounterAnimation::new(1000, 2000.0);
        // 1 - 0.5^3 = 0.875
        assert_eq!(counter.step(1000.0), Step::Continue(875));
    }

    #[test]
    fn test_counter_settles_on_frame_timer() {
        use crate::timer::FRAME_MS;

        let counter = CounterAnimation::new(500, 2000.0);
        let mut ticks = 0_u32;
        let last = loop {
            let step = counter.step(f64::from(ticks * FRAME_MS));
            if step.is_done() {
                break step.value();
            }
            ticks += 1;
        };
        assert_eq!(last, 500);
        assert_eq!(ticks, 2000_u32.div_ceil(FRAME_MS));
    }

    #[test]
    fn test_late_tick_skips_ahead() {
        let counter = CounterAnimation::new(40, 2000.0);
        assert!(!counter.step(16.0).is_done());
        // A throttled timer that wakes well past the end lands on the target
        assert_eq!(counter.step(9000.0), Step::Done(40));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let counter = CounterAnimation::new(12, 0.0);
        assert_eq!(counter.step(0.0), Step::Done(12));
    }

    #[test]
    fn test_tilt_at_center_is_flat() {
        let tilt = Tilt::from_pointer(350.0, 175.0, 700.0, 350.0, 35.0);
        assert_eq!(tilt, Tilt::default());
        assert_eq!(tilt.css_transform(), "rotateY(0) rotateX(0)");
    }

    #[test]
    fn test_tilt_top_left_corner() {
        let tilt = Tilt::from_pointer(0.0, 0.0, 700.0, 350.0, 35.0);
        assert_eq!(tilt.rotate_y, 10.0);
        assert_eq!(tilt.rotate_x, -5.0);
        assert_eq!(tilt.css_transform(), "rotateY(10deg) rotateX(-5deg)");
    }

    proptest! {
        #[test]
        fn counter_is_monotone(target in 0i64..100_000, a in 0.0f64..3000.0, b in 0.0f64..3000.0) {
            let counter = CounterAnimation::new(target, 2000.0);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(counter.step(lo).value() <= counter.step(hi).value());
            prop_assert!(counter.step(hi).value() <= target);
        }
    }
}

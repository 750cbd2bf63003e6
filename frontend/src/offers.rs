//! State behind the special offers carousel.
//!
//! The carousel is a small state machine: the index only moves through
//! [`Carousel::apply`], and every move bumps `epoch`. The component keys its
//! autoplay timeout and its progress frame loop on `epoch`, so any move,
//! manual or automatic, restarts both from zero.

use std::num::NonZeroUsize;

use log::{debug, warn};

use crate::content::OFFERS;

pub const OFFER_COUNT: NonZeroUsize = match NonZeroUsize::new(OFFERS.len()) {
    Some(count) => count,
    None => panic!("the offers carousel needs at least one offer"),
};

/// Which side the next card slides in from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Still,
    Forward,
}

impl Direction {
    pub fn sign(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }

    pub fn slide_class(self) -> Option<&'static str> {
        match self {
            Direction::Backward => Some("slide-backward"),
            Direction::Still => None,
            Direction::Forward => Some("slide-forward"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: NonZeroUsize,
    index: usize,
    direction: Direction,
    epoch: u32,
}

impl Carousel {
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            len,
            index: 0,
            direction: Direction::Still,
            epoch: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn offer_count(&self) -> usize {
        self.len.get()
    }

    pub fn go_next(&mut self) {
        self.move_to((self.index + 1) % self.offer_count(), Direction::Forward);
    }

    pub fn go_prev(&mut self) {
        self.move_to((self.index + self.offer_count() - 1) % self.offer_count(), Direction::Backward);
    }

    /// Jumps straight to `target`. Returns false, leaving the carousel
    /// untouched, when `target` is not a valid slide.
    pub fn go_to(&mut self, target: usize) -> bool {
        if target >= self.offer_count() {
            warn!("Ignoring jump to offer {} of {}", target, self.offer_count());
            return false;
        }
        let direction = if target > self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.move_to(target, direction);
        true
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Next => self.go_next(),
            CarouselAction::Prev => self.go_prev(),
            CarouselAction::GoTo(target) => {
                self.go_to(target);
            }
        }
    }

    fn move_to(&mut self, index: usize, direction: Direction) {
        self.index = index;
        self.direction = direction;
        self.epoch = self.epoch.wrapping_add(1);
        debug!("Carousel moved to offer {} (direction {})", index, direction.sign());
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(OFFER_COUNT)
    }
}

/// Share of the autoplay period that has elapsed, clamped to `[0, 1]`.
/// A clock that runs backwards reads as no progress.
pub fn progress_fraction(elapsed_ms: f64, period_ms: f64) -> f64 {
    if period_ms <= 0.0 {
        return 1.0;
    }
    if elapsed_ms.is_nan() || elapsed_ms <= 0.0 {
        return 0.0;
    }
    (elapsed_ms / period_ms).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Carousel {
        Carousel::new(NonZeroUsize::new(3).unwrap())
    }

    #[test]
    fn starts_still_on_first_offer() {
        let carousel = Carousel::default();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.direction(), Direction::Still);
        assert_eq!(carousel.offer_count(), OFFERS.len());
    }

    #[test]
    fn go_to_lands_on_every_index() {
        for n in 0..3 {
            let mut carousel = three();
            assert!(carousel.go_to(n));
            assert_eq!(carousel.index(), n);
        }
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut carousel = three();
        carousel.go_next();
        let before = carousel.clone();
        assert!(!carousel.go_to(3));
        assert_eq!(carousel, before);
    }

    #[test]
    fn go_to_direction_follows_comparison() {
        let mut carousel = three();
        carousel.go_to(2);
        assert_eq!(carousel.direction(), Direction::Forward);
        carousel.go_to(1);
        assert_eq!(carousel.direction(), Direction::Backward);
        carousel.go_to(1);
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn next_three_times_visits_all_and_wraps() {
        let mut carousel = three();
        let mut seen = Vec::new();
        for _ in 0..3 {
            carousel.go_next();
            seen.push(carousel.index());
            assert_eq!(carousel.direction(), Direction::Forward);
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn prev_undoes_next_from_any_start() {
        for start in 0..3 {
            let mut carousel = three();
            carousel.go_to(start);
            carousel.go_next();
            carousel.go_prev();
            assert_eq!(carousel.index(), start);
            carousel.go_prev();
            carousel.go_next();
            assert_eq!(carousel.index(), start);
        }
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut carousel = three();
        carousel.go_prev();
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn every_move_bumps_epoch() {
        let mut carousel = three();
        carousel.go_next();
        carousel.go_prev();
        carousel.go_to(0);
        assert_eq!(carousel.epoch(), 3);
    }

    #[test]
    fn single_offer_stays_put() {
        let mut carousel = Carousel::new(NonZeroUsize::new(1).unwrap());
        carousel.go_next();
        carousel.go_prev();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn apply_dispatches_actions() {
        let mut carousel = three();
        carousel.apply(CarouselAction::Prev);
        assert_eq!(carousel.index(), 2);
        carousel.apply(CarouselAction::GoTo(1));
        assert_eq!(carousel.index(), 1);
        carousel.apply(CarouselAction::Next);
        assert_eq!(carousel.index(), 2);
        carousel.apply(CarouselAction::GoTo(7));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn progress_is_clamped_and_monotone() {
        let samples = [-50.0, 0.0, 1.0, 1_250.0, 2_500.0, 4_999.0, 5_000.0, 9_000.0];
        let fractions: Vec<f64> = samples.iter().map(|&ms| progress_fraction(ms, 5_000.0)).collect();
        assert_eq!(fractions[0], 0.0);
        assert_eq!(fractions[3], 0.25);
        assert_eq!(fractions[6], 1.0);
        assert_eq!(fractions[7], 1.0);
        assert!(fractions.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn progress_handles_degenerate_inputs() {
        assert_eq!(progress_fraction(f64::NAN, 5_000.0), 0.0);
        assert_eq!(progress_fraction(10.0, 0.0), 1.0);
    }

    #[test]
    fn slide_class_matches_direction() {
        assert_eq!(Direction::Forward.slide_class(), Some("slide-forward"));
        assert_eq!(Direction::Backward.slide_class(), Some("slide-backward"));
        assert_eq!(Direction::Still.slide_class(), None);
    }
}

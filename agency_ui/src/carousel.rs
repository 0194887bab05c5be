//! Circular carousel state.
//!
//! Holds the index of the first visible item and whether the auto-advance
//! timer should be running. The timer itself lives in the UI layer; it calls
//! [`Carousel::auto_advance`] on each tick.

use crate::error::{Result, SiteError};

/// Index into a fixed, non-empty circular list plus the autoplay flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    auto_playing: bool,
}

impl Carousel {
    /// Start at index 0 with autoplay on.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(SiteError::EmptyCarousel);
        }
        Ok(Self {
            len,
            index: 0,
            auto_playing: true,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; an empty carousel cannot be constructed.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump straight to `index`. Out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            log::debug!("carousel: ignoring go_to({index}) on {} items", self.len);
            return false;
        }
        self.index = index;
        true
    }

    /// Timer tick: advances only while autoplay is on.
    pub fn auto_advance(&mut self) -> bool {
        if self.auto_playing {
            self.next();
        }
        self.auto_playing
    }

    /// Pointer entered the carousel region.
    pub fn pause(&mut self) {
        self.auto_playing = false;
    }

    /// Pointer left the carousel region.
    pub fn resume(&mut self) {
        self.auto_playing = true;
    }

    /// Indices of the `window` items shown, starting at the current one.
    ///
    /// Wraps past the end, so a list shorter than the window repeats items.
    pub fn visible(&self, window: usize) -> impl Iterator<Item = usize> + '_ {
        (0..window).map(move |offset| (self.index + offset) % self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(Carousel::new(0), Err(SiteError::EmptyCarousel)));
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let mut carousel = Carousel::new(6).unwrap();
        carousel.prev();
        assert_eq!(carousel.current(), 5);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn visible_window_wraps() {
        let mut carousel = Carousel::new(6).unwrap();
        carousel.go_to(5);
        assert_eq!(carousel.visible(3).collect::<Vec<_>>(), vec![5, 0, 1]);
    }

    #[test]
    fn short_list_repeats_in_window() {
        let carousel = Carousel::new(2).unwrap();
        assert_eq!(carousel.visible(3).collect::<Vec<_>>(), vec![0, 1, 0]);
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut carousel = Carousel::new(4).unwrap();
        carousel.go_to(2);
        assert!(!carousel.go_to(4));
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn paused_carousel_does_not_advance() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.pause();
        assert!(!carousel.auto_advance());
        assert_eq!(carousel.current(), 0);
        carousel.resume();
        assert!(carousel.auto_advance());
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn single_item_stays_put() {
        let mut carousel = Carousel::new(1).unwrap();
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.current(), 0);
    }
}

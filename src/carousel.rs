/// Wrap-around cursor over `len` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jumps to `index`, ignoring out of range requests.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.index(), 3);
        c.next();
        assert_eq!(c.index(), 0);
        c.next();
        c.next();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_select_bounds() {
        let mut c = Carousel::new(2);
        c.select(1);
        assert_eq!(c.index(), 1);
        c.select(7);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_empty_is_noop() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        assert_eq!(c.index(), 0);
    }
}

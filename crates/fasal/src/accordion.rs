/// Single-expansion, collapsible accordion state.
///
/// At most one item is open. Toggling the open item collapses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    pub fn close(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let accordion = Accordion::new(5);
        assert_eq!(accordion.open(), None);
        assert!((0..5).all(|i| !accordion.is_open(i)));
    }

    #[test]
    fn opening_another_item_replaces_the_open_one() {
        let mut accordion = Accordion::new(5);
        accordion.toggle(1);
        accordion.toggle(3);
        assert_eq!(accordion.open(), Some(3));
        assert_eq!((0..5).filter(|&i| accordion.is_open(i)).count(), 1);
    }

    #[test]
    fn toggling_the_open_item_collapses_it() {
        let mut accordion = Accordion::new(5);
        accordion.toggle(2);
        accordion.toggle(2);
        assert_eq!(accordion.open(), None);
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut accordion = Accordion::new(5);
        accordion.toggle(0);
        accordion.toggle(5);
        assert_eq!(accordion.open(), Some(0));

        let mut empty = Accordion::new(0);
        empty.toggle(0);
        assert!(empty.is_empty());
        assert_eq!(empty.open(), None);
    }

    #[test]
    fn close_collapses_everything() {
        let mut accordion = Accordion::new(5);
        accordion.toggle(4);
        accordion.close();
        assert_eq!(accordion.open(), None);
    }
}

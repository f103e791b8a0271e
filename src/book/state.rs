/// Whether the book is showing its cover or an interior spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    Open { page: usize },
}

/// Position within the book: closed on the cover, or open to one spread.
///
/// The page index is always in `0..total_pages` while open. All transitions
/// out of range are silent no-ops, so callers never have to pre-validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookState {
    phase: Phase,
    total_pages: usize,
}

impl BookState {
    /// A closed book over `image_count` photos laid out two per spread.
    pub fn new(image_count: usize) -> Self {
        Self {
            phase: Phase::Closed,
            total_pages: image_count.div_ceil(2),
        }
    }

    /// Open the cover onto the first spread. Does nothing if already open;
    /// there is no way back to the cover.
    pub fn open(&mut self) {
        if self.phase == Phase::Closed {
            self.phase = Phase::Open { page: 0 };
        }
    }

    /// Advance one spread, if there is one to advance to.
    pub fn next_page(&mut self) {
        if let Phase::Open { page } = self.phase {
            if page + 1 < self.total_pages {
                self.phase = Phase::Open { page: page + 1 };
            }
        }
    }

    /// Go back one spread, if not already on the first.
    pub fn prev_page(&mut self) {
        if let Phase::Open { page } = self.phase {
            if page > 0 {
                self.phase = Phase::Open { page: page - 1 };
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open { .. })
    }

    /// Current page while open.
    pub fn page(&self) -> Option<usize> {
        match self.phase {
            Phase::Closed => None,
            Phase::Open { page } => Some(page),
        }
    }

    /// Page to lay out under the cover: the current page while open, the
    /// first page while closed (the closed book keeps its first spread
    /// prepared beneath the cover).
    pub fn visible_page(&self) -> usize {
        self.page().unwrap_or(0)
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn can_go_prev(&self) -> bool {
        matches!(self.phase, Phase::Open { page } if page > 0)
    }

    pub fn can_go_next(&self) -> bool {
        matches!(self.phase, Phase::Open { page } if page + 1 < self.total_pages)
    }

    /// True only while open on the final spread of a non-empty book.
    pub fn on_last_spread(&self) -> bool {
        match self.phase {
            Phase::Closed => false,
            Phase::Open { page } => self.total_pages > 0 && page + 1 == self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- construction ---

    #[test]
    fn test_new_book_is_closed() {
        let state = BookState::new(33);
        assert!(!state.is_open());
        assert_eq!(state.page(), None);
        assert_eq!(state.total_pages(), 17);
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(BookState::new(0).total_pages(), 0);
        assert_eq!(BookState::new(1).total_pages(), 1);
        assert_eq!(BookState::new(2).total_pages(), 1);
        assert_eq!(BookState::new(3).total_pages(), 2);
        assert_eq!(BookState::new(33).total_pages(), 17);
    }

    // --- opening ---

    #[test]
    fn test_open_lands_on_first_page() {
        let mut state = BookState::new(6);
        state.open();
        assert!(state.is_open());
        assert_eq!(state.page(), Some(0));
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut state = BookState::new(6);
        state.open();
        state.next_page();
        state.open();
        assert_eq!(state.page(), Some(1), "re-opening must not reset the page");
    }

    #[test]
    fn test_open_empty_book() {
        let mut state = BookState::new(0);
        state.open();
        assert!(state.is_open());
        assert_eq!(state.page(), Some(0));
        assert!(!state.on_last_spread(), "an empty book has no last spread");
    }

    // --- navigation ---

    #[test]
    fn test_navigation_ignored_while_closed() {
        let mut state = BookState::new(6);
        state.next_page();
        state.prev_page();
        assert!(!state.is_open());
        assert_eq!(state.page(), None);
    }

    #[test]
    fn test_next_and_prev_move_one_spread() {
        let mut state = BookState::new(6);
        state.open();
        state.next_page();
        assert_eq!(state.page(), Some(1));
        state.next_page();
        assert_eq!(state.page(), Some(2));
        state.prev_page();
        assert_eq!(state.page(), Some(1));
    }

    #[test]
    fn test_next_stops_at_last_page() {
        let mut state = BookState::new(6);
        state.open();
        for _ in 0..10 {
            state.next_page();
        }
        assert_eq!(state.page(), Some(2));
        assert!(!state.can_go_next());
    }

    #[test]
    fn test_prev_stops_at_first_page() {
        let mut state = BookState::new(6);
        state.open();
        state.prev_page();
        assert_eq!(state.page(), Some(0));
        assert!(!state.can_go_prev());
    }

    #[test]
    fn test_nav_availability_tracks_position() {
        let mut state = BookState::new(6);
        assert!(!state.can_go_prev());
        assert!(!state.can_go_next());
        state.open();
        assert!(!state.can_go_prev());
        assert!(state.can_go_next());
        state.next_page();
        assert!(state.can_go_prev());
        assert!(state.can_go_next());
        state.next_page();
        assert!(state.can_go_prev());
        assert!(!state.can_go_next());
    }

    // --- visible page ---

    #[test]
    fn test_visible_page_defaults_to_first_while_closed() {
        let mut state = BookState::new(6);
        assert_eq!(state.visible_page(), 0);
        state.open();
        state.next_page();
        assert_eq!(state.visible_page(), 1);
    }

    // --- last spread ---

    #[test]
    fn test_last_spread_only_on_final_page() {
        let mut state = BookState::new(6);
        assert!(!state.on_last_spread());
        state.open();
        assert!(!state.on_last_spread());
        state.next_page();
        assert!(!state.on_last_spread());
        state.next_page();
        assert!(state.on_last_spread());
        state.prev_page();
        assert!(!state.on_last_spread());
    }

    #[test]
    fn test_single_photo_book_opens_onto_last_spread() {
        let mut state = BookState::new(1);
        state.open();
        assert!(state.on_last_spread());
    }
}

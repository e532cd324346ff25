// Image preview visibility and paging

/// Callback the preview should fire after a visibility change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityChange {
    Opened,
    Closed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreviewState {
    pub visible: bool,
    /// Index of the slide currently shown.
    pub page: usize,
}

impl PreviewState {
    pub fn new(show: bool, start_position: usize, len: usize) -> Self {
        Self {
            visible: show,
            page: clamp_page(start_position, len),
        }
    }

    /// Follows the `show` prop. Reports a change only when the value differs.
    pub fn sync_show(&mut self, show: bool) -> Option<VisibilityChange> {
        if show == self.visible {
            return None;
        }
        Some(self.set_visible(show))
    }

    pub fn toggle(&mut self) -> VisibilityChange {
        self.set_visible(!self.visible)
    }

    fn set_visible(&mut self, visible: bool) -> VisibilityChange {
        self.visible = visible;
        if visible {
            VisibilityChange::Opened
        } else {
            VisibilityChange::Closed
        }
    }

    pub fn go_to(&mut self, page: usize, len: usize) {
        self.page = clamp_page(page, len);
    }

    pub fn next(&mut self, len: usize) {
        self.go_to(self.page.saturating_add(1), len);
    }

    pub fn prev(&mut self, len: usize) {
        self.go_to(self.page.saturating_sub(1), len);
    }
}

pub fn clamp_page(page: usize, len: usize) -> usize {
    page.min(len.saturating_sub(1))
}

/// `"{current}/{total}"`, one-based. `None` when there is nothing to page through.
pub fn pagination_label(page: usize, len: usize) -> Option<String> {
    if len == 0 {
        return None;
    }
    Some(format!("{}/{}", clamp_page(page, len) + 1, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_show_only_on_change() {
        let mut s = PreviewState::new(false, 0, 3);
        assert_eq!(s.sync_show(false), None);
        assert_eq!(s.sync_show(true), Some(VisibilityChange::Opened));
        assert!(s.visible);
        assert_eq!(s.sync_show(true), None);
        assert_eq!(s.sync_show(false), Some(VisibilityChange::Closed));
    }

    #[test]
    fn test_toggle() {
        let mut s = PreviewState::new(true, 0, 1);
        assert_eq!(s.toggle(), VisibilityChange::Closed);
        assert_eq!(s.toggle(), VisibilityChange::Opened);
    }

    #[test]
    fn test_paging_clamped() {
        let mut s = PreviewState::new(true, 10, 3);
        assert_eq!(s.page, 2);
        s.next(3);
        assert_eq!(s.page, 2);
        s.prev(3);
        s.prev(3);
        s.prev(3);
        assert_eq!(s.page, 0);
        assert_eq!(PreviewState::new(true, 4, 0).page, 0);
    }

    #[test]
    fn test_pagination_label() {
        assert_eq!(pagination_label(0, 3).as_deref(), Some("1/3"));
        assert_eq!(pagination_label(7, 3).as_deref(), Some("3/3"));
        assert_eq!(pagination_label(0, 0), None);
    }
}

//! Bounded selection index shared by the employer and project list screens.

/// A zero-based row index kept inside `[0, len - 1]`, or 0 when the list is empty.
///
/// The list length is passed to every operation instead of being stored, so
/// the cursor can never disagree with the data it indexes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundedCursor {
    index: usize,
}

impl BoundedCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Move one row up. Returns `false` if already at the top.
    pub fn move_up(&mut self, len: usize) -> bool {
        self.clamp(len);
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Move one row down. Returns `false` if already at the bottom.
    pub fn move_down(&mut self, len: usize) -> bool {
        self.clamp(len);
        if self.index + 1 >= len {
            return false;
        }
        self.index += 1;
        true
    }

    /// Pull the index back inside the list bounds.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_bounds() {
        let mut cursor = BoundedCursor::new();
        assert!(cursor.move_down(3));
        assert!(cursor.move_down(3));
        assert_eq!(cursor.index(), 2);
        assert!(!cursor.move_down(3));
        assert_eq!(cursor.index(), 2);

        assert!(cursor.move_up(3));
        assert!(cursor.move_up(3));
        assert!(!cursor.move_up(3));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_empty_list_stays_at_zero() {
        let mut cursor = BoundedCursor::new();
        assert!(!cursor.move_down(0));
        assert!(!cursor.move_up(0));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_single_item_never_moves() {
        let mut cursor = BoundedCursor::new();
        assert!(!cursor.move_down(1));
        assert!(!cursor.move_up(1));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_shrunk_list_is_clamped() {
        let mut cursor = BoundedCursor::new();
        for _ in 0..5 {
            cursor.move_down(10);
        }
        assert_eq!(cursor.index(), 5);
        assert!(cursor.move_up(2));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_reset() {
        let mut cursor = BoundedCursor::new();
        cursor.move_down(4);
        cursor.reset();
        assert_eq!(cursor.index(), 0);
    }
}

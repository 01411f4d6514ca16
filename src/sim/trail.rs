//! Self-growing trail for the trail-run variant
//!
//! An ordered, head-first sequence of occupied cells. The trail advances one cell per
//! tick along its heading; consuming food raises the target length by one so the tail
//! is kept on the next advance. Motion is grid-quantized, so self-intersection is
//! exact cell equality.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::grid::{Cell, Direction};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trail {
    /// Mirrors the front of `segments`, kept in sync by `new` and `advance`
    head: Cell,
    /// Head first; always holds at least the head cell
    segments: VecDeque<Cell>,
    heading: Direction,
    /// Grows by one per food consumed; segments are trimmed to this on advance
    target_len: usize,
}

impl Trail {
    pub fn new(start: Cell, heading: Direction) -> Self {
        let mut segments = VecDeque::new();
        segments.push_front(start);
        Self {
            head: start,
            segments,
            heading,
            target_len: 1,
        }
    }

    pub fn head(&self) -> Cell {
        self.head
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Head-first segment iteration
    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.segments.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Redirect the trail. A direction straight back into the segment behind the
    /// head is ignored; this is the sole input rule preventing instant
    /// self-collision.
    pub fn set_heading(&mut self, dir: Direction) {
        if dir != self.heading.opposite() {
            self.heading = dir;
        }
    }

    /// Step one cell along the heading: push the new head, trim the tail down to
    /// the target length. Returns the new head cell.
    pub fn advance(&mut self) -> Cell {
        let head = self.head.offset(self.heading);
        self.head = head;
        self.segments.push_front(head);
        while self.segments.len() > self.target_len {
            let _ = self.segments.pop_back();
        }
        head
    }

    /// Grow by one segment on the next advance
    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// True when the head occupies the same cell as any other segment
    pub fn hits_self(&self) -> bool {
        let head = self.head();
        self.segments.iter().skip(1).any(|&seg| seg == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_head_keeps_length() {
        let mut trail = Trail::new(Cell::new(5, 5), Direction::Right);
        assert_eq!(trail.advance(), Cell::new(5, 6));
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.head(), Cell::new(5, 6));
    }

    #[test]
    fn test_grow_extends_on_next_advance() {
        let mut trail = Trail::new(Cell::new(5, 5), Direction::Right);
        trail.grow();
        let _ = trail.advance();
        assert_eq!(trail.len(), 2);
        let segments: Vec<Cell> = trail.segments().collect();
        assert_eq!(segments, vec![Cell::new(5, 6), Cell::new(5, 5)]);
    }

    #[test]
    fn test_growth_matches_consumption_count() {
        let mut trail = Trail::new(Cell::new(1, 1), Direction::Right);
        for _ in 0..4 {
            trail.grow();
            let _ = trail.advance();
        }
        assert_eq!(trail.len(), 1 + 4);
    }

    #[test]
    fn test_opposite_heading_rejected() {
        let mut trail = Trail::new(Cell::new(5, 5), Direction::Right);
        trail.set_heading(Direction::Left);
        assert_eq!(trail.heading(), Direction::Right);
        trail.set_heading(Direction::Up);
        assert_eq!(trail.heading(), Direction::Up);
    }

    #[test]
    fn test_self_collision_detected() {
        // Grow into a 5-segment trail, then turn a tight box back into the body.
        let mut trail = Trail::new(Cell::new(5, 5), Direction::Right);
        for _ in 0..4 {
            trail.grow();
            let _ = trail.advance();
        }
        assert!(!trail.hits_self());
        trail.set_heading(Direction::Down);
        let _ = trail.advance();
        trail.set_heading(Direction::Left);
        let _ = trail.advance();
        trail.set_heading(Direction::Up);
        let _ = trail.advance();
        assert!(trail.hits_self());
    }

    #[test]
    fn test_head_tracks_front_segment() {
        let mut trail = Trail::new(Cell::new(3, 3), Direction::Down);
        assert_eq!(Some(trail.head()), trail.segments().next());
        for _ in 0..3 {
            trail.grow();
            let _ = trail.advance();
            assert_eq!(Some(trail.head()), trail.segments().next());
        }
    }

    #[test]
    fn test_no_duplicate_cells_while_moving_straight() {
        let mut trail = Trail::new(Cell::new(2, 2), Direction::Right);
        for _ in 0..3 {
            trail.grow();
            let _ = trail.advance();
            assert!(!trail.hits_self());
        }
    }
}

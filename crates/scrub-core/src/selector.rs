// File: crates/scrub-core/src/selector.rs
// Summary: Drag/resize state machine for the preview-window selector.

use tracing::debug;

use crate::geometry::RectF;
use crate::types::{GRIP_HALF_WIDTH, MIN_SELECTOR_WIDTH, PointerPhase, SELECTOR_VERTICAL_PADDING};

/// The selector's span over the preview strip, in preview pixels.
/// Invariants: `0 <= start`, `start + width <= total`, `width >= min_width`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectorRange {
    pub start: f32,
    pub width: f32,
}

impl SelectorRange {
    pub fn end(&self) -> f32 {
        self.start + self.width
    }
}

/// Drag mode. One variant at a time; both-edges-at-once cannot be expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Moving,
    ResizingLeft,
    ResizingRight,
}

/// The selector's sub-rectangles handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectorRects {
    pub body: RectF,
    pub left_grip: RectF,
    pub right_grip: RectF,
    pub inactive_left: RectF,
    pub inactive_right: RectF,
}

/// State machine driving the preview selector. Pointer events come in raw;
/// every accepted transition yields the updated range for the viewport.
pub struct SelectorController {
    range: SelectorRange,
    total_width: f32,
    min_width: f32,
    state: DragState,
    /// Offset between the selector start and the press point, for body drags.
    d_x: f32,
    /// Press position, used to decide body-drag eligibility on the first move.
    press_x: Option<f32>,
}

impl SelectorController {
    pub fn new(total_width: f32) -> Self {
        Self {
            range: SelectorRange { start: 0.0, width: MIN_SELECTOR_WIDTH },
            total_width: total_width.max(MIN_SELECTOR_WIDTH),
            min_width: MIN_SELECTOR_WIDTH,
            state: DragState::Idle,
            d_x: 0.0,
            press_x: None,
        }
    }

    /// Snap the selector to `width` pixels at the right edge of the strip and
    /// adopt a new total width. Used on load and on surface resize.
    pub fn reset(&mut self, total_width: f32, width: f32) {
        self.total_width = total_width.max(self.min_width);
        self.range.width = width.clamp(self.min_width, self.total_width);
        self.range.start = self.total_width - self.range.width;
        self.state = DragState::Idle;
        self.press_x = None;
    }

    pub fn range(&self) -> SelectorRange {
        self.range
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Feed one pointer event. Returns the updated range when the event
    /// produced an accepted move or resize, `None` otherwise.
    pub fn on_pointer(&mut self, x: f32, phase: PointerPhase) -> Option<SelectorRange> {
        let x = x.clamp(0.0, self.total_width);
        match phase {
            PointerPhase::Down => {
                self.on_down(x);
                None
            }
            PointerPhase::Move => self.on_move(x),
            PointerPhase::Up => {
                self.state = DragState::Idle;
                self.press_x = None;
                None
            }
        }
    }

    fn on_down(&mut self, x: f32) {
        self.d_x = self.range.start - x;
        self.press_x = Some(x);
        // Grip bands win over the body; the right edge is tested first.
        if self.right_grip_band().contains_x(x) {
            self.state = DragState::ResizingRight;
        } else if self.left_grip_band().contains_x(x) {
            self.state = DragState::ResizingLeft;
        } else {
            self.state = DragState::Idle;
        }
        debug!(x, state = ?self.state, "selector press");
    }

    fn on_move(&mut self, x: f32) -> Option<SelectorRange> {
        match self.state {
            DragState::Idle => {
                let press = self.press_x?;
                if !self.body_band().contains_x(press) {
                    return None;
                }
                self.state = DragState::Moving;
                Some(self.move_body(x))
            }
            DragState::Moving => Some(self.move_body(x)),
            DragState::ResizingLeft => {
                // Reject anything that would invert the selector or shrink it
                // below the minimum; deliberate no-op, not an error.
                if x < self.range.end() - self.min_width {
                    let end = self.range.end();
                    self.range.start = x;
                    self.range.width = end - x;
                    Some(self.range)
                } else {
                    None
                }
            }
            DragState::ResizingRight => {
                if x > self.range.start + self.min_width {
                    self.range.width = x - self.range.start;
                    Some(self.range)
                } else {
                    None
                }
            }
        }
    }

    fn move_body(&mut self, x: f32) -> SelectorRange {
        let max_start = self.total_width - self.range.width;
        self.range.start = (x + self.d_x).clamp(0.0, max_start);
        self.range
    }

    fn left_grip_band(&self) -> RectF {
        RectF::from_ltrb(
            self.range.start - GRIP_HALF_WIDTH,
            0.0,
            self.range.start + GRIP_HALF_WIDTH,
            0.0,
        )
    }

    fn right_grip_band(&self) -> RectF {
        RectF::from_ltrb(
            self.range.end() - GRIP_HALF_WIDTH,
            0.0,
            self.range.end() + GRIP_HALF_WIDTH,
            0.0,
        )
    }

    fn body_band(&self) -> RectF {
        RectF::from_ltrb(
            self.range.start + GRIP_HALF_WIDTH,
            0.0,
            self.range.end() - GRIP_HALF_WIDTH,
            0.0,
        )
    }

    /// Decompose the selector into renderable rectangles over a strip of
    /// `height` pixels.
    pub fn rects(&self, height: f32) -> SelectorRects {
        let start = self.range.start;
        let end = self.range.end();
        SelectorRects {
            body: RectF::from_ltrb(
                start,
                SELECTOR_VERTICAL_PADDING,
                end,
                height - SELECTOR_VERTICAL_PADDING,
            ),
            left_grip: RectF::from_ltrb(start, 0.0, start + GRIP_HALF_WIDTH, height),
            right_grip: RectF::from_ltrb(end - GRIP_HALF_WIDTH, 0.0, end, height),
            inactive_left: RectF::from_ltrb(0.0, 0.0, start, height),
            inactive_right: RectF::from_ltrb(end, 0.0, self.total_width, height),
        }
    }
}

//! Draggable floating widget controller.
//!
//! Converts a pointer-drag gesture into a live position offset and, on
//! release, either an edge-snap placement or a tap activation. The gesture
//! protocol has three phases that always arrive in order for a single
//! pointer: grant (touch-down), zero or more moves, release. Out-of-order
//! phase calls are silent no-ops, matching the total-function policy of
//! the timer engine.
//!
//! The controller shares no state with the timer engine; it only renders a
//! read-only [`TimerDisplay`](crate::timer::TimerDisplay) snapshot into its
//! badge text.

use serde::{Deserialize, Serialize};

use crate::timer::{format_badge, TimerDisplay};

/// Widget diameter in screen units.
pub const WIDGET_DIAMETER: f32 = 56.0;
/// Scale applied while a drag gesture is active.
pub const PRESSED_SCALE: f32 = 1.1;
/// Releases that moved less than this on both axes count as taps.
pub const TAP_THRESHOLD: f32 = 10.0;
/// Resting x offset when snapping to the left edge.
pub const SNAP_LEFT_X: f32 = 20.0;
/// Inset from the right edge when snapping right (margin plus diameter).
pub const SNAP_RIGHT_INSET: f32 = 76.0;

/// Position and visual scale of the widget's anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetPosition {
    pub x: f32,
    pub y: f32,
    /// Transiently above 1 while a gesture is active; exactly 1 at rest.
    pub scale: f32,
}

/// Screen dimensions the snap targets are computed against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: f32,
    pub height: f32,
}

/// Classification of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Minimal movement on both axes; fires the activation signal.
    Tap,
    /// The widget was dragged; no activation fires.
    Drag,
}

/// Result of a release: the classification plus the edge-snapped resting
/// position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseOutcome {
    pub outcome: GestureOutcome,
    pub position: WidgetPosition,
}

impl ReleaseOutcome {
    /// Whether the activation signal fires for this release.
    pub fn activated(&self) -> bool {
        self.outcome == GestureOutcome::Tap
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum GestureState {
    Idle,
    Dragging {
        /// Anchor position at grant time.
        base_x: f32,
        base_y: f32,
        /// Accumulated offset since grant.
        dx: f32,
        dy: f32,
    },
}

/// Gesture state machine for the floating widget.
///
/// Owns [`WidgetPosition`] exclusively. Position updates during a drag are
/// applied directly with no bounds clamping; only the release computes a
/// constrained (edge-snapped) resting position.
#[derive(Debug, Clone)]
pub struct DraggableWidgetController {
    position: WidgetPosition,
    screen: ScreenBounds,
    gesture: GestureState,
}

impl DraggableWidgetController {
    /// Place the widget at its initial resting spot: flush against the
    /// right edge, near the top of the screen.
    pub fn new(screen: ScreenBounds) -> Self {
        Self {
            position: WidgetPosition {
                x: screen.width - SNAP_RIGHT_INSET,
                y: 100.0,
                scale: 1.0,
            },
            screen,
            gesture: GestureState::Idle,
        }
    }

    /// Restore a controller around a previously saved resting position.
    pub fn with_position(screen: ScreenBounds, position: WidgetPosition) -> Self {
        Self {
            position,
            screen,
            gesture: GestureState::Idle,
        }
    }

    pub fn position(&self) -> WidgetPosition {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, GestureState::Dragging { .. })
    }

    /// Badge text shown on the widget: the remaining time, only while the
    /// countdown is running.
    pub fn badge_label(&self, display: &TimerDisplay) -> Option<String> {
        display
            .running
            .then(|| format_badge(display.remaining_seconds))
    }

    /// Touch-down. Scales the widget up and begins tracking the gesture.
    pub fn grant(&mut self) {
        if self.is_dragging() {
            return;
        }
        self.position.scale = PRESSED_SCALE;
        self.gesture = GestureState::Dragging {
            base_x: self.position.x,
            base_y: self.position.y,
            dx: 0.0,
            dy: 0.0,
        };
    }

    /// A move sample: offset from the grant point, applied directly to the
    /// displayed position. Never clamps.
    pub fn drag_move(&mut self, dx: f32, dy: f32) {
        let GestureState::Dragging { base_x, base_y, .. } = self.gesture else {
            return;
        };
        self.position.x = base_x + dx;
        self.position.y = base_y + dy;
        self.gesture = GestureState::Dragging {
            base_x,
            base_y,
            dx,
            dy,
        };
    }

    /// Touch-up at the absolute screen coordinate `(move_x, move_y)`.
    ///
    /// Scale returns to exactly 1. The release is a tap when both axes
    /// moved less than [`TAP_THRESHOLD`] since grant. Either way the widget
    /// snaps horizontally: left of the screen midpoint rests at
    /// [`SNAP_LEFT_X`], the midpoint itself and everything right of it
    /// rests at `width - SNAP_RIGHT_INSET`. The resting y centers the
    /// widget on the release point and is not clamped vertically.
    pub fn release(&mut self, move_x: f32, move_y: f32) -> Option<ReleaseOutcome> {
        let GestureState::Dragging { dx, dy, .. } = self.gesture else {
            return None;
        };
        self.gesture = GestureState::Idle;

        let snap_x = if move_x < self.screen.width / 2.0 {
            SNAP_LEFT_X
        } else {
            self.screen.width - SNAP_RIGHT_INSET
        };
        self.position = WidgetPosition {
            x: snap_x,
            y: move_y - WIDGET_DIAMETER / 2.0,
            scale: 1.0,
        };

        let outcome = if dx.abs() < TAP_THRESHOLD && dy.abs() < TAP_THRESHOLD {
            GestureOutcome::Tap
        } else {
            GestureOutcome::Drag
        };
        Some(ReleaseOutcome {
            outcome,
            position: self.position,
        })
    }
}

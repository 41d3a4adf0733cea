//! Single-pointer drag gesture interface.

/// Receiver of a single-pointer drag gesture.
///
/// A gesture is delivered as one start, zero or more moves and one end, in
/// that order. Move displacements are cumulative since the start.
pub trait GestureHandler {
    /// Value emitted when the gesture changes something.
    type Output;

    /// Pointer went down at `(x, y)`. What the coordinates are relative to
    /// is up to the implementor.
    fn on_gesture_start(&mut self, x: f64, y: f64);

    /// Pointer moved by `(dx, dy)` since the start.
    fn on_gesture_move(&mut self, dx: f64, dy: f64) -> Option<Self::Output>;

    /// Pointer was lifted or the gesture was released.
    fn on_gesture_end(&mut self) -> Option<Self::Output>;
}

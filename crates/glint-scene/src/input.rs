//! Key-state tracking with per-frame edge detection.

/// Keys the demo cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move forward
    W,
    /// Strafe left
    A,
    /// Move backward
    S,
    /// Strafe right
    D,
    /// Quit
    Escape,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Debug toggle
    F1,
}

impl Key {
    pub(crate) const COUNT: usize = 10;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Tracks current and previous-frame key state.
///
/// Keeping the previous frame's snapshot is what makes a single key press
/// distinguishable from a key that stays down across frames: without it a
/// press would "extend" through every frame until release.
///
/// [`pressed`](InputState::pressed) fires on the down edge only;
/// [`held`](InputState::held) is true once a key has been down for at
/// least two consecutive frames.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    curr: [bool; Key::COUNT],
    prev: [bool; Key::COUNT],
}

impl InputState {
    /// Creates a tracker with every key released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rolls the current snapshot into the previous one. Call once at the
    /// top of each frame, before feeding this frame's transitions.
    pub fn begin_frame(&mut self) {
        self.prev = self.curr;
    }

    /// Records a key transition for the current frame.
    #[inline]
    pub fn set_key(&mut self, key: Key, pressed: bool) {
        self.curr[key.index()] = pressed;
    }

    /// True only on the frame the key goes down.
    #[inline]
    pub fn pressed(&self, key: Key) -> bool {
        !self.prev[key.index()] && self.curr[key.index()]
    }

    /// True while the key stays down across frames.
    #[inline]
    pub fn held(&self, key: Key) -> bool {
        self.prev[key.index()] && self.curr[key.index()]
    }
}

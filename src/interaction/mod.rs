use serde::{Deserialize, Serialize};

use crate::core::Sample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureMode {
    Idle,
    /// A pan/press gesture is driving the read-out indicator.
    Selecting,
}

/// Sample newly selected under the pointer for one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointSelection {
    pub series_index: usize,
    pub sample: Sample,
}

/// Pointer/gesture state published by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    mode: GestureMode,
    pointer_x: f64,
    pointer_y: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: GestureMode::Idle,
            pointer_x: 0.0,
            pointer_y: 0.0,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> GestureMode {
        self.mode
    }

    #[must_use]
    pub fn is_selecting(self) -> bool {
        self.mode == GestureMode::Selecting
    }

    #[must_use]
    pub fn pointer(self) -> (f64, f64) {
        (self.pointer_x, self.pointer_y)
    }

    pub fn on_gesture_start(&mut self, x: f64, y: f64) {
        self.mode = GestureMode::Selecting;
        self.on_pointer_move(x, y);
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer_x = x;
        self.pointer_y = y;
    }

    pub fn on_gesture_end(&mut self) {
        self.mode = GestureMode::Idle;
    }
}

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{PixelPoint, nearest_pixel_index, y_for_x};
use crate::extensions::GraphEvent;
use crate::interaction::PointSelection;
use crate::render::Renderer;

use super::{GraphEngine, SeriesState};

/// Selections produced by one pointer update; most graphs carry one or two series.
pub type SelectionBatch = SmallVec<[PointSelection; 2]>;

impl<R: Renderer> GraphEngine<R> {
    /// Begins a read-out gesture at pointer position `(x, y)`.
    pub fn gesture_start(&mut self, x: f64, y: f64) -> SelectionBatch {
        self.interaction.on_gesture_start(x, y);
        self.emit_plugin_event(GraphEvent::GestureStarted { x, y });
        self.update_selection()
    }

    /// Moves the read-out indicator while a gesture is active.
    ///
    /// Returns the series whose nearest visible sample changed; the same
    /// selections are dispatched to plugins as `GraphEvent::PointSelected`.
    /// Pointer moves outside a gesture are ignored.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> SelectionBatch {
        if !self.interaction.is_selecting() {
            trace!(x, y, "pointer move ignored outside gesture");
            return SelectionBatch::new();
        }
        self.interaction.on_pointer_move(x, y);
        self.update_selection()
    }

    /// Ends the gesture and hides every indicator.
    pub fn gesture_end(&mut self) {
        self.interaction.on_gesture_end();
        for state in self.series.values_mut() {
            state.clear_selection();
        }
        self.emit_plugin_event(GraphEvent::GestureEnded);
    }

    /// Re-places indicators on the curves as currently drawn, e.g. after a
    /// progress update moved them. Does not change the selected samples.
    pub(super) fn refresh_indicators(&mut self) {
        if !self.interaction.is_selecting() {
            return;
        }
        let (pointer_x, _) = self.interaction.pointer();
        for state in self.series.values_mut() {
            state.indicator = indicator_on_current_line(state, pointer_x);
        }
    }

    pub(super) fn refresh_selection_after_rebuild(&mut self) {
        if self.interaction.is_selecting() {
            let _ = self.update_selection();
        }
    }

    fn update_selection(&mut self) -> SelectionBatch {
        let (pointer_x, _) = self.interaction.pointer();
        let mut changed = SelectionBatch::new();

        for (series_index, state) in self.series.values_mut().enumerate() {
            state.indicator = indicator_on_current_line(state, pointer_x);

            let nearest = nearest_pixel_index(state.visible_pixels(), pointer_x);
            if nearest == state.selected {
                continue;
            }
            state.selected = nearest;
            if let Some(sample) = state.selected_sample() {
                changed.push(PointSelection {
                    series_index,
                    sample,
                });
            }
        }

        trace!(pointer_x, changed = changed.len(), "selection updated");
        for selection in &changed {
            self.emit_plugin_event(GraphEvent::PointSelected(*selection));
        }
        changed
    }
}

/// Indicator position on the drawn line, with the pointer clamped to the
/// line's horizontal extent so the dot sticks to the ends while dragging past.
fn indicator_on_current_line(state: &SeriesState, pointer_x: f64) -> Option<PixelPoint> {
    let line = state.current_line();
    let (min_x, max_x) = line.x_extent()?;
    let x = if pointer_x.is_finite() {
        pointer_x.clamp(min_x, max_x)
    } else {
        return None;
    };
    y_for_x(line.commands(), x).map(|y| PixelPoint::new(x, y))
}

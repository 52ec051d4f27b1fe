use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::Curve;

/// Endpoints of one in-flight crossfade. An absent (or empty) endpoint is
/// drawn as a flat placeholder on the baseline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurvePair {
    pub from: Option<Curve>,
    pub to: Option<Curve>,
}

impl CurvePair {
    #[must_use]
    pub fn settled(curve: Curve) -> Self {
        Self {
            from: Some(curve.clone()),
            to: Some(curve),
        }
    }
}

/// Interpolates point-wise between two curves.
///
/// `progress` is clamped to `[0, 1]`; `0` yields `from`, `1` yields `to`.
/// Curves with different command structure cannot be blended and hard-cut to
/// `to` at every progress value.
#[must_use]
pub fn interpolate_curves(from: &Curve, to: &Curve, progress: f64) -> Curve {
    if !from.is_compatible_with(to) {
        return to.clone();
    }

    let progress = if progress.is_nan() {
        1.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    if progress == 0.0 {
        return from.clone();
    }
    if progress == 1.0 {
        return to.clone();
    }

    Curve::from_commands(
        from.commands()
            .iter()
            .zip(to.commands())
            .filter_map(|(a, b)| a.lerp(*b, progress))
            .collect(),
    )
}

/// Crossfade state for one animated path.
///
/// Progress is an external signal; the host's animation driver advances it
/// from `0` to `1` after every [`CurveTransition::push`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveTransition {
    pair: CurvePair,
    progress: f64,
    baseline_y: f64,
}

impl CurveTransition {
    #[must_use]
    pub fn new(baseline_y: f64) -> Self {
        Self {
            pair: CurvePair::default(),
            progress: 1.0,
            baseline_y,
        }
    }

    #[must_use]
    pub fn pair(&self) -> &CurvePair {
        &self.pair
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.progress >= 1.0
    }

    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        self.baseline_y
    }

    pub fn set_baseline_y(&mut self, baseline_y: f64) {
        self.baseline_y = baseline_y;
    }

    /// Publishes a new progress sample. NaN is ignored; other values are
    /// clamped. Reaching `1` collapses the pair onto its `to` endpoint.
    ///
    /// Returns `true` when the sample was applied.
    pub fn set_progress(&mut self, progress: f64) -> bool {
        if progress.is_nan() {
            warn!("ignoring NaN transition progress");
            return false;
        }

        self.progress = progress.clamp(0.0, 1.0);
        trace!(progress = self.progress, "transition progress");
        if self.is_settled() {
            self.pair.from = self.pair.to.clone();
        }
        true
    }

    /// Starts a transition towards `curve`.
    ///
    /// The new `from` is whatever is on screen right now: the interpolated
    /// in-flight curve, or the previous target once settled.
    pub fn push(&mut self, curve: Curve) {
        let from = if self.is_settled() {
            self.pair.to.take()
        } else {
            Some(self.current()).filter(|current| !current.is_empty())
        };

        self.pair = CurvePair {
            from,
            to: Some(curve),
        };
        self.progress = 0.0;
    }

    /// Replaces the pair without animating.
    pub fn reset(&mut self, curve: Curve) {
        self.pair = CurvePair::settled(curve);
        self.progress = 1.0;
    }

    /// Jumps to the end of the running transition.
    pub fn settle(&mut self) {
        self.set_progress(1.0);
    }

    /// Curve to draw at the current progress.
    #[must_use]
    pub fn current(&self) -> Curve {
        let from = self.pair.from.as_ref().filter(|curve| !curve.is_empty());
        let to = self.pair.to.as_ref().filter(|curve| !curve.is_empty());

        match (from, to) {
            (Some(from), Some(to)) => interpolate_curves(from, to, self.progress),
            (None, Some(to)) => {
                interpolate_curves(&to.flattened_to(self.baseline_y), to, self.progress)
            }
            (Some(from), None) => {
                interpolate_curves(from, &from.flattened_to(self.baseline_y), self.progress)
            }
            (None, None) => Curve::empty(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Continuous radial scale consumed by the engine as an opaque collaborator.
///
/// The engine owns the domain (set from the visible value range each render)
/// and the range (set to `[0, radius]` when the scale is bound); everything
/// else about the mapping belongs to the implementor. Implementations must be
/// thread-safe so projection can fan out under the `parallel-projection`
/// feature.
pub trait RadialScale: Send + Sync {
    fn set_domain(&mut self, min: f64, max: f64);

    fn set_range(&mut self, start: f64, end: f64);

    /// Maps a raw value into a radial pixel distance.
    fn scale(&self, value: f64) -> f64;

    /// Produces approximately `count` human-readable values spanning the
    /// current domain.
    fn ticks(&self, count: usize) -> Vec<f64>;
}

/// Linear domain-to-range mapping with round-valued tick generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRadialScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl Default for LinearRadialScale {
    fn default() -> Self {
        Self {
            domain_start: 0.0,
            domain_end: 1.0,
            range_start: 0.0,
            range_end: 1.0,
        }
    }
}

impl LinearRadialScale {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }
}

impl RadialScale for LinearRadialScale {
    fn set_domain(&mut self, min: f64, max: f64) {
        self.domain_start = min;
        self.domain_end = max;
    }

    fn set_range(&mut self, start: f64, end: f64) {
        self.range_start = start;
        self.range_end = end;
    }

    fn scale(&self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return self.range_start;
        }
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain_start, self.domain_end, count)
    }
}

/// Round tick values over `[start, stop]`, snapping the step to a
/// 1/2/5/10 ladder.
///
/// A collapsed domain produces the single boundary value.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let count = count.max(1);
    let reversed = stop < start;
    let (low, high) = if reversed { (stop, start) } else { (start, stop) };

    let step = tick_increment(low, high, count);
    let mut ticks = if step > 0.0 {
        let first = (low / step).ceil();
        let last = (high / step).floor();
        let mut out = Vec::new();
        let mut index = first;
        while index <= last {
            out.push(index * step);
            index += 1.0;
        }
        out
    } else {
        // Sub-unit spacing is encoded as a negative inverse step.
        let inverse = -step;
        let first = (low * inverse).ceil();
        let last = (high * inverse).floor();
        let mut out = Vec::new();
        let mut index = first;
        while index <= last {
            out.push(index / inverse);
            index += 1.0;
        }
        out
    };

    if reversed {
        ticks.reverse();
    }
    ticks
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);

    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10_f64.powf(power)
    } else {
        -(10_f64.powf(-power)) / factor
    }
}

use crate::{
    foundation::core::Point,
    foundation::error::{GalaxiaError, GalaxiaResult},
};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

/// One key of a cycle-relative track.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Keyframe<T> {
    /// Position within the cycle, `0.0..=1.0`.
    pub at: f64,
    pub value: T,
}

impl<T> Keyframe<T> {
    pub fn new(at: f64, value: T) -> Self {
        Self { at, value }
    }
}

/// Piecewise-linear track over one animation cycle.
///
/// Keys run from `at = 0` to `at = 1` in non-decreasing order. Two keys may share a time to
/// express an instant jump; sampling exactly at such a time yields the later key.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Keyframes<T> {
    pub keys: Vec<Keyframe<T>>,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn new(keys: Vec<Keyframe<T>>) -> GalaxiaResult<Self> {
        let kf = Self { keys };
        kf.validate()?;
        Ok(kf)
    }

    pub fn validate(&self) -> GalaxiaResult<()> {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return Err(GalaxiaError::validation("keyframes must not be empty"));
        };
        if first.at != 0.0 || last.at != 1.0 {
            return Err(GalaxiaError::validation(
                "keyframes must start at 0 and end at 1",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(GalaxiaError::validation(
                "keyframes must be sorted by time",
            ));
        }
        Ok(())
    }

    /// Sample at cycle fraction `at` (clamped to `[0, 1]`).
    pub fn sample(&self, at: f64) -> T {
        self.value_right(at.clamp(0.0, 1.0))
    }

    // Value approaching `at` from the right: at a jump, the later key wins.
    fn value_right(&self, at: f64) -> T {
        let idx = self.keys.partition_point(|k| k.at <= at);
        self.interpolate(idx, at)
    }

    // Value approaching `at` from the left: at a jump, the earlier key wins.
    fn value_left(&self, at: f64) -> T {
        let idx = self.keys.partition_point(|k| k.at < at);
        self.interpolate(idx, at)
    }

    fn interpolate(&self, idx: usize, at: f64) -> T {
        if idx == 0 {
            return self.keys[0].value.clone();
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].value.clone();
        }
        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.at - a.at;
        if denom <= 0.0 {
            return b.value.clone();
        }
        T::lerp(&a.value, &b.value, (at - a.at) / denom)
    }

    /// Re-time a periodic profile so its `at = 0` lands on cycle fraction `anchor`.
    ///
    /// `self` describes one period relative to the event (`at` = time since the event). The
    /// stretch that runs past the end of the cycle is moved to its start, with keys inserted
    /// at the seam so the result is again a valid `0..=1` track.
    pub fn anchored(&self, anchor: f64) -> Self {
        let anchor = anchor.rem_euclid(1.0);
        if anchor == 0.0 || self.keys.is_empty() {
            return self.clone();
        }
        let seam = 1.0 - anchor;

        let mut keys = Vec::with_capacity(self.keys.len() + 2);
        keys.push(Keyframe::new(0.0, self.value_right(seam)));
        keys.extend(
            self.keys
                .iter()
                .filter(|k| k.at > seam)
                .map(|k| Keyframe::new((anchor + (k.at - 1.0)).max(0.0), k.value.clone())),
        );
        keys.extend(
            self.keys
                .iter()
                .filter(|k| k.at < seam)
                .map(|k| Keyframe::new((k.at + anchor).min(1.0), k.value.clone())),
        );
        keys.push(Keyframe::new(1.0, self.value_left(seam)));
        Self { keys }
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.keys.iter().map(|k| k.at)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.keys.iter().map(|k| &k.value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;

/// Default spacing between bucket keys.
pub const DEFAULT_BUCKET_WIDTH: u64 = 10_000;

/// Euclidean norm of a momentum vector.
#[inline]
pub fn magnitude(x: f64, y: f64, z: f64) -> f64 {
    (x * x + y * y + z * z).sqrt()
}

/// Maps a momentum triple to the key of its fixed-width bucket:
/// `round(|p| / width) * width`, ties rounding half away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucketizer {
    width: u64,
}

impl Default for Bucketizer {
    fn default() -> Self {
        Self {
            width: DEFAULT_BUCKET_WIDTH,
        }
    }
}

impl Bucketizer {
    /// Returns `None` for a zero width.
    pub fn new(width: u64) -> Option<Self> {
        (width > 0 && width <= i64::MAX as u64).then_some(Self { width })
    }

    pub fn width(&self) -> u64 {
        self.width
    }

    /// Bucket key for `(x, y, z)`, or `None` when the magnitude is not finite
    /// or the key would not fit in an `i64`.
    #[inline]
    pub fn bucket_of(&self, x: f64, y: f64, z: f64) -> Option<i64> {
        self.bucket_of_magnitude(magnitude(x, y, z))
    }

    #[inline]
    pub fn bucket_of_magnitude(&self, magnitude: f64) -> Option<i64> {
        if !magnitude.is_finite() {
            return None;
        }
        let width = self.width as i64;
        let steps = (magnitude / width as f64).round();
        // Bounds check before the cast: `as` saturates silently
        if steps < i64::MIN as f64 || steps >= i64::MAX as f64 {
            return None;
        }
        (steps as i64).checked_mul(width)
    }
}

/// Bucket key with the default width of 10000.
#[inline]
pub fn bucketize(x: f64, y: f64, z: f64) -> Option<i64> {
    Bucketizer::default().bucket_of(x, y, z)
}

pub const MAX_PATTERN_LENGTH: usize = 32;

/// Symbol that selects the second ("excited") driving parameter.
pub const EXCITED_SYMBOL: char = 'B';
pub const BASE_SYMBOL: char = 'A';

/// Forcing sequence in numeric form: each slot is the interpolation weight
/// between the two driving parameters, `0.0` for the base one and `1.0` for
/// the excited one.
///
/// `len()` is never zero; the kernel indexes the pattern modulo its length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EncodedPattern {
    values: [f64; MAX_PATTERN_LENGTH],
    length: usize,
}

impl EncodedPattern {
    /// Encodes a symbolic pattern. Anything other than `B` counts as base,
    /// input beyond 32 symbols is ignored and an empty input becomes a single
    /// base step.
    #[must_use]
    pub fn encode(pattern: &str) -> Self {
        let mut values = [0.0; MAX_PATTERN_LENGTH];
        let mut length = 0;

        for (slot, symbol) in values.iter_mut().zip(pattern.chars()) {
            *slot = if symbol == EXCITED_SYMBOL { 1.0 } else { 0.0 };
            length += 1;
        }

        Self {
            values,
            length: length.max(1),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Weight for iteration `step`, wrapping around the pattern.
    #[must_use]
    pub fn weight(&self, step: usize) -> f64 {
        self.values[step % self.length]
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values[..self.length]
    }

    /// The full fixed-capacity array, trailing slots zeroed.
    #[must_use]
    pub fn raw(&self) -> &[f64; MAX_PATTERN_LENGTH] {
        &self.values
    }
}

impl Default for EncodedPattern {
    fn default() -> Self {
        Self::encode("")
    }
}

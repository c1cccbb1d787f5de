use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("shrink factor must lie strictly between 0 and 1, got {0}")]
    ShrinkFactorOutOfRange(f32),
}

/// Capacity policy of a [`SliceContainer`](crate::SliceContainer).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SliceSettings {
    shrink_factor: f32,
    initial_capacity: usize,
}

impl SliceSettings {
    pub const DEFAULT_SHRINK_FACTOR: f32 = 0.25;

    /// Creates settings with the given shrink factor and no initial
    /// allocation.
    ///
    /// After a removal, a buffer whose `len / capacity` is at or below the
    /// shrink factor gives back half of its capacity.
    pub fn new(shrink_factor: f32) -> Result<Self, SettingsError> {
        if shrink_factor.is_nan() || shrink_factor <= 0.0 || shrink_factor >= 1.0 {
            return Err(SettingsError::ShrinkFactorOutOfRange(shrink_factor));
        }

        Ok(Self {
            shrink_factor,
            initial_capacity: 0,
        })
    }

    /// Capacity allocated on construction and restored by `clear`.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn shrink_factor(&self) -> f32 {
        self.shrink_factor
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}

impl Default for SliceSettings {
    fn default() -> Self {
        Self {
            shrink_factor: Self::DEFAULT_SHRINK_FACTOR,
            initial_capacity: 0,
        }
    }
}

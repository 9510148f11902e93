//! Detection parameters and their validation.

// ── Error type ─────────────────────────────────────────────────────────────

/// Errors raised by parameter validation before any accumulator is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamError {
    /// Radius must be at least 1 pixel.
    ZeroRadius,
    /// `radius_min` exceeds `radius_max`.
    EmptyRadiusRange {
        /// Lower bound of the requested scan.
        min: u32,
        /// Upper bound of the requested scan.
        max: u32,
    },
    /// Accumulator cell size must be positive and finite.
    NonPositiveCellStep {
        /// Offending cell step value.
        cell_step: f32,
    },
    /// Angular step must be in `(0, 360]` degrees.
    AngleStepOutOfRange {
        /// Offending angle step value.
        angle_step: f32,
    },
}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroRadius => write!(f, "radius must be at least 1"),
            Self::EmptyRadiusRange { min, max } => {
                write!(f, "empty radius range: min {} > max {}", min, max)
            }
            Self::NonPositiveCellStep { cell_step } => {
                write!(f, "cell step must be positive and finite, got {}", cell_step)
            }
            Self::AngleStepOutOfRange { angle_step } => {
                write!(
                    f,
                    "angle step must be in (0, 360] degrees, got {}",
                    angle_step
                )
            }
        }
    }
}

impl std::error::Error for ParamError {}

// ── Parameters ─────────────────────────────────────────────────────────────

/// Configuration for the circle Hough transform and radius scan.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Lower bound of the radius search (pixels, inclusive).
    pub radius_min: u32,
    /// Upper bound of the radius search (pixels, inclusive).
    pub radius_max: u32,
    /// Accumulator cell size in pixels. Smaller cells localize centers
    /// more precisely at higher time and memory cost.
    pub cell_step: f32,
    /// Angular voting resolution in degrees. Smaller steps cast more votes
    /// per edge pixel.
    pub angle_step: f32,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            radius_min: 10,
            radius_max: 35,
            cell_step: 1.0,
            angle_step: 1.0,
        }
    }
}

impl HoughParams {
    /// Check all parameter constraints.
    ///
    /// Called by [`crate::find_circles`] before any allocation; unchecked,
    /// invalid values would produce zero-size accumulators or unbounded
    /// angle loops.
    pub fn validate(&self) -> Result<(), ParamError> {
        check_cell_step(self.cell_step)?;
        check_angle_step(self.angle_step)?;
        if self.radius_min == 0 {
            return Err(ParamError::ZeroRadius);
        }
        if self.radius_min > self.radius_max {
            return Err(ParamError::EmptyRadiusRange {
                min: self.radius_min,
                max: self.radius_max,
            });
        }
        Ok(())
    }
}

pub(crate) fn check_cell_step(cell_step: f32) -> Result<(), ParamError> {
    if !(cell_step > 0.0 && cell_step.is_finite()) {
        return Err(ParamError::NonPositiveCellStep { cell_step });
    }
    Ok(())
}

pub(crate) fn check_angle_step(angle_step: f32) -> Result<(), ParamError> {
    if !(angle_step > 0.0 && angle_step <= 360.0) {
        return Err(ParamError::AngleStepOutOfRange { angle_step });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = HoughParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.radius_min, 10);
        assert_eq!(params.radius_max, 35);
        assert!((params.cell_step - 1.0).abs() < 1e-6);
        assert!((params.angle_step - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_bad_cell_step() {
        let params = HoughParams {
            cell_step: 0.0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamError::NonPositiveCellStep { cell_step: 0.0 })
        );

        let params = HoughParams {
            cell_step: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamError::NonPositiveCellStep { .. })
        ));

        let params = HoughParams {
            cell_step: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamError::NonPositiveCellStep { .. })
        ));
    }

    #[test]
    fn rejects_bad_angle_step() {
        for bad in [0.0f32, -1.0, 360.5, f32::NAN] {
            let params = HoughParams {
                angle_step: bad,
                ..Default::default()
            };
            assert!(matches!(
                params.validate(),
                Err(ParamError::AngleStepOutOfRange { .. })
            ));
        }
        let params = HoughParams {
            angle_step: 360.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_bad_radius_range() {
        let params = HoughParams {
            radius_min: 0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ParamError::ZeroRadius));

        let params = HoughParams {
            radius_min: 20,
            radius_max: 10,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamError::EmptyRadiusRange { min: 20, max: 10 })
        );
    }
}

//! Filter parameters and their normalization.
//!
//! Parameters arrive as loosely-typed JSON values. They are coerced to
//! integers the way a permissive `int()` conversion would: integers pass
//! through, floats truncate toward zero, numeric strings are parsed, and
//! booleans become `0`/`1`. Anything else is rejected.

use serde_json::Value;

use crate::error::FilterError;

/// Default Gaussian kernel size.
pub const DEFAULT_GAUSSIAN_BLUR: i64 = 7;

/// Default lower hysteresis threshold.
pub const DEFAULT_CANNY_LOWER_THRESHOLD: i64 = 30;

/// Default upper hysteresis threshold.
pub const DEFAULT_CANNY_UPPER_THRESHOLD: i64 = 100;

/// Largest accepted Gaussian kernel size, after the parity fix.
pub const MAX_GAUSSIAN_BLUR: u32 = 4097;

/// Normalized parameters for the blur + edge-detection pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterParams {
    /// Square Gaussian kernel size, always odd and positive
    pub blur_kernel: u32,

    /// Lower hysteresis threshold
    pub low_threshold: i32,

    /// Upper hysteresis threshold
    pub high_threshold: i32,
}

impl FilterParams {
    /// Build parameters from raw integers.
    ///
    /// An even kernel size is bumped to the next odd value. The result must
    /// be at least 1. Thresholds are saturated to the `i32` range and are not
    /// checked against each other.
    pub fn new(blur: i64, low: i64, high: i64) -> Result<Self, FilterError> {
        let blur_kernel = normalize_kernel_size(blur)?;

        Ok(Self {
            blur_kernel,
            low_threshold: saturate_i32(low),
            high_threshold: saturate_i32(high),
        })
    }

    /// Build parameters from the optional JSON fields of a request body.
    ///
    /// Absent fields take their default. An explicit `null` is not a default
    /// and fails coercion.
    pub fn from_json_fields(
        gaussian_blur: Option<&Value>,
        lower: Option<&Value>,
        upper: Option<&Value>,
    ) -> Result<Self, FilterError> {
        let blur = coerce_or_default("gaussianBlur", gaussian_blur, DEFAULT_GAUSSIAN_BLUR)?;
        let low = coerce_or_default("cannyLowerThreshold", lower, DEFAULT_CANNY_LOWER_THRESHOLD)?;
        let high = coerce_or_default("cannyUpperThreshold", upper, DEFAULT_CANNY_UPPER_THRESHOLD)?;

        Self::new(blur, low, high)
    }
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            blur_kernel: DEFAULT_GAUSSIAN_BLUR as u32,
            low_threshold: DEFAULT_CANNY_LOWER_THRESHOLD as i32,
            high_threshold: DEFAULT_CANNY_UPPER_THRESHOLD as i32,
        }
    }
}

/// Make a kernel size odd by rounding even values up, then require it to lie
/// in `1..=MAX_GAUSSIAN_BLUR`.
pub fn normalize_kernel_size(size: i64) -> Result<u32, FilterError> {
    let size = if size % 2 == 0 {
        size.saturating_add(1)
    } else {
        size
    };

    if size < 1 {
        return Err(FilterError::InvalidParameter {
            name: "gaussianBlur",
            reason: format!("kernel size must be positive, got {}", size),
        });
    }

    if size > i64::from(MAX_GAUSSIAN_BLUR) {
        return Err(FilterError::InvalidParameter {
            name: "gaussianBlur",
            reason: format!(
                "kernel size {} exceeds the maximum of {}",
                size, MAX_GAUSSIAN_BLUR
            ),
        });
    }

    Ok(size as u32)
}

/// Coerce a JSON value to an integer.
pub fn coerce_int(name: &'static str, value: &Value) -> Result<i64, FilterError> {
    let invalid = |reason: String| FilterError::InvalidParameter { name, reason };

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                if f.is_finite() {
                    Ok(f.trunc() as i64)
                } else {
                    Err(invalid(format!("{} is not finite", f)))
                }
            } else {
                Err(invalid(format!("{} is out of range", n)))
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| invalid(format!("cannot parse {:?}: {}", s, e))),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Null => Err(invalid("null is not a number".to_string())),
        Value::Array(_) => Err(invalid("array is not a number".to_string())),
        Value::Object(_) => Err(invalid("object is not a number".to_string())),
    }
}

fn coerce_or_default(
    name: &'static str,
    value: Option<&Value>,
    default: i64,
) -> Result<i64, FilterError> {
    match value {
        Some(v) => coerce_int(name, v),
        None => Ok(default),
    }
}

fn saturate_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

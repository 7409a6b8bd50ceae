use crate::error::LinkRateError;
use num_traits::{AsPrimitive, Float};

/// Speed of light in m/s
const C: usize = 299_792_458;

/// Converts a frequency in Hz to its free-space wavelength in meters.
///
/// A frequency of exactly zero is a divisor of zero and returns
/// [`LinkRateError::DivisionByZero`].
pub fn freq_to_wavelen<T>(f_hz: T) -> Result<T, LinkRateError>
where
    T: Float + 'static,
    usize: AsPrimitive<T>,
{
    if f_hz == T::zero() {
        return Err(LinkRateError::DivisionByZero("freq"));
    }
    Ok(C.as_() / f_hz)
}

/// Converts a gain or loss in dB to a linear power ratio.
pub fn db_to_linear<T>(db: T) -> T
where
    T: Float + 'static,
    usize: AsPrimitive<T>,
{
    let ten: T = 10.as_();
    ten.powf(db / ten)
}

use crate::{budget::LinkBudget, error::LinkRateError};
use num_traits::Float;

impl<T> LinkBudget<T>
where
    T: Float,
{
    /// Maximum error-free bitrate of this link in bits per second,
    /// per the Shannon-Hartley theorem.
    ///
    /// Returns [`LinkRateError::DivisionByZero`] when the noise power
    /// is zero (zero bandwidth or zero noise spectral density).
    pub fn max_bitrate(&self) -> Result<T, LinkRateError> {
        if self.noise_w == T::zero() {
            return Err(LinkRateError::DivisionByZero("noise power"));
        }
        let snr = self.carrier_w / self.noise_w;
        Ok(self.bandwidth_hz * (T::one() + snr).log2())
    }
}

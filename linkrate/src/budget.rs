use crate::{
    error::LinkRateError,
    units::{db_to_linear, freq_to_wavelen},
};
use log::debug;
use num_traits::{AsPrimitive, Float, FloatConst};
use std::fmt::Debug;

/// Fixed transmit line loss, dB.
const LINE_LOSS_DB: f64 = -1.0;

/// Fixed atmospheric loss, dB.
const ATMOSPHERIC_LOSS_DB: f64 = 0.0;

/// Free-space link budget for a point-to-point radio link.
#[derive(Debug, Clone)]
pub struct LinkBudget<T> {
    /// Received carrier power in watts.
    pub carrier_w: T,

    /// Noise power over the channel bandwidth, in watts.
    pub noise_w: T,

    /// Channel bandwidth in Hz.
    pub bandwidth_hz: T,
}

impl<T> LinkBudget<T> {
    pub fn builder() -> LinkBudgetBuilder<T> {
        LinkBudgetBuilder {
            tx_power_w: None,
            tx_gain_db: None,
            freq_hz: None,
            distance_km: None,
            rx_gain_db: None,
            noise_density: None,
            bandwidth_hz: None,
        }
    }
}

pub struct LinkBudgetBuilder<T = f64> {
    /// Transmitter power in watts (required).
    tx_power_w: Option<T>,

    /// Transmitter antenna gain in dB (required).
    tx_gain_db: Option<T>,

    /// Carrier frequency in Hz (required).
    freq_hz: Option<T>,

    /// Link distance in kilometers (required).
    distance_km: Option<T>,

    /// Receiver antenna gain in dB (required).
    rx_gain_db: Option<T>,

    /// Receiver noise spectral density in W/Hz (required).
    noise_density: Option<T>,

    /// Channel bandwidth in Hz (required).
    bandwidth_hz: Option<T>,
}

impl<T> LinkBudgetBuilder<T>
where
    T: Float + FloatConst + Debug + 'static,
    usize: AsPrimitive<T>,
    f64: AsPrimitive<T>,
{
    /// Transmitter power (watts, required).
    #[must_use]
    pub fn tx_power(mut self, watts: T) -> Self {
        self.tx_power_w = Some(watts);
        self
    }

    /// Transmitter antenna gain (dB, required).
    #[must_use]
    pub fn tx_gain(mut self, db: T) -> Self {
        self.tx_gain_db = Some(db);
        self
    }

    /// Carrier frequency (Hz, required).
    #[must_use]
    pub fn freq(mut self, freq_hz: T) -> Self {
        self.freq_hz = Some(freq_hz);
        self
    }

    /// Link distance (kilometers, required).
    #[must_use]
    pub fn distance(mut self, km: T) -> Self {
        self.distance_km = Some(km);
        self
    }

    /// Receiver antenna gain (dB, required).
    #[must_use]
    pub fn rx_gain(mut self, db: T) -> Self {
        self.rx_gain_db = Some(db);
        self
    }

    /// Receiver noise spectral density (W/Hz, required).
    #[must_use]
    pub fn noise_density(mut self, joules: T) -> Self {
        self.noise_density = Some(joules);
        self
    }

    /// Channel bandwidth (Hz, required).
    #[must_use]
    pub fn bandwidth(mut self, bw_hz: T) -> Self {
        self.bandwidth_hz = Some(bw_hz);
        self
    }

    /// Evaluates the Friis free-space transmission equation for the
    /// supplied parameters.
    ///
    /// Zero or negative distances are not guarded against and yield a
    /// non-finite carrier power.
    pub fn build(&self) -> Result<LinkBudget<T>, LinkRateError> {
        let tx_power_w = self.tx_power_w.ok_or(LinkRateError::Builder("tx_power"))?;
        let tx_gain_db = self.tx_gain_db.ok_or(LinkRateError::Builder("tx_gain"))?;
        let freq_hz = self.freq_hz.ok_or(LinkRateError::Builder("freq"))?;
        let distance_km = self.distance_km.ok_or(LinkRateError::Builder("distance"))?;
        let rx_gain_db = self.rx_gain_db.ok_or(LinkRateError::Builder("rx_gain"))?;
        let noise_density = self
            .noise_density
            .ok_or(LinkRateError::Builder("noise_density"))?;
        let bandwidth_hz = self.bandwidth_hz.ok_or(LinkRateError::Builder("bandwidth"))?;

        let wavelen = freq_to_wavelen(freq_hz)?;
        let distance_m = distance_km * 1000.as_();

        let line_loss = db_to_linear(LINE_LOSS_DB.as_());
        let atmospheric_loss = db_to_linear(ATMOSPHERIC_LOSS_DB.as_());
        let tx_gain = db_to_linear(tx_gain_db);
        let rx_gain = db_to_linear(rx_gain_db);
        let path_gain = (wavelen / (4.as_() * T::PI() * distance_m)).powi(2);

        let carrier_w = tx_power_w * line_loss * tx_gain * path_gain * atmospheric_loss * rx_gain;
        let noise_w = noise_density * bandwidth_hz;
        debug!("wavelen {wavelen:?} m, carrier {carrier_w:?} W, noise {noise_w:?} W");

        Ok(LinkBudget {
            carrier_w,
            noise_w,
            bandwidth_hz,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::LinkBudget;
    use crate::error::LinkRateError;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_missing_parameter() {
        let res = LinkBudget::<f64>::builder().tx_power(10.0).build();
        assert!(matches!(res, Err(LinkRateError::Builder("tx_gain"))));
    }

    #[test]
    fn test_zero_freq_is_division_by_zero() {
        let res = LinkBudget::<f64>::builder()
            .tx_power(10.0)
            .tx_gain(20.0)
            .freq(0.0)
            .distance(20.0)
            .rx_gain(15.0)
            .noise_density(1e-20)
            .bandwidth(1e7)
            .build();
        assert!(matches!(res, Err(LinkRateError::DivisionByZero("freq"))));
    }

    #[test]
    fn test_2_4_ghz_20_km_budget() {
        let budget = LinkBudget::<f64>::builder()
            .tx_power(10.0)
            .tx_gain(20.0)
            .freq(2.4e9)
            .distance(20.0)
            .rx_gain(15.0)
            .noise_density(1e-20)
            .bandwidth(1e7)
            .build()
            .unwrap();
        assert_approx_eq!(budget.carrier_w, 6.2049630986178745e-9, 1e-20);
        assert_approx_eq!(budget.noise_w, 1e-13, 1e-25);
    }

    #[test]
    fn test_zero_distance_is_unguarded() {
        let budget = LinkBudget::<f64>::builder()
            .tx_power(10.0)
            .tx_gain(20.0)
            .freq(2.4e9)
            .distance(0.0)
            .rx_gain(15.0)
            .noise_density(1e-20)
            .bandwidth(1e7)
            .build()
            .unwrap();
        assert!(budget.carrier_w.is_infinite());
    }
}

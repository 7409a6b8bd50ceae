use clap::Parser;

/// Compute the Shannon-limit maximum bitrate of a point-to-point
/// radio link.
#[derive(Parser, Debug, Clone)]
#[command(version, allow_negative_numbers = true)]
pub struct Cli {
    /// Transmitter power, in watts.
    pub tx_power: f64,

    /// Transmitter antenna gain, in dB.
    pub tx_gain: f64,

    /// Carrier frequency, in Hz.
    pub freq: f64,

    /// Link distance, in kilometers.
    pub dist: f64,

    /// Receiver antenna gain, in dB.
    pub rx_gain: f64,

    /// Receiver noise spectral density, in W/Hz.
    pub noise_density: f64,

    /// Channel bandwidth, in Hz.
    pub bandwidth: f64,
}

mod options;

use anyhow::Error as AnyError;
use clap::{error::ErrorKind, Parser};
use linkrate::LinkBudget;
use options::Cli;
use std::process::ExitCode;

const USAGE: &str = "usage: linkcalc tx_power_w tx_gain_db freq_hz dist_km rx_gain_db n0_joules bw_hz";

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if err.kind() == ErrorKind::DisplayHelp
                || err.kind() == ErrorKind::DisplayVersion =>
        {
            print!("{err}");
            return ExitCode::SUCCESS;
        }
        Err(err) if err.kind() == ErrorKind::ValueValidation => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
        // Wrong argument count.
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AnyError> {
    let budget = LinkBudget::<f64>::builder()
        .tx_power(cli.tx_power)
        .tx_gain(cli.tx_gain)
        .freq(cli.freq)
        .distance(cli.dist)
        .rx_gain(cli.rx_gain)
        .noise_density(cli.noise_density)
        .bandwidth(cli.bandwidth)
        .build()?;
    let bitrate = budget.max_bitrate()?;
    println!("{}", bitrate.floor());
    Ok(())
}

use anyhow::Context;
use clap::Parser;
use log::warn;

use sun_times::cli::{self, Cli};
use sun_times::{SolarEvent, SolarTimeCalculator};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    let location = cli.location().context("invalid location")?;
    let calculator = SolarTimeCalculator::new(cli.date());

    for event in [SolarEvent::Sunrise, SolarEvent::Sunset] {
        let result = calculator.event(&location, event);
        if let Err(err) = &result {
            warn!("{err}");
        }
        let outcome = cli::event_outcome(result).with_context(|| format!("{event} failed"))?;
        println!("{}", cli::render_event(event, outcome));
    }

    if cli.noon {
        println!(
            "Solar noon: {}",
            cli::format_clock_time(calculator.solar_noon(&location))
        );
    }

    Ok(())
}

//! `estimates` command: show the trip estimate update for a snapshot.

use console::style;
use turnbanner::config::ConfigFile;
use turnbanner::guidance::{arrival_outcome, ArrivalOutcome, TimeRemainingColor, TripEstimateUpdate};
use turnbanner::route::load_snapshot;

use super::common::{resolve_formatter, DisplayArgs};
use crate::error::CliError;

/// Run the estimates command.
pub fn run(args: DisplayArgs, config: &ConfigFile) -> Result<(), CliError> {
    let progress = load_snapshot(&args.snapshot)?;
    let formatter = resolve_formatter(&args, config);

    let update = TripEstimateUpdate::from_progress(&progress, &formatter);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&update)?);
        return Ok(());
    }

    println!(
        "Leg {} of {}",
        progress.leg_index + 1,
        progress.leg_count.max(progress.leg_index + 1)
    );
    println!("  trip:     {}", colored_trip(&update));
    println!("  maneuver: {}", update.maneuver);

    let next_stop = match arrival_outcome(&progress, None) {
        ArrivalOutcome::TripComplete => "final destination".to_string(),
        ArrivalOutcome::Waypoint { .. } => "waypoint".to_string(),
    };
    println!("  leg ends at: {}", next_stop);

    Ok(())
}

fn colored_trip(update: &TripEstimateUpdate) -> String {
    let text = update.trip.to_string();
    match update.trip_color {
        TimeRemainingColor::Default => text,
        TimeRemainingColor::Green => style(text).green().to_string(),
        TimeRemainingColor::Orange => style(text).yellow().to_string(),
        TimeRemainingColor::Red => style(text).red().to_string(),
    }
}

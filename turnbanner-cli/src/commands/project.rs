//! `project` command: show the banners a snapshot projects to.

use console::style;
use turnbanner::config::ConfigFile;
use turnbanner::projector::{ManeuverDisplayRecord, ManeuverRole};
use turnbanner::route::load_snapshot;

use super::common::{resolve_projector, DisplayArgs};
use crate::error::CliError;

/// Run the project command.
pub fn run(args: DisplayArgs, config: &ConfigFile) -> Result<(), CliError> {
    let progress = load_snapshot(&args.snapshot)?;
    let projector = resolve_projector(&args, config);

    let records = projector.project(&progress);
    tracing::debug!(
        snapshot = %args.snapshot.display(),
        records = records.len(),
        scale = projector.config().display_scale,
        "Projected snapshot"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No visual instruction for the current step; nothing to display.");
        return Ok(());
    }

    for record in &records {
        let heading = match record.role {
            ManeuverRole::Primary => style("Primary").green().bold(),
            ManeuverRole::Tertiary => style("Then").cyan().bold(),
        };
        println!("{}", heading);
        for line in describe(record) {
            println!("  {}", line);
        }
    }

    Ok(())
}

/// Text lines describing one record.
fn describe(record: &ManeuverDisplayRecord) -> Vec<String> {
    let mut lines: Vec<String> = record
        .display_text()
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect();

    if let Some(icon) = &record.icon {
        lines.push(format!("icon: {}", icon));
    }
    if let Some(estimates) = &record.estimates {
        lines.push(format!("in {}", estimates));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnbanner::format::ApproximateDistanceFormatter;
    use turnbanner::projector::TravelEstimates;

    #[test]
    fn test_describe_splits_lines_and_adds_estimates() {
        let formatter = ApproximateDistanceFormatter::default();
        let record = ManeuverDisplayRecord {
            role: ManeuverRole::Primary,
            instruction: Some("Turn right onto Main St\nDestination on the right".to_string()),
            rendered: None,
            icon: None,
            estimates: Some(TravelEstimates::new(&formatter, 320.0, 42.0)),
        };

        let lines = describe(&record);
        assert_eq!(
            lines,
            vec![
                "Turn right onto Main St".to_string(),
                "Destination on the right".to_string(),
                "in 300 m, 1 min".to_string(),
            ]
        );
    }

    #[test]
    fn test_describe_without_text() {
        let record = ManeuverDisplayRecord {
            role: ManeuverRole::Tertiary,
            instruction: None,
            rendered: None,
            icon: None,
            estimates: None,
        };
        assert!(describe(&record).is_empty());
    }
}

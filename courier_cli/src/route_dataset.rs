use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use clap::Args;
use comfy_table::Table;
use courier_routing::RoutingAlgorithm;
use indicatif::{ProgressBar, ProgressStyle};
use jiff::civil::Time;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::{
    arrival::{ArrivalTime, DEFAULT_DEPARTURE},
    file_utils::{default_output_file_name, read_folder},
    parsers,
    report::ReportFormat,
    route::{RouteOutcome, route_file},
};

#[derive(Args)]
pub struct RouteDatasetArgs {
    /// Network file or folder of network files
    #[arg(short, long)]
    dataset: PathBuf,

    /// Output folder for the reports, defaults to next to each network file
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_parser = parsers::parse_departure, default_value = "10:00")]
    departure: Time,

    #[arg(short, long, default_value_t = RoutingAlgorithm::Dijkstra)]
    algorithm: RoutingAlgorithm,

    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

pub fn run(args: RouteDatasetArgs) -> Result<(), anyhow::Error> {
    info!("Routing dataset {:?}", args.dataset);
    let (root, paths) = if args.dataset.is_file() {
        let root = args.dataset.parent().unwrap_or(Path::new(""));
        (root, vec![args.dataset.clone()])
    } else {
        (args.dataset.as_path(), read_folder(&args.dataset)?)
    };

    let bar = ProgressBar::new(paths.len() as u64);
    bar.enable_steady_tick(Duration::from_millis(250));
    bar.set_style(ProgressStyle::default_bar().template("[{bar:40}] ({pos}/{len})")?);

    let outcomes: Vec<(PathBuf, anyhow::Result<RouteOutcome>)> = paths
        .par_iter()
        .map(|input| {
            let output = output_path(args.output.as_deref(), root, input);
            let outcome = route_file(input, &output, args.departure, args.algorithm, args.format);
            bar.inc(1);
            (input.clone(), outcome)
        })
        .collect();

    bar.finish_and_clear();

    println!("{}", summary_table(&outcomes, args.departure));

    let failures = outcomes
        .iter()
        .filter(|(_, outcome)| outcome.is_err())
        .count();
    if failures > 0 {
        warn!("{} of {} network files could not be routed", failures, outcomes.len());
    }

    Ok(())
}

/// Report path of `input`. Under an output folder the report keeps the
/// input's sub folder relative to `dataset_root`, so same-named network files
/// of different sub folders get distinct reports.
fn output_path(output_folder: Option<&Path>, dataset_root: &Path, input: &Path) -> PathBuf {
    let file_name = default_output_file_name(input);
    match output_folder {
        Some(folder) => {
            let relative = input
                .parent()
                .and_then(|parent| parent.strip_prefix(dataset_root).ok())
                .unwrap_or(Path::new(""));
            folder.join(relative).join(file_name)
        }
        None => input.with_file_name(file_name),
    }
}

fn summary_table(outcomes: &[(PathBuf, anyhow::Result<RouteOutcome>)], departure: Time) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["File", "DC", "WH", "Route", "Distance", "Arrival"]);

    for (input, outcome) in outcomes {
        let file = input.display().to_string();

        match outcome {
            Ok(outcome) => match outcome.result.distance() {
                Some(distance) => table.add_row(vec![
                    file,
                    outcome.source.clone(),
                    outcome.destination.clone(),
                    outcome.result.path().join(" -> "),
                    format!("{distance}km"),
                    ArrivalTime::estimate(departure, distance).to_string(),
                ]),
                None => table.add_row(vec![
                    file,
                    outcome.source.clone(),
                    outcome.destination.clone(),
                    String::from("not found"),
                    String::from("-"),
                    String::from("-"),
                ]),
            },
            Err(error) => table.add_row(vec![
                file,
                String::from("-"),
                String::from("-"),
                format!("error: {error:#}"),
                String::from("-"),
                String::from("-"),
            ]),
        };
    }

    table
}

use std::path::{Path, PathBuf};

use clap::Args;
use courier_routing::{RoutingAlgorithm, SearchResult};
use jiff::civil::Time;
use tracing::{debug, info, warn};

use crate::{
    config::RouteSettings,
    file_utils::write_file,
    network_parser::NetworkParser,
    parsers,
    report::{ReportFormat, RouteReport},
};

#[derive(Args, Default)]
pub struct RouteArgs {
    /// Network file, defaults to $COURIER_INPUT_FILE or inputPS3.txt
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Report file, defaults to $COURIER_OUTPUT_FILE or a name derived from the input
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Departure time from the distribution centre (e.g. "10", "9:30")
    #[arg(long, value_parser = parsers::parse_departure)]
    departure: Option<Time>,

    #[arg(short, long, default_value_t = RoutingAlgorithm::Dijkstra)]
    algorithm: RoutingAlgorithm,

    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

/// Outcome of routing one network file.
#[derive(Debug)]
pub struct RouteOutcome {
    pub source: String,
    pub destination: String,
    pub result: SearchResult,
    /// Written report, absent when no route was found
    pub report: Option<PathBuf>,
}

pub fn run(args: RouteArgs) -> anyhow::Result<()> {
    let settings = RouteSettings::resolve(args.input, args.output, args.departure)?;

    if !settings.input.is_file() {
        anyhow::bail!("Input file not present: {}", settings.input.display());
    }

    let outcome = route_file(
        &settings.input,
        &settings.output,
        settings.departure,
        args.algorithm,
        args.format,
    )?;

    match outcome.report {
        Some(report) => info!("Output file generated -> {}", report.display()),
        None => warn!(
            "Either source '{}' or destination '{}' is not valid",
            outcome.source, outcome.destination
        ),
    }

    Ok(())
}

/// Reads the network in `input`, searches the route and writes the report to
/// `output` when a route exists.
pub fn route_file(
    input: &Path,
    output: &Path,
    departure: Time,
    algorithm: RoutingAlgorithm,
    format: ReportFormat,
) -> anyhow::Result<RouteOutcome> {
    info!("Reading the input file -> {}", input.display());
    let network = NetworkParser.parse_file(input)?;

    let mut request = network.routing_request();
    request.algorithm = Some(algorithm);

    let graph = network.into_graph();
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Graph generated from the input file"
    );

    info!(
        "Calculating the shortest path from '{}' to '{}' ({})",
        request.source, request.destination, algorithm
    );
    let result = request.route(&graph);

    let report = match RouteReport::new(&request, &result, departure) {
        Some(report) => {
            debug!("Shortest path is {}", report.path_description());

            let mut content = Vec::new();
            report.write(&mut content, format)?;
            write_file(output, &content)?;

            Some(output.to_path_buf())
        }
        None => None,
    };

    Ok(RouteOutcome {
        source: request.source,
        destination: request.destination,
        result,
        report,
    })
}

#[cfg(test)]
mod tests {
    use std::env;

    use crate::arrival::DEFAULT_DEPARTURE;

    use super::*;

    fn output_folder(name: &str) -> PathBuf {
        let folder = env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&folder);
        folder
    }

    #[test]
    fn test_route_file_writes_report() {
        let input = env::current_dir()
            .unwrap()
            .join("tests/fixtures/inputPS3.txt");
        let folder = output_folder("courier_route_file_test");
        let output = folder.join("outputPS3.txt");

        let outcome = route_file(
            &input,
            &output,
            DEFAULT_DEPARTURE,
            RoutingAlgorithm::Dijkstra,
            ReportFormat::Text,
        )
        .unwrap();

        assert_eq!(outcome.result.path(), &["a", "b", "d", "e"]);
        assert_eq!(outcome.result.total_cost(), 11);
        assert_eq!(outcome.report.as_deref(), Some(output.as_path()));
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "Shortest route from DC 'a' to reach Warehouse 'e' is  [ a b d e ]\n\
             and it has minimum travel distance 11km\n\
             it will take the driver 11 minutes to reach\n\
             Expected arrival time at the warehouse is 10:11 am\n"
        );

        std::fs::remove_dir_all(&folder).unwrap();
    }

    #[test]
    fn test_route_file_without_route_writes_nothing() {
        let input = env::current_dir()
            .unwrap()
            .join("tests/fixtures/dataset/nested/route2.txt");
        let folder = output_folder("courier_route_not_found_test");
        let output = folder.join("report.txt");

        let outcome = route_file(
            &input,
            &output,
            DEFAULT_DEPARTURE,
            RoutingAlgorithm::FrontierScan,
            ReportFormat::Text,
        )
        .unwrap();

        assert_eq!(outcome.result.total_cost(), -1);
        assert!(outcome.report.is_none());
        assert!(!output.exists());
    }

    #[test]
    fn test_route_file_missing_input() {
        let folder = output_folder("courier_route_missing_input_test");

        let result = route_file(
            &folder.join("inputPS3.txt"),
            &folder.join("outputPS3.txt"),
            DEFAULT_DEPARTURE,
            RoutingAlgorithm::Dijkstra,
            ReportFormat::Text,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_run_reports_missing_input() {
        let folder = output_folder("courier_route_run_missing_input_test");
        let input = folder.join("inputPS3.txt");

        let error = run(RouteArgs {
            input: Some(input.clone()),
            output: Some(folder.join("outputPS3.txt")),
            departure: Some(DEFAULT_DEPARTURE),
            ..RouteArgs::default()
        })
        .unwrap_err();

        assert_eq!(
            error.to_string(),
            format!("Input file not present: {}", input.display())
        );
        assert!(!folder.exists());
    }
}

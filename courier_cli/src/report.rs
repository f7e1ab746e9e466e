use std::io::Write;

use clap::ValueEnum;
use courier_routing::{PathLeg, RoutingRequest, SearchResult, types::Weight};
use jiff::civil::Time;
use serde::Serialize;

use crate::arrival::ArrivalTime;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Human readable summary of a found route.
#[derive(Debug, Serialize)]
pub struct RouteReport<'a> {
    source: &'a str,
    destination: &'a str,
    path: &'a [String],
    legs: &'a [PathLeg],
    distance_km: Weight,
    travel_minutes: Weight,
    arrival: String,
}

impl<'a> RouteReport<'a> {
    /// `None` when the search did not find a route.
    pub fn new(
        request: &'a RoutingRequest,
        result: &'a SearchResult,
        departure: Time,
    ) -> Option<RouteReport<'a>> {
        let distance = result.distance()?;

        Some(RouteReport {
            source: &request.source,
            destination: &request.destination,
            path: result.path(),
            legs: result.legs(),
            distance_km: distance,
            travel_minutes: distance,
            arrival: ArrivalTime::estimate(departure, distance).to_string(),
        })
    }

    pub fn path_description(&self) -> String {
        let mut description = String::from("[ ");
        for node in self.path {
            description.push_str(node);
            description.push(' ');
        }
        description.push(']');
        description
    }

    pub fn write<W: Write>(&self, sink: &mut W, format: ReportFormat) -> anyhow::Result<()> {
        match format {
            ReportFormat::Text => self.write_text(sink)?,
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *sink, self)?;
                writeln!(sink)?;
            }
        }

        Ok(())
    }

    pub fn write_text<W: Write>(&self, sink: &mut W) -> std::io::Result<()> {
        writeln!(
            sink,
            "Shortest route from DC '{}' to reach Warehouse '{}' is  {}",
            self.source,
            self.destination,
            self.path_description()
        )?;
        writeln!(
            sink,
            "and it has minimum travel distance {}km",
            self.distance_km
        )?;
        writeln!(
            sink,
            "it will take the driver {} minutes to reach",
            self.travel_minutes
        )?;
        writeln!(
            sink,
            "Expected arrival time at the warehouse is {}",
            self.arrival
        )
    }
}

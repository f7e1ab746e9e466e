use std::path::Path;

use courier_routing::{Graph, GraphEdge, GraphError, RoutingRequest};
use thiserror::Error;

const SOURCE_KEY: &str = "DC Node";
const DESTINATION_KEY: &str = "WH Node";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read network file")]
    Io(#[from] std::io::Error),
    #[error("Invalid cost on line {line}: {value}")]
    InvalidCost { line: usize, value: String },
    #[error("Invalid edge on line {line}")]
    InvalidEdge {
        line: usize,
        #[source]
        error: GraphError,
    },
    #[error("Missing 'DC Node' line")]
    MissingSource,
    #[error("Missing 'WH Node' line")]
    MissingDestination,
}

/// Edges of a delivery network together with the requested route, from the
/// distribution centre (DC) to the warehouse (WH).
#[derive(Debug, Clone)]
pub struct DeliveryNetwork {
    pub edges: Vec<GraphEdge>,
    pub source: String,
    pub destination: String,
}

impl DeliveryNetwork {
    pub fn routing_request(&self) -> RoutingRequest {
        RoutingRequest::new(self.source.clone(), self.destination.clone())
    }

    pub fn into_graph(self) -> Graph {
        Graph::new(self.edges)
    }
}

/// Reads networks written as
///
/// ```text
/// a / b / 5
/// b / c / 10
/// DC Node: a
/// WH Node: c
/// ```
///
/// Lines that are neither an edge nor a `key: value` pair are skipped.
pub struct NetworkParser;

impl NetworkParser {
    pub fn parse_file<P: AsRef<Path>>(&self, file: P) -> Result<DeliveryNetwork, ParseError> {
        let file_content = std::fs::read_to_string(file)?;
        parse(&file_content)
    }
}

pub fn parse(text: &str) -> Result<DeliveryNetwork, ParseError> {
    let mut edges = Vec::new();
    let mut source: Option<String> = None;
    let mut destination: Option<String> = None;

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let fields: Vec<&str> = line.split('/').map(str::trim).collect();

        match fields.as_slice() {
            [start, end, cost] => {
                let cost: i64 = cost.parse().map_err(|_| ParseError::InvalidCost {
                    line: line_number,
                    value: cost.to_string(),
                })?;

                let edge = GraphEdge::new(*start, *end, cost).map_err(|error| {
                    ParseError::InvalidEdge {
                        line: line_number,
                        error,
                    }
                })?;

                edges.push(edge);
            }
            [entry] => {
                let parts: Vec<&str> = entry.split(':').map(str::trim).collect();

                match parts.as_slice() {
                    [SOURCE_KEY, value] => source = Some(value.to_string()),
                    [DESTINATION_KEY, value] => destination = Some(value.to_string()),
                    _ => {}
                }
            }
            _ => {}
        }
    }

    Ok(DeliveryNetwork {
        edges,
        source: source.ok_or(ParseError::MissingSource)?,
        destination: destination.ok_or(ParseError::MissingDestination)?,
    })
}

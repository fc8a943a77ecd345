//! Degree command: incidence details for one vertex

use clap::Args;
use serde::Serialize;

use edgeloom_core::{Edge, FileSystemLoader, GraphBuilder, ValueParser};

use crate::commands::GraphArgs;
use crate::config::Config;
use crate::output::{csv_row, to_json, OutputFormat};
use crate::settings::Settings;
use crate::typed::{dispatch, CliValue, TypedCommand};
use crate::Cli;

#[derive(Args)]
pub struct DegreeArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Vertex to inspect
    pub vertex: String,
}

#[derive(Serialize)]
struct VertexReport<'a, V, E> {
    vertex: &'a V,
    degree: usize,
    in_degree: usize,
    neighbors: Vec<&'a V>,
    edges: Vec<&'a Edge<V, E>>,
}

struct InspectVertex<'a> {
    resource: &'a str,
    vertex: &'a str,
}

impl TypedCommand for InspectVertex<'_> {
    type Output = String;

    fn run<V, E, PV, PE>(
        self,
        builder: GraphBuilder<V, E, PV, PE, FileSystemLoader>,
        settings: &Settings,
    ) -> anyhow::Result<String>
    where
        V: CliValue,
        E: CliValue,
        PV: ValueParser<V>,
        PE: ValueParser<E>,
    {
        let vertex = builder.parse_vertex(self.vertex)?;
        let graph = builder.build(self.resource, settings.kind)?;

        let report = VertexReport {
            vertex: &vertex,
            degree: graph.degree(&vertex)?,
            in_degree: graph.in_degree(&vertex)?,
            neighbors: graph.neighbors(&vertex)?,
            edges: graph.incident_edges(&vertex)?,
        };

        match settings.format {
            OutputFormat::Json => to_json(&report),
            OutputFormat::Csv => Ok([
                csv_row(["vertex", "degree", "in_degree"]),
                csv_row([
                    report.vertex.to_string(),
                    report.degree.to_string(),
                    report.in_degree.to_string(),
                ]),
            ]
            .join("\n")),
            OutputFormat::Table => {
                let neighbors: Vec<String> =
                    report.neighbors.iter().map(|v| v.to_string()).collect();
                let mut lines = vec![
                    format!(
                        "{}: degree {}, in-degree {}",
                        report.vertex, report.degree, report.in_degree
                    ),
                    format!("Neighbors: {}", neighbors.join(", ")),
                ];
                if !report.edges.is_empty() {
                    lines.push("Edges:".to_string());
                    lines.extend(report.edges.iter().map(|edge| format!("  {}", edge)));
                }
                Ok(lines.join("\n"))
            }
        }
    }
}

pub fn run(args: &DegreeArgs, cli: &Cli, config: &Config) -> anyhow::Result<()> {
    tracing::debug!(
        "Running degree command for {} in {}",
        args.vertex,
        args.graph.resource
    );

    let settings = Settings::resolve(cli, &args.graph, config)?;
    let output = dispatch(
        args.graph.vertices,
        args.graph.attributes,
        args.graph.default_attribute.as_deref(),
        &settings,
        InspectVertex {
            resource: &args.graph.resource,
            vertex: &args.vertex,
        },
    )?;
    println!("{}", output);
    Ok(())
}

//! Build command: assemble a graph and print its vertices, degrees and edges

use edgeloom_core::{EdgeKind, FileSystemLoader, Graph, GraphBuilder, ValueParser};

use crate::commands::GraphArgs;
use crate::config::Config;
use crate::output::{csv_row, to_json, OutputFormat};
use crate::settings::Settings;
use crate::typed::{dispatch, CliValue, TypedCommand};
use crate::Cli;

struct BuildGraph<'a> {
    resource: &'a str,
}

impl TypedCommand for BuildGraph<'_> {
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
        let graph = builder.build(self.resource, settings.kind)?;
        tracing::info!(
            "Built {} graph from {}: {} vertices, {} edges",
            graph.kind(),
            self.resource,
            graph.vertex_count(),
            graph.edge_count()
        );
        render(&graph, settings.format)
    }
}

fn render<V: CliValue, E: CliValue>(graph: &Graph<V, E>, format: OutputFormat) -> anyhow::Result<String> {
    let summary = graph.summary();
    match format {
        OutputFormat::Json => to_json(&summary),
        OutputFormat::Csv => {
            let mut lines = vec![csv_row(["vertex", "degree", "in_degree"])];
            lines.extend(summary.vertices.iter().map(|v| {
                csv_row([v.vertex.to_string(), v.degree.to_string(), v.in_degree.to_string()])
            }));
            Ok(lines.join("\n"))
        }
        OutputFormat::Table => {
            let mut lines = vec![format!(
                "{} graph: {} vertices, {} edges",
                summary.kind, summary.vertex_count, summary.edge_count
            )];
            if !summary.vertices.is_empty() {
                lines.push("Vertices:".to_string());
                for v in &summary.vertices {
                    match summary.kind {
                        EdgeKind::Undirected => {
                            lines.push(format!("  {} (degree {})", v.vertex, v.degree))
                        }
                        EdgeKind::Directed => lines.push(format!(
                            "  {} (out {}, in {})",
                            v.vertex, v.degree, v.in_degree
                        )),
                    }
                }
            }
            if !summary.edges.is_empty() {
                lines.push("Edges:".to_string());
                lines.extend(summary.edges.iter().map(|edge| format!("  {}", edge)));
            }
            Ok(lines.join("\n"))
        }
    }
}

pub fn run(args: &GraphArgs, cli: &Cli, config: &Config) -> anyhow::Result<()> {
    tracing::debug!("Running build command for resource: {}", args.resource);

    let settings = Settings::resolve(cli, args, config)?;
    let output = dispatch(
        args.vertices,
        args.attributes,
        args.default_attribute.as_deref(),
        &settings,
        BuildGraph {
            resource: &args.resource,
        },
    )?;
    println!("{}", output);
    Ok(())
}

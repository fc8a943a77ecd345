//! Edges command: parse a resource into its ordered edge list without assembling

use edgeloom_core::{FileSystemLoader, GraphBuilder, ValueParser};

use crate::commands::GraphArgs;
use crate::config::Config;
use crate::output::{csv_row, to_json, OutputFormat};
use crate::settings::Settings;
use crate::typed::{dispatch, CliValue, TypedCommand};
use crate::Cli;

struct ListEdges<'a> {
    resource: &'a str,
}

impl TypedCommand for ListEdges<'_> {
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
        let list = builder.load_edge_list(self.resource, settings.kind)?;
        tracing::info!("Parsed {} edges from {}", list.len(), self.resource);

        match settings.format {
            OutputFormat::Json => to_json(&list),
            OutputFormat::Csv => {
                let mut lines = vec![csv_row(["from", "to", "attribute"])];
                lines.extend(list.iter().map(|edge| {
                    let link = edge.link();
                    csv_row([
                        link.from.to_string(),
                        link.to.to_string(),
                        link.attribute.to_string(),
                    ])
                }));
                Ok(lines.join("\n"))
            }
            OutputFormat::Table => {
                let mut lines = vec![format!("{} {} edges:", list.len(), list.kind())];
                lines.extend(
                    list.iter()
                        .enumerate()
                        .map(|(i, edge)| format!("  {:>4}  {}", i + 1, edge)),
                );
                Ok(lines.join("\n"))
            }
        }
    }
}

pub fn run(args: &GraphArgs, cli: &Cli, config: &Config) -> anyhow::Result<()> {
    tracing::debug!("Running edges command for resource: {}", args.resource);

    let settings = Settings::resolve(cli, args, config)?;
    let output = dispatch(
        args.vertices,
        args.attributes,
        args.default_attribute.as_deref(),
        &settings,
        ListEdges {
            resource: &args.resource,
        },
    )?;
    println!("{}", output);
    Ok(())
}

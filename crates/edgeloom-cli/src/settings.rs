//! Effective settings: config file values overridden by command-line flags

use std::fmt;
use std::path::PathBuf;

use edgeloom_core::{
    Delimiter, DuplicatePolicy, EdgeKind, FileSystemLoader, GrammarConfig, GraphBuilder,
    SelfLoopPolicy, ValueParser,
};

use crate::commands::GraphArgs;
use crate::config::Config;
use crate::output::OutputFormat;
use crate::Cli;

#[derive(Debug, Clone)]
pub struct Settings {
    pub roots: Vec<PathBuf>,
    pub kind: EdgeKind,
    pub duplicates: DuplicatePolicy,
    pub self_loops: SelfLoopPolicy,
    pub grammar: GrammarConfig,
    pub format: OutputFormat,
}

impl Settings {
    pub fn resolve(cli: &Cli, args: &GraphArgs, config: &Config) -> anyhow::Result<Self> {
        let mut roots = cli.roots.clone();
        roots.extend(config.roots.iter().cloned());

        let kind = match &args.kind {
            Some(value) => value.parse::<EdgeKind>().map_err(anyhow::Error::msg)?,
            None => config.kind,
        };

        let duplicates = match &args.duplicates {
            Some(value) => value.parse::<DuplicatePolicy>().map_err(anyhow::Error::msg)?,
            None => config.duplicates,
        };

        let self_loops = match &args.self_loops {
            Some(value) => value.parse::<SelfLoopPolicy>().map_err(anyhow::Error::msg)?,
            None => config.self_loops,
        };

        let mut grammar = config.grammar.clone();
        if let Some(delimiter) = &args.delimiter {
            grammar.delimiter = delimiter.parse::<Delimiter>().map_err(anyhow::Error::msg)?;
        }

        let format = OutputFormat::from(cli.format.as_deref().unwrap_or(&config.format));

        tracing::debug!(
            "Settings: kind={}, duplicates={}, self_loops={}, delimiter={}, roots={:?}",
            kind,
            duplicates,
            self_loops,
            grammar.delimiter,
            roots
        );

        Ok(Self {
            roots,
            kind,
            duplicates,
            self_loops,
            grammar,
            format,
        })
    }

    pub fn loader(&self) -> FileSystemLoader {
        FileSystemLoader::new().with_roots(self.roots.iter().cloned())
    }

    /// A graph builder for the given parsers, configured from these settings
    pub fn builder<V, E, PV, PE>(
        &self,
        vertex_parser: PV,
        attribute_parser: PE,
    ) -> GraphBuilder<V, E, PV, PE, FileSystemLoader>
    where
        V: Ord + Clone + fmt::Debug,
        E: Ord + Clone + fmt::Debug,
        PV: ValueParser<V>,
        PE: ValueParser<E>,
    {
        GraphBuilder::new(self.loader(), vertex_parser, attribute_parser, self.duplicates)
            .with_grammar(self.grammar.clone())
            .with_self_loops(self.self_loops)
    }
}

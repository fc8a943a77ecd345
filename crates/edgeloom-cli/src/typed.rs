//! Runtime choice of vertex and attribute types
//!
//! The core is generic; the CLI picks concrete types from flags and hands a
//! fully typed [`GraphBuilder`] to a [`TypedCommand`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use edgeloom_core::value::{from_str, text};
use edgeloom_core::{FileSystemLoader, GraphBuilder, ValueParser};

use crate::settings::Settings;

/// Types the CLI can print and serialize
pub trait CliValue: Ord + Clone + fmt::Debug + fmt::Display + Serialize {}

impl<T: Ord + Clone + fmt::Debug + fmt::Display + Serialize> CliValue for T {}

/// Vertex token type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum VertexType {
    #[default]
    Text,
    Int,
}

/// Edge attribute token type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AttributeType {
    /// Attribute tokens are ignored
    #[value(name = "none")]
    Ignored,
    #[default]
    Text,
    Int,
    Float,
}

/// Attribute of graphs without attributes; prints as nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Blank;

impl fmt::Display for Blank {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// Floating point weight with a total order
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Weight(pub f64);

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Weight {
    type Err = std::num::ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Weight)
    }
}

/// A command that runs against a builder of some concrete vertex and attribute type
pub trait TypedCommand {
    type Output;

    fn run<V, E, PV, PE>(
        self,
        builder: GraphBuilder<V, E, PV, PE, FileSystemLoader>,
        settings: &Settings,
    ) -> anyhow::Result<Self::Output>
    where
        V: CliValue,
        E: CliValue,
        PV: ValueParser<V>,
        PE: ValueParser<E>;
}

fn blank() -> impl Fn(&str) -> Result<Blank, std::convert::Infallible> {
    |_: &str| Ok(Blank)
}

/// Build the typed builder for the chosen types and run `command` with it
pub fn dispatch<C: TypedCommand>(
    vertices: VertexType,
    attributes: AttributeType,
    default_attribute: Option<&str>,
    settings: &Settings,
    command: C,
) -> anyhow::Result<C::Output> {
    match vertices {
        VertexType::Text => with_attributes(text(), attributes, default_attribute, settings, command),
        VertexType::Int => with_attributes(
            from_str::<i64>(),
            attributes,
            default_attribute,
            settings,
            command,
        ),
    }
}

fn with_attributes<V, PV, C>(
    vertex_parser: PV,
    attributes: AttributeType,
    default_attribute: Option<&str>,
    settings: &Settings,
    command: C,
) -> anyhow::Result<C::Output>
where
    V: CliValue,
    PV: ValueParser<V>,
    C: TypedCommand,
{
    match attributes {
        AttributeType::Ignored => {
            if let Some(token) = default_attribute {
                anyhow::bail!(
                    "--default-attribute '{}' has no effect with --attributes none",
                    token
                );
            }
            let builder = settings.builder(vertex_parser, blank()).with_default_attribute(Blank);
            command.run(builder, settings)
        }
        AttributeType::Text => run_with(vertex_parser, text(), default_attribute, settings, command),
        AttributeType::Int => run_with(
            vertex_parser,
            from_str::<i64>(),
            default_attribute,
            settings,
            command,
        ),
        AttributeType::Float => run_with(
            vertex_parser,
            from_str::<Weight>(),
            default_attribute,
            settings,
            command,
        ),
    }
}

fn run_with<V, E, PV, PE, C>(
    vertex_parser: PV,
    attribute_parser: PE,
    default_attribute: Option<&str>,
    settings: &Settings,
    command: C,
) -> anyhow::Result<C::Output>
where
    V: CliValue,
    E: CliValue,
    PV: ValueParser<V>,
    PE: ValueParser<E>,
    C: TypedCommand,
{
    let default = default_attribute
        .map(|token| {
            attribute_parser
                .parse_value(token)
                .map_err(|e| anyhow::anyhow!("Invalid default attribute '{}': {}", token, e))
        })
        .transpose()?;

    let builder = settings.builder(vertex_parser, attribute_parser);
    let builder = match default {
        Some(attribute) => builder.with_default_attribute(attribute),
        None => builder,
    };
    command.run(builder, settings)
}

//! CLI command implementations

pub mod build;
pub mod config;
pub mod degree;
pub mod edges;

use clap::Args;

use crate::typed::{AttributeType, VertexType};

/// Arguments shared by every command that reads a graph resource
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Resource name (looked up under the resource roots) or file path
    pub resource: String,

    /// Edge kind: directed or undirected
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Vertex token type
    #[arg(long, value_enum, default_value_t = VertexType::Text)]
    pub vertices: VertexType,

    /// Attribute token type
    #[arg(long, value_enum, default_value_t = AttributeType::Text)]
    pub attributes: AttributeType,

    /// Attribute for lines that only name two endpoints
    #[arg(long)]
    pub default_attribute: Option<String>,

    /// Duplicate edge policy: reject, deduplicate, multigraph
    #[arg(long)]
    pub duplicates: Option<String>,

    /// Self-loop policy: allow, reject
    #[arg(long)]
    pub self_loops: Option<String>,

    /// Token delimiter: whitespace, tab, or a single character
    #[arg(short, long)]
    pub delimiter: Option<String>,
}

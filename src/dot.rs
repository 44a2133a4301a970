//! Diagram to DOT (Graphviz) conversion.
//!
//! The generated graph follows these conventions:
//! - **Terminal nodes** are boxes labeled `False` / `True`
//! - **Internal nodes** are circles labeled with the name of their top variable
//! - **Edges**:
//!   - Solid edges labeled `1` lead to the high child
//!   - Dotted edges labeled `0` lead to the low child
//!
//! Every node reachable from the root is emitted exactly once.
//!
//! # Examples
//!
//! ```
//! use robdd_reach::manager::Manager;
//!
//! let m = Manager::default();
//! let a = m.create_var("a");
//! let b = m.create_var("b");
//! let f = m.and2(a, b);
//!
//! let dot = m.to_dot(f).unwrap();
//! assert!(dot.starts_with("digraph BDD {"));
//! // Render with: dot -Tpng output.dot -o output.png
//! ```

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::Path;

use log::debug;

use crate::manager::Manager;
use crate::node::NodeId;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for internal nodes (default: "circle")
    pub node_shape: &'static str,
    /// Shape for terminal nodes (default: "box")
    pub terminal_shape: &'static str,
    /// Style for high (then) edges (default: "solid")
    pub high_edge_style: &'static str,
    /// Style for low (else) edges (default: "dotted")
    pub low_edge_style: &'static str,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "circle",
            terminal_shape: "box",
            high_edge_style: "solid",
            low_edge_style: "dotted",
        }
    }
}

impl Manager {
    /// Converts the diagram rooted at `root` to DOT format.
    pub fn to_dot(&self, root: NodeId) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(root, &DotConfig::default())
    }

    /// Converts the diagram rooted at `root` to DOT format with custom configuration.
    pub fn to_dot_with_config(&self, root: NodeId, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "digraph BDD {{")?;
        writeln!(dot, "    rankdir=TB;")?;
        writeln!(dot, "    node [shape={}];", config.node_shape)?;

        let mut visited = HashSet::new();
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }

            let node = self.node(id);
            if node.is_terminal() {
                writeln!(
                    dot,
                    "    {} [label=\"{}\", shape={}];",
                    id.get(),
                    node.label.unwrap_or_default(),
                    config.terminal_shape
                )?;
                continue;
            }

            writeln!(dot, "    {} [label=\"{}\"];", id.get(), self.top_var_name(id))?;
            writeln!(
                dot,
                "    {} -> {} [style={}, label=\"0\"];",
                id.get(),
                node.low.get(),
                config.low_edge_style
            )?;
            writeln!(
                dot,
                "    {} -> {} [style={}, label=\"1\"];",
                id.get(),
                node.high.get(),
                config.high_edge_style
            )?;

            // Low child is visited first
            stack.push(node.high);
            stack.push(node.low);
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }

    /// Writes the DOT rendering of `root` to a file.
    pub fn write_dot(&self, path: impl AsRef<Path>, root: NodeId) -> std::io::Result<()> {
        let dot = self.to_dot(root).map_err(std::io::Error::other)?;
        debug!("Writing DOT for {} to {}", root, path.as_ref().display());
        std::fs::write(path, dot)
    }
}

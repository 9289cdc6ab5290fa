//! Writes graphs in Trivial Graph Format.
//!
//! Vertices are numbered from 1 in vertex order. The vertex table is followed
//! by a `#` line and then one `from to` line per stored arc.

use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use crate::graph::AdjListsGraph;
use crate::types::{GraphResult, Vertex, TGF_SEPARATOR};

/// Writer for TGF files.
#[derive(Debug, Default, Clone, Copy)]
pub struct TgfWriter;

impl TgfWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self
    }

    /// Write a graph to a TGF file.
    pub fn write_to_file<T>(&self, graph: &AdjListsGraph<T>, path: &Path) -> GraphResult<()>
    where
        T: Vertex + Display,
    {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        writer.flush()?;
        log::info!(
            "Wrote {} vertices and {} arcs to {}",
            graph.vertex_count(),
            graph.arc_count(),
            path.display()
        );
        Ok(())
    }

    /// Write a graph to any writer.
    pub fn write_to<T>(&self, graph: &AdjListsGraph<T>, writer: &mut impl Write) -> GraphResult<()>
    where
        T: Vertex + Display,
    {
        for (i, vertex) in graph.vertices().iter().enumerate() {
            writeln!(writer, "{} {}", i + 1, vertex)?;
        }
        writeln!(writer, "{}", TGF_SEPARATOR)?;
        for from in 0..graph.vertex_count() {
            for &to in graph.successor_positions(from) {
                writeln!(writer, "{} {}", from + 1, to + 1)?;
            }
        }
        Ok(())
    }

    /// Render a graph to a TGF string.
    pub fn render<T>(&self, graph: &AdjListsGraph<T>) -> GraphResult<String>
    where
        T: Vertex + Display,
    {
        let mut buf = Vec::new();
        self.write_to(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

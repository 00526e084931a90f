//! Graphviz rendering.

use super::SparseGraph;
use core::fmt::{self, Display, Write};

/// Writes `value` as a double-quoted DOT identifier.
fn quoted(f: &mut fmt::Formatter<'_>, value: &dyn Display) -> fmt::Result {
    let text = value.to_string();
    f.write_char('"')?;
    for c in text.chars() {
        if c == '"' || c == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char('"')
}

impl<V: Display, E: Display, L> Display for SparseGraph<V, E, L> {
    /// Renders live vertices, then live edges, in insertion order as a `digraph`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("digraph {\n")?;

        for (_, vertex) in self.vertices.iter() {
            f.write_str("  ")?;
            quoted(f, &vertex.value)?;
            f.write_str(";\n")?;
        }

        for (_, edge) in self.edges.iter() {
            let (Some(from), Some(to)) = (self.vertices.get(edge.from), self.vertices.get(edge.to))
            else {
                continue;
            };
            f.write_str("  ")?;
            quoted(f, &from.value)?;
            f.write_str(" -> ")?;
            quoted(f, &to.value)?;
            f.write_str(" [label=")?;
            quoted(f, &edge.value)?;
            f.write_str("];\n")?;
        }

        f.write_str("}")
    }
}

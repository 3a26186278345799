//! Plain-text rendering of a [`Grid`], optionally with a path drawn on it.

use std::collections::HashSet;
use std::fmt;

use crate::geom::Point;
use crate::grid::Grid;
use crate::node::Node;

/// Characters used by [`Grid::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderStyle {
    /// Draw a `+---+` / `|` frame around the grid.
    pub border: bool,
    pub start: char,
    pub end: char,
    pub path: char,
    pub empty: char,
    pub blocked: char,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            border: true,
            start: 's',
            end: 'e',
            path: 'x',
            empty: ' ',
            blocked: '#',
        }
    }
}

impl Grid {
    /// Render the grid as text, one line per row.
    ///
    /// Each cell shows, by priority: `start`, `end`, membership in `path`,
    /// then walkable or blocked.
    pub fn render(
        &self,
        path: Option<&[Node]>,
        start: Option<&Node>,
        end: Option<&Node>,
        style: &RenderStyle,
    ) -> String {
        let on_path: HashSet<Point> = path
            .unwrap_or_default()
            .iter()
            .map(Node::pos)
            .collect();
        let frame = format!("+{}+", "-".repeat(self.width() as usize));

        let nodes: Vec<&Node> = self.each_node().collect();
        let mut lines = Vec::with_capacity(self.height() as usize + 2);
        if style.border {
            lines.push(frame.clone());
        }
        for row in nodes.chunks(self.width() as usize) {
            let mut line = String::with_capacity(row.len() + 2);
            if style.border {
                line.push('|');
            }
            for &node in row {
                let ch = if start == Some(node) {
                    style.start
                } else if end == Some(node) {
                    style.end
                } else if on_path.contains(&node.pos()) {
                    style.path
                } else if node.walkable() {
                    style.empty
                } else {
                    style.blocked
                };
                line.push(ch);
            }
            if style.border {
                line.push('|');
            }
            lines.push(line);
        }
        if style.border {
            lines.push(frame);
        }
        lines.join("\n")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None, None, None, &RenderStyle::default()))
    }
}

//! Prototype tree: files and folders that deep-clone and render with indentation.

use std::fmt;
use std::io::{self, Write};

use termtree::Tree;
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};

/// Spaces per nesting level unless configured otherwise.
pub const DEFAULT_INDENT: usize = 4;

/// Rendering options passed down the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOpts {
    /// Nesting level of the node being written
    pub level: usize,
    /// Spaces per nesting level
    pub indent: usize,
}

impl Default for WriteOpts {
    fn default() -> Self {
        Self {
            level: 0,
            indent: DEFAULT_INDENT,
        }
    }
}

impl WriteOpts {
    pub fn with_indent(indent: usize) -> Self {
        Self { level: 0, indent }
    }

    fn nested(self) -> Self {
        Self {
            level: self.level + 1,
            ..self
        }
    }
}

/// Format a single name line for the given nesting level.
pub fn indented(level: usize, indent: usize, name: &str) -> String {
    format!("{}{}", " ".repeat(level * indent), name)
}

/// Node of the prototype tree.
///
/// The variant set is closed: a `File` is a named leaf, a `Folder` owns its
/// name and an ordered list of children. Children are owned exclusively, so
/// the tree is acyclic and `clone()` yields a fully independent deep copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File { name: String },
    Folder { name: String, children: Vec<Node> },
}

impl Node {
    pub fn file(name: impl Into<String>) -> Self {
        Node::File { name: name.into() }
    }

    pub fn folder(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Folder {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name } | Node::Folder { name, .. } => name,
        }
    }

    /// Replace the node's own name; children are untouched.
    pub fn rename(&mut self, new_name: impl Into<String>) {
        match self {
            Node::File { name } | Node::Folder { name, .. } => *name = new_name.into(),
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::File { .. } => &[],
            Node::Folder { children, .. } => children,
        }
    }

    /// Mutable access to a folder's children, `None` for files.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::File { .. } => None,
            Node::Folder { children, .. } => Some(children),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder { .. })
    }

    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }

    /// Names of all files below (or at) this node, in render order.
    pub fn leaf_names(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, leaves: &mut Vec<String>) {
        match self {
            Node::File { name } => leaves.push(name.clone()),
            Node::Folder { children, .. } => {
                for child in children {
                    child.collect_leaves(leaves);
                }
            }
        }
    }

    /// Write this node and its subtree, one line per node.
    ///
    /// The first failing write aborts the traversal; the error names the node
    /// whose line could not be written. Lines already written stay written.
    #[instrument(level = "trace", skip(self, w), fields(node = %self.name()))]
    pub fn write_entry<W: Write + ?Sized>(&self, w: &mut W, opts: WriteOpts) -> DomainResult<()> {
        writeln!(w, "{}", indented(opts.level, opts.indent, self.name())).map_err(|source| {
            DomainError::Render {
                node: self.name().to_string(),
                source,
            }
        })?;

        let nested = opts.nested();
        for child in self.children() {
            child.write_entry(w, nested)?;
        }
        Ok(())
    }

    /// Render the subtree into a string, same lines as [`Node::write_entry`].
    pub fn render(&self, opts: WriteOpts) -> String {
        Rendered { node: self, opts }.to_string()
    }

    /// Box-drawing view of the subtree.
    pub fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children().iter().map(Node::to_tree_string).collect();
        Tree::new(self.name().to_string()).with_leaves(leaves)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = Rendered {
            node: self,
            opts: WriteOpts::default(),
        };
        fmt::Display::fmt(&rendered, f)
    }
}

struct Rendered<'a> {
    node: &'a Node,
    opts: WriteOpts,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node
            .write_entry(&mut FmtSink(f), self.opts)
            .map_err(|_| fmt::Error)
    }
}

/// Byte sink forwarding to a formatter; input is the UTF-8 `write_entry` emits.
struct FmtSink<'a, 'b>(&'a mut fmt::Formatter<'b>);

impl Write for FmtSink<'_, '_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s = std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.0
            .write_str(s)
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "formatter error"))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

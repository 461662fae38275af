/// The category of a parse-tree node.
///
/// The parser assigns one of these to every node it produces. Trees built by
/// other, tag based parsers can be mapped onto the same kinds with
/// [`NodeKind::from_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The top of the tree; holds every top-level expression.
    Root,
    /// An integer literal such as `42` or `-7`.
    Number,
    /// An operator or function name such as `+` or `head`.
    Symbol,
    /// A parenthesised list.
    SExpr,
    /// A braced list.
    QExpr,
    /// One of the bracket characters `(`, `)`, `{` or `}`.
    Delimiter,
    /// A start or end of input marker.
    Anchor,
}

impl NodeKind {
    /// Classifies a compound grammar tag such as `expr|number|regex`.
    ///
    /// The checks run in a fixed order: `number`, `symbol`, `qexpr`, `sexpr`,
    /// then a tag containing `>` is the root. A tag that is exactly `regex` is
    /// an input anchor. Everything else (`char`, `string`, ...) is treated as a
    /// delimiter.
    ///
    /// # Example
    /// ```
    /// use lispty::ast::NodeKind;
    ///
    /// assert_eq!(NodeKind::from_tag("expr|number|regex"), NodeKind::Number);
    /// assert_eq!(NodeKind::from_tag("expr|qexpr|>"), NodeKind::QExpr);
    /// assert_eq!(NodeKind::from_tag(">"), NodeKind::Root);
    /// assert_eq!(NodeKind::from_tag("regex"), NodeKind::Anchor);
    /// assert_eq!(NodeKind::from_tag("char"), NodeKind::Delimiter);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.contains("number") {
            Self::Number
        } else if tag.contains("symbol") {
            Self::Symbol
        } else if tag.contains("qexpr") {
            Self::QExpr
        } else if tag.contains("sexpr") {
            Self::SExpr
        } else if tag.contains('>') {
            Self::Root
        } else if tag == "regex" {
            Self::Anchor
        } else {
            Self::Delimiter
        }
    }
}

/// A node of the generic parse tree handed to the reader.
///
/// Leaves carry their source text; lists carry their children, including the
/// bracket delimiters and input anchors, which the reader skips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// What the node represents.
    pub kind:     NodeKind,
    /// The matched source text; empty for list and anchor nodes.
    pub text:     String,
    /// Child nodes in source order.
    pub children: Vec<Self>,
    /// The source line the node starts on.
    pub line:     usize,
}

impl Node {
    /// Creates a node without children.
    #[must_use]
    pub fn leaf(kind: NodeKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               children: Vec::new(),
               line }
    }

    /// Creates a list node with the given children.
    #[must_use]
    pub const fn branch(kind: NodeKind, children: Vec<Self>, line: usize) -> Self {
        Self { kind,
               text: String::new(),
               children,
               line }
    }

    /// Creates a node from a tag based parser's output, classifying the tag
    /// once at this boundary.
    #[must_use]
    pub fn from_tagged(tag: &str, text: impl Into<String>, children: Vec<Self>) -> Self {
        Self { kind: NodeKind::from_tag(tag),
               text: text.into(),
               children,
               line: 1 }
    }
}

impl Drop for Node {
    /// Drops descendants from a worklist so that dropping a deep tree does not
    /// recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);

        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

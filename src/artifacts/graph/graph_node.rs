use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use derive_new::new;
use std::rc::Rc;

/// Line break inside a quoted DOT label (the two characters `\` and `n`)
const LABEL_LINE_BREAK: &str = r"\n";

/// One object in the dependency graph
///
/// Nodes are immutable once built. Children are shared: the same object
/// reached with the same description along two paths is one node.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct GraphNode {
    object_type: ObjectType,
    oid: ObjectId,
    /// Tree entry name the node was reached through, if any
    description: Option<String>,
    children: Vec<Rc<GraphNode>>,
}

impl GraphNode {
    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn children(&self) -> &[Rc<GraphNode>] {
        &self.children
    }

    /// `[<type>]\n<hash prefix>` plus `\n<description>`, ready to be placed
    /// between double quotes in a DOT document
    pub fn label(&self) -> String {
        let mut label = format!(
            "[{}]{LABEL_LINE_BREAK}{}",
            self.object_type,
            self.oid.label_prefix()
        );

        if let Some(description) = &self.description {
            label.push_str(LABEL_LINE_BREAK);
            label.push_str(&escape_label_text(description));
        }

        label
    }
}

// Commit chains can be as deep as the history; unlink iteratively so that
// dropping the root does not recurse once per generation.
impl Drop for GraphNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);

        while let Some(child) = pending.pop() {
            if let Ok(mut child) = Rc::try_unwrap(child) {
                pending.append(&mut child.children);
            }
        }
    }
}

/// Escape free text (file names) for a DOT quoted string
pub fn escape_label_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\\' => escaped.push_str(r"\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str(LABEL_LINE_BREAK),
            '\r' => {}
            c => escaped.push(c),
        }
    }

    escaped
}

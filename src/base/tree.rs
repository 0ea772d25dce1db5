pub mod forkpi;
pub mod forrollup;
pub mod fortotals;

use crate::base;

pub const BOUNDING_SPACES_COUNT: usize = 2;
pub const MIN_DASHES_COUNT: usize = 2;

pub struct Tree<'cs> {
    charset: &'cs base::Charset,
    root: Node,
}

#[derive(Default)]
pub struct Node {
    data: String,
    children: Vec<Self>,
}

impl Node {
    pub fn new(data: String) -> Self {
        Self {
            data,
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, child: Self) -> &mut Self {
        self.children.push(child);
        self.children
            .last_mut()
            .expect("a node should have just been added")
    }
}

impl<'cs> Tree<'cs> {
    /// `root` itself is not drawn. Its children are drawn as unprefixed
    /// headings.
    pub fn new(charset: &'cs base::Charset, root: Node) -> Self {
        Self { charset, root }
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}

/// Joins `label` and `value` with dashes such that the result is `width`
/// characters long, right-aligning `value`. At least one dash is drawn.
pub fn right_aligned(charset: &base::Charset, label: &str, value: &str, width: usize) -> String {
    let used = label.chars().count() + BOUNDING_SPACES_COUNT + value.chars().count();
    let dash_count = width.saturating_sub(used).max(1);
    format!("{} {} {}", label, charset.dashes(dash_count), value)
}

/// Width needed to right-align every `(label, value)` pair with at least
/// [`MIN_DASHES_COUNT`] dashes in between.
pub fn alignment_charlen<'a, I>(pairs: I) -> usize
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(label, value)| {
            label.chars().count()
                + BOUNDING_SPACES_COUNT
                + MIN_DASHES_COUNT
                + value.chars().count()
        })
        .max()
        .unwrap_or_default()
}

impl std::fmt::Display for Tree<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_node(
            node: &Node,
            f: &mut std::fmt::Formatter,
            preprefix: &mut String,
            is_last_child_of_parent: bool,
            branch: &base::charset::Branch,
        ) -> std::fmt::Result {
            let (prefix_tail, child_prefix_tail) = if is_last_child_of_parent {
                (branch.corner, branch.blank)
            } else {
                (branch.tee, branch.pipe)
            };
            writeln!(f, "{}{}{}", preprefix, prefix_tail, node.data)?;
            preprefix.push_str(child_prefix_tail);
            for (i, child) in node.children.iter().enumerate() {
                write_node(child, f, preprefix, i + 1 == node.children.len(), branch)?;
            }
            preprefix.truncate(preprefix.len() - child_prefix_tail.len());
            Ok(())
        }

        let mut preprefix = String::new();
        for heading in self.root.children.iter() {
            writeln!(f, "{}", heading.data)?;
            for (i, child) in heading.children.iter().enumerate() {
                write_node(
                    child,
                    f,
                    &mut preprefix,
                    i + 1 == heading.children.len(),
                    &self.charset.branch,
                )?;
            }
        }
        Ok(())
    }
}

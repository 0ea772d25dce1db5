//! Two-level rollup of a flat table into a tree of aggregates, suitable for
//! sunburst and treemap renderers.
//!
//! The tree always has a root, one coarse node per distinct non-null coarse
//! value, and one fine node per distinct non-null (coarse, fine) pair. Every
//! node but the root references its parent by index. String identifiers only
//! exist once the tree is flattened with [`Rollup::to_table`].

use std::borrow::Cow;

use crate::base;

/// Separates the fragments of a node identifier.
pub const SEP: &str = "__";

pub const COARSE_TEXT: &str = "coarse_text";
pub const FINE_TEXT: &str = "fine_text";

/// Columns of the flattened table other than the measures.
pub const FIXED_COLUMNS: [&str; 5] = ["id", "parent", "label", COARSE_TEXT, FINE_TEXT];

/// Escapes `s` such that the result never contains [`SEP`].
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['\\', '_']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c == '\\' || c == '_' {
            out.push('\\');
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// How node identifiers are spelled in the flattened table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct IdScheme {
    pub root: String,
    pub coarse_tag: String,
    pub fine_tag: String,
}

impl Default for IdScheme {
    fn default() -> Self {
        Self {
            root: "root".into(),
            coarse_tag: "coarse".into(),
            fine_tag: "fine".into(),
        }
    }
}

impl IdScheme {
    fn coarse_id(&self, coarse: &str) -> String {
        format!("{}{SEP}{}", escape(&self.coarse_tag), escape(coarse))
    }

    fn fine_id(&self, parent_id: &str, fine: &str) -> String {
        format!(
            "{}{SEP}{}{SEP}{}",
            parent_id,
            escape(&self.fine_tag),
            escape(fine)
        )
    }
}

fn default_root_label() -> String {
    "All".into()
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    pub coarse: String,
    pub fine: String,
    pub measures: Vec<base::Measure>,
    #[serde(default = "default_root_label")]
    pub root_label: String,
    #[serde(default)]
    pub ids: IdScheme,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Table(#[from] base::table::Error),
    #[error("duplicate node identifier '{0}'")]
    DuplicateIdentifier(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Root,
    Coarse,
    Fine,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub level: Level,
    pub parent: Option<usize>,
    pub label: String,
    pub coarse: Option<base::Value>,
    pub fine: Option<base::Value>,
    /// Reduced values, in the same order as the rollup's measures.
    pub measures: Vec<Option<f64>>,
    children: Vec<usize>,
}

impl Node {
    fn new(level: Level, label: String, measures: Vec<Option<f64>>) -> Self {
        Self {
            level,
            parent: None,
            label,
            coarse: None,
            fine: None,
            measures,
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[usize] {
        &self.children
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rollup {
    measures: Vec<base::Measure>,
    /// Output column name of each measure.
    columns: Vec<String>,
    /// Root first. Parents always precede their children.
    nodes: Vec<Node>,
}

impl Config {
    /// Builds the rollup of `filtered`. Additive measures of the root are
    /// reduced over `full` instead, so the root always shows grand totals
    /// regardless of the active selection.
    pub fn build(&self, filtered: &base::Table, full: &base::Table) -> Result<Rollup, Error> {
        let c = filtered.index_of(&self.coarse)?;
        let f = filtered.index_of(&self.fine)?;
        let columns = base::measure::output_columns(FIXED_COLUMNS.as_slice(), &self.measures)?;
        let bound = base::measure::Bound::new(filtered, &self.measures)?;
        let grand_total = base::measure::Bound::new(full, &self.measures)?.fold(full)?;

        let mut filtered_total = base::Accumulators::default();
        let mut coarse = base::Aggregate::<&base::Value, base::Accumulators>::default();
        let mut fine =
            base::Aggregate::<(&base::Value, &base::Value), base::Accumulators>::default();
        for (i, row) in filtered.rows().enumerate() {
            let accs = bound.accumulate(row, i)?;
            filtered_total += accs.clone();
            if row[c].is_null() {
                continue;
            }
            if !row[f].is_null() {
                fine.add((&row[c], &row[f]), accs.clone());
            }
            coarse.add(&row[c], accs);
        }

        let root_measures = self
            .measures
            .iter()
            .zip(grand_total.finish(&self.measures))
            .zip(filtered_total.finish(&self.measures))
            .map(|((m, full), filtered)| {
                if m.reduction.is_additive() {
                    full
                } else {
                    filtered
                }
            })
            .collect();
        let mut rollup = Rollup {
            measures: self.measures.clone(),
            columns,
            nodes: vec![Node::new(
                Level::Root,
                self.root_label.clone(),
                root_measures,
            )],
        };

        let mut coarse_idx = std::collections::BTreeMap::<&base::Value, usize>::new();
        for (&key, accs) in coarse.iter() {
            let mut node = Node::new(Level::Coarse, key.to_string(), accs.finish(&self.measures));
            node.coarse = Some(key.clone());
            coarse_idx.insert(key, rollup.insert(0, node));
        }
        for (&(ck, fk), accs) in fine.iter() {
            let parent = *coarse_idx
                .get(ck)
                .expect("every fine group should lie within a coarse group");
            let mut node = Node::new(Level::Fine, fk.to_string(), accs.finish(&self.measures));
            node.coarse = Some(ck.clone());
            node.fine = Some(fk.clone());
            rollup.insert(parent, node);
        }

        tracing::debug!(
            rows = filtered.len(),
            coarse = coarse.len(),
            fine = fine.len(),
            "built rollup"
        );
        Ok(rollup)
    }
}

impl Rollup {
    fn insert(&mut self, parent: usize, mut node: Node) -> usize {
        let i = self.nodes.len();
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent].children.push(i);
        i
    }

    pub fn measures(&self) -> &[base::Measure] {
        &self.measures
    }

    /// Output column names of the measures, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Flattens the tree into a node table with columns `id`, `parent`,
    /// `label`, one column per measure, [`COARSE_TEXT`] and [`FINE_TEXT`].
    /// The root's parent is the empty string.
    pub fn to_table(&self, ids: &IdScheme) -> Result<base::Table, Error> {
        let mut columns = vec!["id".to_string(), "parent".into(), "label".into()];
        columns.extend(self.columns.iter().cloned());
        columns.push(COARSE_TEXT.into());
        columns.push(FINE_TEXT.into());
        let mut table = base::Table::new(columns);

        let mut id_strings = Vec::<String>::with_capacity(self.nodes.len());
        let mut seen = std::collections::HashSet::<String>::with_capacity(self.nodes.len());
        for node in self.nodes.iter() {
            let parent = node.parent.map(|p| id_strings[p].as_str());
            let id = match node.level {
                Level::Root => ids.root.clone(),
                Level::Coarse => ids.coarse_id(&node.label),
                Level::Fine => ids.fine_id(parent.unwrap_or_default(), &node.label),
            };
            if !seen.insert(id.clone()) {
                return Err(Error::DuplicateIdentifier(id));
            }
            let coarse_text = match &node.coarse {
                Some(v) => v.to_string(),
                None => node.label.clone(),
            };
            let fine_text = node.fine.as_ref().map(ToString::to_string);

            let mut row = vec![
                base::Value::Text(id.clone()),
                base::Value::Text(parent.unwrap_or_default().to_string()),
                base::Value::Text(node.label.clone()),
            ];
            row.extend(node.measures.iter().map(|m| match m {
                Some(x) => base::Value::from_f64(*x),
                None => base::Value::Null,
            }));
            row.push(base::Value::Text(coarse_text));
            row.push(base::Value::Text(fine_text.unwrap_or_default()));
            table.push(row);
            id_strings.push(id);
        }
        Ok(table)
    }
}

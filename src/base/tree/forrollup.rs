use crate::base;
use crate::base::tree::BOUNDING_SPACES_COUNT;
use crate::base::tree::MIN_DASHES_COUNT;

#[derive(Debug, PartialEq)]
pub struct Config {
    pub charset: base::Charset,
    pub rollup: base::Rollup,
}

impl Config {
    fn depth(&self, mut i: usize) -> usize {
        let mut depth = 0;
        while let Some(p) = self.rollup.nodes()[i].parent {
            depth += 1;
            i = p;
        }
        depth
    }

    fn summary(&self, node: &base::rollup::Node) -> String {
        self.rollup
            .measures()
            .iter()
            .zip(self.rollup.columns())
            .zip(&node.measures)
            .map(|((m, name), &x)| format!("{}: {}", name, m.format(x)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn to_tree(&self) -> base::Tree<'_> {
        let indent = self.charset.indent();
        let label_charlen = |i: usize| {
            self.depth(i) * indent + self.rollup.nodes()[i].label.chars().count()
        };
        let width = (0..self.rollup.len())
            .map(label_charlen)
            .max()
            .unwrap_or_default()
            + BOUNDING_SPACES_COUNT
            + MIN_DASHES_COUNT;

        let line = |i: usize| {
            let node = &self.rollup.nodes()[i];
            let dash_count = width - label_charlen(i) - BOUNDING_SPACES_COUNT;
            format!(
                "{} {} {}",
                node.label,
                self.charset.dashes(dash_count),
                self.summary(node)
            )
        };

        fn add_children(
            parent: &mut base::tree::Node,
            i: usize,
            nodes: &[base::rollup::Node],
            line: &dyn Fn(usize) -> String,
        ) {
            for &child in nodes[i].children() {
                let tn = parent.push(base::tree::Node::new(line(child)));
                add_children(tn, child, nodes, line);
            }
        }

        let mut root = base::tree::Node::default();
        let heading = root.push(base::tree::Node::new(line(0)));
        add_children(heading, 0, self.rollup.nodes(), &line);
        base::Tree::new(&self.charset, root)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::base::Measure;
    use crate::base::Reduction;

    #[test]
    fn test_to_tree() {
        let full = r#"
            Season,Item,Amount,Age
            Summer,Shirt,10,20
            Summer,Shirt,30,40
            Summer,Pants,5,50
            Winter,Coat,955,30
        "#
        .parse::<base::Table>()
        .unwrap();
        let summer = full.filter(|row| row[0] == base::Value::from("Summer"));
        let rollup = base::rollup::Config {
            coarse: "Season".into(),
            fine: "Item".into(),
            measures: vec![
                Measure::new("Amount", Reduction::Sum),
                Measure::new("Age", Reduction::Mean),
            ],
            root_label: "All".into(),
            ids: Default::default(),
        }
        .build(&summer, &full)
        .unwrap();

        let config = Config {
            charset: base::Charset::default(),
            rollup,
        };
        assert_eq!(
            config.to_tree().to_string(),
            indoc!(
                "
                All ------------ Amount: 1,000, Age: 36.67
                `-- Summer ----- Amount: 45, Age: 36.67
                    |-- Pants -- Amount: 5, Age: 50
                    `-- Shirt -- Amount: 40, Age: 30
                "
            )
        );
    }
}

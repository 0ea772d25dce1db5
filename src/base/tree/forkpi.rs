use crate::base;

#[derive(Debug, PartialEq)]
pub struct Config {
    pub charset: base::Charset,
    pub kpi: base::kpi::Kpi,
}

impl Config {
    fn heading(&self) -> String {
        match &self.kpi.previous {
            Some(previous) => format!("{} {} vs {}", self.kpi.period, self.kpi.latest, previous),
            None => format!("{} {}", self.kpi.period, self.kpi.latest),
        }
    }

    pub fn to_tree(&self) -> base::Tree<'_> {
        let values = self
            .kpi
            .rows
            .iter()
            .map(|row| (row.measure.column.as_str(), row.measure.format(row.latest)))
            .collect::<Vec<_>>();
        let width = base::tree::alignment_charlen(values.iter().map(|(l, v)| (*l, v.as_str())));

        let mut root = base::tree::Node::default();
        let heading = root.push(base::tree::Node::new(self.heading()));
        for (row, (label, value)) in self.kpi.rows.iter().zip(&values) {
            let mut line = base::tree::right_aligned(&self.charset, label, value, width);
            if let Some(delta) = row.delta() {
                let s = row.measure.format_delta(delta, row.delta_pct());
                line.push_str("  ");
                line.push_str(&self.charset.paint(&s, delta));
            }
            heading.push(base::tree::Node::new(line));
        }
        base::Tree::new(&self.charset, root)
    }
}

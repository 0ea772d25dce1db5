use crate::base;

#[derive(Debug, PartialEq)]
pub struct Config {
    pub charset: base::Charset,
    pub totals: base::totals::Totals,
}

impl Config {
    pub fn to_tree(&self) -> base::Tree<'_> {
        let mut pairs = self
            .totals
            .rows
            .iter()
            .map(|(m, x)| (m.column.clone(), m.format(*x), None))
            .collect::<Vec<_>>();
        if let Some(growth) = self.totals.growth {
            pairs.push(("Growth".into(), format!("{:+.2}%", growth), Some(growth)));
        }
        let width = base::tree::alignment_charlen(
            pairs.iter().map(|(l, v, _)| (l.as_str(), v.as_str())),
        );

        let mut root = base::tree::Node::default();
        let heading = root.push(base::tree::Node::new("Totals".into()));
        for (label, value, sign) in pairs.iter() {
            let mut line = base::tree::right_aligned(&self.charset, label, value, width);
            if let Some(x) = sign {
                line.truncate(line.len() - value.len());
                line.push_str(&self.charset.paint(value, *x));
            }
            heading.push(base::tree::Node::new(line));
        }
        base::Tree::new(&self.charset, root)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::base::Measure;

    #[test]
    fn test_to_tree() {
        let config = Config {
            charset: base::Charset::default(),
            totals: base::totals::Totals {
                rows: vec![
                    (
                        "Purchase Amount (USD)=sum:thousand".parse::<Measure>().unwrap(),
                        Some(233_081.0),
                    ),
                    ("Customer ID=count".parse().unwrap(), Some(3_900.0)),
                    ("Age=mean".parse().unwrap(), None),
                ],
                growth: Some(-12.5),
            },
        };
        assert_eq!(
            config.to_tree().to_string(),
            indoc!(
                "
                Totals
                |-- Purchase Amount (USD) -- 233K
                |-- Customer ID ----------- 3,900
                |-- Age ----------------------- -
                `-- Growth -------------- -12.50%
                "
            )
        );
    }
}

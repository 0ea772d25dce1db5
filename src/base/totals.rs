use crate::base;

/// Growth of one column against another, e.g. current against previous
/// purchase amounts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Growth {
    pub current: String,
    pub previous: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    pub measures: Vec<base::Measure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth: Option<Growth>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub rows: Vec<(base::Measure, Option<f64>)>,
    /// Percent. Absent if not configured or the baseline is zero.
    pub growth: Option<f64>,
}

fn column_sum(table: &base::Table, column: &str) -> Result<f64, base::table::Error> {
    let measures = [base::Measure::new(column, base::Reduction::Sum)];
    let total = base::measure::Bound::new(table, &measures)?.fold(table)?;
    Ok(total.finish(&measures)[0].unwrap_or_default())
}

impl Config {
    /// Reduces every measure over `filtered`. Growth compares the filtered
    /// sums of both growth columns, relative to the sum of the previous
    /// column over `full`.
    pub fn compute(
        &self,
        filtered: &base::Table,
        full: &base::Table,
    ) -> Result<Totals, base::table::Error> {
        let bound = base::measure::Bound::new(filtered, &self.measures)?;
        let values = bound.fold(filtered)?.finish(&self.measures);
        let growth = match &self.growth {
            Some(g) => {
                let baseline = column_sum(full, &g.previous)?;
                let delta = column_sum(filtered, &g.current)? - column_sum(filtered, &g.previous)?;
                (baseline != 0.0).then(|| delta / baseline * 100.0)
            }
            None => None,
        };
        Ok(Totals {
            rows: self.measures.iter().cloned().zip(values).collect(),
            growth,
        })
    }
}

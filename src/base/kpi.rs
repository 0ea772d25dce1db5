use crate::base;

/// Compares the latest period against the one before it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    pub period: String,
    pub measures: Vec<base::Measure>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub measure: base::Measure,
    pub latest: Option<f64>,
    pub previous: Option<f64>,
}

impl Row {
    pub fn delta(&self) -> Option<f64> {
        Some(self.latest? - self.previous?)
    }

    /// Change relative to the magnitude of the previous value. Absent when
    /// the previous value is zero.
    pub fn delta_pct(&self) -> Option<f64> {
        let previous = self.previous?;
        if previous == 0.0 {
            return None;
        }
        Some(self.delta()? / previous.abs() * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Kpi {
    pub period: String,
    pub latest: base::Value,
    /// Absent if the table covers a single period.
    pub previous: Option<base::Value>,
    pub rows: Vec<Row>,
}

impl Config {
    /// Returns `None` if no row has a period.
    pub fn compute(&self, table: &base::Table) -> Result<Option<Kpi>, base::table::Error> {
        let p = table.index_of(&self.period)?;
        let bound = base::measure::Bound::new(table, &self.measures)?;
        let mut by_period = base::Aggregate::<&base::Value, base::Accumulators>::default();
        for (i, row) in table.rows().enumerate() {
            if row[p].is_null() {
                continue;
            }
            by_period.add(&row[p], bound.accumulate(row, i)?);
        }
        tracing::debug!(periods = by_period.len(), "grouped rows by period");

        let mut periods = by_period.into_iter().collect::<Vec<_>>();
        let Some((latest, latest_accs)) = periods.pop() else {
            return Ok(None);
        };
        let previous = periods.pop();

        let latest_values = latest_accs.finish(&self.measures);
        let previous_values = match &previous {
            Some((_, accs)) => accs.finish(&self.measures),
            None => vec![None; self.measures.len()],
        };
        let rows = self
            .measures
            .iter()
            .zip(latest_values)
            .zip(previous_values)
            .map(|((m, latest), previous)| Row {
                measure: m.clone(),
                latest,
                previous,
            })
            .collect();
        Ok(Some(Kpi {
            period: self.period.clone(),
            latest: latest.clone(),
            previous: previous.map(|(v, _)| v.clone()),
            rows,
        }))
    }
}

use crate::base;

/// How a measure column is reduced over a group of rows.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Reduction {
    Sum,
    Mean,
    Count,
}

impl Reduction {
    /// Additive reductions can be summed across disjoint groups.
    pub fn is_additive(self) -> bool {
        matches!(self, Self::Sum | Self::Count)
    }
}

/// Display style of a reduced value.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Style {
    #[default]
    Plain,
    Thousand,
    Million,
    Percent,
}

/// A column paired with its reduction, written as `COLUMN=KIND[:STYLE]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Measure {
    pub column: String,
    pub reduction: Reduction,
    pub style: Style,
}

impl Measure {
    pub fn new(column: &str, reduction: Reduction) -> Self {
        Self {
            column: column.to_string(),
            reduction,
            style: Style::default(),
        }
    }

    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }

    /// Renders a reduced value in this measure's style. Absent values render
    /// as `-`.
    pub fn format(&self, value: Option<f64>) -> String {
        let Some(x) = value else {
            return "-".to_string();
        };
        match self.style {
            Style::Plain => base::numfmt::plain(x),
            Style::Thousand => base::numfmt::thousand(x),
            Style::Million => base::numfmt::million(x),
            Style::Percent => base::numfmt::percent(x),
        }
    }

    /// Renders a change in this measure's value. Sums and counts are shown as
    /// whole numbers, means with one decimal place.
    pub fn format_delta(&self, delta: f64, pct: Option<f64>) -> String {
        let decimals = if self.reduction.is_additive() { 0 } else { 1 };
        let mut s = base::numfmt::signed(delta, decimals);
        if let Some(pct) = pct {
            s.push_str(&format!(" ({:+.2}%)", pct));
        }
        s
    }
}

/// Names the output column of each measure. A measure keeps its source
/// column's name unless another measure reads the same column or the name is
/// one of `reserved`, in which case it becomes `COLUMN (KIND)`.
pub fn output_columns<S>(
    reserved: &[S],
    measures: &[Measure],
) -> Result<Vec<String>, base::table::Error>
where
    S: AsRef<str>,
{
    let is_reserved = |name: &str| reserved.iter().any(|r| r.as_ref() == name);
    let mut names = Vec::<String>::with_capacity(measures.len());
    for m in measures {
        let shared = measures.iter().filter(|o| o.column == m.column).count() > 1;
        let name = if shared || is_reserved(&m.column) {
            format!("{} ({})", m.column, m.reduction)
        } else {
            m.column.clone()
        };
        if is_reserved(&name) || names.contains(&name) {
            return Err(base::table::Error::DuplicateColumn(name));
        }
        names.push(name);
    }
    Ok(names)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 'COLUMN=KIND[:STYLE]'")]
    Format,
    #[error("column name is empty")]
    EmptyColumn,
    #[error("unknown reduction '{0}'")]
    Reduction(String),
    #[error("unknown style '{0}'")]
    Style(String),
}

impl std::str::FromStr for Measure {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, rest) = s.rsplit_once('=').ok_or(ParseError::Format)?;
        let column = column.trim();
        if column.is_empty() {
            return Err(ParseError::EmptyColumn);
        }
        let (reduction, style) = match rest.split_once(':') {
            Some((r, st)) => (r.trim(), Some(st.trim())),
            None => (rest.trim(), None),
        };
        let reduction = reduction
            .parse::<Reduction>()
            .map_err(|_| ParseError::Reduction(reduction.to_string()))?;
        let style = match style {
            Some(st) => st
                .parse::<Style>()
                .map_err(|_| ParseError::Style(st.to_string()))?,
            None => Style::default(),
        };
        Ok(Self {
            column: column.to_string(),
            reduction,
            style,
        })
    }
}

impl TryFrom<String> for Measure {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl TryFrom<&str> for Measure {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.column, self.reduction)?;
        if self.style != Style::Plain {
            write!(f, ":{}", self.style)?;
        }
        Ok(())
    }
}

impl From<Measure> for String {
    fn from(value: Measure) -> Self {
        value.to_string()
    }
}

/// Running sum and count of the values folded into one measure.
#[derive(Debug, Clone, Copy, Default, PartialEq, derive_more::Add, derive_more::AddAssign)]
pub struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    pub fn finish(self, reduction: Reduction) -> Option<f64> {
        match reduction {
            Reduction::Sum => Some(self.sum),
            Reduction::Count => Some(self.count as f64),
            Reduction::Mean => (self.count > 0).then(|| self.sum / self.count as f64),
        }
    }
}

/// One accumulator per measure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulators(Vec<Accumulator>);

impl std::ops::AddAssign for Accumulators {
    fn add_assign(&mut self, rhs: Self) {
        if self.0.len() < rhs.0.len() {
            self.0.resize(rhs.0.len(), Accumulator::default());
        }
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
    }
}

impl Accumulators {
    /// Finishes each accumulator with its measure's reduction. Measures
    /// nothing was accumulated for are treated as empty.
    pub fn finish(&self, measures: &[Measure]) -> Vec<Option<f64>> {
        measures
            .iter()
            .enumerate()
            .map(|(i, m)| {
                self.0
                    .get(i)
                    .copied()
                    .unwrap_or_default()
                    .finish(m.reduction)
            })
            .collect()
    }
}

/// Measures resolved against a table's columns.
pub struct Bound<'a> {
    measures: &'a [Measure],
    idx: Vec<usize>,
}

impl<'a> Bound<'a> {
    pub fn new(table: &base::Table, measures: &'a [Measure]) -> Result<Self, base::table::Error> {
        let idx = measures
            .iter()
            .map(|m| table.index_of(&m.column))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { measures, idx })
    }

    /// Folds a single row. `row_no` is zero-based and only used for error
    /// reporting.
    pub fn accumulate(
        &self,
        row: &[base::Value],
        row_no: usize,
    ) -> Result<Accumulators, base::table::Error> {
        let mut accs = Vec::with_capacity(self.idx.len());
        for (m, &i) in self.measures.iter().zip(&self.idx) {
            let acc = match (&row[i], m.reduction) {
                (base::Value::Null, _) => Accumulator::default(),
                (base::Value::Number(x), _) => Accumulator { sum: *x, count: 1 },
                (base::Value::Text(_), Reduction::Count) => Accumulator { sum: 0.0, count: 1 },
                (base::Value::Text(s), _) => {
                    return Err(base::table::Error::NonNumeric {
                        column: m.column.clone(),
                        row: row_no + 1,
                        value: s.clone(),
                    });
                }
            };
            accs.push(acc);
        }
        Ok(Accumulators(accs))
    }

    /// Folds every row of `table`, which must be the table this was bound
    /// against.
    pub fn fold(&self, table: &base::Table) -> Result<Accumulators, base::table::Error> {
        let mut total = Accumulators::default();
        for (i, row) in table.rows().enumerate() {
            total += self.accumulate(row, i)?;
        }
        Ok(total)
    }
}

use crate::base;

/// A flat dataset with named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<base::Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("missing column '{0}'")]
    MissingColumn(String),
    #[error("non-numeric value '{value}' in column '{column}' at row {row}")]
    NonNumeric {
        column: String,
        /// One-based data row number.
        row: usize,
        value: String,
    },
    #[error("duplicate output column '{0}'")]
    DuplicateColumn(String),
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Appends a row. Short rows are padded with nulls and long rows are
    /// truncated to the number of columns.
    pub fn push(&mut self, mut row: Vec<base::Value>) {
        row.resize(self.columns.len(), base::Value::Null);
        self.rows.push(row);
    }

    pub fn rows(&self) -> impl Iterator<Item = &[base::Value]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn index_of(&self, column: &str) -> Result<usize, Error> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| Error::MissingColumn(column.to_string()))
    }

    pub fn column(&self, column: &str) -> Result<impl Iterator<Item = &base::Value>, Error> {
        let i = self.index_of(column)?;
        Ok(self.rows.iter().map(move |row| &row[i]))
    }

    /// Returns true if the column holds at least one number and nothing but
    /// numbers and nulls.
    pub fn is_numeric(&self, column: &str) -> Result<bool, Error> {
        let mut any = false;
        for v in self.column(column)? {
            match v {
                base::Value::Null => {}
                base::Value::Number(_) => any = true,
                base::Value::Text(_) => return Ok(false),
            }
        }
        Ok(any)
    }

    /// Returns a new table holding the rows for which `keep` returns true.
    pub fn filter<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&[base::Value]) -> bool,
    {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }

    /// Appends a column, or overwrites it if a column with the same name
    /// already exists. `values` is padded with nulls to the table's length.
    pub fn set_column(&mut self, column: &str, mut values: Vec<base::Value>) {
        values.resize(self.rows.len(), base::Value::Null);
        match self.index_of(column) {
            Ok(i) => {
                for (row, v) in self.rows.iter_mut().zip(values) {
                    row[i] = v;
                }
            }
            Err(_) => {
                self.columns.push(column.to_string());
                for (row, v) in self.rows.iter_mut().zip(values) {
                    row.push(v);
                }
            }
        }
    }

    /// Stable sort, largest first, with nulls last.
    pub fn sort_descending(&mut self, column: &str) -> Result<(), Error> {
        let i = self.index_of(column)?;
        self.rows
            .sort_by(|a, b| match (a[i].is_null(), b[i].is_null()) {
                (true, true) => std::cmp::Ordering::Equal,
                (true, false) => std::cmp::Ordering::Greater,
                (false, true) => std::cmp::Ordering::Less,
                (false, false) => b[i].cmp(&a[i]),
            });
        Ok(())
    }

    pub fn truncate(&mut self, n: usize) {
        self.rows.truncate(n);
    }

    /// Returns a new table holding only the given columns, in the given
    /// order.
    pub fn select<S>(&self, columns: &[S]) -> Result<Self, Error>
    where
        S: AsRef<str>,
    {
        let idx = columns
            .iter()
            .map(|c| self.index_of(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            columns: idx.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| idx.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        })
    }

    /// Returns the number of occurrences of each distinct non-null value in
    /// `column`, in ascending value order.
    pub fn value_counts(&self, column: &str) -> Result<Vec<(base::Value, usize)>, Error> {
        let agg = self
            .column(column)?
            .filter(|v| !v.is_null())
            .map(|v| (v.clone(), 1))
            .collect::<base::Aggregate<_, usize>>();
        Ok(agg.into_iter().collect())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid dataset at record {record}")]
    Csv { record: u64, source: csv::Error },
    #[error("invalid dataset at record {record}: expected {expected} fields, found {found}")]
    FieldCount {
        record: u64,
        expected: usize,
        found: usize,
    },
    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),
}

impl std::str::FromStr for Table {
    type Err = ParseError;

    /// Parses CSV with a header row. Fields are trimmed, and records whose
    /// fields are all blank are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let csv_err = |e: csv::Error| ParseError::Csv {
            record: e.position().map(|p| p.record()).unwrap_or_default(),
            source: e,
        };

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(s.as_bytes());
        let columns = reader
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        for (i, c) in columns.iter().enumerate() {
            if columns[..i].contains(c) {
                return Err(ParseError::DuplicateColumn(c.clone()));
            }
        }

        let mut table = Self::new(columns);
        for record in reader.records() {
            let record = record.map_err(csv_err)?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            if record.len() != table.columns.len() {
                return Err(ParseError::FieldCount {
                    record: record.position().map(|p| p.record()).unwrap_or_default(),
                    expected: table.columns.len(),
                    found: record.len(),
                });
            }
            table.push(record.iter().map(base::Value::parse).collect());
        }
        Ok(table)
    }
}

impl TryFrom<&str> for Table {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl std::fmt::Display for Table {
    /// Writes CSV, with a terminating newline unless the table has no
    /// columns.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.columns.is_empty() {
            return Ok(());
        }
        let mut w = csv::Writer::from_writer(Vec::new());
        w.write_record(&self.columns).map_err(|_| std::fmt::Error)?;
        for row in self.rows.iter() {
            w.write_record(row.iter().map(ToString::to_string))
                .map_err(|_| std::fmt::Error)?;
        }
        let bytes = w.into_inner().map_err(|_| std::fmt::Error)?;
        let s = String::from_utf8(bytes).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl serde::Serialize for Table {
    /// Serializes as a sequence of maps from column name to value, with
    /// column order preserved.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        struct Row<'a> {
            columns: &'a [String],
            values: &'a [base::Value],
        }

        impl serde::Serialize for Row<'_> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                use serde::ser::SerializeMap;
                let mut m = serializer.serialize_map(Some(self.columns.len()))?;
                for (c, v) in self.columns.iter().zip(self.values) {
                    m.serialize_entry(c, v)?;
                }
                m.end()
            }
        }

        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for values in self.rows.iter() {
            seq.serialize_element(&Row {
                columns: &self.columns,
                values,
            })?;
        }
        seq.end()
    }
}

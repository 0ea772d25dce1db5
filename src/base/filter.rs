use crate::base;

/// Wildcard patterns matched against one column, written as
/// `COLUMN=PATTERN[,PATTERN...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 'COLUMN=PATTERNS'")]
    Format,
    #[error("column name is empty")]
    EmptyColumn,
}

impl std::str::FromStr for Filter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, patterns) = s.split_once('=').ok_or(ParseError::Format)?;
        let column = column.trim();
        if column.is_empty() {
            return Err(ParseError::EmptyColumn);
        }
        Ok(Self {
            column: column.to_string(),
            patterns: patterns.split(',').map(|p| p.trim().to_string()).collect(),
        })
    }
}

struct Compiled {
    idx: usize,
    patterns: Vec<wildmatch::WildMatch>,
}

impl Compiled {
    fn new(table: &base::Table, filter: &Filter) -> Result<Self, base::table::Error> {
        Ok(Self {
            idx: table.index_of(&filter.column)?,
            patterns: filter
                .patterns
                .iter()
                .map(|p| wildmatch::WildMatch::new(p))
                .collect(),
        })
    }

    fn matches(&self, row: &[base::Value]) -> bool {
        let s = row[self.idx].to_string();
        self.patterns.iter().any(|p| p.matches(&s))
    }
}

/// Row selection built from include and exclude filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub include: Vec<Filter>,
    pub exclude: Vec<Filter>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Returns a new table such that each row:
    /// - Matches some pattern of every include filter
    /// - Matches no pattern of any exclude filter
    pub fn apply(&self, table: &base::Table) -> Result<base::Table, base::table::Error> {
        let compile = |filters: &[Filter]| {
            filters
                .iter()
                .map(|f| Compiled::new(table, f))
                .collect::<Result<Vec<_>, _>>()
        };
        let incl = compile(&self.include)?;
        let excl = compile(&self.exclude)?;
        let filtered = table.filter(|row| {
            incl.iter().all(|c| c.matches(row)) && !excl.iter().any(|c| c.matches(row))
        });
        tracing::debug!(
            rows = table.len(),
            kept = filtered.len(),
            "applied row selection"
        );
        Ok(filtered)
    }
}

use crate::base;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
)]
pub enum Op {
    #[serde(rename = "+")]
    #[strum(serialize = "+")]
    Add,
    #[serde(rename = "-")]
    #[strum(serialize = "-")]
    Sub,
    #[serde(rename = "*")]
    #[strum(serialize = "*")]
    Mul,
    #[serde(rename = "/")]
    #[strum(serialize = "/")]
    Div,
}

impl Op {
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
            Op::Div => a / b,
        }
    }
}

/// A column computed row-wise from two numeric columns.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Derived {
    pub name: String,
    pub left: String,
    pub op: Op,
    pub right: String,
}

impl Derived {
    pub fn new(name: &str, left: &str, op: Op, right: &str) -> Self {
        Self {
            name: name.to_string(),
            left: left.to_string(),
            op,
            right: right.to_string(),
        }
    }

    /// Adds the derived column to `table`, replacing any column of the same
    /// name. Cells are null where either operand is null or the result is not
    /// finite.
    pub fn apply(&self, table: &mut base::Table) -> Result<(), base::table::Error> {
        let l = table.index_of(&self.left)?;
        let r = table.index_of(&self.right)?;
        let operand = |v: &base::Value, column: &str, row: usize| match v {
            base::Value::Null => Ok(None),
            base::Value::Number(x) => Ok(Some(*x)),
            base::Value::Text(s) => Err(base::table::Error::NonNumeric {
                column: column.to_string(),
                row: row + 1,
                value: s.clone(),
            }),
        };
        let values = table
            .rows()
            .enumerate()
            .map(|(i, row)| {
                let a = operand(&row[l], &self.left, i)?;
                let b = operand(&row[r], &self.right, i)?;
                Ok(match (a, b) {
                    (Some(a), Some(b)) => base::Value::from_f64(self.op.apply(a, b)),
                    _ => base::Value::Null,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        table.set_column(&self.name, values);
        Ok(())
    }
}

impl std::fmt::Display for Derived {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {} {} {}", self.name, self.left, self.op, self.right)
    }
}

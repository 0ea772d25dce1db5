/// A single table cell.
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Number(f64),
    Text(String),
}

impl Value {
    /// Interprets a raw field. Empty fields are null, finite numerals are
    /// numbers, and everything else is text.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            return Self::Null;
        }
        match s.parse::<f64>() {
            Ok(x) if x.is_finite() => Self::Number(x),
            _ => Self::Text(s.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(x) => Some(*x),
            _ => None,
        }
    }

    /// Wraps `x` as a number, mapping non-finite results to null.
    pub fn from_f64(x: f64) -> Self {
        if x.is_finite() {
            Self::Number(x)
        } else {
            Self::Null
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Value {}

impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Self::Null => {}
            Self::Number(x) => x.to_bits().hash(state),
            Self::Text(s) => s.hash(state),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Number(x) => x.fmt(f),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::from_f64(x)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", Value::Null)]
    #[case("   ", Value::Null)]
    #[case("12", Value::Number(12.0))]
    #[case(" -3.5 ", Value::Number(-3.5))]
    #[case("Summer", Value::Text("Summer".into()))]
    #[case("NaN", Value::Text("NaN".into()))]
    #[case("inf", Value::Text("inf".into()))]
    #[case("Purchase Amount (USD)", Value::Text("Purchase Amount (USD)".into()))]
    fn test_parse(#[case] s: &str, #[case] want: Value) {
        assert_eq!(Value::parse(s), want)
    }

    #[rstest]
    #[case(Value::Null, "")]
    #[case(Value::Number(2020.0), "2020")]
    #[case(Value::Number(0.25), "0.25")]
    #[case(Value::Text("Shirt".into()), "Shirt")]
    fn test_to_string(#[case] v: Value, #[case] want: &str) {
        assert_eq!(v.to_string(), want)
    }

    #[test]
    fn test_ordering() {
        let mut v = vec![
            Value::from("b"),
            Value::Number(100.0),
            Value::Null,
            Value::Number(20.0),
            Value::from("a"),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Value::Null,
                Value::Number(20.0),
                Value::Number(100.0),
                Value::from("a"),
                Value::from("b"),
            ]
        );
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Value::from_f64(1.5), Value::Number(1.5));
        assert!(Value::from_f64(f64::INFINITY).is_null());
        assert!(Value::from_f64(f64::NAN).is_null());
    }
}

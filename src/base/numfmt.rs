/// Formats with the given number of decimal places and comma thousands
/// separators. Values that round to zero carry no sign.
pub fn grouped(x: f64, decimals: usize) -> String {
    let digits = format!("{:.*}", decimals, x.abs());
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits.as_str(), None),
    };
    let negative = x < 0.0 && digits.bytes().any(|b| (b'1'..=b'9').contains(&b));

    let mut s = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        s.push('-');
    }
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            s.push(',');
        }
        s.push(c);
    }
    if let Some(frac) = frac {
        s.push('.');
        s.push_str(frac);
    }
    s
}

/// Whole numbers without decimals, everything else with two.
pub fn plain(x: f64) -> String {
    if x.fract() == 0.0 {
        grouped(x, 0)
    } else {
        grouped(x, 2)
    }
}

/// Thousands are abbreviated with a `K` suffix.
pub fn thousand(x: f64) -> String {
    if x.abs() >= 1_000.0 {
        format!("{}K", grouped(x / 1_000.0, 0))
    } else {
        grouped(x, 0)
    }
}

/// Currency quantities expressed in millions. Thousands of millions are shown
/// as billions and millions of millions as trillions.
pub fn million(x: f64) -> String {
    if x.abs() >= 1_000_000.0 {
        format!("${}T", grouped(x / 1_000_000.0, 2))
    } else if x.abs() >= 1_000.0 {
        format!("${}B", grouped(x / 1_000.0, 2))
    } else {
        format!("${}M", grouped(x, 1))
    }
}

pub fn percent(x: f64) -> String {
    format!("{:.2}%", x)
}

/// Like [`grouped`], but non-negative values carry a `+`.
pub fn signed(x: f64, decimals: usize) -> String {
    let s = grouped(x, decimals);
    if s.starts_with('-') {
        s
    } else {
        format!("+{}", s)
    }
}

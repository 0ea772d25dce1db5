use crate::base;
use crate::base::tree::BOUNDING_SPACES_COUNT;

pub const MIN_TERM_WIDTH: usize = 60;

pub struct Barchart {
    charset: base::Charset,
    counts: Vec<(String, usize)>,
    mean: Option<f64>,
    label_charlen: usize,
    max_count: usize,
    max_barlen: usize,
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub charset: base::Charset,
    /// Occurrences of each distinct value, in drawing order.
    pub counts: Vec<(base::Value, usize)>,
    pub term_width: usize,
}

impl Config {
    /// Weighted mean of the counted values, if they are all numbers.
    fn mean(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut n = 0;
        for (v, count) in self.counts.iter() {
            sum += v.as_number()? * *count as f64;
            n += count;
        }
        (n > 0).then(|| sum / n as f64)
    }

    pub fn to_barchart(&self) -> Barchart {
        let counts = self
            .counts
            .iter()
            .map(|(v, n)| (v.to_string(), *n))
            .collect::<Vec<_>>();
        let label_charlen = counts
            .iter()
            .map(|(s, _)| s.chars().count())
            .max()
            .unwrap_or_default();
        let max_count = counts.iter().map(|(_, n)| *n).max().unwrap_or_default();
        let max_barlen = self
            .term_width
            .max(MIN_TERM_WIDTH)
            .saturating_sub(label_charlen)
            .saturating_sub(BOUNDING_SPACES_COUNT)
            .saturating_sub(1) // axis just before bar
            .saturating_sub(max_count.to_string().len());

        Barchart {
            charset: self.charset.clone(),
            counts,
            mean: self.mean(),
            label_charlen,
            max_count,
            max_barlen,
        }
    }
}

impl Barchart {
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn barlen(&self, count: usize) -> usize {
        let x = (count as f64) / (self.max_count as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }
}

impl std::fmt::Display for Barchart {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (label, count) in self.counts.iter() {
            write!(
                f,
                "{:<width$} {}",
                label,
                self.charset.axis,
                width = self.label_charlen
            )?;
            let barlen = self.barlen(*count);
            if barlen > 0 {
                let mut bars = self.charset.bar.to_string().repeat(barlen);
                if self.charset.color {
                    bars = colored::Colorize::green(bars.as_str()).to_string();
                }
                write!(f, "{} ", bars)?;
            }
            writeln!(f, "{}", count)?;
        }
        if let Some(mean) = self.mean {
            writeln!(f, "Avg: {:.2}", mean)?;
        }
        Ok(())
    }
}

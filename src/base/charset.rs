/// Glyphs used to draw the branches of a tree. Every glyph has the same
/// display width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub tee: &'static str,
    pub corner: &'static str,
    pub pipe: &'static str,
    pub blank: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub branch: Branch,
    pub bar: char,
    pub axis: char,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            branch: Branch {
                tee: "|-- ",
                corner: "`-- ",
                pipe: "|   ",
                blank: "    ",
            },
            bar: '+',
            axis: '|',
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            branch: Branch {
                tee: "\u{251c}\u{2500}\u{2500} ",
                corner: "\u{2514}\u{2500}\u{2500} ",
                pipe: "\u{2502}   ",
                blank: "    ",
            },
            bar: '\u{2588}',
            axis: '\u{2502}',
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }

    /// Display width of one level of tree indentation.
    pub fn indent(&self) -> usize {
        self.branch.blank.chars().count()
    }

    pub fn dashes(&self, n: usize) -> String {
        std::iter::repeat_n(self.dash, n).collect()
    }

    /// Colors `s` by the sign of `x` if color is enabled.
    pub fn paint(&self, s: &str, x: f64) -> String {
        if !self.color {
            return s.to_string();
        }
        if x > 0.0 {
            colored::Colorize::green(s).to_string()
        } else if x < 0.0 {
            colored::Colorize::red(s).to_string()
        } else {
            s.to_string()
        }
    }
}

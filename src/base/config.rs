use crate::base;

/// Application config.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// CSV file, relative to the repository directory.
    pub dataset: String,
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
    /// Applied in order right after the dataset is loaded.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub derived: Vec<base::Derived>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollup: Option<base::rollup::Config>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kpi: Option<base::kpi::Config>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<base::totals::Config>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: "data.csv".into(),
            use_colored_output: false,
            use_unicode_symbols: false,
            derived: Vec::new(),
            rollup: None,
            kpi: None,
            totals: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display, strum::VariantNames)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Preset {
    /// Retail purchases by season and item.
    Shopping,
    /// Company ESG and financial indicators by year.
    Esg,
}

fn measures(specs: &[&str]) -> Vec<base::Measure> {
    specs
        .iter()
        .map(|s| s.parse().expect("preset measures should be valid"))
        .collect()
}

impl Config {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Shopping => Self {
                dataset: "shopping_trends_updated.csv".into(),
                derived: vec![base::Derived::new(
                    "Difference Amount",
                    "Purchase Amount (USD)",
                    base::derived::Op::Sub,
                    "Previous Purchases",
                )],
                rollup: Some(base::rollup::Config {
                    coarse: "Season".into(),
                    fine: "Item Purchased".into(),
                    measures: measures(&[
                        "Purchase Amount (USD)=sum:thousand",
                        "Age=mean",
                        "Customer ID=count",
                    ]),
                    root_label: "All Seasons".into(),
                    ids: base::rollup::IdScheme {
                        root: "All_Seasons".into(),
                        coarse_tag: "Season".into(),
                        fine_tag: "Item".into(),
                    },
                }),
                totals: Some(base::totals::Config {
                    measures: measures(&[
                        "Purchase Amount (USD)=sum:thousand",
                        "Customer ID=count:thousand",
                    ]),
                    growth: Some(base::totals::Growth {
                        current: "Purchase Amount (USD)".into(),
                        previous: "Previous Purchases".into(),
                    }),
                }),
                ..Self::default()
            },
            Preset::Esg => Self {
                dataset: "company_esg_financial_dataset.csv".into(),
                derived: vec![base::Derived::new(
                    "CarbonIntensity",
                    "CarbonEmissions",
                    base::derived::Op::Div,
                    "Revenue",
                )],
                rollup: Some(base::rollup::Config {
                    coarse: "Industry".into(),
                    fine: "Region".into(),
                    measures: measures(&["Revenue=sum:million", "ESG_Overall=mean"]),
                    root_label: "All Industries".into(),
                    ids: base::rollup::IdScheme {
                        root: "All_Industries".into(),
                        coarse_tag: "Industry".into(),
                        fine_tag: "Region".into(),
                    },
                }),
                kpi: Some(base::kpi::Config {
                    period: "Year".into(),
                    measures: measures(&[
                        "Revenue=sum:million",
                        "MarketCap=sum:million",
                        "ProfitMargin=mean:percent",
                        "ESG_Overall=mean",
                        "CarbonIntensity=mean",
                    ]),
                }),
                ..Self::default()
            },
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

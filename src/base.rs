pub mod aggregate;
pub mod barchart;
pub mod charset;
pub mod config;
pub mod derived;
pub mod filter;
pub mod fs;
pub mod group;
pub mod kpi;
pub mod measure;
pub mod numfmt;
pub mod rollup;
pub mod table;
pub mod totals;
pub mod tree;
pub mod value;

pub use aggregate::Aggregate;
pub use charset::Charset;
pub use config::Config;
pub use derived::Derived;
pub use filter::Filter;
pub use filter::Selection;
pub use fs::Fs;
pub use measure::Accumulators;
pub use measure::Measure;
pub use measure::Reduction;
pub use rollup::Rollup;
pub use table::Table;
pub use tree::Tree;
pub use value::Value;

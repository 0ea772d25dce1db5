pub mod cols;
pub mod counts;
pub mod group;
pub mod init;
pub mod kpi;
pub mod rollup;
pub mod root;
pub mod top;
pub mod totals;

//! Tally-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

pub mod category;
mod config;
mod error;
pub mod period;
mod records;
mod reports;
mod series;

pub use category::{AnalysisGroupBy, AnalysisGroupColumn, AnalysisPage, category_column};
pub use config::TallyConfig;
pub use error::TallyError;
pub use period::{AnalysisPeriod, FundPeriod};
pub use records::{CostRow, DeepRow, FundId, FundRow, PeriodCostRow, PriceSnapshot};
pub use reports::{AnalysisReport, CategoryCostTree, CostItem, FundHistory};
pub use series::{
    DeepGroup, DeepItem, FundPriceSeries, PriceGroup, Timeline, TimeWindow,
};

//! Re-export of shared DTOs from `tally-types`.
// Consolidated re-exports so downstream crates can depend on `tally-core` only

pub use tally_types::{TallyConfig, TallyError};

pub use tally_types::{
    AnalysisGroupBy, AnalysisGroupColumn, AnalysisPage, AnalysisPeriod, FundPeriod,
    category_column,
};

pub use tally_types::{CostRow, DeepRow, FundId, FundRow, PeriodCostRow, PriceSnapshot};

pub use tally_types::{
    DeepGroup, DeepItem, FundPriceSeries, PriceGroup, Timeline, TimeWindow,
};

pub use tally_types::{AnalysisReport, CategoryCostTree, CostItem, FundHistory};

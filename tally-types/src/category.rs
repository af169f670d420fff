//! Expense categories and the column each one is grouped by.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An expense category (one ledger list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisPage {
    /// Recurring bills. Only ever grouped by item.
    Bills,
    /// Groceries and eating out.
    Food,
    /// Everything else.
    General,
    /// Travel.
    Holiday,
    /// Going out.
    Social,
}

impl AnalysisPage {
    /// All categories in their canonical processing order.
    pub const ALL: [Self; 5] = [
        Self::Bills,
        Self::Food,
        Self::General,
        Self::Holiday,
        Self::Social,
    ];

    /// Lowercase label used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bills => "bills",
            Self::Food => "food",
            Self::General => "general",
            Self::Holiday => "holiday",
            Self::Social => "social",
        }
    }

    /// Extended pages carry `category` and `shop` columns in addition to `item`.
    #[must_use]
    pub const fn is_extended(self) -> bool {
        !matches!(self, Self::Bills)
    }
}

impl fmt::Display for AnalysisPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How costs inside a category are broken down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisGroupBy {
    /// Group by the row's category (or item for non-extended pages).
    Category,
    /// Group by the shop the cost was recorded at.
    Shop,
}

/// Ledger column used as the grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisGroupColumn {
    /// The row's item name.
    Item,
    /// The row's category.
    Category,
    /// The row's shop.
    Shop,
}

impl AnalysisGroupColumn {
    /// Column name as stored by ledger sources.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Category => "category",
            Self::Shop => "shop",
        }
    }
}

/// Resolve the grouping column for a category.
///
/// Bills are always grouped by item. Grouping by category uses the `category`
/// column on extended pages and falls back to `item` otherwise. `None` means
/// the caller asked for no breakdown.
#[must_use]
pub const fn category_column(
    page: AnalysisPage,
    group_by: Option<AnalysisGroupBy>,
) -> Option<AnalysisGroupColumn> {
    if matches!(page, AnalysisPage::Bills) {
        return Some(AnalysisGroupColumn::Item);
    }
    match group_by {
        Some(AnalysisGroupBy::Category) => {
            if page.is_extended() {
                Some(AnalysisGroupColumn::Category)
            } else {
                Some(AnalysisGroupColumn::Item)
            }
        }
        Some(AnalysisGroupBy::Shop) => Some(AnalysisGroupColumn::Shop),
        None => None,
    }
}

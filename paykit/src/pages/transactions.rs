// paykit/src/pages/transactions.rs
//
// Transaction history page - two independent equality filters combined
// with AND, recomputed synchronously on every change. No paging, no
// server-side filtering.
//

use std::fmt;
use std::str::FromStr;

use crate::errors::{PayMindError, Result};
use crate::mock;
use crate::types::{Transaction, TransactionStatus, TransactionType};

pub const EMPTY_MESSAGE: &str = "No transactions found matching your filters";

/// Either no constraint, or equality with one tag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl<T: Copy> Filter<T> {
    /// `All` followed by one option per tag, in the given order.
    pub fn options(values: &[T]) -> Vec<Filter<T>> {
        std::iter::once(Filter::All)
            .chain(values.iter().copied().map(Filter::Only))
            .collect()
    }
}

impl<T: Copy + PartialEq> Filter<T> {
    /// The option after this one, wrapping back to `All`.
    pub fn next(&self, values: &[T]) -> Filter<T> {
        let options = Filter::options(values);
        let idx = options.iter().position(|o| o == self).unwrap_or(0);
        options[(idx + 1) % options.len()]
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Only(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl<T: FromStr<Err = PayMindError>> FromStr for Filter<T> {
    type Err = PayMindError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub status: Filter<TransactionStatus>,
    pub kind: Filter<TransactionType>,
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        self.status.admits(&tx.status) && self.kind.admits(&tx.kind)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub completed: usize,
    pub pending: usize,
    pub failed: usize,
}

impl StatusCounts {
    pub fn tally<'a>(rows: impl IntoIterator<Item = &'a Transaction>) -> Self {
        rows.into_iter().fold(Self::default(), |mut counts, tx| {
            match tx.status {
                TransactionStatus::Completed => counts.completed += 1,
                TransactionStatus::Pending => counts.pending += 1,
                TransactionStatus::Failed => counts.failed += 1,
            }
            counts
        })
    }

    pub fn get(&self, status: TransactionStatus) -> usize {
        match status {
            TransactionStatus::Completed => self.completed,
            TransactionStatus::Pending => self.pending,
            TransactionStatus::Failed => self.failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionsModel {
    all: Vec<Transaction>,
    filter: TransactionFilter,
    visible: Vec<Transaction>,
    counts: StatusCounts,
}

impl TransactionsModel {
    pub fn new(all: Vec<Transaction>) -> Self {
        let counts = StatusCounts::tally(&all);
        let mut model = Self {
            all,
            filter: TransactionFilter::default(),
            visible: Vec::new(),
            counts,
        };
        model.recompute();
        model
    }

    /// The page's data source: the fixture list, loaded once.
    pub fn from_fixtures() -> Self {
        Self::new(mock::transactions())
    }

    pub fn set_status_filter(&mut self, status: Filter<TransactionStatus>) {
        self.filter.status = status;
        self.recompute();
    }

    pub fn set_type_filter(&mut self, kind: Filter<TransactionType>) {
        self.filter.kind = kind;
        self.recompute();
    }

    pub fn cycle_status_filter(&mut self) {
        self.set_status_filter(self.filter.status.next(&TransactionStatus::ALL));
    }

    pub fn cycle_type_filter(&mut self) {
        self.set_type_filter(self.filter.kind.next(&TransactionType::ALL));
    }

    fn recompute(&mut self) {
        self.visible = self
            .all
            .iter()
            .filter(|tx| self.filter.matches(tx))
            .cloned()
            .collect();
        self.counts = StatusCounts::tally(&self.all);
    }

    pub fn filter(&self) -> TransactionFilter {
        self.filter
    }

    pub fn visible(&self) -> &[Transaction] {
        &self.visible
    }

    pub fn all(&self) -> &[Transaction] {
        &self.all
    }

    /// Per-status totals over the full list.
    pub fn counts(&self) -> StatusCounts {
        self.counts
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} transactions",
            self.visible.len(),
            self.all.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_filter_combination_is_a_logical_and() {
        let fixtures = mock::transactions();
        let mut model = TransactionsModel::from_fixtures();

        for status in Filter::options(&TransactionStatus::ALL) {
            for kind in Filter::options(&TransactionType::ALL) {
                model.set_status_filter(status);
                model.set_type_filter(kind);

                let expected = fixtures
                    .iter()
                    .filter(|tx| status.admits(&tx.status) && kind.admits(&tx.kind))
                    .count();
                assert_eq!(model.visible().len(), expected, "status={} type={}", status, kind);
                assert!(model
                    .visible()
                    .iter()
                    .all(|tx| status.admits(&tx.status) && kind.admits(&tx.kind)));
            }
        }
    }

    #[test]
    fn test_known_fixture_counts() {
        let mut model = TransactionsModel::from_fixtures();
        assert_eq!(model.summary(), "Showing 6 of 6 transactions");

        model.set_type_filter(Filter::Only(TransactionType::Rent));
        assert_eq!(model.visible().len(), 2);

        model.set_status_filter(Filter::Only(TransactionStatus::Failed));
        assert!(model.visible().is_empty());
        assert_eq!(model.summary(), "Showing 0 of 6 transactions");
    }

    #[test]
    fn test_status_totals_cover_full_list() {
        let mut model = TransactionsModel::from_fixtures();
        model.set_status_filter(Filter::Only(TransactionStatus::Pending));
        let counts = model.counts();
        assert_eq!(counts.completed, 4);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.failed, 1);
        assert_eq!(counts.get(TransactionStatus::Completed), 4);
    }

    #[test]
    fn test_filter_parsing_and_cycling() {
        assert_eq!("all".parse::<Filter<TransactionType>>().unwrap(), Filter::All);
        assert_eq!(
            "Deposit".parse::<Filter<TransactionType>>().unwrap(),
            Filter::Only(TransactionType::Deposit)
        );
        assert!("Refund".parse::<Filter<TransactionType>>().is_err());

        let mut model = TransactionsModel::from_fixtures();
        for _ in 0..TransactionStatus::ALL.len() + 1 {
            model.cycle_status_filter();
        }
        assert_eq!(model.filter().status, Filter::All);
    }
}

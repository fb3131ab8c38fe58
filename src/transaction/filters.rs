//! Derives everything the list page displays from a dataset and the
//! selected month, year and frequencies.
//!
//! All functions here are pure: the same inputs always give the same rows.

use std::collections::BTreeSet;

use crate::{
    Error,
    html::{format_currency, format_date},
};

use super::core::{Frequency, Transaction};

/// The names of the months, starting from January.
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// An option of a `<select>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<T> {
    pub value: T,
    pub label: String,
}

/// The distinct years of the transaction dates in `records`, in the order
/// they first appear.
pub fn derive_year_options(records: &[Transaction]) -> Vec<SelectOption<i32>> {
    let mut years: Vec<i32> = Vec::new();

    for record in records {
        let year = record.date.year();

        if !years.contains(&year) {
            years.push(year);
        }
    }

    years
        .into_iter()
        .map(|year| SelectOption {
            value: year,
            label: year.to_string(),
        })
        .collect()
}

/// The twelve months, valued 1 to 12.
pub fn derive_month_options() -> Vec<SelectOption<u8>> {
    MONTH_NAMES
        .iter()
        .zip(1..)
        .map(|(name, value)| SelectOption {
            value,
            label: (*name).to_owned(),
        })
        .collect()
}

/// The frequencies whose transactions are shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencySet(BTreeSet<Frequency>);

impl FrequencySet {
    /// The set with every frequency, which is what the list page starts with.
    pub fn all() -> Self {
        Frequency::ALL.into_iter().collect()
    }

    pub fn contains(&self, frequency: Frequency) -> bool {
        self.0.contains(&frequency)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Frequency> + '_ {
        self.0.iter().copied()
    }

    /// Parse a comma separated list of frequencies, e.g. "recorrente,eventual".
    ///
    /// An empty string is the empty set.
    ///
    /// # Errors
    /// Returns [Error::InvalidFrequency] for any value that is not a frequency.
    pub fn from_query_value(value: &str) -> Result<Self, Error> {
        value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse::<Frequency>)
            .collect()
    }

    /// The comma separated form accepted by [FrequencySet::from_query_value].
    pub fn to_query_value(&self) -> String {
        self.iter()
            .map(Frequency::as_query_value)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<Frequency> for FrequencySet {
    fn from_iter<I: IntoIterator<Item = Frequency>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Remove `frequency` from `current` if it is there, otherwise add it.
///
/// Toggling the last frequency off gives the empty set, which shows no rows.
pub fn toggle_frequency(current: &FrequencySet, frequency: Frequency) -> FrequencySet {
    let mut toggled = current.clone();

    if !toggled.0.remove(&frequency) {
        toggled.0.insert(frequency);
    }

    toggled
}

/// Identifies a row by the position of its transaction in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowId(pub usize);

/// A transaction formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub id: RowId,
    pub description: String,
    pub formatted_amount: String,
    pub frequency: Frequency,
    pub formatted_date: String,
    pub tag_color: &'static str,
}

impl TransactionRow {
    fn new(id: RowId, transaction: &Transaction) -> Self {
        Self {
            id,
            description: transaction.description.clone(),
            formatted_amount: format_currency(transaction.amount),
            frequency: transaction.frequency,
            formatted_date: format_date(transaction.date),
            tag_color: transaction.frequency.tag_color(),
        }
    }
}

/// The rows for the transactions in `records` dated in `month` of `year`
/// with one of the `frequencies`.
///
/// Rows keep the order of `records`.
pub fn apply_filters(
    records: &[Transaction],
    month: u8,
    year: i32,
    frequencies: &FrequencySet,
) -> Vec<TransactionRow> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            u8::from(record.date.month()) == month
                && record.date.year() == year
                && frequencies.contains(record.frequency)
        })
        .map(|(index, record)| TransactionRow::new(RowId(index), record))
        .collect()
}

#[cfg(test)]
mod filters_tests {
    use time::macros::date;

    use crate::{
        Error,
        transaction::core::{Frequency, Transaction},
    };

    use super::{
        FrequencySet, RowId, apply_filters, derive_month_options, derive_year_options,
        toggle_frequency,
    };

    fn get_test_records() -> Vec<Transaction> {
        vec![
            Transaction::build(100.0, date!(2024 - 03 - 15), "Salário").finalise(),
            Transaction::build(50.0, date!(2023 - 03 - 02), "Presente")
                .frequency(Frequency::OneTime)
                .finalise(),
            Transaction::build(25.0, date!(2024 - 03 - 20), "Venda")
                .frequency(Frequency::OneTime)
                .finalise(),
            Transaction::build(100.0, date!(2024 - 04 - 15), "Salário").finalise(),
            Transaction::build(10.0, date!(2024 - 03 - 01), "Cashback").finalise(),
        ]
    }

    #[test]
    fn year_options_are_distinct_in_first_encountered_order() {
        let options = derive_year_options(&get_test_records());

        let years: Vec<i32> = options.iter().map(|option| option.value).collect();
        let labels: Vec<&str> = options.iter().map(|option| option.label.as_str()).collect();
        assert_eq!(years, [2024, 2023]);
        assert_eq!(labels, ["2024", "2023"]);
    }

    #[test]
    fn year_options_of_empty_records_are_empty() {
        assert!(derive_year_options(&[]).is_empty());
    }

    #[test]
    fn month_options_cover_the_year() {
        let options = derive_month_options();

        assert_eq!(options.len(), 12);
        assert_eq!(options[0].value, 1);
        assert_eq!(options[0].label, "Janeiro");
        assert_eq!(options[2].label, "Março");
        assert_eq!(options[11].value, 12);
        assert_eq!(options[11].label, "Dezembro");
    }

    #[test]
    fn toggle_removes_active_frequency() {
        let toggled = toggle_frequency(&FrequencySet::all(), Frequency::Recurring);

        assert_eq!(
            toggled,
            [Frequency::OneTime].into_iter().collect::<FrequencySet>()
        );
    }

    #[test]
    fn toggle_adds_inactive_frequency() {
        let current: FrequencySet = [Frequency::OneTime].into_iter().collect();

        let toggled = toggle_frequency(&current, Frequency::Recurring);

        assert_eq!(toggled, FrequencySet::all());
    }

    #[test]
    fn toggle_last_frequency_gives_empty_set() {
        let current: FrequencySet = [Frequency::OneTime].into_iter().collect();

        let toggled = toggle_frequency(&current, Frequency::OneTime);

        assert!(toggled.is_empty());
    }

    #[test]
    fn frequency_set_query_value() {
        assert_eq!(FrequencySet::all().to_query_value(), "recorrente,eventual");
        assert_eq!(FrequencySet::default().to_query_value(), "");
        assert_eq!(
            FrequencySet::from_query_value("eventual,recorrente"),
            Ok(FrequencySet::all())
        );
        assert_eq!(
            FrequencySet::from_query_value(""),
            Ok(FrequencySet::default())
        );
    }

    #[test]
    fn frequency_set_rejects_unknown_values() {
        assert_eq!(
            FrequencySet::from_query_value("recorrente,mensal"),
            Err(Error::InvalidFrequency("mensal".to_owned()))
        );
    }

    #[test]
    fn filters_by_month_year_and_frequency() {
        let records = get_test_records();

        let rows = apply_filters(&records, 3, 2024, &FrequencySet::all());

        let ids: Vec<RowId> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, [RowId(0), RowId(2), RowId(4)]);

        for row in &rows {
            let record = &records[row.id.0];
            assert_eq!(u8::from(record.date.month()), 3);
            assert_eq!(record.date.year(), 2024);
            assert_eq!(row.description, record.description);
        }
    }

    #[test]
    fn only_active_frequencies_are_kept() {
        let records = get_test_records();
        let one_time: FrequencySet = [Frequency::OneTime].into_iter().collect();

        let rows = apply_filters(&records, 3, 2024, &one_time);

        assert_eq!(rows.len(), 1);
        assert!(rows.iter().all(|row| one_time.contains(row.frequency)));
        assert_eq!(rows[0].description, "Venda");
    }

    #[test]
    fn empty_frequency_set_gives_no_rows() {
        let rows = apply_filters(&get_test_records(), 3, 2024, &FrequencySet::default());

        assert!(rows.is_empty());
    }

    #[test]
    fn formats_single_matching_record() {
        let records = vec![Transaction::build(100.0, date!(2024 - 03 - 15), "Salário").finalise()];

        let rows = apply_filters(&records, 3, 2024, &FrequencySet::all());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].formatted_date, "15/03/2024");
        assert_eq!(rows[0].formatted_amount, "R$ 100,00");
        assert_eq!(rows[0].tag_color, "#4E41F0");
        assert_eq!(rows[0].frequency, Frequency::Recurring);
    }

    #[test]
    fn recurring_record_is_hidden_when_only_one_time_is_active() {
        let records = vec![Transaction::build(100.0, date!(2024 - 03 - 15), "Salário").finalise()];
        let one_time: FrequencySet = [Frequency::OneTime].into_iter().collect();

        assert!(apply_filters(&records, 3, 2024, &one_time).is_empty());
    }

    #[test]
    fn month_without_records_gives_no_rows() {
        let records = vec![Transaction::build(100.0, date!(2024 - 03 - 15), "Salário").finalise()];

        for year in [2023, 2024, 2025] {
            assert!(apply_filters(&records, 4, year, &FrequencySet::all()).is_empty());
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = get_test_records();

        let first = apply_filters(&records, 3, 2024, &FrequencySet::all());
        let second = apply_filters(&records, 3, 2024, &FrequencySet::all());

        assert_eq!(first, second);
    }

    #[test]
    fn one_time_rows_use_red_tag() {
        let records = get_test_records();

        let rows = apply_filters(&records, 3, 2023, &FrequencySet::all());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].tag_color, "#E44C4E");
        assert_eq!(rows[0].formatted_date, "02/03/2023");
    }
}

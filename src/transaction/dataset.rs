//! The entry and exit datasets and how the list page picks between them.

use std::{fs, path::Path};

use serde::Deserialize;
use time::macros::date;

use crate::{
    Error, endpoints,
    html::{ORANGE, RED},
};

use super::core::{Frequency, Transaction};

/// Which of the two datasets a list page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    /// Money received.
    Entry,
    /// Money spent.
    Exit,
}

impl DatasetKind {
    /// Pick the dataset from the list page's route parameter.
    ///
    /// Only "entry-balance" selects the entries. Any other value, or no
    /// value at all, selects the exits.
    pub fn from_route_param(param: Option<&str>) -> Self {
        match param {
            Some("entry-balance") => Self::Entry,
            _ => Self::Exit,
        }
    }

    /// The value of the list page's route parameter for this dataset.
    pub fn route_param(self) -> &'static str {
        match self {
            Self::Entry => "entry-balance",
            Self::Exit => "exit-balance",
        }
    }

    /// The URL of the list page for this dataset.
    pub fn endpoint(self) -> String {
        endpoints::format_endpoint(endpoints::LIST_VIEW, self.route_param())
    }
}

/// The transactions the app serves, loaded once at start-up.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Datasets {
    /// Money received, shown on the entries page.
    pub gains: Vec<Transaction>,
    /// Money spent, shown on the exits page.
    pub expenses: Vec<Transaction>,
}

impl Datasets {
    /// Read the datasets from a JSON file at `path`.
    ///
    /// The file must hold an object with the arrays `gains` and `expenses`.
    ///
    /// # Errors
    /// Returns [Error::DatasetRead] if the file cannot be read and
    /// [Error::DatasetParse] if it does not hold valid datasets.
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)
            .map_err(|error| Error::DatasetRead(format!("{}: {error}", path.display())))?;

        Self::from_json(&text)
    }

    /// Parse the datasets from JSON `text`.
    ///
    /// # Errors
    /// Returns [Error::DatasetParse] if `text` does not hold valid datasets.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text).map_err(|error| Error::DatasetParse(error.to_string()))
    }

    /// A small set of example transactions used when no dataset file is given.
    pub fn sample() -> Self {
        let gains = vec![
            Transaction::build(4000.0, date!(2023 - 10 - 05), "Salário").finalise(),
            Transaction::build(300.0, date!(2023 - 10 - 18), "Freela")
                .frequency(Frequency::OneTime)
                .finalise(),
            Transaction::build(4000.0, date!(2024 - 01 - 05), "Salário").finalise(),
            Transaction::build(150.0, date!(2024 - 01 - 20), "Venda de livros usados")
                .frequency(Frequency::OneTime)
                .finalise(),
            Transaction::build(4000.0, date!(2024 - 03 - 05), "Salário").finalise(),
            Transaction::build(1200.5, date!(2024 - 03 - 22), "Projeto de consultoria")
                .frequency(Frequency::OneTime)
                .finalise(),
            Transaction::build(4200.0, date!(2025 - 02 - 05), "Salário").finalise(),
        ];

        let expenses = vec![
            Transaction::build(1500.0, date!(2023 - 10 - 10), "Aluguel").finalise(),
            Transaction::build(89.9, date!(2023 - 10 - 12), "Internet").finalise(),
            Transaction::build(620.0, date!(2023 - 10 - 28), "Conserto do carro")
                .frequency(Frequency::OneTime)
                .finalise(),
            Transaction::build(1500.0, date!(2024 - 01 - 10), "Aluguel").finalise(),
            Transaction::build(245.3, date!(2024 - 01 - 14), "Supermercado")
                .frequency(Frequency::OneTime)
                .finalise(),
            Transaction::build(1500.0, date!(2024 - 03 - 10), "Aluguel").finalise(),
            Transaction::build(89.9, date!(2024 - 03 - 12), "Internet").finalise(),
            Transaction::build(180.0, date!(2024 - 03 - 30), "Jantar de aniversário")
                .frequency(Frequency::OneTime)
                .finalise(),
            Transaction::build(1600.0, date!(2025 - 02 - 10), "Aluguel").finalise(),
        ];

        Self { gains, expenses }
    }
}

/// The header metadata and records of the dataset shown on a list page.
#[derive(Debug, PartialEq)]
pub struct DatasetPage<'a> {
    pub title: &'static str,
    pub accent_color: &'static str,
    pub records: &'a [Transaction],
}

/// Look up the title, accent colour and records for `kind`.
pub fn select_dataset(datasets: &Datasets, kind: DatasetKind) -> DatasetPage<'_> {
    match kind {
        DatasetKind::Entry => DatasetPage {
            title: "Entradas",
            accent_color: ORANGE,
            records: &datasets.gains,
        },
        DatasetKind::Exit => DatasetPage {
            title: "Saída",
            accent_color: RED,
            records: &datasets.expenses,
        },
    }
}

//! Defines the core data model for transactions and how they are read from JSON.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, de};
use time::{Date, macros::format_description};

use crate::Error;

/// How often a transaction happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
pub enum Frequency {
    /// A transaction that repeats, e.g. a salary or rent.
    #[serde(rename = "recorrente")]
    Recurring,
    /// A transaction that happens once, e.g. a gift or a repair.
    #[serde(rename = "eventual")]
    OneTime,
}

impl Frequency {
    /// All frequencies in display order.
    pub const ALL: [Frequency; 2] = [Frequency::Recurring, Frequency::OneTime];

    /// The value used for this frequency in data files and URLs.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Recurring => "recorrente",
            Self::OneTime => "eventual",
        }
    }

    /// The label of the filter button for this frequency.
    pub fn label(self) -> &'static str {
        match self {
            Self::Recurring => "Recorrentes",
            Self::OneTime => "Eventuais",
        }
    }

    /// The colour of the tag shown next to transactions with this frequency.
    pub fn tag_color(self) -> &'static str {
        match self {
            Self::Recurring => "#4E41F0",
            Self::OneTime => "#E44C4E",
        }
    }
}

impl FromStr for Frequency {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "recorrente" => Ok(Self::Recurring),
            "eventual" => Ok(Self::OneTime),
            other => Err(Error::InvalidFrequency(other.to_owned())),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

/// An entry or exit of money.
///
/// To create a new `Transaction` in code, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money received or spent.
    ///
    /// Data files may give the amount either as a number or as a string,
    /// e.g. `"4000.00"`.
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    /// When the transaction happened.
    #[serde(deserialize_with = "deserialize_date")]
    pub date: Date,
    /// Whether the transaction repeats.
    pub frequency: Frequency,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(amount: f64, date: Date, description: &str) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            date,
            description: description.to_owned(),
            frequency: Frequency::Recurring,
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The frequency defaults to [Frequency::Recurring].
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    amount: f64,
    date: Date,
    description: String,
    frequency: Frequency,
}

impl TransactionBuilder {
    /// Set the frequency of the transaction.
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Build the final [Transaction].
    pub fn finalise(self) -> Transaction {
        Transaction {
            description: self.description,
            amount: self.amount,
            date: self.date,
            frequency: self.frequency,
        }
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(number) => Ok(number),
        Amount::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("\"{text}\" is not a valid amount"))),
    }
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    Date::parse(&text, format_description!("[year]-[month]-[day]"))
        .map_err(|error| de::Error::custom(format!("\"{text}\" is not a valid date: {error}")))
}

#[cfg(test)]
mod transaction_tests {
    use time::macros::date;

    use crate::Error;

    use super::{Frequency, Transaction};

    #[test]
    fn parses_record_with_string_amount() {
        let json = r#"{
            "description": "Salário",
            "amount": "4000.00",
            "type": "entrada",
            "frequency": "recorrente",
            "date": "2024-03-15"
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(
            transaction,
            Transaction::build(4000.0, date!(2024 - 03 - 15), "Salário").finalise()
        );
    }

    #[test]
    fn parses_record_with_number_amount() {
        let json = r#"{
            "description": "Conserto do carro",
            "amount": 350.5,
            "frequency": "eventual",
            "date": "2023-11-02"
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(transaction.amount, 350.5);
        assert_eq!(transaction.frequency, Frequency::OneTime);
        assert_eq!(transaction.date, date!(2023 - 11 - 02));
    }

    #[test]
    fn rejects_invalid_amount() {
        let json = r#"{
            "description": "Mistério",
            "amount": "muito",
            "frequency": "eventual",
            "date": "2023-11-02"
        }"#;

        let result = serde_json::from_str::<Transaction>(json);

        assert!(result.is_err(), "Expected an error, got {result:?}");
    }

    #[test]
    fn rejects_invalid_date() {
        let json = r#"{
            "description": "Mistério",
            "amount": "1.00",
            "frequency": "eventual",
            "date": "2023-13-02"
        }"#;

        let result = serde_json::from_str::<Transaction>(json);

        assert!(result.is_err(), "Expected an error, got {result:?}");
    }

    #[test]
    fn frequency_round_trips_through_query_value() {
        for frequency in Frequency::ALL {
            assert_eq!(frequency.as_query_value().parse(), Ok(frequency));
        }
    }

    #[test]
    fn unknown_frequency_is_an_error() {
        assert_eq!(
            "mensal".parse::<Frequency>(),
            Err(Error::InvalidFrequency("mensal".to_owned()))
        );
    }

    #[test]
    fn frequency_tag_colours() {
        assert_eq!(Frequency::Recurring.tag_color(), "#4E41F0");
        assert_eq!(Frequency::OneTime.tag_color(), "#E44C4E");
    }
}

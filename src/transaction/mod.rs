//! Transactions and the pages that list them.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and how it is read from JSON
//! - The entry and exit datasets and how a page selects between them
//! - The filters that derive the displayed rows from a dataset
//! - The route handlers and views for the list page

mod core;
mod dataset;
mod filters;
mod list_page;
mod view;

pub use core::{Frequency, Transaction, TransactionBuilder};
pub use dataset::Datasets;
pub use list_page::{get_default_list_page, get_list_page};

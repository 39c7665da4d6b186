pub mod qnips_data_types;

use chrono::NaiveDate;

/// One column of the weekly table: German weekday name plus the formatted date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
    pub name: String,
    pub date: String,
    pub day: NaiveDate,
}

/// Load state of a [`crate::meal_table::MealTable`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

use chrono::NaiveDate;

pub mod qnips_fetcher;

/// Date as shown in the table header, e.g. `03.06.2024`.
pub fn german_date_fmt(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Price as shown next to a product, e.g. `3,50 €`.
pub fn format_price(amount: f64) -> String {
    format!("{:.2} €", amount).replace('.', ",")
}

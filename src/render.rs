use serde::Serialize;

use crate::constants::NO_MEALS_MSG;
use crate::data_backend::format_price;
use crate::data_types::LoadState;
use crate::meal_table::MealTable;

#[derive(Serialize, Debug)]
pub struct WeekView<'a> {
    pub week_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<&'a str>,
    pub days: Vec<DayView<'a>>,
}

#[derive(Serialize, Debug)]
pub struct DayView<'a> {
    pub name: &'a str,
    pub date: &'a str,
    pub rows: Vec<RowView<'a>>,
}

#[derive(Serialize, Debug)]
pub struct RowView<'a> {
    pub name: &'a str,
    pub products: Vec<ProductView<'a>>,
}

#[derive(Serialize, Debug)]
pub struct ProductView<'a> {
    pub id: u64,
    pub name: &'a str,
    pub price: f64,
    pub price_display: String,
    pub allergens: String,
}

/// Display-ready snapshot of the table, one entry per weekday column.
pub fn week_view(table: &MealTable) -> WeekView<'_> {
    let days = table
        .days_of_week()
        .iter()
        .zip(1u32..)
        .map(|(week_day, weekday)| DayView {
            name: &week_day.name,
            date: &week_day.date,
            rows: table
                .rows()
                .iter()
                .map(|row| RowView {
                    name: &row.name,
                    products: table
                        .products_for(row, weekday)
                        .into_iter()
                        .map(|product| ProductView {
                            id: product.product_id,
                            name: &product.name,
                            price: product.price.amount,
                            price_display: format_price(product.price.amount),
                            allergens: table.allergen_labels_for(product),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    WeekView {
        week_number: table.week_number(),
        error_message: (table.state() == LoadState::Failed).then(|| table.error_message()),
        days,
    }
}

pub fn render_json(table: &MealTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&week_view(table))
}

pub fn render_text(table: &MealTable) -> String {
    let view = week_view(table);
    let mut msg = String::new();

    if let Some(week_number) = view.week_number {
        msg += &format!("KW {}\n", week_number);
    }

    if let Some(error_message) = view.error_message {
        msg += &format!("\n{}\n", error_message);
        return msg;
    }

    for day in view.days {
        msg += &format!("\n{}, {}\n", day.name, day.date);

        for row in day.rows {
            msg += &format!("{}\n", row.name);
            if row.products.is_empty() {
                msg += &format!(" • {}\n", NO_MEALS_MSG);
                continue;
            }

            for product in row.products {
                msg += &format!(" • {}  {}\n", product.name, product.price_display);
                msg += &format!("     ℹ️ {}\n", product.allergens);
            }
        }
    }

    msg
}

use crate::constants::{LOAD_FAILED_MSG, NO_ALLERGENS_MSG, UNKNOWN_ALLERGEN_MSG};
use crate::data_backend::qnips_fetcher::MealSource;
use crate::data_types::qnips_data_types::{MealData, MealRow, Product};
use crate::data_types::{LoadState, WeekDay};
use crate::errors::FetchError;
use crate::week_calc::{current_weekdays, iso_week_number, Clock};

/// The weekly meal table: fetched plan plus the current week's header.
///
/// Starts out [`LoadState::Loading`]. [`MealTable::init`] loads the plan once and
/// computes the week regardless of the fetch outcome, leaving the table either
/// `Loaded` or `Failed` for the rest of its life.
#[derive(Debug, Default)]
pub struct MealTable {
    state: LoadState,
    data: Option<MealData>,
    error_message: String,
    last_error: Option<FetchError>,
    days_of_week: Vec<WeekDay>,
    week_number: Option<u32>,
}

impl MealTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn init<S: MealSource, C: Clock>(source: &S, clock: &C) -> Self {
        let mut table = Self::new();
        table.load(source).await;
        table.compute_week(clock);
        table
    }

    pub(crate) async fn load<S: MealSource>(&mut self, source: &S) {
        match source.fetch_meals().await {
            Ok(data) => {
                self.data = Some(data);
                self.error_message.clear();
                self.last_error = None;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                log::error!("Fehler beim Laden: {}", e);
                self.data = None;
                self.error_message = LOAD_FAILED_MSG.to_string();
                self.last_error = Some(e);
                self.state = LoadState::Failed;
            }
        }
    }

    pub(crate) fn compute_week<C: Clock>(&mut self, clock: &C) {
        let today = clock.today();
        self.days_of_week = current_weekdays(today).into();
        self.week_number = Some(iso_week_number(today));
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Empty unless the fetch failed.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// The underlying fetch failure, kept for diagnostics only.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    pub fn data(&self) -> Option<&MealData> {
        self.data.as_ref()
    }

    pub fn rows(&self) -> &[MealRow] {
        self.data
            .as_ref()
            .map(|data| data.rows.as_slice())
            .unwrap_or(&[])
    }

    pub fn days_of_week(&self) -> &[WeekDay] {
        &self.days_of_week
    }

    pub fn week_number(&self) -> Option<u32> {
        self.week_number
    }

    /// Comma separated allergen labels of `product`, in the order the product lists them.
    pub fn allergen_labels_for(&self, product: &Product) -> String {
        let allergens = self.data.as_ref().and_then(|data| data.allergens.as_ref());
        let (Some(ids), Some(allergens)) = (product.allergen_ids.as_ref(), allergens) else {
            return NO_ALLERGENS_MSG.to_string();
        };
        if ids.is_empty() {
            return NO_ALLERGENS_MSG.to_string();
        }

        ids.iter()
            .map(|id| {
                allergens
                    .get(id)
                    .map(|allergen| allergen.label.as_str())
                    .filter(|label| !label.is_empty())
                    .unwrap_or(UNKNOWN_ALLERGEN_MSG)
            })
            .collect::<Vec<&str>>()
            .join(", ")
    }

    /// Products `row` offers on `weekday` (1 = Monday). Dangling product ids are skipped.
    pub fn products_for<'a>(&'a self, row: &'a MealRow, weekday: u32) -> Vec<&'a Product> {
        let Some(data) = self.data.as_ref() else {
            return Vec::new();
        };

        row.days
            .iter()
            .filter(|entry| entry.weekday == weekday)
            .flat_map(|entry| entry.product_ids.iter())
            .filter_map(|product_ref| {
                let product = data.products.get(&product_ref.product_id.to_string());
                if product.is_none() {
                    log::debug!(
                        "Row '{}' references unknown product {}",
                        row.name,
                        product_ref.product_id
                    );
                }
                product
            })
            .collect()
    }
}

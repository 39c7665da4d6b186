pub const API_URL: &str = "https://my.qnips.io/dbapi/ha";

pub const NO_ALLERGENS_MSG: &str = "Keine Allergene";
pub const UNKNOWN_ALLERGEN_MSG: &str = "Unbekanntes Allergen";
pub const LOAD_FAILED_MSG: &str = "Hochladen von Daten nicht möglich";
pub const NO_MEALS_MSG: &str = "Keine Gerichte...";

pub const WEEK_DAYS: [&str; 5] = ["Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag"];

pub mod constants;
pub mod data_backend;
pub mod data_types;
pub mod errors;
pub mod meal_table;
pub mod render;
pub mod shared_main;
pub mod week_calc;

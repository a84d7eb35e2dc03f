pub mod ansi;
pub mod ascii;
pub mod calendar_printer;
pub mod display_data;
pub mod display_manager;
pub mod output;
pub mod table_printer;
#[cfg(test)]
mod tests;
pub mod width_util;

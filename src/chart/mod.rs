pub mod builder;
pub mod calendar_chart;
pub mod data;
pub mod layout;
pub mod strategy;
pub mod target;
#[cfg(test)]
mod tests;

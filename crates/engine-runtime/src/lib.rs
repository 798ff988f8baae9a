pub mod error;
pub mod report;
pub mod settings;
pub mod sync;

#[cfg(test)]
mod tests;

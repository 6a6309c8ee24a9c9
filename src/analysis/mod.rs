pub mod indicators;

pub use indicators::{FibonacciLevel, Pattern, TechnicalIndicators, Trend};

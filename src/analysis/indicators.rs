use crate::models::market::Candle;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

pub const RSI_PERIOD: usize = 14;
pub const SWING_WINDOW: usize = 5;
/// Candles considered for the "recent" high/low and chart patterns.
pub const RECENT_WINDOW: usize = 20;
pub const FIBONACCI_RATIOS: [f64; 5] = [0.236, 0.382, 0.5, 0.618, 0.786];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Trend::Up => write!(f, "Uptrend 📈"),
            Trend::Down => write!(f, "Downtrend 📉"),
            Trend::Neutral => write!(f, "Neutral ↔️"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Pattern {
    DoubleTop,
    DoubleBottom,
    BullFlag,
    BearFlag,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Pattern::DoubleTop => "Potential Double Top",
            Pattern::DoubleBottom => "Potential Double Bottom",
            Pattern::BullFlag => "Potential Bull Flag",
            Pattern::BearFlag => "Potential Bear Flag",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FibonacciLevel {
    pub ratio: f64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalIndicators {
    pub trend: Trend,
    pub patterns: Vec<Pattern>,
    pub support_levels: Vec<f64>,
    pub resistance_levels: Vec<f64>,
    pub fibonacci_levels: Vec<FibonacciLevel>,
    pub rsi: f64,
}

impl TechnicalIndicators {
    /// `None` for an empty series.
    pub fn from_candles(candles: &[Candle]) -> Option<Self> {
        if candles.is_empty() {
            return None;
        }

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
        let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();

        let recent_high = max_of(recent(&highs, RECENT_WINDOW));
        let recent_low = min_of(recent(&lows, RECENT_WINDOW));

        Some(Self {
            trend: trend(&closes),
            patterns: patterns(candles),
            support_levels: sorted_unique(swing_lows(&lows, SWING_WINDOW)),
            resistance_levels: sorted_unique(swing_highs(&highs, SWING_WINDOW)),
            fibonacci_levels: fibonacci_levels(recent_high, recent_low),
            rsi: rsi(&closes, RSI_PERIOD),
        })
    }
}

/// Simple-average RSI over the last `period` price changes.
///
/// Returns the neutral 50 when fewer than `period + 1` prices are given or
/// the window has no movement at all.
pub fn rsi(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period + 1 {
        return 50.0;
    }

    let window = &prices[prices.len() - period - 1..];
    let mut gains = 0.0;
    let mut losses = 0.0;
    for pair in window.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains += change;
        } else {
            losses -= change;
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0
    } else if avg_loss == 0.0 {
        100.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}

/// Least-squares slope of `prices` against their index.
pub fn slope(prices: &[f64]) -> f64 {
    let n = prices.len() as f64;
    if prices.len() < 2 {
        return 0.0;
    }
    let sum_x: f64 = (0..prices.len()).map(|i| i as f64).sum();
    let sum_y: f64 = prices.iter().sum();
    let sum_xy: f64 = prices.iter().enumerate().map(|(i, y)| i as f64 * y).sum();
    let sum_xx: f64 = (0..prices.len()).map(|i| (i as f64).powi(2)).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return 0.0;
    }
    (n * sum_xy - sum_x * sum_y) / denominator
}

pub fn trend(prices: &[f64]) -> Trend {
    let s = slope(prices);
    if s > 0.0 {
        Trend::Up
    } else if s < 0.0 {
        Trend::Down
    } else {
        Trend::Neutral
    }
}

fn is_extreme(prices: &[f64], i: usize, window: usize, cmp: impl Fn(f64, f64) -> bool) -> bool {
    prices[i - window..=i + window].iter().all(|&p| cmp(prices[i], p))
}

/// Prices that are the minimum of the `window` values on each side.
pub fn swing_lows(prices: &[f64], window: usize) -> Vec<f64> {
    if prices.len() <= 2 * window {
        return Vec::new();
    }
    (window..prices.len() - window)
        .filter(|&i| is_extreme(prices, i, window, |a, b| a <= b))
        .map(|i| prices[i])
        .collect()
}

/// Prices that are the maximum of the `window` values on each side.
pub fn swing_highs(prices: &[f64], window: usize) -> Vec<f64> {
    if prices.len() <= 2 * window {
        return Vec::new();
    }
    (window..prices.len() - window)
        .filter(|&i| is_extreme(prices, i, window, |a, b| a >= b))
        .map(|i| prices[i])
        .collect()
}

pub fn fibonacci_levels(high: f64, low: f64) -> Vec<FibonacciLevel> {
    let diff = high - low;
    FIBONACCI_RATIOS
        .iter()
        .map(|&ratio| FibonacciLevel { ratio, price: low + ratio * diff })
        .collect()
}

pub fn patterns(candles: &[Candle]) -> Vec<Pattern> {
    let mut found = Vec::new();

    if candles.len() > RECENT_WINDOW {
        let last = &candles[candles.len() - RECENT_WINDOW..];
        let (first_half, second_half) = last.split_at(RECENT_WINDOW / 2);

        let highs_first = max_of(first_half.iter().map(|c| c.high));
        let highs_second = max_of(second_half.iter().map(|c| c.high));
        let highest = highs_first.max(highs_second);
        if (highs_first - highs_second).abs() < 0.01 * highest {
            found.push(Pattern::DoubleTop);
        }

        let lows_first = min_of(first_half.iter().map(|c| c.low));
        let lows_second = min_of(second_half.iter().map(|c| c.low));
        let lowest = lows_first.min(lows_second);
        if (lows_second - lows_first).abs() < 0.01 * lowest {
            found.push(Pattern::DoubleBottom);
        }
    }

    if candles.len() > 10 {
        let closes: Vec<f64> = candles[candles.len() - 10..].iter().map(|c| c.close).collect();
        match trend(&closes) {
            Trend::Up => found.push(Pattern::BullFlag),
            Trend::Down => found.push(Pattern::BearFlag),
            Trend::Neutral => {}
        }
    }

    found
}

fn recent(values: &[f64], n: usize) -> impl Iterator<Item = f64> + '_ {
    values[values.len().saturating_sub(n)..].iter().copied()
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::MIN, f64::max)
}

fn min_of(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::MAX, f64::min)
}

fn sorted_unique(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    values.dedup();
    values
}

use super::format::{absolute_time, price_list, relative_time};
use crate::analysis::TechnicalIndicators;
use crate::models::gmgn::KlineData;
use crate::models::market::Candle;
use chrono::{DateTime, Utc};

const KEY_LEVELS: usize = 3;

fn rsi_label(rsi: f64) -> &'static str {
    if rsi > 70.0 {
        "Overbought"
    } else if rsi < 30.0 {
        "Oversold"
    } else {
        "Neutral"
    }
}

fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// Price chart section for one kline series.
pub fn kline_analysis(kline: Option<&KlineData>, resolution: &str, now: DateTime<Utc>) -> String {
    let heading = format!("### Price Chart Analysis ({})", resolution);
    let kline = match kline {
        Some(kline) => kline,
        None => return format!("{}\nNo price data available.", heading),
    };
    if kline.list.is_empty() {
        return format!("{}\nNo candlestick data available.", heading);
    }

    let candles = kline.candles();
    let (first, last, indicators) = match (candles.first(), candles.last(), TechnicalIndicators::from_candles(&candles)) {
        (Some(first), Some(last), Some(indicators)) => (first, last, indicators),
        _ => return format!("{}\nNo valid candle data available.", heading),
    };

    let highest = candles.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let lowest = candles.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    let total_volume: f64 = candles.iter().map(|c| c.volume).sum();
    let total = candles.len();
    let up = candles.iter().filter(|c| c.is_bullish()).count();
    let down = candles.iter().filter(|c| c.is_bearish()).count();

    let patterns = if indicators.patterns.is_empty() {
        "No clear patterns".to_string()
    } else {
        indicators
            .patterns
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let fibonacci = indicators
        .fibonacci_levels
        .iter()
        .map(|level| format!("- **{:.1}%**: ${:.6}", level.ratio * 100.0, level.price))
        .collect::<Vec<_>>()
        .join("\n");

    let mut section = format!(
        "{}\n\
        #### Key Metrics\n\
        - **Current Price**: ${:.6} ({})\n\
        - **Period Open**: ${:.6} ({})\n\
        - **Price Change**: {:+.2}%\n\
        - **Highest Price**: ${:.6}\n\
        - **Lowest Price**: ${:.6}\n\
        - **Total Volume**: ${:.2}\n\
        \n\
        #### Technical Analysis\n\
        - **Trend Direction**: {}\n\
        - **RSI (14)**: {:.2} ({})\n\
        - **Identified Patterns**: {}\n\
        \n\
        #### Support & Resistance\n\
        - **Key Support Levels**: {}\n\
        - **Key Resistance Levels**: {}\n\
        \n\
        #### Fibonacci Retracement Levels\n\
        {}\n\
        \n\
        #### Market Analysis\n\
        - **Time Period**: {} to {}\n\
        - **Number of Candles**: {}\n\
        - **Upward Movements**: {} ({:.1}%)\n\
        - **Downward Movements**: {} ({:.1}%)\n\
        \n\
        #### Price Volatility\n\
        - **Price Range**: ${:.6}\n\
        - **High-Low Spread**: {:.2}%\n\
        - **Average Volume**: ${:.2}\n\
        \n\
        #### OHLC Data\n\
        Time | Open | High | Low | Close | Volume | Type\n\
        -----|------|------|-----|-------|--------|-----\n",
        heading,
        last.close,
        relative_time(Some(last.time), now),
        first.open,
        relative_time(Some(first.time), now),
        percent_of(last.close - first.open, first.open),
        highest,
        lowest,
        total_volume,
        indicators.trend,
        indicators.rsi,
        rsi_label(indicators.rsi),
        patterns,
        price_list(&indicators.support_levels, KEY_LEVELS),
        price_list(&indicators.resistance_levels, KEY_LEVELS),
        fibonacci,
        absolute_time(Some(first.time)),
        absolute_time(Some(last.time)),
        total,
        up,
        percent_of(up as f64, total as f64),
        down,
        percent_of(down as f64, total as f64),
        highest - lowest,
        percent_of(highest - lowest, lowest),
        total_volume / total as f64,
    );

    for candle in &candles {
        section.push_str(&ohlc_row(candle));
    }
    section
}

fn ohlc_row(candle: &Candle) -> String {
    let kind = if candle.close >= candle.open { "🟢" } else { "🔴" };
    format!(
        "{} | ${:.6} | ${:.6} | ${:.6} | ${:.6} | {:.2} | {}\n",
        absolute_time(Some(candle.time)),
        candle.open,
        candle.high,
        candle.low,
        candle.close,
        candle.volume,
        kind,
    )
}

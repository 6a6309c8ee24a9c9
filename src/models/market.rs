use serde::{Deserialize, Serialize};
use super::gmgn::{KlineData, RawCandle};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Unix seconds.
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

fn parse_f64(value: &Option<String>) -> Option<f64> {
    value.as_deref()?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl TryFrom<&RawCandle> for Candle {
    type Error = ();

    fn try_from(raw: &RawCandle) -> Result<Self, ()> {
        // upstream time is in milliseconds
        let millis = parse_f64(&raw.time).ok_or(())?;
        Ok(Candle {
            time: (millis / 1000.0) as i64,
            open: parse_f64(&raw.open).ok_or(())?,
            high: parse_f64(&raw.high).ok_or(())?,
            low: parse_f64(&raw.low).ok_or(())?,
            close: parse_f64(&raw.close).ok_or(())?,
            volume: parse_f64(&raw.volume).ok_or(())?,
        })
    }
}

impl KlineData {
    /// Parsed candles in upstream order; entries with a missing or
    /// non-numeric field are skipped.
    pub fn candles(&self) -> Vec<Candle> {
        self.list.iter().filter_map(|raw| Candle::try_from(raw).ok()).collect()
    }
}

pub mod de;
pub mod dexscreener;
pub mod gmgn;
pub mod market;

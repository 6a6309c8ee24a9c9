pub mod dexscreener;
pub mod gmgn;
pub mod transport;

pub use dexscreener::{DexScreenerClient, DexScreenerData, DexScreenerMethod, DexScreenerQuery};
pub use gmgn::{FetchOptions, GmgnClient, TrendingQuery};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, Route};

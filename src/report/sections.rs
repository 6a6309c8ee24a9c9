use super::format::{absolute_time, or_na, or_zero, relative_time, short_address, yes_no};
use crate::models::gmgn::{
    RugHistory, TagWalletCount, TokenDevInfo, TokenInfo, TokenLaunchpadInfo, TokenLink,
    TokenPoolInfo, TokenSecurityInfo, TokenStats, TopBuyers, TradeHistory,
};
use chrono::{DateTime, Utc};

const MAX_RECENT_TRADES: usize = 10;

fn placeholder(heading: &str, message: &str) -> String {
    format!("### {}\n{}", heading, message)
}

pub fn token_info(info: Option<&TokenInfo>) -> String {
    let info = match info {
        Some(info) => info,
        None => return placeholder("Basic Token Information", "No token information available."),
    };
    format!(
        "### Basic Token Information\n\
        - **Symbol**: {}\n\
        - **Name**: {}\n\
        - **Address**: {}\n\
        - **Decimals**: {}\n\
        - **Logo**: {}\n\
        - **Biggest Pool**: {}\n\
        - **Open Timestamp**: {}\n\
        - **Creation Timestamp**: {}\n\
        - **Holder Count**: {}\n\
        - **Circulating Supply**: {}\n\
        - **Total Supply**: {}\n\
        - **Max Supply**: {}\n\
        - **Liquidity**: {} SOL",
        or_na(&info.symbol),
        or_na(&info.name),
        or_na(&info.address),
        or_na(&info.decimals),
        or_na(&info.logo),
        or_na(&info.biggest_pool_address),
        absolute_time(info.open_timestamp),
        absolute_time(info.creation_timestamp),
        or_na(&info.holder_count),
        or_na(&info.circulating_supply),
        or_na(&info.total_supply),
        or_na(&info.max_supply),
        or_na(&info.liquidity),
    )
}

pub fn pool_info(pool: Option<&TokenPoolInfo>) -> String {
    let pool = match pool {
        Some(pool) => pool,
        None => return placeholder("Pool Information", "No pool data available."),
    };
    format!(
        "### Pool Information\n\
        - **Pool Address**: {}\n\
        - **Quote Token**: {} ({})\n\
        - **Current Liquidity**: {} SOL\n\
        - **Initial Liquidity**: {} SOL\n\
        - **Base Reserve**: {}\n\
        - **Quote Reserve**: {}\n\
        - **Initial Base Reserve**: {}\n\
        - **Initial Quote Reserve**: {}\n\
        - **Creation Time**: {}\n\
        - **Base Reserve Value**: {}\n\
        - **Quote Reserve Value**: {}\n\
        - **Quote Vault**: {}\n\
        - **Base Vault**: {}\n\
        - **Creator**: {}",
        or_na(&pool.pool_address),
        or_na(&pool.quote_symbol),
        or_na(&pool.quote_address),
        or_na(&pool.liquidity),
        or_na(&pool.initial_liquidity),
        or_na(&pool.base_reserve),
        or_na(&pool.quote_reserve),
        or_na(&pool.initial_base_reserve),
        or_na(&pool.initial_quote_reserve),
        absolute_time(pool.creation_timestamp),
        or_na(&pool.base_reserve_value),
        or_na(&pool.quote_reserve_value),
        or_na(&pool.quote_vault_address),
        or_na(&pool.base_vault_address),
        or_na(&pool.creator),
    )
}

pub fn security_info(security: Option<&TokenSecurityInfo>) -> String {
    let security = match security {
        Some(security) => security,
        None => return placeholder("Security Information", "No security data available."),
    };
    let alert = if security.is_show_alert == Some(true) {
        "⚠️ Warning"
    } else {
        "✅ Safe"
    };
    format!(
        "### Security Information\n\
        - **Alert Status**: {}\n\
        - **Top 10 Holder Rate**: {}\n\
        - **Mint Authority Renounced**: {}\n\
        - **Freeze Authority Renounced**: {}\n\
        - **Burn Ratio**: {}\n\
        - **Burn Status**: {}\n\
        - **Dev Token Burn Amount**: {}\n\
        - **Dev Token Burn Ratio**: {}",
        alert,
        or_na(&security.top_10_holder_rate),
        yes_no(security.renounced_mint),
        yes_no(security.renounced_freeze_account),
        or_na(&security.burn_ratio),
        or_na(&security.burn_status),
        or_na(&security.dev_token_burn_amount),
        or_na(&security.dev_token_burn_ratio),
    )
}

pub fn dev_info(dev: Option<&TokenDevInfo>) -> String {
    let dev = match dev {
        Some(dev) => dev,
        None => return placeholder("Developer Information", "No developer data available."),
    };
    let twitter_history = if dev.twitter_name_change_history.is_empty() {
        "No changes".to_string()
    } else {
        dev.twitter_name_change_history.join("\n  ")
    };
    format!(
        "### Developer Information\n\
        - **Creator Address**: {}\n\
        - **Creator Balance**: {}\n\
        - **Creator Status**: {}\n\
        - **Top 10 Holder Rate**: {}\n\
        - **DexScr Ad**: {}\n\
        - **DexScr Update Link**: {}\n\
        - **CTO Flag**: {}\n\
        - **Twitter Name History**:\n  {}",
        or_na(&dev.creator_address),
        or_na(&dev.creator_token_balance),
        or_na(&dev.creator_token_status),
        or_na(&dev.top_10_holder_rate),
        or_zero(&dev.dexscr_ad),
        or_zero(&dev.dexscr_update_link),
        or_zero(&dev.cto_flag),
        twitter_history,
    )
}

pub fn stats(stats: Option<&TokenStats>) -> String {
    let stats = match stats {
        Some(stats) => stats,
        None => return placeholder("Trading Statistics", "No trading statistics available."),
    };
    format!(
        "### Trading Statistics\n\
        - **Signal Count**: {}\n\
        - **Degen Call Count**: {}\n\
        - **Top Rat Trader Count**: {}\n\
        - **Smart Degen Count**: {}\n\
        - **Fresh Wallet Count**: {}\n\
        - **Rat Trader Amount %**: {}%\n\
        - **Smart Degen Trader Count**: {}\n\
        - **Fresh Wallet Trader Count**: {}\n\
        - **Bluechip Owner Count**: {}\n\
        - **Bluechip Owner %**: {}%",
        or_zero(&stats.signal_count),
        or_zero(&stats.degen_call_count),
        or_zero(&stats.top_rat_trader_count),
        or_zero(&stats.top_smart_degen_count),
        or_zero(&stats.top_fresh_wallet_count),
        or_zero(&stats.top_rat_trader_amount_percentage),
        or_zero(&stats.top_trader_smart_degen_count),
        or_zero(&stats.top_trader_fresh_wallet_count),
        or_zero(&stats.bluechip_owner_count),
        or_zero(&stats.bluechip_owner_percentage),
    )
}

pub fn wallet_analysis(wallets: Option<&TagWalletCount>) -> String {
    let wallets = match wallets {
        Some(wallets) => wallets,
        None => return placeholder("Wallet Analysis", "No wallet analysis data available."),
    };
    format!(
        "### Wallet Analysis\n\
        - **Smart Wallets**: {}\n\
        - **Fresh Wallets**: {}\n\
        - **Renowned Wallets**: {}\n\
        - **Creator Wallets**: {}\n\
        - **Sniper Wallets**: {}\n\
        - **Rat Trader Wallets**: {}\n\
        - **Following Wallets**: {}\n\
        - **Whale Wallets**: {}\n\
        - **Top Wallets**: {}",
        or_zero(&wallets.smart_wallets),
        or_zero(&wallets.fresh_wallets),
        or_zero(&wallets.renowned_wallets),
        or_zero(&wallets.creator_wallets),
        or_zero(&wallets.sniper_wallets),
        or_zero(&wallets.rat_trader_wallets),
        or_zero(&wallets.following_wallets),
        or_zero(&wallets.whale_wallets),
        or_zero(&wallets.top_wallets),
    )
}

pub fn launchpad_info(launchpad: Option<&TokenLaunchpadInfo>) -> String {
    let launchpad = match launchpad {
        Some(launchpad) => launchpad,
        None => return placeholder("Launchpad Information", "No launchpad data available."),
    };
    format!(
        "### Launchpad Information\n\
        - **Platform**: {}\n\
        - **Status**: {}\n\
        - **Progress**: {:.2}%\n\
        - **Description**: {}",
        or_na(&launchpad.launchpad),
        or_na(&launchpad.launchpad_status),
        launchpad.launchpad_progress.unwrap_or(0.0) * 100.0,
        or_na(&launchpad.description),
    )
}

pub fn links(links: Option<&TokenLink>) -> String {
    let links = match links {
        Some(links) => links,
        None => return placeholder("Token Links", "No link data available."),
    };
    let verified = if links.verify_status == Some(1) {
        "✅ Verified"
    } else {
        "❌ Unverified"
    };
    format!(
        "### Token Links\n\
        - **GMGN**: {}\n\
        - **GeckoTerminal**: {}\n\
        - **Website**: {}\n\
        - **Twitter**: {}\n\
        - **Telegram**: {}\n\
        - **Discord**: {}\n\
        - **GitHub**: {}\n\
        - **Medium**: {}\n\
        - **Reddit**: {}\n\
        - **YouTube**: {}\n\
        - **TikTok**: {}\n\
        - **Instagram**: {}\n\
        - **LinkedIn**: {}\n\
        - **Facebook**: {}\n\
        - **BitBucket**: {}\n\
        - **Description**: {}\n\
        - **Verification Status**: {}",
        or_na(&links.gmgn),
        or_na(&links.geckoterminal),
        or_na(&links.website),
        or_na(&links.twitter_username),
        or_na(&links.telegram),
        or_na(&links.discord),
        or_na(&links.github),
        or_na(&links.medium),
        or_na(&links.reddit),
        or_na(&links.youtube),
        or_na(&links.tiktok),
        or_na(&links.instagram),
        or_na(&links.linkedin),
        or_na(&links.facebook),
        or_na(&links.bitbucket),
        or_na(&links.description),
        verified,
    )
}

pub fn recent_trades(trades: Option<&[TradeHistory]>, now: DateTime<Utc>) -> String {
    let trades = match trades {
        Some(trades) if !trades.is_empty() => trades,
        _ => return placeholder("Recent Trades", "No recent trades found."),
    };

    let mut section = String::from("### Recent Trades");
    for trade in trades.iter().take(MAX_RECENT_TRADES) {
        let tags: Vec<&str> = trade
            .maker_tags
            .iter()
            .chain(trade.maker_token_tags.iter())
            .map(String::as_str)
            .filter(|t| !t.is_empty())
            .collect();
        let tags = if tags.is_empty() {
            "No tags".to_string()
        } else {
            tags.join(", ")
        };

        section.push_str(&format!(
            "\n- **{}** by `{}...`\n  \
            - Time: {}\n  \
            - Amount: ${:.2} ({:.2} tokens for {:.6} {})\n  \
            - Price: ${:.6} per token\n  \
            - Tags: {}",
            trade.event.as_deref().unwrap_or("unknown").to_uppercase(),
            short_address(trade.maker.as_deref().unwrap_or(""), 8),
            relative_time(trade.timestamp, now),
            trade.amount_usd.unwrap_or(0.0),
            trade.base_amount.unwrap_or(0.0),
            trade.quote_amount.unwrap_or(0.0),
            trade.quote_symbol.as_deref().unwrap_or("SOL"),
            trade.price_usd.unwrap_or(0.0),
            tags,
        ));
    }
    section
}

pub fn rug_analysis(rug: Option<&RugHistory>) -> String {
    let rug = match rug {
        Some(rug) => rug,
        None => return placeholder("Risk Assessment", "No rug analysis data available."),
    };
    let ratio = match &rug.rug_ratio {
        Some(ratio) => ratio,
        None => return placeholder("Risk Assessment", "✅ No signs of rug pull detected."),
    };
    format!(
        "### Risk Assessment\n\
        - **Rug Pull Ratio**: {}\n\
        - **Affected Holders**: {}/{}\n\
        - **Token Name**: {}\n\
        - **Symbol**: {}",
        ratio,
        or_na(&rug.holder_rugged_num),
        or_na(&rug.holder_token_num),
        or_na(&rug.name),
        or_na(&rug.symbol),
    )
}

pub fn top_buyers(buyers: Option<&TopBuyers>) -> String {
    let holders = match buyers.and_then(|b| b.holders.as_ref()) {
        Some(holders) => holders,
        None => return placeholder("Top Buyers Analysis", "No top buyers data available."),
    };
    let status = holders.status_now.clone().unwrap_or_default();
    format!(
        "### Top Buyers Analysis\n\
        - **Total Holders**: {}\n\
        - **Current Status**:\n  \
        - Still Holding: {}\n  \
        - Bought More: {}\n  \
        - Partially Sold: {}\n  \
        - Fully Sold: {}\n  \
        - Buy Rate: {}\n  \
        - Holding Rate: {}\n  \
        - Top 10 Holder Rate: {}",
        or_zero(&holders.holder_count),
        or_zero(&status.hold),
        or_zero(&status.bought_more),
        or_zero(&status.sold_part),
        or_zero(&status.sold),
        or_na(&status.bought_rate),
        or_na(&status.holding_rate),
        or_na(&status.top_10_holder_rate),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::models::gmgn::{HolderStatus, TopBuyerHolders};

    #[test]
    fn test_placeholders() {
        assert!(token_info(None).ends_with("No token information available."));
        assert!(top_buyers(Some(&TopBuyers::default())).contains("No top buyers data available."));
        assert!(recent_trades(Some(&[]), Utc::now()).contains("No recent trades found."));
    }

    #[test]
    fn test_security_flags() {
        let security = TokenSecurityInfo {
            is_show_alert: Some(true),
            renounced_mint: Some(true),
            renounced_freeze_account: Some(false),
            ..Default::default()
        };
        let md = security_info(Some(&security));
        assert!(md.contains("- **Alert Status**: ⚠️ Warning"));
        assert!(md.contains("- **Mint Authority Renounced**: ✅ Yes"));
        assert!(md.contains("- **Freeze Authority Renounced**: ❌ No"));
        assert!(md.contains("- **Burn Ratio**: N/A"));
    }

    #[test]
    fn test_recent_trades_caps_at_ten() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let trade = TradeHistory {
            maker: Some("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU".to_string()),
            event: Some("buy".to_string()),
            timestamp: Some(1_700_000_000 - 7200),
            amount_usd: Some(12.5),
            base_amount: Some(1000.0),
            quote_amount: Some(0.08),
            price_usd: Some(0.0125),
            maker_tags: vec!["smart_degen".to_string()],
            maker_token_tags: vec!["".to_string(), "sniper".to_string()],
            ..Default::default()
        };
        let trades = vec![trade; 15];
        let md = recent_trades(Some(&trades), now);

        assert_eq!(md.matches("- **BUY** by `7xKXtg2C...`").count(), 10);
        assert!(md.contains("  - Time: 2 hours ago"));
        assert!(md.contains("  - Amount: $12.50 (1000.00 tokens for 0.080000 SOL)"));
        assert!(md.contains("  - Tags: smart_degen, sniper"));
    }

    #[test]
    fn test_rug_analysis_without_ratio() {
        let md = rug_analysis(Some(&RugHistory::default()));
        assert!(md.contains("No signs of rug pull detected"));

        let rug = RugHistory {
            rug_ratio: Some("0.25".to_string()),
            holder_rugged_num: Some(5),
            holder_token_num: Some(20),
            ..Default::default()
        };
        assert!(rug_analysis(Some(&rug)).contains("- **Affected Holders**: 5/20"));
    }

    #[test]
    fn test_top_buyers_status() {
        let buyers = TopBuyers {
            holders: Some(TopBuyerHolders {
                holder_count: Some(70),
                status_now: Some(HolderStatus {
                    hold: Some(40),
                    sold: Some(12),
                    holding_rate: Some("0.57".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
        };
        let md = top_buyers(Some(&buyers));
        assert!(md.contains("- **Total Holders**: 70"));
        assert!(md.contains("  - Still Holding: 40"));
        assert!(md.contains("  - Bought More: 0"));
        assert!(md.contains("  - Holding Rate: 0.57"));
        assert!(md.contains("  - Buy Rate: N/A"));
    }

    #[test]
    fn test_launchpad_progress_percent() {
        let launchpad = TokenLaunchpadInfo {
            launchpad: Some("pump.fun".to_string()),
            launchpad_progress: Some(0.4567),
            ..Default::default()
        };
        assert!(launchpad_info(Some(&launchpad)).contains("- **Progress**: 45.67%"));
    }
}

//! Sample catalogue of dashboard blocks.
//!
//! The dashboard has no live feed; every block is built from fixed sample
//! quotes. Card ids are stable lowercase keys used by the CLI and by alert
//! rules.

use serde::{Deserialize, Serialize};
use series_core::Category;

use crate::error::{DashboardError, Result};
use crate::metric::{BlockIndicator, DashboardBlock, MetricCard, RiskCounts};
use crate::risk::ChangeDirection::{self, Decrease, Increase};
use crate::risk::RiskLevel::{self, High, Low, Medium};

/// Block id of the headline metrics.
pub const KEY_METRICS: &str = "key_metrics";

/// Ordered collection of dashboard blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
    blocks: Vec<DashboardBlock>,
}

impl Catalogue {
    /// Build a catalogue from blocks.
    pub fn new(blocks: Vec<DashboardBlock>) -> Self {
        Self { blocks }
    }

    /// The sample dashboard.
    pub fn sample() -> Self {
        Self::new(vec![
            key_metrics(),
            raw_materials(),
            shipping(),
            exchange(),
            interest(),
            economy(),
            tariffs(),
            us_sectors(),
            us_stocks(),
        ])
    }

    /// Blocks in display order.
    pub fn blocks(&self) -> &[DashboardBlock] {
        &self.blocks
    }

    /// Every card across all blocks, in display order.
    pub fn cards(&self) -> impl Iterator<Item = &MetricCard> {
        self.blocks.iter().flat_map(|b| b.cards.iter())
    }

    /// Block by id.
    pub fn block(&self, id: &str) -> Result<&DashboardBlock> {
        self.blocks
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| DashboardError::unknown_block(id))
    }

    /// Card by id, searching every block.
    pub fn card(&self, id: &str) -> Result<&MetricCard> {
        self.cards()
            .find(|c| c.id == id)
            .ok_or_else(|| DashboardError::unknown_metric(id))
    }

    /// Cards at `level`, in display order.
    pub fn filter_by_risk(&self, level: RiskLevel) -> Vec<&MetricCard> {
        self.cards().filter(|c| c.risk_level == level).collect()
    }

    /// Tally across the whole catalogue.
    pub fn risk_counts(&self) -> RiskCounts {
        RiskCounts::from_cards(self.cards())
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::sample()
    }
}

fn key_metrics() -> DashboardBlock {
    let card = |id: &str,
                title: &str,
                value: f64,
                change: f64,
                level: RiskLevel,
                category: Category,
                description: &str| {
        MetricCard::new(id, title, value, category, level)
            .with_change(change)
            .with_description(description)
    };

    DashboardBlock::new(
        KEY_METRICS,
        "Key risk indicators",
        "Headline exposure measures",
        "Internal composite",
    )
    .with_card(card(
        "risk_index",
        "Composite risk index",
        72.4,
        2.8,
        Medium,
        Category::Economy,
        "Weighted blend of all monitored risks",
    ))
    .with_card(card(
        "export_competitiveness",
        "Export competitiveness",
        85.2,
        -1.5,
        Low,
        Category::Tariff,
        "Price competitiveness in the US market",
    ))
    .with_card(
        card(
            "supply_chain",
            "Supply-chain stability",
            78.9,
            0.3,
            Medium,
            Category::Shipping,
            "Raw material and logistics stability",
        )
        .with_direction(ChangeDirection::Neutral),
    )
    .with_card(card(
        "fx_exposure",
        "FX exposure",
        65.1,
        4.2,
        High,
        Category::Exchange,
        "Sensitivity to won/dollar moves",
    ))
}

/// Card with absolute and relative change, the shape shared by the market blocks.
#[allow(clippy::too_many_arguments)]
fn quote(
    id: &str,
    title: &str,
    value: f64,
    unit: &str,
    change: f64,
    change_percent: f64,
    level: RiskLevel,
    category: Category,
) -> MetricCard {
    MetricCard::new(id, title, value, category, level)
        .with_unit(unit)
        .with_change(change)
        .with_change_percent(change_percent)
}

fn raw_materials() -> DashboardBlock {
    let c = Category::Commodity;
    DashboardBlock::new(
        "raw_materials",
        "Raw materials",
        "Energy and base metal prices",
        "Bloomberg, Reuters, LME",
    )
    .with_card(quote("wti", "WTI crude", 78.45, "$/bbl", 2.34, 3.08, Medium, c))
    .with_card(quote("brent", "Brent crude", 82.15, "$/bbl", 1.89, 2.35, Medium, c))
    .with_card(quote("copper", "Copper", 4.23, "$/lb", 0.15, 3.68, High, c))
    .with_card(quote("aluminium", "Aluminium", 2678.85, "$/t", -45.20, -1.65, Low, c))
    .with_card(quote("natural_gas", "Natural gas", 2.89, "$/MMBtu", 0.12, 4.33, Medium, c))
    .with_card(quote("nickel", "Nickel", 18450.0, "$/t", 320.0, 1.77, Medium, c))
}

fn shipping() -> DashboardBlock {
    let route = |id: &str,
                 title: &str,
                 index: f64,
                 change: f64,
                 percent: f64,
                 level: RiskLevel,
                 mode: &str,
                 transit: &str| {
        quote(id, title, index, "$/FEU", change, percent, level, Category::Shipping)
            .with_attribute("mode", mode)
            .with_attribute("transit", transit)
    };

    DashboardBlock::new(
        "shipping",
        "Container freight",
        "Spot rates per 40ft container",
        "Drewry, Freightos",
    )
    .with_card(route(
        "shanghai_la",
        "Shanghai → Los Angeles",
        1398.0,
        -46.0,
        -3.21,
        Low,
        "sea",
        "14-16 days",
    ))
    .with_card(route(
        "shanghai_ny",
        "Shanghai → New York",
        2156.0,
        89.0,
        4.31,
        Medium,
        "sea",
        "22-25 days",
    ))
    .with_card(route(
        "busan_la",
        "Busan → Los Angeles",
        1245.0,
        -23.0,
        -1.81,
        Low,
        "sea",
        "12-14 days",
    ))
    .with_card(route(
        "incheon_chicago",
        "Incheon → Chicago",
        4580.0,
        156.0,
        3.53,
        High,
        "air",
        "1-2 days",
    ))
    .with_indicator(BlockIndicator::new("Average freight cost", "+2.4%", "Month on month"))
    .with_indicator(BlockIndicator::new("Port congestion", "Moderate", "LA / Long Beach"))
    .with_indicator(BlockIndicator::new("Fuel surcharge", "+15.2%", "Year on year"))
}

fn exchange() -> DashboardBlock {
    let pair = |id: &str,
                title: &str,
                rate: f64,
                change: f64,
                percent: f64,
                volatility: f64,
                level: RiskLevel| {
        quote(id, title, rate, "KRW", change, percent, level, Category::Exchange)
            .with_attribute("volatility", format!("{}%", volatility))
    };

    DashboardBlock::new(
        "exchange",
        "Exchange rates",
        "Won crosses against major currencies",
        "Bank of Korea, Seoul FX market",
    )
    .with_card(pair("usd_krw", "USD/KRW", 1390.70, 3.10, 0.22, 1.8, Medium))
    .with_card(pair("eur_krw", "EUR/KRW", 1631.43, 7.38, 0.45, 2.1, Medium))
    .with_card(pair("cny_krw", "CNY/KRW", 195.29, 0.51, 0.26, 1.2, Low))
    .with_card(pair("jpy_krw", "JPY/KRW (100)", 940.87, 0.83, 0.09, 0.9, Low))
    .with_indicator(
        BlockIndicator::new("FX hedging cost", "0.85%", "Annualised").with_trend(Increase),
    )
    .with_indicator(
        BlockIndicator::new("Real effective exchange rate", "102.4", "Versus base year")
            .with_trend(Increase),
    )
    .with_indicator(
        BlockIndicator::new("FX volatility", "1.6%", "30-day average").with_trend(Decrease),
    )
}

fn interest() -> DashboardBlock {
    let rate = |id: &str,
                title: &str,
                value: f64,
                unit: &str,
                change: f64,
                percent: f64,
                level: RiskLevel,
                country: &str| {
        quote(id, title, value, unit, change, percent, level, Category::Interest)
            .with_attribute("country", country)
    };

    DashboardBlock::new(
        "interest",
        "Interest rates",
        "Policy and market rates",
        "Federal Reserve, Bank of Korea",
    )
    .with_card(rate("fed_funds", "Fed funds rate", 4.50, "%", -0.25, -5.26, Medium, "US"))
    .with_card(rate("us_10y", "US 10Y Treasury", 4.25, "%", 0.15, 3.66, Medium, "US"))
    .with_card(rate("korea_base", "Korea base rate", 3.25, "%", 0.0, 0.0, Low, "Korea"))
    .with_card(rate(
        "corporate_spread",
        "Corporate bond spread",
        1.85,
        "%p",
        0.12,
        6.95,
        High,
        "US",
    ))
    .with_indicator(
        BlockIndicator::new("Expected inflation", "2.4%", "5Y breakeven").with_trend(Increase),
    )
    .with_indicator(
        BlockIndicator::new("Real interest rate", "1.85%", "Inflation adjusted")
            .with_trend(Increase),
    )
    .with_indicator(BlockIndicator::new("Financial conditions", "Moderate", "Fed index"))
}

fn economy() -> DashboardBlock {
    let c = Category::Economy;
    DashboardBlock::new(
        "economy",
        "US economy",
        "Demand-side indicators for US exports",
        "US Census Bureau, Conference Board, BLS",
    )
    .with_card(quote("retail_sales", "Retail sales", 578.2, "bn USD", 2.4, 0.42, Low, c))
    .with_card(quote(
        "consumer_confidence",
        "Consumer confidence",
        102.8,
        "",
        -3.2,
        -3.02,
        Medium,
        c,
    ))
    .with_card(quote("unemployment", "Unemployment rate", 3.8, "%", 0.1, 2.70, Low, c))
    .with_card(quote("housing_starts", "Housing starts", 1.42, "mn", -0.08, -5.33, High, c))
    .with_indicator(
        BlockIndicator::new("Personal income growth", "+3.2%", "Year on year")
            .with_trend(Increase),
    )
    .with_indicator(
        BlockIndicator::new("Household spending", "+2.8%", "Month on month").with_trend(Increase),
    )
    .with_indicator(
        BlockIndicator::new("Manufacturing PMI", "48.2", "Contraction zone").with_trend(Decrease),
    )
}

fn tariffs() -> DashboardBlock {
    let tariff = |id: &str,
                  country: &str,
                  rate: f64,
                  previous: f64,
                  level: RiskLevel,
                  effective: &str,
                  products: &[&str]| {
        MetricCard::new(id, country, rate, Category::Tariff, level)
            .with_unit("%")
            .with_change(rate - previous)
            .with_description(format!("Previously {}%, effective {}", previous, effective))
            .with_attribute("products", products.join(", "))
    };

    DashboardBlock::new(
        "tariffs",
        "US tariffs",
        "Headline US import tariff by origin",
        "USTR",
    )
    .with_card(tariff(
        "tariff_korea",
        "Korea",
        15.0,
        25.0,
        Medium,
        "2025-02-07",
        &["Automobiles", "Electronics", "Steel"],
    ))
    .with_card(tariff(
        "tariff_china",
        "China",
        60.0,
        25.0,
        High,
        "2025-01-20",
        &["Electronics", "Machinery", "Chemicals"],
    ))
    .with_card(tariff(
        "tariff_japan",
        "Japan",
        20.0,
        15.0,
        Medium,
        "2025-02-01",
        &["Automobiles", "Machinery", "Precision instruments"],
    ))
    .with_card(tariff(
        "tariff_germany",
        "Germany",
        25.0,
        10.0,
        High,
        "2025-01-25",
        &["Automobiles", "Machinery", "Chemicals"],
    ))
    .with_indicator(
        BlockIndicator::new("Tariffed product lines", "2,847", "HS code basis")
            .with_trend(Increase),
    )
    .with_indicator(
        BlockIndicator::new("Average tariff rate", "28.5%", "Trade weighted").with_trend(Increase),
    )
    .with_indicator(BlockIndicator::new("Open trade disputes", "12", "In progress"))
}

fn us_sectors() -> DashboardBlock {
    let c = Category::Economy;
    DashboardBlock::new(
        "us_sectors",
        "US sector ETFs",
        "SPDR sector funds",
        "NYSE Arca",
    )
    .with_card(quote("xlk", "XLK Technology", 218.45, "$", 2.34, 1.08, Medium, c))
    .with_card(quote("xlf", "XLF Financials", 43.21, "$", -0.89, -2.02, High, c))
    .with_card(quote("xlv", "XLV Health care", 156.78, "$", 1.23, 0.79, Low, c))
    .with_card(quote("xle", "XLE Energy", 89.34, "$", 3.45, 4.02, Medium, c))
    .with_card(quote(
        "xly",
        "XLY Consumer discretionary",
        167.89,
        "$",
        -1.56,
        -0.92,
        Medium,
        c,
    ))
    .with_card(quote("xli", "XLI Industrials", 134.56, "$", 0.78, 0.58, Low, c))
    .with_card(quote("xlre", "XLRE Real estate", 45.67, "$", -0.34, -0.74, High, c))
    .with_card(quote("xlc", "XLC Communication", 78.23, "$", 1.89, 2.48, Low, c))
}

fn us_stocks() -> DashboardBlock {
    let stock = |id: &str,
                 title: &str,
                 price: f64,
                 change: f64,
                 percent: f64,
                 level: RiskLevel,
                 sector: &str,
                 market_cap: &str| {
        quote(id, title, price, "$", change, percent, level, Category::Economy)
            .with_attribute("sector", sector)
            .with_attribute("market_cap", market_cap)
    };

    DashboardBlock::new(
        "us_stocks",
        "US top stocks",
        "Largest US listed companies",
        "NASDAQ, NYSE",
    )
    .with_card(stock("aapl", "Apple", 227.52, 3.45, 1.54, Low, "Technology", "3.45T"))
    .with_card(stock("msft", "Microsoft", 415.26, -2.18, -0.52, Low, "Technology", "3.08T"))
    .with_card(stock("nvda", "NVIDIA", 118.11, 5.67, 5.04, Medium, "Technology", "2.91T"))
    .with_card(stock("googl", "Alphabet", 165.87, 1.23, 0.75, Low, "Technology", "2.04T"))
    .with_card(stock(
        "amzn",
        "Amazon",
        186.43,
        -1.89,
        -1.00,
        Medium,
        "Consumer discretionary",
        "1.95T",
    ))
    .with_card(stock(
        "meta",
        "Meta Platforms",
        563.27,
        8.45,
        1.52,
        Medium,
        "Communication",
        "1.43T",
    ))
    .with_card(stock("tsla", "Tesla", 248.98, -12.34, -4.73, High, "Automotive", "795B"))
    .with_card(stock(
        "brk_a",
        "Berkshire Hathaway A",
        627500.0,
        2500.0,
        0.40,
        Low,
        "Financials",
        "926B",
    ))
    .with_card(stock("lly", "Eli Lilly", 789.45, 15.67, 2.02, Low, "Health care", "751B"))
    .with_card(stock(
        "jpm",
        "JPMorgan Chase",
        234.56,
        -3.21,
        -1.35,
        Medium,
        "Financials",
        "687B",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_block_order() {
        let ids: Vec<_> = Catalogue::sample().blocks().iter().map(|b| b.id.clone()).collect();
        assert_eq!(
            ids,
            [
                "key_metrics",
                "raw_materials",
                "shipping",
                "exchange",
                "interest",
                "economy",
                "tariffs",
                "us_sectors",
                "us_stocks"
            ]
        );
    }

    #[test]
    fn test_card_ids_unique() {
        let catalogue = Catalogue::sample();
        let mut seen = HashSet::new();
        for card in catalogue.cards() {
            assert!(seen.insert(card.id.as_str()), "duplicate id {}", card.id);
        }
        assert_eq!(seen.len(), 48);
    }

    #[test]
    fn test_lookup_errors() {
        let catalogue = Catalogue::sample();
        assert_eq!(
            catalogue.card("zinc"),
            Err(DashboardError::UnknownMetric("zinc".to_string()))
        );
        assert_eq!(
            catalogue.block("crypto").unwrap_err(),
            DashboardError::UnknownBlock("crypto".to_string())
        );
    }

    #[test]
    fn test_tariff_changes_from_previous_rate() {
        let catalogue = Catalogue::sample();
        let korea = catalogue.card("tariff_korea").unwrap();
        assert_eq!(korea.change, -10.0);
        assert_eq!(korea.direction, ChangeDirection::Decrease);
        assert_eq!(korea.category, Category::Tariff);

        let china = catalogue.card("tariff_china").unwrap();
        assert_eq!(china.change, 35.0);
        assert!(china.requires_attention());
    }

    #[test]
    fn test_raw_material_counts() {
        let block = Catalogue::sample().block("raw_materials").unwrap().clone();
        assert_eq!(block.risk_counts(), RiskCounts { high: 1, medium: 4, low: 1 });
    }

    #[test]
    fn test_filter_by_risk() {
        let catalogue = Catalogue::sample();
        let high = catalogue.filter_by_risk(RiskLevel::High);
        assert!(high.iter().all(|c| c.risk_level == RiskLevel::High));
        assert_eq!(high.len(), catalogue.risk_counts().high);
        assert!(high.iter().any(|c| c.id == "fx_exposure"));
    }

    #[test]
    fn test_unchanged_rate_is_neutral() {
        let catalogue = Catalogue::sample();
        assert_eq!(
            catalogue.card("korea_base").unwrap().direction,
            ChangeDirection::Neutral
        );
        assert_eq!(
            catalogue.card("supply_chain").unwrap().direction,
            ChangeDirection::Neutral
        );
    }

    #[test]
    fn test_indicator_panels() {
        let catalogue = Catalogue::sample();
        let with_panel: Vec<_> = catalogue
            .blocks()
            .iter()
            .filter(|b| !b.indicators.is_empty())
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(with_panel, ["shipping", "exchange", "interest", "economy", "tariffs"]);
        assert!(catalogue
            .blocks()
            .iter()
            .all(|b| b.indicators.is_empty() || b.indicators.len() == 3));

        let fx = catalogue.block("exchange").unwrap();
        assert_eq!(fx.indicators[0].value, "0.85%");
        assert_eq!(fx.indicators[2].trend, Decrease);

        let pmi = &catalogue.block("economy").unwrap().indicators[2];
        assert_eq!((pmi.value.as_str(), pmi.trend), ("48.2", Decrease));
    }

    #[test]
    fn test_card_attributes() {
        let catalogue = Catalogue::sample();
        let attr = |id: &str, key: &str| catalogue.card(id).unwrap().attribute(key);

        assert_eq!(attr("shanghai_ny", "transit"), Some("22-25 days"));
        assert_eq!(attr("incheon_chicago", "mode"), Some("air"));
        assert_eq!(attr("eur_krw", "volatility"), Some("2.1%"));
        assert_eq!(attr("korea_base", "country"), Some("Korea"));
        assert_eq!(
            attr("tariff_korea", "products"),
            Some("Automobiles, Electronics, Steel")
        );
        assert_eq!(attr("tsla", "sector"), Some("Automotive"));
        assert_eq!(attr("jpm", "market_cap"), Some("687B"));
        assert_eq!(attr("wti", "sector"), None);
    }
}

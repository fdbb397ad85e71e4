//! Price block sources.

use super::model::PriceBlock;

/// Source of pricing breakpoints, consulted once at service construction.
///
/// Abstracting the source keeps the door open for a configurable or
/// storage-backed tariff without touching the lookup logic.
pub trait PriceBlockProvider: Send + Sync {
    fn price_blocks(&self) -> Vec<PriceBlock>;
}

/// The Gothenburg congestion-tax tariff, hardcoded.
pub struct StaticPriceBlockProvider;

impl PriceBlockProvider for StaticPriceBlockProvider {
    fn price_blocks(&self) -> Vec<PriceBlock> {
        vec![
            PriceBlock::at(0, 0, 0),
            PriceBlock::at(6, 0, 8),
            PriceBlock::at(6, 30, 13),
            PriceBlock::at(7, 0, 18),
            PriceBlock::at(8, 0, 13),
            PriceBlock::at(8, 30, 8),
            PriceBlock::at(15, 0, 13),
            PriceBlock::at(15, 30, 18),
            PriceBlock::at(17, 0, 13),
            PriceBlock::at(18, 0, 8),
            PriceBlock::at(18, 30, 0),
        ]
    }
}

//! Asset listing models

/// One tradable asset from the market cap listing
#[derive(Debug, Clone)]
pub struct AssetSummary {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image_url: String,
}

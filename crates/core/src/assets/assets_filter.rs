use super::assets_model::Asset;

/// Filters assets by a case-insensitive substring match on name or symbol.
///
/// An empty query returns the full list unchanged; relative order is always
/// preserved and the input is never mutated.
pub fn filter_assets(assets: &[Asset], query: &str) -> Vec<Asset> {
    if query.is_empty() {
        return assets.to_vec();
    }

    let needle = query.to_lowercase();
    assets
        .iter()
        .filter(|asset| {
            asset.name.to_lowercase().contains(&needle)
                || asset.symbol.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

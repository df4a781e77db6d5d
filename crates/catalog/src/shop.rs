use crate::ingredient::{IngredientCategory, IngredientId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stable key for a partner café.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(pub String);

impl ShopId {
    pub fn new(id: impl Into<String>) -> Self {
        ShopId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Great-circle distance in kilometers (haversine).
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos() * other.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

/// Named menu item a shop already sells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub ingredient_ids: Vec<IngredientId>,
    pub price_cents: u32,
}

/// A café's declared stock of ingredients and prep abilities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopCapabilities {
    /// Stocked ingredient ids, keyed by category.
    #[serde(default)]
    pub stocked: BTreeMap<IngredientCategory, Vec<IngredientId>>,
    /// Whether the shop can build layered drinks (foam tops etc.).
    #[serde(default)]
    pub can_layer: bool,
    /// Prep time for a standard order, before per-ingredient increments.
    pub base_prep_minutes: u32,
}

impl ShopCapabilities {
    pub fn stocks(&self, id: &IngredientId) -> bool {
        self.stocked.values().any(|ids| ids.contains(id))
    }

    pub fn stocked_in(&self, category: IngredientCategory) -> &[IngredientId] {
        self.stocked.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Immutable reference record for one partner café.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub location: GeoPoint,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    pub capabilities: ShopCapabilities,
    /// Declared rating, 0.0..=5.0.
    pub rating: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_km_zero_for_same_point() {
        let p = GeoPoint { lat: 52.52, lng: 13.405 };
        assert!(p.distance_km(&p) < 1e-9);
    }

    #[test]
    fn test_distance_km_known_pair() {
        // Berlin Alexanderplatz to Zoologischer Garten, roughly 7.4 km.
        let alex = GeoPoint { lat: 52.5219, lng: 13.4132 };
        let zoo = GeoPoint { lat: 52.5074, lng: 13.3324 };
        let d = alex.distance_km(&zoo);
        assert!((5.0..10.0).contains(&d), "unexpected distance {}", d);
    }

    #[test]
    fn test_capabilities_stocks_across_categories() {
        let mut stocked = BTreeMap::new();
        stocked.insert(
            IngredientCategory::FrozenFruit,
            vec![IngredientId::new("frozen-mango")],
        );
        let caps = ShopCapabilities {
            stocked,
            can_layer: false,
            base_prep_minutes: 4,
        };

        assert!(caps.stocks(&IngredientId::new("frozen-mango")));
        assert!(!caps.stocks(&IngredientId::new("spinach")));
        assert!(caps.stocked_in(IngredientCategory::Vegetable).is_empty());
    }
}

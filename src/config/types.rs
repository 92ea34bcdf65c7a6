use serde::{Deserialize, Serialize};

use crate::domain::{ActivePetLimit, Coordinate, DEFAULT_MAX_ACTIVE_PETS};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub shop: ShopConfig,
}

/// Publication limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Lost/found records a user may have at once (default: 2).
    #[serde(default = "default_max_active_pets")]
    pub max_active_pets: usize,
}

/// Map centering when the device position is not available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_fallback_latitude")]
    pub fallback_latitude: f64,
    #[serde(default = "default_fallback_longitude")]
    pub fallback_longitude: f64,
}

/// Pet-shop display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Prefix for prices (default: "$").
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_max_active_pets() -> usize {
    DEFAULT_MAX_ACTIVE_PETS
}

fn default_fallback_latitude() -> f64 {
    -34.610841
}

fn default_fallback_longitude() -> f64 {
    -58.563036
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_active_pets: default_max_active_pets(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            fallback_latitude: default_fallback_latitude(),
            fallback_longitude: default_fallback_longitude(),
        }
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl LimitsConfig {
    pub fn active_pet_limit(&self) -> ActivePetLimit {
        ActivePetLimit::new(self.max_active_pets)
    }
}

impl LocationConfig {
    pub fn fallback(&self) -> Coordinate {
        Coordinate::new(self.fallback_latitude, self.fallback_longitude)
    }
}

impl ShopConfig {
    /// "$8500" style price label.
    pub fn format_price(&self, price: u64) -> String {
        format!("{}{}", self.currency_symbol, price)
    }
}

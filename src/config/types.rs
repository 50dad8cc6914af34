use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::pricing::SERVICE_FEE_RATE;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingConfig {
    /// Platform fee rate on accommodation plus cleaning. Deployments with a
    /// negotiated rate override the standard 14% here.
    #[serde(default = "default_service_fee_rate")]
    pub service_fee_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            service_fee_rate: default_service_fee_rate(),
        }
    }
}

fn default_service_fee_rate() -> Decimal {
    SERVICE_FEE_RATE
}

//! Typed read-only view of the `OpenPositionSettings` object.
//!
//! Every field is optional and every struct defaults, so a partial document
//! still decodes. Numbers that are percentages or amounts are `f64` because
//! the producing service is not consistent about emitting integers.

use serde::{Deserialize, Serialize};

/// Settings resolved for one open-position request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenPositionSettings {
    #[serde(rename = "Gcid", alias = "GCID")]
    pub gcid: Option<i64>,
    #[serde(rename = "InstrumentTypeID")]
    pub instrument_type_id: Option<i64>,
    #[serde(rename = "IsBuy")]
    pub is_buy: Option<bool>,
    #[serde(rename = "Leverage")]
    pub leverage: Option<i64>,
    #[serde(rename = "MaxStopLossPercentage")]
    pub max_stop_loss_percentage: Option<f64>,
    #[serde(rename = "LeverageSettings")]
    pub leverage_settings: Option<LeverageSettings>,
    #[serde(rename = "MaxStopLossPercentageSettings")]
    pub max_stop_loss_percentage_settings: Option<MaxStopLossPercentageSettings>,
    #[serde(rename = "MaxTakeProfitPercentageSettings")]
    pub max_take_profit_percentage_settings: Option<MaxTakeProfitPercentageSettings>,
    #[serde(rename = "MinPositionAmountSettings")]
    pub min_position_amount_settings: Option<MinPositionAmountSettings>,
    #[serde(rename = "AllowManualTradingSettings")]
    pub allow_manual_trading_settings: Option<AllowManualTradingSettings>,
    #[serde(rename = "MaxAllowedOpenedPositionsCountSettings")]
    pub max_allowed_opened_positions_count_settings: Option<MaxAllowedOpenedPositionsCountSettings>,
    #[serde(rename = "RestrictedManualOpenSettings")]
    pub restricted_manual_open_settings: Option<RestrictedManualOpenSettings>,
    #[serde(rename = "MaxLeverageForTradeTypesSetting")]
    pub max_leverage_for_trade_types_setting: Option<MaxLeverageForTradeTypesSetting>,
    #[serde(rename = "W8BenExecutionValidationSettings")]
    pub w8ben_execution_validation_settings: Option<W8BenExecutionValidationSettings>,
    #[serde(rename = "MinStopLossPercentageSettings")]
    pub min_stop_loss_percentage_settings: Option<MinStopLossPercentageSettings>,
    #[serde(rename = "MinTakeProfitPercentageSettings")]
    pub min_take_profit_percentage_settings: Option<MinTakeProfitPercentageSettings>,
    #[serde(rename = "AllowTrailingStopLossSettings")]
    pub allow_trailing_stop_loss_settings: Option<AllowTrailingStopLossSettings>,
    #[serde(rename = "AllowBuySellSettings")]
    pub allow_buy_sell_settings: Option<AllowBuySellSettings>,
    #[serde(rename = "AllowDiscountedRatesSettings")]
    pub allow_discounted_rates_settings: Option<AllowDiscountedRatesSettings>,
    /// Upstream spelling, kept as-is.
    #[serde(rename = "BlockedFormCFD")]
    pub blocked_form_cfd: Option<bool>,
    #[serde(rename = "BlockedByCompliance")]
    pub blocked_by_compliance: Option<bool>,
    #[serde(rename = "VisibleInternallyOnlySettings")]
    pub visible_internally_only_settings: Option<VisibleInternallyOnlySettings>,
    #[serde(rename = "MaxNopSettings")]
    pub max_nop_settings: Option<MaxNopSettings>,
    #[serde(rename = "IsNonRealAsTRS")]
    pub is_non_real_as_trs: Option<bool>,
}

impl OpenPositionSettings {
    /// Leverage actually applied, falling back to the leverage block default.
    pub fn effective_leverage(&self) -> Option<i64> {
        self.leverage.or_else(|| {
            self.leverage_settings
                .as_ref()
                .and_then(|l| l.default_value)
        })
    }
}

// ── Leverage ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeverageSettings {
    #[serde(rename = "GCID", alias = "Gcid")]
    pub gcid: Option<i64>,
    #[serde(rename = "InstrumentID")]
    pub instrument_id: Option<i64>,
    #[serde(rename = "InstrumentType")]
    pub instrument_type: Option<i64>,
    #[serde(rename = "IsNonLeveragedBuyAllowed")]
    pub is_non_leveraged_buy_allowed: Option<bool>,
    #[serde(rename = "PossibleLeverages")]
    pub possible_leverages: Vec<i64>,
    /// Element shape varies between producer versions.
    #[serde(rename = "PotentialDisplayLeverages")]
    pub potential_display_leverages: Vec<serde_json::Value>,
    #[serde(rename = "DefaultValue")]
    pub default_value: Option<i64>,
    #[serde(rename = "MaxLeverage")]
    pub max_leverage: Option<i64>,
    /// Upstream spelling, kept as-is.
    #[serde(rename = "MinLevergae", alias = "MinLeverage")]
    pub min_leverage: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxLeverageForTradeTypesSetting {
    #[serde(rename = "InstrumentID")]
    pub instrument_id: Option<i64>,
    #[serde(rename = "InstrumentType")]
    pub instrument_type: Option<i64>,
    #[serde(rename = "StockExcange", alias = "StockExchange")]
    pub stock_exchange: Option<String>,
    #[serde(rename = "IsBuy")]
    pub is_buy: Option<bool>,
    #[serde(rename = "RealTradeMaxLeverage")]
    pub real_trade_max_leverage: Option<i64>,
    #[serde(rename = "MarginTradeMaxLeverage")]
    pub margin_trade_max_leverage: Option<i64>,
    #[serde(rename = "SettledMaxLeverage")]
    pub settled_max_leverage: Option<i64>,
}

// ── Stop loss / take profit ───────────────────────────────────

/// Buy/sell pair inside the max stop-loss matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuySellLimits {
    #[serde(rename = "Buy")]
    pub buy: Option<f64>,
    #[serde(rename = "Sell")]
    pub sell: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxStopLossPercentageMatrix {
    #[serde(rename = "Leveraged")]
    pub leveraged: Option<BuySellLimits>,
    #[serde(rename = "NonLeveraged")]
    pub non_leveraged: Option<BuySellLimits>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxStopLossPercentageSettings {
    #[serde(rename = "GCID", alias = "Gcid")]
    pub gcid: Option<i64>,
    #[serde(rename = "InstrumentID")]
    pub instrument_id: Option<i64>,
    #[serde(rename = "InstrumentType")]
    pub instrument_type: Option<i64>,
    #[serde(rename = "MaxStopLossPercentageMatrix")]
    pub matrix: Option<MaxStopLossPercentageMatrix>,
    #[serde(rename = "Leverage1MaintenanceMarginUsageActivated")]
    pub leverage1_maintenance_margin_usage_activated: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinStopLossPercentageSettings {
    #[serde(rename = "GCID", alias = "Gcid")]
    pub gcid: Option<i64>,
    #[serde(rename = "InstrumentID")]
    pub instrument_id: Option<i64>,
    #[serde(rename = "MinStopLossPercentage")]
    pub min_stop_loss_percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxTakeProfitPercentageSettings {
    #[serde(rename = "GCID", alias = "Gcid")]
    pub gcid: Option<i64>,
    #[serde(rename = "InstrumentID")]
    pub instrument_id: Option<i64>,
    #[serde(rename = "InstrumentType")]
    pub instrument_type: Option<i64>,
    #[serde(rename = "MaxTakeProfitPercentage")]
    pub max_take_profit_percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinTakeProfitPercentageSettings {
    #[serde(rename = "GCID", alias = "Gcid")]
    pub gcid: Option<i64>,
    #[serde(rename = "InstrumentID")]
    pub instrument_id: Option<i64>,
    #[serde(rename = "MinTakeProfitPercentage")]
    pub min_take_profit_percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowTrailingStopLossSettings {
    #[serde(rename = "GCID", alias = "Gcid")]
    pub gcid: Option<i64>,
    #[serde(rename = "InstrumentID")]
    pub instrument_id: Option<i64>,
    #[serde(rename = "AllowTrailingStopLoss")]
    pub allow_trailing_stop_loss: Option<bool>,
}

// ── Position sizing ───────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinPositionAmountSettings {
    #[serde(rename = "GCID", alias = "Gcid")]
    pub gcid: Option<i64>,
    #[serde(rename = "InstrumentID")]
    pub instrument_id: Option<i64>,
    #[serde(rename = "InstrumentType")]
    pub instrument_type: Option<i64>,
    #[serde(rename = "MinPositionAmount")]
    pub min_position_amount: Option<f64>,
    #[serde(rename = "MinPositionAmountAbsolute")]
    pub min_position_amount_absolute: Option<f64>,
    #[serde(rename = "MinPositionAmountAbsoluteDiscounted")]
    pub min_position_amount_absolute_discounted: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxAllowedOpenedPositionsCountSettings {
    #[serde(rename = "GCID", alias = "Gcid")]
    pub gcid: Option<i64>,
    #[serde(rename = "MaxAllowedOpenedPositionsCount")]
    pub max_allowed_opened_positions_count: Option<i64>,
}

/// Net open position limit for one instrument and direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxNopSettings {
    #[serde(rename = "InstrumentID")]
    pub instrument_id: Option<i64>,
    #[serde(rename = "InstrumentTypeID")]
    pub instrument_type_id: Option<i64>,
    #[serde(rename = "IsBuy")]
    pub is_buy: Option<bool>,
    #[serde(rename = "NopLimit")]
    pub nop_limit: Option<f64>,
    #[serde(rename = "Nop")]
    pub nop: Option<f64>,
    #[serde(rename = "MaxNopReached")]
    pub max_nop_reached: Option<bool>,
}

// ── Permissions ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowManualTradingSettings {
    #[serde(rename = "InstrumentID")]
    pub instrument_id: Option<i64>,
    #[serde(rename = "InstrumentType")]
    pub instrument_type: Option<i64>,
    #[serde(rename = "AllowManualTrading")]
    pub allow_manual_trading: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestrictedManualOpenSettings {
    #[serde(rename = "InstrumentID")]
    pub instrument_id: Option<i64>,
    #[serde(rename = "InstrumentType")]
    pub instrument_type: Option<i64>,
    #[serde(rename = "RestrictedManualOpen")]
    pub restricted_manual_open: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowBuySellSettings {
    #[serde(rename = "Gcid", alias = "GCID")]
    pub gcid: Option<i64>,
    #[serde(rename = "IsBuyAllowed")]
    pub is_buy_allowed: Option<bool>,
    #[serde(rename = "IsSellAllowed")]
    pub is_sell_allowed: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowDiscountedRatesSettings {
    #[serde(rename = "InstrumentType")]
    pub instrument_type: Option<i64>,
    #[serde(rename = "AllowDiscountedRates")]
    pub allow_discounted_rates: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibleInternallyOnlySettings {
    #[serde(rename = "GCID", alias = "Gcid")]
    pub gcid: Option<i64>,
    #[serde(rename = "IsVisibleInternallyOnly")]
    pub is_visible_internally_only: Option<bool>,
}

// ── W8BEN ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct W8BenStatusSettings {
    #[serde(rename = "Gcid", alias = "GCID")]
    pub gcid: Option<i64>,
    #[serde(rename = "W8BenStatus")]
    pub w8ben_status: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequiresW8BenSettings {
    #[serde(rename = "Gcid", alias = "GCID")]
    pub gcid: Option<i64>,
    #[serde(rename = "InstrumentID")]
    pub instrument_id: Option<i64>,
    #[serde(rename = "StockExcange", alias = "StockExchange")]
    pub stock_exchange: Option<String>,
    #[serde(rename = "InstrumentType")]
    pub instrument_type: Option<i64>,
    #[serde(rename = "RequiresW8Ben")]
    pub requires_w8ben: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct W8BenExecutionValidationSettings {
    #[serde(rename = "IsValidForExecution")]
    pub is_valid_for_execution: Option<bool>,
    #[serde(rename = "W8BenStatusSettings")]
    pub status: Option<W8BenStatusSettings>,
    #[serde(rename = "RequiresW8BenSettings")]
    pub requirement: Option<RequiresW8BenSettings>,
}

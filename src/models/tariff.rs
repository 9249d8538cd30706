use super::error::AppError;
use crate::config::Config;

/// One consumption band of the public-lighting fee (CIP) table.
#[derive(Debug, Clone, PartialEq)]
pub struct TariffTier {
    pub id: u8,
    /// Inclusive lower bound in kWh
    pub lower_bound: f64,
    /// Inclusive upper bound in kWh, `None` for the open-ended top tier
    pub upper_bound: Option<f64>,
    /// Flat fee in R$
    pub rate: f64,
    pub label: &'static str,
    /// Range as printed on the tier table, e.g. "201 - 350"
    pub range: &'static str,
    pub color: &'static str,
}

impl TariffTier {
    fn contains(&self, spent: f64) -> bool {
        self.upper_bound.is_none_or(|upper| spent <= upper)
    }

    /// Returns CSS class name for color coding
    pub fn css_class(&self) -> &'static str {
        match self.id {
            1 => "tier-economico",
            2 => "tier-padrao",
            3 => "tier-alerta",
            _ => "tier-critico",
        }
    }
}

/// Household figures the consumption screen works from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsumptionSnapshot {
    pub capacity: f64,
    pub sun_production: f64,
    pub spent: f64,
    pub fee_limit: f64,
}

impl Default for ConsumptionSnapshot {
    fn default() -> Self {
        Self {
            capacity: 340.0,
            sun_production: 310.0,
            spent: 410.0,
            fee_limit: 550.0,
        }
    }
}

impl ConsumptionSnapshot {
    /// Spend as a percentage of the planned project capacity
    pub fn percent_of_capacity(&self) -> f64 {
        if self.capacity > 0.0 {
            self.spent / self.capacity * 100.0
        } else {
            0.0
        }
    }
}

/// Classification result for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionReading {
    pub tier: TariffTier,
    /// Gauge fill in `[0, 1]`
    pub progress: f64,
}

impl ConsumptionReading {
    /// Tier fee plus the fixed base charge
    pub fn invoice_total(&self) -> f64 {
        self.tier.rate + Config::INVOICE_BASE_CHARGE
    }
}

/// What the savings card should say for a reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SavingsAdvice {
    /// Consumption is already in one of the two cheapest tiers
    OnTrack { ceiling: f64 },
    /// Cutting `reduce_by` kWh brings consumption back to `target_label`
    Reduce {
        spent: f64,
        reduce_by: f64,
        target_label: &'static str,
    },
}

/// Ordered, contiguous tier table.
#[derive(Debug, Clone, PartialEq)]
pub struct TariffTable {
    tiers: Vec<TariffTier>,
}

impl Default for TariffTable {
    fn default() -> Self {
        Self {
            tiers: vec![
                TariffTier {
                    id: 1,
                    lower_bound: 0.0,
                    upper_bound: Some(200.0),
                    rate: 18.50,
                    label: "Econômico",
                    range: "0 - 200",
                    color: "#92E32B",
                },
                TariffTier {
                    id: 2,
                    lower_bound: 200.0,
                    upper_bound: Some(350.0),
                    rate: 24.90,
                    label: "Padrão",
                    range: "201 - 350",
                    color: "#3B82F6",
                },
                TariffTier {
                    id: 3,
                    lower_bound: 350.0,
                    upper_bound: Some(442.0),
                    rate: 42.00,
                    label: "Alerta",
                    range: "351 - 442",
                    color: "#FF6B00",
                },
                TariffTier {
                    id: 4,
                    lower_bound: 442.0,
                    upper_bound: None,
                    rate: 68.40,
                    label: "Crítico",
                    range: "443+",
                    color: "#EF4444",
                },
            ],
        }
    }
}

impl TariffTable {
    /// Builds a table from tiers ordered by ascending upper bound.
    ///
    /// The tiers must be contiguous from 0: each lower bound equals the
    /// previous upper bound. Only the last tier may be unbounded, and it must be.
    pub fn new(tiers: Vec<TariffTier>) -> Result<Self, AppError> {
        let Some((last, rest)) = tiers.split_last() else {
            return Err(AppError::InvalidConfiguration(
                "Tariff table has no tiers".to_string(),
            ));
        };

        if last.upper_bound.is_some() {
            return Err(AppError::InvalidConfiguration(format!(
                "Top tier {} must be unbounded",
                last.id
            )));
        }

        let mut previous = 0.0;
        for (index, tier) in tiers.iter().enumerate() {
            if tier.lower_bound != previous {
                return Err(AppError::InvalidConfiguration(format!(
                    "Tier {} starts at {} but the table continues from {previous}",
                    tier.id, tier.lower_bound
                )));
            }
            if index == rest.len() {
                break;
            }

            match tier.upper_bound {
                Some(upper) if upper.is_finite() && upper > previous => previous = upper,
                Some(upper) => {
                    return Err(AppError::InvalidConfiguration(format!(
                        "Tier {} upper bound {upper} is not above {previous}",
                        tier.id
                    )));
                }
                None => {
                    return Err(AppError::InvalidConfiguration(format!(
                        "Only the top tier may be unbounded, tier {} is not",
                        tier.id
                    )));
                }
            }
        }

        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[TariffTier] {
        &self.tiers
    }

    /// Picks the tier for `spent` kWh: first tier whose upper bound is not
    /// exceeded, otherwise the open-ended top tier.
    pub fn classify(&self, spent: f64) -> Result<&TariffTier, AppError> {
        validate_spent(spent)?;

        self.tiers
            .iter()
            .find(|tier| tier.contains(spent))
            .ok_or_else(|| AppError::InvalidConfiguration(format!("No tier covers {spent} kWh")))
    }

    /// Classifies a snapshot and derives its gauge fill.
    pub fn read(&self, snapshot: &ConsumptionSnapshot) -> Result<ConsumptionReading, AppError> {
        let progress = gauge_progress(snapshot.spent, snapshot.fee_limit)?;
        let tier = self.classify(snapshot.spent)?.clone();
        Ok(ConsumptionReading { tier, progress })
    }

    /// Savings hint for `spent`, aimed at the ceiling of the second tier.
    pub fn savings_advice(&self, spent: f64) -> Result<SavingsAdvice, AppError> {
        let tier = self.classify(spent)?;
        let Some(standard) = self.tiers.get(1).or_else(|| self.tiers.first()) else {
            return Ok(SavingsAdvice::OnTrack { ceiling: spent });
        };
        let ceiling = standard.upper_bound.unwrap_or(spent);

        if tier.id > standard.id {
            Ok(SavingsAdvice::Reduce {
                spent,
                reduce_by: spent - ceiling,
                target_label: standard.label,
            })
        } else {
            Ok(SavingsAdvice::OnTrack { ceiling })
        }
    }
}

/// Fraction of the fee limit already spent, clamped to 1.
pub fn gauge_progress(spent: f64, fee_limit: f64) -> Result<f64, AppError> {
    if !fee_limit.is_finite() || fee_limit <= 0.0 {
        return Err(AppError::InvalidConfiguration(format!(
            "Fee limit must be a positive number, got {fee_limit}"
        )));
    }
    validate_spent(spent)?;

    Ok((spent / fee_limit).min(1.0))
}

fn validate_spent(spent: f64) -> Result<(), AppError> {
    if !spent.is_finite() || spent < 0.0 {
        return Err(AppError::InvalidValue(format!(
            "Consumption must be a non-negative number, got {spent}"
        )));
    }
    Ok(())
}

/// Semicircular gauge geometry for a given fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeArc {
    pub length: f64,
    pub dash_offset: f64,
}

impl GaugeArc {
    pub const RADIUS: f64 = 82.0;

    pub fn new(progress: f64) -> Self {
        let length = std::f64::consts::PI * Self::RADIUS;
        Self {
            length,
            dash_offset: length - progress.clamp(0.0, 1.0) * length,
        }
    }
}

use super::error::AppError;

/// Energy produced in one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyProduction {
    pub month: &'static str,
    /// kWh
    pub value: f64,
}

/// Headline figures for one statistics tile.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTile {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub prefix: &'static str,
    pub description: &'static str,
}

/// Production history and headline figures shown on the dashboard and the
/// statistics screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionSummary {
    months: Vec<MonthlyProduction>,
    /// Month drawn with the accent colour
    pub highlighted: &'static str,
    pub monthly_generation: f64,
    pub credits: f64,
    pub savings: f64,
    pub period_total: f64,
}

impl Default for ProductionSummary {
    fn default() -> Self {
        let months = [
            ("Jan", 400.0),
            ("Fev", 600.0),
            ("Mar", 300.0),
            ("Abr", 900.0),
            ("Mai", 500.0),
            ("Jun", 700.0),
        ]
        .into_iter()
        .map(|(month, value)| MonthlyProduction { month, value })
        .collect();

        Self {
            months,
            highlighted: "Abr",
            monthly_generation: 340.0,
            credits: 1_284.0,
            savings: 842.50,
            period_total: 1_245.80,
        }
    }
}

impl ProductionSummary {
    pub fn new(months: Vec<MonthlyProduction>) -> Self {
        Self {
            months,
            ..Self::default()
        }
    }

    pub fn months(&self) -> &[MonthlyProduction] {
        &self.months
    }

    /// Category labels and values for the bar chart.
    pub fn series_data(&self) -> Result<(Vec<String>, Vec<f64>), AppError> {
        if self.months.is_empty() {
            return Err(AppError::InvalidValue(
                "No production data available".to_string(),
            ));
        }

        let labels = self.months.iter().map(|m| m.month.to_string()).collect();
        let values = self.months.iter().map(|m| m.value).collect();
        Ok((labels, values))
    }

    pub fn tiles(&self) -> Vec<StatTile> {
        vec![
            StatTile {
                icon: "⚡",
                label: "Energia",
                value: 840.0,
                unit: "kWh",
                prefix: "",
                description: "Energia suficiente para sua casa por 28 dias.",
            },
            StatTile {
                icon: "🌿",
                label: "CO2 Salvo",
                value: 12.5,
                unit: "kg",
                prefix: "",
                description: "O equivalente a ter plantado 2 árvores hoje.",
            },
            StatTile {
                icon: "🧾",
                label: "Economia",
                value: 724.0,
                unit: "",
                prefix: "R$ ",
                description: "Valor que será descontado da sua próxima conta.",
            },
            StatTile {
                icon: "📈",
                label: "Eficiência",
                value: 98.2,
                unit: "%",
                prefix: "",
                description: "Seus painéis estão operando em potência máxima.",
            },
        ]
    }
}

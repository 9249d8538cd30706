/// Severity of an alert, drives its icon and colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Warning,
    Offline,
    Info,
}

impl AlertLevel {
    /// Returns CSS class name for color coding
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Warning => "alert-warning",
            Self::Offline => "alert-offline",
            Self::Info => "alert-info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Warning => "⚠️",
            Self::Offline => "📡",
            Self::Info => "ℹ️",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    pub level: AlertLevel,
    pub is_urgent: bool,
    pub is_read: bool,
}

/// Tabs of the alert centre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertFilter {
    #[default]
    All,
    Urgent,
    Read,
}

impl AlertFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Todos",
            Self::Urgent => "Urgentes",
            Self::Read => "Lidos",
        }
    }

    /// All filters, in tab order.
    pub fn all() -> &'static [AlertFilter] {
        &[AlertFilter::All, AlertFilter::Urgent, AlertFilter::Read]
    }

    pub fn matches(&self, alert: &Alert) -> bool {
        match self {
            Self::All => true,
            Self::Urgent => alert.is_urgent,
            Self::Read => alert.is_read,
        }
    }

    /// Alerts passing this filter, original order kept
    pub fn apply<'a>(&self, alerts: &'a [Alert]) -> Vec<&'a Alert> {
        alerts.iter().filter(|alert| self.matches(alert)).collect()
    }
}

pub fn mock_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            title: "Produção Abaixo do Esperado",
            description: "Seu sistema produziu 15% menos que a média histórica para este horário.",
            time: "10:30 AM",
            level: AlertLevel::Warning,
            is_urgent: true,
            is_read: false,
        },
        Alert {
            id: 2,
            title: "Sistema Offline",
            description: "Inversor #420-B perdeu conexão com a rede. A monitoração em tempo real está suspensa.",
            time: "08:15 AM",
            level: AlertLevel::Offline,
            is_urgent: true,
            is_read: false,
        },
        Alert {
            id: 3,
            title: "Créditos Expirando",
            description: "Cerca de 250kWh em créditos expiram em 30 dias. Considere redistribuir.",
            time: "ONTEM",
            level: AlertLevel::Info,
            is_urgent: false,
            is_read: true,
        },
        Alert {
            id: 4,
            title: "Manutenção Concluída",
            description: "A limpeza programada dos painéis foi finalizada com sucesso.",
            time: "02 OUT",
            level: AlertLevel::Info,
            is_urgent: false,
            is_read: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(filter: AlertFilter, alerts: &[Alert]) -> Vec<u32> {
        filter.apply(alerts).iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_filter_all_keeps_everything() {
        assert_eq!(ids(AlertFilter::All, &mock_alerts()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_urgent() {
        assert_eq!(ids(AlertFilter::Urgent, &mock_alerts()), vec![1, 2]);
    }

    #[test]
    fn test_filter_read() {
        assert_eq!(ids(AlertFilter::Read, &mock_alerts()), vec![3, 4]);
    }

    #[test]
    fn test_filter_can_be_empty() {
        let unread: Vec<Alert> = mock_alerts().into_iter().filter(|a| !a.is_read).collect();
        assert!(AlertFilter::Read.apply(&unread).is_empty());
        assert_eq!(AlertFilter::Urgent.apply(&unread).len(), 2);
    }

    #[test]
    fn test_filter_labels() {
        let labels: Vec<&str> = AlertFilter::all().iter().map(AlertFilter::label).collect();
        assert_eq!(labels, vec!["Todos", "Urgentes", "Lidos"]);
        assert_eq!(AlertFilter::default(), AlertFilter::All);
    }
}

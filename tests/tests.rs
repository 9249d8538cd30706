#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use yla_energy::components::Page;
    use yla_energy::hooks::use_insight::InsightState;
    use yla_energy::hooks::use_tween::TweenDisplay;
    use yla_energy::models::{
        alerts::{AlertFilter, mock_alerts},
        error::AppError,
        onboarding::{FlagStore, MemoryFlagStore, OnboardingState},
        tariff::{ConsumptionSnapshot, TariffTable, gauge_progress},
        tween::{NumberFormat, SpringConfig, Tween, frame_delta},
    };
    use yla_energy::services::insight::InsightConfig;
    use yla_energy::utils::format::format_pt_br;

    const FRAME: f64 = 1.0 / 60.0;
    const MAX_STEPS: usize = 2_000;

    // Helper: steps until settled, returning the number of steps taken
    fn settle(tween: &mut Tween) -> usize {
        let mut steps = 0;
        while tween.step(FRAME) {
            steps += 1;
            assert!(steps < MAX_STEPS, "tween did not settle: {:?}", tween.state());
        }
        steps
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_invalid_value_display() {
        let error = AppError::InvalidValue("NaN".to_string());
        assert_eq!(error.to_string(), "Invalid value: NaN");
    }

    #[test]
    fn test_app_error_invalid_configuration_display() {
        let error = AppError::InvalidConfiguration("fee limit".to_string());
        assert_eq!(error.to_string(), "Invalid configuration: fee limit");
    }

    // ===== Tween Tests =====

    #[test]
    fn test_tween_settles_for_finite_targets() {
        for target in [0.0, 1.0, 4.82, 18.5, 340.0, 1_284.0, -50.0, 10_000.0] {
            let mut tween = Tween::new(NumberFormat::default());
            tween.observe(target).unwrap();
            settle(&mut tween);

            let rest = SpringConfig::default().rest_delta;
            let state = tween.state();
            assert!((state.current - target).abs() < rest, "target {target}");
            assert!(state.velocity.abs() < rest, "target {target}");
        }
    }

    #[test]
    fn test_tween_retarget_is_continuous() {
        let mut tween = Tween::new(NumberFormat::new(1));
        tween.observe(340.0).unwrap();
        for _ in 0..10 {
            tween.step(FRAME);
        }

        let before = tween.state();
        let shown_before = tween.display();
        tween.observe(900.0).unwrap();
        let after = tween.state();

        assert_eq!(tween.display(), shown_before);
        assert_eq!(after.current, before.current);
        assert_eq!(after.velocity, before.velocity);
        assert_eq!(after.target, 900.0);
    }

    #[test]
    fn test_tween_retarget_bends_trajectory() {
        let mut tween = Tween::new(NumberFormat::default());
        tween.observe(1_000.0).unwrap();
        for _ in 0..5 {
            tween.step(FRAME);
        }
        let midway = tween.current();
        assert!(midway > 0.0 && midway < 1_000.0);

        // Retarget below the current position: the next frames still carry
        // the upward momentum before turning around, never jumping back to 0.
        tween.observe(100.0).unwrap();
        tween.step(FRAME);
        assert!(tween.current() > midway * 0.9);

        settle(&mut tween);
        assert_eq!(format_pt_br(tween.current(), 0), "100");
    }

    #[test]
    fn test_tween_wakes_after_settling() {
        let mut tween = Tween::new(NumberFormat::default());
        tween.observe(50.0).unwrap();
        settle(&mut tween);
        assert!(!tween.step(FRAME));

        tween.observe(60.0).unwrap();
        assert!(tween.step(FRAME));
    }

    #[test]
    fn test_tween_instances_are_independent() {
        let mut credits = Tween::new(NumberFormat::default());
        let mut generation = Tween::new(NumberFormat::default());
        credits.observe(1_284.0).unwrap();
        generation.observe(340.0).unwrap();

        credits.step(FRAME);
        assert_eq!(generation.current(), 0.0);
        assert!(credits.current() > 0.0);
    }

    #[test]
    fn test_tween_frames_render_with_affixes() {
        let mut tween = Tween::new(NumberFormat::new(2).prefix("R$ "));
        tween.observe(42.0).unwrap();

        let last = tween.frames(FRAME).last().unwrap();
        assert_eq!(last, "R$ 42,00");
        assert!(tween.is_settled());
    }

    #[test]
    fn test_tween_survives_bad_frame_delta() {
        let mut tween = Tween::new(NumberFormat::default());
        tween.observe(340.0).unwrap();
        assert!(!tween.step(f64::NAN));

        tween.observe(10.0).unwrap();
        settle(&mut tween);
        assert_eq!(tween.display(), "10");
        assert_eq!(tween.frames(0.0).count(), 0);
    }

    #[test]
    fn test_tween_backgrounded_tab_resumes_bounded() {
        let mut tween = Tween::new(NumberFormat::default());
        tween.observe(1_000.0).unwrap();

        // Five seconds hidden still advances by a single 40 ms step
        let dt = frame_delta(Some(0.0), 5_000.0);
        assert_eq!(dt, 0.04);
        tween.step(dt);
        assert!(tween.current() > 0.0 && tween.current() < 1_000.0);
    }

    #[test]
    fn test_tween_display_placeholder() {
        let ok = TweenDisplay::Value("340".to_string());
        assert_eq!(ok.text_or("--"), "340");

        let invalid = TweenDisplay::Invalid("Invalid value: NaN".to_string());
        assert_eq!(invalid.text_or("--"), "--");
    }

    // ===== Formatting Tests =====

    #[test]
    fn test_format_is_locale_fixed() {
        assert_eq!(format_pt_br(1234.5, 2), "1.234,50");
        assert_eq!(format_pt_br(1_245.8, 1), "1.245,8");
        assert_eq!(format_pt_br(340.0, 0), "340");
    }

    // ===== Tariff Tests =====

    #[test]
    fn test_tier_boundaries() {
        let table = TariffTable::default();
        let cases = [
            (200.0, 1),
            (200.01, 2),
            (350.0, 2),
            (442.0, 3),
            (443.0, 4),
            (10_000.0, 4),
        ];
        for (spent, expected) in cases {
            assert_eq!(table.classify(spent).unwrap().id, expected, "spent {spent}");
        }
    }

    #[test]
    fn test_tier_rates_and_labels() {
        let table = TariffTable::default();
        let summary: Vec<(u8, f64, &str)> = table
            .tiers()
            .iter()
            .map(|t| (t.id, t.rate, t.label))
            .collect();

        assert_eq!(
            summary,
            vec![
                (1, 18.50, "Econômico"),
                (2, 24.90, "Padrão"),
                (3, 42.00, "Alerta"),
                (4, 68.40, "Crítico"),
            ]
        );
    }

    #[test]
    fn test_gauge_ratio_clamps() {
        assert_eq!(gauge_progress(600.0, 550.0).unwrap(), 1.0);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let table = TariffTable::default();
        assert!(matches!(table.classify(-1.0), Err(AppError::InvalidValue(_))));
        assert!(matches!(
            gauge_progress(100.0, 0.0),
            Err(AppError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_read_default_snapshot() {
        let table = TariffTable::default();
        let snapshot = ConsumptionSnapshot::default();
        let reading = table.read(&snapshot).unwrap();

        assert_eq!(reading.tier.id, 3);
        assert!((reading.progress - 410.0 / 550.0).abs() < 1e-12);
        assert!((reading.invoice_total() - 87.30).abs() < 1e-9);
        assert_eq!(format!("{:.0}", snapshot.percent_of_capacity()), "121");
    }

    #[test]
    fn test_read_rejects_bad_fee_limit() {
        let snapshot = ConsumptionSnapshot {
            fee_limit: 0.0,
            ..ConsumptionSnapshot::default()
        };
        assert!(matches!(
            TariffTable::default().read(&snapshot),
            Err(AppError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_non_contiguous_table_rejected() {
        let mut tiers = TariffTable::default().tiers().to_vec();
        tiers[2].lower_bound = 360.0;
        assert!(matches!(
            TariffTable::new(tiers),
            Err(AppError::InvalidConfiguration(_))
        ));
    }

    // ===== Alerts Tests =====

    #[test]
    fn test_alert_filters() {
        let alerts = mock_alerts();
        let titles = |filter: AlertFilter| -> Vec<&'static str> {
            filter.apply(&alerts).iter().map(|a| a.title).collect()
        };

        assert_eq!(titles(AlertFilter::All).len(), 4);
        assert_eq!(
            titles(AlertFilter::Urgent),
            vec!["Produção Abaixo do Esperado", "Sistema Offline"]
        );
        assert_eq!(
            titles(AlertFilter::Read),
            vec!["Créditos Expirando", "Manutenção Concluída"]
        );
    }

    // ===== Onboarding Tests =====

    #[test]
    fn test_onboarding_lifecycle() {
        let store: Rc<dyn FlagStore> = Rc::new(MemoryFlagStore::default());

        let mut state = OnboardingState::load(store.as_ref());
        assert!(state.should_show());

        state.complete(store.as_ref()).unwrap();
        assert!(!state.should_show());

        // Next startup reads the persisted flag
        assert!(!OnboardingState::load(store.as_ref()).should_show());
    }

    // ===== Insight Tests =====

    #[test]
    fn test_insight_state_text_extraction() {
        let loaded = InsightState::Loaded(Rc::from("Excelente economia!"));
        assert_eq!(loaded.text(), Some("Excelente economia!"));
        assert!(!loaded.is_loading());

        let loading = InsightState::Loading;
        assert!(loading.text().is_none());
        assert!(loading.is_loading());
    }

    #[test]
    fn test_insight_fallback_is_configurable() {
        let config = InsightConfig::builder()
            .fallback_text("Sem novidades hoje.")
            .build();
        assert_eq!(config.fallback_text(), "Sem novidades hoje.");
        assert!(!InsightConfig::default().fallback_text().is_empty());
    }

    // ===== Navigation Tests =====

    #[test]
    fn test_navigation_pages() {
        let pages = Page::all();
        let labels: Vec<&str> = pages.iter().map(Page::label).collect();
        assert_eq!(labels, vec!["PAINEL", "GRÁFICOS", "ALERTAS", "PERFIL"]);
        assert_eq!(pages[0], Page::default());

        // Consumption opens from the dashboard, not from the nav bar
        assert!(!pages.contains(&Page::Consumption));
        assert_eq!(Page::Consumption.label(), "CONSUMO");
    }
}

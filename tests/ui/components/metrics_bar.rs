use cropcast::ui::components::metrics_bar::{format_value, MetricUnit, MetricsBar};
use cropcast::ui::core::{Action, AppContext, Component};

fn bar() -> MetricsBar {
    MetricsBar::new(AppContext::default())
}

#[test]
fn test_values_are_monotonic_and_clamped() {
    let mut bar = bar();
    let mut previous: Vec<f64> = bar.metrics().iter().map(|m| m.value).collect();

    for _ in 0..60 {
        bar.advance_step();
        for (metric, prev) in bar.metrics().iter().zip(previous.iter()) {
            assert!(metric.value >= *prev, "metric {} went backwards", metric.label);
            assert!(
                metric.value <= metric.target,
                "metric {} overshot its target",
                metric.label
            );
        }
        previous = bar.metrics().iter().map(|m| m.value).collect();
    }
}

#[test]
fn test_completed_animation_formats_targets_exactly() {
    let mut bar = bar();
    for _ in 0..60 {
        bar.advance_step();
    }
    assert!(bar.is_complete());

    let formatted: Vec<String> = bar.metrics().iter().map(|m| m.formatted()).collect();
    assert_eq!(formatted, vec!["94%", "10K", "2.5M", "45"]);
}

#[test]
fn test_extra_steps_after_completion_are_no_ops() {
    let mut bar = bar();
    for _ in 0..120 {
        bar.advance_step();
    }
    assert_eq!(bar.step(), 60);
    for metric in bar.metrics() {
        assert_eq!(metric.value, metric.target);
    }
}

#[test]
fn test_metrics_tick_action_is_consumed() {
    let mut bar = bar();
    let result = bar.update(Action::MetricsTick);
    assert!(matches!(result, Action::None));
    assert_eq!(bar.step(), 1);

    // Unrelated actions pass through untouched
    let result = bar.update(Action::Quit);
    assert!(matches!(result, Action::Quit));
    assert_eq!(bar.step(), 1);
}

#[test]
fn test_halfway_progress_is_half_of_target() {
    let mut bar = bar();
    for _ in 0..30 {
        bar.advance_step();
    }
    for metric in bar.metrics() {
        assert!((metric.value - metric.target / 2.0).abs() < 1e-9);
    }
}

#[test]
fn test_formatting_policy_examples() {
    assert_eq!(format_value(94.0, Some(MetricUnit::Percent)), "94%");
    assert_eq!(format_value(10000.0, Some(MetricUnit::Thousands)), "10K");
    assert_eq!(format_value(2.5, Some(MetricUnit::Millions)), "2.5M");
    assert_eq!(format_value(45.0, None), "45");
}

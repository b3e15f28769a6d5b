use cropcast::ui::core::{Action, Scheduler};
use tokio::time::Duration;

#[tokio::test]
async fn test_delayed_action_is_delivered() {
    let (mut scheduler, mut rx) = Scheduler::new();
    scheduler.spawn_delayed(Duration::from_millis(10), Action::MetricsTick, "test timer".to_string());

    tokio::time::sleep(Duration::from_millis(60)).await;

    assert!(matches!(rx.try_recv(), Ok(Action::MetricsTick)));
    assert!(rx.try_recv().is_err(), "one-shot timer must fire exactly once");
}

#[tokio::test]
async fn test_cancelled_timer_never_delivers() {
    let (mut scheduler, mut rx) = Scheduler::new();
    let id = scheduler.spawn_delayed(Duration::from_millis(50), Action::MetricsTick, "test timer".to_string());

    assert!(scheduler.cancel(id));
    tokio::time::sleep(Duration::from_millis(120)).await;

    assert!(rx.try_recv().is_err());
    assert_eq!(scheduler.timer_count(), 0);
}

#[tokio::test]
async fn test_repeating_timer_delivers_its_tick_budget() {
    let (mut scheduler, mut rx) = Scheduler::new();
    scheduler.spawn_repeating(
        Duration::from_millis(10),
        5,
        Action::MetricsTick,
        "test ticker".to_string(),
    );

    tokio::time::sleep(Duration::from_millis(200)).await;

    let mut delivered = 0;
    while rx.try_recv().is_ok() {
        delivered += 1;
    }
    assert_eq!(delivered, 5);
}

#[tokio::test]
async fn test_cleanup_removes_finished_timers() {
    let (mut scheduler, _rx) = Scheduler::new();
    scheduler.spawn_delayed(Duration::from_millis(5), Action::MetricsTick, "test timer".to_string());
    assert_eq!(scheduler.timer_count(), 1);

    tokio::time::sleep(Duration::from_millis(50)).await;

    let finished = scheduler.cleanup_finished();
    assert_eq!(finished.len(), 1);
    assert_eq!(scheduler.timer_count(), 0);
}

#[tokio::test]
async fn test_drop_aborts_pending_timers() {
    let (mut scheduler, mut rx) = Scheduler::new();
    scheduler.spawn_delayed(Duration::from_millis(50), Action::MetricsTick, "test timer".to_string());
    drop(scheduler);

    tokio::time::sleep(Duration::from_millis(120)).await;

    assert!(rx.try_recv().is_err());
}

use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn fires_only_once_due() {
    let mut q = TimerQueue::new();
    q.schedule(ms(150), TimerAction::RevertButton("o1".to_string()));
    assert!(q.advance(ms(149)).is_empty());
    assert_eq!(
        q.advance(ms(1)),
        vec![TimerAction::RevertButton("o1".to_string())]
    );
    assert!(q.is_empty());
    assert!(q.advance(ms(1000)).is_empty());
    assert_eq!(q.now(), ms(1150));
}

#[test]
fn cancelled_timers_never_fire() {
    let mut q = TimerQueue::new();
    let a = q.schedule(ms(10), TimerAction::RevertButton("a".to_string()));
    q.schedule(ms(10), TimerAction::SettleAnimation);
    assert!(q.cancel(a));
    assert!(!q.cancel(a));
    assert_eq!(q.advance(ms(10)), vec![TimerAction::SettleAnimation]);
}

#[test]
fn cancel_all_models_teardown() {
    let mut q = TimerQueue::new();
    q.schedule(ms(5), TimerAction::RevertButton("a".to_string()));
    q.schedule(ms(7), TimerAction::RevertButton("b".to_string()));
    assert_eq!(q.cancel_all(), 2);
    assert!(q.advance(ms(100)).is_empty());
}

#[test]
fn due_order_is_by_time_then_schedule_order() {
    let mut q = TimerQueue::new();
    q.schedule(ms(20), TimerAction::RevertButton("late".to_string()));
    q.schedule(ms(10), TimerAction::RevertButton("early".to_string()));
    q.schedule(ms(10), TimerAction::SettleAnimation);
    assert_eq!(q.next_due(), Some(ms(10)));
    assert_eq!(
        q.advance(ms(30)),
        vec![
            TimerAction::RevertButton("early".to_string()),
            TimerAction::SettleAnimation,
            TimerAction::RevertButton("late".to_string()),
        ]
    );
}

#[test]
fn cancel_where_filters_by_action() {
    let mut q = TimerQueue::new();
    q.schedule(ms(5), TimerAction::RevertButton("a".to_string()));
    q.schedule(ms(5), TimerAction::RevertButton("b".to_string()));
    let n = q.cancel_where(|a| matches!(a, TimerAction::RevertButton(k) if k == "a"));
    assert_eq!(n, 1);
    assert!(q.any(|a| matches!(a, TimerAction::RevertButton(k) if k == "b")));
    assert_eq!(q.len(), 1);
}

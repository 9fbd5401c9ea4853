use super::*;
use std::thread;

#[test]
fn test_search_limits_depth_only() {
    let limits = SearchLimits::depth(5);
    assert_eq!(limits.depth, 5);
    assert!(limits.move_time.is_none());
    assert!(!limits.should_stop());
}

#[test]
fn test_search_limits_with_time() {
    let limits = SearchLimits::depth_and_time(4, Duration::from_millis(100));
    assert_eq!(limits.depth, 4);
    assert_eq!(limits.move_time, Some(Duration::from_millis(100)));
}

#[test]
fn test_time_control_expiry() {
    let tc = TimeControl::new(Some(Duration::from_millis(10)));
    tc.start();
    assert!(!tc.is_stopped());

    // Wait for time to expire
    thread::sleep(Duration::from_millis(20));
    tc.check_time();
    assert!(tc.is_stopped());
}

#[test]
fn test_time_control_no_limit() {
    let tc = TimeControl::new(None);
    tc.start();
    thread::sleep(Duration::from_millis(10));
    tc.check_time();
    assert!(!tc.is_stopped());
}

#[test]
fn test_time_control_manual_stop() {
    let tc = TimeControl::new(None);
    tc.start();
    assert!(!tc.is_stopped());
    tc.stop();
    assert!(tc.is_stopped());
}

#[test]
fn test_search_limits_from_optional_time() {
    let limits = SearchLimits::new(3, None);
    assert_eq!(limits.depth, 3);
    assert!(limits.move_time.is_none());

    let limits = SearchLimits::new(6, Some(Duration::from_millis(50)));
    assert_eq!(limits.move_time, Some(Duration::from_millis(50)));
    assert_eq!(limits.time_control.remaining().map(|r| r <= Duration::from_millis(50)), Some(true));
}

#[test]
fn test_stop_flag_is_shared() {
    let tc = TimeControl::new(None);
    tc.start();
    let flag = tc.stop_flag();
    let clone = tc.clone();
    flag.store(true, std::sync::atomic::Ordering::SeqCst);
    assert!(tc.is_stopped());
    assert!(clone.is_stopped());
}

#[test]
fn test_restart_clears_stop() {
    let tc = TimeControl::new(Some(Duration::from_secs(60)));
    tc.stop();
    tc.start();
    assert!(!tc.is_stopped());
    assert!(!tc.check_time());
}

// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::config::{self, Config};
use iced_snackbar::notifications::{
    Action, CloseReason, LifecycleKind, Manager, ManualClock, NotificationMessage,
    NotificationRequest, Position, Status,
};
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::tempdir;

fn manager_with(config: &Config) -> (Manager, ManualClock) {
    let clock = ManualClock::new();
    (Manager::with_clock(config, clock.clone()), clock)
}

type CloseLog = Rc<RefCell<Vec<(&'static str, CloseReason)>>>;

fn close_log() -> CloseLog {
    Rc::new(RefCell::new(Vec::new()))
}

#[test]
fn oldest_notification_is_evicted_when_position_is_full() {
    let config = Config {
        max_visible: 2,
        ..Config::default()
    };
    let (mut manager, _clock) = manager_with(&config);
    let log = close_log();

    let mut ids = Vec::new();
    for label in ["a", "b", "c"] {
        let log = Rc::clone(&log);
        ids.push(manager.show(
            NotificationRequest::new(label)
                .with_position(Position::TopLeft)
                .on_close(move |reason| log.borrow_mut().push((label, reason))),
        ));
    }

    assert_eq!(manager.bucket(Position::TopLeft).ids(), vec![ids[1], ids[2]]);
    assert_eq!(*log.borrow(), vec![("a", CloseReason::Evicted)]);
}

#[test]
fn paused_head_is_evicted_like_any_other() {
    let config = Config {
        max_visible: 2,
        ..Config::default()
    };
    let (mut manager, _clock) = manager_with(&config);
    let log = close_log();

    let hovered = {
        let log = Rc::clone(&log);
        manager.show(
            NotificationRequest::new("hovered")
                .on_close(move |reason| log.borrow_mut().push(("hovered", reason))),
        )
    };
    manager.handle_message(&NotificationMessage::HoverStart(hovered));
    assert_eq!(manager.get(hovered).map(|r| r.status()), Some(Status::Paused));

    let second = manager.show(NotificationRequest::new("second"));
    let third = manager.show(NotificationRequest::new("third"));

    assert_eq!(*log.borrow(), vec![("hovered", CloseReason::Evicted)]);
    assert_eq!(
        manager.bucket(Position::BottomRight).ids(),
        vec![second, third]
    );
}

#[test]
fn hour_long_notification_outlives_default_cap() {
    let (mut manager, clock) = manager_with(&Config::default());
    let id = manager.show(NotificationRequest::info("long job").with_duration_ms(3_600_000));

    clock.advance_ms(600_000);
    manager.tick();
    assert!(manager.contains(id));

    clock.advance_ms(3_000_000);
    assert_eq!(manager.tick(), 1);
    assert!(!manager.contains(id));
}

#[test]
fn positions_are_independent() {
    let config = Config {
        max_visible: 1,
        ..Config::default()
    };
    let (mut manager, _clock) = manager_with(&config);

    let top = manager.show(NotificationRequest::new("top").with_position(Position::TopCenter));
    let bottom =
        manager.show(NotificationRequest::new("bottom").with_position(Position::BottomCenter));

    assert!(manager.contains(top));
    assert!(manager.contains(bottom));
    assert_eq!(manager.active_buckets().count(), 2);
}

#[test]
fn timed_notification_expires_once() {
    let (mut manager, clock) = manager_with(&Config::default());
    let closes = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&closes);
    let id = manager.show(
        NotificationRequest::info("saved")
            .with_duration_ms(1000)
            .on_close(move |reason| {
                assert_eq!(reason, CloseReason::Expired);
                *counter.borrow_mut() += 1;
            }),
    );

    clock.advance_ms(999);
    assert_eq!(manager.tick(), 0);
    assert!(manager.contains(id));

    clock.advance_ms(1);
    assert_eq!(manager.tick(), 1);
    assert!(!manager.contains(id));

    clock.advance_ms(5000);
    assert_eq!(manager.tick(), 0);
    assert!(!manager.close(id));
    assert_eq!(*closes.borrow(), 1);
}

#[test]
fn hovering_preserves_remaining_time() {
    let (mut manager, clock) = manager_with(&Config::default());
    let id = manager.show(NotificationRequest::new("hover me").with_duration_ms(5000));

    clock.advance_ms(2000);
    manager.handle_message(&NotificationMessage::HoverStart(id));
    assert_eq!(manager.get(id).map(|r| r.status()), Some(Status::Paused));

    clock.advance_ms(60_000);
    manager.tick();
    assert_eq!(manager.get(id).and_then(|r| r.remaining_ms()), Some(3000));

    manager.handle_message(&NotificationMessage::HoverEnd(id));
    clock.advance_ms(2999);
    assert_eq!(manager.tick(), 0);
    clock.advance_ms(1);
    assert_eq!(manager.tick(), 1);
}

#[test]
fn persistent_notification_waits_for_dismissal() {
    let (mut manager, clock) = manager_with(&Config::default());
    let id = manager.show(NotificationRequest::warning("unsaved changes").persistent());

    clock.advance_ms(3_600_000);
    manager.tick();
    assert!(manager.contains(id));
    assert!(!manager.has_running_timers());

    manager.handle_message(&NotificationMessage::Dismiss(id));
    assert!(manager.is_empty());
}

#[test]
fn action_runs_callback_then_closes() {
    let (mut manager, _clock) = manager_with(&Config::default());
    let events = Rc::new(RefCell::new(Vec::new()));
    let on_action = Rc::clone(&events);
    let on_close = Rc::clone(&events);

    let id = manager.show(
        NotificationRequest::error("upload failed")
            .with_action(Action::new("Retry", move |_| {
                on_action.borrow_mut().push("retry");
            }))
            .on_close(move |_| on_close.borrow_mut().push("closed")),
    );

    manager.handle_message(&NotificationMessage::Action(id, 0));

    assert_eq!(*events.borrow(), vec!["retry", "closed"]);
    assert!(!manager.contains(id));
    let kinds: Vec<_> = manager
        .history()
        .for_notification(id)
        .map(|event| event.kind)
        .collect();
    assert_eq!(kinds, vec![LifecycleKind::Shown, LifecycleKind::ActionInvoked]);
}

#[test]
fn close_all_reports_cleared() {
    let (mut manager, _clock) = manager_with(&Config::default());
    let log = close_log();
    for (label, position) in [("a", Position::TopLeft), ("b", Position::BottomRight)] {
        let log = Rc::clone(&log);
        manager.show(
            NotificationRequest::new(label)
                .with_position(position)
                .on_close(move |reason| log.borrow_mut().push((label, reason))),
        );
    }

    assert_eq!(manager.close_all(), 2);
    assert!(manager.is_empty());
    assert!(log
        .borrow()
        .iter()
        .all(|(_, reason)| *reason == CloseReason::ClearedAll));
}

#[test]
fn config_round_trip_drives_manager() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("app").join("notifications.toml");

    let saved = Config {
        max_visible: 3,
        default_position: "top-center".to_string(),
        spacing: 12.0,
        default_duration_ms: 2500,
        ..Config::default()
    };
    config::save_to_path(&saved, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to read config");
    assert_eq!(loaded, saved);

    let (mut manager, clock) = manager_with(&loaded);
    let id = manager.show(NotificationRequest::new("configured"));

    assert_eq!(manager.max_visible(), 3);
    assert_eq!(
        manager.get(id).map(|record| record.position()),
        Some(Position::TopCenter)
    );
    clock.advance_ms(2500);
    assert_eq!(manager.tick(), 1);
}

#[test]
fn invalid_config_file_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("notifications.toml");
    std::fs::write(&path, "max_visible = \"many\"").expect("Failed to write file");

    let loaded = config::load_from_path(&path).expect("Failed to read config");
    assert_eq!(loaded, Config::default());
}

// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::config::Config;
use iced_snackbar::error::Error;
use iced_snackbar::notifications::{
    Handle, Manager, ManualClock, NotificationMessage, NotificationRequest, Position, Scope,
};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn nested_scopes_share_the_provided_manager() {
    let handle = Handle::new(Manager::new());
    let root = Scope::root().provide(&handle);
    let dialog = root.child().child();

    let notifier = dialog.notifier().expect("manager is in scope");
    let first = notifier.info("one").expect("manager is alive");
    let second = notifier.warning("two").expect("manager is alive");

    handle.read(|manager| {
        assert_eq!(manager.len(), 2);
        assert!(manager.contains(first));
        assert!(manager.contains(second));
    });
}

#[test]
fn missing_provider_is_reported() {
    assert_eq!(
        Scope::root().child().notifier().err(),
        Some(Error::NoProvider)
    );
}

#[test]
fn on_close_can_show_a_follow_up() {
    let clock = ManualClock::new();
    let handle = Handle::new(Manager::with_clock(&Config::default(), clock.clone()));
    let follow_up = Rc::new(RefCell::new(None));

    let notifier = handle.notifier();
    let slot = Rc::clone(&follow_up);
    handle.show(
        NotificationRequest::info("uploading")
            .with_duration_ms(500)
            .on_close(move |_| {
                *slot.borrow_mut() = notifier.success("uploaded").ok();
            }),
    );

    clock.advance_ms(500);
    assert_eq!(handle.tick(), 1);

    let id = follow_up.take().expect("follow-up was shown");
    assert!(handle.read(|manager| manager.contains(id)));
}

#[test]
fn listeners_observe_their_position_until_dropped() {
    let handle = Handle::new(Manager::new());
    let sizes = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&sizes);

    let guard = handle.subscribe(Position::TopRight, move |bucket| {
        seen.borrow_mut().push(bucket.len());
    });

    let id = handle.show(NotificationRequest::new("a").with_position(Position::TopRight));
    handle.show(NotificationRequest::new("elsewhere").with_position(Position::BottomLeft));
    handle.handle_message(&NotificationMessage::Dismiss(id));
    drop(guard);
    handle.show(NotificationRequest::new("b").with_position(Position::TopRight));

    assert_eq!(*sizes.borrow(), vec![1, 0]);
}

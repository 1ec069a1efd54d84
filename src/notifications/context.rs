// SPDX-License-Identifier: MPL-2.0
//! Scoped access to a notification manager.
//!
//! Code that wants to raise notifications should not need a reference to
//! the manager threaded through every call. Instead, the application
//! creates one [`Handle`] per scope, provides it on a [`Scope`], and passes
//! the scope down. Consumers ask the scope for a [`Notifier`], which fails
//! with [`Error::NoProvider`] when nothing was provided, so a missing
//! provider is caught at the call site instead of silently dropping
//! feedback.
//!
//! Callbacks (`on_close`, action clicks) triggered through a handle or a
//! notifier run after the manager borrow is released, so they may call
//! back into the same handle. Bucket listeners run during the update and
//! must not.
//!
//! ```
//! use iced_snackbar::notifications::{Handle, Manager, Scope};
//!
//! let handle = Handle::new(Manager::new());
//! let app = Scope::root().provide(&handle);
//! let settings_page = app.child();
//!
//! let notifier = settings_page.notifier().expect("a manager is in scope");
//! let id = notifier.success("Settings saved").expect("manager is alive");
//! assert!(handle.read(|manager| manager.contains(id)));
//!
//! assert!(Scope::root().notifier().is_err());
//! ```

use super::bucket::{Bucket, ListenerId};
use super::manager::{Manager, Message};
use super::position::Position;
use super::record::{CloseReason, NotificationId};
use super::request::{Content, NotificationRequest, Overrides};
use crate::error::{Error, Result};
use log::warn;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Shared ownership of one manager.
#[derive(Clone)]
pub struct Handle {
    manager: Rc<RefCell<Manager>>,
}

impl Handle {
    pub fn new(manager: Manager) -> Self {
        Self {
            manager: Rc::new(RefCell::new(manager)),
        }
    }

    /// Capability for raising notifications without owning the manager.
    #[must_use]
    pub fn notifier(&self) -> Notifier {
        Notifier {
            manager: Rc::downgrade(&self.manager),
        }
    }

    /// Read access to the manager, e.g. for rendering.
    pub fn read<R>(&self, f: impl FnOnce(&Manager) -> R) -> R {
        f(&*self.manager.borrow())
    }

    pub fn show(&self, request: NotificationRequest) -> NotificationId {
        show(&self.manager, request)
    }

    pub fn close(&self, id: NotificationId) -> bool {
        close(&self.manager, id, CloseReason::Dismissed)
    }

    pub fn close_all(&self) -> usize {
        close_all(&self.manager)
    }

    pub fn tick(&self) -> usize {
        let expired = self.manager.borrow_mut().advance();
        let count = expired.len();
        for notification in expired {
            notification.finish();
        }
        count
    }

    pub fn pause(&self, id: NotificationId) -> bool {
        self.manager.borrow_mut().pause(id)
    }

    pub fn resume(&self, id: NotificationId) -> bool {
        self.manager.borrow_mut().resume(id)
    }

    pub fn hover_start(&self, id: NotificationId) -> bool {
        self.manager.borrow_mut().hover_start(id)
    }

    pub fn hover_end(&self, id: NotificationId) -> bool {
        self.manager.borrow_mut().hover_end(id)
    }

    pub fn trigger_action(&self, id: NotificationId, index: usize) -> bool {
        let pending = self.manager.borrow_mut().prepare_action(id, index);
        let Some(pending) = pending else {
            return false;
        };
        pending.run();
        if pending.dismiss {
            close(&self.manager, id, CloseReason::ActionInvoked);
        }
        true
    }

    /// Routes a render-layer message.
    pub fn handle_message(&self, message: &Message) {
        match *message {
            Message::Tick => {
                self.tick();
            }
            Message::Dismiss(id) => {
                self.close(id);
            }
            Message::HoverStart(id) => {
                self.hover_start(id);
            }
            Message::HoverEnd(id) => {
                self.hover_end(id);
            }
            Message::Action(id, index) => {
                self.trigger_action(id, index);
            }
        }
    }

    /// Observes one position. The listener is removed when the guard drops.
    #[must_use = "dropping the guard unsubscribes immediately"]
    pub fn subscribe(
        &self,
        position: Position,
        listener: impl FnMut(&Bucket) + 'static,
    ) -> ListenerGuard {
        let id = self.manager.borrow_mut().subscribe(position, listener);
        ListenerGuard {
            manager: Rc::downgrade(&self.manager),
            id,
        }
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.manager.try_borrow() {
            Ok(manager) => f.debug_tuple("Handle").field(&*manager).finish(),
            Err(_) => f.write_str("Handle(<borrowed>)"),
        }
    }
}

fn show(manager: &RefCell<Manager>, request: NotificationRequest) -> NotificationId {
    let (id, evicted) = manager.borrow_mut().insert(request);
    if let Some(closed) = evicted {
        closed.finish();
    }
    id
}

fn close(manager: &RefCell<Manager>, id: NotificationId, reason: CloseReason) -> bool {
    let closed = manager.borrow_mut().detach(id, reason);
    match closed {
        Some(closed) => {
            closed.finish();
            true
        }
        None => false,
    }
}

fn close_all(manager: &RefCell<Manager>) -> usize {
    let closed = manager.borrow_mut().detach_all();
    let count = closed.len();
    for notification in closed {
        notification.finish();
    }
    count
}

/// Unsubscribes its listener when dropped.
pub struct ListenerGuard {
    manager: Weak<RefCell<Manager>>,
    id: ListenerId,
}

impl ListenerGuard {
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let Some(manager) = self.manager.upgrade() else {
            return;
        };
        match manager.try_borrow_mut() {
            Ok(mut manager) => {
                manager.unsubscribe(self.id);
            }
            Err(_) => warn!("listener guard dropped during a manager update; listener kept"),
        };
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

/// Weak capability to raise and close notifications.
///
/// Every operation fails with [`Error::ProviderDropped`] once the manager
/// has been dropped.
#[derive(Clone)]
pub struct Notifier {
    manager: Weak<RefCell<Manager>>,
}

impl Notifier {
    fn manager(&self) -> Result<Rc<RefCell<Manager>>> {
        self.manager.upgrade().ok_or(Error::ProviderDropped)
    }

    pub fn show(&self, request: NotificationRequest) -> Result<NotificationId> {
        Ok(show(&*self.manager()?, request))
    }

    /// Closes `id`. Unknown or already closed ids are not an error.
    pub fn close(&self, id: NotificationId) -> Result<bool> {
        Ok(close(&*self.manager()?, id, CloseReason::Dismissed))
    }

    pub fn close_all(&self) -> Result<usize> {
        Ok(close_all(&*self.manager()?))
    }

    pub fn success(&self, message: impl Into<Content>) -> Result<NotificationId> {
        self.show(NotificationRequest::success(message))
    }

    pub fn info(&self, message: impl Into<Content>) -> Result<NotificationId> {
        self.show(NotificationRequest::info(message))
    }

    pub fn warning(&self, message: impl Into<Content>) -> Result<NotificationId> {
        self.show(NotificationRequest::warning(message))
    }

    pub fn error(&self, message: impl Into<Content>) -> Result<NotificationId> {
        self.show(NotificationRequest::error(message))
    }

    pub fn success_with(
        &self,
        message: impl Into<Content>,
        overrides: Overrides,
    ) -> Result<NotificationId> {
        self.show(overrides.apply(NotificationRequest::success(message)))
    }

    pub fn info_with(
        &self,
        message: impl Into<Content>,
        overrides: Overrides,
    ) -> Result<NotificationId> {
        self.show(overrides.apply(NotificationRequest::info(message)))
    }

    pub fn warning_with(
        &self,
        message: impl Into<Content>,
        overrides: Overrides,
    ) -> Result<NotificationId> {
        self.show(overrides.apply(NotificationRequest::warning(message)))
    }

    pub fn error_with(
        &self,
        message: impl Into<Content>,
        overrides: Overrides,
    ) -> Result<NotificationId> {
        self.show(overrides.apply(NotificationRequest::error(message)))
    }

    /// Whether the manager is still alive.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.manager.strong_count() > 0
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("connected", &self.is_connected())
            .finish()
    }
}

struct ScopeNode {
    provider: Option<Handle>,
    parent: Option<Rc<ScopeNode>>,
}

/// A node in the application's scope tree.
///
/// Scopes are cheap to clone and are passed explicitly to the code that
/// needs notifications.
#[derive(Clone, Default)]
pub struct Scope {
    node: Option<Rc<ScopeNode>>,
}

impl Scope {
    /// A scope with no manager.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// A child scope whose nearest manager is `handle`.
    #[must_use]
    pub fn provide(&self, handle: &Handle) -> Self {
        Self {
            node: Some(Rc::new(ScopeNode {
                provider: Some(handle.clone()),
                parent: self.node.clone(),
            })),
        }
    }

    /// A child scope inheriting the enclosing manager.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            node: Some(Rc::new(ScopeNode {
                provider: None,
                parent: self.node.clone(),
            })),
        }
    }

    /// The nearest enclosing manager's handle.
    pub fn handle(&self) -> Result<Handle> {
        let mut node = self.node.as_deref();
        while let Some(current) = node {
            if let Some(handle) = &current.provider {
                return Ok(handle.clone());
            }
            node = current.parent.as_deref();
        }
        Err(Error::NoProvider)
    }

    /// Resolves a notifier for the nearest enclosing manager.
    ///
    /// Fails with [`Error::NoProvider`] if no enclosing scope provides one.
    pub fn notifier(&self) -> Result<Notifier> {
        self.handle().map(|handle| handle.notifier())
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut depth = 0;
        let mut node = self.node.as_deref();
        while let Some(current) = node {
            depth += 1;
            node = current.parent.as_deref();
        }
        f.debug_struct("Scope")
            .field("depth", &depth)
            .field("has_provider", &self.handle().is_ok())
            .finish()
    }
}

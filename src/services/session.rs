// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Explicitly passed session context with change notifications.
//!
//! Client-side API for front ends built on this crate; not part of `AppState`.

use super::identity::{IdentityClient, IdentityUser, Session};
use crate::error::AppError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// Session change delivered to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
}

/// Handle returned by [`SessionContext::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Arc<dyn Fn(&AuthEvent) + Send + Sync>;

/// Current session plus a registry of listeners.
#[derive(Default)]
pub struct SessionContext {
    current: RwLock<Option<Session>>,
    subscribers: Mutex<Vec<(SubscriptionId, Callback)>>,
    next_id: AtomicU64,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<Session> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn user(&self) -> Option<IdentityUser> {
        self.session().map(|s| s.user)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session().is_some()
    }

    pub fn subscribe(&self, callback: impl Fn(&AuthEvent) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock_subscribers().push((id, Arc::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.lock_subscribers();
        let before = subscribers.len();
        subscribers.retain(|(sub, _)| *sub != id);
        subscribers.len() != before
    }

    pub fn set(&self, session: Session) {
        self.replace(Some(session.clone()));
        self.notify(&AuthEvent::SignedIn(session));
    }

    pub fn clear(&self) {
        self.replace(None);
        self.notify(&AuthEvent::SignedOut);
    }

    /// Sign in through `client` and publish the new session.
    pub async fn sign_in(
        &self,
        client: &IdentityClient,
        email: &str,
        password: &str,
    ) -> Result<Session, AppError> {
        let session = client.sign_in(email, password).await?;
        self.set(session.clone());
        Ok(session)
    }

    /// Revoke the current session (if any) and clear it.
    ///
    /// The local session is cleared even if revocation fails.
    pub async fn sign_out(&self, client: &IdentityClient) -> Result<(), AppError> {
        let result = match self.session() {
            Some(session) => client.sign_out(&session.access_token).await,
            None => Ok(()),
        };
        self.clear();
        result
    }

    fn replace(&self, session: Option<Session>) {
        match self.current.write() {
            Ok(mut guard) => *guard = session,
            Err(poisoned) => *poisoned.into_inner() = session,
        }
    }

    fn lock_subscribers(&self) -> std::sync::MutexGuard<'_, Vec<(SubscriptionId, Callback)>> {
        match self.subscribers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn notify(&self, event: &AuthEvent) {
        // Snapshot so callbacks may subscribe or unsubscribe.
        let callbacks: Vec<Callback> = self
            .lock_subscribers()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in callbacks {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use uuid::Uuid;

    fn session() -> Session {
        Session {
            access_token: "tok".into(),
            refresh_token: "ref".into(),
            token_type: "bearer".into(),
            expires_in: 3600,
            user: IdentityUser {
                id: Uuid::new_v4(),
                email: Some("ada@example.com".into()),
                user_metadata: None,
            },
        }
    }

    #[test]
    fn test_each_subscriber_notified_once() {
        let ctx = SessionContext::new();
        let a = Arc::new(AtomicUsize::new(0));
        let b = Arc::new(AtomicUsize::new(0));

        let a2 = a.clone();
        ctx.subscribe(move |_| {
            a2.fetch_add(1, Ordering::SeqCst);
        });
        let b2 = b.clone();
        ctx.subscribe(move |_| {
            b2.fetch_add(1, Ordering::SeqCst);
        });

        ctx.set(session());
        assert_eq!(a.load(Ordering::SeqCst), 1);
        assert_eq!(b.load(Ordering::SeqCst), 1);
        assert!(ctx.is_signed_in());
    }

    #[test]
    fn test_unsubscribed_listener_not_called() {
        let ctx = SessionContext::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls2 = calls.clone();
        let id = ctx.subscribe(move |_| {
            calls2.fetch_add(1, Ordering::SeqCst);
        });

        assert!(ctx.unsubscribe(id));
        assert!(!ctx.unsubscribe(id));
        ctx.set(session());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_clear_sends_signed_out() {
        let ctx = SessionContext::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let events2 = events.clone();
        ctx.subscribe(move |event| events2.lock().unwrap().push(event.clone()));

        let s = session();
        ctx.set(s.clone());
        ctx.clear();

        assert!(!ctx.is_signed_in());
        assert_eq!(
            *events.lock().unwrap(),
            vec![AuthEvent::SignedIn(s), AuthEvent::SignedOut]
        );
    }

    #[tokio::test]
    async fn test_sign_out_clears_even_when_provider_unreachable() {
        let ctx = SessionContext::new();
        ctx.set(session());
        let client = IdentityClient::new("http://127.0.0.1:9", "anon");

        assert!(ctx.sign_out(&client).await.is_err());
        assert!(ctx.session().is_none());
    }
}

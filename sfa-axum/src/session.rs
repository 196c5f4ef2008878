//! Per-browser working sets.
//!
//! The product list keeps the last fetched products in memory so that the
//! in-page actions (filtering, sorting, deleting) can operate without going
//! back to the remote service. Each browser is identified by a random id
//! carried in the `sfa_session` cookie.

use crate::{Catalog, Panel};
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponseParts, ResponseParts},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use rustc_hash::FxBuildHasher;
use sfa_core::view::{ListQuery, ProductList};
use std::{convert::Infallible, sync::Arc, time::Duration};
use time::OffsetDateTime;
use tracing::{Level, event};
use uuid::Uuid;

/// The cookie naming a browser's session.
pub(crate) const COOKIE_NAME: &str = "sfa_session";

struct Entry {
    list: Option<ProductList>,
    /// Set by an in-page action; the next list render reuses `list` instead of refetching
    in_page: bool,
    last_seen: OffsetDateTime,
}

impl Entry {
    fn new(now: OffsetDateTime) -> Self {
        Self {
            list: None,
            in_page: false,
            last_seen: now,
        }
    }
}

/// All live sessions.
///
/// Guards into the map are only ever held for the duration of a synchronous
/// closure, never across an `.await`.
#[derive(Clone)]
pub(crate) struct SessionStore {
    entries: Arc<dashmap::DashMap<Uuid, Entry, FxBuildHasher>>,
    ttl: Duration,
}

impl SessionStore {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(dashmap::DashMap::with_hasher(FxBuildHasher)),
            ttl,
        }
    }

    /// Find the session named by `jar`, or open a new one and add its cookie.
    fn resolve(&self, jar: CookieJar) -> (Uuid, CookieJar) {
        let now = OffsetDateTime::now_utc();

        let known = jar
            .get(COOKIE_NAME)
            .and_then(|cookie| cookie.value().parse::<Uuid>().ok())
            .filter(|id| match self.entries.get_mut(id) {
                Some(mut entry) => {
                    entry.last_seen = now;
                    true
                }
                None => false,
            });
        if let Some(id) = known {
            return (id, jar);
        }

        self.evict(now);

        let id = Uuid::new_v4();
        self.entries.insert(id, Entry::new(now));
        event!(Level::DEBUG, session = %id, "opened session");

        let cookie = Cookie::build((COOKIE_NAME, id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        (id, jar.add(cookie))
    }

    /// Drop every session idle for longer than the configured lifetime.
    fn evict(&self, now: OffsetDateTime) {
        self.entries
            .retain(|_, entry| now - entry.last_seen < self.ttl);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The current browser's session, extracted from its cookie.
///
/// Returning it as part of a response sets the cookie when the session is new.
pub(crate) struct BrowserSession {
    id: Uuid,
    store: SessionStore,
    jar: CookieJar,
}

impl BrowserSession {
    /// Consume a pending in-page transition.
    ///
    /// If an in-page action led here, or a delete is still outstanding,
    /// `query` is applied to the working set and a copy of it returned.
    /// Otherwise this is a fresh navigation and the caller should fetch.
    pub(crate) fn resume(&self, query: ListQuery) -> Option<ProductList> {
        let mut entry = self.store.entries.get_mut(&self.id)?;
        let entry = &mut *entry;
        let in_page = std::mem::take(&mut entry.in_page);
        let list = entry.list.as_mut()?;
        if !in_page && !list.delete().is_busy() {
            return None;
        }
        list.set_query(query);
        Some(list.clone())
    }

    /// Replace the working set after a fetch.
    pub(crate) fn replace(&self, list: Option<ProductList>) {
        let mut entry = self
            .store
            .entries
            .entry(self.id)
            .or_insert_with(|| Entry::new(OffsetDateTime::now_utc()));
        entry.list = list;
        entry.in_page = false;
    }

    /// Apply an in-page action to the working set, if there is one.
    ///
    /// The next list render will reuse the working set instead of refetching.
    pub(crate) fn update<R>(&self, action: impl FnOnce(&mut ProductList) -> R) -> Option<R> {
        let mut entry = self.store.entries.get_mut(&self.id)?;
        let entry = &mut *entry;
        let list = entry.list.as_mut()?;
        entry.in_page = true;
        Some(action(list))
    }
}

impl<T: Catalog> FromRequestParts<Panel<T>> for BrowserSession {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &Panel<T>) -> Result<Self, Self::Rejection> {
        let (id, jar) = state.sessions.resolve(CookieJar::from_headers(&parts.headers));
        Ok(Self {
            id,
            store: state.sessions.clone(),
            jar,
        })
    }
}

impl IntoResponseParts for BrowserSession {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.jar.into_response_parts(res)
    }
}

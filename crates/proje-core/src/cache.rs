//! Entity Caches
//!
//! One wholesale-replaced `Vec` per collection. Each reload takes a ticket;
//! only the most recently issued ticket may write, so a slow response can
//! never overwrite the result of a newer reload.

use crate::error::ApiResult;
use crate::models::Entity;

/// Identifies one issued reload
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReloadTicket(u64);

/// What a reload did to the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// Contents replaced with this many entries
    Applied(usize),
    /// Fetch failed; the cache is now empty
    Failed,
    /// A newer reload was issued meanwhile; response dropped
    Stale,
    /// Guest session, nothing fetched; the cache is empty
    Skipped,
}

impl ReloadOutcome {
    pub fn is_failure(self) -> bool {
        matches!(self, ReloadOutcome::Failed)
    }
}

#[derive(Debug, Clone)]
pub struct EntityCache<E> {
    items: Vec<E>,
    issued: u64,
}

impl<E> Default for EntityCache<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            issued: 0,
        }
    }
}

impl<E: Entity> EntityCache<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: u32) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Empty the cache and invalidate any reload still in flight
    pub fn clear(&mut self) {
        self.issued += 1;
        self.items.clear();
    }

    /// Start a reload. Any earlier ticket becomes stale.
    pub fn begin_reload(&mut self) -> ReloadTicket {
        self.issued += 1;
        ReloadTicket(self.issued)
    }

    pub fn is_current(&self, ticket: ReloadTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Apply the response for `ticket`.
    ///
    /// Success replaces the contents; failure empties the cache and is
    /// logged, never propagated.
    pub fn finish_reload(&mut self, ticket: ReloadTicket, result: ApiResult<Vec<E>>) -> ReloadOutcome {
        if !self.is_current(ticket) {
            log::debug!(
                "Dropping stale {} reload (ticket {}, latest {})",
                E::KIND.label(),
                ticket.0,
                self.issued
            );
            return ReloadOutcome::Stale;
        }

        match result {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                ReloadOutcome::Applied(count)
            }
            Err(err) => {
                log::error!("{} list could not be loaded: {}", E::KIND.label(), err);
                self.items.clear();
                ReloadOutcome::Failed
            }
        }
    }

    /// Guest path: nothing is requested and the cache is emptied
    pub fn skip_reload(&mut self) -> ReloadOutcome {
        self.clear();
        ReloadOutcome::Skipped
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::Member;

    fn member(id: u32, name: &str) -> Member {
        Member {
            id,
            first_name: name.to_string(),
            last_name: "Kaya".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: None,
        }
    }

    fn failure() -> ApiResult<Vec<Member>> {
        Err(ApiError::Transport("Failed to fetch".to_string()))
    }

    #[test]
    fn test_successful_reload_replaces_contents() {
        let mut cache = EntityCache::new();
        let t1 = cache.begin_reload();
        cache.finish_reload(t1, Ok(vec![member(1, "Ali"), member(2, "Veli")]));

        let t2 = cache.begin_reload();
        let outcome = cache.finish_reload(t2, Ok(vec![member(3, "Zeynep")]));

        assert_eq!(outcome, ReloadOutcome::Applied(1));
        assert_eq!(cache.items(), &[member(3, "Zeynep")]);
    }

    #[test]
    fn test_failed_reload_empties_cache() {
        let mut cache = EntityCache::new();
        let t1 = cache.begin_reload();
        cache.finish_reload(t1, Ok(vec![member(1, "Ali")]));

        let t2 = cache.begin_reload();
        assert_eq!(cache.finish_reload(t2, failure()), ReloadOutcome::Failed);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_older_response_cannot_overwrite_newer() {
        let mut cache = EntityCache::new();
        let slow = cache.begin_reload();
        let fast = cache.begin_reload();

        assert_eq!(cache.finish_reload(fast, Ok(vec![member(2, "Yeni")])), ReloadOutcome::Applied(1));
        assert_eq!(cache.finish_reload(slow, Ok(vec![member(1, "Eski")])), ReloadOutcome::Stale);
        assert_eq!(cache.items(), &[member(2, "Yeni")]);
    }

    #[test]
    fn test_stale_failure_does_not_empty_cache() {
        let mut cache = EntityCache::new();
        let slow = cache.begin_reload();
        let fast = cache.begin_reload();
        cache.finish_reload(fast, Ok(vec![member(2, "Yeni")]));

        assert_eq!(cache.finish_reload(slow, failure()), ReloadOutcome::Stale);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear_invalidates_in_flight_reload() {
        let mut cache = EntityCache::new();
        let ticket = cache.begin_reload();
        cache.clear();
        assert_eq!(cache.finish_reload(ticket, Ok(vec![member(1, "Ali")])), ReloadOutcome::Stale);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let mut cache = EntityCache::new();
        let ticket = cache.begin_reload();
        cache.finish_reload(ticket, Ok(vec![member(1, "Ali"), member(2, "Veli")]));
        assert_eq!(cache.find(2).map(|m| m.first_name.as_str()), Some("Veli"));
        assert!(cache.find(9).is_none());
    }
}

//! # Favorites list — client-side mirror of the server's state
//!
//! [`Favorites`] holds the ordered list of movies observed in the last
//! successful server response, and guards it against out-of-order response
//! arrival. The mirror is best-effort: nothing beyond "last successful
//! response observed" is promised.
//!
//! ## Why tickets
//!
//! Requests are never cancelled or serialized. Two handlers fired in quick
//! succession can have their responses arrive in either order, and a slow
//! full-list GET must not resurrect an entry that a faster DELETE already
//! removed. Callers take a [`Ticket`] from [`begin`](Favorites::begin) before
//! issuing a request and present it when applying the response:
//!
//! | Method | Transformation | Guard |
//! |--------|----------------|-------|
//! | [`replace`](Favorites::replace) | full snapshot | ignored unless the ticket is newer than every change applied so far |
//! | [`insert`](Favorites::insert) | upsert by title | per-title: ignored if a newer change already touched that title |
//! | [`remove`](Favorites::remove) | filter by title | per-title, as above |
//! | [`update`](Favorites::update) | map-replace by old title | per-title, recorded under both old and new title |
//!
//! Edits on *different* titles commute, so the per-title guard lets two quick
//! deletes both land regardless of response order, while a replayed or
//! overtaken response for the *same* title is dropped. Every method returns
//! whether it applied.

use std::collections::HashMap;

use crate::models::Movie;

/// Monotonic request sequence number handed out by [`Favorites::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Ordered collection of movies mirrored from the last successful read.
#[derive(Clone, Debug, Default)]
pub struct Favorites {
    movies: Vec<Movie>,
    next_ticket: u64,
    /// Ticket of the newest applied change of any kind.
    newest_applied: u64,
    /// Last applied edit ticket per title.
    edits: HashMap<String, u64>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current mirror, in server order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Look up a movie by its title.
    pub fn get(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.title == title)
    }

    /// Take a sequence number for a request about to be issued.
    pub fn begin(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    /// Replace the whole mirror with a fresh server snapshot.
    ///
    /// Ignored when any change with a newer ticket has been applied since this
    /// request was issued; a stale GET response must not clobber local state
    /// that already reflects a later write.
    pub fn replace(&mut self, ticket: Ticket, movies: Vec<Movie>) -> bool {
        if ticket.0 <= self.newest_applied {
            tracing::debug!(ticket = ticket.0, "ignoring stale favorites snapshot");
            return false;
        }
        self.movies = movies;
        self.newest_applied = ticket.0;
        self.edits.clear();
        true
    }

    /// Record a successfully created movie.
    ///
    /// Upserts by title: if a snapshot that already contains the entry raced
    /// ahead of this response, the entry is overwritten in place instead of
    /// duplicated, keeping titles unique.
    pub fn insert(&mut self, ticket: Ticket, movie: Movie) -> bool {
        if self.is_stale_for(ticket, &movie.title) {
            return false;
        }
        self.touch(ticket, &movie.title);
        match self.movies.iter_mut().find(|m| m.title == movie.title) {
            Some(existing) => *existing = movie,
            None => self.movies.push(movie),
        }
        true
    }

    /// Record a successful deletion: filter out exactly the given title.
    pub fn remove(&mut self, ticket: Ticket, title: &str) -> bool {
        if self.is_stale_for(ticket, title) {
            return false;
        }
        self.touch(ticket, title);
        self.movies.retain(|m| m.title != title);
        true
    }

    /// Record a successful update: map-replace the entry at `old_title`.
    ///
    /// Recorded under both the old and the new title, since a rename changes
    /// the entry's identity.
    pub fn update(&mut self, ticket: Ticket, old_title: &str, movie: Movie) -> bool {
        if self.is_stale_for(ticket, old_title) || self.is_stale_for(ticket, &movie.title) {
            return false;
        }
        self.touch(ticket, old_title);
        self.touch(ticket, &movie.title);
        for m in &mut self.movies {
            if m.title == old_title {
                *m = movie;
                return true;
            }
        }
        // Entry vanished (e.g. a newer snapshot no longer carries the old
        // title). The guard already accepted the ticket, so count this as
        // applied without inventing an entry.
        true
    }

    /// Drop everything, including guard history. Used on logout.
    pub fn clear(&mut self) {
        self.movies.clear();
        self.newest_applied = 0;
        self.next_ticket = 0;
        self.edits.clear();
    }

    fn is_stale_for(&self, ticket: Ticket, title: &str) -> bool {
        let last = self.edits.get(title).copied().unwrap_or(0);
        if ticket.0 <= last {
            tracing::debug!(ticket = ticket.0, title, "ignoring stale favorites edit");
            return true;
        }
        false
    }

    fn touch(&mut self, ticket: Ticket, title: &str) {
        self.edits.insert(title.to_string(), ticket.0);
        self.newest_applied = self.newest_applied.max(ticket.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            title: title.to_string(),
            year: 2000,
            genre: "Drama".to_string(),
            rating: 3,
            description: String::new(),
        }
    }

    #[test]
    fn test_replace_and_read() {
        let mut favs = Favorites::new();
        assert!(favs.is_empty());

        let t = favs.begin();
        assert!(favs.replace(t, vec![movie("Alien"), movie("Heat")]));
        assert_eq!(favs.len(), 2);
        assert_eq!(favs.movies()[0].title, "Alien");
        assert!(favs.get("Heat").is_some());
        assert!(favs.get("Blow Out").is_none());
    }

    #[test]
    fn test_insert_appends_in_order() {
        let mut favs = Favorites::new();
        let t1 = favs.begin();
        assert!(favs.insert(t1, movie("Alien")));
        let t2 = favs.begin();
        assert!(favs.insert(t2, movie("Heat")));

        let titles: Vec<&str> = favs.movies().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Alien", "Heat"]);
    }

    #[test]
    fn test_remove_filters_exactly_one_title() {
        let mut favs = Favorites::new();
        let t = favs.begin();
        favs.replace(t, vec![movie("Alien"), movie("Heat"), movie("Ran")]);

        let t = favs.begin();
        assert!(favs.remove(t, "Heat"));

        let titles: Vec<&str> = favs.movies().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Alien", "Ran"]);
    }

    #[test]
    fn test_update_replaces_at_old_title() {
        let mut favs = Favorites::new();
        let t = favs.begin();
        favs.replace(t, vec![movie("Alien"), movie("Heat")]);

        let mut renamed = movie("Aliens");
        renamed.rating = 5;
        let t = favs.begin();
        assert!(favs.update(t, "Alien", renamed));

        let titles: Vec<&str> = favs.movies().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Aliens", "Heat"]);
        assert_eq!(favs.get("Aliens").unwrap().rating, 5);
    }

    #[test]
    fn test_stale_snapshot_does_not_resurrect_deleted_entry() {
        let mut favs = Favorites::new();
        let t = favs.begin();
        favs.replace(t, vec![movie("Alien"), movie("Heat")]);

        // A refresh is issued, then a delete is issued; the delete response
        // arrives first.
        let slow_fetch = favs.begin();
        let fast_delete = favs.begin();
        assert!(favs.remove(fast_delete, "Heat"));

        // The stale snapshot still contains "Heat" and must be dropped.
        assert!(!favs.replace(slow_fetch, vec![movie("Alien"), movie("Heat")]));
        assert!(favs.get("Heat").is_none());

        // A snapshot issued after the delete applies normally.
        let fresh = favs.begin();
        assert!(favs.replace(fresh, vec![movie("Alien")]));
        assert_eq!(favs.len(), 1);
    }

    #[test]
    fn test_out_of_order_deletes_both_apply() {
        let mut favs = Favorites::new();
        let t = favs.begin();
        favs.replace(t, vec![movie("Alien"), movie("Heat")]);

        // Two deletes on different titles, responses swapped.
        let first = favs.begin();
        let second = favs.begin();
        assert!(favs.remove(second, "Heat"));
        assert!(favs.remove(first, "Alien"));
        assert!(favs.is_empty());
    }

    #[test]
    fn test_overtaken_update_on_same_title_is_dropped() {
        let mut favs = Favorites::new();
        let t = favs.begin();
        favs.replace(t, vec![movie("Alien")]);

        let mut first_edit = movie("Alien");
        first_edit.rating = 2;
        let mut second_edit = movie("Alien");
        second_edit.rating = 5;

        let older = favs.begin();
        let newer = favs.begin();
        assert!(favs.update(newer, "Alien", second_edit));
        // The older response arrives last and must not win.
        assert!(!favs.update(older, "Alien", first_edit));
        assert_eq!(favs.get("Alien").unwrap().rating, 5);
    }

    #[test]
    fn test_insert_after_overlapping_snapshot_does_not_duplicate() {
        let mut favs = Favorites::new();

        // An add is issued, then a refresh; the refresh response (which
        // already includes the new entry) lands first.
        let add = favs.begin();
        let fetch = favs.begin();
        assert!(favs.replace(fetch, vec![movie("Alien")]));
        assert!(favs.insert(add, movie("Alien")));

        assert_eq!(favs.len(), 1);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut favs = Favorites::new();
        let t = favs.begin();
        favs.replace(t, vec![movie("Alien")]);

        favs.clear();
        assert!(favs.is_empty());

        // Tickets restart and a fresh snapshot applies.
        let t = favs.begin();
        assert!(favs.replace(t, vec![movie("Heat")]));
        assert_eq!(favs.len(), 1);
    }
}

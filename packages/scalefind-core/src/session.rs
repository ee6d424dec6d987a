//! # Query Session
//!
//! The per-page query state: input text, sort key, current page and the match list
//! they produce. Every input or sort change recomputes the match list from scratch
//! and resets to page 1; navigation moves one page at a time.
//!
//! ## Outcomes
//! - [`QueryOutcome::NeedsQuery`] - no valid token in the input; show the prompt
//! - [`QueryOutcome::NoMatches`] - valid tokens, but no scale contains them all
//! - [`QueryOutcome::Results`] - at least one match
//!
//! Only `Results` has pages. In the other states the match list is empty, navigation
//! is disabled and the indicator reads `0 / 0`.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use scalefind::{Catalog, QueryOutcome, ScaleEntry, SearchSession};
//!
//! let catalog = Arc::new(Catalog::from_entries([
//!     ("A", ScaleEntry::with_notes(["1/1", "3/2"])),
//!     ("B", ScaleEntry::with_notes(["1/1", "5/4"])),
//! ]));
//! let mut session = SearchSession::new(catalog);
//!
//! assert_eq!(session.set_query("1/1"), QueryOutcome::Results);
//! assert_eq!(session.page_items(), &["A", "B"]);
//! assert_eq!(session.page_indicator(), "1 / 1");
//! ```

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::matcher::find_scales;
use crate::paginate::{Paginator, PAGE_SIZE};
use crate::settings::Settings;
use crate::sort::{sort_scales, SortMethod};
use crate::tokenizer::{clean_tokens, tokenize};

/// What the results pane should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryOutcome {
    NeedsQuery,
    NoMatches,
    Results,
}

/// Serializable snapshot of the session, for UI layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub query: String,
    pub sort: SortMethod,
    pub outcome: QueryOutcome,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub indicator: String,
    pub has_prev: bool,
    pub has_next: bool,
    pub items: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    catalog: Arc<Catalog>,
    page_size: usize,
    query: String,
    sort: SortMethod,
    page: usize,
    hits: Vec<String>,
    outcome: QueryOutcome,
}

impl SearchSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            page_size: PAGE_SIZE,
            query: String::new(),
            sort: SortMethod::default(),
            page: 1,
            hits: Vec::new(),
            outcome: QueryOutcome::NeedsQuery,
        }
    }

    /// Session using the page size and default sort from `settings`.
    pub fn with_settings(catalog: Arc<Catalog>, settings: &Settings) -> Self {
        Self {
            page_size: settings.page_size.max(1),
            sort: settings.default_sort,
            ..Self::new(catalog)
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortMethod {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn outcome(&self) -> QueryOutcome {
        self.outcome
    }

    /// The full ordered match list.
    pub fn hits(&self) -> &[String] {
        &self.hits
    }

    /// Replace the query text and recompute the matches.
    pub fn set_query(&mut self, text: &str) -> QueryOutcome {
        self.query = text.to_string();
        self.refresh()
    }

    /// Change the sort key. The match set is recomputed for the same query, so only
    /// its order changes, and the page goes back to 1.
    pub fn set_sort(&mut self, method: SortMethod) -> QueryOutcome {
        self.sort = method;
        self.refresh()
    }

    /// [`SearchSession::set_sort`] from a selector value; unknown values mean `name`.
    pub fn set_sort_name(&mut self, name: &str) -> QueryOutcome {
        self.set_sort(SortMethod::from_name(name))
    }

    /// Click-through on a related scale: search for its notes.
    ///
    /// Returns `false` and leaves the session untouched when `name` is not in the
    /// catalog.
    pub fn follow_related(&mut self, name: &str) -> bool {
        let Some(entry) = self.catalog.get(name) else {
            log::debug!("related scale {:?} not in catalog", name);
            return false;
        };
        let query = entry.notes.join(" ");
        self.set_query(&query);
        true
    }

    /// Move forward one page. Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Move back one page. Returns whether the page changed.
    pub fn prev_page(&mut self) -> bool {
        if self.has_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump straight to `page`, clamped into range. Used by non-interactive callers.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = self.paginator().clamp(page);
    }

    pub fn total_pages(&self) -> usize {
        self.paginator().total_pages()
    }

    pub fn page_items(&self) -> &[String] {
        self.paginator().slice(&self.hits, self.page)
    }

    pub fn has_prev(&self) -> bool {
        self.paginator().has_prev(self.page)
    }

    pub fn has_next(&self) -> bool {
        self.paginator().has_next(self.page)
    }

    /// `"{page} / {total}"`, or `"0 / 0"` outside the results state.
    pub fn page_indicator(&self) -> String {
        self.paginator().indicator(self.page)
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            query: self.query.clone(),
            sort: self.sort,
            outcome: self.outcome,
            page: self.page,
            total_pages: self.total_pages(),
            total_matches: self.hits.len(),
            indicator: self.page_indicator(),
            has_prev: self.has_prev(),
            has_next: self.has_next(),
            items: self.page_items().to_vec(),
        }
    }

    fn paginator(&self) -> Paginator {
        Paginator::new(self.hits.len(), self.page_size)
    }

    fn refresh(&mut self) -> QueryOutcome {
        self.page = 1;
        let tokens = tokenize(&self.query);

        if clean_tokens(&tokens).is_empty() {
            self.hits.clear();
            self.outcome = QueryOutcome::NeedsQuery;
            return self.outcome;
        }

        let hits = find_scales(&self.catalog, &tokens);
        if hits.is_empty() {
            self.hits.clear();
            self.outcome = QueryOutcome::NoMatches;
        } else {
            self.hits = sort_scales(&self.catalog, hits, self.sort);
            self.outcome = QueryOutcome::Results;
        }
        log::debug!(
            "query {:?} sorted by {}: {} matches",
            self.query,
            self.sort,
            self.hits.len()
        );
        self.outcome
    }
}

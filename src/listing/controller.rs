//! Per-page listing state: fetched records, filters and the derived view.
//!
//! [`ListingController`] owns the in-memory copy of one collection for as long
//! as the page that mounted it is shown. Every mutation of the source records or
//! of a filter input recomputes the filtered view immediately, so readers never
//! observe a stale `filtered` list.
//!
//! # Recompute Algorithm
//!
//! 1. Start from the source records, in store order
//! 2. Keep records where the lower-cased search text occurs in a search field
//! 3. Keep records whose category equals the selected category exactly
//! 4. Keep records whose difficulty equals the selected difficulty exactly
//!
//! Steps 2-4 are skipped when their input is empty or `All`, and they commute.
//!
//! # Example
//!
//! ```
//! use signbridge::content::Items;
//! use signbridge::domain::GestureRecord;
//! use signbridge::listing::{FacetFilter, ListingController};
//!
//! let mut hello = GestureRecord::new("g1");
//! hello.gesture_name = Some("Hello".into());
//! hello.gesture_category = Some("Greetings".into());
//! let mut thanks = GestureRecord::new("g2");
//! thanks.gesture_name = Some("Thank you".into());
//! thanks.gesture_category = Some("Courtesy".into());
//!
//! let mut gestures = ListingController::new();
//! gestures.load(Items { items: vec![hello, thanks] });
//! assert_eq!(gestures.available_categories(), ["Greetings", "Courtesy"]);
//!
//! gestures.set_category(FacetFilter::parse("Courtesy"));
//! assert_eq!(gestures.filtered()[0].id, "g2");
//! ```

use super::facets::distinct_facets;
use super::filters::{FacetFilter, ListingFilters};
use super::listable::Listable;
use super::search::matches_any;
use crate::content::Items;
use crate::domain::error::SignBridgeError;

/// Progress of the read backing a listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Not mounted, nothing requested.
    #[default]
    Idle,
    /// A read is outstanding.
    Loading,
    /// The last read succeeded; the source may still be empty.
    Loaded,
    /// The last read failed with the given message.
    Failed(String),
}

/// Filterable in-memory view over one fetched collection.
#[derive(Debug, Clone)]
pub struct ListingController<T> {
    source: Vec<T>,
    filters: ListingFilters,
    filtered: Vec<T>,
    categories: Vec<String>,
    difficulties: Vec<String>,
    status: LoadStatus,
}

impl<T: Listable> Default for ListingController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Listable> ListingController<T> {
    /// Creates an idle controller with no records and default filters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            source: Vec::new(),
            filters: ListingFilters {
                search_text: String::new(),
                category: FacetFilter::All,
                difficulty: FacetFilter::All,
            },
            filtered: Vec::new(),
            categories: Vec::new(),
            difficulties: Vec::new(),
            status: LoadStatus::Idle,
        }
    }

    /// Marks a read as outstanding. Already loaded records stay visible.
    pub fn begin_loading(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Replaces the source with freshly read records.
    ///
    /// Facets are re-derived from the new records and the filtered view is
    /// recomputed against the current filters. A category or difficulty
    /// selection the new records no longer carry falls back to `All`.
    pub fn load(&mut self, items: Items<T>) {
        self.source = items.items;
        self.status = LoadStatus::Loaded;
        self.categories = distinct_facets(self.source.iter().map(Listable::category));
        self.difficulties = distinct_facets(self.source.iter().map(Listable::difficulty));

        if !self.filters.category.is_offered(&self.categories) {
            tracing::debug!(category = %self.filters.category.as_str(), "category no longer offered, resetting");
            self.filters.category = FacetFilter::All;
        }
        if !self.filters.difficulty.is_offered(&self.difficulties) {
            tracing::debug!(difficulty = %self.filters.difficulty.as_str(), "difficulty no longer offered, resetting");
            self.filters.difficulty = FacetFilter::All;
        }

        tracing::debug!(
            records = self.source.len(),
            categories = self.categories.len(),
            difficulties = self.difficulties.len(),
            "listing loaded"
        );

        self.recompute();
    }

    /// Records a failed read. The previous source is left untouched.
    pub fn fail(&mut self, error: &SignBridgeError) {
        tracing::debug!(error = %error, "listing read failed");
        self.status = LoadStatus::Failed(error.to_string());
    }

    /// Drops every record and filter, returning to the idle state.
    pub fn clear(&mut self) {
        self.source.clear();
        self.filtered.clear();
        self.categories.clear();
        self.difficulties.clear();
        self.filters = ListingFilters::default();
        self.status = LoadStatus::Idle;
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filters.search_text = text.into();
        self.recompute();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.filters.search_text.push(c);
        self.recompute();
    }

    /// Removes the last search character; no-op on an empty search.
    pub fn pop_search_char(&mut self) {
        if self.filters.search_text.pop().is_some() {
            self.recompute();
        }
    }

    pub fn set_category(&mut self, category: FacetFilter) {
        self.filters.category = category;
        self.recompute();
    }

    pub fn set_difficulty(&mut self, difficulty: FacetFilter) {
        self.filters.difficulty = difficulty;
        self.recompute();
    }

    /// Steps the category selection through `All` and the available categories.
    pub fn cycle_category(&mut self, forward: bool) {
        let next = self.filters.category.cycle(&self.categories, forward);
        self.set_category(next);
    }

    /// Steps the difficulty selection through `All` and the available difficulties.
    pub fn cycle_difficulty(&mut self, forward: bool) {
        let next = self.filters.difficulty.cycle(&self.difficulties, forward);
        self.set_difficulty(next);
    }

    /// Resets search text, category and difficulty to their defaults.
    pub fn clear_filters(&mut self) {
        self.filters = ListingFilters::default();
        self.recompute();
    }

    /// All records from the last successful read, in store order.
    #[must_use]
    pub fn source(&self) -> &[T] {
        &self.source
    }

    /// Records passing every active filter, in store order.
    #[must_use]
    pub fn filtered(&self) -> &[T] {
        &self.filtered
    }

    #[must_use]
    pub const fn filters(&self) -> &ListingFilters {
        &self.filters
    }

    /// Distinct categories of the loaded records, in first-occurrence order.
    #[must_use]
    pub fn available_categories(&self) -> &[String] {
        &self.categories
    }

    /// Distinct difficulties of the loaded records, in first-occurrence order.
    #[must_use]
    pub fn available_difficulties(&self) -> &[String] {
        &self.difficulties
    }

    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    fn recompute(&mut self) {
        let _span = tracing::debug_span!("listing_recompute",
            total = self.source.len(),
            search_len = self.filters.search_text.len(),
            category = %self.filters.category.as_str(),
            difficulty = %self.filters.difficulty.as_str()
        )
        .entered();

        let needle = self.filters.search_text.to_lowercase();
        let filters = &self.filters;

        self.filtered = self
            .source
            .iter()
            .filter(|record| matches_any(&needle, record.search_fields()))
            .filter(|record| filters.category.admits(record.category()))
            .filter(|record| filters.difficulty.admits(record.difficulty()))
            .cloned()
            .collect();

        tracing::debug!(filtered = self.filtered.len(), "listing filters applied");
    }
}

/// Kind-independent access to a listing's filter inputs and counts.
///
/// Lets the application layer drive whichever listing the current page shows
/// without knowing its record type.
pub trait ListingHandle {
    fn filters(&self) -> &ListingFilters;
    fn status(&self) -> &LoadStatus;
    fn source_len(&self) -> usize;
    fn filtered_len(&self) -> usize;
    fn available_categories(&self) -> &[String];
    fn available_difficulties(&self) -> &[String];
    fn begin_loading(&mut self);
    fn fail(&mut self, error: &SignBridgeError);
    fn clear(&mut self);
    fn set_search_text(&mut self, text: String);
    fn push_search_char(&mut self, c: char);
    fn pop_search_char(&mut self);
    fn cycle_category(&mut self, forward: bool);
    fn cycle_difficulty(&mut self, forward: bool);
    fn clear_filters(&mut self);
}

impl<T: Listable> ListingHandle for ListingController<T> {
    fn filters(&self) -> &ListingFilters {
        Self::filters(self)
    }

    fn status(&self) -> &LoadStatus {
        Self::status(self)
    }

    fn source_len(&self) -> usize {
        self.source.len()
    }

    fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    fn available_categories(&self) -> &[String] {
        Self::available_categories(self)
    }

    fn available_difficulties(&self) -> &[String] {
        Self::available_difficulties(self)
    }

    fn begin_loading(&mut self) {
        Self::begin_loading(self);
    }

    fn fail(&mut self, error: &SignBridgeError) {
        Self::fail(self, error);
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn set_search_text(&mut self, text: String) {
        Self::set_search_text(self, text);
    }

    fn push_search_char(&mut self, c: char) {
        Self::push_search_char(self, c);
    }

    fn pop_search_char(&mut self) {
        Self::pop_search_char(self);
    }

    fn cycle_category(&mut self, forward: bool) {
        Self::cycle_category(self, forward);
    }

    fn cycle_difficulty(&mut self, forward: bool) {
        Self::cycle_difficulty(self, forward);
    }

    fn clear_filters(&mut self) {
        Self::clear_filters(self);
    }
}

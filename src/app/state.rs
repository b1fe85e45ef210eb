//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It owns the two listing controllers, the current page, selection and input
//! mode, and the bookkeeping that ties outstanding store reads to the pages
//! that requested them.
//!
//! # Page Lifecycle
//!
//! - **Mount**: entering a page that shows a collection marks its controller
//!   `Loading` and, once web access is granted, issues a read with a fresh ticket
//! - **Dismount**: leaving the page clears the controller and forgets its ticket
//! - **Receive**: a response is applied only if its ticket is the outstanding
//!   one for its collection; anything else is stale and dropped
//!
//! # Example
//!
//! ```
//! use signbridge::app::{AppState, Page};
//! use signbridge::content::CrudService;
//! use signbridge::ui::Theme;
//!
//! let crud = CrudService::new("http://localhost:8080/api", None);
//! let mut state = AppState::new(crud, Page::Gestures, Theme::default());
//! let actions = state.mount()?;
//! assert!(actions.is_empty()); // web access not granted yet
//! assert!(state.gestures.is_loading());
//! # Ok::<(), signbridge::SignBridgeError>(())
//! ```

use super::actions::Action;
use super::modes::{InputMode, Page, SearchFocus, WebAccess};
use crate::content::{Collection, CrudService, FetchResponse, FetchTicket};
use crate::domain::error::{Result, SignBridgeError};
use crate::domain::{time_ago, GestureRecord, Record, UseCaseRecord};
use crate::listing::{
    highlight_ranges, FacetFilter, Listable, ListingController, ListingHandle, LoadStatus,
};
use crate::ui::copy;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailPanel, DifficultyTier, DisplayItem, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo,
    SearchBarInfo, TabInfo, UIViewModel,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Number of use cases featured on the home page.
const FEATURED_COUNT: usize = 3;

/// Rows taken by chrome on listing pages: blank, header, border, filter bar,
/// border, footer.
const LISTING_CHROME_ROWS: usize = 6;

/// Additional rows taken by the search box.
const SEARCH_BAR_ROWS: usize = 3;

/// Central application state container.
///
/// Mutated by the event handler in response to user input and host events.
/// View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Page currently shown.
    pub page: Page,

    /// Gesture library, mounted by [`Page::Gestures`].
    pub gestures: ListingController<GestureRecord>,

    /// Use cases, mounted by [`Page::UseCases`] and [`Page::Home`].
    pub use_cases: ListingController<UseCaseRecord>,

    /// Zero-based index of the selected row within the page's visible records.
    ///
    /// Clamped after every filter change. Wraps around during navigation.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Whether the host allows web requests.
    pub web_access: WebAccess,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    crud: CrudService,

    /// Last ticket handed out. Tickets start at 1.
    last_ticket: u64,

    /// Outstanding ticket per mounted collection.
    pending: HashMap<Collection, u64>,
}

impl AppState {
    /// Creates state showing `page`, with nothing mounted yet.
    ///
    /// Call [`mount`](Self::mount) to start loading the page's collection.
    #[must_use]
    pub fn new(crud: CrudService, page: Page, theme: Theme) -> Self {
        Self {
            page,
            gestures: ListingController::new(),
            use_cases: ListingController::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            web_access: WebAccess::Pending,
            theme,
            crud,
            last_ticket: 0,
            pending: HashMap::new(),
        }
    }

    /// The content store client.
    #[must_use]
    pub const fn crud(&self) -> &CrudService {
        &self.crud
    }

    /// Outstanding ticket for `collection`, if a read is in flight.
    #[must_use]
    pub fn pending_ticket(&self, collection: Collection) -> Option<u64> {
        self.pending.get(&collection).copied()
    }

    /// Kind-independent view of a collection's controller.
    #[must_use]
    pub fn listing(&self, collection: Collection) -> &dyn ListingHandle {
        match collection {
            Collection::Gestures => &self.gestures,
            Collection::UseCases => &self.use_cases,
        }
    }

    fn listing_mut(&mut self, collection: Collection) -> &mut dyn ListingHandle {
        match collection {
            Collection::Gestures => &mut self.gestures,
            Collection::UseCases => &mut self.use_cases,
        }
    }

    /// Collection whose filters the current page exposes.
    #[must_use]
    pub fn active_listing(&self) -> Option<Collection> {
        self.page.collection().filter(|_| self.page.is_listing())
    }

    /// Starts loading the current page's collection.
    ///
    /// Every call allocates a new ticket, so a second mount or a refresh
    /// supersedes any read already in flight. Until web access is granted the
    /// controller is only marked `Loading`; once denied it is marked failed.
    ///
    /// # Errors
    ///
    /// Propagates request construction errors from the CRUD accessor.
    pub fn mount(&mut self) -> Result<Vec<Action>> {
        let Some(collection) = self.page.collection() else {
            return Ok(vec![]);
        };

        let _span = tracing::debug_span!("mount",
            page = ?self.page,
            collection = %collection,
            web_access = ?self.web_access
        )
        .entered();

        match self.web_access {
            WebAccess::Pending => {
                tracing::debug!("web access pending, deferring read");
                self.listing_mut(collection).begin_loading();
                Ok(vec![])
            }
            WebAccess::Denied => {
                self.listing_mut(collection).fail(&SignBridgeError::Config(
                    "web access permission was denied".to_string(),
                ));
                Ok(vec![])
            }
            WebAccess::Granted => {
                let ticket = self.last_ticket + 1;
                let request = self.crud.list_request(collection.id(), ticket)?;

                self.last_ticket = ticket;
                if let Some(previous) = self.pending.insert(collection, ticket) {
                    tracing::debug!(previous = previous, "superseding outstanding read");
                }
                self.listing_mut(collection).begin_loading();

                tracing::debug!(ticket = ticket, "read issued");
                Ok(vec![Action::FetchCollection(request)])
            }
        }
    }

    /// Releases the current page's collection: its records, filters and ticket.
    pub fn dismount(&mut self) {
        let Some(collection) = self.page.collection() else {
            return;
        };

        self.listing_mut(collection).clear();
        if let Some(ticket) = self.pending.remove(&collection) {
            tracing::debug!(collection = %collection, ticket = ticket, "forgot outstanding read");
        }
    }

    /// Leaves the current page and mounts `page`.
    ///
    /// Selection and search mode are reset. Navigating to the page already
    /// shown is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`mount`](Self::mount).
    pub fn navigate(&mut self, page: Page) -> Result<Vec<Action>> {
        if page == self.page {
            return Ok(vec![]);
        }

        tracing::debug!(from = ?self.page, to = ?page, "navigating");
        self.dismount();
        self.page = page;
        self.selected_index = 0;
        self.input_mode = InputMode::Normal;
        self.mount()
    }

    /// Records the host's answer to the web access request.
    ///
    /// A grant re-mounts the current page so its read is finally issued.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`mount`](Self::mount).
    pub fn set_web_access(&mut self, granted: bool) -> Result<Vec<Action>> {
        self.web_access = if granted {
            WebAccess::Granted
        } else {
            WebAccess::Denied
        };
        tracing::debug!(web_access = ?self.web_access, "web access answered");
        self.mount()
    }

    /// Applies a completed read if its ticket is still outstanding.
    ///
    /// # Returns
    ///
    /// `true` if the response was applied (as records or as a failure), `false`
    /// if it was stale or for an unknown collection.
    pub fn receive(&mut self, ticket: &FetchTicket, response: &FetchResponse) -> bool {
        let _span = tracing::debug_span!("receive",
            collection = %ticket.collection_id,
            ticket = ticket.ticket,
            status = response.status
        )
        .entered();

        let Some(collection) = Collection::from_id(&ticket.collection_id) else {
            tracing::debug!("response for unknown collection discarded");
            return false;
        };

        if self.pending.get(&collection) != Some(&ticket.ticket) {
            tracing::debug!(
                outstanding = ?self.pending.get(&collection),
                "stale response discarded"
            );
            return false;
        }
        self.pending.remove(&collection);

        match collection {
            Collection::Gestures => apply_response(&self.crud, &mut self.gestures, collection, response),
            Collection::UseCases => apply_response(&self.crud, &mut self.use_cases, collection, response),
        }

        self.clamp_selection();
        true
    }

    /// Runs `edit` against the current page's listing and re-clamps the selection.
    ///
    /// # Returns
    ///
    /// `false` without calling `edit` if the page has no listing.
    pub fn edit_listing(&mut self, edit: impl FnOnce(&mut dyn ListingHandle)) -> bool {
        let Some(collection) = self.active_listing() else {
            return false;
        };

        edit(self.listing_mut(collection));
        self.clamp_selection();
        true
    }

    /// Number of selectable rows on the current page.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        match self.page {
            Page::Gestures => self.gestures.filtered().len(),
            Page::UseCases => self.use_cases.filtered().len(),
            Page::Home => self.use_cases.source().len().min(FEATURED_COUNT),
            Page::About => 0,
        }
    }

    /// Moves selection down by one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection up by one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        self.selected_index = if len == 0 {
            0
        } else {
            self.selected_index.min(len - 1)
        };
    }

    /// Search text of the current listing, or empty on static pages.
    #[must_use]
    pub fn search_text(&self) -> &str {
        self.active_listing()
            .map_or("", |c| self.listing(c).filters().search_text.as_str())
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        self.compute_viewmodel_at(rows, cols, Utc::now())
    }

    /// Like [`compute_viewmodel`](Self::compute_viewmodel) with an explicit clock
    /// for relative timestamps.
    #[must_use]
    pub fn compute_viewmodel_at(&self, rows: usize, cols: usize, now: DateTime<Utc>) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", page = ?self.page, rows = rows, cols = cols)
            .entered();

        let mut vm = UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            filter_bar: self.compute_filter_bar(),
            sections: vec![],
            display_items: vec![],
            selected_index: 0,
            detail: None,
            empty_state: None,
            footer: self.compute_footer(),
        };

        match self.page {
            Page::Home => self.fill_home(&mut vm, now),
            Page::About => vm.sections = copy::ABOUT.to_vec(),
            Page::Gestures => {
                let available = self.calculate_available_rows(rows);
                self.fill_listing(
                    &mut vm,
                    &self.gestures,
                    available,
                    now,
                    |gesture, _, query| gesture_item(gesture, query),
                    gesture_detail,
                );
            }
            Page::UseCases => {
                let available = self.calculate_available_rows(rows);
                self.fill_listing(&mut vm, &self.use_cases, available, now, use_case_item, use_case_detail);
            }
        }

        vm
    }

    fn fill_home(&self, vm: &mut UIViewModel, now: DateTime<Utc>) {
        vm.sections = copy::HOME.to_vec();

        if let LoadStatus::Failed(message) = self.use_cases.status() {
            vm.empty_state = Some(unavailable(message));
            return;
        }

        let featured = &self.use_cases.source()[..self.visible_len()];
        if featured.is_empty() {
            return;
        }

        vm.sections.push(copy::FEATURED);
        vm.display_items = featured
            .iter()
            .enumerate()
            .map(|(index, use_case)| {
                let mut item = use_case_item(use_case, index, "");
                item.is_selected = index == self.selected_index;
                item
            })
            .collect();
        vm.selected_index = self.selected_index;
        vm.detail = featured
            .get(self.selected_index)
            .map(|use_case| use_case_detail(use_case, now));
    }

    /// Fills the list window, detail panel and empty state of a listing page.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Center the window around the selected index
    /// 2. Shift it back if it would run past the end of the list
    /// 3. Report the selection relative to the window start
    fn fill_listing<T: Listable>(
        &self,
        vm: &mut UIViewModel,
        listing: &ListingController<T>,
        available_rows: usize,
        now: DateTime<Utc>,
        to_item: impl Fn(&T, usize, &str) -> DisplayItem,
        to_detail: fn(&T, DateTime<Utc>) -> DetailPanel,
    ) {
        let noun = self.active_listing().map_or("records", Collection::noun);

        if let Some(empty) = listing_empty_state(listing, noun) {
            vm.empty_state = Some(empty);
            return;
        }

        let filtered = listing.filtered();
        let available_rows = available_rows.max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(filtered.len());
        if visible_end - visible_start < available_rows && filtered.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let query = listing.filters().search_text.as_str();
        vm.display_items = filtered[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative, record)| {
                let absolute = visible_start + relative;
                let mut item = to_item(record, absolute, query);
                item.is_selected = absolute == self.selected_index;
                item
            })
            .collect();
        vm.selected_index = self.selected_index.saturating_sub(visible_start);
        vm.detail = filtered.get(self.selected_index).map(|record| to_detail(record, now));
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" {}  {} ", copy::BRAND, self.page.route()),
            tabs: Page::ALL
                .iter()
                .map(|page| TabInfo {
                    label: format!("{} {}", page.index() + 1, page.title()),
                    is_active: *page == self.page,
                })
                .collect(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.page) {
            (InputMode::Search(SearchFocus::Typing), _) => {
                "ESC: clear search  Enter: browse results  Ctrl+n/p: navigate  Type to filter"
            }
            (InputMode::Search(SearchFocus::Navigating), _) => {
                "ESC: clear search  /: edit query  j/k: navigate  c/d: facets  x: clear filters"
            }
            (InputMode::Normal, Page::Gestures) => {
                "j/k: navigate  /: search  c/d: category/difficulty  x: clear  r: refresh  Tab: page  q: quit"
            }
            (InputMode::Normal, Page::UseCases) => {
                "j/k: navigate  /: search  x: clear  r: refresh  Tab: page  q: quit"
            }
            (InputMode::Normal, Page::Home) => "j/k: featured  Tab/1-4: pages  r: refresh  q: quit",
            (InputMode::Normal, Page::About) => "Tab/1-4: pages  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let InputMode::Search(focus) = self.input_mode else {
            return None;
        };

        let placeholder = match self.page {
            Page::Gestures => "Search by name or translation...",
            _ => "Search by title or summary...",
        };

        Some(SearchBarInfo {
            query: self.search_text().to_string(),
            placeholder: placeholder.to_string(),
            is_typing: focus == SearchFocus::Typing,
        })
    }

    fn compute_filter_bar(&self) -> Option<FilterBarInfo> {
        let collection = self.active_listing()?;
        let listing = self.listing(collection);
        let filters = listing.filters();

        let (category, difficulty) = match collection {
            Collection::Gestures => (
                Some(facet_label(&filters.category, "All Categories")),
                Some(facet_label(&filters.difficulty, "All Levels")),
            ),
            Collection::UseCases => (None, None),
        };

        Some(FilterBarInfo {
            category,
            difficulty,
            summary: format!(
                "Showing {} of {} {}",
                listing.filtered_len(),
                listing.source_len(),
                collection.noun()
            ),
        })
    }

    /// Rows left for list entries after chrome on listing pages.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(LISTING_CHROME_ROWS),
            InputMode::Search(_) => total_rows.saturating_sub(LISTING_CHROME_ROWS + SEARCH_BAR_ROWS),
        }
    }
}

/// Decodes `response` into `controller`, recording decode and status errors.
fn apply_response<T: Listable>(
    crud: &CrudService,
    controller: &mut ListingController<T>,
    collection: Collection,
    response: &FetchResponse,
) {
    match crud.read_all::<T>(collection.id(), response) {
        Ok(items) => controller.load(items),
        Err(error) => {
            tracing::warn!(collection = %collection, error = %error, "collection read failed");
            controller.fail(&error);
        }
    }
}

fn listing_empty_state<T: Listable>(listing: &ListingController<T>, noun: &str) -> Option<EmptyState> {
    match listing.status() {
        LoadStatus::Failed(message) => Some(unavailable(message)),
        LoadStatus::Idle | LoadStatus::Loading if listing.source().is_empty() => Some(EmptyState {
            message: format!("Loading {noun}…"),
            subtitle: String::new(),
            is_error: false,
        }),
        _ if listing.filtered().is_empty() => {
            let subtitle = if listing.source().is_empty() {
                "The content store has none yet"
            } else {
                "Try adjusting your filters or search terms"
            };
            Some(EmptyState {
                message: format!("No {noun} found"),
                subtitle: subtitle.to_string(),
                is_error: false,
            })
        }
        _ => None,
    }
}

fn unavailable(message: &str) -> EmptyState {
    EmptyState {
        message: "Content store unavailable".to_string(),
        subtitle: message.to_string(),
        is_error: true,
    }
}

fn facet_label(filter: &FacetFilter, all_label: &str) -> String {
    match filter {
        FacetFilter::All => all_label.to_string(),
        FacetFilter::Value(value) => value.clone(),
    }
}

fn updated_label(record: &impl Record, now: DateTime<Utc>) -> Option<String> {
    record
        .touched_at()
        .map(|at| format!("Updated {}", time_ago(at, now)))
}

/// Match ranges within an optional field; placeholders never highlight.
fn field_ranges(field: Option<&str>, query: &str) -> Vec<(usize, usize)> {
    field.map_or_else(Vec::new, |text| highlight_ranges(text, query))
}

fn gesture_item(gesture: &GestureRecord, query: &str) -> DisplayItem {
    let title = gesture
        .gesture_name
        .clone()
        .unwrap_or_else(|| "Untitled gesture".to_string());

    // The translation is shown quoted, so its ranges shift past the opening quote.
    let subtitle_ranges = field_ranges(gesture.text_translation.as_deref(), query)
        .into_iter()
        .map(|(start, end)| (start + 1, end + 1))
        .collect();

    DisplayItem {
        highlight_ranges: field_ranges(gesture.gesture_name.as_deref(), query),
        subtitle_ranges,
        subtitle: gesture
            .text_translation
            .as_deref()
            .map_or_else(String::new, |t| format!("\"{t}\"")),
        tag: gesture.gesture_category.clone(),
        badge: gesture
            .difficulty_level
            .as_ref()
            .map(|level| (level.clone(), DifficultyTier::classify(level))),
        title,
        is_selected: false,
    }
}

fn gesture_detail(gesture: &GestureRecord, now: DateTime<Utc>) -> DetailPanel {
    let fields = [
        ("Translation", &gesture.text_translation),
        ("Category", &gesture.gesture_category),
        ("Difficulty", &gesture.difficulty_level),
        ("Description", &gesture.gesture_description),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_ref().map(|v| (label.to_string(), v.clone())))
    .collect();

    DetailPanel {
        title: gesture
            .gesture_name
            .clone()
            .unwrap_or_else(|| "Untitled gesture".to_string()),
        fields,
        updated: updated_label(gesture, now),
        image: gesture.gesture_image.clone(),
    }
}

fn use_case_item(use_case: &UseCaseRecord, index: usize, query: &str) -> DisplayItem {
    let title = use_case
        .title
        .clone()
        .unwrap_or_else(|| "Untitled use case".to_string());

    DisplayItem {
        highlight_ranges: field_ranges(use_case.title.as_deref(), query),
        subtitle_ranges: field_ranges(use_case.short_description.as_deref(), query),
        subtitle: use_case.short_description.clone().unwrap_or_default(),
        tag: Some(format!("Use Case {:02}", index + 1)),
        badge: None,
        title,
        is_selected: false,
    }
}

fn use_case_detail(use_case: &UseCaseRecord, now: DateTime<Utc>) -> DetailPanel {
    let fields = [
        ("Summary", &use_case.short_description),
        ("Description", &use_case.description),
        ("Key Benefits", &use_case.benefits),
        ("Target Audience", &use_case.target_audience),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_ref().map(|v| (label.to_string(), v.clone())))
    .collect();

    DetailPanel {
        title: use_case
            .title
            .clone()
            .unwrap_or_else(|| "Untitled use case".to_string()),
        fields,
        updated: updated_label(use_case, now),
        image: use_case.image.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn state(page: Page) -> AppState {
        AppState::new(
            CrudService::new("http://cms.local/api", None),
            page,
            Theme::default(),
        )
    }

    fn granted(page: Page) -> (AppState, FetchTicket) {
        let mut state = state(page);
        let actions = state.set_web_access(true).unwrap();
        let ticket = match actions.as_slice() {
            [Action::FetchCollection(request)] => request.ticket.clone(),
            other => panic!("expected one fetch, got {other:?}"),
        };
        (state, ticket)
    }

    fn gestures_body() -> Vec<u8> {
        br#"{"items": [
            {"_id": "g1", "gestureName": "Hello", "textTranslation": "Hello", "gestureCategory": "Greetings", "difficultyLevel": "Easy"},
            {"_id": "g2", "gestureName": "Thank you", "textTranslation": "Thank you", "gestureCategory": "Courtesy", "difficultyLevel": "Easy"},
            {"_id": "g3", "gestureName": "Goodbye", "textTranslation": "Bye", "gestureCategory": "Greetings", "difficultyLevel": "Medium",
             "_updatedDate": "2024-05-07T12:00:00Z"}
        ]}"#
        .to_vec()
    }

    fn use_cases_body(count: usize) -> Vec<u8> {
        let items: Vec<String> = (1..=count)
            .map(|i| format!(r#"{{"_id": "u{i}", "title": "Use case {i}"}}"#))
            .collect();
        format!(r#"{{"items": [{}]}}"#, items.join(",")).into_bytes()
    }

    #[test]
    fn mount_before_permission_only_marks_loading() {
        let mut state = state(Page::Gestures);
        let actions = state.mount().unwrap();

        assert!(actions.is_empty());
        assert!(state.gestures.is_loading());
        assert_eq!(state.pending_ticket(Collection::Gestures), None);
    }

    #[test]
    fn grant_issues_the_deferred_read() {
        let (state, ticket) = granted(Page::Gestures);

        assert_eq!(ticket.collection_id, "signlanguagegestures");
        assert_eq!(state.pending_ticket(Collection::Gestures), Some(ticket.ticket));
    }

    #[test]
    fn denied_permission_fails_the_listing() {
        let mut state = state(Page::UseCases);
        let actions = state.set_web_access(false).unwrap();

        assert!(actions.is_empty());
        assert!(matches!(state.use_cases.status(), LoadStatus::Failed(_)));
    }

    #[test]
    fn about_mounts_nothing() {
        let mut state = state(Page::About);
        assert!(state.set_web_access(true).unwrap().is_empty());
    }

    #[test]
    fn matching_response_loads_records() {
        let (mut state, ticket) = granted(Page::Gestures);

        assert!(state.receive(&ticket, &FetchResponse::new(200, gestures_body())));
        assert_eq!(state.gestures.source().len(), 3);
        assert_eq!(state.pending_ticket(Collection::Gestures), None);
    }

    #[test]
    fn superseded_response_is_discarded() {
        let (mut state, first) = granted(Page::Gestures);
        let second = match state.mount().unwrap().as_slice() {
            [Action::FetchCollection(request)] => request.ticket.clone(),
            other => panic!("expected one fetch, got {other:?}"),
        };
        assert!(second.ticket > first.ticket);

        assert!(!state.receive(&first, &FetchResponse::new(200, gestures_body())));
        assert!(state.gestures.source().is_empty());
        assert!(state.receive(&second, &FetchResponse::new(200, gestures_body())));
    }

    #[test]
    fn response_after_dismount_is_discarded() {
        let (mut state, ticket) = granted(Page::Gestures);
        state.navigate(Page::About).unwrap();

        assert!(!state.receive(&ticket, &FetchResponse::new(200, gestures_body())));
        assert!(state.gestures.source().is_empty());
        assert_eq!(state.gestures.status(), &LoadStatus::Idle);
    }

    #[test]
    fn dismount_clears_cache_and_filters() {
        let (mut state, ticket) = granted(Page::Gestures);
        state.receive(&ticket, &FetchResponse::new(200, gestures_body()));
        state.edit_listing(|listing| listing.set_search_text("hello".to_string()));

        state.navigate(Page::Home).unwrap();

        assert!(state.gestures.source().is_empty());
        assert!(!state.gestures.filters().is_active());
        assert!(state.use_cases.is_loading());
    }

    #[test]
    fn failed_read_is_recorded() {
        let (mut state, ticket) = granted(Page::Gestures);
        state.receive(&ticket, &FetchResponse::new(503, b"maintenance".to_vec()));

        let vm = state.compute_viewmodel(24, 100);
        let empty = vm.empty_state.unwrap();
        assert!(empty.is_error);
        assert_eq!(empty.message, "Content store unavailable");
        assert!(empty.subtitle.contains("maintenance"));
    }

    #[test]
    fn unknown_collection_response_is_ignored() {
        let (mut state, _) = granted(Page::Gestures);
        let foreign = FetchTicket {
            collection_id: "orders".to_string(),
            ticket: 1,
        };
        assert!(!state.receive(&foreign, &FetchResponse::new(200, b"[]".to_vec())));
    }

    #[test]
    fn selection_is_clamped_after_filtering() {
        let (mut state, ticket) = granted(Page::Gestures);
        state.receive(&ticket, &FetchResponse::new(200, gestures_body()));
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);

        state.edit_listing(|listing| listing.set_search_text("hello".to_string()));
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn edit_listing_is_refused_on_static_pages() {
        let mut state = state(Page::Home);
        assert!(!state.edit_listing(|listing| listing.clear_filters()));
    }

    #[test]
    fn listing_viewmodel_shows_counts_badges_and_detail() {
        let (mut state, ticket) = granted(Page::Gestures);
        state.receive(&ticket, &FetchResponse::new(200, gestures_body()));
        state.edit_listing(|listing| listing.cycle_category(true));
        state.move_selection_down();

        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let vm = state.compute_viewmodel_at(24, 100, now);

        let filter_bar = vm.filter_bar.unwrap();
        assert_eq!(filter_bar.category.as_deref(), Some("Greetings"));
        assert_eq!(filter_bar.difficulty.as_deref(), Some("All Levels"));
        assert_eq!(filter_bar.summary, "Showing 2 of 3 gestures");

        assert_eq!(vm.display_items.len(), 2);
        assert_eq!(vm.display_items[1].title, "Goodbye");
        assert!(vm.display_items[1].is_selected);
        assert_eq!(vm.display_items[1].badge, Some(("Medium".to_string(), DifficultyTier::Medium)));

        let detail = vm.detail.unwrap();
        assert_eq!(detail.title, "Goodbye");
        assert_eq!(detail.updated.as_deref(), Some("Updated 3d ago"));
        assert!(detail.fields.contains(&("Translation".to_string(), "Bye".to_string())));
    }

    #[test]
    fn search_highlights_titles() {
        let (mut state, ticket) = granted(Page::Gestures);
        state.receive(&ticket, &FetchResponse::new(200, gestures_body()));
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        state.edit_listing(|listing| listing.set_search_text("ELL".to_string()));

        let vm = state.compute_viewmodel(24, 100);
        assert_eq!(vm.search_bar.unwrap().query, "ELL");
        assert_eq!(vm.display_items.len(), 1);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(1, 4)]);
        assert_eq!(vm.display_items[0].subtitle_ranges, vec![(2, 5)]);
    }

    #[test]
    fn placeholder_titles_are_never_highlighted() {
        let mut unnamed = GestureRecord::new("g7");
        unnamed.text_translation = Some("untitled work".to_string());

        let item = gesture_item(&unnamed, "untitled");
        assert_eq!(item.title, "Untitled gesture");
        assert!(item.highlight_ranges.is_empty());
        assert_eq!(item.subtitle, "\"untitled work\"");
        assert_eq!(item.subtitle_ranges, vec![(1, 9)]);

        let mut untitled_case = UseCaseRecord::new("u7");
        untitled_case.short_description = Some("Untitled drafts".to_string());
        let item = use_case_item(&untitled_case, 0, "untitled");
        assert!(item.highlight_ranges.is_empty());
        assert_eq!(item.subtitle_ranges, vec![(0, 8)]);
    }

    #[test]
    fn no_match_is_an_empty_state() {
        let (mut state, ticket) = granted(Page::Gestures);
        state.receive(&ticket, &FetchResponse::new(200, gestures_body()));
        state.edit_listing(|listing| listing.set_search_text("xyz".to_string()));

        let empty = state.compute_viewmodel(24, 100).empty_state.unwrap();
        assert_eq!(empty.message, "No gestures found");
        assert_eq!(empty.subtitle, "Try adjusting your filters or search terms");
        assert!(!empty.is_error);
    }

    #[test]
    fn loading_is_distinct_from_empty() {
        let (state, _) = granted(Page::Gestures);
        let empty = state.compute_viewmodel(24, 100).empty_state.unwrap();
        assert_eq!(empty.message, "Loading gestures…");
    }

    #[test]
    fn window_follows_selection() {
        let (mut state, ticket) = granted(Page::UseCases);
        state.receive(&ticket, &FetchResponse::new(200, use_cases_body(30)));
        for _ in 0..20 {
            state.move_selection_down();
        }

        let vm = state.compute_viewmodel(16, 100);
        assert_eq!(vm.display_items.len(), 10);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert_eq!(vm.display_items[vm.selected_index].title, "Use case 21");
        assert_eq!(vm.display_items[vm.selected_index].tag.as_deref(), Some("Use Case 21"));
    }

    #[test]
    fn home_features_the_first_three_use_cases() {
        let (mut state, ticket) = granted(Page::Home);
        assert_eq!(ticket.collection_id, "projectusecases");
        state.receive(&ticket, &FetchResponse::new(200, use_cases_body(5)));

        let vm = state.compute_viewmodel(40, 100);
        let titles: Vec<&str> = vm.display_items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Use case 1", "Use case 2", "Use case 3"]);
        assert_eq!(vm.sections.last(), Some(&copy::FEATURED));
        assert!(vm.filter_bar.is_none());
    }

    #[test]
    fn home_without_use_cases_hides_the_featured_section() {
        let (mut state, ticket) = granted(Page::Home);
        state.receive(&ticket, &FetchResponse::new(200, use_cases_body(0)));

        let vm = state.compute_viewmodel(40, 100);
        assert!(vm.display_items.is_empty());
        assert_eq!(vm.sections.len(), copy::HOME.len());
    }

    #[test]
    fn header_marks_active_tab() {
        let vm = state(Page::UseCases).compute_viewmodel(24, 100);
        let active: Vec<&str> = vm
            .header
            .tabs
            .iter()
            .filter(|t| t.is_active)
            .map(|t| t.label.as_str())
            .collect();
        assert_eq!(active, vec!["3 Use Cases"]);
        assert!(vm.header.title.contains("/use-cases"));
    }
}

//! Viewport observation for the reveal animation
//!
//! [`VisibilityTracker`] owns the lifecycle: watch every section that is on
//! the page, then disconnect at teardown. Intersection reports flow from the
//! observer into [`VisibilitySet`](crate::models::visibility::VisibilitySet)
//! through the callback given to [`DomViewportObserver::new`].

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::{LandingError, Result};
use crate::models::section::SectionId;
use crate::models::visibility::{IntersectionReport, Threshold};

/// A source of intersection reports for page regions
pub trait ViewportObserver {
    /// Starts watching the region of `section`. Returns `Ok(false)` if the
    /// region is not on the page.
    ///
    /// # Errors
    ///
    /// Returns an error when the document cannot be reached.
    fn observe(&mut self, section: SectionId) -> Result<bool>;

    /// Stops watching every region. No reports are delivered afterwards.
    fn disconnect(&mut self);
}

/// Watches all present sections and guarantees disconnection
#[derive(Debug)]
pub struct VisibilityTracker<O: ViewportObserver> {
    observer: O,
    watching: Vec<SectionId>,
    connected: bool,
}

impl<O: ViewportObserver> VisibilityTracker<O> {
    pub const fn new(observer: O) -> Self {
        Self {
            observer,
            watching: Vec::new(),
            connected: false,
        }
    }

    /// Observes every section region currently on the page, returning how
    /// many are being watched.
    ///
    /// # Errors
    ///
    /// Propagates observer errors. Regions watched before the failure are
    /// released again.
    pub fn start(&mut self) -> Result<usize> {
        self.connected = true;
        for section in SectionId::ALL {
            match self.observer.observe(section) {
                Ok(true) => self.watching.push(section),
                Ok(false) => tracing::debug!(%section, "section region missing, not observed"),
                Err(e) => {
                    self.teardown();
                    return Err(e);
                }
            }
        }
        tracing::debug!(watched = self.watching.len(), "visibility tracking started");
        Ok(self.watching.len())
    }

    /// Sections currently watched
    pub fn watching(&self) -> &[SectionId] {
        &self.watching
    }

    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Disconnects the observer. Calling it again does nothing.
    pub fn teardown(&mut self) {
        if !self.connected {
            return;
        }
        self.observer.disconnect();
        self.watching.clear();
        self.connected = false;
        tracing::debug!("visibility tracking stopped");
    }
}

impl<O: ViewportObserver> Drop for VisibilityTracker<O> {
    fn drop(&mut self) {
        self.teardown();
    }
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// `IntersectionObserver`-backed observer for the browser
pub struct DomViewportObserver {
    observer: IntersectionObserver,
    // Keeps the JS callback alive for as long as the observer exists
    _callback: EntriesCallback,
}

impl DomViewportObserver {
    /// Creates an observer that forwards each batch of entries to
    /// `on_reports`.
    ///
    /// # Errors
    ///
    /// Returns `LandingError::ObserverCreation` when the browser lacks
    /// `IntersectionObserver` or rejects `root_margin`.
    pub fn new(
        threshold: Threshold,
        root_margin: &str,
        on_reports: impl Fn(Vec<IntersectionReport>) + 'static,
    ) -> Result<Self> {
        let callback: EntriesCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let reports = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| {
                        IntersectionReport::new(
                            entry.target().id(),
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        )
                    })
                    .collect::<Vec<_>>();
                on_reports(reports);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold.value()));
        init.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| LandingError::ObserverCreation(format!("{e:?}")))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl ViewportObserver for DomViewportObserver {
    fn observe(&mut self, section: SectionId) -> Result<bool> {
        let document = web_sys::window()
            .ok_or(LandingError::WindowUnavailable)?
            .document()
            .ok_or(LandingError::DocumentUnavailable)?;

        Ok(document
            .get_element_by_id(section.anchor())
            .map(|element| self.observer.observe(&element))
            .is_some())
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

//! The movie view: one fetch lifecycle per instance.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info, instrument, warn};

use crate::movie::{MovieRecord, NewMovie};
use crate::traits::MovieSource;
use crate::Result;

use super::{FetchStatus, RenderState};

/// A view over one movie collection.
///
/// The view owns its [`FetchStatus`] and is the only writer to it. Clones
/// share the same state, so a handle can be moved into a spawned task while
/// presentation keeps observing through [`subscribe`](Self::subscribe).
///
/// Overlapping fetches are allowed; each one is numbered and only the most
/// recently started fetch may write its outcome. After [`dispose`](Self::dispose)
/// no outcome is written at all.
///
/// # Example
///
/// ```no_run
/// use reel_core::{MovieSource, MovieView, RenderState};
///
/// # async fn example(source: impl MovieSource + 'static) {
/// let view = MovieView::mount(source);
/// match view.settled().await.render_state() {
///     RenderState::Populated(movies) => println!("{} movies", movies.len()),
///     RenderState::Empty => println!("Found no movies."),
///     RenderState::Error(message) => println!("{message}"),
///     RenderState::Loading => unreachable!(),
/// }
/// # }
/// ```
pub struct MovieView<S> {
    inner: Arc<ViewInner<S>>,
}

struct ViewInner<S> {
    source: S,
    status: watch::Sender<FetchStatus>,
    latest: AtomicU64,
    active: AtomicBool,
}

impl<S: MovieSource> MovieView<S> {
    /// Create a view without fetching.
    pub fn new(source: S) -> Self {
        let (status, _) = watch::channel(FetchStatus::default());
        Self {
            inner: Arc::new(ViewInner {
                source,
                status,
                latest: AtomicU64::new(0),
                active: AtomicBool::new(true),
            }),
        }
    }

    /// Create a view and start its initial fetch.
    ///
    /// The view is already loading when this returns; the fetch itself runs
    /// on a spawned task, so this must be called within a Tokio runtime.
    pub fn mount(source: S) -> Self
    where
        S: 'static,
    {
        let view = Self::new(source);
        let guard = view.begin_fetch();
        let task = view.clone();
        tokio::spawn(async move { task.run_fetch(guard).await });
        view
    }

    /// Returns the source this view reads from.
    pub fn source(&self) -> &S {
        &self.inner.source
    }

    /// Returns a snapshot of the current status.
    pub fn status(&self) -> FetchStatus {
        self.inner.status.borrow().clone()
    }

    /// Derive the current render state.
    pub fn render_state(&self) -> RenderState {
        self.inner.status.borrow().render_state()
    }

    /// Watch status changes.
    pub fn subscribe(&self) -> watch::Receiver<FetchStatus> {
        self.inner.status.subscribe()
    }

    /// Stream of statuses, starting with the current one.
    pub fn updates(&self) -> WatchStream<FetchStatus> {
        WatchStream::new(self.subscribe())
    }

    /// Wait until no fetch is in flight and return that status.
    pub async fn settled(&self) -> FetchStatus {
        let mut receiver = self.subscribe();
        match receiver.wait_for(|status| !status.is_loading).await {
            Ok(status) => status.clone(),
            // The sender lives as long as `self`.
            Err(_) => self.status(),
        }
    }

    /// Returns false once the view has been disposed.
    pub fn is_active(&self) -> bool {
        self.inner.active.load(Ordering::SeqCst)
    }

    /// Tear the view down.
    ///
    /// Fetches still in flight keep running but their outcome is discarded.
    pub fn dispose(&self) {
        if self.inner.active.swap(false, Ordering::SeqCst) {
            debug!("disposing view");
            self.inner.status.send_if_modified(|status| {
                std::mem::replace(&mut status.is_loading, false)
            });
        }
    }

    /// Retrieve the collection and record the outcome.
    ///
    /// Never fails: errors land in [`FetchStatus::error`]. Loading is cleared
    /// on every exit, including when this future is dropped before completing.
    /// A disposed view does not fetch at all.
    pub async fn fetch_movies(&self) {
        if !self.is_active() {
            debug!("view disposed, skipping fetch");
            return;
        }

        let guard = self.begin_fetch();
        self.run_fetch(guard).await;
    }

    fn begin_fetch(&self) -> LoadingGuard<S> {
        let inner = &self.inner;
        let mut seq = 0;
        inner.status.send_if_modified(|status| {
            seq = inner.latest.fetch_add(1, Ordering::SeqCst) + 1;
            if !inner.active.load(Ordering::SeqCst) {
                return false;
            }
            status.is_loading = true;
            status.error = None;
            true
        });

        LoadingGuard {
            inner: Arc::clone(inner),
            seq,
            released: false,
        }
    }

    #[instrument(
        skip(self, guard),
        fields(endpoint = %self.inner.source.endpoint(), seq = guard.seq)
    )]
    async fn run_fetch(&self, guard: LoadingGuard<S>) {
        debug!("fetching movies");
        let outcome = self.inner.source.fetch_movies().await;

        match &outcome {
            Ok(movies) => debug!(count = movies.len(), "fetch succeeded"),
            Err(e) => warn!(error = %e, "fetch failed"),
        }

        guard.release(outcome);
    }

    /// Add a movie to the collection, ignoring failures.
    ///
    /// Local state is untouched; the movie shows up on the next fetch.
    pub async fn submit_movie(&self, movie: &NewMovie) {
        if let Err(e) = self.try_submit_movie(movie).await {
            warn!(error = %e, "movie submission failed");
        }
    }

    /// Add a movie to the collection, reporting failures.
    #[instrument(skip(self, movie), fields(endpoint = %self.inner.source.endpoint()))]
    pub async fn try_submit_movie(&self, movie: &NewMovie) -> Result<()> {
        debug!(title = %movie.title, "submitting movie");
        self.inner.source.submit_movie(movie).await?;
        info!(title = %movie.title, "movie submitted");
        Ok(())
    }
}

impl<S> ViewInner<S> {
    /// Write a fetch outcome if `seq` is still the latest fetch.
    ///
    /// `None` only clears loading (the fetch was abandoned).
    fn settle(&self, seq: u64, outcome: Option<Result<Vec<MovieRecord>>>) {
        let applied = self.status.send_if_modified(|status| {
            if !self.active.load(Ordering::SeqCst) {
                debug!(seq, "view disposed, discarding fetch outcome");
                return false;
            }
            if self.latest.load(Ordering::SeqCst) != seq {
                debug!(seq, "newer fetch started, discarding stale outcome");
                return false;
            }

            status.is_loading = false;
            match outcome {
                Some(Ok(movies)) => {
                    status.movies = movies;
                    status.error = None;
                }
                Some(Err(e)) => status.error = Some(e.to_string()),
                None => {}
            }
            true
        });

        if applied {
            debug!(seq, "fetch settled");
        }
    }
}

/// Holds a view in the loading state until released or dropped.
struct LoadingGuard<S> {
    inner: Arc<ViewInner<S>>,
    seq: u64,
    released: bool,
}

impl<S> LoadingGuard<S> {
    fn release(mut self, outcome: Result<Vec<MovieRecord>>) {
        self.released = true;
        self.inner.settle(self.seq, Some(outcome));
    }
}

impl<S> Drop for LoadingGuard<S> {
    fn drop(&mut self) {
        if !self.released {
            debug!(seq = self.seq, "fetch abandoned");
            self.inner.settle(self.seq, None);
        }
    }
}

impl<S> Clone for MovieView<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: MovieSource> fmt::Debug for MovieView<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MovieView")
            .field("endpoint", &self.inner.source.endpoint())
            .field("status", &*self.inner.status.borrow())
            .field("active", &self.inner.active.load(Ordering::SeqCst))
            .finish()
    }
}

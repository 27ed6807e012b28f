//! Fetch status and the render state derived from it.

use serde::Serialize;

use crate::movie::MovieRecord;

/// Lifecycle state of one view's retrieval.
///
/// Moves `idle -> loading -> (success | failure)` and restarts at loading on
/// every fetch. Only the owning [`MovieView`](crate::MovieView) mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchStatus {
    /// A fetch is in flight.
    pub is_loading: bool,

    /// Message of the most recent failure, cleared when a fetch starts.
    pub error: Option<String>,

    /// Movies from the most recent successful fetch.
    pub movies: Vec<MovieRecord>,
}

impl FetchStatus {
    /// Derive what to display.
    ///
    /// First match wins: loading, then error, then empty, then populated.
    /// A fetch in flight or a failure hides movies from an earlier success.
    pub fn render_state(&self) -> RenderState {
        if self.is_loading {
            RenderState::Loading
        } else if let Some(message) = &self.error {
            RenderState::Error(message.clone())
        } else if self.movies.is_empty() {
            RenderState::Empty
        } else {
            RenderState::Populated(self.movies.clone())
        }
    }
}

/// The single thing a view displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    Loading,
    Error(String),
    Empty,
    Populated(Vec<MovieRecord>),
}

impl RenderState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RenderState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RenderState::Error(_))
    }

    /// Returns the movies to list, empty unless populated.
    pub fn movies(&self) -> &[MovieRecord] {
        match self {
            RenderState::Populated(movies) => movies,
            _ => &[],
        }
    }
}

impl From<&FetchStatus> for RenderState {
    fn from(status: &FetchStatus) -> Self {
        status.render_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movies() -> Vec<MovieRecord> {
        vec![MovieRecord::new(1u64, "A", "x", "2021-01-01")]
    }

    fn status(is_loading: bool, error: Option<&str>, movies: Vec<MovieRecord>) -> FetchStatus {
        FetchStatus {
            is_loading,
            error: error.map(str::to_string),
            movies,
        }
    }

    #[test]
    fn initial_status_renders_empty() {
        assert_eq!(FetchStatus::default().render_state(), RenderState::Empty);
    }

    #[test]
    fn priority_holds_for_every_combination() {
        for is_loading in [false, true] {
            for error in [None, Some("boom")] {
                for movies in [Vec::new(), movies()] {
                    let s = status(is_loading, error, movies.clone());
                    let expected = if is_loading {
                        RenderState::Loading
                    } else if let Some(message) = error {
                        RenderState::Error(message.to_string())
                    } else if movies.is_empty() {
                        RenderState::Empty
                    } else {
                        RenderState::Populated(movies)
                    };
                    assert_eq!(s.render_state(), expected, "{s:?}");
                }
            }
        }
    }

    #[test]
    fn loading_hides_stale_movies() {
        let state = status(true, None, movies()).render_state();
        assert!(state.is_loading());
        assert!(state.movies().is_empty());
    }

    #[test]
    fn error_hides_stale_movies() {
        let state = RenderState::from(&status(false, Some("Something went wrong!"), movies()));
        assert_eq!(state, RenderState::Error("Something went wrong!".to_string()));
        assert!(state.movies().is_empty());
    }

    #[test]
    fn populated_exposes_movies() {
        let state = status(false, None, movies()).render_state();
        assert_eq!(state.movies(), movies().as_slice());
    }
}

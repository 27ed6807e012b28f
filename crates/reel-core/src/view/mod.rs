//! View state: fetch lifecycle, render-state selection and submissions.

mod movie_view;
mod status;

pub use movie_view::MovieView;
pub use status::{FetchStatus, RenderState};

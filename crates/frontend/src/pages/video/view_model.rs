//! Video page - view model and derived view state

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct VideoPageVm {
    pub prompt: RwSignal<String>,
    pub prompt_error: RwSignal<Option<String>>,
    pub video: RwSignal<Option<String>>,
    pub is_submitting: RwSignal<bool>,
}

impl VideoPageVm {
    pub fn new() -> Self {
        Self {
            prompt: RwSignal::new(String::new()),
            prompt_error: RwSignal::new(None),
            video: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
        }
    }
}

/// Mutually exclusive render phases of the page body.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Empty,
    Loading,
    Result(String),
}

/// Derive the current phase from the submission flag and the last result.
///
/// A submission in flight always wins. The result is cleared before each
/// dispatch, so Loading never sits on top of a stale video.
pub fn view_state(is_submitting: bool, video: Option<String>) -> ViewState {
    if is_submitting {
        return ViewState::Loading;
    }
    match video {
        Some(url) => ViewState::Result(url),
        None => ViewState::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_without_result_is_empty() {
        assert_eq!(view_state(false, None), ViewState::Empty);
    }

    #[test]
    fn test_submitting_is_loading() {
        assert_eq!(view_state(true, None), ViewState::Loading);
    }

    #[test]
    fn test_loading_wins_over_result() {
        // The controller clears the result before dispatch; even if it did
        // not, a submission in flight must never show a video.
        assert_eq!(
            view_state(true, Some("https://cdn/video1.mp4".to_string())),
            ViewState::Loading
        );
    }

    #[test]
    fn test_result_when_idle_with_video() {
        assert_eq!(
            view_state(false, Some("https://cdn/video1.mp4".to_string())),
            ViewState::Result("https://cdn/video1.mp4".to_string())
        );
    }
}

use crate::chat::ChatScreen;
use crate::config::AppConfig;
use crate::results::ResultsScreen;
use crate::upload::UploadScreen;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    #[default]
    Home,
    Upload,
    SimilarCases,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Upload => "/upload",
            Self::SimilarCases => "/similar-cases",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Upload => "Upload Case",
            Self::SimilarCases => "Similar Cases",
        }
    }
}

/// State handed from the upload screen to the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPayload {
    pub uploaded_file: String,
    pub analysis_complete: bool,
}

impl NavigationPayload {
    pub fn analyzed(file_name: impl Into<String>) -> Self {
        Self {
            uploaded_file: file_name.into(),
            analysis_complete: true,
        }
    }
}

/// The one live screen. Replacing it drops the previous screen's state.
pub enum Screen {
    Home(ChatScreen),
    Upload(UploadScreen),
    SimilarCases(ResultsScreen),
}

impl Screen {
    pub fn enter(route: Route, payload: Option<NavigationPayload>, config: &AppConfig) -> Self {
        match route {
            Route::Home => Self::Home(ChatScreen::new()),
            Route::Upload => Self::Upload(UploadScreen::new(config.upload.clone())),
            Route::SimilarCases => Self::SimilarCases(ResultsScreen::new(
                payload,
                &config.results.placeholder_file_name,
            )),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Self::Home(_) => Route::Home,
            Self::Upload(_) => Route::Upload,
            Self::SimilarCases(_) => Route::SimilarCases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_without_payload_use_placeholder_name() {
        let config = AppConfig::default();
        let Screen::SimilarCases(results) = Screen::enter(Route::SimilarCases, None, &config)
        else {
            panic!("expected results screen");
        };
        assert_eq!(results.uploaded_file(), "case-document.pdf");
    }

    #[test]
    fn results_with_payload_show_analyzed_name() {
        let config = AppConfig::default();
        let payload = NavigationPayload::analyzed("lease.pdf");
        let screen = Screen::enter(Route::SimilarCases, Some(payload), &config);
        assert_eq!(screen.route(), Route::SimilarCases);
        let Screen::SimilarCases(results) = screen else {
            panic!("expected results screen");
        };
        assert_eq!(results.uploaded_file(), "lease.pdf");
    }

    #[test]
    fn entering_home_starts_with_empty_transcript() {
        let config = AppConfig::default();
        let Screen::Home(chat) = Screen::enter(Route::Home, None, &config) else {
            panic!("expected home screen");
        };
        assert!(chat.transcript().is_empty());
    }

    #[test]
    fn routes_have_stable_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Upload.path(), "/upload");
        assert_eq!(Route::SimilarCases.path(), "/similar-cases");
    }
}

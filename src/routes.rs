//! Path routing between the home and workflow views.
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Workflow,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::Workflow];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Workflow => "/workflow",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Workflow => "Workflow Prompts",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Route::Home => 0,
            Route::Workflow => 1,
        }
    }

    pub fn next(self) -> Route {
        Route::ALL[(self.index() + 1) % Route::ALL.len()]
    }

    /// Exact route for `path`, ignoring query, fragment, and a trailing slash.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or(path).trim();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Like [`Route::from_path`], but unknown paths land on the app shell.
    pub fn resolve(path: &str) -> Route {
        Route::from_path(path).unwrap_or_else(|| {
            tracing::warn!(path, "no route for path; showing home");
            Route::Home
        })
    }
}

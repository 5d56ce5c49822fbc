use crate::error::AppError;

/// Screens of the app and their paths
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Home,
    Auth,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Auth => "/auth",
        }
    }

    pub fn from_path(path: &str) -> Result<Self, AppError> {
        match path.trim_end_matches('/') {
            "" => Ok(Route::Home),
            "/auth" => Ok(Route::Auth),
            _ => Err(AppError::UnknownRoute(path.to_string())),
        }
    }
}

/// In-memory history stack. Never empty.
#[derive(Clone, PartialEq, Debug)]
pub struct NavHistory {
    entries: Vec<Route>,
}

impl NavHistory {
    pub fn new(initial: Route) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    pub fn current(&self) -> Route {
        self.entries.last().copied().unwrap_or(Route::Home)
    }

    pub fn push(&mut self, route: Route) {
        self.entries.push(route);
    }

    /// Swap the current entry, so going back skips it
    pub fn replace(&mut self, route: Route) {
        match self.entries.last_mut() {
            Some(last) => *last = route,
            None => self.entries.push(route),
        }
    }

    pub fn navigate(&mut self, path: &str, replace: bool) -> Result<Route, AppError> {
        let route = Route::from_path(path)?;
        log::debug!("Navigate to {} (replace: {})", path, replace);
        if replace {
            self.replace(route);
        } else {
            self.push(route);
        }
        Ok(route)
    }
}

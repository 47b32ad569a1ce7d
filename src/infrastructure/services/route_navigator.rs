use tokio::sync::watch;
use tracing::{debug, warn};

use crate::application::ports::outbound::NavigationPort;
use crate::application::services::navigation::Route;

/// Keeps the current route and notifies whoever renders it
pub struct RouteNavigator {
    current: watch::Sender<Route>,
}

impl RouteNavigator {
    pub fn new() -> Self {
        let (current, _) = watch::channel(Route::Employees);
        Self { current }
    }

    pub fn current(&self) -> Route {
        *self.current.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.current.subscribe()
    }
}

impl Default for RouteNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationPort for RouteNavigator {
    fn go_to(&self, path: &str) {
        match Route::parse(path) {
            Some(route) => {
                debug!("Navigating to {}", route);
                self.current.send_replace(route);
            },
            None => warn!("Ignoring navigation to unknown path {}", path),
        }
    }
}

use tracing::debug;

/// Named screen states of the navigation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Splash,
    Setup,
    Dashboard,
    Alarm,
}

/// User and system inputs that drive navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The splash delay elapsed; `has_url` reflects the stored configuration.
    SplashFinished { has_url: bool },
    /// The setup screen persisted a URL and the write completed.
    UrlSaved,
    SettingsPressed,
    AlarmsPressed,
    AlarmSelected,
    Back,
}

/// Navigation state machine with an explicit history stack.
///
/// Exactly one route is active at a time (the top of the stack). Transitions
/// that remove a screen from history pop it before pushing the target, so the
/// removed screen can never be reached again through [`NavEvent::Back`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nav {
    stack: Vec<Route>,
}

impl Nav {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Splash],
        }
    }

    /// The currently active route.
    pub fn current(&self) -> Route {
        *self.stack.last().expect("navigation stack is never empty")
    }

    /// Whether back navigation has somewhere to go. The setup screen uses
    /// this as its back-button guard: entered from the splash screen the
    /// stack holds setup alone and back is refused.
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Apply a navigation event to the current route.
    ///
    /// Returns `true` if the event was legal in the current state and the
    /// stack changed; illegal events are ignored and return `false`.
    pub fn apply(&mut self, event: NavEvent) -> bool {
        let applied = match (self.current(), event) {
            (Route::Splash, NavEvent::SplashFinished { has_url }) => {
                // Splash is removed from history and never shown again.
                self.stack.pop();
                self.stack.push(if has_url {
                    Route::Dashboard
                } else {
                    Route::Setup
                });
                true
            }
            (Route::Setup, NavEvent::UrlSaved) => {
                self.stack.pop();
                self.ensure_top(Route::Dashboard);
                true
            }
            (Route::Setup, NavEvent::Back) if self.can_go_back() => {
                self.stack.pop();
                true
            }
            (Route::Dashboard, NavEvent::SettingsPressed) => {
                self.stack.push(Route::Setup);
                true
            }
            (Route::Dashboard, NavEvent::AlarmsPressed) => {
                self.stack.push(Route::Alarm);
                true
            }
            (Route::Alarm, NavEvent::AlarmSelected) => {
                // Selecting an entry returns to the dashboard with the alarm
                // screen removed from history.
                self.stack.pop();
                self.ensure_top(Route::Dashboard);
                true
            }
            (Route::Alarm, NavEvent::Back) if self.can_go_back() => {
                self.stack.pop();
                true
            }
            _ => false,
        };

        if applied {
            debug!(?event, current = ?self.current(), "route changed");
        }
        applied
    }

    /// Push `route` unless it is already on top, avoiding duplicate stack
    /// entries when a pop-to-inclusive transition lands on its own target.
    fn ensure_top(&mut self, route: Route) {
        if self.stack.last() != Some(&route) {
            self.stack.push(route);
        }
    }
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}

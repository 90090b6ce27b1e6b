use crate::app::Screen;

/// Map a route path to its screen.
///
/// The paths mirror the web UI this client fronts for: `/` is the landing
/// page, `/demo` the interactive demo. Anything else is unroutable.
pub fn resolve(path: &str) -> Option<Screen> {
    match path {
        "/" => Some(Screen::Landing),
        "/demo" => Some(Screen::Demo),
        _ => None,
    }
}

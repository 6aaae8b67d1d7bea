use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};
use std::rc::Rc;

/// Capability to ask the application shell for another screen.
///
/// Requests are fire-and-forget: implementations own any failure policy.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

#[derive(Clone)]
pub struct NavigatorHandle(Rc<dyn Navigator>);

impl NavigatorHandle {
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        Self(Rc::new(navigator))
    }

    pub fn navigate(&self, path: &str) {
        log::debug!("navigation requested: {}", path);
        self.0.navigate(path);
    }
}

/// Client-side navigation through the enclosing `<Router>`.
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    /// Must be called under a `<Router>`.
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(navigate),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// Full page load, used when nothing better was provided.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("no window available to navigate to {}", path);
            return;
        };
        if let Err(err) = window.location().set_href(path) {
            log::error!("failed to navigate to {}: {:?}", path, err);
        }
    }
}

pub fn provide_navigator(handle: NavigatorHandle) {
    provide_context(handle);
}

pub fn use_navigator() -> NavigatorHandle {
    use_context::<NavigatorHandle>().unwrap_or_else(|| NavigatorHandle::new(BrowserNavigator))
}

/// Installs the router-backed navigator for everything rendered below it.
#[component]
pub fn RouterNavigatorProvider(children: Children) -> impl IntoView {
    provide_navigator(NavigatorHandle::new(RouterNavigator::new()));
    children()
}

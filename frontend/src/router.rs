use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use std::str::FromStr;
use thiserror::Error;

use crate::{
    config::{provide_asset_manifest, AssetManifest},
    pages::{home::HomePage, login::LoginPage, not_found::NotFoundPage},
    state::navigation::RouterNavigatorProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route for path `{0}`")]
    Unknown(String),
}

impl AppRoute {
    pub const ALL: [AppRoute; 2] = [AppRoute::Home, AppRoute::Login];

    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Login => "/login",
        }
    }
}

impl FromStr for AppRoute {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        AppRoute::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| RouteError::Unknown(path.to_string()))
    }
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_asset_manifest(AssetManifest::embedded().clone());
    view! {
        <Title text="Blitz"/>
        <Router>
            <RouterNavigatorProvider>
                <Routes>
                    <Route path=AppRoute::Home.path() view=HomePage/>
                    <Route path=AppRoute::Login.path() view=LoginPage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </RouterNavigatorProvider>
        </Router>
    }
}

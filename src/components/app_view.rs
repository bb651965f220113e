//! Defines the application routes.

use dioxus::prelude::*;

use crate::components::views::{EpisodeView, Home};
use crate::components::AppShell;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/episodes/:slug")]
        EpisodeView { slug: String },
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Home {} => "Home",
        AppView::EpisodeView { .. } => "Episode",
    }
}

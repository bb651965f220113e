use dioxus::prelude::*;

use crate::components::{view_label, AppView, Icon};
use crate::utils::format_today;

#[component]
pub fn Header() -> Element {
    let view = use_route::<AppView>();
    let today = format_today(chrono::Local::now().date_naive());

    rsx! {
        header { class: "header-container",
            Link { to: AppView::Home {}, class: "logo",
                Icon { name: "headphones".to_string(), class: "w-7 h-7".to_string() }
                "Podcastr"
            }
            p { "The best for you to listen to, always" }
            span { class: "section", "{view_label(&view)}" }
            span { "{today}" }
        }
    }
}

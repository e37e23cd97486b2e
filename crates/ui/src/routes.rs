use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::AppContext;
use crate::views::{PartView, QuestionView, ResultView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", PartView)] Home {},
        #[route("/part", PartView)] Part {},
        #[route("/question", QuestionView)] Question {},
        #[route("/result", ResultView)] Results {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let session = ctx.user_session();
    let display_name = session.identity().display_name.clone();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { class: "app-title", "Step Quiz" }
                span { class: "app-user", "{display_name}" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::{Navigator, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;

/// Fade helper shared by the pages.
///
/// Every animated change is two phases: mark the page as leaving and wait for
/// the fade, then apply the change. Nothing is mutated before the wait ends.
#[derive(Clone, Copy)]
pub struct PageTransition {
    visible: Signal<bool>,
    leaving: Signal<bool>,
    fade: Duration,
    navigator: Navigator,
}

pub fn use_page_transition() -> PageTransition {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut visible = use_signal(|| false);
    let leaving = use_signal(|| false);

    use_effect(move || visible.set(true));

    PageTransition {
        visible,
        leaving,
        fade: ctx.fade_duration(),
        navigator,
    }
}

impl PageTransition {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        (self.visible)()
    }

    #[must_use]
    pub fn is_leaving(&self) -> bool {
        (self.leaving)()
    }

    /// Class list for the page wrapper; the stylesheet animates opacity off these.
    #[must_use]
    pub fn wrapper_class(&self) -> String {
        let mut class = String::from("page page-fade");
        if self.is_visible() {
            class.push_str(" page-fade--visible");
        }
        if self.is_leaving() {
            class.push_str(" page-fade--leaving");
        }
        class
    }

    async fn fade_out(mut self) {
        self.leaving.set(true);
        if !self.fade.is_zero() {
            tokio::time::sleep(self.fade).await;
        }
    }

    /// Play the exit fade, then run `mutation` and fade back in.
    pub fn run_with_fade(&self, mutation: impl FnOnce() + 'static) {
        let this = *self;
        spawn(async move {
            this.fade_out().await;
            mutation();
            let mut leaving = this.leaving;
            leaving.set(false);
        });
    }

    /// Play the exit fade, then change route.
    pub fn navigate_with_fade(&self, route: Route) {
        let this = *self;
        spawn(async move {
            this.fade_out().await;
            let _ = this.navigator.push(route);
        });
    }

    /// Change route right away.
    pub fn go_to(&self, route: Route) {
        let _ = self.navigator.push(route);
    }
}

use dioxus::prelude::*;
use quiz_core::model::StepIllustration;

#[component]
pub fn StepImage(illustration: StepIllustration) -> Element {
    let modifier = illustration.css_modifier();
    let leaves = match illustration {
        StepIllustration::Seedling => 1,
        StepIllustration::Sprout => 2,
        StepIllustration::Bloom => 3,
        StepIllustration::Harvest => 4,
    };

    rsx! {
        figure { class: "step-image step-image--{modifier}", "data-illustration": "{modifier}",
            svg {
                view_box: "0 0 64 64",
                width: "96",
                height: "96",
                "aria-hidden": "true",
                rect { x: "4", y: "52", width: "56", height: "8", rx: "4", class: "step-image__soil" }
                path { d: "M32 52 V24", class: "step-image__stem" }
                for leaf in 0..leaves {
                    circle {
                        key: "{leaf}",
                        cx: "{24 + (leaf % 2) * 16}",
                        cy: "{44 - leaf * 8}",
                        r: "6",
                        class: "step-image__leaf",
                    }
                }
                if illustration == StepIllustration::Harvest {
                    circle { cx: "32", cy: "16", r: "8", class: "step-image__fruit" }
                }
            }
        }
    }
}

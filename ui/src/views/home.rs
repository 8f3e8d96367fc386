use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Tagscope" }
            p { "Compare hashtag activity across tweet searches." }
            p {
                "Each collected search links to a comparison page that charts its "
                "top hashtags against other searches. Open one from a dataset's "
                "summary to get started."
            }
        }
    }
}

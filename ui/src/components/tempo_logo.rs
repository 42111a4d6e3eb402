use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogoSize {
    Small,
    Medium,
    #[default]
    Large,
}

impl LogoSize {
    fn css_class(self) -> &'static str {
        match self {
            LogoSize::Small => "tempo-logo--sm",
            LogoSize::Medium => "tempo-logo--md",
            LogoSize::Large => "tempo-logo--lg",
        }
    }
}

/// The Tempo spark mark inside an orange disc.
#[component]
pub fn TempoLogo(#[props(default)] size: LogoSize, #[props(default)] animate: bool) -> Element {
    let motion = if animate { "tempo-logo--pulse" } else { "" };
    let size_class = size.css_class();

    rsx! {
        div { class: "tempo-logo {size_class} {motion}", aria_hidden: "true",
            svg {
                class: "tempo-logo__mark",
                view_box: "0 0 24 24",
                fill: "none",
                path {
                    d: "M8.5 8.5L15.5 15.5M15.5 8.5L8.5 15.5M12 2L14.09 8.26L22 9L14.09 9.74L12 16L9.91 9.74L2 9L9.91 8.26L12 2Z",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                }
            }
        }
    }
}

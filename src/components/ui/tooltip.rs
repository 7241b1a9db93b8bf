use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::tw_merge;

clx! {Tooltip, div, "inline-block relative mx-0 whitespace-nowrap transition-all duration-300 ease-in-out group/tooltip"}

#[derive(Clone, Copy, Default, strum::AsRefStr)]
pub enum TooltipPosition {
    #[default]
    Top,
    Bottom,
}

/// Pure CSS tooltip, shown on hover of the enclosing [`Tooltip`].
#[component]
pub fn TooltipContent(
    #[prop(into, optional)] class: String,
    #[prop(default = TooltipPosition::default())] position: TooltipPosition,
    children: Children,
) -> impl IntoView {
    let position_class = match position {
        TooltipPosition::Top => "left-1/2 -translate-x-1/2 bottom-full mb-1",
        TooltipPosition::Bottom => "left-1/2 -translate-x-1/2 top-full mt-1",
    };

    let tooltip_class = tw_merge!(
        "absolute opacity-0 transition-all duration-300 ease-in-out pointer-events-none group-hover/tooltip:opacity-100 z-50",
        "rounded py-1.5 px-2.5 text-xs whitespace-nowrap shadow-lg text-background bg-foreground/90",
        class,
        position_class,
    );

    view! {
        <div data-name="TooltipContent" data-position=position.as_ref().to_string() class=tooltip_class>
            {children()}
        </div>
    }
}

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkeletonShape {
    #[default]
    Text,
    Circle,
}

pub fn skeleton_class(shape: SkeletonShape, class: &str) -> String {
    match shape {
        SkeletonShape::Text => format!("skeleton skeleton-wave rounded-sm h-2.5 {class}"),
        SkeletonShape::Circle => format!("skeleton skeleton-wave rounded-full shrink-0 {class}"),
    }
}

/// Animated placeholder displayed while content is loading
#[component]
pub fn Skeleton(
    #[prop(optional)]
    shape: SkeletonShape,
    #[prop(default = "w-full")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=skeleton_class(shape, class)/>
    }
}

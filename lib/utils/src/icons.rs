use leptos::prelude::*;

#[component]
pub fn ExpandMoreIcon(#[prop(into)] class: Signal<String>) -> impl IntoView {
    view! {
        <img src="/svg/expand_more.svg" class=class/>
    }
}

#[component]
pub fn FavoriteIcon(#[prop(default = "card-icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/favorite.svg" class=class/>
    }
}

#[component]
pub fn InternalErrorIcon(#[prop(default = "h-28 w-28")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/errors/internal_error.svg" class=class/>
    }
}

#[component]
pub fn MoreVertIcon(#[prop(default = "card-icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/more_vert.svg" class=class/>
    }
}

#[component]
pub fn NotFoundIcon(#[prop(default = "h-28 w-28")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/errors/not_found.svg" class=class/>
    }
}

#[component]
pub fn ShareIcon(#[prop(default = "card-icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/share.svg" class=class/>
    }
}

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{components::{Route, Router, Routes}, StaticSegment};

use scrollfeed_utils::constants::{CONTAINER_ROUTE, REVERSE_ROUTE};
use scrollfeed_utils::error_template::ErrorTemplate;
use scrollfeed_utils::errors::AppError;

use crate::demo::{DemoFeed, DemoMode, DemoNavigation};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <Meta
                    http_equiv="Content-Security-Policy"
                    content=move || {
                        // this will insert the CSP with nonce on the server, be empty on client
                        use_nonce().map(|nonce| {
                            format!(
                                "default-src 'self';
                                script-src 'strict-dynamic' 'nonce-{nonce}' 'wasm-unsafe-eval';
                                img-src 'self' data:;
                                style-src 'self' 'nonce-{nonce}';
                                connect-src 'self' ws://localhost:3001/ ws://127.0.0.1:3001/;"
                            )
                        }).unwrap_or_default()
                    }
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/scrollfeed.css"/>

        // sets the document title
        <Title text="ScrollFeed"/>
        <Router>
            <main class="min-h-screen flex flex-col items-center text-white">
                <DemoNavigation/>
                <Routes fallback=|| {
                    let mut outside_errors = Errors::default();
                    outside_errors.insert_with_default_key(AppError::NotFound);
                    view! {
                        <ErrorTemplate outside_errors/>
                    }
                }>
                    <Route path=StaticSegment("") view=|| view! { <DemoFeed mode=DemoMode::Window/> }/>
                    <Route path=StaticSegment(CONTAINER_ROUTE) view=|| view! { <DemoFeed mode=DemoMode::Container/> }/>
                    <Route path=StaticSegment(REVERSE_ROUTE) view=|| view! { <DemoFeed mode=DemoMode::Reverse/> }/>
                </Routes>
            </main>
        </Router>
    }
}

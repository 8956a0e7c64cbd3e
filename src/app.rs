/// Application root for the book review site.
/// Wraps every route in the page shell and shares the gateway settings and
/// the author name cache with the review sections through context.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::{page_shell::PageShell, reviews_list::ReviewListView};
use crate::config::ApiConfig;
use crate::name_cache::UserNameCache;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::from_env());
    provide_context(create_rw_signal(UserNameCache::default()));

    view! {
        <Html lang="en"/>
        <Stylesheet id="leptos" href="/pkg/bookreview.css"/>
        <Title text="Book Reviews"/>
        <Router>
            <PageShell>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/books/:isbn" view=BookPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </PageShell>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <h1>{ "Book Reviews" }</h1>
        <p>{ "Open a book page to read what other readers think of it." }</p>
    }
}

#[component]
fn BookPage() -> impl IntoView {
    let params = use_params_map();
    let isbn = Signal::derive(move || params.with(|p| p.get("isbn").cloned().unwrap_or_default()));

    view! {
        <h1>{ move || format!("ISBN {}", isbn.get()) }</h1>
        <ReviewListView isbn=isbn/>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <p>{ "Page not found." }</p> }
}

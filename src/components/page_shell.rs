use leptos::*;

/// Fixed site header and footer around the page content.
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    view! {
        <SiteHeader/>
        <main class="page-content">{children()}</main>
        <SiteFooter/>
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="/" class="site-title">{ "Book Reviews" }</a>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>{ "Book Reviews. Reviews are written by our readers." }</p>
        </footer>
    }
}

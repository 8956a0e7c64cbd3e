/// Review section of a book page: lists the reviews for one book and lets the
/// logged-in reader post, edit and delete their own.
use leptos::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use crate::api::{HttpGateway, ReviewGateway};
use crate::components::{review_entry::ReviewEntry, review_form::ReviewForm};
use crate::config::ApiConfig;
use crate::controller::ReviewController;
use crate::error::{ReviewError, CONFIRM_DELETE_MESSAGE, LOGIN_REQUIRED_MESSAGE};
use crate::models::review::Review;
use crate::name_cache::UserNameCache;
use crate::session::{LocalStorage, SessionStore};
use crate::state::ListPhase;
use crate::utils::dialog;

/// Review section wired to the real gateway and browser local storage.
#[component]
pub fn ReviewListView(#[prop(into)] isbn: Signal<String>) -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    // The app root provides one cache for the whole session.
    let names = use_context::<RwSignal<UserNameCache>>()
        .unwrap_or_else(|| create_rw_signal(UserNameCache::default()));
    let controller = ReviewController::new(
        Rc::new(HttpGateway::new(&config)),
        Rc::new(LocalStorage),
        names,
    );

    view! { <ReviewSection isbn=isbn controller=controller /> }
}

/// Renders the section for any gateway and session source.
/// The login prompt and delete confirmation default to browser dialogs.
#[component]
pub fn ReviewSection<G, S>(
    #[prop(into)] isbn: Signal<String>,
    controller: ReviewController<G, S>,
    #[prop(optional)] on_login_required: Option<Callback<()>>,
    #[prop(optional)] confirm_delete: Option<Callback<(), bool>>,
) -> impl IntoView
where
    G: ReviewGateway + 'static,
    S: SessionStore + 'static,
{
    let on_login_required =
        on_login_required.unwrap_or_else(|| Callback::new(|_: ()| dialog::alert(LOGIN_REQUIRED_MESSAGE)));
    let confirm_delete =
        confirm_delete.unwrap_or_else(|| Callback::new(|_: ()| dialog::confirm(CONFIRM_DELETE_MESSAGE)));

    let names = controller.names();
    let state = controller.state();
    let controller = store_value(controller);

    let reviews = create_memo(move |_| state.with(|s| s.reviews().to_vec()));
    let authors = create_memo(move |_| state.with(|s| s.author_ids()));
    let phase = create_memo(move |_| state.with(|s| s.phase()));
    let editing_id = create_memo(move |_| state.with(|s| s.editing().map(|d| d.review_id)));
    let edit_draft = Signal::derive(move || {
        state.with(|s| s.editing().map(|d| d.content.clone()).unwrap_or_default())
    });
    let new_draft = Signal::derive(move || state.with(|s| s.new_draft().to_string()));

    // Reload whenever the book changes.
    create_effect(move |_| {
        let isbn = isbn.get();
        let controller = controller.get_value();
        spawn_local(async move { controller.load(&isbn).await });
    });

    create_effect(move |_| {
        let authors = authors.get();
        let controller = controller.get_value();
        spawn_local(async move { controller.resolve_names(authors).await });
    });

    // Login problems are the only failures reported with a dialog; the rest
    // are already shown in the list area.
    let report = move |result: Result<(), ReviewError>| {
        if let Err(ReviewError::LoginRequired) = result {
            on_login_required.call(());
        }
    };

    let on_new_draft = Callback::new(move |text: String| controller.with_value(|c| c.set_new_draft(text)));
    let on_submit = Callback::new(move |_: ()| {
        let controller = controller.get_value();
        spawn_local(async move { report(controller.submit().await) });
    });
    let on_edit = Callback::new(move |review: Review| controller.with_value(|c| c.begin_edit(&review)));
    let on_draft = Callback::new(move |text: String| controller.with_value(|c| c.set_edit_draft(text)));
    let on_cancel = Callback::new(move |_: ()| controller.with_value(|c| c.cancel_edit()));
    let on_save = Callback::new(move |_: ()| {
        let controller = controller.get_value();
        spawn_local(async move { report(controller.save_edit().await) });
    });
    let on_delete = Callback::new(move |id: i64| {
        let controller = controller.get_value();
        spawn_local(async move {
            report(controller.delete(id, || confirm_delete.call(())).await);
        });
    });

    let list = move || match phase.get() {
        ListPhase::Loading => view! { <p class="review-status">{ "Loading reviews..." }</p> }.into_view(),
        ListPhase::Failed(message) => view! { <p class="error">{ message }</p> }.into_view(),
        ListPhase::Empty => view! { <p class="review-status">{ "No reviews yet." }</p> }.into_view(),
        ListPhase::Ready => view! {
            <ul class="review-list">
                // Content is part of the key so a review edited elsewhere is redrawn.
                <For
                    each=move || reviews.get()
                    key=|review| (review.id, review.content.clone())
                    children=move |review: Review| {
                        let id = review.id;
                        let user_id = review.user_id.clone();
                        let author = Signal::derive(move || {
                            names.with(|cache| cache.display_name(&user_id).to_string())
                        });
                        let can_modify = controller.with_value(|c| c.can_modify(&review));
                        view! {
                            <ReviewEntry
                                review=review
                                author=author
                                can_modify=can_modify
                                editing=Signal::derive(move || editing_id.get() == Some(id))
                                draft=edit_draft
                                on_edit=on_edit
                                on_draft=on_draft
                                on_save=on_save
                                on_cancel=on_cancel
                                on_delete=on_delete
                            />
                        }
                    }
                />
            </ul>
        }.into_view(),
    };

    view! {
        <section class="review-section">
            <h2>{ "Reviews" }</h2>
            {list}
            <ReviewForm draft=new_draft on_input=on_new_draft on_submit=on_submit />
        </section>
    }
}

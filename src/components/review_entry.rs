use leptos::*;
use crate::models::review::Review;

/// A single review with its inline editor.
/// Edit and delete controls only render when `can_modify` is set.
#[component]
pub fn ReviewEntry(
    review: Review,
    #[prop(into)] author: Signal<String>,
    can_modify: bool,
    #[prop(into)] editing: Signal<bool>,
    #[prop(into)] draft: Signal<String>,
    #[prop(into)] on_edit: Callback<Review>,
    #[prop(into)] on_draft: Callback<String>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_delete: Callback<i64>,
) -> impl IntoView {
    let id = review.id;
    let date = review.display_date();

    let body = move || {
        if editing.get() {
            view! {
                <textarea
                    class="review-input"
                    prop:value=move || draft.get()
                    on:input=move |e| on_draft.call(event_target_value(&e))
                />
                <button class="submit-button" on:click=move |_| on_save.call(())>{ "Save" }</button>
                <button class="cancel-button" on:click=move |_| on_cancel.call(())>{ "Cancel" }</button>
            }
            .into_view()
        } else {
            let controls = can_modify.then(|| {
                let review = review.clone();
                view! {
                    <div class="action-buttons">
                        <button class="edit-button" title="Edit" on:click=move |_| on_edit.call(review.clone())>
                            { "Edit" }
                        </button>
                        <button class="delete-button" title="Delete" on:click=move |_| on_delete.call(id)>
                            { "Delete" }
                        </button>
                    </div>
                }
            });
            view! {
                <p class="review-content">{ review.content.clone() }</p>
                {controls}
            }
            .into_view()
        }
    };

    view! {
        <li class="review-item">
            <div class="review-header">
                <span class="review-date">{ date }</span>
            </div>
            <p class="review-author">{ "Author: " }{ move || author.get() }</p>
            {body}
        </li>
    }
}

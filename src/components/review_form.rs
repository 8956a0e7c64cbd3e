use leptos::ev::SubmitEvent;
use leptos::*;

/// Form for writing a new review. The draft text is owned by the caller.
#[component]
pub fn ReviewForm(
    #[prop(into)] draft: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form class="review-form" on:submit=handle_submit>
            <textarea
                class="review-input"
                placeholder="Write a review..."
                required=true
                prop:value=move || draft.get()
                on:input=move |e| on_input.call(event_target_value(&e))
            />
            <button type="submit" class="submit-button">{ "Post review" }</button>
        </form>
    }
}

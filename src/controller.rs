//! Network flows of the review section: load, name lookup, create, edit and
//! delete, each applying its optimistic change before the request and
//! re-fetching the list (reconciliation) after a successful write.
use crate::api::ReviewGateway;
use crate::error::{FailedAction, ReviewError};
use crate::models::review::{Review, ReviewUpdate};
use crate::name_cache::UserNameCache;
use crate::session::{self, Session, SessionStore};
use crate::state::ReviewListState;
use chrono::Utc;
use futures::future::join_all;
use leptos::logging::{error, log, warn};
use leptos::*;
use std::rc::Rc;

pub struct ReviewController<G, S> {
    gateway: Rc<G>,
    store: Rc<S>,
    state: RwSignal<ReviewListState>,
    names: RwSignal<UserNameCache>,
}

impl<G, S> Clone for ReviewController<G, S> {
    fn clone(&self) -> Self {
        Self {
            gateway: Rc::clone(&self.gateway),
            store: Rc::clone(&self.store),
            state: self.state,
            names: self.names,
        }
    }
}

impl<G, S> ReviewController<G, S>
where
    G: ReviewGateway + 'static,
    S: SessionStore + 'static,
{
    /// `names` is usually the application-wide cache so that authors stay
    /// resolved across book pages.
    pub fn new(gateway: Rc<G>, store: Rc<S>, names: RwSignal<UserNameCache>) -> Self {
        Self {
            gateway,
            store,
            state: create_rw_signal(ReviewListState::default()),
            names,
        }
    }

    pub fn state(&self) -> RwSignal<ReviewListState> {
        self.state
    }

    pub fn names(&self) -> RwSignal<UserNameCache> {
        self.names
    }

    pub fn viewer_id(&self) -> Option<String> {
        session::viewer_id(&*self.store)
    }

    /// Only the author sees edit and delete controls.
    pub fn can_modify(&self, review: &Review) -> bool {
        self.viewer_id().as_deref() == Some(review.user_id.as_str())
    }

    pub async fn load(&self, isbn: &str) {
        log!("[REVIEWS] Loading reviews for {}", isbn);
        if self.state.try_update(|s| s.begin_load(isbn)).is_none() {
            return;
        }
        let result = match self.gateway.list_reviews(isbn).await {
            Ok(reviews) => Some(reviews),
            Err(err) => {
                error!("[REVIEWS] Failed to load reviews for {}: {}", isbn, err);
                None
            }
        };
        match self.state.try_update(|s| s.finish_load(isbn, result)) {
            Some(true) => {}
            Some(false) => log!("[REVIEWS] Dropped response for {}, book changed", isbn),
            None => log!("[REVIEWS] Dropped response for {}, view is gone", isbn),
        }
    }

    async fn reconcile(&self) {
        if let Some(isbn) = self.state.try_with_untracked(|s| s.isbn().to_string()) {
            self.load(&isbn).await;
        }
    }

    /// Looks up every author not already known or in flight.
    pub async fn resolve_names(&self, user_ids: Vec<String>) {
        let claimed = self
            .names
            .try_update(|cache| cache.claim(user_ids.iter().map(String::as_str)))
            .unwrap_or_default();
        if claimed.is_empty() {
            return;
        }
        log!("[NAMES] Resolving {} author(s)", claimed.len());
        join_all(claimed.iter().map(|user_id| self.resolve_name(user_id))).await;
    }

    async fn resolve_name(&self, user_id: &str) {
        match self.gateway.user_profile(user_id).await {
            Ok(profile) => {
                self.names.try_update(|cache| cache.resolve(user_id, profile.name));
            }
            Err(err) => {
                warn!("[NAMES] Falling back to id for {}: {}", user_id, err);
                self.names.try_update(|cache| cache.resolve_with_id(user_id));
            }
        }
    }

    pub fn set_new_draft(&self, content: String) {
        self.state.update(|s| s.set_new_draft(content));
    }

    /// Posts the new-review draft. `LoginRequired` comes back before anything
    /// is changed or sent, whatever the draft holds.
    pub async fn submit(&self) -> Result<(), ReviewError> {
        let session = self.session()?;
        let (isbn, content) = self
            .state
            .with_untracked(|s| (s.isbn().to_string(), s.new_draft().to_string()));
        if content.trim().is_empty() {
            log!("[REVIEWS] Ignoring blank review for {}", isbn);
            return Err(ReviewError::EmptyContent);
        }

        let review = Review::draft(&isbn, &session.user_id, content, Utc::now());
        self.state.update(|s| s.insert_optimistic(review.clone()));

        match self.gateway.create_review(&session, &review).await {
            Ok(()) => {
                log!("[REVIEWS] Created review for {}", isbn);
                self.reconcile().await;
                Ok(())
            }
            Err(err) => {
                error!("[REVIEWS] Failed to create review for {}: {}", isbn, err);
                self.state.try_update(|s| s.fail(FailedAction::Create));
                Err(err)
            }
        }
    }

    pub fn begin_edit(&self, review: &Review) {
        self.state.update(|s| s.begin_edit(review));
    }

    pub fn set_edit_draft(&self, content: String) {
        self.state.update(|s| s.set_edit_draft(content));
    }

    pub fn cancel_edit(&self) {
        self.state.update(|s| s.end_edit());
    }

    /// Sends the draft of the review being edited, if any.
    pub async fn save_edit(&self) -> Result<(), ReviewError> {
        let session = self.session()?;
        let Some(draft) = self.state.with_untracked(|s| s.editing().cloned()) else {
            return Ok(());
        };

        let update = ReviewUpdate {
            content: draft.content,
        };
        match self.gateway.update_review(&session, draft.review_id, &update).await {
            Ok(()) => {
                log!("[REVIEWS] Updated review {}", draft.review_id);
                self.state.try_update(|s| s.finish_edit(draft.review_id));
                self.reconcile().await;
                Ok(())
            }
            Err(err) => {
                error!("[REVIEWS] Failed to update review {}: {}", draft.review_id, err);
                self.state.try_update(|s| s.fail(FailedAction::Edit));
                Err(err)
            }
        }
    }

    /// `confirm` is only asked once the viewer is known to be logged in.
    pub async fn delete(
        &self,
        review_id: i64,
        confirm: impl FnOnce() -> bool,
    ) -> Result<(), ReviewError> {
        let session = self.session()?;
        if !confirm() {
            log!("[REVIEWS] Delete of review {} cancelled", review_id);
            return Ok(());
        }

        self.state.update(|s| s.remove_optimistic(review_id));
        match self.gateway.delete_review(&session, review_id).await {
            Ok(()) => {
                log!("[REVIEWS] Deleted review {}", review_id);
                self.reconcile().await;
                Ok(())
            }
            Err(err) => {
                error!("[REVIEWS] Failed to delete review {}: {}", review_id, err);
                self.state.try_update(|s| s.fail(FailedAction::Delete));
                Err(err)
            }
        }
    }

    fn session(&self) -> Result<Session, ReviewError> {
        Session::from_store(&*self.store).map_err(|err| {
            warn!("[SESSION] Write rejected: {}", err);
            err
        })
    }
}

//! View state of the review section.
//!
//! Everything the section renders lives in [`ReviewListState`]; the
//! controller mutates it around network calls and the components only read
//! it, so the optimistic update rules can be tested without a browser.
use crate::error::FailedAction;
use crate::models::review::Review;

/// Inline edit in progress. Only one review can be edited at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub review_id: i64,
    pub content: String,
}

/// What the list area shows, in order of precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Failed(&'static str),
    Empty,
    Ready,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewListState {
    isbn: String,
    reviews: Vec<Review>,
    loading: bool,
    failure: Option<FailedAction>,
    new_draft: String,
    editing: Option<EditDraft>,
}

impl ReviewListState {
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn failure(&self) -> Option<FailedAction> {
        self.failure
    }

    pub fn new_draft(&self) -> &str {
        &self.new_draft
    }

    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    pub fn phase(&self) -> ListPhase {
        if self.loading {
            ListPhase::Loading
        } else if let Some(failed) = self.failure {
            ListPhase::Failed(failed.message())
        } else if self.reviews.is_empty() {
            ListPhase::Empty
        } else {
            ListPhase::Ready
        }
    }

    /// Distinct author ids in list order.
    pub fn author_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for review in &self.reviews {
            if !ids.contains(&review.user_id) {
                ids.push(review.user_id.clone());
            }
        }
        ids
    }

    /// Starts a fetch for `isbn`, which becomes the current book.
    pub fn begin_load(&mut self, isbn: &str) {
        self.isbn = isbn.to_string();
        self.loading = true;
        self.failure = None;
    }

    /// Applies a fetch result. Results for a book that is no longer current
    /// are dropped and reported as `false`.
    pub fn finish_load(&mut self, isbn: &str, result: Option<Vec<Review>>) -> bool {
        if self.isbn != isbn {
            return false;
        }
        match result {
            Some(reviews) => self.reviews = reviews,
            None => self.failure = Some(FailedAction::Load),
        }
        self.loading = false;
        true
    }

    pub fn fail(&mut self, action: FailedAction) {
        self.failure = Some(action);
    }

    pub fn set_new_draft(&mut self, content: String) {
        self.new_draft = content;
    }

    /// Puts a not-yet-saved review at the head of the list and clears the input.
    pub fn insert_optimistic(&mut self, review: Review) {
        self.reviews.insert(0, review);
        self.new_draft.clear();
    }

    pub fn remove_optimistic(&mut self, review_id: i64) {
        self.reviews.retain(|review| review.id != review_id);
    }

    /// Replaces any edit in progress.
    pub fn begin_edit(&mut self, review: &Review) {
        self.editing = Some(EditDraft {
            review_id: review.id,
            content: review.content.clone(),
        });
    }

    pub fn set_edit_draft(&mut self, content: String) {
        if let Some(draft) = self.editing.as_mut() {
            draft.content = content;
        }
    }

    pub fn end_edit(&mut self) {
        self.editing = None;
    }

    /// Leaves edit mode after a save, unless the viewer has moved on to
    /// another review in the meantime.
    pub fn finish_edit(&mut self, review_id: i64) {
        if self.editing.as_ref().map(|draft| draft.review_id) == Some(review_id) {
            self.editing = None;
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::models::review::Review;

    pub fn review(id: i64, user_id: &str, content: &str) -> Review {
        Review {
            id,
            isbn: "9788966262472".into(),
            user_id: user_id.into(),
            create_date: "2024-05-01T09:30:00".into(),
            content: content.into(),
        }
    }
}

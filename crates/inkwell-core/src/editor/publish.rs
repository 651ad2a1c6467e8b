use super::Draft;
use crate::domain::Post;
use crate::error::DomainError;
use crate::ports::{Clock, Notification, PostSink, PublishNotifier};

/// Post editor - owns the draft and publishes it on an accepted submit.
pub struct PostEditor<C> {
    draft: Draft,
    clock: C,
}

impl<C: Clock> PostEditor<C> {
    pub fn new(clock: C) -> Self {
        Self {
            draft: Draft::new(),
            clock,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Validate the whole draft and publish it when every field is valid.
    ///
    /// On success the post is appended to `store`, `notifier` is told about
    /// it and the draft is reset. On rejection the draft is kept and every
    /// field error becomes visible.
    pub fn submit<S, N>(&mut self, store: &mut S, notifier: &N) -> Result<Post, DomainError>
    where
        S: PostSink + ?Sized,
        N: PublishNotifier + ?Sized,
    {
        if !self.draft.validate_all() {
            let errors = self.draft.errors().clone();
            tracing::info!(errors = %errors, "Submission rejected");
            return Err(DomainError::Rejected(errors));
        }

        let post = self.draft.to_post(self.clock.now());
        store.append(post.clone());
        notifier.notify(&Notification::published(&post));
        self.draft.reset();

        tracing::info!(
            title = %post.title,
            category = %post.category,
            tags = post.tags.len(),
            "Post published"
        );

        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::domain::{Category, Field, FieldValue};
    use crate::editor::ValidationError;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[derive(Default)]
    struct Recorder(RefCell<Vec<Notification>>);

    impl PublishNotifier for Recorder {
        fn notify(&self, notification: &Notification) {
            self.0.borrow_mut().push(notification.clone());
        }
    }

    fn editor() -> PostEditor<FixedClock> {
        PostEditor::new(FixedClock(
            Utc.with_ymd_and_hms(2024, 3, 17, 12, 0, 0).unwrap(),
        ))
    }

    fn seed_post(id: u64) -> Post {
        Post {
            id: Some(id),
            title: format!("Seed {id}"),
            content: "seed".to_string(),
            author: Some("Jane Doe".to_string()),
            date: Some("2024-03-15".to_string()),
            category: Category::General,
            tags: vec![],
            timestamp: None,
            published: true,
        }
    }

    fn fill(editor: &mut PostEditor<FixedClock>) {
        let draft = editor.draft_mut();
        draft.change(FieldValue::Title("Valid Title".to_string()));
        draft.change(FieldValue::Content("c".repeat(100)));
        draft.add_tag("a");
        draft.change(FieldValue::Category(Category::General));
    }

    #[test]
    fn test_accepted_submit_appends_one_published_post() {
        let mut editor = editor();
        let mut store = vec![seed_post(1), seed_post(2)];
        let notifier = Recorder::default();
        fill(&mut editor);

        let post = editor.submit(&mut store, &notifier).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store[..2], [seed_post(1), seed_post(2)]);
        assert_eq!(store[2], post);
        assert!(post.published);
        assert_eq!(post.timestamp.as_deref(), Some("2024-03-17T12:00:00.000Z"));
        assert_eq!(post.id, None);
    }

    #[test]
    fn test_accepted_submit_resets_draft_and_notifies() {
        let mut editor = editor();
        let mut store = Vec::new();
        let notifier = Recorder::default();
        fill(&mut editor);

        editor.submit(&mut store, &notifier).unwrap();

        let draft = editor.draft();
        assert_eq!(draft.title(), "");
        assert_eq!(draft.content(), "");
        assert!(draft.tags().is_empty());
        assert!(draft.errors().is_clean());

        let sent = notifier.0.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].message, "Post published successfully!");
        assert_eq!(sent[0].title, "Valid Title");
    }

    #[test]
    fn test_rejected_submit_keeps_draft_and_shows_all_errors() {
        let mut editor = editor();
        let mut store = vec![seed_post(1)];
        let notifier = Recorder::default();
        editor
            .draft_mut()
            .change(FieldValue::Title("Hi".to_string()));

        let err = editor.submit(&mut store, &notifier).unwrap_err();

        let DomainError::Rejected(errors) = err else {
            panic!("expected rejection");
        };
        assert_eq!(errors[Field::Title], Some(ValidationError::TitleTooShort));
        assert_eq!(errors[Field::Content], Some(ValidationError::ContentTooShort));
        assert_eq!(errors[Field::Tags], Some(ValidationError::TagsMissing));
        assert_eq!(errors[Field::Category], None);

        assert_eq!(store.len(), 1);
        assert!(notifier.0.borrow().is_empty());
        assert_eq!(editor.draft().title(), "Hi");
        assert_eq!(editor.draft().errors(), &errors);
    }

    #[test]
    fn test_single_invalid_field_blocks_publish() {
        let mut editor = editor();
        let mut store = Vec::new();
        let notifier = Recorder::default();
        fill(&mut editor);
        editor.draft_mut().remove_tag("a");

        assert!(editor.submit(&mut store, &notifier).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_title_error_waits_for_blur_or_submit() {
        let mut editor = editor();
        let mut store = Vec::new();
        let notifier = Recorder::default();

        editor.draft_mut().change(FieldValue::Title(String::new()));
        assert_eq!(editor.draft().error(Field::Title), None);

        assert!(editor.submit(&mut store, &notifier).is_err());
        assert_eq!(
            editor.draft().error(Field::Title),
            Some(ValidationError::TitleTooShort)
        );
    }
}

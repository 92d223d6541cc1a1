//! SubmitContactHandler - runs a contact form submission against a site.
//!
//! Nothing is sent anywhere. A valid form is held in the sending state for
//! the submit delay, then cleared and the success message shown; the
//! message is hidden again after its visibility window.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::application::Site;
use crate::domain::contact::{FieldError, FieldName, FormMessage, SubmitRejected};
use crate::ports::PresentationSurface;

/// Timer settings for submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionSettings {
    pub submit_delay: Duration,
    pub message_visible: Duration,
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
            message_visible: Duration::from_millis(5000),
        }
    }
}

/// Command carrying the submitted field values.
#[derive(Debug, Clone, Default)]
pub struct SubmitContactCommand {
    pub values: BTreeMap<FieldName, String>,
}

#[derive(Debug, Clone)]
pub struct SubmitContactResult {
    pub message: FormMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitContactError {
    #[error("Form has invalid fields")]
    Invalid(BTreeMap<FieldName, FieldError>),

    #[error("A submission is already in progress")]
    AlreadySending,

    #[error("Submission task failed: {0}")]
    Interrupted(String),
}

impl From<SubmitRejected> for SubmitContactError {
    fn from(rejected: SubmitRejected) -> Self {
        match rejected {
            SubmitRejected::Invalid(errors) => SubmitContactError::Invalid(errors),
            SubmitRejected::AlreadySending => SubmitContactError::AlreadySending,
        }
    }
}

pub struct SubmitContactHandler<S: PresentationSurface> {
    site: Arc<Mutex<Site<S>>>,
    settings: SubmissionSettings,
}

impl<S: PresentationSurface + 'static> SubmitContactHandler<S> {
    pub fn new(site: Arc<Mutex<Site<S>>>, settings: SubmissionSettings) -> Self {
        Self { site, settings }
    }

    pub async fn handle(
        &self,
        cmd: SubmitContactCommand,
    ) -> Result<SubmitContactResult, SubmitContactError> {
        // 1. Fill and validate under the lock; the site stays usable while
        //    the submission waits.
        let ticket = {
            let mut site = self.site.lock().await;
            let form = site.form_mut();
            for (field, value) in cmd.values {
                form.input(field, value);
            }
            form.begin_submission()?
        };
        tracing::debug!(started_at = %ticket.started_at(), "Contact submission started");

        // 2-4 run detached so a dropped request cannot strand the form in
        // the sending state.
        let site = Arc::clone(&self.site);
        let settings = self.settings;
        let completion = tokio::spawn(async move {
            tokio::time::sleep(settings.submit_delay).await;

            let message = site.lock().await.form_mut().complete_submission(ticket).clone();
            tracing::info!("Contact submission completed");

            tokio::spawn(async move {
                tokio::time::sleep(settings.message_visible).await;
                site.lock().await.form_mut().hide_message();
            });
            message
        });

        let message = completion
            .await
            .map_err(|e| SubmitContactError::Interrupted(e.to_string()))?;

        Ok(SubmitContactResult { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::icons::FeatherIcons;
    use crate::adapters::surface::InMemorySurface;
    use crate::application::SiteSettings;
    use crate::domain::contact::{SubmissionStatus, SENDING_LABEL, SUBMIT_LABEL, SUCCESS_MESSAGE};
    use crate::domain::content::ContentStore;

    fn shared_site() -> Arc<Mutex<Site<InMemorySurface>>> {
        Arc::new(Mutex::new(Site::new(
            ContentStore::fallback(),
            InMemorySurface::complete(),
            Arc::new(FeatherIcons::new()),
            SiteSettings::default(),
        )))
    }

    fn valid_command() -> SubmitContactCommand {
        SubmitContactCommand {
            values: BTreeMap::from([
                (FieldName::FirstName, "Ada".to_string()),
                (FieldName::LastName, "Lovelace".to_string()),
                (FieldName::Email, "ada@example.com".to_string()),
                (FieldName::Message, "Please review my lease.".to_string()),
            ]),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn valid_submission_waits_then_succeeds() {
        let site = shared_site();
        let handler = Arc::new(SubmitContactHandler::new(site.clone(), SubmissionSettings::default()));

        let task = tokio::spawn({
            let handler = handler.clone();
            async move { handler.handle(valid_command()).await }
        });

        tokio::time::sleep(Duration::from_millis(1000)).await;
        {
            let site = site.lock().await;
            assert_eq!(site.form().status(), SubmissionStatus::Sending);
            assert_eq!(site.form().submit_control().label, SENDING_LABEL);
            assert!(site.form().submit_control().disabled);
        }

        let result = task.await.unwrap().unwrap();
        assert_eq!(result.message.text, SUCCESS_MESSAGE);

        let site = site.lock().await;
        assert_eq!(site.form().status(), SubmissionStatus::Idle);
        assert_eq!(site.form().submit_control().label, SUBMIT_LABEL);
        assert!(!site.form().submit_control().disabled);
        assert_eq!(site.form().value(FieldName::FirstName), "");
        assert!(site.form().errors().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn message_hides_after_visibility_window() {
        let site = shared_site();
        let handler = SubmitContactHandler::new(site.clone(), SubmissionSettings::default());

        handler.handle(valid_command()).await.unwrap();
        assert!(site.lock().await.form().message().unwrap().visible);

        tokio::time::sleep(Duration::from_millis(5001)).await;

        assert!(!site.lock().await.form().message().unwrap().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_submission_reports_every_failing_field() {
        let site = shared_site();
        let handler = SubmitContactHandler::new(site.clone(), SubmissionSettings::default());

        let err = handler
            .handle(SubmitContactCommand {
                values: BTreeMap::from([
                    (FieldName::Email, "a@b".to_string()),
                    (FieldName::Message, "short".to_string()),
                ]),
            })
            .await
            .unwrap_err();

        match err {
            SubmitContactError::Invalid(errors) => {
                assert_eq!(errors.get(&FieldName::FirstName), Some(&FieldError::Required));
                assert_eq!(errors.get(&FieldName::LastName), Some(&FieldError::Required));
                assert_eq!(errors.get(&FieldName::Email), Some(&FieldError::InvalidEmail));
                assert_eq!(errors.get(&FieldName::Message), Some(&FieldError::MessageTooShort));
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(site.lock().await.form().status(), SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn second_submission_while_sending_is_rejected() {
        let site = shared_site();
        let handler = Arc::new(SubmitContactHandler::new(site, SubmissionSettings::default()));

        let first = tokio::spawn({
            let handler = handler.clone();
            async move { handler.handle(valid_command()).await }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;

        let second = handler.handle(valid_command()).await;

        assert_eq!(second.unwrap_err(), SubmitContactError::AlreadySending);
        assert!(first.await.unwrap().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_request_still_completes_submission() {
        let site = shared_site();
        let handler = Arc::new(SubmitContactHandler::new(site.clone(), SubmissionSettings::default()));

        let first = tokio::spawn({
            let handler = handler.clone();
            async move { handler.handle(valid_command()).await }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        first.abort();

        tokio::time::sleep(Duration::from_secs(60)).await;
        {
            let site = site.lock().await;
            assert_eq!(site.form().status(), SubmissionStatus::Idle);
            assert_eq!(site.form().submit_control().label, SUBMIT_LABEL);
            assert!(!site.form().submit_control().disabled);
        }

        let second = handler.handle(valid_command()).await;
        assert_eq!(second.unwrap().message.text, SUCCESS_MESSAGE);
    }
}

use std::future::Future;
use std::pin::Pin;
#[cfg(feature = "ssr")]
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{ContactConfig, ContactError, ContactForm, Submission};

/// Shared delivery client for the server, configured from the environment on
/// first use.
#[cfg(feature = "ssr")]
pub static DELIVERY: LazyLock<HttpDelivery> =
    LazyLock::new(|| HttpDelivery::new(ContactConfig::from_env()));

/// A task handed to the runtime and never joined.
pub type DetachedTask = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

pub trait EmailService {
    fn send(&self, form: &ContactForm) -> impl Future<Output = Result<(), ContactError>> + Send;
}

pub trait Webhook {
    fn post(&self, submission: &Submission)
        -> impl Future<Output = Result<(), ContactError>> + Send;
}

/// Outcome of one accepted submission. The email result is not part of it:
/// that delivery runs detached and only ever reports to the log.
#[derive(Debug)]
pub struct Delivery {
    pub submission: Submission,
    pub webhook: Result<(), ContactError>,
}

/// Validates the form, fires the email task through `spawn` without waiting
/// for it, then posts the submission record to the webhook. Webhook failures
/// are logged and reported in the returned [`Delivery`], never as an `Err`;
/// only a missing field is an error, and in that case nothing is sent.
pub async fn deliver<E, W, S>(
    form: ContactForm,
    page_url: String,
    at: DateTime<Utc>,
    email: E,
    webhook: &W,
    spawn: S,
) -> Result<Delivery, ContactError>
where
    E: EmailService + Send + Sync + 'static,
    W: Webhook,
    S: FnOnce(DetachedTask),
{
    form.validate()?;
    let submission = Submission::new(&form, page_url, at);

    spawn(Box::pin(async move {
        if let Err(e) = email.send(&form).await {
            log::error!("Email submission failed: {e}");
        }
    }));

    let webhook = webhook.post(&submission).await;
    if let Err(e) = &webhook {
        log::error!("Google Sheet submission failed: {e}");
    }

    Ok(Delivery {
        submission,
        webhook,
    })
}

#[derive(Serialize)]
struct EmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactForm,
}

#[derive(Debug, Clone)]
pub struct HttpDelivery {
    client: reqwest::Client,
    config: ContactConfig,
}

impl HttpDelivery {
    pub fn new(config: ContactConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }
}

impl EmailService for HttpDelivery {
    async fn send(&self, form: &ContactForm) -> Result<(), ContactError> {
        let url = format!(
            "{}/api/v1.0/email/send",
            self.config.email_api_url.trim_end_matches('/')
        );
        let body = EmailRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.user_id,
            template_params: form,
        };
        let res = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(ContactError::Email)?;
        if !res.status().is_success() {
            return Err(ContactError::EmailStatus(res.status().as_u16()));
        }
        Ok(())
    }
}

impl Webhook for HttpDelivery {
    async fn post(&self, submission: &Submission) -> Result<(), ContactError> {
        // The response is opaque to us; only transport failures count.
        self.client
            .post(&self.config.webhook_url)
            .json(submission)
            .send()
            .await
            .map_err(ContactError::Webhook)?;
        Ok(())
    }
}

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use shared::protocol::ShortenResponse;
use tracing::{debug, info, warn};

use crate::{
    error::ShortenError,
    form::{build_request, FormValues},
    ports::{ShortenerApi, UiPort},
    presenter::ResultPresenter,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Shortened(ShortenResponse),
    /// The service could not be reached or answered with an error.
    Failed,
    /// The form was rejected locally; nothing was sent.
    Rejected,
    /// Another submission was still in flight.
    Ignored,
}

/// Clears the in-flight flag and re-enables submit on every exit path.
struct InFlight<'a> {
    flag: &'a AtomicBool,
    ui: &'a dyn UiPort,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        self.ui.set_submit_enabled(true);
    }
}

pub struct SubmissionCoordinator {
    ui: Arc<dyn UiPort>,
    api: Arc<dyn ShortenerApi>,
    presenter: ResultPresenter,
    in_flight: AtomicBool,
}

impl SubmissionCoordinator {
    pub fn new(ui: Arc<dyn UiPort>, api: Arc<dyn ShortenerApi>, presenter: ResultPresenter) -> Self {
        Self {
            ui,
            api,
            presenter,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn submit(&self, form: FormValues) -> SubmitOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("submission ignored: previous request still in flight");
            return SubmitOutcome::Ignored;
        }
        self.ui.set_submit_enabled(false);
        let _in_flight = InFlight {
            flag: &self.in_flight,
            ui: self.ui.as_ref(),
        };

        let request = match build_request(&form) {
            Ok(request) => request,
            Err(err) => {
                debug!(kind = err.kind(), "submission rejected locally");
                self.ui.alert(&err.alert_message());
                return SubmitOutcome::Rejected;
            }
        };

        info!(
            url = %request.url,
            has_alias = request.custom_alias.is_some(),
            has_password = request.password.is_some(),
            max_clicks = request.max_clicks,
            "submitting shorten request"
        );

        match self.api.shorten(&request).await {
            Ok(response) => {
                self.presenter.show(&response.short_url);
                SubmitOutcome::Shortened(response)
            }
            Err(err) => {
                self.report(&err);
                SubmitOutcome::Failed
            }
        }
    }

    fn report(&self, err: &ShortenError) {
        match err {
            ShortenError::Api { status, message } => {
                warn!(status, "shorten request rejected by service: {message}");
            }
            ShortenError::Network(_)
            | ShortenError::MalformedResponse(_)
            | ShortenError::Validation(_) => {
                warn!(kind = err.kind(), "shorten request failed: {err}");
            }
        }
        self.ui.alert(&err.alert_message());
    }
}

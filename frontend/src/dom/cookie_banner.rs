use super::analytics::BrowserAnalytics;
use super::storage;
use crate::core::preferences::ConsentDecision;
use crate::error::FrontendError;
use gloo_timers::callback::Timeout;

const BANNER_CLASS: &str = "cookie-banner";

const BANNER_HTML: &str = r#"
    <div class="container">
        <div class="row align-items-center">
            <div class="col-md-8">
                <p class="mb-0">We use cookies to enhance your experience. By continuing to visit this site you agree to our use of cookies.</p>
            </div>
            <div class="col-md-4 text-end">
                <button class="btn btn-primary btn-sm me-2" onclick="acceptCookies()">Accept</button>
                <button class="btn btn-outline-light btn-sm" onclick="declineCookies()">Decline</button>
            </div>
        </div>
    </div>
"#;

/// Shows the consent banner after `delay_ms` unless a decision is already
/// stored.
pub fn schedule(delay_ms: u32) {
    Timeout::new(delay_ms, || {
        if !storage::preferences().needs_consent_banner() {
            return;
        }
        if let Err(e) = show_banner() {
            log::warn!("cookie banner skipped: {e}");
        }
    })
    .forget();
}

fn show_banner() -> Result<(), FrontendError> {
    let document = super::document()?;
    if document.query_selector(&format!(".{BANNER_CLASS}"))?.is_some() {
        return Ok(());
    }
    let banner = document.create_element("div")?;
    banner.set_class_name(&format!(
        "{BANNER_CLASS} position-fixed bottom-0 start-0 end-0 bg-dark text-white p-3 z-index-9999"
    ));
    banner.set_inner_html(BANNER_HTML);
    super::body()?.append_child(&banner)?;
    Ok(())
}

/// Persists the choice, removes the banner and tracks the decision.
pub fn decide(decision: ConsentDecision) {
    storage::preferences().record_consent(decision, &BrowserAnalytics::new());
    match super::document().and_then(|d| Ok(d.query_selector(&format!(".{BANNER_CLASS}"))?)) {
        Ok(Some(banner)) => banner.remove(),
        Ok(None) => {}
        Err(e) => log::warn!("could not remove cookie banner: {e}"),
    }
}

//! Browser implementation of the core catalogue transport.

use crate::dom;
use h5arcade_core::{CatalogueTransport, TransportError, TransportReply};

/// Fetches the catalogue over `window.fetch` and pauses between retry
/// attempts with a browser timeout.
#[derive(Clone, Copy, Default)]
pub struct BrowserTransport;

impl CatalogueTransport for BrowserTransport {
    async fn fetch(&self, path: &str) -> Result<TransportReply, TransportError> {
        let response = dom::fetch_response(path)
            .await
            .map_err(|err| TransportError(dom::js_error_message(&err)))?;
        let status = response.status();
        let body = dom::response_text(&response)
            .await
            .map_err(|err| TransportError(dom::js_error_message(&err)))?;
        Ok(TransportReply { status, body })
    }

    async fn pause_ms(&self, delay_ms: u32) {
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        if let Err(err) = dom::sleep_ms(delay).await {
            dom::console_error(&format!(
                "retry pause failed: {}",
                dom::js_error_message(&err)
            ));
        }
    }
}

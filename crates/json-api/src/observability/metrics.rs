//! Prometheus HTTP metrics and the `/metrics` exposition endpoint.

use std::sync::OnceLock;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use salvo::{
    Request, Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

const DURATION_BUCKETS: [f64; 12] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
];

#[derive(Debug)]
struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
}

impl HttpMetrics {
    fn build() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new(
                "promotions_json_http_requests_total",
                "Total HTTP requests by method, route and status code.",
            ),
            &["method", "route", "status_class", "status_code"],
        )?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "promotions_json_http_request_duration_seconds",
                "HTTP request duration in seconds by method and route.",
            )
            .buckets(DURATION_BUCKETS.to_vec()),
            &["method", "route"],
        )?;

        let requests_in_flight = IntGauge::with_opts(Opts::new(
            "promotions_json_http_requests_in_flight",
            "HTTP requests currently being served.",
        ))?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration_seconds.clone()))?;
        registry.register(Box::new(requests_in_flight.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration_seconds,
            requests_in_flight,
        })
    }

    fn encode(&self) -> Result<(String, Vec<u8>), prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut encoded = Vec::new();

        encoder.encode(&self.registry.gather(), &mut encoded)?;

        Ok((encoder.format_type().to_owned(), encoded))
    }
}

static HTTP_METRICS: OnceLock<Option<HttpMetrics>> = OnceLock::new();

fn metrics() -> Option<&'static HttpMetrics> {
    HTTP_METRICS
        .get_or_init(|| {
            HttpMetrics::build()
                .inspect_err(|source| error!("failed to build http metrics: {source}"))
                .ok()
        })
        .as_ref()
}

/// Keeps the in-flight gauge raised while a request is served.
#[derive(Debug)]
pub(super) struct InFlightRequestGuard {
    tracked: bool,
}

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        let tracked = metrics()
            .map(|metrics| metrics.requests_in_flight.inc())
            .is_some();

        Self { tracked }
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if self.tracked
            && let Some(metrics) = metrics()
        {
            metrics.requests_in_flight.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status_code: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    let status_code_label = status_code.to_string();

    metrics
        .requests_total
        .with_label_values(&[
            method,
            route,
            status_class(status_code),
            status_code_label.as_str(),
        ])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, route])
        .observe(duration_seconds);
}

#[handler]
pub(crate) async fn metrics_handler(_req: &mut Request, res: &mut Response) {
    let (content_type, body) = match metrics().map(HttpMetrics::encode) {
        Some(Ok(encoded)) => encoded,
        Some(Err(source)) => {
            error!("failed to encode metrics response: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            return;
        }
        None => {
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            return;
        }
    };

    match HeaderValue::from_str(&content_type) {
        Ok(value) => {
            res.headers_mut().insert(CONTENT_TYPE, value);
            res.render(String::from_utf8_lossy(&body).into_owned());
        }
        Err(source) => {
            error!("failed to encode metrics content type header: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

fn status_class(status_code: u16) -> &'static str {
    match status_code {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

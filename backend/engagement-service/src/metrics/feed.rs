use lazy_static::lazy_static;
use prometheus::{register_histogram_vec, HistogramVec};

lazy_static! {
    /// Duration of feed queries by mode (trending, explore).
    pub static ref FEED_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "feed_request_duration_seconds",
        "Feed query duration segmented by mode",
        &["mode"]
    )
    .expect("failed to register feed_request_duration_seconds");

    /// Items returned per feed page by mode.
    pub static ref FEED_RESULT_SIZE: HistogramVec = register_histogram_vec!(
        "feed_result_size",
        "Number of items returned per feed page segmented by mode",
        &["mode"],
        vec![0.0, 1.0, 5.0, 10.0, 20.0, 50.0, 100.0]
    )
    .expect("failed to register feed_result_size");
}

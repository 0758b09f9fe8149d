//! Progress-callback trait for per-screenshot description events.
//!
//! Inject an `Arc<dyn DescribeProgressCallback>` via
//! [`crate::config::DescribeConfigBuilder::progress_callback`] to receive
//! events as the pipeline works through the screenshot directory.
//!
//! The callback approach is the least-invasive integration point: callers
//! can forward events to a terminal progress bar, a log, or a CI annotation
//! without the library knowing anything about how the host application
//! communicates. Descriptions are generated strictly one at a time, so
//! implementations never see concurrent calls, but the trait is still
//! `Send + Sync` so an `Arc` of it can cross task boundaries.

use std::sync::Arc;

/// Called by the description stage as it processes each screenshot.
///
/// All methods have default no-op implementations so callers only override
/// what they care about.
pub trait DescribeProgressCallback: Send + Sync {
    /// Called once after the directory scan, before any model call.
    fn on_scan_complete(&self, total_images: usize) {
        let _ = total_images;
    }

    /// Called just before the vision-model request for one screenshot.
    fn on_image_start(&self, filename: &str, index: usize, total: usize) {
        let _ = (filename, index, total);
    }

    /// Called when a screenshot was described successfully.
    fn on_image_described(&self, filename: &str, description_len: usize) {
        let _ = (filename, description_len);
    }

    /// Called when the model call failed and the description degraded to an
    /// error string.
    fn on_image_failed(&self, filename: &str, error: &str) {
        let _ = (filename, error);
    }

    /// Called once after every screenshot has been attempted.
    fn on_describe_complete(&self, total_images: usize, failed: usize) {
        let _ = (total_images, failed);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopDescribeProgress;

impl DescribeProgressCallback for NoopDescribeProgress {}

/// Convenience alias matching the type stored in
/// [`crate::config::DescribeConfig`].
pub type DescribeProgress = Arc<dyn DescribeProgressCallback>;

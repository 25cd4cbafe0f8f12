//! Bounded-time polling loop over a vision provider.
//!
//! A locate call is a deadline-bounded retry on emptiness: every iteration
//! acquires a fresh frame and runs one real match against it, and the loop
//! ends on the first non-empty result or once the deadline has passed.
//! Timing out is not an error here; the caller decides what an empty result
//! means. Backend errors end the loop immediately.

use std::time::Duration;
use std::time::Instant;

use robotui_core::LocateResult;
use tracing::debug;

use crate::ports::OptionBag;
use crate::ports::VisionError;
use crate::ports::VisionProvider;

/// Polls `vision` for `image_id` until found or `timeout` has elapsed.
///
/// A zero timeout performs exactly one poll. The result ordering is the
/// provider's and is returned untouched.
pub fn locate_image<V: VisionProvider>(
    vision: &V,
    image_id: &str,
    timeout: Duration,
    force_reload: bool,
    options: &OptionBag,
) -> Result<LocateResult, VisionError> {
    poll_until_found(vision, image_id, timeout, |frame| {
        vision.locate_image(frame, image_id, force_reload, options)
    })
}

/// Polls `vision` for `text` until found or `timeout` has elapsed.
pub fn locate_text<V: VisionProvider>(
    vision: &V,
    text: &str,
    timeout: Duration,
    options: &OptionBag,
) -> Result<LocateResult, VisionError> {
    poll_until_found(vision, text, timeout, |frame| {
        vision.locate_text(frame, text, options)
    })
}

fn poll_until_found<V, F>(
    vision: &V,
    query: &str,
    timeout: Duration,
    mut locate: F,
) -> Result<LocateResult, VisionError>
where
    V: VisionProvider,
    F: FnMut(&V::Frame) -> Result<LocateResult, VisionError>,
{
    let start = Instant::now();
    let deadline = start + timeout;
    let mut polls = 0u32;

    loop {
        let frame = vision.acquire_frame()?;
        polls += 1;

        let found = locate(&frame)?;
        if !found.is_empty() || Instant::now() >= deadline {
            debug!(
                query,
                polls,
                matches = found.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "locate finished"
            );
            return Ok(found);
        }
    }
}

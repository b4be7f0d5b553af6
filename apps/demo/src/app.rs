//! Demo flow: fill, erase the inner range, render.

use ringkit_buffer::RingBuffer;

use crate::config::{Config, OutputFormat};

/// Builds the buffer described by `config` and erases everything except the
/// configured number of elements at each end.
pub fn build(config: &Config) -> anyhow::Result<RingBuffer<i64>> {
    let mut buffer = RingBuffer::with_policy(config.capacity, config.policy);
    for &value in &config.values {
        if let Some(evicted) = buffer.push_back(value) {
            tracing::debug!(evicted, "buffer full, oldest value overwritten");
        }
    }

    let first = buffer.cursor(config.erase_skip_front);
    let last = buffer.cursor(buffer.len().saturating_sub(config.erase_skip_back));
    let before = buffer.len();
    buffer.erase_range(first, last)?;
    tracing::info!(
        erased = before - buffer.len(),
        remaining = buffer.len(),
        capacity = buffer.capacity(),
        "inner range erased"
    );

    Ok(buffer)
}

/// Renders the buffer in the configured output format.
pub fn render(buffer: &RingBuffer<i64>, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Plain => Ok(buffer
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(" ")),
        OutputFormat::Json => Ok(serde_json::to_string(buffer)?),
    }
}

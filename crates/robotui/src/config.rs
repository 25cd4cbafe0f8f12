use std::env;
use std::time::Duration;

use robotui_core::BoundingBox;

const DEFAULT_LOCATE_TIMEOUT_MS: u64 = 0;

/// Facade-level settings, resolved once at construction.
///
/// The locate timeout applies to every symbolic resolve whose call site does
/// not pass its own; zero means a single locate attempt with no retry.
#[derive(Debug, Clone)]
pub struct InteractionConfig {
    pub locate_timeout: Duration,
    pub work_area: BoundingBox,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl InteractionConfig {
    pub fn from_env() -> Self {
        Self {
            locate_timeout: Duration::from_millis(
                env::var("ROBOTUI_LOCATE_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_LOCATE_TIMEOUT_MS),
            ),
            work_area: BoundingBox::UNIT,
        }
    }

    pub fn with_locate_timeout(mut self, timeout: Duration) -> Self {
        self.locate_timeout = timeout;
        self
    }

    pub fn with_work_area(mut self, work_area: BoundingBox) -> Self {
        self.work_area = work_area;
        self
    }
}

use chrono::{DateTime, Duration, Utc};

/// The app's notion of "now".
///
/// Production code calls [`Time::tick`] once per frame; tests freeze the
/// clock and move it with [`Time::advance`] so timers are deterministic.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    virt: DateTime<Utc>,
    frozen: bool,
}

impl Default for Time {
    fn default() -> Self {
        Self {
            virt: Utc::now(),
            frozen: false,
        }
    }
}

impl Time {
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self {
            virt: at,
            frozen: true,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.virt
    }

    /// Re-reads the wall clock unless frozen.
    pub fn tick(&mut self) {
        if !self.frozen {
            self.virt = Utc::now();
        }
    }

    pub fn advance(&mut self, by: Duration) {
        self.virt += by;
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}

use std::time::{Duration, SystemTime};

pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;

    fn duration_since(&self, time: SystemTime) -> Duration {
        return self.now().duration_since(time).unwrap_or(Duration::ZERO);
    }
}

#[derive(Clone)]
pub struct SystemClock {}

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        return SystemTime::now();
    }
}

impl SystemClock {
    pub fn new() -> SystemClock {
        return SystemClock {};
    }
}

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct IntervalTask {
    pub name: String,
    pub period: Duration,
}

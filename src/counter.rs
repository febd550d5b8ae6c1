// Numeric half of the scroll-triggered stat counters: ease-out-cubic progress
// toward a target value over a fixed duration. The dom layer drives this from
// an animation-frame loop with performance.now timestamps.

pub const COUNT_DURATION_MS: f64 = 2000.0;

// 1 - (1 - p)^3, the standard ease-out cubic
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

pub struct CountUp {
    target: f64,
    decimal: bool,
}

impl CountUp {
    pub fn new(target: f64, decimal: bool) -> CountUp {
        CountUp { target, decimal }
    }

    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let progress = (elapsed_ms / COUNT_DURATION_MS).min(1.0);
        self.target * ease_out_cubic(progress)
    }

    // Decimal counters show two places, the rest count in whole steps
    pub fn format(&self, value: f64) -> String {
        if self.decimal {
            format!("{:.2}", value)
        } else {
            format!("{}", value.floor())
        }
    }

    pub fn finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= COUNT_DURATION_MS
    }
}

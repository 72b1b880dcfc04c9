use crate::app_system::Config;

/// Compound-interest math over a configured annual rate.
#[derive(Debug, Clone)]
pub struct InterestService {
    rate: f64,
}

impl InterestService {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.interest_rate)
    }

    /// The configured annual rate, in percent.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Interest earned on `principal` over `years`, compounded annually:
    /// `P * (1 + r/100)^t - P`.
    pub fn compound_interest(&self, principal: f64, years: u32) -> f64 {
        let amount = principal * (1.0 + self.rate / 100.0).powi(years as i32);
        amount - principal
    }

    /// Human-readable one-line summary of a calculation.
    pub fn summary(&self, principal: f64, years: u32) -> String {
        let interest = self.compound_interest(principal, years);
        format!(
            "Using interest rate of {:.2}%: Compound interest for Principal ${:.2} over {} years is ${:.2}",
            self.rate, principal, years, interest
        )
    }
}

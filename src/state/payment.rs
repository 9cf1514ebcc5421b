//! Mock checkout: plan pricing, countdown and virtual account numbers.

use chrono::{DateTime, TimeDelta, TimeZone};
use rand::Rng;

/// Admin fee added on top of every plan, in rupiah.
pub const ADMIN_FEE: u64 = 3000;

/// Prefix of every generated virtual account number.
pub const VIRTUAL_ACCOUNT_PREFIX: &str = "8001";

/// Countdown start when a payment is initiated.
pub const PAYMENT_WINDOW: Countdown = Countdown {
    hours: 0,
    minutes: 14,
    seconds: 59,
};

/// Subscription plan being paid for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub name: String,
    /// Display price, e.g. `"Rp49.990"`.
    pub price: String,
    pub features: Vec<String>,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            name: "Individual".to_string(),
            price: "Rp49.990".to_string(),
            features: vec![
                "No ads".to_string(),
                "720p quality".to_string(),
                "Download selected titles".to_string(),
            ],
        }
    }
}

impl Plan {
    /// Digits of the display price as a number; zero when it has none.
    pub fn price_value(&self) -> u64 {
        parse_price_digits(&self.price)
    }

    pub fn total(&self) -> u64 {
        self.price_value() + ADMIN_FEE
    }
}

/// Payment method choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    Card,
    #[default]
    BcaVirtualAccount,
}

/// Remaining time, counted down once per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    /// Advance one second, stopping at zero.
    pub fn tick(self) -> Self {
        if self.seconds > 0 {
            Self { seconds: self.seconds - 1, ..self }
        } else if self.minutes > 0 {
            Self { minutes: self.minutes - 1, seconds: 59, ..self }
        } else if self.hours > 0 {
            Self { hours: self.hours - 1, minutes: 59, seconds: 59 }
        } else {
            self
        }
    }

    pub fn is_expired(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    pub fn total_seconds(&self) -> i64 {
        i64::from(self.hours) * 3600 + i64::from(self.minutes) * 60 + i64::from(self.seconds)
    }

    /// `HH : MM : SS`.
    pub fn display(&self) -> String {
        format!("{:02} : {:02} : {:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Checkout page state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub method: PaymentMethod,
    pub countdown: Countdown,
    /// Set once payment starts; the countdown only runs while this is set.
    pub virtual_account: Option<String>,
}

impl Default for Checkout {
    fn default() -> Self {
        Self {
            method: PaymentMethod::default(),
            countdown: PAYMENT_WINDOW,
            virtual_account: None,
        }
    }
}

impl Checkout {
    pub fn is_active(&self) -> bool {
        self.virtual_account.is_some()
    }

    /// Start the payment window with a fresh virtual account number.
    pub fn start<R: Rng>(&mut self, rng: &mut R) {
        self.countdown = PAYMENT_WINDOW;
        self.virtual_account = Some(generate_virtual_account(rng));
    }

    pub fn tick(&mut self) {
        if self.is_active() {
            self.countdown = self.countdown.tick();
        }
    }
}

/// Wall-clock time at which `countdown` runs out, counted from `now`.
pub fn payment_deadline<Tz: TimeZone>(now: DateTime<Tz>, countdown: &Countdown) -> DateTime<Tz> {
    now + TimeDelta::seconds(countdown.total_seconds())
}

/// `"8001"` followed by 12 random, zero-padded digits.
pub fn generate_virtual_account<R: Rng>(rng: &mut R) -> String {
    let number: u64 = rng.random_range(0..1_000_000_000_000);
    format!("{VIRTUAL_ACCOUNT_PREFIX}{number:012}")
}

/// Keep only the digits of a price label, e.g. `"Rp49.990"` -> 49990.
pub fn parse_price_digits(label: &str) -> u64 {
    let digits: String = label.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Format as rupiah with `.` thousands separators, e.g. `Rp52.990`.
pub fn format_rupiah(amount: u64) -> String {
    let raw = amount.to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (index, ch) in raw.chars().enumerate() {
        if index > 0 && (raw.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_countdown_rolls_over_and_stops() {
        let c = Countdown { hours: 1, minutes: 0, seconds: 0 };
        assert_eq!(c.tick(), Countdown { hours: 0, minutes: 59, seconds: 59 });
        let c = Countdown { hours: 0, minutes: 1, seconds: 0 };
        assert_eq!(c.tick(), Countdown { hours: 0, minutes: 0, seconds: 59 });
        let zero = Countdown { hours: 0, minutes: 0, seconds: 0 };
        assert_eq!(zero.tick(), zero);
        assert!(zero.is_expired());
    }

    #[test]
    fn test_countdown_display() {
        assert_eq!(PAYMENT_WINDOW.display(), "00 : 14 : 59");
        assert_eq!(PAYMENT_WINDOW.total_seconds(), 899);
    }

    #[test]
    fn test_virtual_account_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let va = generate_virtual_account(&mut rng);
            assert_eq!(va.len(), 16);
            assert!(va.starts_with("8001"));
            assert!(va.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_checkout_only_ticks_when_active() {
        let mut checkout = Checkout::default();
        checkout.tick();
        assert_eq!(checkout.countdown, PAYMENT_WINDOW);
        checkout.start(&mut StdRng::seed_from_u64(1));
        checkout.tick();
        assert_eq!(checkout.countdown.seconds, 58);
    }

    #[test]
    fn test_price_and_total() {
        let plan = Plan::default();
        assert_eq!(plan.price_value(), 49_990);
        assert_eq!(plan.total(), 52_990);
        assert_eq!(format_rupiah(plan.total()), "Rp52.990");
        assert_eq!(format_rupiah(3000), "Rp3.000");
        assert_eq!(format_rupiah(999), "Rp999");
        assert_eq!(format_rupiah(1_234_567), "Rp1.234.567");
        assert_eq!(parse_price_digits("free"), 0);
    }

    #[test]
    fn test_deadline_is_window_after_start() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let due = payment_deadline(start, &PAYMENT_WINDOW);
        assert_eq!(due, Utc.with_ymd_and_hms(2024, 3, 1, 10, 14, 59).unwrap());
    }
}

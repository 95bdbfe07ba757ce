/// Сколько секунд ждать перед повторной отправкой OTP
pub const OTP_RESEND_SECONDS: u32 = 60;

/// Обратный отсчет до повторной отправки OTP, тикает раз в секунду
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpCountdown {
    remaining: u32,
    period: u32,
}

impl Default for OtpCountdown {
    fn default() -> Self {
        Self::new(OTP_RESEND_SECONDS)
    }
}

impl OtpCountdown {
    pub fn new(period: u32) -> Self {
        Self {
            remaining: period,
            period,
        }
    }

    /// Возвращает `true` на тике, который довел отсчет до нуля
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn restart(&mut self) {
        self.remaining = self.period;
    }

    pub fn can_resend(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// "m:ss"
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_resend() {
        let mut c = OtpCountdown::new(3);
        assert!(!c.can_resend());
        assert!(!c.tick());
        assert!(!c.tick());
        assert!(c.tick());
        assert!(c.can_resend());
        assert!(!c.tick());
        c.restart();
        assert_eq!(c.remaining(), 3);
    }

    #[test]
    fn display_format() {
        assert_eq!(OtpCountdown::default().display(), "1:00");
        assert_eq!(OtpCountdown::new(9).display(), "0:09");
    }
}

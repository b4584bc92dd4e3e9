//! 生產時間計算

use press_core::RateTable;
use rust_decimal::Decimal;

/// 分鐘換算
const MINUTES_PER_HOUR: i64 = 60;

/// 生產時間計算器
pub struct ProductionTime;

impl ProductionTime {
    /// 依區間速度表（每分鐘張數）計算生產分鐘數
    ///
    /// 數量找不到區間時回傳 0。
    pub fn at_tiered_speed(count: i64, speed_table: &RateTable) -> Decimal {
        match speed_table.coefficient_for(count) {
            Some(speed) => Self::at_speed_per_minute(count, speed),
            None => Decimal::ZERO,
        }
    }

    /// 數量 ÷ 每分鐘速度
    pub fn at_speed_per_minute(count: i64, speed: Decimal) -> Decimal {
        if count <= 0 || speed <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        Decimal::from(count) / speed
    }

    /// 數量 × 60 ÷ 每小時產量
    ///
    /// 先乘後除，整除時結果為精確分鐘數。
    pub fn at_hourly_rate(quantity: i64, rate_per_hour: Option<Decimal>) -> Decimal {
        match rate_per_hour {
            Some(rate) if quantity > 0 && rate > Decimal::ZERO => {
                Decimal::from(quantity) * Decimal::from(MINUTES_PER_HOUR) / rate
            }
            _ => Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use press_core::RateTier;

    #[test]
    fn test_tiered_speed() {
        let table = RateTable::new(
            "speed",
            vec![
                RateTier::bounded("1-1000", 1, 1_000, Decimal::from(16)),
                RateTier::open_ended("1001+", 1_001, Decimal::from(50)),
            ],
        );

        assert_eq!(ProductionTime::at_tiered_speed(800, &table), Decimal::from(50));
        assert_eq!(ProductionTime::at_tiered_speed(5_000, &table), Decimal::from(100));
        assert_eq!(ProductionTime::at_tiered_speed(0, &table), Decimal::ZERO);
        assert_eq!(ProductionTime::at_tiered_speed(-20, &table), Decimal::ZERO);
    }

    #[test]
    fn test_zero_speed_yields_zero() {
        assert_eq!(
            ProductionTime::at_speed_per_minute(100, Decimal::ZERO),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_hourly_rate() {
        assert_eq!(
            ProductionTime::at_hourly_rate(20_000, Some(Decimal::from(20_000))),
            Decimal::from(60)
        );
        assert_eq!(
            ProductionTime::at_hourly_rate(5_000, Some(Decimal::from(10_000))),
            Decimal::from(30)
        );
        assert_eq!(ProductionTime::at_hourly_rate(5_000, None), Decimal::ZERO);
        assert_eq!(
            ProductionTime::at_hourly_rate(0, Some(Decimal::from(10_000))),
            Decimal::ZERO
        );
        assert_eq!(
            ProductionTime::at_hourly_rate(100, Some(Decimal::ZERO)),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_hourly_rate_uneven_quotient_is_exact() {
        // 20000 / 30000 不能整除，但 20000 × 60 / 30000 = 40
        assert_eq!(
            ProductionTime::at_hourly_rate(20_000, Some(Decimal::from(30_000))),
            Decimal::from(40)
        );
    }
}

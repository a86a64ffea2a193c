//! 주말 단위 출석률 추이

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::attendance_rate;
use super::record::AttendanceRecord;
use crate::time::{week_label, weekend_anchor};

/// 주말 추이 포인트
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekendTrendPoint {
    /// 토요일 날짜 라벨 (예: `Jan 6`)
    pub week_label: String,

    /// 출석률 (0..=100)
    pub rate: u8,

    /// 해당 주말의 레코드 수
    pub total: usize,
}

#[derive(Default)]
struct Bucket {
    total: usize,
    present: usize,
}

/// 토/일 레코드를 토요일 기준 버킷으로 묶어 날짜 오름차순으로 반환합니다.
///
/// 평일 레코드는 버립니다. `PRESENT`/`LATE`만 출석으로 집계됩니다.
pub fn group_by_weekend(records: &[AttendanceRecord]) -> Vec<WeekendTrendPoint> {
    let buckets = records
        .iter()
        .filter_map(|record| weekend_anchor(record.date).map(|saturday| (saturday, record)))
        .fold(
            BTreeMap::<NaiveDate, Bucket>::new(),
            |mut buckets, (saturday, record)| {
                let bucket = buckets.entry(saturday).or_default();
                bucket.total += 1;
                if record.status.is_attended() {
                    bucket.present += 1;
                }
                buckets
            },
        );

    buckets
        .into_iter()
        .map(|(saturday, bucket)| WeekendTrendPoint {
            week_label: week_label(saturday),
            rate: attendance_rate(bucket.present, bucket.total),
            total: bucket.total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::AttendanceStatus::{self, *};

    fn record(status: AttendanceStatus, y: i32, m: u32, d: u32) -> AttendanceRecord {
        AttendanceRecord::new(status, NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_single_saturday_bucket() {
        // 2024-01-06 = Saturday
        let records = vec![
            record(Present, 2024, 1, 6),
            record(Late, 2024, 1, 6),
            record(Present, 2024, 1, 6),
            record(Absent, 2024, 1, 6),
        ];

        let trend = group_by_weekend(&records);
        assert_eq!(
            trend,
            vec![WeekendTrendPoint {
                week_label: "Jan 6".to_string(),
                rate: 75,
                total: 4,
            }]
        );
    }

    #[test]
    fn test_weekdays_discarded() {
        // 2024-01-08 (Mon) ~ 2024-01-12 (Fri)
        let records: Vec<_> = (8..=12).map(|d| record(Present, 2024, 1, d)).collect();
        assert!(group_by_weekend(&records).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_weekend(&[]).is_empty());
    }

    #[test]
    fn test_sunday_joins_saturday() {
        let records = vec![
            record(Present, 2024, 1, 6),
            record(Absent, 2024, 1, 7),
            record(Present, 2024, 1, 9),
        ];

        let trend = group_by_weekend(&records);
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].week_label, "Jan 6");
        assert_eq!(trend[0].total, 2);
        assert_eq!(trend[0].rate, 50);
    }

    #[test]
    fn test_ascending_order_regardless_of_input() {
        let records = vec![
            record(Present, 2024, 2, 4),
            record(Excused, 2024, 1, 13),
            record(Present, 2024, 1, 6),
            record(Late, 2024, 2, 3),
        ];

        let labels: Vec<_> = group_by_weekend(&records)
            .into_iter()
            .map(|point| (point.week_label, point.rate, point.total))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("Jan 6".to_string(), 100, 1),
                ("Jan 13".to_string(), 0, 1),
                ("Feb 3".to_string(), 100, 2),
            ]
        );
    }

    #[test]
    fn test_sunday_across_month_boundary() {
        // 2024-09-01 = Sunday → Aug 31
        let trend = group_by_weekend(&[record(Present, 2024, 9, 1)]);
        assert_eq!(trend[0].week_label, "Aug 31");
    }

    #[test]
    fn test_json_shape() {
        let trend = group_by_weekend(&[record(Present, 2024, 1, 6)]);
        let json = serde_json::to_value(&trend[0]).unwrap();
        assert_eq!(json["weekLabel"], "Jan 6");
        assert_eq!(json["rate"], 100);
        assert_eq!(json["total"], 1);
    }
}

//! Property tests for record accumulators and history.

use proptest::prelude::*;

use employee_record::models::{EmployeeRecord, Grade};

#[derive(Debug, Clone)]
enum Op {
    Work(i64),
    Bonus(i64),
    Promote,
    Disburse,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-10i64..1_000).prop_map(Op::Work),
        (-10i64..10_000).prop_map(Op::Bonus),
        Just(Op::Promote),
        Just(Op::Disburse),
    ]
}

proptest! {
    #[test]
    fn prop_new_record_summary(name in "[A-Za-z][A-Za-z ]{0,20}") {
        let record = EmployeeRecord::create(&name, "Junior").unwrap();
        prop_assert_eq!(record.summary(), format!("{} 0 h. 0 currency.", name));
        prop_assert_eq!(record.history_lines().len(), 1);
    }

    #[test]
    fn prop_history_tracks_successful_mutations(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut record = EmployeeRecord::create("Bob", "Junior").unwrap();
        let mut expected_len = 1;
        let mut expected_hours = 0u64;
        let mut paid_out = 0u64;
        let mut earned = 0u64;

        for op in ops {
            match op {
                Op::Work(hours) => {
                    let rate = record.hourly_rate();
                    if record.log_work(hours).is_ok() {
                        prop_assert!(hours >= 0);
                        expected_len += 1;
                        expected_hours += hours as u64;
                        earned += hours as u64 * rate;
                    }
                }
                Op::Bonus(amount) => {
                    if record.grant_bonus(amount).is_ok() {
                        prop_assert!(amount >= 0);
                        expected_len += 1;
                        earned += amount as u64;
                    }
                }
                Op::Promote => {
                    record.promote();
                    expected_len += 1;
                }
                Op::Disburse => {
                    paid_out += record.disburse_salary();
                    expected_len += 1;
                    prop_assert_eq!(record.accrued_pay(), 0);
                }
            }

            prop_assert_eq!(record.history_lines().len(), expected_len);
            prop_assert_eq!(record.hours_worked(), expected_hours);
            prop_assert_eq!(record.accrued_pay() + paid_out, earned);
        }
    }

    #[test]
    fn prop_senior_rate_rises_by_one_per_promotion(extra in 0usize..50) {
        let mut record = EmployeeRecord::create("Ann", "senior").unwrap();
        for _ in 0..extra {
            record.promote();
        }
        prop_assert_eq!(record.grade(), Grade::Senior);
        prop_assert_eq!(record.hourly_rate(), 20 + extra as u64);
    }
}

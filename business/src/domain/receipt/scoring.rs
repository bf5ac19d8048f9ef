use super::errors::ReceiptError;
use super::model::Receipt;
use super::value_objects::Price;

/// A single scoring rule. Rules are pure and independent of each other.
pub type Rule = fn(&Receipt) -> u64;

/// Points awarded by one named rule.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleContribution {
    pub rule: &'static str,
    pub points: u64,
}

const RULES: [(&str, Rule); 7] = [
    ("retailer_name", retailer_name_points),
    ("round_total", round_total_points),
    ("quarter_total", quarter_total_points),
    ("item_pairs", item_pair_points),
    ("item_descriptions", item_description_points),
    ("odd_day", odd_day_points),
    ("afternoon", afternoon_points),
];

const ROUND_TOTAL_POINTS: u64 = 50;
const QUARTER_TOTAL_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Parses raw receipt bytes and scores them.
pub fn score(raw: &[u8]) -> Result<u64, ReceiptError> {
    Receipt::from_json(raw).map(|receipt| points(&receipt))
}

/// Total points for a receipt: the sum of every rule's contribution, saturating at `u64::MAX`.
pub fn points(receipt: &Receipt) -> u64 {
    RULES
        .iter()
        .fold(0u64, |total, &(_, rule)| total.saturating_add(rule(receipt)))
}

/// Per-rule contributions, in rule order.
pub fn breakdown(receipt: &Receipt) -> Vec<RuleContribution> {
    RULES
        .iter()
        .map(|&(name, rule)| RuleContribution {
            rule: name,
            points: rule(receipt),
        })
        .collect()
}

/// One point for every ASCII alphanumeric character in the retailer name.
fn retailer_name_points(receipt: &Receipt) -> u64 {
    receipt
        .retailer
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .count() as u64
}

/// 50 points if the total is a round dollar amount with no cents.
fn round_total_points(receipt: &Receipt) -> u64 {
    if receipt.total.cents() == "00" {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

/// 25 points if the total is a multiple of 0.25.
fn quarter_total_points(receipt: &Receipt) -> u64 {
    match receipt.total.cents() {
        "00" | "25" | "50" | "75" => QUARTER_TOTAL_POINTS,
        _ => 0,
    }
}

/// 5 points for every two items on the receipt.
fn item_pair_points(receipt: &Receipt) -> u64 {
    (receipt.items.len() / 2) as u64 * ITEM_PAIR_POINTS
}

/// For each item whose trimmed description length is a multiple of 3 (zero included),
/// the price multiplied by 0.2 and rounded up.
fn item_description_points(receipt: &Receipt) -> u64 {
    receipt
        .items
        .iter()
        .filter(|item| item.short_description.trim().len() % 3 == 0)
        .map(|item| price_fifth_rounded_up(&item.price))
        .fold(0u64, u64::saturating_add)
}

// Prices not shaped like `digits.XX` contribute nothing.
fn price_fifth_rounded_up(price: &str) -> u64 {
    Price::parse(price).map_or(0, |price| price.fifth_rounded_up())
}

/// 6 points if the day in the purchase date is odd.
fn odd_day_points(receipt: &Receipt) -> u64 {
    let day = receipt
        .purchase_date
        .rsplit('-')
        .next()
        .and_then(|day| day.parse::<u64>().ok());

    match day {
        Some(day) if day % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// 10 points if the purchase happened from 14:00 up to (not including) 16:00.
fn afternoon_points(receipt: &Receipt) -> u64 {
    let hour = receipt
        .purchase_time
        .split(':')
        .next()
        .and_then(|hour| hour.parse::<u32>().ok());

    match hour {
        Some(14 | 15) => AFTERNOON_POINTS,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn receipt_json(date: &str, time: &str, items: &str, total: &str) -> String {
        format!(
            r#"{{
                "retailer": "Target",
                "purchaseDate": "{date}",
                "purchaseTime": "{time}",
                "items": [{items}],
                "total": "{total}"
            }}"#
        )
    }

    fn points_for(json: &str) -> i64 {
        score(json.as_bytes()).unwrap() as i64
    }

    fn with_total(total: &str) -> i64 {
        points_for(&receipt_json("2022-01-01", "13:01", "", total))
    }

    fn with_items(items: &str) -> i64 {
        points_for(&receipt_json("2022-01-01", "13:01", items, "35.00"))
    }

    fn with_date(date: &str) -> i64 {
        points_for(&receipt_json(date, "13:01", "", "35.00"))
    }

    fn with_time(time: &str) -> i64 {
        points_for(&receipt_json("2022-01-01", time, "", "35.00"))
    }

    #[test]
    fn should_award_round_and_quarter_bonus_for_round_total() {
        assert_eq!(with_total("35.00") - with_total("35.35"), 50 + 25);
    }

    #[test]
    fn should_award_quarter_bonus_for_multiples_of_a_quarter() {
        let baseline = with_total("35.13");
        let cases = [("00", 75), ("25", 25), ("50", 25), ("75", 25)];

        for (cents, expected) in cases {
            let diff = with_total(&format!("35.{cents}")) - baseline;
            assert_eq!(diff, expected, "cents {cents}");
        }
    }

    #[test]
    fn should_award_five_points_per_item_pair() {
        let baseline = with_items("");
        let item = r#"{"shortDescription":"d","price":"0.00"}"#;

        for (count, expected) in [(0, 0), (1, 0), (2, 5), (3, 5), (4, 10)] {
            let items = vec![item; count].join(",");
            assert_eq!(with_items(&items) - baseline, expected, "{count} items");
        }
    }

    #[test]
    fn should_award_description_bonus_when_trimmed_length_is_multiple_of_three() {
        let baseline = with_items("");
        let cases = [
            (r#"{"shortDescription":"ddd","price":"21.01"}"#, 5),
            (r#"{"shortDescription":"   ddd\n\n\n","price":"21.01"}"#, 5),
            (r#"{"shortDescription":"dddd","price":"21.01"}"#, 0),
            (
                r#"{"shortDescription":"dddddd","price":"21.01"},
                   {"shortDescription":"  ddd\n","price":"21.01"},
                   {"shortDescription":"dddd","price":"21.01"}"#,
                10 + 5,
            ),
        ];

        for (items, expected) in cases {
            assert_eq!(with_items(items) - baseline, expected, "items {items}");
        }
    }

    #[test]
    fn should_award_description_bonus_for_blank_description() {
        let baseline = with_items("");
        let items = r#"{"shortDescription":"   ","price":"10.00"}"#;
        assert_eq!(with_items(items) - baseline, 2);
    }

    #[test]
    fn should_ignore_unparseable_or_negative_prices() {
        let baseline = with_items("");
        assert_eq!(with_items(r#"{"shortDescription":"ddd","price":"abc"}"#) - baseline, 0);
        assert_eq!(with_items(r#"{"shortDescription":"ddd","price":"-5.00"}"#) - baseline, 0);
    }

    #[test]
    fn should_round_price_bonus_up_without_float_drift() {
        assert_eq!(price_fifth_rounded_up("15.00"), 3);
        assert_eq!(price_fifth_rounded_up("5.00"), 1);
        assert_eq!(price_fifth_rounded_up("0.01"), 1);
    }

    #[test]
    fn should_ignore_prices_without_exactly_two_decimals() {
        let baseline = with_items("");

        for price in ["5", "5.5", " 5.00", "5.000", "1e3", "1e3000000", "1.00e3000000"] {
            let items = format!(r#"{{"shortDescription":"ddd","price":"{price}"}}"#);
            assert_eq!(with_items(&items) - baseline, 0, "price {price:?}");
        }
    }

    #[test]
    fn should_saturate_instead_of_overflowing_on_huge_prices() {
        let json = receipt_json(
            "2022-01-01",
            "13:01",
            r#"{"shortDescription":"ddd","price":"90000000000000000000.00"},
               {"shortDescription":"ddd","price":"90000000000000000000.00"}"#,
            "35.00",
        );

        assert_eq!(score(json.as_bytes()).unwrap(), u64::MAX);
    }

    #[test]
    fn should_not_drop_a_single_huge_price_to_zero() {
        assert_eq!(price_fifth_rounded_up("100000000000000000000.00"), u64::MAX);
    }

    #[test]
    fn should_award_odd_day_bonus() {
        let baseline = with_date("2022-01-00");

        for (day, expected) in [(0, 0), (1, 6), (2, 0), (3, 6), (4, 0), (5, 6)] {
            let diff = with_date(&format!("2022-01-{day:02}")) - baseline;
            assert_eq!(diff, expected, "day {day}");
        }
    }

    #[test]
    fn should_not_award_odd_day_bonus_for_malformed_date() {
        assert_eq!(with_date("") - with_date("2022-01-00"), 0);
        assert_eq!(with_date("2022-01-xx") - with_date("2022-01-00"), 0);
    }

    #[test]
    fn should_award_afternoon_bonus_between_two_and_four() {
        let baseline = with_time("00:00");

        for (time, expected) in [("03:00", 0), ("14:00", 10), ("15:59", 10), ("16:00", 0)] {
            assert_eq!(with_time(time) - baseline, expected, "time {time}");
        }
    }

    #[test]
    fn should_score_reference_receipts() {
        let target = include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../demos/target-receipt.json"
        ));
        let corner_market = include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../demos/corner-market-receipt.json"
        ));
        let morning = include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../demos/morning-receipt.json"
        ));
        let simple = include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../demos/simple-receipt.json"
        ));

        assert_eq!(score(target).unwrap(), 28);
        assert_eq!(score(corner_market).unwrap(), 109);
        assert_eq!(score(morning).unwrap(), 15);
        assert_eq!(score(simple).unwrap(), 31);
    }

    #[test]
    fn should_break_down_points_per_rule() {
        let raw = include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../demos/corner-market-receipt.json"
        ));
        let receipt = Receipt::from_json(raw).unwrap();

        let contributions: Vec<(&str, u64)> = breakdown(&receipt)
            .into_iter()
            .map(|c| (c.rule, c.points))
            .collect();

        assert_eq!(
            contributions,
            vec![
                ("retailer_name", 14),
                ("round_total", 50),
                ("quarter_total", 25),
                ("item_pairs", 10),
                ("item_descriptions", 0),
                ("odd_day", 0),
                ("afternoon", 10),
            ]
        );
    }

    #[test]
    fn should_fail_scoring_on_malformed_total() {
        let json = receipt_json("2022-01-01", "13:01", "", "35.5");
        assert!(matches!(
            score(json.as_bytes()),
            Err(ReceiptError::MalformedTotal)
        ));
    }

    proptest! {
        #[test]
        fn points_equal_sum_of_breakdown(
            retailer in "[ -~]{0,20}",
            day in 0u32..=31,
            hour in 0u32..=23,
            dollars in 0u32..=999,
            cents in 0u32..=99,
            descriptions in prop::collection::vec("[ a-z]{0,9}", 0..=6),
        ) {
            let items: Vec<String> = descriptions
                .iter()
                .map(|d| format!(r#"{{"shortDescription":"{d}","price":"{dollars}.{cents:02}"}}"#))
                .collect();
            let json = serde_json::json!({
                "retailer": retailer,
                "purchaseDate": format!("2022-01-{day:02}"),
                "purchaseTime": format!("{hour:02}:30"),
                "items": serde_json::from_str::<serde_json::Value>(&format!("[{}]", items.join(","))).unwrap(),
                "total": format!("{dollars}.{cents:02}"),
            });
            let receipt = Receipt::from_json(json.to_string().as_bytes()).unwrap();

            let summed: u64 = breakdown(&receipt).iter().map(|c| c.points).sum();
            prop_assert_eq!(points(&receipt), summed);
        }

        #[test]
        fn scoring_never_panics_on_arbitrary_prices(
            prices in prop::collection::vec(
                prop_oneof!["\\PC*", "[0-9]{1,40}\\.[0-9]{2}", "[0-9]{1,5}[eE][0-9]{1,9}"],
                0..=4,
            ),
        ) {
            let items: Vec<serde_json::Value> = prices
                .iter()
                .map(|price| serde_json::json!({ "shortDescription": "ddd", "price": price }))
                .collect();
            let json = serde_json::json!({
                "retailer": "Target",
                "purchaseDate": "2022-01-01",
                "purchaseTime": "13:01",
                "items": items,
                "total": "35.00",
            });

            let points = score(json.to_string().as_bytes());
            prop_assert!(points.is_ok());
        }

        #[test]
        fn retailer_rule_counts_ascii_alphanumerics(retailer in "\\PC{0,30}") {
            let json = serde_json::json!({ "retailer": retailer, "total": "0.13" });
            let receipt = Receipt::from_json(json.to_string().as_bytes()).unwrap();

            let expected = retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as u64;
            prop_assert_eq!(retailer_name_points(&receipt), expected);
        }
    }
}

use crate::models::{AggregateKpis, DashboardModel, RankedItem, RawSalesRecord, SalesView, ShareSlice};
use crate::format::{div_round_half_away, one_decimal};
use crate::period::Period;
use chrono::{DateTime, Local};

pub const BAR_CHART_ITEMS: usize = 10;
pub const SHARE_CHART_ITEMS: usize = 5;

/// Leading-integer parse: optional sign, then digits up to the first
/// non-digit. Anything without digits counts as zero.
pub fn parse_total(raw: &str) -> i64 {
    let text = raw.trim();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, byte| {
            acc.saturating_mul(10).saturating_add(i64::from(byte - b'0'))
        });

    if negative { value.saturating_neg() } else { value }
}

pub fn ranked_item(record: &RawSalesRecord) -> RankedItem {
    RankedItem {
        sku: record.sku.clone(),
        label: format!("SKU {}", record.sku),
        value: parse_total(&record.total),
    }
}

/// All records by total, highest first. Equal totals keep snapshot order.
pub fn rank_descending(snapshot: &[RawSalesRecord]) -> Vec<RankedItem> {
    let mut items: Vec<RankedItem> = snapshot.iter().map(ranked_item).collect();
    items.sort_by(|a, b| b.value.cmp(&a.value));
    items
}

pub fn top_n(snapshot: &[RawSalesRecord], n: usize) -> Vec<RankedItem> {
    let mut items = rank_descending(snapshot);
    items.truncate(n);
    items
}

pub fn compute_kpis(snapshot: &[RawSalesRecord]) -> AggregateKpis {
    let total_value = snapshot
        .iter()
        .map(|record| parse_total(&record.total))
        .fold(0i64, i64::saturating_add);
    let item_count = snapshot.len();

    AggregateKpis {
        total_value,
        item_count,
        average_value: rounded_average(total_value, item_count),
        top_item: rank_descending(snapshot).into_iter().next(),
    }
}

/// Percentage of `total_of_group` held by `item`, one decimal, ties rounded
/// away from zero.
pub fn share_label(item: &RankedItem, total_of_group: i64) -> String {
    if total_of_group == 0 {
        return "0.0%".to_string();
    }
    let tenths = div_round_half_away(i128::from(item.value) * 1_000, i128::from(total_of_group));
    format!("{}%", one_decimal(tenths))
}

pub fn top_shares(snapshot: &[RawSalesRecord], n: usize) -> Vec<ShareSlice> {
    let items = top_n(snapshot, n);
    let group_total = items
        .iter()
        .map(|item| item.value)
        .fold(0i64, i64::saturating_add);

    items
        .into_iter()
        .map(|item| ShareSlice {
            share: share_label(&item, group_total),
            item,
        })
        .collect()
}

/// Everything a sales page paints, derived from one fetch cycle.
pub fn dashboard_model(period: Period, view: &SalesView, fetched_at: DateTime<Local>) -> DashboardModel {
    DashboardModel {
        period,
        failed: view.failed,
        kpis: compute_kpis(&view.snapshot),
        top_ten: top_n(&view.snapshot, BAR_CHART_ITEMS),
        top_five: top_shares(&view.snapshot, SHARE_CHART_ITEMS),
        fetched_at,
    }
}

// round(total / count), halves toward +inf
fn rounded_average(total: i64, count: usize) -> i64 {
    if count == 0 {
        return 0;
    }
    let total = i128::from(total);
    let count = count as i128;
    (2 * total + count).div_euclid(2 * count) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SalesSnapshot;

    fn snapshot(rows: &[(&str, &str)]) -> SalesSnapshot {
        rows.iter()
            .map(|(sku, total)| RawSalesRecord::new(*sku, *total))
            .collect()
    }

    fn mixed() -> SalesSnapshot {
        snapshot(&[
            ("11", "300"),
            ("12", "900"),
            ("13", "abc"),
            ("14", "300"),
            ("15", "1200"),
            ("16", "-50"),
            ("17", "450"),
        ])
    }

    #[test]
    fn parse_total_reads_leading_integer() {
        assert_eq!(parse_total("5000000"), 5_000_000);
        assert_eq!(parse_total(" 42 "), 42);
        assert_eq!(parse_total("-17"), -17);
        assert_eq!(parse_total("12abc"), 12);
        assert_eq!(parse_total("12.9"), 12);
        assert_eq!(parse_total("abc"), 0);
        assert_eq!(parse_total(""), 0);
        assert_eq!(parse_total("-"), 0);
        assert_eq!(parse_total("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn ranking_is_sorted_and_a_permutation() {
        let data = mixed();
        let ranked = rank_descending(&data);

        assert_eq!(ranked.len(), data.len());
        assert!(ranked.windows(2).all(|pair| pair[0].value >= pair[1].value));

        let mut ranked_skus: Vec<&str> = ranked.iter().map(|item| item.sku.as_str()).collect();
        let mut source_skus: Vec<&str> = data.iter().map(|record| record.sku.as_str()).collect();
        ranked_skus.sort_unstable();
        source_skus.sort_unstable();
        assert_eq!(ranked_skus, source_skus);
    }

    #[test]
    fn ties_keep_snapshot_order() {
        let ranked = rank_descending(&mixed());
        let tied: Vec<&str> = ranked
            .iter()
            .filter(|item| item.value == 300)
            .map(|item| item.sku.as_str())
            .collect();
        assert_eq!(tied, vec!["11", "14"]);
    }

    #[test]
    fn top_n_is_prefix_of_ranking() {
        let data = mixed();
        let ranked = rank_descending(&data);
        for n in [0, 1, 5, 7, 10] {
            let top = top_n(&data, n);
            assert_eq!(top.len(), n.min(data.len()));
            assert_eq!(top.as_slice(), &ranked[..top.len()]);
        }
    }

    #[test]
    fn two_item_snapshot_matches_expected_view() {
        let data = snapshot(&[("100", "5000000"), ("200", "3000000")]);

        let top = top_n(&data, BAR_CHART_ITEMS);
        assert_eq!(
            top,
            vec![
                RankedItem {
                    sku: "100".into(),
                    label: "SKU 100".into(),
                    value: 5_000_000,
                },
                RankedItem {
                    sku: "200".into(),
                    label: "SKU 200".into(),
                    value: 3_000_000,
                },
            ]
        );

        let kpis = compute_kpis(&data);
        assert_eq!(kpis.total_value, 8_000_000);
        assert_eq!(kpis.item_count, 2);
        assert_eq!(kpis.average_value, 4_000_000);
        assert_eq!(kpis.top_item.map(|item| item.sku), Some("100".to_string()));
    }

    #[test]
    fn empty_snapshot_has_zero_kpis() {
        let kpis = compute_kpis(&[]);
        assert_eq!(kpis.total_value, 0);
        assert_eq!(kpis.item_count, 0);
        assert_eq!(kpis.average_value, 0);
        assert!(kpis.top_item.is_none());
        assert!(top_n(&[], SHARE_CHART_ITEMS).is_empty());
        assert!(top_shares(&[], SHARE_CHART_ITEMS).is_empty());
    }

    #[test]
    fn non_numeric_total_counts_as_zero_and_ranks_last() {
        let data = snapshot(&[("1", "abc"), ("2", "10"), ("3", "5")]);
        let kpis = compute_kpis(&data);
        assert_eq!(kpis.total_value, 15);

        let ranked = rank_descending(&data);
        assert_eq!(ranked.last().map(|item| item.sku.as_str()), Some("1"));
        assert_eq!(ranked.last().map(|item| item.value), Some(0));
    }

    #[test]
    fn total_is_additive_over_partitions() {
        let data = mixed();
        let whole = compute_kpis(&data).total_value;
        for split in 0..=data.len() {
            let (left, right) = data.split_at(split);
            assert_eq!(
                compute_kpis(left).total_value + compute_kpis(right).total_value,
                whole
            );
        }
    }

    #[test]
    fn average_rounds_half_up() {
        let data = snapshot(&[("1", "2"), ("2", "3")]);
        assert_eq!(compute_kpis(&data).average_value, 3);

        let data = snapshot(&[("1", "-2"), ("2", "-3")]);
        assert_eq!(compute_kpis(&data).average_value, -2);

        let data = snapshot(&[("1", "10"), ("2", "0"), ("3", "0")]);
        assert_eq!(compute_kpis(&data).average_value, 3);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let data = mixed();
        assert_eq!(rank_descending(&data), rank_descending(&data));
        assert_eq!(top_n(&data, 5), top_n(&data, 5));
        assert_eq!(compute_kpis(&data), compute_kpis(&data));
        assert_eq!(top_shares(&data, 5), top_shares(&data, 5));
    }

    #[test]
    fn share_labels_use_group_total() {
        let data = snapshot(&[("1", "500"), ("2", "300"), ("3", "200")]);
        let shares: Vec<String> = top_shares(&data, SHARE_CHART_ITEMS)
            .into_iter()
            .map(|slice| slice.share)
            .collect();
        assert_eq!(shares, vec!["50.0%", "30.0%", "20.0%"]);

        let item = ranked_item(&RawSalesRecord::new("1", "1"));
        assert_eq!(share_label(&item, 3), "33.3%");
        assert_eq!(share_label(&item, 0), "0.0%");
    }

    #[test]
    fn share_label_rounds_exact_ties_up() {
        let item = ranked_item(&RawSalesRecord::new("1", "1"));
        assert_eq!(share_label(&item, 16), "6.3%");
        assert_eq!(share_label(&item, 8), "12.5%");
        assert_eq!(share_label(&item, 1), "100.0%");

        let item = ranked_item(&RawSalesRecord::new("1", "3"));
        assert_eq!(share_label(&item, 16), "18.8%");
    }
}

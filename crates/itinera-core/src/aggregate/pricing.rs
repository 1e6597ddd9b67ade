use itinera_model::{ExtraOption, PricingLine, PricingRow, PricingSummary, TravelerGroup};

/// Round to whole dollars and format as `$12,345` (or `-$12,345`).
///
/// Non-finite amounts format as `$0`.
pub fn format_usd(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    // `as` saturates for out-of-range floats.
    let whole = rounded as i64;

    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn row_amount(row: &PricingRow) -> f64 {
    row.count as f64 * row.unit_price
}

/// Aggregate pricing rows, selected extras and traveler groups.
///
/// `total` is the sum of every row plus every selected extra; `per_person`
/// divides it by the traveler count, or is `$0` when there are no travelers.
pub fn compute_pricing(
    groups: &[TravelerGroup],
    rows: &[PricingRow],
    extras: &[ExtraOption],
    currency: &str,
) -> PricingSummary {
    let selected: Vec<&ExtraOption> = extras.iter().filter(|e| e.selected).collect();

    let total: f64 = rows.iter().map(row_amount).sum::<f64>()
        + selected.iter().map(|e| e.price).sum::<f64>();
    let traveler_count = groups
        .iter()
        .fold(0i64, |acc, g| acc.saturating_add(g.count));
    let per_person = if traveler_count > 0 {
        total / traveler_count as f64
    } else {
        0.0
    };

    let breakdown = rows
        .iter()
        .map(|row| {
            let kind = row.kind.trim();
            let kind = if kind.is_empty() { "Traveler" } else { kind };
            PricingLine {
                label: format!("{} x {kind}", row.count),
                amount: format_usd(row_amount(row)),
            }
        })
        .collect();
    let extras = selected
        .iter()
        .map(|e| PricingLine {
            label: e.name.trim().to_owned(),
            amount: format_usd(e.price),
        })
        .collect();

    PricingSummary {
        total: format_usd(total),
        per_person: format_usd(per_person),
        currency: currency.to_owned(),
        traveler_count,
        breakdown,
        extras,
    }
}

use chrono::{Duration, NaiveDate};
use recur_scan_features::Transaction;
use serde_json::{Value, json};

pub fn transaction(id: i64, user_id: &str, name: &str, amount: f64, date: &str) -> Transaction {
    let parsed = Transaction::new(id, user_id, name, amount, date);
    assert!(parsed.is_ok(), "fixture date `{date}` should parse");
    parsed.unwrap_or(Transaction {
        id,
        user_id: user_id.to_string(),
        name: name.to_string(),
        amount,
        date: NaiveDate::MIN,
    })
}

/// Builds a series for `user1` named `name`, one transaction per date.
pub fn series(first_id: i64, name: &str, amount: f64, dates: &[&str]) -> Vec<Transaction> {
    dates
        .iter()
        .zip(first_id..)
        .map(|(date, id)| transaction(id, "user1", name, amount, date))
        .collect()
}

/// Builds a series from a start date and successive day gaps.
pub fn series_from_gaps(first_id: i64, name: &str, start: NaiveDate, gaps: &[i64]) -> Vec<Transaction> {
    let mut dates = vec![start];
    let mut current = start;
    for gap in gaps {
        current += Duration::days(*gap);
        dates.push(current);
    }
    dates
        .into_iter()
        .zip(first_id..)
        .map(|(date, id)| {
            let built = Transaction::from_date(id, "user1", name, 10.0, date);
            assert!(built.is_ok());
            built.unwrap_or(Transaction {
                id,
                user_id: "user1".to_string(),
                name: name.to_string(),
                amount: 10.0,
                date,
            })
        })
        .collect()
}

pub fn transaction_json(id: i64, user_id: &str, name: &str, amount: f64, date: &str) -> Value {
    json!({
        "id": id,
        "user_id": user_id,
        "name": name,
        "amount": amount,
        "date": date,
    })
}

use expense_core::currency::Amount;
use expense_core::errors::LedgerError;
use expense_core::ledger::{Category, ExpenseLedger};

fn amount(text: &str) -> Amount {
    text.parse().expect("test amount parses")
}

#[test]
fn interleaved_adds_and_removes_keep_total_in_step() {
    let mut ledger = ExpenseLedger::new();
    let mut ids = Vec::new();

    for (description, amount_text, category) in [
        ("Lunch", "10.00", Category::Food),
        ("Bus", "2,50", Category::Transport),
        ("Cinema", "8.00", Category::Entertainment),
        ("Snacks", "1.25", Category::Food),
    ] {
        let id = ledger
            .add(description, amount_text, "05/03/2025", category)
            .expect("add succeeds");
        ids.push(id);
    }
    assert_eq!(ledger.len(), 4);
    assert_eq!(ledger.total(), amount("21.75"));

    ledger.remove(ids[2]).expect("remove succeeds");
    assert_eq!(ledger.total(), amount("13.75"));

    ledger
        .add("Taxi", "6.25", "06/03/2025", Category::Transport)
        .expect("add succeeds");
    assert_eq!(ledger.total(), amount("20.00"));

    let recomputed: Amount = ledger.records().iter().map(|record| record.amount).sum();
    assert_eq!(ledger.total(), recomputed);
}

#[test]
fn grouped_totals_always_sum_to_the_running_total() {
    let mut ledger = ExpenseLedger::new();
    ledger
        .add("Lunch", "10.00", "01/01/2025", Category::Food)
        .unwrap();
    ledger
        .add("Bus", "2.50", "01/01/2025", Category::Transport)
        .unwrap();
    ledger
        .add("Museum", "12.00", "02/01/2025", Category::Entertainment)
        .unwrap();
    ledger
        .add("Stamps", "0.80", "02/01/2025", Category::Other)
        .unwrap();

    let grouped: Amount = ledger.totals_by_category().values().copied().sum();
    assert_eq!(grouped, ledger.total());
    assert_eq!(ledger.totals_by_category().len(), 4);
}

#[test]
fn rejected_input_never_mutates_the_ledger() {
    let mut ledger = ExpenseLedger::new();
    ledger
        .add("Lunch", "10.00", "01/01/2025", Category::Food)
        .unwrap();

    let failures = [
        ledger.add("", "5.00", "01/01/2025", Category::Food),
        ledger.add("Bus", "abc", "01/01/2025", Category::Transport),
        ledger.add("Bus", "2.50", "", Category::Transport),
    ];
    for failure in failures {
        assert!(failure.is_err());
    }
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.total(), amount("10.00"));

    let err = ledger
        .remove(uuid::Uuid::new_v4())
        .expect_err("unknown id must fail");
    assert!(matches!(err, LedgerError::NotFound));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.total(), amount("10.00"));
}

#[test]
fn empty_ledger_has_zero_total_and_no_category_rows() {
    let ledger = ExpenseLedger::new();
    assert!(ledger.is_empty());
    assert_eq!(ledger.total(), Amount::ZERO);
    assert!(ledger.totals_by_category().is_empty());
}

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::debug;

/// Quantity and value of one product line staged for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingInfo {
    pub product_quantity: u32,
    /// What `product_quantity` yields at the current price.
    pub product_total_cost: f64,
}

/// One tradeable product line with the quantity currently staged for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellableItem {
    pub product_name: String,
    pub selling_info: SellingInfo,
}

impl SellableItem {
    pub fn new(product_name: impl Into<String>, product_quantity: u32, product_total_cost: f64) -> Self {
        Self {
            product_name: product_name.into(),
            selling_info: SellingInfo {
                product_quantity,
                product_total_cost,
            },
        }
    }

    /// Lines with nothing staged are left off the itemized list.
    pub fn is_displayed(&self) -> bool {
        self.selling_info.product_quantity != 0
    }
}

/// Fraction of gross proceeds kept by the broker.
///
/// Meaningful values lie in `[0, 1]`. The type does not enforce this: range
/// checks belong to whoever supplies the rate (see
/// [`TradeConfig`](crate::config::TradeConfig)), and out-of-range rates still
/// compute without panicking.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeRate(f64);

impl FeeRate {
    pub const ZERO: FeeRate = FeeRate(0.0);

    pub fn new(rate: f64) -> Self {
        Self(rate)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_within_bounds(self) -> bool {
        (0.0..=1.0).contains(&self.0)
    }

    /// The fee charged on `amount`.
    pub fn fee_on(self, amount: f64) -> f64 {
        self.0 * amount
    }
}

impl From<f64> for FeeRate {
    fn from(rate: f64) -> Self {
        Self(rate)
    }
}

impl Display for FeeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let percent = format!("{:.2}", self.0 * 100.0);
        let percent = if percent.contains('.') {
            percent.trim_end_matches('0').trim_end_matches('.')
        } else {
            percent.as_str()
        };
        write!(f, "{}%", percent)
    }
}

/// Aggregate figures of a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptTotals {
    pub total_cost: f64,
    pub total_fee: f64,
    pub total_profit: f64,
}

impl ReceiptTotals {
    /// Sums every item's total cost, including lines with zero quantity.
    pub fn compute(items: &[SellableItem], fee_rate: FeeRate) -> Self {
        let total_cost: f64 = items
            .iter()
            .map(|item| item.selling_info.product_total_cost)
            .sum();
        let total_fee = fee_rate.fee_on(total_cost);
        Self {
            total_cost,
            total_fee,
            total_profit: total_cost - total_fee,
        }
    }
}

/// What the caller does when the player acts on a receipt.
pub trait SaleCallbacks {
    /// A monetary delta for the player's balance.
    fn on_balance_change(&mut self, amount: f64);

    /// The player confirmed the sale; `profit` is the net amount.
    fn on_confirm_sale(&mut self, profit: f64);
}

/// [`SaleCallbacks`] built from two closures.
pub struct FnCallbacks<B, C> {
    on_balance_change: B,
    on_confirm_sale: C,
}

impl<B, C> FnCallbacks<B, C>
where
    B: FnMut(f64),
    C: FnMut(f64),
{
    pub fn new(on_balance_change: B, on_confirm_sale: C) -> Self {
        Self {
            on_balance_change,
            on_confirm_sale,
        }
    }
}

impl<B, C> SaleCallbacks for FnCallbacks<B, C>
where
    B: FnMut(f64),
    C: FnMut(f64),
{
    fn on_balance_change(&mut self, amount: f64) {
        (self.on_balance_change)(amount)
    }

    fn on_confirm_sale(&mut self, profit: f64) {
        (self.on_confirm_sale)(profit)
    }
}

/// A computed receipt over a snapshot of the items being sold.
///
/// Totals are always derived: deserializing reads only the items and the fee
/// rate and recomputes the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ReceiptDoc")]
pub struct SellReceipt {
    items: Vec<SellableItem>,
    fee_rate: FeeRate,
    totals: ReceiptTotals,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReceiptDoc {
    items: Vec<SellableItem>,
    fee_rate: FeeRate,
}

impl From<ReceiptDoc> for SellReceipt {
    fn from(doc: ReceiptDoc) -> Self {
        Self::from_items(doc.items, doc.fee_rate)
    }
}

impl SellReceipt {
    pub fn compute(items: &[SellableItem], fee_rate: FeeRate) -> Self {
        Self::from_items(items.to_vec(), fee_rate)
    }

    pub fn from_items(items: Vec<SellableItem>, fee_rate: FeeRate) -> Self {
        let totals = ReceiptTotals::compute(&items, fee_rate);
        debug!(
            lines = items.len(),
            total_cost = totals.total_cost,
            total_fee = totals.total_fee,
            "Receipt computed"
        );
        Self {
            items,
            fee_rate,
            totals,
        }
    }

    pub fn items(&self) -> &[SellableItem] {
        &self.items
    }

    pub fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    pub fn totals(&self) -> ReceiptTotals {
        self.totals
    }

    pub fn total_cost(&self) -> f64 {
        self.totals.total_cost
    }

    pub fn total_fee(&self) -> f64 {
        self.totals.total_fee
    }

    pub fn total_profit(&self) -> f64 {
        self.totals.total_profit
    }

    /// The itemized list as shown to the player, in input order.
    ///
    /// Zero-quantity lines are hidden here but still counted in the totals.
    pub fn displayed_lines(&self) -> impl Iterator<Item = &SellableItem> {
        self.items.iter().filter(|item| item.is_displayed())
    }

    /// Commits the sale: calls `on_confirm_sale` once with the net profit.
    ///
    /// Returns the profit that was passed on.
    pub fn confirm<C>(&self, callbacks: &mut C) -> f64
    where
        C: SaleCallbacks + ?Sized,
    {
        let profit = self.totals.total_profit;
        debug!(profit, "Sale confirmed");
        callbacks.on_confirm_sale(profit);
        profit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[derive(Default)]
    struct Recorder {
        balance_changes: Vec<f64>,
        confirmed: Vec<f64>,
    }

    impl SaleCallbacks for Recorder {
        fn on_balance_change(&mut self, amount: f64) {
            self.balance_changes.push(amount);
        }

        fn on_confirm_sale(&mut self, profit: f64) {
            self.confirmed.push(profit);
        }
    }

    #[test]
    fn test_zero_quantity_line_counts_but_is_hidden() {
        let items = vec![
            SellableItem::new("A", 2, 1000.0),
            SellableItem::new("B", 0, 500.0),
        ];
        let receipt = SellReceipt::compute(&items, FeeRate::new(0.1));

        assert_close(receipt.total_cost(), 1500.0);
        assert_close(receipt.total_fee(), 150.0);
        assert_close(receipt.total_profit(), 1350.0);

        let shown: Vec<_> = receipt.displayed_lines().map(|i| i.product_name.as_str()).collect();
        assert_eq!(shown, vec!["A"]);
    }

    #[test]
    fn test_empty_sale_is_all_zero() {
        let totals = ReceiptTotals::compute(&[], FeeRate::new(0.2));
        assert_eq!(totals, ReceiptTotals::default());
    }

    #[test]
    fn test_no_fee_keeps_everything() {
        let receipt = SellReceipt::compute(&[SellableItem::new("C", 5, 10000.0)], FeeRate::ZERO);
        assert_eq!(receipt.total_fee(), 0.0);
        assert_eq!(receipt.total_profit(), 10000.0);
    }

    #[test]
    fn test_full_fee_leaves_nothing() {
        let receipt = SellReceipt::compute(&[SellableItem::new("D", 1, 100.0)], FeeRate::new(1.0));
        assert_eq!(receipt.total_fee(), 100.0);
        assert_eq!(receipt.total_profit(), 0.0);
    }

    #[test]
    fn test_fee_and_profit_stay_consistent_across_rates() {
        let items = vec![
            SellableItem::new("rice", 3, 1234.5),
            SellableItem::new("garlic", 1, 80.25),
            SellableItem::new("pepper", 0, 10.0),
        ];
        for rate in [0.0, 0.03, 0.25, 0.5, 0.99, 1.0] {
            let totals = ReceiptTotals::compute(&items, FeeRate::new(rate));
            assert_close(totals.total_cost, 1324.75);
            assert_close(totals.total_fee, rate * totals.total_cost);
            assert_close(totals.total_profit, totals.total_cost - totals.total_fee);
            assert!(totals.total_fee <= totals.total_cost);
            assert!(totals.total_profit >= 0.0);
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        let items = vec![SellableItem::new("rice", 4, 333.3), SellableItem::new("bean", 2, 0.7)];
        let first = SellReceipt::compute(&items, FeeRate::new(0.07));
        let second = SellReceipt::compute(&items, FeeRate::new(0.07));
        assert_eq!(first, second);
    }

    #[test]
    fn test_confirm_calls_back_once_with_profit() {
        let items = vec![SellableItem::new("A", 2, 1000.0), SellableItem::new("B", 0, 500.0)];
        let receipt = SellReceipt::compute(&items, FeeRate::new(0.1));
        let mut recorder = Recorder::default();

        let profit = receipt.confirm(&mut recorder);

        assert_close(profit, 1350.0);
        assert_eq!(recorder.confirmed, vec![profit]);
        assert!(recorder.balance_changes.is_empty());

        receipt.confirm(&mut recorder);
        assert_eq!(recorder.confirmed.len(), 2);
    }

    #[test]
    fn test_confirm_through_closures() {
        let receipt = SellReceipt::compute(&[SellableItem::new("C", 5, 10000.0)], FeeRate::ZERO);
        let mut confirmed = None;
        let mut balance_calls = 0;
        {
            let mut callbacks = FnCallbacks::new(|_| balance_calls += 1, |p| confirmed = Some(p));
            receipt.confirm(&mut callbacks);
        }
        assert_eq!(confirmed, Some(10000.0));
        assert_eq!(balance_calls, 0);
    }

    #[test]
    fn test_malformed_input_does_not_panic() {
        let items = vec![
            SellableItem::new("bad", 1, -50.0),
            SellableItem::new("worse", 1, f64::NAN),
        ];
        let totals = ReceiptTotals::compute(&items, FeeRate::new(1.5));
        assert!(totals.total_cost.is_nan());

        let negative = ReceiptTotals::compute(&[SellableItem::new("x", 1, 100.0)], FeeRate::new(-0.5));
        assert_close(negative.total_profit, 150.0);
        assert!(!FeeRate::new(-0.5).is_within_bounds());
    }

    #[test]
    fn test_deserialized_receipt_recomputes_totals() {
        let receipt: SellReceipt = toml::from_str(
            r#"
            feeRate = 0.1

            [[items]]
            productName = "rice"
            sellingInfo = { productQuantity = 2, productTotalCost = 1000.0 }

            [totals]
            totalCost = 1000.0
            totalFee = 0.0
            totalProfit = 99999.0
            "#,
        )
        .unwrap();

        assert_close(receipt.total_profit(), 900.0);
        let mut recorder = Recorder::default();
        receipt.confirm(&mut recorder);
        assert_eq!(recorder.confirmed.len(), 1);
        assert_close(recorder.confirmed[0], 900.0);
    }

    #[test]
    fn test_receipt_survives_serialization() {
        let receipt = SellReceipt::compute(
            &[SellableItem::new("rice", 2, 1000.0), SellableItem::new("barley", 0, 500.0)],
            FeeRate::new(0.1),
        );
        let encoded = toml::to_string(&receipt).unwrap();
        let decoded: SellReceipt = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, receipt);
    }

    #[test]
    fn test_fee_rate_displays_without_float_noise() {
        assert_eq!(FeeRate::new(0.07).to_string(), "7%");
        assert_eq!(FeeRate::new(0.125).to_string(), "12.5%");
        assert_eq!(FeeRate::new(1.0).to_string(), "100%");
        assert_eq!(FeeRate::ZERO.to_string(), "0%");
    }

    #[test]
    fn test_items_serialize_with_camel_case_fields() {
        let item = SellableItem::new("rice", 2, 1000.0);
        let encoded = toml::to_string(&item).unwrap();
        assert!(encoded.contains("productName = \"rice\""));
        assert!(encoded.contains("productQuantity = 2"));
        assert!(encoded.contains("productTotalCost = 1000.0"));
    }
}

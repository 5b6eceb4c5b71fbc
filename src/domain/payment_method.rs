use rust_decimal::Decimal;

/// Capability of settling a payment from the implementor's own funds.
pub trait PaymentMethod {
    fn process_payment(&mut self, amount: Decimal) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayPalAccount {
    email: String,
    balance: Decimal,
}

impl PayPalAccount {
    pub fn new(email: impl Into<String>, balance: Decimal) -> Self {
        Self {
            email: email.into(),
            balance,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }
}

impl PaymentMethod for PayPalAccount {
    fn process_payment(&mut self, amount: Decimal) -> bool {
        if amount > self.balance {
            return false;
        }
        self.balance -= amount;
        true
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn payment_is_bounded_by_balance() {
        let mut account = PayPalAccount::new("jane@example.com", dec!(100));

        assert!(account.process_payment(dec!(30)));
        assert_eq!(account.balance(), dec!(70));

        assert!(!account.process_payment(dec!(70.01)));
        assert_eq!(account.balance(), dec!(70));
        assert_eq!(account.email(), "jane@example.com");
    }

    #[test]
    fn usable_as_trait_object() {
        let mut account = PayPalAccount::new("jane@example.com", dec!(10));
        let method: &mut dyn PaymentMethod = &mut account;
        assert!(method.process_payment(dec!(10)));
        assert!(!method.process_payment(dec!(1)));
    }
}

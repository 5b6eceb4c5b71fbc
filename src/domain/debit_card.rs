use rust_decimal::Decimal;

use crate::domain::Card;

#[derive(Debug, Clone, PartialEq)]
pub struct DebitCard {
    customer: String,
    bank: String,
    account: String,
    balance: Decimal, // funds available for withdrawal
}

impl DebitCard {
    pub fn new(
        customer: impl Into<String>,
        bank: impl Into<String>,
        account: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        Self {
            customer: customer.into(),
            bank: bank.into(),
            account: account.into(),
            balance,
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn bank(&self) -> &str {
        &self.bank
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn withdraw(&mut self, amount: Decimal) -> bool {
        if amount > self.balance {
            return false;
        }
        self.balance -= amount;
        true
    }
}

impl Card for DebitCard {
    fn debit(&mut self, amount: Decimal) -> bool {
        self.withdraw(amount)
    }
}

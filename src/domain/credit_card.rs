use rust_decimal::Decimal;

/// Anything that can attempt to debit itself and report whether it succeeded.
pub trait Card {
    fn debit(&mut self, amount: Decimal) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreditCard {
    customer: String,
    bank: String,
    account: String,
    limit: Decimal,
    balance: Decimal, // never above limit for non-negative charges
}

impl CreditCard {
    pub fn new(
        customer: impl Into<String>,
        bank: impl Into<String>,
        account: impl Into<String>,
        limit: Decimal,
    ) -> Self {
        Self {
            customer: customer.into(),
            bank: bank.into(),
            account: account.into(),
            limit,
            balance: Decimal::ZERO,
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

    pub fn limit(&self) -> Decimal {
        self.limit
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Adds `price` to the balance unless that would exceed the limit.
    pub fn charge(&mut self, price: Decimal) -> bool {
        match self.balance.checked_add(price) {
            Some(new_balance) if new_balance <= self.limit => {
                self.balance = new_balance;
                true
            }
            _ => false,
        }
    }
}

impl Card for CreditCard {
    fn debit(&mut self, amount: Decimal) -> bool {
        self.charge(amount)
    }
}

/// A credit card that can carry a PIN. The PIN is never checked.
#[derive(Debug, Clone, PartialEq)]
pub struct SecureCreditCard {
    card: CreditCard,
    pin: Option<String>,
}

impl SecureCreditCard {
    pub fn new(
        customer: impl Into<String>,
        bank: impl Into<String>,
        account: impl Into<String>,
        limit: Decimal,
    ) -> Self {
        Self {
            card: CreditCard::new(customer, bank, account, limit),
            pin: None,
        }
    }

    pub fn set_pin(&mut self, pin: impl Into<String>) {
        self.pin = Some(pin.into());
    }

    pub fn pin(&self) -> Option<&str> {
        self.pin.as_deref()
    }

    pub fn credit_card(&self) -> &CreditCard {
        &self.card
    }

    pub fn charge(&mut self, price: Decimal) -> bool {
        self.card.charge(price)
    }
}

impl AsRef<CreditCard> for SecureCreditCard {
    fn as_ref(&self) -> &CreditCard {
        &self.card
    }
}

impl Card for SecureCreditCard {
    fn debit(&mut self, amount: Decimal) -> bool {
        self.charge(amount)
    }
}

/// A secure credit card that earns `price * rewards_rate` points per successful charge.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardCreditCard {
    card: SecureCreditCard,
    rewards_rate: Decimal,
    rewards: Decimal,
}

impl RewardCreditCard {
    pub fn new(
        customer: impl Into<String>,
        bank: impl Into<String>,
        account: impl Into<String>,
        limit: Decimal,
        rewards_rate: Decimal,
    ) -> Self {
        Self {
            card: SecureCreditCard::new(customer, bank, account, limit),
            rewards_rate,
            rewards: Decimal::ZERO,
        }
    }

    pub fn rewards_rate(&self) -> Decimal {
        self.rewards_rate
    }

    pub fn rewards(&self) -> Decimal {
        self.rewards
    }

    pub fn secure_card(&self) -> &SecureCreditCard {
        &self.card
    }

    pub fn secure_card_mut(&mut self) -> &mut SecureCreditCard {
        &mut self.card
    }

    pub fn credit_card(&self) -> &CreditCard {
        self.card.credit_card()
    }

    /// Charges the card and accrues rewards. An overflow in either declines
    /// the charge with nothing changed.
    pub fn charge(&mut self, price: Decimal) -> bool {
        let Some(rewards) = price
            .checked_mul(self.rewards_rate)
            .and_then(|earned| self.rewards.checked_add(earned))
        else {
            return false;
        };
        if !self.card.charge(price) {
            return false;
        }
        self.rewards = rewards;
        true
    }
}

impl AsRef<CreditCard> for RewardCreditCard {
    fn as_ref(&self) -> &CreditCard {
        self.credit_card()
    }
}

impl Card for RewardCreditCard {
    fn debit(&mut self, amount: Decimal) -> bool {
        self.charge(amount)
    }
}

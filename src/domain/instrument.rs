use rust_decimal::Decimal;

use crate::domain::{
    Card, CreditCard, DebitCard, Error, PayPalAccount, PaymentMethod, RewardCreditCard,
    SecureCreditCard,
};

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentInstrument {
    Credit(CreditCard),
    Secure(SecureCreditCard),
    Reward(RewardCreditCard),
    Debit(DebitCard),
    PayPal(PayPalAccount),
}

impl PaymentInstrument {
    pub fn kind(&self) -> &'static str {
        match self {
            PaymentInstrument::Credit(_) => "credit",
            PaymentInstrument::Secure(_) => "secure",
            PaymentInstrument::Reward(_) => "reward",
            PaymentInstrument::Debit(_) => "debit",
            PaymentInstrument::PayPal(_) => "paypal",
        }
    }

    /// The shared credit-card record for any card of the credit family.
    pub fn credit_card(&self) -> Option<&CreditCard> {
        match self {
            PaymentInstrument::Credit(card) => Some(card),
            PaymentInstrument::Secure(card) => Some(card.as_ref()),
            PaymentInstrument::Reward(card) => Some(card.as_ref()),
            PaymentInstrument::Debit(_) | PaymentInstrument::PayPal(_) => None,
        }
    }

    pub fn secure_card_mut(&mut self) -> Option<&mut SecureCreditCard> {
        match self {
            PaymentInstrument::Secure(card) => Some(card),
            PaymentInstrument::Reward(card) => Some(card.secure_card_mut()),
            _ => None,
        }
    }

    pub fn as_payment_method_mut(&mut self) -> Option<&mut dyn PaymentMethod> {
        match self {
            PaymentInstrument::PayPal(account) => Some(account),
            _ => None,
        }
    }

    pub fn balance(&self) -> Decimal {
        match self {
            PaymentInstrument::Debit(card) => card.balance(),
            PaymentInstrument::PayPal(account) => account.balance(),
            credit => credit
                .credit_card()
                .map(CreditCard::balance)
                .unwrap_or_default(),
        }
    }
}

/// Charges credit-family cards and withdraws from debit cards.
///
/// Returns `Ok(false)` when the card declines; any other instrument is an
/// [`Error::UnsupportedPaymentType`].
pub fn process_payment(instrument: &mut PaymentInstrument, amount: Decimal) -> Result<bool, Error> {
    match instrument {
        PaymentInstrument::Credit(card) => Ok(card.debit(amount)),
        PaymentInstrument::Secure(card) => Ok(card.debit(amount)),
        PaymentInstrument::Reward(card) => Ok(card.debit(amount)),
        PaymentInstrument::Debit(card) => Ok(card.debit(amount)),
        other => Err(Error::UnsupportedPaymentType(other.kind().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn debit_card_withdraws_through_dispatcher() {
        let mut debit =
            PaymentInstrument::Debit(DebitCard::new("Jane Roe", "ABC Bank", "4321", dec!(500)));

        assert!(process_payment(&mut debit, dec!(50)).unwrap());
        assert_eq!(debit.balance(), dec!(450));

        assert!(!process_payment(&mut debit, dec!(451)).unwrap());
        assert_eq!(debit.balance(), dec!(450));
    }

    #[test]
    fn credit_family_charges_through_dispatcher() {
        let mut reward = PaymentInstrument::Reward(RewardCreditCard::new(
            "John Doe",
            "XYZ Bank",
            "1234",
            dec!(1000),
            dec!(0.05),
        ));

        assert!(process_payment(&mut reward, dec!(200)).unwrap());
        assert!(!process_payment(&mut reward, dec!(900)).unwrap());

        match &reward {
            PaymentInstrument::Reward(card) => assert_eq!(card.rewards(), dec!(10)),
            other => panic!("unexpected instrument {:?}", other),
        }
        assert_eq!(reward.balance(), dec!(200));
    }

    #[test]
    fn paypal_is_unsupported_by_dispatcher() {
        let mut paypal = PaymentInstrument::PayPal(PayPalAccount::new("a@b.c", dec!(100)));

        let err = process_payment(&mut paypal, dec!(10)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedPaymentType(ref kind) if kind == "paypal"));
        assert_eq!(paypal.balance(), dec!(100));
    }

    #[test]
    fn only_paypal_exposes_payment_method() {
        let mut paypal = PaymentInstrument::PayPal(PayPalAccount::new("a@b.c", dec!(100)));
        let mut credit =
            PaymentInstrument::Credit(CreditCard::new("A", "B", "C", dec!(100)));

        assert!(paypal.as_payment_method_mut().unwrap().process_payment(dec!(40)));
        assert_eq!(paypal.balance(), dec!(60));
        assert!(credit.as_payment_method_mut().is_none());
    }

    #[test]
    fn pin_reaches_secure_and_reward_cards_only() {
        let mut secure =
            PaymentInstrument::Secure(SecureCreditCard::new("A", "B", "C", dec!(100)));
        let mut debit = PaymentInstrument::Debit(DebitCard::new("A", "B", "C", dec!(100)));

        secure.secure_card_mut().unwrap().set_pin("0000");
        assert_eq!(secure.secure_card_mut().unwrap().pin(), Some("0000"));
        assert!(debit.secure_card_mut().is_none());
        assert_eq!(secure.credit_card().unwrap().customer(), "A");
        assert!(debit.credit_card().is_none());
    }
}

use rust_decimal::Decimal;

use crate::domain::PaymentInstrument;

#[derive(Debug, Clone)]
pub enum OperationKind {
    Open(PaymentInstrument),
    Pay { amount: Decimal },
    Process { amount: Decimal },
    SetPin { pin: String },
}

#[derive(Debug, Clone)]
pub struct Operation {
    pub kind: OperationKind,
    pub card_id: u16,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            OperationKind::Open(instrument) => {
                write!(f, "{},card={}", instrument.kind(), self.card_id)
            }
            OperationKind::Pay { amount } => {
                write!(f, "pay,card={},amount={:.2}", self.card_id, amount)
            }
            OperationKind::Process { amount } => {
                write!(f, "process,card={},amount={:.2}", self.card_id, amount)
            }
            // never print the PIN itself
            OperationKind::SetPin { .. } => write!(f, "pin,card={}", self.card_id),
        }
    }
}

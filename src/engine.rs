use crate::domain::{
    Error, Operation, OperationKind, PaymentInstrument, process_payment,
    traits::{DeadLetterQueue, OperationStream, OutputRepository},
};

use futures::StreamExt;
use rust_decimal::Decimal;

#[derive(Debug)]
pub struct Engine<I, O, D>
where
    I: OperationStream,
    O: OutputRepository,
    D: DeadLetterQueue,
{
    ingestion: I,
    output_repository: O,
    dlq: D,
}

impl<I, O, D> Engine<I, O, D>
where
    I: OperationStream,
    O: OutputRepository,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, output_repository: O, dlq: D) -> Self {
        Self {
            ingestion,
            output_repository,
            dlq,
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut res = self.ingestion.stream();

        while let Some(op) = res.next().await {
            match op {
                Ok(op) => match self.apply_operation(op) {
                    Ok(()) => {}
                    Err(e) => self.dlq.report(&e),
                },
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn apply_operation(&mut self, op: Operation) -> Result<(), Error> {
        tracing::debug!(operation = %op, "applying operation");

        match op.kind {
            OperationKind::Open(instrument) => {
                self.output_repository.open_instrument(op.card_id, instrument)
            }
            OperationKind::Pay { amount } => self.pay(op.card_id, amount),
            OperationKind::Process { amount } => self.process_with_method(op.card_id, amount),
            OperationKind::SetPin { pin } => self.set_pin(op.card_id, pin),
        }
    }

    fn instrument(&mut self, card_id: u16) -> Result<&mut PaymentInstrument, Error> {
        self.output_repository
            .get_instrument_mut(card_id)
            .ok_or_else(|| Error::Engine(format!("Card {} not found", card_id)))
    }

    fn pay(&mut self, card_id: u16, amount: Decimal) -> Result<(), Error> {
        let instrument = self.instrument(card_id)?;

        if !process_payment(instrument, amount)? {
            return Err(Error::Engine(format!(
                "Card {} declined payment of {:.2}",
                card_id, amount
            )));
        }

        tracing::debug!(card_id, balance = %instrument.balance(), "payment applied");
        Ok(())
    }

    fn process_with_method(&mut self, card_id: u16, amount: Decimal) -> Result<(), Error> {
        let instrument = self.instrument(card_id)?;
        let kind = instrument.kind();

        let method = instrument.as_payment_method_mut().ok_or_else(|| {
            Error::Engine(format!(
                "Card {} ({}) is not a payment method",
                card_id, kind
            ))
        })?;

        if !method.process_payment(amount) {
            return Err(Error::Engine(format!(
                "Card {} declined payment of {:.2}",
                card_id, amount
            )));
        }
        Ok(())
    }

    fn set_pin(&mut self, card_id: u16, pin: String) -> Result<(), Error> {
        let instrument = self.instrument(card_id)?;
        let kind = instrument.kind();

        let card = instrument.secure_card_mut().ok_or_else(|| {
            Error::Engine(format!("Card {} ({}) does not take a PIN", card_id, kind))
        })?;
        card.set_pin(pin);
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.output_repository.flush()
    }
}

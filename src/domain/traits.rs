use futures::Stream;

use crate::domain::{Error, Operation, PaymentInstrument};

pub trait OperationStream {
    type OpStream: Stream<Item = Result<Operation, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::OpStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

pub trait OutputRepository {
    fn open_instrument(&mut self, card_id: u16, instrument: PaymentInstrument)
    -> Result<(), Error>;

    fn get_instrument_mut(&mut self, card_id: u16) -> Option<&mut PaymentInstrument>;

    fn flush(&mut self) -> Result<(), Error>;
}

use std::io::Read;
use std::pin::Pin;
use std::str::FromStr;

use futures::stream::{self, Stream};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::traits::OperationStream;
use crate::domain::{
    Amount, CreditCard, DebitCard, Error, Operation, OperationKind, PayPalAccount,
    PaymentInstrument, RewardCreditCard, SecureCreditCard,
};

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Ok(Self { reader: Some(rdr) })
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    card: u16,
    #[serde(default)]
    amount: Option<Amount>,
    #[serde(default)]
    holder: Option<String>,
    #[serde(default)]
    bank: Option<String>,
    #[serde(default)]
    account: Option<String>,
    #[serde(default)]
    extra: Option<String>,
}

fn required<T>(value: Option<T>, field: &str, kind: &str) -> Result<T, Error> {
    value.ok_or_else(|| Error::Ingestion(format!("Missing {} for {} row", field, kind)))
}

impl TryFrom<CsvRow> for Operation {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let name = row.kind.trim().to_ascii_lowercase();

        let kind = match name.as_str() {
            "credit" | "secure" | "reward" | "debit" => {
                let amount = required(row.amount, "amount", &name)?.value();
                let holder = required(row.holder, "holder", &name)?;
                let bank = required(row.bank, "bank", &name)?;
                let account = required(row.account, "account", &name)?;

                let instrument = match name.as_str() {
                    "credit" => {
                        PaymentInstrument::Credit(CreditCard::new(holder, bank, account, amount))
                    }
                    "secure" => {
                        let mut card = SecureCreditCard::new(holder, bank, account, amount);
                        if let Some(pin) = row.extra {
                            card.set_pin(pin);
                        }
                        PaymentInstrument::Secure(card)
                    }
                    "reward" => {
                        let rate = required(row.extra, "rewards rate", &name)?;
                        let rate = Decimal::from_str(&rate).map_err(|e| {
                            Error::Ingestion(format!("Invalid rewards rate {}: {}", rate, e))
                        })?;
                        if rate < Decimal::ZERO {
                            return Err(Error::Ingestion(format!(
                                "Negative rewards rate: {}",
                                rate
                            )));
                        }
                        PaymentInstrument::Reward(RewardCreditCard::new(
                            holder, bank, account, amount, rate,
                        ))
                    }
                    _ => PaymentInstrument::Debit(DebitCard::new(holder, bank, account, amount)),
                };
                OperationKind::Open(instrument)
            }
            "paypal" => {
                let balance = required(row.amount, "amount", &name)?.value();
                let email = required(row.extra, "email", &name)?;
                OperationKind::Open(PaymentInstrument::PayPal(PayPalAccount::new(email, balance)))
            }
            "pay" => OperationKind::Pay {
                amount: required(row.amount, "amount", &name)?.value(),
            },
            "process" => OperationKind::Process {
                amount: required(row.amount, "amount", &name)?.value(),
            },
            "pin" => OperationKind::SetPin {
                pin: required(row.extra, "pin", &name)?,
            },
            other => {
                return Err(Error::Ingestion(format!("Invalid operation type: {}", other)));
            }
        };

        Ok(Operation {
            kind,
            card_id: row.card,
        })
    }
}

impl<R: Read + Send + 'static> OperationStream for CsvReader<R> {
    type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        // Take ownership of the reader so the iterator we build owns all data and is 'static.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed; return an empty stream.
                return Box::pin(stream::iter(Vec::<Result<Operation, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Operation::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::io::Write;

use crate::domain::{Error, OutputRepository, PaymentInstrument};

#[derive(Default, Debug)]
pub struct StdOutOutput {
    instruments: BTreeMap<u16, PaymentInstrument>,
}

impl StdOutOutput {
    pub fn new() -> Self {
        Self {
            instruments: BTreeMap::new(),
        }
    }

    /// Writes one summary row per instrument, ordered by card id.
    pub fn write_summary<W: Write>(&self, mut out: W) -> Result<(), Error> {
        writeln!(out, "card,kind,holder,balance,limit,rewards")?;
        for (card_id, instrument) in &self.instruments {
            let (holder, limit, rewards) = match instrument {
                PaymentInstrument::Credit(card) => (card.customer(), Some(card.limit()), None),
                PaymentInstrument::Secure(card) => {
                    let card = card.credit_card();
                    (card.customer(), Some(card.limit()), None)
                }
                PaymentInstrument::Reward(card) => (
                    card.credit_card().customer(),
                    Some(card.credit_card().limit()),
                    Some(card.rewards()),
                ),
                PaymentInstrument::Debit(card) => (card.customer(), None, None),
                PaymentInstrument::PayPal(account) => (account.email(), None, None),
            };

            writeln!(
                out,
                "{},{},{},{:.2},{},{}",
                card_id,
                instrument.kind(),
                holder,
                instrument.balance(),
                limit.map(|v| format!("{:.2}", v)).unwrap_or_default(),
                rewards.map(|v| format!("{:.2}", v)).unwrap_or_default(),
            )?;
        }
        out.flush()?;
        Ok(())
    }
}

impl OutputRepository for StdOutOutput {
    fn open_instrument(
        &mut self,
        card_id: u16,
        instrument: PaymentInstrument,
    ) -> Result<(), Error> {
        match self.instruments.entry(card_id) {
            Entry::Vacant(e) => {
                e.insert(instrument);
                Ok(())
            }
            Entry::Occupied(_) => Err(Error::Engine(format!("Card {} already exists", card_id))),
        }
    }

    fn get_instrument_mut(&mut self, card_id: u16) -> Option<&mut PaymentInstrument> {
        self.instruments.get_mut(&card_id)
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.write_summary(std::io::stdout().lock())
    }
}

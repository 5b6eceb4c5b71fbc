pub mod credit_card;
pub mod debit_card;
pub mod error;
pub mod instrument;
pub mod money;
pub mod operation;
pub mod payment_method;
pub mod traits;

pub use credit_card::{Card, CreditCard, RewardCreditCard, SecureCreditCard};
pub use debit_card::DebitCard;
pub use error::Error;
pub use instrument::{PaymentInstrument, process_payment};
pub use money::Amount;
pub use operation::{Operation, OperationKind};
pub use payment_method::{PayPalAccount, PaymentMethod};
pub use traits::{DeadLetterQueue, OperationStream, OutputRepository};

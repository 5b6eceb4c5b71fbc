use crate::domain::{DeadLetterQueue, Error};

/// Reports rejected operations as `warn` events.
#[derive(Default, Debug)]
pub struct TracingDLQ {}

impl DeadLetterQueue for TracingDLQ {
    fn report(&self, error: &Error) {
        tracing::warn!(%error, "operation rejected");
    }
}

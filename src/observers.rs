use crate::events::LendingEvent;

/// Trait for lending activity observation
pub trait LendingObserver {
    /// Called after the service has applied (or refused) an operation
    fn on_event(&self, event: &LendingEvent);
}

/// Writes every lending event to the `tracing` log
#[derive(Debug, Default)]
pub struct TracingObserver;

impl LendingObserver for TracingObserver {
    fn on_event(&self, event: &LendingEvent) {
        match event {
            LendingEvent::BookAdded { isbn } => tracing::info!(%isbn, "book added"),
            LendingEvent::PatronRegistered { card_number } => {
                tracing::info!(%card_number, "patron registered");
            }
            LendingEvent::FeesSet { card_number, owed_fees } => {
                tracing::info!(%card_number, owed_fees, "fees updated");
            }
            LendingEvent::CheckedOut { isbn, card_number, date } => {
                tracing::info!(%isbn, %card_number, %date, "book checked out");
            }
            LendingEvent::CheckedIn { isbn, card_number, date } => {
                tracing::info!(%isbn, %card_number, %date, "book checked in");
            }
            LendingEvent::Rejected(error) => {
                tracing::warn!(kind = error.kind(), "{error}");
            }
        }
    }
}

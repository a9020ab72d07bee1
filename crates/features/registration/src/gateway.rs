//! The outbound seam for registrations.

use landing_domain::registration::RegistrationInput;
use std::borrow::Cow;
use std::future::Future;
use std::time::Duration;
use tracing::info;

#[landing_derive::landing_error]
pub enum GatewayError {
    #[error("Internal gateway error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Delivers a validated registration somewhere.
pub trait RegistrationGateway: Send + Sync + 'static {
    /// # Errors
    /// Returns a [`GatewayError`] if the registration could not be delivered.
    fn submit(
        &self,
        input: &RegistrationInput,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;
}

/// Stands in for a backend: waits for a fixed delay, logs the payload and succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl RegistrationGateway for SimulatedGateway {
    async fn submit(&self, input: &RegistrationInput) -> Result<(), GatewayError> {
        tokio::time::sleep(self.delay).await;
        info!(
            name = %input.name,
            email = %input.email,
            phone = %input.phone,
            country = %input.country,
            course = %input.course,
            source = %input.source,
            timestamp = %input.timestamp.to_rfc3339(),
            "Registration submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use landing_domain::registration::FormValues;

    #[tokio::test(start_paused = true)]
    async fn simulated_gateway_waits_then_succeeds() {
        let gateway = SimulatedGateway::default();
        let input = RegistrationInput::new(&FormValues::default(), Utc::now(), "c", "s");

        let started = tokio::time::Instant::now();
        gateway.submit(&input).await.unwrap();

        assert_eq!(started.elapsed(), Duration::from_millis(1500));
    }
}

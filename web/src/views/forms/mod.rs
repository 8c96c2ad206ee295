use dioxus::document;
use dioxus::prelude::dioxus_core::Task;
use dioxus::prelude::*;

mod create_espace;
pub use create_espace::CreateEspacePedagogique;

mod create_etudiant;
pub use create_etudiant::CreateEtudiant;

mod create_formateur;
pub use create_formateur::CreateFormateur;

/// Submission lifecycle of one creation form. The states are mutually
/// exclusive; a fresh component instance starts back at `Idle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    /// The submit control stays locked from the submit event until the
    /// modal closes, so one workflow can never post twice.
    pub fn locks_submit(&self) -> bool {
        matches!(self, SubmitState::Submitting | SubmitState::Succeeded(_))
    }
}

/// How long a success message stays on screen before the modal closes.
pub const SUCCESS_CLOSE_DELAY_MS: u32 = 2000;

/// Fire `on_success` once, after the fixed display delay.
///
/// Returns the running task so the form can cancel it on teardown: a
/// dismounted form must never invoke the close+reload callback.
pub fn schedule_success_close(on_success: EventHandler<()>) -> Task {
    spawn(async move {
        let js = format!("setTimeout(() => dioxus.send(true), {SUCCESS_CLOSE_DELAY_MS});");
        if document::eval(&js).recv::<bool>().await.is_ok() {
            on_success.call(());
        }
    })
}

/// Message shown for a failed submission: the platform's structured detail
/// when the server relayed one, the form's fixed fallback otherwise.
pub fn submission_error(err: &ServerFnError, fallback: &str) -> String {
    match err {
        ServerFnError::ServerError { message, .. } => message.clone(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_is_locked_while_in_flight_and_after_success() {
        assert!(!SubmitState::Idle.locks_submit());
        assert!(SubmitState::Submitting.locks_submit());
        assert!(SubmitState::Succeeded("ok".into()).locks_submit());
        assert!(!SubmitState::Failed("non".into()).locks_submit());
    }

    #[test]
    fn only_the_in_flight_state_reads_as_submitting() {
        assert!(SubmitState::Submitting.is_submitting());
        assert!(!SubmitState::Succeeded("ok".into()).is_submitting());
        assert!(!SubmitState::Failed("non".into()).is_submitting());
    }
}

use crate::error::ErrorInfo;
use crate::models::generation::GenerationResult;

/// Observable state of a generation request. Exactly one variant is active
/// at any time. Transitions within one invocation are monotonic
/// (Idle -> Pending -> Succeeded | Failed); a new trigger resets the state to
/// Pending, superseding any prior terminal value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestOutcome {
    #[default]
    Idle,
    Pending,
    Succeeded(GenerationResult),
    Failed(ErrorInfo),
}

impl RequestOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestOutcome::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RequestOutcome::Succeeded(_) | RequestOutcome::Failed(_)
        )
    }

    /// Renderable image references, present only in the Succeeded state.
    pub fn images(&self) -> Option<&[String]> {
        match self {
            RequestOutcome::Succeeded(result) => Some(&result.images),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            RequestOutcome::Failed(info) => Some(info),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn default_is_idle() {
        assert_eq!(RequestOutcome::default(), RequestOutcome::Idle);
    }

    #[test]
    fn accessors_match_variants() {
        let succeeded = RequestOutcome::Succeeded(GenerationResult {
            images: vec!["data:image/png;base64,AAA=".to_string()],
        });
        assert!(succeeded.is_terminal());
        assert_eq!(succeeded.images().unwrap().len(), 1);
        assert!(succeeded.error().is_none());

        let failed = RequestOutcome::Failed(ErrorInfo {
            kind: ErrorKind::Service,
            message: "Service error (status 500): boom".to_string(),
        });
        assert!(failed.is_terminal());
        assert!(failed.images().is_none());
        assert_eq!(failed.error().unwrap().kind, ErrorKind::Service);
    }
}

use thiserror::Error;

pub type CarbonitoResult<T> = Result<T, CarbonitoError>;

/// Every failure the client can hit. None of these ever crash the UI; the
/// chat turn converts them into a bot-authored message via `user_message`.
#[derive(Debug, Error)]
pub enum CarbonitoError {
    #[error("falha de rede: {0}")]
    Network(#[from] reqwest::Error),

    #[error("api retornou {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("resposta inválida da api: {0}")]
    Payload(String),

    #[error("erro de configuração: {0}")]
    Config(String),

    #[error("falha ao iniciar o log: {0}")]
    Logging(String),

    #[error("erro de terminal: {0}")]
    Terminal(#[from] std::io::Error),
}

impl CarbonitoError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        CarbonitoError::Config(msg.into())
    }

    /// User-facing text shown in the conversation when a turn fails.
    /// HTTP errors carry the `detail` reported by the service; everything
    /// else (no response at all, unreadable payload) falls back to the
    /// generic apology.
    pub fn user_message(&self) -> String {
        match self {
            CarbonitoError::Api { detail, .. } => format!(
                "Desculpe, houve um erro ao processar sua solicitação: {}. \
                 Por favor, tente novamente.",
                detail
            ),
            _ => "Desculpe, houve um erro desconhecido ao processar sua solicitação."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_carries_detail_in_user_message() {
        let err = CarbonitoError::Api {
            status: 422,
            detail: "bad input".to_string(),
        };
        assert!(err.user_message().contains("bad input"));
    }

    #[test]
    fn payload_error_uses_generic_fallback() {
        let err = CarbonitoError::Payload("campo answer ausente".to_string());
        assert_eq!(
            err.user_message(),
            "Desculpe, houve um erro desconhecido ao processar sua solicitação."
        );
    }
}

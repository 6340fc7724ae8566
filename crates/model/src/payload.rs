use serde::{Deserialize, Serialize};

/// The structured answer produced for one user turn.
///
/// Everything besides `message` is optional; the renderer displays the
/// fields it receives and never reinterprets them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResponsePayload {
    /// Primary text of the reply.
    pub message: String,
    /// Secondary text, rendered below the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Ordered follow-up options.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ReplyOption>,
    /// Marks the reply as an emergency notice.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub urgent: bool,
}

impl ResponsePayload {
    /// Creates a payload with the specified message and nothing else.
    #[inline]
    pub fn with_message<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            detail: None,
            options: vec![],
            urgent: false,
        }
    }

    /// Sets the secondary text.
    #[inline]
    pub fn with_detail<S: Into<String>>(mut self, detail: S) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Sets the follow-up options.
    #[inline]
    pub fn with_options(
        mut self,
        options: impl Into<Vec<ReplyOption>>,
    ) -> Self {
        self.options = options.into();
        self
    }

    /// Marks the payload as urgent.
    #[inline]
    pub fn with_urgency(mut self) -> Self {
        self.urgent = true;
        self
    }
}

/// A clickable follow-up embedded in a payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyOption {
    /// Takes the user somewhere: an in-app path or an external URI.
    Navigate {
        /// Display text.
        label: String,
        /// Where to go. See [`DestinationKind`] for the supported forms.
        destination: String,
    },
    /// Re-invokes the responder with the given intent key.
    Invoke {
        /// Display text.
        label: String,
        /// The intent key to resolve.
        intent: String,
    },
}

impl ReplyOption {
    /// Creates a navigation option.
    #[inline]
    pub fn navigate<L, D>(label: L, destination: D) -> Self
    where
        L: Into<String>,
        D: Into<String>,
    {
        Self::Navigate {
            label: label.into(),
            destination: destination.into(),
        }
    }

    /// Creates an intent-invocation option.
    #[inline]
    pub fn invoke<L, K>(label: L, intent: K) -> Self
    where
        L: Into<String>,
        K: Into<String>,
    {
        Self::Invoke {
            label: label.into(),
            intent: intent.into(),
        }
    }

    /// Returns the display text of this option.
    #[inline]
    pub fn label(&self) -> &str {
        match self {
            Self::Navigate { label, .. } | Self::Invoke { label, .. } => label,
        }
    }
}

/// How a frontend should dispatch a navigation destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DestinationKind {
    /// A `tel:` URI, handed to the dialer.
    Phone,
    /// A `https://wa.me/…` link.
    WhatsApp,
    /// A `mailto:` URI.
    Email,
    /// Any other `http(s)://` URL, opened externally.
    External,
    /// A relative path, navigated in-app.
    Internal,
}

impl DestinationKind {
    /// Classifies a destination string.
    pub fn of(destination: &str) -> Self {
        if destination.starts_with("tel:") {
            Self::Phone
        } else if destination.starts_with("https://wa.me/") {
            Self::WhatsApp
        } else if destination.starts_with("mailto:") {
            Self::Email
        } else if destination.starts_with("http://")
            || destination.starts_with("https://")
        {
            Self::External
        } else {
            Self::Internal
        }
    }
}

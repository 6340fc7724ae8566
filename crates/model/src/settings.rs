use serde::{Deserialize, Serialize};

/// Contact configuration supplied by the clinic.
///
/// Every field is optional; the responder substitutes a fixed fallback
/// for anything left unset, so an empty value (the [`Default`]) is always
/// usable. The settings are captured once when a conversation starts and
/// never change for its lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClinicSettings {
    /// Human-readable phone number, e.g. `(0212) 555 44 33`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_display: Option<String>,
    /// Dialable phone string used in `tel:` links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_dial: Option<String>,
    /// WhatsApp number; may contain separators, which are stripped
    /// before the number is embedded in a `wa.me` link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    /// Contact email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ClinicSettings {
    /// Sets the display phone number.
    #[inline]
    pub fn with_phone_display<S: Into<String>>(mut self, value: S) -> Self {
        self.phone_display = Some(value.into());
        self
    }

    /// Sets the dialable phone string.
    #[inline]
    pub fn with_phone_dial<S: Into<String>>(mut self, value: S) -> Self {
        self.phone_dial = Some(value.into());
        self
    }

    /// Sets the WhatsApp number.
    #[inline]
    pub fn with_whatsapp<S: Into<String>>(mut self, value: S) -> Self {
        self.whatsapp = Some(value.into());
        self
    }

    /// Sets the contact email address.
    #[inline]
    pub fn with_email<S: Into<String>>(mut self, value: S) -> Self {
        self.email = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_file() {
        let settings: ClinicSettings =
            serde_json::from_str(r#"{ "phone_display": "(0212) 111 22 33" }"#)
                .unwrap();
        assert_eq!(settings.phone_display.as_deref(), Some("(0212) 111 22 33"));
        assert_eq!(settings.email, None);
    }
}

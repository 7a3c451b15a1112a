//! Types for configuring the property layer.
//!
//! [`PropConfig`] holds the few knobs the property codec has: how
//! much data a single read may request, which encoding to treat
//! `STRING` properties as, and which event mask to send EWMH requests
//! with. Build one with [`PropConfigBuilder`], or use
//! [`PropConfig::new`] for the defaults.

use crate::x::core::{EventMask, XError};
use crate::x::encoding::Locale;
use crate::Result;

/// The default cap on the number of 32-bit units requested per read.
///
/// This is effectively "the whole property".
pub const DEFAULT_MAX_LONG_LENGTH: u32 = u32::MAX / 4;

/// The default mask EWMH requests are sent with.
pub const DEFAULT_CLIENT_MESSAGE_MASK: EventMask =
    EventMask::SUBSTRUCTURE_NOTIFY.union(EventMask::SUBSTRUCTURE_REDIRECT);

/// Configuration of the property codec.
///
/// # Example
///
/// ```rust
/// use wmprops::PropConfig;
///
/// let config = PropConfig::builder()
///     .max_long_length(4096)
///     .locale_encoding("ISO-8859-1")
///     .finish()
///     .expect("invalid config");
///
/// assert_eq!(config.max_long_length(), 4096);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PropConfig {
    /// The maximum number of 32-bit units a single read requests.
    /// Properties larger than this fail to read as malformed.
    pub(crate) max_long_length: u32,
    /// An encoding label overriding the locale detected from the
    /// environment for `STRING` properties.
    pub(crate) locale_encoding: Option<String>,
    /// The event mask client messages are sent to the root window with.
    pub(crate) client_message_mask: EventMask,
}

impl Default for PropConfig {
    fn default() -> Self {
        Self {
            max_long_length: DEFAULT_MAX_LONG_LENGTH,
            locale_encoding: None,
            client_message_mask: DEFAULT_CLIENT_MESSAGE_MASK,
        }
    }
}

impl PropConfig {
    /// Returns the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a [`PropConfigBuilder`] to build the config with the
    /// 'builder' idiom.
    pub fn builder() -> PropConfigBuilder {
        PropConfigBuilder::new()
    }

    /// Checks that the configuration can be used.
    pub fn validate(&self) -> Result<()> {
        if self.max_long_length == 0 {
            return Err(XError::InvalidConfig(
                "max_long_length must be greater than 0".into(),
            ));
        }
        if let Some(label) = &self.locale_encoding {
            if Locale::from_label(label).is_none() {
                return Err(XError::InvalidConfig(format!(
                    "unknown locale encoding {}",
                    label
                )));
            }
        }
        Ok(())
    }

    /// The maximum number of 32-bit units a single read requests.
    pub fn max_long_length(&self) -> u32 {
        self.max_long_length
    }

    /// The configured encoding label, if any.
    pub fn locale_encoding(&self) -> Option<&str> {
        self.locale_encoding.as_deref()
    }

    /// The mask client messages are sent with.
    pub fn client_message_mask(&self) -> EventMask {
        self.client_message_mask
    }

    /// Resolves the locale used for `STRING` properties.
    ///
    /// This uses the configured encoding if there is one,
    /// and the process environment otherwise.
    pub fn locale(&self) -> Result<Locale> {
        match &self.locale_encoding {
            Some(label) => Locale::from_label(label).ok_or_else(|| {
                XError::InvalidConfig(format!("unknown locale encoding {}", label))
            }),
            None => Ok(Locale::from_env()),
        }
    }
}

/// A builder for [`PropConfig`].
#[derive(Debug, Clone, Default)]
pub struct PropConfigBuilder {
    inner: PropConfig,
}

impl PropConfigBuilder {
    /// Creates a new builder with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of 32-bit units a single read requests.
    pub fn max_long_length(mut self, len: u32) -> Self {
        self.inner.max_long_length = len;
        self
    }

    /// Sets the encoding `STRING` properties are treated as.
    pub fn locale_encoding<S: Into<String>>(mut self, label: S) -> Self {
        self.inner.locale_encoding = Some(label.into());
        self
    }

    /// Sets the mask client messages are sent with.
    pub fn client_message_mask(mut self, mask: EventMask) -> Self {
        self.inner.client_message_mask = mask;
        self
    }

    /// Validates and returns the config.
    pub fn finish(self) -> Result<PropConfig> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PropConfig::new();
        config.validate().expect("default config should be valid");
        assert_eq!(config.client_message_mask(), DEFAULT_CLIENT_MESSAGE_MASK);
    }

    #[test]
    fn test_builder_rejects_bad_values() {
        let err = PropConfig::builder()
            .max_long_length(0)
            .finish()
            .expect_err("zero length should be rejected");
        assert!(matches!(err, XError::InvalidConfig(_)));

        assert!(PropConfig::builder()
            .locale_encoding("not-an-encoding")
            .finish()
            .is_err());
    }

    #[test]
    fn test_configured_locale_overrides_env() {
        let config = PropConfig::builder()
            .locale_encoding("koi8-r")
            .finish()
            .expect("valid config");

        assert_eq!(config.locale().expect("known").name(), "KOI8-R");
    }
}

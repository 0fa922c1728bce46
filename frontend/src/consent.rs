use log::warn;
use web_sys::{window, Storage};

pub const STORAGE_KEY: &str = "cookieConsent";

/// The visitor's answer to the cookie notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    Accepted,
    Declined,
}

impl ConsentChoice {
    pub fn as_stored(self) -> &'static str {
        match self {
            ConsentChoice::Accepted => "true",
            ConsentChoice::Declined => "false",
        }
    }

    /// Any non-empty value counts as a recorded answer; only `"false"` means
    /// the visitor declined.
    pub fn from_stored(value: &str) -> Option<ConsentChoice> {
        match value {
            "" => None,
            "false" => Some(ConsentChoice::Declined),
            _ => Some(ConsentChoice::Accepted),
        }
    }
}

/// The banner is only needed while no answer has been recorded.
pub fn banner_needed(choice: Option<ConsentChoice>) -> bool {
    choice.is_none()
}

fn storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Reads the stored choice. Called once at startup; the result is handed to
/// the app as a prop.
pub fn load() -> Option<ConsentChoice> {
    let value = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    ConsentChoice::from_stored(&value)
}

pub fn store(choice: ConsentChoice) {
    match storage() {
        Some(storage) => {
            if storage.set_item(STORAGE_KEY, choice.as_stored()).is_err() {
                warn!("Could not persist cookie consent");
            }
        }
        None => warn!("Local storage unavailable, cookie consent not persisted"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_parse() {
        assert_eq!(ConsentChoice::from_stored("true"), Some(ConsentChoice::Accepted));
        assert_eq!(ConsentChoice::from_stored("false"), Some(ConsentChoice::Declined));
        assert_eq!(ConsentChoice::from_stored(""), None);
    }

    #[test]
    fn any_other_stored_value_counts_as_answered() {
        for value in ["1", "yes", "TRUE"] {
            let choice = ConsentChoice::from_stored(value);
            assert_eq!(choice, Some(ConsentChoice::Accepted), "{}", value);
            assert!(!banner_needed(choice));
        }
    }

    #[test]
    fn choices_are_written_as_booleans() {
        for choice in [ConsentChoice::Accepted, ConsentChoice::Declined] {
            assert_eq!(ConsentChoice::from_stored(choice.as_stored()), Some(choice));
        }
    }

    #[test]
    fn declining_also_hides_the_banner() {
        assert!(banner_needed(None));
        assert!(!banner_needed(Some(ConsentChoice::Accepted)));
        assert!(!banner_needed(Some(ConsentChoice::Declined)));
    }
}

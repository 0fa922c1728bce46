use log::Level;

/// Build-time settings for the EmailJS relay. Every value can be overridden
/// through the matching `EMAILJS_*` environment variable when running trunk.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailRelayConfig {
    pub endpoint: &'static str,
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

pub fn email_relay() -> EmailRelayConfig {
    EmailRelayConfig {
        endpoint: option_env!("EMAILJS_ENDPOINT")
            .unwrap_or("https://api.emailjs.com/api/v1.0/email/send"),
        service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or("service_de78g3r"),
        template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or("template_885as7q"),
        public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or("FH02TVRRXIf4R4_Zu"),
    }
}

/// Inbox behind the contact section and the footer's email icon.
pub fn studio_email() -> &'static str {
    option_env!("STUDIO_EMAIL").unwrap_or("byteknoxstudios@gmail.com")
}

/// Address listed in the footer's Contact column.
pub fn studio_contact_email() -> &'static str {
    option_env!("STUDIO_CONTACT_EMAIL").unwrap_or("knoxbyte@gmail.com")
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_addresses() {
        if option_env!("STUDIO_EMAIL").is_none() {
            assert_eq!(studio_email(), "byteknoxstudios@gmail.com");
        }
        if option_env!("STUDIO_CONTACT_EMAIL").is_none() {
            assert_eq!(studio_contact_email(), "knoxbyte@gmail.com");
        }
        if option_env!("EMAILJS_ENDPOINT").is_none() {
            assert_eq!(
                email_relay().endpoint,
                "https://api.emailjs.com/api/v1.0/email/send"
            );
        }
    }
}

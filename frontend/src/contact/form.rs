use serde::Serialize;

/// Services a visitor can pick in the "Service Needed" dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceType {
    WebDevelopment,
    MobileApp,
    UiUx,
    Consulting,
    Other,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::WebDevelopment,
        ServiceType::MobileApp,
        ServiceType::UiUx,
        ServiceType::Consulting,
        ServiceType::Other,
    ];

    /// Value carried by the `<option>` and sent to the email template.
    pub fn value(self) -> &'static str {
        match self {
            ServiceType::WebDevelopment => "web-development",
            ServiceType::MobileApp => "mobile-app",
            ServiceType::UiUx => "ui-ux",
            ServiceType::Consulting => "consulting",
            ServiceType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceType::WebDevelopment => "Web Development",
            ServiceType::MobileApp => "Mobile App Development",
            ServiceType::UiUx => "UI/UX Design",
            ServiceType::Consulting => "Technical Consulting",
            ServiceType::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<ServiceType> {
        Self::ALL.into_iter().find(|service| service.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Service,
    Message,
}

/// Current contents of the contact form. Values are kept exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl FormData {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Service => self.service = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    pub fn service_type(&self) -> Option<ServiceType> {
        ServiceType::from_value(&self.service)
    }

    /// Mirrors the `required` constraints on the rendered inputs: every field
    /// must be non-empty and the service has to be one of the offered options.
    /// Email format is left to the browser's `type="email"` check.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.message.is_empty()
            && self.service_type().is_some()
    }

    pub fn clear(&mut self) {
        *self = FormData::default();
    }

    pub fn template_params(&self) -> TemplateParams {
        TemplateParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            service_type: self.service.clone(),
            message: self.message.clone(),
        }
    }
}

/// Variables consumed by the pre-configured email template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub service_type: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> FormData {
        let mut form = FormData::default();
        form.set(Field::Name, "Jane Doe".to_string());
        form.set(Field::Email, "jane@x.com".to_string());
        form.set(Field::Service, "web-development".to_string());
        form.set(Field::Message, "Need a site".to_string());
        form
    }

    #[test]
    fn last_write_wins_per_field() {
        let mut form = FormData::default();
        form.set(Field::Name, "J".to_string());
        form.set(Field::Email, "a@b.c".to_string());
        form.set(Field::Name, "Jane".to_string());
        form.set(Field::Message, "first".to_string());
        form.set(Field::Message, "second".to_string());

        assert_eq!(form.get(Field::Name), "Jane");
        assert_eq!(form.get(Field::Email), "a@b.c");
        assert_eq!(form.get(Field::Service), "");
        assert_eq!(form.get(Field::Message), "second");
    }

    #[test]
    fn complete_only_when_every_field_is_set() {
        assert!(filled().is_complete());
        assert!(!FormData::default().is_complete());

        for field in [Field::Name, Field::Email, Field::Service, Field::Message] {
            let mut form = filled();
            form.set(field, String::new());
            assert!(!form.is_complete(), "{:?} left empty", field);
        }
    }

    #[test]
    fn unknown_service_is_not_complete() {
        let mut form = filled();
        form.set(Field::Service, "blockchain".to_string());
        assert!(!form.is_complete());
    }

    #[test]
    fn email_format_is_not_checked() {
        let mut form = filled();
        form.set(Field::Email, "not-an-email".to_string());
        assert!(form.is_complete());
    }

    #[test]
    fn service_values_round_trip() {
        for service in ServiceType::ALL {
            assert_eq!(ServiceType::from_value(service.value()), Some(service));
        }
        assert_eq!(ServiceType::from_value(""), None);
    }

    #[test]
    fn template_params_use_template_field_names() {
        let json = serde_json::to_value(filled().template_params()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "from_name": "Jane Doe",
                "from_email": "jane@x.com",
                "service_type": "web-development",
                "message": "Need a site",
            })
        );
    }
}

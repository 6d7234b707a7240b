//! Registry entries.

use crate::{RegistrationError, ShowFn, WidthClass};

/// A registered type: name, optional show function, and width class.
///
/// `show` is present exactly when `width` is an inline class; float
/// descriptors are formatted by the renderer itself.
#[derive(Debug, Clone)]
pub struct Descriptor {
    name: String,
    show: Option<ShowFn>,
    width: WidthClass,
}

impl Descriptor {
    /// Create a descriptor, checking the name and show-function pairing.
    pub fn new(
        name: impl Into<String>,
        show: Option<ShowFn>,
        width: WidthClass,
    ) -> Result<Self, RegistrationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistrationError::EmptyName);
        }
        match (&show, width.uses_show_fn()) {
            (None, true) => Err(RegistrationError::MissingShowFn { name, width }),
            (Some(_), false) => Err(RegistrationError::UnexpectedShowFn { name }),
            _ => Ok(Self { name, show, width }),
        }
    }

    /// The registered type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The show function, if this is an inline descriptor.
    pub fn show(&self) -> Option<&ShowFn> {
        self.show.as_ref()
    }

    /// The width class.
    pub fn width(&self) -> WidthClass {
        self.width
    }
}

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const RECOMMEND_PATH: &str = "/recommend";

/// Characters escaped in a query component: everything but `A-Za-z0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Filter values read from the form. Empty inputs are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub material_type: Option<String>,
    pub recyclable: Option<String>,
    pub compostable: Option<String>,
}

impl Filter {
    pub fn from_values(
        material_type: impl Into<String>,
        recyclable: impl Into<String>,
        compostable: impl Into<String>,
    ) -> Self {
        Self {
            material_type: non_empty(material_type.into()),
            recyclable: non_empty(recyclable.into()),
            compostable: non_empty(compostable.into()),
        }
    }

    /// Builds `/recommend?` plus one `name=value&` pair per present field.
    /// Only the material type is percent-encoded.
    pub fn request_path(&self) -> String {
        let mut path = format!("{}?", RECOMMEND_PATH);

        if let Some(ref material_type) = self.material_type {
            path.push_str(&format!("material_type={}&", utf8_percent_encode(material_type, COMPONENT)));
        }
        if let Some(ref recyclable) = self.recyclable {
            path.push_str(&format!("recyclable={}&", recyclable));
        }
        if let Some(ref compostable) = self.compostable {
            path.push_str(&format!("compostable={}&", compostable));
        }

        path
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

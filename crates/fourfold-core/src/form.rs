use serde::{
  Deserialize,
  Deserializer,
  Serialize
};
use serde_json::{
  Map,
  Value
};
use tracing::{
  info,
  warn
};

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Serialize,
)]
#[serde(rename_all = "camelCase")]
pub struct DraftForm {
  pub username:  String,
  pub full_name: String,
  pub age:       String
}

#[derive(Deserialize)]
#[serde(
  rename_all = "camelCase",
  deny_unknown_fields
)]
struct DraftFields {
  username:  String,
  full_name: String,
  age:       String
}

// Only a JSON object with exactly the three string fields is
// a draft. The derived struct visitor would also take a
// three element array.
impl<'de> Deserialize<'de> for DraftForm {
  fn deserialize<D>(
    deserializer: D
  ) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>
  {
    let object =
      Map::<String, Value>::deserialize(
        deserializer
      )?;
    let fields: DraftFields =
      serde_json::from_value(
        Value::Object(object)
      )
      .map_err(serde::de::Error::custom)?;

    Ok(Self {
      username:  fields.username,
      full_name: fields.full_name,
      age:       fields.age
    })
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct SubmittedForm(pub DraftForm);

impl SubmittedForm {
  pub fn record(&self) -> &DraftForm {
    &self.0
  }

  pub fn summary_lines(
    &self
  ) -> [(&'static str, &str); 3] {
    [
      ("UserName", self.0.username.as_str()),
      (
        "FullName",
        self.0.full_name.as_str()
      ),
      ("Age", self.0.age.as_str())
    ]
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
)]
pub enum FormField {
  Username,
  FullName,
  Age
}

impl FormField {
  pub const ALL: [FormField; 3] = [
    FormField::Username,
    FormField::FullName,
    FormField::Age
  ];

  pub fn name(self) -> &'static str {
    match self {
      | FormField::Username => "username",
      | FormField::FullName => "fullName",
      | FormField::Age => "age"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | FormField::Username => "Username:",
      | FormField::FullName => {
        "Full Name:"
      }
      | FormField::Age => "Age:"
    }
  }

  pub fn from_name(
    name: &str
  ) -> Option<Self> {
    Self::ALL
      .into_iter()
      .find(|field| field.name() == name)
  }
}

impl DraftForm {
  pub fn get(
    &self,
    field: FormField
  ) -> &str {
    match field {
      | FormField::Username => {
        &self.username
      }
      | FormField::FullName => {
        &self.full_name
      }
      | FormField::Age => &self.age
    }
  }

  pub fn set(
    &mut self,
    field: FormField,
    value: impl Into<String>
  ) {
    let slot = match field {
      | FormField::Username => {
        &mut self.username
      }
      | FormField::FullName => {
        &mut self.full_name
      }
      | FormField::Age => &mut self.age
    };
    *slot = value.into();
  }
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct ProfileForm {
  pub draft:     DraftForm,
  pub submitted: Option<SubmittedForm>
}

impl ProfileForm {
  pub fn new(
    draft: DraftForm,
    submitted: Option<SubmittedForm>
  ) -> Self {
    Self {
      draft,
      submitted
    }
  }

  pub fn update_field(
    &mut self,
    field: FormField,
    value: impl Into<String>
  ) {
    self.draft.set(field, value);
  }

  pub fn update_named(
    &mut self,
    name: &str,
    value: impl Into<String>
  ) -> bool {
    match FormField::from_name(name) {
      | Some(field) => {
        self.update_field(field, value);
        true
      }
      | None => {
        warn!(
          field = name,
          "ignored update for unknown \
           form field"
        );
        false
      }
    }
  }

  pub fn submit(
    &mut self
  ) -> &SubmittedForm {
    let snapshot =
      SubmittedForm(self.draft.clone());
    info!(
      username = %snapshot.0.username,
      full_name = %snapshot.0.full_name,
      age = %snapshot.0.age,
      "form submitted"
    );
    self.submitted.insert(snapshot)
  }
}

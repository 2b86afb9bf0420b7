use super::*;
use crate::builtin_profile;

#[test]
fn locale_as_str_matches_iso_code() {
    assert_eq!(Locale::En.as_str(), "en");
    assert_eq!(Locale::Fr.as_str(), "fr");
    assert_eq!(Locale::Fr.to_string(), "fr");
}

#[test]
fn locale_from_str_is_case_insensitive() {
    assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
    assert_eq!(" fr ".parse::<Locale>().unwrap(), Locale::Fr);
}

#[test]
fn locale_from_str_rejects_unknown() {
    let err = "de".parse::<Locale>().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownLocale(ref v) if v == "de"));
}

#[test]
fn localized_value_get_projects_locale() {
    let value = LocalizedValue::new("Hello", "Bonjour");
    assert_eq!(value.get(Locale::En), "Hello");
    assert_eq!(value.get(Locale::Fr), "Bonjour");
}

#[test]
fn localized_value_uniform_copies_value() {
    let value = LocalizedValue::uniform("QC");
    assert_eq!(value.en, "QC");
    assert_eq!(value.fr, "QC");
}

#[test]
fn field_key_as_str_matches_serde_name() {
    for key in FieldKey::ALL {
        let json = serde_json::to_value(key).unwrap();
        assert_eq!(json, serde_json::Value::String(key.as_str().to_string()));
    }
}

#[test]
fn field_set_serializes_every_key() {
    let fields = builtin_profile().fields;
    let json = serde_json::to_value(&fields).unwrap();
    let object = json.as_object().expect("field set serializes as an object");
    assert_eq!(object.len(), FieldKey::ALL.len());
    for key in FieldKey::ALL {
        assert!(object.contains_key(key.as_str()), "missing {key}");
    }
}

#[test]
fn field_set_set_replaces_only_one_key() {
    let mut fields = builtin_profile().fields;
    let before = fields.clone();
    fields.set(FieldKey::Telephone, LocalizedValue::uniform("555"));

    assert_eq!(fields.value(FieldKey::Telephone, Locale::Fr), "555");
    for key in FieldKey::ALL {
        if key != FieldKey::Telephone {
            assert_eq!(fields.get(key), before.get(key), "{key} changed");
        }
    }
}

#[test]
fn field_set_rejects_unknown_keys() {
    let mut json = serde_json::to_value(builtin_profile().fields).unwrap();
    json["fax"] = serde_json::json!({ "en": "1", "fr": "1" });
    assert!(serde_json::from_value::<FieldSet>(json).is_err());
}

#[test]
fn field_set_requires_every_key() {
    let mut json = serde_json::to_value(builtin_profile().fields).unwrap();
    json.as_object_mut().unwrap().remove("openingHours_Su");
    assert!(serde_json::from_value::<FieldSet>(json).is_err());
}

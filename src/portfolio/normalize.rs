use serde_json::Value;

use super::{DataError, PortfolioRecord};

/// Coerces the loosely-typed leaves of a raw document into a [`PortfolioRecord`].
///
/// `languages[*].level` may be a number or a numeric string and must land in
/// 0-100. `experiences[*].current` may be a boolean or a truthy string. Values
/// already of the right type pass through untouched, so running a normalized
/// document through again yields the same record.
pub fn normalize(mut raw: Value) -> Result<PortfolioRecord, DataError> {
    // older data files carry a single education object
    if let Some(education) = raw.get_mut("education") {
        if education.is_object() {
            let single = education.take();
            *education = Value::Array(vec![single]);
        }
    }

    if let Some(languages) = raw.get_mut("languages").and_then(Value::as_array_mut) {
        for (i, language) in languages.iter_mut().enumerate() {
            if let Some(level) = language.get_mut("level") {
                let coerced = coerce_level(&format!("languages[{i}].level"), level)?;
                *level = Value::from(coerced);
            }
        }
    }

    if let Some(experiences) = raw.get_mut("experiences").and_then(Value::as_array_mut) {
        for (i, experience) in experiences.iter_mut().enumerate() {
            if let Some(current) = experience.get_mut("current") {
                let coerced = coerce_flag(&format!("experiences[{i}].current"), current)?;
                *current = Value::Bool(coerced);
            }
        }
    }

    serde_json::from_value(raw).map_err(|e| DataError::Shape(e.to_string()))
}

fn coerce_level(path: &str, value: &Value) -> Result<f64, DataError> {
    let level = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| DataError::Coerce {
        path: path.to_string(),
        expected: "a number",
        found: value.to_string(),
    })?;
    // also rejects NaN
    if !(0.0..=100.0).contains(&level) {
        return Err(DataError::LevelRange {
            path: path.to_string(),
            value: level,
        });
    }
    Ok(level)
}

fn coerce_flag(path: &str, value: &Value) -> Result<bool, DataError> {
    let flag = match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    };
    flag.ok_or_else(|| DataError::Coerce {
        path: path.to_string(),
        expected: "a boolean",
        found: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(level: Value, current: Value) -> Value {
        json!({
            "personal": {
                "name": "Jane Doe",
                "title": "Software Engineer",
                "bio": ["First paragraph.", "Second paragraph."],
                "email": "jane@example.com",
                "phone": "",
                "location": "Singapore",
                "github": "https://github.com/jane",
                "linkedin": "https://linkedin.com/in/jane"
            },
            "education": [{
                "institution": "Some University",
                "location": "Singapore",
                "degree": "B.Sc. Computer Science",
                "period": "2020 - 2024",
                "achievements": ["Dean's list"]
            }],
            "languages": [
                { "name": "Rust", "level": level, "badge": "🦀" },
                { "name": "Python", "level": 90, "badge": "🐍" }
            ],
            "frameworks": [{ "name": "Leptos", "category": "Frontend", "color": "red" }],
            "tools": [{ "name": "Git", "icon": "GitBranch" }],
            "interests": [{ "icon": "Heart", "label": "Hobby", "value": "Climbing" }],
            "skills": [{ "icon": "Code2", "label": "Backend", "color": "blue" }],
            "exploring": [{ "name": "WebAssembly", "color": "purple" }],
            "experiences": [
                {
                    "company": "Acme",
                    "location": "Remote",
                    "role": "Engineer",
                    "period": "2024 - Present",
                    "current": current,
                    "responsibilities": ["Build things", "Fix things"],
                    "skills": ["Rust"],
                    "logo": "🏢"
                },
                {
                    "company": "Initech",
                    "location": "Austin",
                    "role": "Intern",
                    "period": "2023",
                    "current": false,
                    "responsibilities": ["Learn things"],
                    "logo": "🏭"
                }
            ],
            "projects": [{
                "title": "Site",
                "description": "This site",
                "period": "2025",
                "technologies": ["Rust"],
                "features": ["Fast"],
                "gradient": "from-blue-500 to-purple-600",
                "icon": "🌐"
            }],
            "certifications": [{
                "title": "Cloud Practitioner",
                "provider": "AWS",
                "date": "2025",
                "description": "Cloud basics",
                "skills": ["AWS"],
                "link": "https://example.com/cert",
                "gradient": "from-orange-500 to-red-600",
                "icon": "☁️"
            }],
            "stats": {
                "experience": "2+",
                "projects": "10+",
                "certifications": "5",
                "commitment": "100%"
            }
        })
    }

    #[test]
    fn test_numeric_string_level_is_parsed() {
        let record = normalize(document(json!("80"), json!(true))).unwrap();
        assert_eq!(record.languages[0].level, 80.0);
        assert_eq!(record.languages[1].level, 90.0);

        let record = normalize(document(json!(" 72.5 "), json!(true))).unwrap();
        assert_eq!(record.languages[0].level, 72.5);
    }

    #[test]
    fn test_typed_values_pass_through() {
        let typed = normalize(document(json!(80), json!(true))).unwrap();
        let from_strings = normalize(document(json!("80"), json!("true"))).unwrap();
        assert_eq!(typed, from_strings);

        // a normalized record fed back in comes out unchanged
        let again = normalize(serde_json::to_value(&typed).unwrap()).unwrap();
        assert_eq!(typed, again);
    }

    #[test]
    fn test_truthy_strings_become_booleans() {
        for (input, expected) in [
            ("true", true),
            ("false", false),
            ("TRUE", true),
            (" yes ", true),
            ("no", false),
            ("1", true),
            ("0", false),
        ] {
            let record = normalize(document(json!(50), json!(input))).unwrap();
            assert_eq!(record.experiences[0].current, expected, "input {input:?}");
        }
    }

    #[test]
    fn test_missing_current_defaults_to_false() {
        let mut raw = document(json!(50), json!(true));
        raw["experiences"][1]
            .as_object_mut()
            .unwrap()
            .remove("current");
        let record = normalize(raw).unwrap();
        assert!(record.experiences[0].current);
        assert!(!record.experiences[1].current);
    }

    #[test]
    fn test_unparseable_level_names_the_field() {
        let err = normalize(document(json!("eighty"), json!(true))).unwrap_err();
        assert_eq!(
            err,
            DataError::Coerce {
                path: "languages[0].level".to_string(),
                expected: "a number",
                found: "\"eighty\"".to_string(),
            }
        );
        assert!(err.to_string().starts_with("languages[0].level:"));

        let err = normalize(document(json!(null), json!(true))).unwrap_err();
        assert!(matches!(err, DataError::Coerce { .. }));
    }

    #[test]
    fn test_level_out_of_range_is_rejected() {
        for bad in [json!(101), json!("-1"), json!("NaN"), json!("inf")] {
            let err = normalize(document(bad.clone(), json!(true))).unwrap_err();
            assert!(
                matches!(err, DataError::LevelRange { ref path, .. } if path == "languages[0].level"),
                "input {bad}"
            );
        }
        assert!(normalize(document(json!(0), json!(true))).is_ok());
        assert!(normalize(document(json!("100"), json!(true))).is_ok());
    }

    #[test]
    fn test_unparseable_flag_names_the_field() {
        let err = normalize(document(json!(50), json!("maybe"))).unwrap_err();
        assert!(matches!(
            err,
            DataError::Coerce { ref path, expected: "a boolean", .. } if path == "experiences[0].current"
        ));

        let err = normalize(document(json!(50), json!(1))).unwrap_err();
        assert!(matches!(err, DataError::Coerce { .. }));
    }

    #[test]
    fn test_single_education_object_becomes_list() {
        let mut raw = document(json!(50), json!(true));
        let single = raw["education"][0].take();
        raw["education"] = single;
        let record = normalize(raw).unwrap();
        assert_eq!(record.education.len(), 1);
        assert_eq!(record.education[0].institution, "Some University");
    }

    #[test]
    fn test_missing_required_field_is_shape_error() {
        let mut raw = document(json!(50), json!(true));
        raw.as_object_mut().unwrap().remove("stats");
        let err = normalize(raw).unwrap_err();
        assert!(matches!(err, DataError::Shape(_)));
    }

    #[test]
    fn test_list_order_is_preserved() {
        let record = normalize(document(json!(50), json!(true))).unwrap();
        let companies = record
            .experiences
            .iter()
            .map(|e| e.company.as_str())
            .collect::<Vec<_>>();
        assert_eq!(companies, vec!["Acme", "Initech"]);
        assert_eq!(
            record.personal.bio,
            vec!["First paragraph.".to_string(), "Second paragraph.".to_string()]
        );
    }
}

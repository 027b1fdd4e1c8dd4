// Path templates such as `/doctor/appointments/{id}`

use std::collections::BTreeMap;

use crate::error::{TableError, UrlError};

/// Parameters bound from a matched request path, keyed by placeholder name.
///
/// Values are the raw path segment: not percent-decoded, not type-checked.
pub type Params = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    template: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(template: &str) -> Result<Self, TableError> {
        let invalid = |reason: &str| TableError::InvalidPattern {
            template: template.to_string(),
            reason: reason.to_string(),
        };

        let rest = template
            .strip_prefix('/')
            .ok_or_else(|| invalid("must start with '/'"))?;

        let mut segments = Vec::new();
        for raw in split_segments(rest) {
            if let Some(inner) = raw.strip_prefix('{') {
                let name = inner
                    .strip_suffix('}')
                    .ok_or_else(|| invalid("unterminated parameter"))?;
                if !is_identifier(name) {
                    return Err(invalid("parameter name must be an identifier"));
                }
                if segments
                    .iter()
                    .any(|s| matches!(s, Segment::Param(existing) if existing == name))
                {
                    return Err(invalid("parameter name repeated"));
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                if raw.contains('{') || raw.contains('}') {
                    return Err(invalid("parameter must span a whole segment"));
                }
                if raw.is_empty() {
                    return Err(invalid("empty segment"));
                }
                segments.push(Segment::Literal(raw.to_string()));
            }
        }

        Ok(Self {
            template: template.to_string(),
            segments,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Literal segments as-is, parameters collapsed to `None`. Two patterns with
    /// the same shape match exactly the same requests.
    pub fn shape(&self) -> Vec<Option<String>> {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Literal(text) => Some(text.clone()),
                Segment::Param(_) => None,
            })
            .collect()
    }

    pub fn has_parameters(&self) -> bool {
        self.parameter_names().next().is_some()
    }

    /// Match a request path, returning the bound parameters on success.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let rest = path.strip_prefix('/')?;
        let mut params = Params::new();
        let mut request = split_segments(rest);

        for segment in &self.segments {
            let actual = request.next()?;
            match segment {
                Segment::Literal(expected) if expected == actual => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) if actual.is_empty() => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), actual.to_string());
                }
            }
        }

        // Leftover segments (including a trailing empty one) mean no match
        if request.next().is_some() {
            return None;
        }
        Some(params)
    }

    /// Build a concrete path from this template.
    pub fn format(&self, route: &str, params: &Params) -> Result<String, UrlError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| UrlError::MissingParameter {
                            route: route.to_string(),
                            parameter: name.clone(),
                        })?;
                    path.push_str(value);
                }
            }
        }
        Ok(path)
    }
}

/// `""` yields no segments so that `/` is the empty path; anything else is a
/// plain split, which keeps a trailing empty segment for `a/b/`.
fn split_segments(rest: &str) -> impl Iterator<Item = &str> {
    let mut iter = rest.split('/');
    if rest.is_empty() {
        iter.next();
    }
    iter
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_matches_only_root() {
        let pattern = PathPattern::parse("/").unwrap();
        assert_eq!(pattern.matches("/"), Some(Params::new()));
        assert_eq!(pattern.matches("/login"), None);
        assert_eq!(pattern.matches(""), None);
    }

    #[test]
    fn test_literal_match_is_exact() {
        let pattern = PathPattern::parse("/admin/doctors").unwrap();
        assert!(pattern.matches("/admin/doctors").is_some());
        assert!(pattern.matches("/admin/doctors/").is_none());
        assert!(pattern.matches("/admin/Doctors").is_none());
        assert!(pattern.matches("/admin/doctors/add").is_none());
        assert!(pattern.matches("/admin").is_none());
    }

    #[test]
    fn test_parameter_binding() {
        let pattern = PathPattern::parse("/doctor/appointments/{id}").unwrap();

        let params = pattern.matches("/doctor/appointments/42").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("42"));

        // Value is not type-checked
        let params = pattern.matches("/doctor/appointments/abc-def").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("abc-def"));
    }

    #[test]
    fn test_parameter_requires_non_empty_segment() {
        let pattern = PathPattern::parse("/doctor/appointments/{id}").unwrap();
        assert!(pattern.matches("/doctor/appointments/").is_none());
        assert!(pattern.matches("/doctor/appointments").is_none());
        assert!(pattern.matches("/doctor/appointments/42/edit").is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_templates() {
        for template in [
            "login",
            "/doctor/{id",
            "/doctor/x{id}",
            "/doctor/{1abc}",
            "/a/{id}/b/{id}",
            "/a//b",
        ] {
            let result = PathPattern::parse(template);
            assert!(
                matches!(result, Err(TableError::InvalidPattern { .. })),
                "expected {} to be rejected",
                template
            );
        }
    }

    #[test]
    fn test_parameter_names() {
        let pattern = PathPattern::parse("/doctor/appointments/{id}").unwrap();
        assert_eq!(pattern.parameter_names().collect::<Vec<_>>(), vec!["id"]);
        assert!(pattern.has_parameters());
        assert!(!PathPattern::parse("/login").unwrap().has_parameters());
    }

    #[test]
    fn test_shape_ignores_parameter_names() {
        let by_id = PathPattern::parse("/doctor/a/{id}").unwrap();
        let by_key = PathPattern::parse("/doctor/a/{key}").unwrap();
        assert_eq!(by_id.shape(), by_key.shape());
        assert_eq!(
            by_id.shape(),
            vec![Some("doctor".to_string()), Some("a".to_string()), None]
        );

        let literal = PathPattern::parse("/doctor/a/id").unwrap();
        assert_ne!(by_id.shape(), literal.shape());
    }

    #[test]
    fn test_format() {
        let pattern = PathPattern::parse("/doctor/appointments/{id}").unwrap();
        let mut params = Params::new();
        params.insert("id".to_string(), "7".to_string());
        assert_eq!(
            pattern.format("doctor.appointment-details", &params).unwrap(),
            "/doctor/appointments/7"
        );

        let err = pattern
            .format("doctor.appointment-details", &Params::new())
            .unwrap_err();
        assert!(matches!(
            err,
            UrlError::MissingParameter { ref parameter, .. } if parameter == "id"
        ));

        let root = PathPattern::parse("/").unwrap();
        assert_eq!(root.format("home", &Params::new()).unwrap(), "/");
    }
}
